//! Event selection among the records eligible at an age

use crate::config::EventRecord;
use crate::error::{LifeGameError, Result};
use crate::event::Catalog;
use rand::Rng;

/// Source of the index used to choose one eligible event.
///
/// Only consulted when at least one event is eligible.
pub trait EventPicker {
    fn pick(&mut self, candidates: usize) -> usize;
}

/// Always picks the given index; out-of-range values are rejected by
/// [`select_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPick(pub usize);

impl EventPicker for FixedPick {
    #[inline]
    fn pick(&mut self, _candidates: usize) -> usize {
        self.0
    }
}

/// Uniform pick driven by a random number generator
pub struct RandomPick<'a, R: Rng + ?Sized>(pub &'a mut R);

impl<R: Rng + ?Sized> EventPicker for RandomPick<'_, R> {
    #[inline]
    fn pick(&mut self, candidates: usize) -> usize {
        self.0.gen_range(0..candidates)
    }
}

/// Select one event eligible at `age`, or `None` if nothing is eligible
pub fn select_event<'a, P: EventPicker + ?Sized>(
    catalog: &'a Catalog,
    age: i32,
    picker: &mut P,
) -> Result<Option<&'a EventRecord>> {
    let eligible = catalog.eligible(age);
    if eligible.is_empty() {
        return Ok(None);
    }

    let index = picker.pick(eligible.len());
    eligible.get(index).copied().map(Some).ok_or_else(|| {
        LifeGameError::InvalidInput(format!(
            "selection index {} out of range for {} eligible events",
            index,
            eligible.len()
        ))
    })
}
