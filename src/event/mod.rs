//! Event catalog, selection and effect processing

mod catalog;
mod processor;
pub mod selector;

#[cfg(test)]
mod property_tests;

pub use catalog::*;
pub use processor::*;
pub use selector::*;
