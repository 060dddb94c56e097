//! Event effect application

use crate::config::EventRecord;
use crate::property::SimulationState;

/// Apply an event's effects to `state`.
///
/// Employment is set before it is cleared, so an event carrying both
/// `employment` and `unemployment` leaves the player without a job.
/// Blank labels are no-ops.
pub fn apply_event(state: &mut SimulationState, event: &EventRecord) {
    state.add_money(event.money_delta);

    if let Some(job) = event.employment() {
        state.set_employment(job);
    }
    if event.clears_employment {
        state.clear_employment();
    }

    if let Some(item) = event.granted() {
        state.grant_item(item);
    }
    if let Some(item) = event.removed() {
        state.remove_item(item);
    }

    if let Some(name) = event.joined() {
        state.join_companion(name);
    }
    if let Some(name) = event.departed() {
        state.depart_companion(name);
    }
}
