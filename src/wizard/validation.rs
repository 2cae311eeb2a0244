//! Completion rules gating forward movement through the wizard.

use super::draft::TripDraft;
use super::steps::StepId;

/// Returns whether `draft` carries everything `step` needs before advancing.
///
/// Dates are free-form text: neither format nor ordering is checked.
pub fn is_step_satisfied(step: StepId, draft: &TripDraft) -> bool {
    match step {
        StepId::Destination => !draft.destination().is_empty(),
        StepId::Dates => !draft.start_date().is_empty() && !draft.end_date().is_empty(),
        StepId::Travelers => draft.travel_type().is_some(),
        // Budget always carries a value.
        StepId::Budget => true,
        StepId::Review => true,
    }
}

/// Human-readable reason a step is still blocking, if it is.
pub fn missing_requirement(step: StepId, draft: &TripDraft) -> Option<&'static str> {
    if is_step_satisfied(step, draft) {
        return None;
    }
    match step {
        StepId::Destination => Some("Choose a destination to continue."),
        StepId::Dates if draft.start_date().is_empty() && draft.end_date().is_empty() => {
            Some("Enter a start and end date to continue.")
        }
        StepId::Dates if draft.start_date().is_empty() => Some("Enter a start date to continue."),
        StepId::Dates => Some("Enter an end date to continue."),
        StepId::Travelers => Some("Select a travel group to continue."),
        StepId::Budget | StepId::Review => None,
    }
}
