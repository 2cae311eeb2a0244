//! Guided trip-configuration wizard: ordered steps, completion guards, the
//! accumulating draft and the review summary.

pub mod controller;
pub mod draft;
pub mod steps;
pub mod summary;
pub mod validation;

pub use controller::{
    DestinationOption, Navigator, SessionOutcome, Transition, WizardController, WizardState,
};
pub use draft::{BudgetTier, FieldUpdate, TravelType, TripDraft};
pub use steps::{Step, StepCatalog, StepId};
pub use summary::{summarize, ReviewSummary};
pub use validation::is_step_satisfied;
