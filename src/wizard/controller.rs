use std::mem;

use tracing::{debug, info};
use uuid::Uuid;

use super::draft::{FieldUpdate, TripDraft};
use super::steps::{Step, StepCatalog, StepId};
use super::summary::{self, ReviewSummary};
use super::validation::{is_step_satisfied, missing_requirement};
use crate::destinations::DestinationCatalog;

/// Outbound navigation hooks invoked when a session ends.
pub trait Navigator {
    /// Called once when the user backs out of the first step.
    fn exit_wizard(&mut self);

    /// Called once with the finished draft when the review step is confirmed.
    fn complete_wizard(&mut self, draft: TripDraft);
}

/// Result of an `advance`/`retreat` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Position changed; carries the newly active step.
    Moved(StepId),
    /// The active step is not satisfied yet; nothing changed.
    Blocked(StepId),
    Completed,
    Cancelled,
    /// The session already ended; nothing changed.
    Ended,
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Cancelled,
}

/// Position, draft and progress for a single wizard session.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardState {
    current_index: usize,
    draft: TripDraft,
    progress_percent: f64,
}

impl WizardState {
    fn new() -> Self {
        Self {
            current_index: 0,
            draft: TripDraft::new(),
            progress_percent: 0.0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn draft(&self) -> &TripDraft {
        &self.draft
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }
}

/// A destination as offered on the first step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationOption {
    pub name: String,
    pub image_ref: String,
    pub selected: bool,
}

/// Drives one wizard session: position, guards, progress and draft edits.
///
/// Every mutating call takes `&mut self`, so a session can never see two
/// transitions in flight at once.
pub struct WizardController<N: Navigator> {
    session_id: Uuid,
    steps: StepCatalog,
    destinations: DestinationCatalog,
    navigator: N,
    state: WizardState,
    search_query: String,
    outcome: Option<SessionOutcome>,
}

impl<N: Navigator> WizardController<N> {
    pub fn new(destinations: DestinationCatalog, navigator: N) -> Self {
        let session_id = Uuid::new_v4();
        info!(%session_id, "Trip wizard session started");
        Self {
            session_id,
            steps: StepCatalog::standard(),
            destinations,
            navigator,
            state: WizardState::new(),
            search_query: String::new(),
            outcome: None,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn steps(&self) -> &StepCatalog {
        &self.steps
    }

    pub fn destinations(&self) -> &DestinationCatalog {
        &self.destinations
    }

    pub fn draft(&self) -> &TripDraft {
        &self.state.draft
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }

    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn current_step(&self) -> &Step {
        self.steps.step_at(self.state.current_index)
    }

    pub fn progress(&self) -> f64 {
        self.state.progress_percent
    }

    pub fn can_advance(&self) -> bool {
        is_step_satisfied(self.current_step().id, &self.state.draft)
    }

    /// Why the current step cannot advance, if it cannot.
    pub fn blocking_reason(&self) -> Option<&'static str> {
        missing_requirement(self.current_step().id, &self.state.draft)
    }

    pub fn is_last_step(&self) -> bool {
        self.state.current_index == self.steps.last_index()
    }

    /// Moves forward one step, or completes the session from the last step.
    pub fn advance(&mut self) -> Transition {
        if self.is_finished() {
            return Transition::Ended;
        }

        let step = self.current_step().id;
        if !self.can_advance() {
            debug!(session_id = %self.session_id, %step, "Advance blocked");
            return Transition::Blocked(step);
        }

        if self.is_last_step() {
            let draft = mem::take(&mut self.state.draft);
            self.outcome = Some(SessionOutcome::Completed);
            info!(session_id = %self.session_id, "Trip wizard completed");
            self.navigator.complete_wizard(draft);
            return Transition::Completed;
        }

        self.move_to(self.state.current_index + 1)
    }

    /// Moves back one step, or cancels the session from the first step.
    pub fn retreat(&mut self) -> Transition {
        if self.is_finished() {
            return Transition::Ended;
        }

        if self.state.current_index == 0 {
            self.state.draft = TripDraft::new();
            self.outcome = Some(SessionOutcome::Cancelled);
            info!(session_id = %self.session_id, "Trip wizard cancelled");
            self.navigator.exit_wizard();
            return Transition::Cancelled;
        }

        self.move_to(self.state.current_index - 1)
    }

    /// Applies a draft mutation. Ignored once the session has ended.
    pub fn update_field(&mut self, update: FieldUpdate) {
        if self.is_finished() {
            return;
        }
        debug!(session_id = %self.session_id, field = update.field(), "Draft updated");
        self.state.draft.apply(update);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Catalog entries matching the search query, flagged when selected.
    pub fn destination_options(&self) -> Vec<DestinationOption> {
        self.destinations
            .search(&self.search_query)
            .into_iter()
            .map(|entry| DestinationOption {
                name: entry.name.clone(),
                image_ref: entry.image_ref.clone(),
                selected: entry.name == self.state.draft.destination(),
            })
            .collect()
    }

    pub fn can_decrement_adults(&self) -> bool {
        self.state.draft.adults() > 1
    }

    pub fn can_decrement_children(&self) -> bool {
        self.state.draft.children() > 0
    }

    /// `Step n of N: Title` for the active step.
    pub fn step_indicator(&self) -> String {
        format!(
            "Step {} of {}: {}",
            self.state.current_index + 1,
            self.steps.count(),
            self.current_step().title
        )
    }

    pub fn primary_action_label(&self) -> &'static str {
        if self.is_last_step() {
            "Create Trip"
        } else {
            "Continue"
        }
    }

    pub fn review_summary(&self) -> ReviewSummary {
        summary::summarize(&self.state.draft, &self.destinations)
    }

    fn move_to(&mut self, index: usize) -> Transition {
        self.state.current_index = index;
        self.state.progress_percent = progress_for(index, self.steps.count());
        let step = self.current_step().id;
        info!(
            session_id = %self.session_id,
            %step,
            index,
            progress = self.state.progress_percent,
            "Wizard step changed"
        );
        Transition::Moved(step)
    }
}

fn progress_for(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 100.0;
    }
    index as f64 / (count - 1) as f64 * 100.0
}
