use tracing::debug;

use crate::cli::interaction::{StepAction, WizardInteraction};
use crate::cli::output;
use crate::cli::view::{self, StepView};
use crate::destinations::DestinationCatalog;
use crate::errors::CliError;
use crate::wizard::{Navigator, Transition, TripDraft, WizardController};

/// High-level lifecycle states emitted by the wizard runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardOutcome {
    Completed(TripDraft),
    Cancelled,
}

/// Navigator that keeps the hand-off so the caller can act on it afterwards.
#[derive(Debug, Default)]
pub struct SessionNavigator {
    completed: Option<TripDraft>,
}

impl SessionNavigator {
    pub fn into_outcome(self) -> WizardOutcome {
        match self.completed {
            Some(draft) => WizardOutcome::Completed(draft),
            None => WizardOutcome::Cancelled,
        }
    }
}

impl Navigator for SessionNavigator {
    fn exit_wizard(&mut self) {
        self.completed = None;
    }

    fn complete_wizard(&mut self, draft: TripDraft) {
        self.completed = Some(draft);
    }
}

/// Runs one wizard session to completion or cancellation.
pub fn run_wizard<I: WizardInteraction>(
    destinations: DestinationCatalog,
    interaction: &mut I,
) -> Result<WizardOutcome, CliError> {
    let mut wizard = WizardController::new(destinations, SessionNavigator::default());

    while !wizard.is_finished() {
        let action = {
            let step_view = StepView::capture(&wizard);
            view::print_step(&step_view);
            match interaction.next_action(&step_view) {
                Ok(action) => action,
                Err(CliError::Input(message)) => {
                    output::warning(message);
                    continue;
                }
                Err(err) => return Err(err),
            }
        };
        apply_action(&mut wizard, action);
    }

    Ok(wizard.into_navigator().into_outcome())
}

fn apply_action(wizard: &mut WizardController<SessionNavigator>, action: StepAction) {
    debug!(session_id = %wizard.session_id(), ?action, "Applying wizard action");
    match action {
        StepAction::Update(update) => wizard.update_field(update),
        StepAction::Search(query) => wizard.set_search_query(query),
        StepAction::Advance => {
            if let Transition::Blocked(_) = wizard.advance() {
                let reason = wizard
                    .blocking_reason()
                    .unwrap_or("This step is not complete yet.");
                output::warning(reason);
            }
        }
        StepAction::Retreat => {
            wizard.retreat();
        }
        StepAction::Abort => {
            while !wizard.is_finished() {
                wizard.retreat();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use crate::wizard::{BudgetTier, FieldUpdate, TravelType};

    struct MockInteraction {
        actions: VecDeque<Result<StepAction, CliError>>,
        prompts: usize,
    }

    impl MockInteraction {
        fn new(actions: Vec<Result<StepAction, CliError>>) -> Self {
            Self {
                actions: actions.into(),
                prompts: 0,
            }
        }
    }

    impl WizardInteraction for MockInteraction {
        fn next_action(&mut self, _view: &StepView<'_>) -> Result<StepAction, CliError> {
            self.prompts += 1;
            self.actions.pop_front().unwrap_or(Ok(StepAction::Abort))
        }
    }

    fn update(update: FieldUpdate) -> Result<StepAction, CliError> {
        Ok(StepAction::Update(update))
    }

    #[test]
    fn full_session_returns_the_draft() {
        let mut interaction = MockInteraction::new(vec![
            update(FieldUpdate::Destination("Tokyo, Japan".into())),
            Ok(StepAction::Advance),
            update(FieldUpdate::StartDate("03/01/2026".into())),
            update(FieldUpdate::EndDate("03/10/2026".into())),
            Ok(StepAction::Advance),
            update(FieldUpdate::TravelType(TravelType::Couple)),
            update(FieldUpdate::IncrementAdults),
            Ok(StepAction::Advance),
            update(FieldUpdate::Budget(BudgetTier::Luxury)),
            Ok(StepAction::Advance),
            Ok(StepAction::Advance),
        ]);

        let outcome =
            run_wizard(DestinationCatalog::popular(), &mut interaction).expect("run wizard");
        let WizardOutcome::Completed(draft) = outcome else {
            panic!("expected completion");
        };
        assert_eq!(draft.destination(), "Tokyo, Japan");
        assert_eq!(draft.adults(), 2);
        assert_eq!(draft.budget(), BudgetTier::Luxury);
    }

    #[test]
    fn input_errors_reprompt_without_ending_the_session() {
        let mut interaction = MockInteraction::new(vec![
            Err(CliError::Input("bad".into())),
            Ok(StepAction::Advance),
            Ok(StepAction::Retreat),
        ]);
        let outcome =
            run_wizard(DestinationCatalog::popular(), &mut interaction).expect("run wizard");
        assert_eq!(outcome, WizardOutcome::Cancelled);
        assert_eq!(interaction.prompts, 3);
    }

    #[test]
    fn abort_unwinds_to_cancellation() {
        let mut interaction = MockInteraction::new(vec![
            update(FieldUpdate::Destination("Paris, France".into())),
            Ok(StepAction::Advance),
            Ok(StepAction::Abort),
        ]);
        let outcome =
            run_wizard(DestinationCatalog::popular(), &mut interaction).expect("run wizard");
        assert_eq!(outcome, WizardOutcome::Cancelled);
    }
}
