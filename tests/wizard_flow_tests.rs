use trip_wizard::destinations::DestinationCatalog;
use trip_wizard::wizard::{
    BudgetTier, FieldUpdate, Navigator, SessionOutcome, StepId, Transition, TravelType, TripDraft,
    WizardController,
};

#[derive(Default)]
struct RecordingNavigator {
    exits: usize,
    completed: Vec<TripDraft>,
}

impl Navigator for RecordingNavigator {
    fn exit_wizard(&mut self) {
        self.exits += 1;
    }

    fn complete_wizard(&mut self, draft: TripDraft) {
        self.completed.push(draft);
    }
}

fn new_wizard() -> WizardController<RecordingNavigator> {
    WizardController::new(DestinationCatalog::popular(), RecordingNavigator::default())
}

fn expected_progress(index: usize) -> f64 {
    index as f64 / 4.0 * 100.0
}

fn fill_everything(wizard: &mut WizardController<RecordingNavigator>) {
    wizard.update_field(FieldUpdate::Destination("Paris, France".into()));
    wizard.update_field(FieldUpdate::StartDate("10/15/2025".into()));
    wizard.update_field(FieldUpdate::EndDate("10/20/2025".into()));
    wizard.update_field(FieldUpdate::TravelType(TravelType::Solo));
}

#[test]
fn index_and_progress_stay_consistent_for_any_sequence() {
    for mask in 0u32..(1 << 10) {
        let mut wizard = new_wizard();
        fill_everything(&mut wizard);

        for bit in 0..10 {
            if wizard.is_finished() {
                break;
            }
            if mask & (1 << bit) != 0 {
                wizard.advance();
            } else {
                wizard.retreat();
            }
            let index = wizard.state().current_index();
            assert!(index < wizard.steps().count(), "mask {mask:#b}");
            assert_eq!(wizard.progress(), expected_progress(index), "mask {mask:#b}");
        }
    }
}

#[test]
fn blocked_advance_never_moves() {
    let mut wizard = new_wizard();
    for _ in 0..3 {
        assert_eq!(wizard.advance(), Transition::Blocked(StepId::Destination));
        assert_eq!(wizard.state().current_index(), 0);
        assert_eq!(wizard.progress(), 0.0);
    }
}

#[test]
fn choosing_paris_moves_to_dates_at_a_quarter() {
    let mut wizard = new_wizard();
    wizard.update_field(FieldUpdate::Destination("Paris, France".into()));
    assert!(wizard.can_advance());
    assert_eq!(wizard.advance(), Transition::Moved(StepId::Dates));
    assert_eq!(wizard.state().current_index(), 1);
    assert_eq!(wizard.progress(), 25.0);
    assert_eq!(wizard.step_indicator(), "Step 2 of 5: Dates");
}

#[test]
fn dates_require_both_fields() {
    let mut wizard = new_wizard();
    wizard.update_field(FieldUpdate::Destination("Paris, France".into()));
    wizard.advance();

    assert_eq!(wizard.advance(), Transition::Blocked(StepId::Dates));
    wizard.update_field(FieldUpdate::StartDate("10/15/2025".into()));
    assert_eq!(wizard.advance(), Transition::Blocked(StepId::Dates));
    assert_eq!(wizard.state().current_index(), 1);

    wizard.update_field(FieldUpdate::EndDate("10/20/2025".into()));
    assert_eq!(wizard.advance(), Transition::Moved(StepId::Travelers));
}

#[test]
fn travelers_step_clamps_adults_and_needs_a_group() {
    let mut wizard = new_wizard();
    wizard.update_field(FieldUpdate::Destination("Paris, France".into()));
    wizard.advance();
    wizard.update_field(FieldUpdate::StartDate("10/15/2025".into()));
    wizard.update_field(FieldUpdate::EndDate("10/20/2025".into()));
    wizard.advance();
    assert_eq!(wizard.current_step().id, StepId::Travelers);
    assert_eq!(wizard.draft().adults(), 1);
    assert_eq!(wizard.draft().children(), 0);

    wizard.update_field(FieldUpdate::DecrementAdults);
    wizard.update_field(FieldUpdate::DecrementChildren);
    assert_eq!(wizard.draft().adults(), 1);
    assert_eq!(wizard.draft().children(), 0);
    assert_eq!(wizard.advance(), Transition::Blocked(StepId::Travelers));

    wizard.update_field(FieldUpdate::TravelType("family".parse().expect("travel type")));
    assert_eq!(wizard.advance(), Transition::Moved(StepId::Budget));
}

#[test]
fn budget_step_never_blocks() {
    let mut wizard = new_wizard();
    fill_everything(&mut wizard);
    for _ in 0..3 {
        wizard.advance();
    }
    assert_eq!(wizard.current_step().id, StepId::Budget);
    assert_eq!(wizard.draft().budget(), BudgetTier::Medium);
    assert!(wizard.can_advance());
}

#[test]
fn retreat_at_start_cancels_without_going_negative() {
    let mut wizard = new_wizard();
    assert_eq!(wizard.retreat(), Transition::Cancelled);
    assert_eq!(wizard.retreat(), Transition::Ended);
    assert_eq!(wizard.state().current_index(), 0);
    assert_eq!(wizard.outcome(), Some(SessionOutcome::Cancelled));

    let navigator = wizard.into_navigator();
    assert_eq!(navigator.exits, 1);
    assert!(navigator.completed.is_empty());
}

#[test]
fn advance_from_review_hands_off_the_draft_unchanged() {
    let mut wizard = new_wizard();
    fill_everything(&mut wizard);
    wizard.update_field(FieldUpdate::IncrementChildren);
    wizard.update_field(FieldUpdate::Budget(BudgetTier::Luxury));
    for _ in 0..4 {
        assert!(matches!(wizard.advance(), Transition::Moved(_)));
    }
    assert_eq!(wizard.current_step().id, StepId::Review);
    assert_eq!(wizard.progress(), 100.0);

    let before = wizard.draft().clone();
    assert_eq!(wizard.advance(), Transition::Completed);

    let navigator = wizard.into_navigator();
    assert_eq!(navigator.completed, vec![before]);
    assert_eq!(navigator.exits, 0);
}
