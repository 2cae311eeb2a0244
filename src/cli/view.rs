//! Text rendering of the active wizard step.

use crate::cli::output;
use crate::wizard::{
    BudgetTier, DestinationOption, Navigator, ReviewSummary, Step, StepId, TravelType, TripDraft,
    WizardController,
};

const PROGRESS_WIDTH: usize = 20;
const DATE_TIP: &str =
    "Tip: For the best rates, consider traveling during shoulder seasons (Spring or Fall)";
const BUDGET_NOTE: &str = "Your budget helps us recommend suitable accommodations, activities, and transportation options.";

/// Snapshot of everything the presentation layer needs for one render.
pub struct StepView<'a> {
    pub step: &'a Step,
    pub draft: &'a TripDraft,
    pub indicator: String,
    pub progress: f64,
    pub search_query: &'a str,
    pub destination_options: Vec<DestinationOption>,
    pub can_advance: bool,
    pub blocking_reason: Option<&'static str>,
    pub primary_action: &'static str,
    pub can_decrement_adults: bool,
    pub can_decrement_children: bool,
    pub summary: Option<ReviewSummary>,
}

impl<'a> StepView<'a> {
    pub fn capture<N: Navigator>(wizard: &'a WizardController<N>) -> Self {
        let step = wizard.current_step();
        let summary = (step.id == StepId::Review).then(|| wizard.review_summary());
        Self {
            step,
            draft: wizard.draft(),
            indicator: wizard.step_indicator(),
            progress: wizard.progress(),
            search_query: wizard.search_query(),
            destination_options: wizard.destination_options(),
            can_advance: wizard.can_advance(),
            blocking_reason: wizard.blocking_reason(),
            primary_action: wizard.primary_action_label(),
            can_decrement_adults: wizard.can_decrement_adults(),
            can_decrement_children: wizard.can_decrement_children(),
            summary,
        }
    }
}

pub fn progress_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * PROGRESS_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled),
        clamped
    )
}

fn marker(selected: bool) -> &'static str {
    if selected {
        "[x]"
    } else {
        "[ ]"
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Step-specific body lines, below the header and above the footer.
pub fn body_lines(view: &StepView<'_>) -> Vec<String> {
    let mut lines = vec![view.step.heading.to_string(), view.step.description.to_string()];
    let draft = view.draft;

    match view.step.id {
        StepId::Destination => {
            if !view.search_query.trim().is_empty() {
                lines.push(format!("Search: {}", view.search_query.trim()));
            }
            if view.destination_options.is_empty() {
                lines.push("No destinations match your search.".into());
            }
            lines.extend(
                view.destination_options
                    .iter()
                    .map(|option| format!("  {} {}", marker(option.selected), option.name)),
            );
            if !draft.destination().is_empty()
                && !view.destination_options.iter().any(|option| option.selected)
            {
                lines.push(format!("Selected: {}", draft.destination()));
            }
        }
        StepId::Dates => {
            lines.push(format!("Start date (MM/DD/YYYY): {}", or_dash(draft.start_date())));
            lines.push(format!("End date (MM/DD/YYYY): {}", or_dash(draft.end_date())));
            lines.push(DATE_TIP.into());
        }
        StepId::Travelers => {
            lines.extend(TravelType::ALL.iter().map(|kind| {
                format!(
                    "  {} {} {}",
                    marker(draft.travel_type() == Some(*kind)),
                    kind.icon(),
                    kind.title()
                )
            }));
            lines.push(format!("Adults: {}", draft.adults()));
            lines.push(format!("Children: {}", draft.children()));
        }
        StepId::Budget => {
            lines.extend(BudgetTier::ALL.iter().map(|tier| {
                format!(
                    "  {} {} {} - {}",
                    marker(draft.budget() == *tier),
                    tier.icon(),
                    tier.title(),
                    tier.description()
                )
            }));
            lines.push(BUDGET_NOTE.into());
        }
        StepId::Review => {
            if let Some(summary) = &view.summary {
                lines.extend(summary.lines());
            }
        }
    }

    lines
}

pub fn print_step(view: &StepView<'_>) {
    output::section(view.step.title);
    output::detail(&view.indicator);
    output::line(progress_bar(view.progress));
    for line in body_lines(view) {
        output::line(line);
    }
    match view.blocking_reason {
        Some(reason) => output::detail(format!("{} (blocked: {})", view.primary_action, reason)),
        None => output::detail(format!("Next: {}", view.primary_action)),
    }
}
