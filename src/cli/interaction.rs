//! Sources of user actions: dialoguer menus or a line-oriented script.

use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use strsim::levenshtein;

use crate::cli::view::StepView;
use crate::errors::CliError;
use crate::wizard::{BudgetTier, FieldUpdate, StepId, TravelType};

/// One user intent, applied by the runner to the wizard controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    Update(FieldUpdate),
    Search(String),
    Advance,
    Retreat,
    /// Leave the wizard without finishing (end of script input).
    Abort,
}

pub trait WizardInteraction {
    /// Next action for the step described by `view`.
    ///
    /// [`CliError::Input`] is reported to the user and the step is prompted
    /// again; other errors end the session.
    fn next_action(&mut self, view: &StepView<'_>) -> Result<StepAction, CliError>;
}

/// Menu entry offered on a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Action(StepAction),
    EnterSearch,
    EnterStartDate,
    EnterEndDate,
}

/// Menu entries for the interactive front-end, in display order.
pub fn menu_entries(view: &StepView<'_>) -> Vec<(String, MenuChoice)> {
    let mut entries = Vec::new();
    let draft = view.draft;

    match view.step.id {
        StepId::Destination => {
            for option in &view.destination_options {
                let label = if option.selected {
                    format!("✓ {}", option.name)
                } else {
                    option.name.clone()
                };
                entries.push((
                    label,
                    MenuChoice::Action(StepAction::Update(FieldUpdate::Destination(
                        option.name.clone(),
                    ))),
                ));
            }
            entries.push(("Search destinations...".into(), MenuChoice::EnterSearch));
        }
        StepId::Dates => {
            entries.push(("Set start date".into(), MenuChoice::EnterStartDate));
            entries.push(("Set end date".into(), MenuChoice::EnterEndDate));
        }
        StepId::Travelers => {
            for kind in TravelType::ALL {
                let selected = draft.travel_type() == Some(kind);
                entries.push((
                    format!("{}{} {}", if selected { "✓ " } else { "" }, kind.icon(), kind.title()),
                    MenuChoice::Action(StepAction::Update(FieldUpdate::TravelType(kind))),
                ));
            }
            entries.push((
                format!("Add adult ({})", draft.adults()),
                MenuChoice::Action(StepAction::Update(FieldUpdate::IncrementAdults)),
            ));
            if view.can_decrement_adults {
                entries.push((
                    "Remove adult".into(),
                    MenuChoice::Action(StepAction::Update(FieldUpdate::DecrementAdults)),
                ));
            }
            entries.push((
                format!("Add child ({})", draft.children()),
                MenuChoice::Action(StepAction::Update(FieldUpdate::IncrementChildren)),
            ));
            if view.can_decrement_children {
                entries.push((
                    "Remove child".into(),
                    MenuChoice::Action(StepAction::Update(FieldUpdate::DecrementChildren)),
                ));
            }
        }
        StepId::Budget => {
            for tier in BudgetTier::ALL {
                let selected = draft.budget() == tier;
                entries.push((
                    format!(
                        "{}{} {} - {}",
                        if selected { "✓ " } else { "" },
                        tier.icon(),
                        tier.title(),
                        tier.description()
                    ),
                    MenuChoice::Action(StepAction::Update(FieldUpdate::Budget(tier))),
                ));
            }
        }
        StepId::Review => {}
    }

    if view.can_advance {
        entries.push((
            view.primary_action.to_string(),
            MenuChoice::Action(StepAction::Advance),
        ));
    }
    entries.push(("← Back".into(), MenuChoice::Action(StepAction::Retreat)));
    entries
}

/// Interactive implementation backed by dialoguer prompts.
pub struct PromptInteraction {
    theme: ColorfulTheme,
}

impl PromptInteraction {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn text(&self, prompt: &str, initial: &str) -> Result<String, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text()?;
        Ok(value.trim().to_string())
    }
}

impl Default for PromptInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardInteraction for PromptInteraction {
    fn next_action(&mut self, view: &StepView<'_>) -> Result<StepAction, CliError> {
        let entries = menu_entries(view);
        let labels: Vec<&str> = entries.iter().map(|(label, _)| label.as_str()).collect();
        let default = entries
            .iter()
            .position(|(_, choice)| *choice == MenuChoice::Action(StepAction::Advance))
            .unwrap_or(0);

        let selection = Select::with_theme(&self.theme)
            .with_prompt(view.step.heading)
            .items(&labels)
            .default(default)
            .interact_opt()?;

        let Some(index) = selection else {
            return Ok(StepAction::Retreat);
        };

        match &entries[index].1 {
            MenuChoice::Action(action) => Ok(action.clone()),
            MenuChoice::EnterSearch => Ok(StepAction::Search(
                self.text("Search destinations", view.search_query)?,
            )),
            MenuChoice::EnterStartDate => Ok(StepAction::Update(FieldUpdate::StartDate(
                self.text("Start date (MM/DD/YYYY)", view.draft.start_date())?,
            ))),
            MenuChoice::EnterEndDate => Ok(StepAction::Update(FieldUpdate::EndDate(
                self.text("End date (MM/DD/YYYY)", view.draft.end_date())?,
            ))),
        }
    }
}

const SCRIPT_COMMANDS: [&str; 10] = [
    "destination",
    "search",
    "start",
    "end",
    "type",
    "adults",
    "children",
    "budget",
    "next",
    "back",
];

/// Reads one command per line, e.g. `destination "Paris, France"` or `next`.
pub struct ScriptInteraction<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptInteraction<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> WizardInteraction for ScriptInteraction<R> {
    fn next_action(&mut self, _view: &StepView<'_>) -> Result<StepAction, CliError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(StepAction::Abort);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return parse_command(trimmed);
        }
    }
}

/// Parses a single script command.
pub fn parse_command(line: &str) -> Result<StepAction, CliError> {
    let words = shell_words::split(line)
        .map_err(|err| CliError::Input(format!("Could not parse `{}`: {}", line, err)))?;
    let Some((command, args)) = words.split_first() else {
        return Err(CliError::Input("Empty command".into()));
    };
    let argument = args.join(" ");

    let action = match command.to_ascii_lowercase().as_str() {
        "destination" => StepAction::Update(FieldUpdate::Destination(argument)),
        "search" => StepAction::Search(argument),
        "start" => StepAction::Update(FieldUpdate::StartDate(argument)),
        "end" => StepAction::Update(FieldUpdate::EndDate(argument)),
        "type" => StepAction::Update(FieldUpdate::TravelType(argument.parse::<TravelType>()?)),
        "budget" => StepAction::Update(FieldUpdate::Budget(argument.parse::<BudgetTier>()?)),
        "adults" => match argument.as_str() {
            "+" => StepAction::Update(FieldUpdate::IncrementAdults),
            "-" => StepAction::Update(FieldUpdate::DecrementAdults),
            _ => return Err(CliError::Input("Usage: adults +|-".into())),
        },
        "children" => match argument.as_str() {
            "+" => StepAction::Update(FieldUpdate::IncrementChildren),
            "-" => StepAction::Update(FieldUpdate::DecrementChildren),
            _ => return Err(CliError::Input("Usage: children +|-".into())),
        },
        "next" => StepAction::Advance,
        "back" => StepAction::Retreat,
        other => return Err(unknown_command(other)),
    };
    Ok(action)
}

fn unknown_command(input: &str) -> CliError {
    let mut message = format!("Unknown command `{}`.", input);
    let best = SCRIPT_COMMANDS
        .iter()
        .map(|candidate| (levenshtein(candidate, input), *candidate))
        .min_by_key(|(distance, _)| *distance);
    if let Some((distance, candidate)) = best {
        if distance <= 3 {
            message.push_str(&format!(" Suggestion: `{}`?", candidate));
        }
    }
    CliError::Input(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destinations::DestinationCatalog;
    use crate::wizard::{Navigator, TripDraft, WizardController};

    struct Discard;

    impl Navigator for Discard {
        fn exit_wizard(&mut self) {}
        fn complete_wizard(&mut self, _draft: TripDraft) {}
    }

    #[test]
    fn parses_quoted_destination() {
        assert_eq!(
            parse_command(r#"destination "Paris, France""#).expect("parse"),
            StepAction::Update(FieldUpdate::Destination("Paris, France".into()))
        );
        assert_eq!(
            parse_command("destination New York, USA").expect("parse"),
            StepAction::Update(FieldUpdate::Destination("New York, USA".into()))
        );
    }

    #[test]
    fn parses_counters_and_choices() {
        assert_eq!(
            parse_command("adults -").expect("parse"),
            StepAction::Update(FieldUpdate::DecrementAdults)
        );
        assert_eq!(
            parse_command("type Family").expect("parse"),
            StepAction::Update(FieldUpdate::TravelType(TravelType::Family))
        );
        assert_eq!(parse_command("NEXT").expect("parse"), StepAction::Advance);
    }

    #[test]
    fn unknown_commands_suggest_the_closest_match() {
        let err = parse_command("nxt").expect_err("unknown");
        assert_eq!(
            err.to_string(),
            "Invalid input: Unknown command `nxt`. Suggestion: `next`?"
        );
        let err = parse_command("type spaceship").expect_err("bad type");
        assert!(err.to_string().contains("Unknown travel type"));
    }

    #[test]
    fn script_skips_comments_and_aborts_at_eof() {
        let wizard = WizardController::new(DestinationCatalog::popular(), Discard);
        let view = StepView::capture(&wizard);
        let mut script = ScriptInteraction::new("# comment\n\nback\n".as_bytes());
        assert_eq!(script.next_action(&view).expect("action"), StepAction::Retreat);
        assert_eq!(script.next_action(&view).expect("action"), StepAction::Abort);
    }

    #[test]
    fn menu_hides_disabled_actions() {
        let mut wizard = WizardController::new(DestinationCatalog::popular(), Discard);
        let labels = |wizard: &WizardController<Discard>| -> Vec<String> {
            menu_entries(&StepView::capture(wizard))
                .into_iter()
                .map(|(label, _)| label)
                .collect()
        };

        assert!(!labels(&wizard).contains(&"Continue".to_string()));
        wizard.update_field(FieldUpdate::Destination("Paris, France".into()));
        let current = labels(&wizard);
        assert!(current.contains(&"✓ Paris, France".to_string()));
        assert!(current.contains(&"Continue".to_string()));

        wizard.advance();
        wizard.update_field(FieldUpdate::StartDate("1".into()));
        wizard.update_field(FieldUpdate::EndDate("2".into()));
        wizard.advance();
        let travelers = labels(&wizard);
        assert!(!travelers.contains(&"Remove adult".to_string()));
        assert!(travelers.contains(&"Add adult (1)".to_string()));
    }
}
