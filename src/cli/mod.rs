//! Terminal front-end for the trip wizard.

pub mod interaction;
pub mod output;
pub mod runner;
pub mod view;

use std::io;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::{Config, ConfigManager};
use crate::errors::CliError;
use crate::wizard::TripDraft;

pub use interaction::{PromptInteraction, ScriptInteraction, StepAction, WizardInteraction};
pub use runner::{run_wizard, WizardOutcome};

/// When set, commands are read line by line from stdin instead of menus.
pub const SCRIPT_ENV: &str = "TRIP_WIZARD_CLI_SCRIPT";

/// Record emitted for downstream trip creation.
#[derive(Debug, Clone, Serialize)]
pub struct TripRequest {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub trip: TripDraft,
}

impl TripRequest {
    pub fn new(trip: TripDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            trip,
        }
    }
}

fn apply_preferences(config: &Config) {
    output::set_preferences(output::OutputPreferences {
        plain_output: config.plain_output,
        color_enabled: config.ui_color_enabled,
    });
}

/// Runs the wizard using the configuration found through `manager`.
pub fn run_new_trip(manager: &ConfigManager) -> Result<(), CliError> {
    let config = manager.load()?;
    apply_preferences(&config);
    let destinations = config.destination_catalog()?;

    let outcome = if std::env::var_os(SCRIPT_ENV).is_some() {
        let stdin = io::stdin();
        let mut interaction = ScriptInteraction::new(stdin.lock());
        run_wizard(destinations, &mut interaction)?
    } else {
        let mut interaction = PromptInteraction::new();
        run_wizard(destinations, &mut interaction)?
    };

    match outcome {
        WizardOutcome::Completed(trip) => {
            output::success("Trip created.");
            let request = TripRequest::new(trip);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        WizardOutcome::Cancelled => output::info("Trip creation cancelled."),
    }
    Ok(())
}

/// Prints the destination catalog in effect.
pub fn list_destinations(manager: &ConfigManager) -> Result<(), CliError> {
    let config = manager.load()?;
    apply_preferences(&config);
    let destinations = config.destination_catalog()?;
    output::section("Destinations");
    for entry in destinations.entries() {
        output::line(format!("{} ({})", entry.name, entry.image_ref));
    }
    Ok(())
}

/// Writes the current (or default) configuration back to disk.
pub fn init_config(manager: &ConfigManager) -> Result<(), CliError> {
    let config = manager.load()?;
    manager.save(&config)?;
    output::success(format!("Configuration written to {}", manager.config_path().display()));
    Ok(())
}
