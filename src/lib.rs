#![doc(test(attr(deny(warnings))))]

//! Trip Wizard guides a traveller through destination, dates, travelers and
//! budget, validating each step before producing a finished trip draft.

pub mod cli;
pub mod config;
pub mod destinations;
pub mod errors;
pub mod utils;
pub mod wizard;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Trip Wizard tracing initialized.");
    });
}
