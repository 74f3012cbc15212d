// Content Ranker - Library Entry Point

pub mod constants;
pub mod error;
pub mod factors;
pub mod ideas;
pub mod weights;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod commands;

use std::io;

pub use error::{RankerError, Result};
pub use session::Session;
pub use settings::Settings;

/// Run an interactive session on stdin/stdout
pub fn run(settings: &Settings) -> Result<()> {
    let mut session = Session::from_settings(settings);
    let stdin = io::stdin();
    let stdout = io::stdout();
    commands::run_session(&mut session, stdin.lock(), stdout.lock())
}
