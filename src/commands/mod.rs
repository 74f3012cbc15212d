// Content Ranker - Session Commands
// One line of user input -> typed command -> session mutation -> rendered output.
// Parsing goes through clap so every command gets the same help and error text.

pub mod render;

#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};

use crate::constants::SESSION_PROMPT;
use crate::error::{RankerError, Result};
use crate::factors::Factor;
use crate::ideas::{IdeaId, IdeaUpdate, Ratings, VideoIdea};
use crate::scoring;
use crate::session::Session;
use crate::weights::{Preset, WeightConfig};

// Lets clap parse a bare command line without a binary name
#[derive(Parser, Debug)]
#[command(
    name = "ranker",
    about = "Rank video ideas by weighted factors",
    no_binary_name = true,
    disable_version_flag = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a new idea (every factor rated 5)
    Add {
        /// Title; defaults to "Video Idea N"
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Remove an idea
    #[command(visible_alias = "rm")]
    Remove {
        /// Idea ID
        id: u64,
    },

    /// Rename an idea
    Title {
        /// Idea ID
        id: u64,
        /// New title
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        title: Vec<String>,
    },

    /// Rate one factor of an idea (1-10, clamped)
    Rate {
        /// Idea ID
        id: u64,
        /// Factor key, e.g. trendingTopicScore or trending_topic_score
        factor: Factor,
        /// Rating
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Set one factor weight (0-50, clamped)
    Weight {
        /// Factor key
        factor: Factor,
        /// Weight
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Replace all weights with a preset (trend, brand, balanced)
    Preset {
        preset: Preset,
    },

    /// Show ideas ranked by score
    Rank {
        /// Print the ranked view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the score breakdown of one idea
    Show {
        /// Idea ID
        id: u64,
    },

    /// List ideas in the order they were added, with every rating
    List,

    /// Show current weights and their total
    Weights,

    /// Describe the eight rating factors
    Factors,

    /// List the weight presets
    Presets,

    /// End the session
    #[command(visible_alias = "exit")]
    Quit,
}

/// Whether the session loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Parse one input line. Blank lines parse to None.
///
/// Titles are taken verbatim from the line, so inner spacing survives.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    let command = match SessionLine::try_parse_from(words)?.command {
        SessionCommand::Add { title } if !title.is_empty() => SessionCommand::Add {
            title: vec![raw_tail(line, 1).to_string()],
        },
        SessionCommand::Title { id, .. } => SessionCommand::Title {
            id,
            title: vec![raw_tail(line, 2).to_string()],
        },
        command => command,
    };
    Ok(Some(command))
}

/// Rest of the line after the first `skip` words, outer whitespace trimmed
fn raw_tail(line: &str, skip: usize) -> &str {
    let mut rest = line.trim_start();
    for _ in 0..skip {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        rest = rest[end..].trim_start();
    }
    rest.trim_end()
}

/// Score a single idea outside a session and print its breakdown.
///
/// Custom `weights` win over `preset`; with neither, Balanced is used.
pub fn score_one(
    ratings: Vec<i64>,
    preset: Option<Preset>,
    weights: Option<Vec<i64>>,
    title: String,
    out: &mut impl Write,
) -> Result<()> {
    let ratings = exactly_eight(ratings)?;
    let weights = match weights {
        Some(values) => WeightConfig::from_values(exactly_eight(values)?),
        None => preset.unwrap_or_default().weights(),
    };

    let idea = VideoIdea::new(IdeaId(0), title).with_ratings(Ratings::from_values(ratings));
    let breakdown = scoring::breakdown(&idea, &weights);

    render::breakdown(out, &idea, &breakdown)?;
    if !weights.is_balanced() {
        writeln!(out, "Note: weights total {}%, not 100%", weights.total_weight())?;
    }
    Ok(())
}

fn exactly_eight(values: Vec<i64>) -> Result<[i64; 8]> {
    values
        .try_into()
        .map_err(|v: Vec<i64>| RankerError::WrongArity { expected: 8, actual: v.len() })
}

/// Apply one command to the session and write its output
pub fn execute(session: &mut Session, command: SessionCommand, out: &mut impl Write) -> Result<Flow> {
    match command {
        SessionCommand::Add { title } => {
            let id = if title.is_empty() {
                session.add()
            } else {
                session.add_titled(title.join(" "))
            };
            if let Some(idea) = session.idea(id) {
                writeln!(out, "Added idea {} '{}'", id, idea.title)?;
            }
        }

        SessionCommand::Remove { id } => {
            let id = IdeaId(id);
            if session.remove(id) {
                writeln!(out, "Removed idea {}", id)?;
            } else {
                writeln!(out, "No idea with ID {}, nothing removed", id)?;
            }
        }

        SessionCommand::Title { id, title } => {
            let id = IdeaId(id);
            let title = title.join(" ");
            if session.update(id, IdeaUpdate::Title(title.clone())) {
                writeln!(out, "Idea {} renamed to '{}'", id, title)?;
            } else {
                writeln!(out, "No idea with ID {}, nothing changed", id)?;
            }
        }

        SessionCommand::Rate { id, factor, value } => {
            let id = IdeaId(id);
            if session.update(id, IdeaUpdate::Rating(factor, value)) {
                let stored = session.idea(id).map_or(0, |idea| idea.rating(factor));
                writeln!(out, "Idea {}: {} = {}", id, factor.label(), stored)?;
            } else {
                writeln!(out, "No idea with ID {}, nothing changed", id)?;
            }
        }

        SessionCommand::Weight { factor, value } => {
            let stored = session.set_weight(factor, value);
            writeln!(
                out,
                "{} weight = {}% (total {}%)",
                factor.label(),
                stored,
                session.total_weight()
            )?;
        }

        SessionCommand::Preset { preset } => {
            session.apply_preset(preset);
            writeln!(out, "{} Applied '{}'", preset.icon(), preset.label())?;
            render::weights(out, session.weights())?;
        }

        SessionCommand::Rank { json } => {
            let view = session.view();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                render::ranking(out, &view)?;
            }
        }

        SessionCommand::Show { id } => {
            let id = IdeaId(id);
            match session.idea(id) {
                Some(idea) => {
                    let breakdown = scoring::breakdown(idea, session.weights());
                    render::breakdown(out, idea, &breakdown)?;
                }
                None => writeln!(out, "No idea with ID {}", id)?,
            }
        }

        SessionCommand::List => render::ideas(out, session.ideas())?,
        SessionCommand::Weights => render::weights(out, session.weights())?,
        SessionCommand::Factors => render::factors(out)?,
        SessionCommand::Presets => render::presets(out)?,
        SessionCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

/// Interactive loop: prompt, read a line, run it, repeat until quit or EOF.
/// Command errors are shown to the user and the session carries on.
pub fn run_session<R: BufRead, W: Write>(session: &mut Session, input: R, mut out: W) -> Result<()> {
    writeln!(out, "Social Video Content Ranker")?;
    writeln!(out, "Type 'help' for commands, 'quit' to leave.")?;
    writeln!(out)?;
    render::ranking(&mut out, &session.view())?;

    let mut lines = input.lines();
    loop {
        write!(out, "{}", SESSION_PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(RankerError::Command(msg)) => {
                write!(out, "{}", msg)?;
                continue;
            }
            Err(e) => return Err(e),
        };

        log::debug!("Running {:?}", command);
        let mutates = matches!(
            command,
            SessionCommand::Add { .. }
                | SessionCommand::Remove { .. }
                | SessionCommand::Title { .. }
                | SessionCommand::Rate { .. }
                | SessionCommand::Weight { .. }
                | SessionCommand::Preset { .. }
        );

        match execute(session, command, &mut out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(RankerError::Io(e)) => return Err(RankerError::Io(e)),
            Err(e) => writeln!(out, "Error: {}", e)?,
        }

        // Every change is followed by a fresh ranking
        if mutates {
            writeln!(out)?;
            render::ranking(&mut out, &session.view())?;
        }
    }

    Ok(())
}
