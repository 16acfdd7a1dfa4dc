//! Roadmap CLI - command-line front end for the roadmap generator
//!
//! `roadmap generate <TOPIC>` runs the extraction pipeline against Gemini and
//! writes `<slug>_roadmap.json` plus an interactive `<slug>_roadmap.html`.
//! `roadmap render <JSON>` re-renders a saved graph.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;

pub use commands::{failure_report, generate, render_file, GenerateOutcome};
pub use config::AppConfig;
