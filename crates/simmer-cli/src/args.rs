//! Command-line arguments using clap's derive API.
//!
//! Argument structs stay in the CLI layer; where a command feeds the core
//! directly, a `From` conversion maps the arguments onto core types.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use jiff::Timestamp;
use simmer_core::Step;

/// Hands-free cooking companion
///
/// Simmer walks through a recipe step by step, runs step timers, interprets
/// spoken (or typed) commands and turns AI receipt scans into pantry items.
#[derive(Parser)]
#[command(version, about, name = "simmer")]
pub struct Args {
    /// Path to a JSON settings file. Defaults to
    /// $XDG_CONFIG_HOME/simmer/config.json when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Length of one countdown tick in milliseconds, overriding the settings
    /// file
    #[arg(long, global = true)]
    pub tick_millis: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a recipe and its steps
    Show(ShowArgs),
    /// Cook a recipe interactively
    #[command(alias = "c")]
    Cook(CookArgs),
    /// Run a standalone countdown
    #[command(alias = "t")]
    Timer(TimerArgs),
    /// Classify a voice command
    Voice(VoiceArgs),
    /// Parse an AI receipt scan into grocery items
    Receipt(ReceiptArgs),
}

#[derive(ClapArgs)]
pub struct ShowArgs {
    /// Recipe JSON file
    pub recipe: PathBuf,
}

/// Start an interactive cooking session
///
/// Each line read from stdin is a voice transcript ("next step", "start
/// timer", ...) or one of the session commands `done [n]`, `listen`,
/// `status` and `quit`.
#[derive(ClapArgs)]
pub struct CookArgs {
    /// Recipe JSON file
    pub recipe: PathBuf,
}

#[derive(ClapArgs)]
pub struct TimerArgs {
    /// Countdown length in seconds
    pub seconds: u32,
    /// Name shown when the countdown finishes
    #[arg(short, long, default_value = "Timer")]
    pub label: String,
}

impl From<TimerArgs> for Step {
    fn from(val: TimerArgs) -> Self {
        Step::new(1, val.label).with_timer(val.seconds)
    }
}

#[derive(ClapArgs)]
pub struct VoiceArgs {
    /// What was said, e.g. `simmer voice stop the timer`
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Print the action as JSON
    #[arg(long)]
    pub json: bool,
}

impl VoiceArgs {
    pub fn transcript(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(ClapArgs)]
pub struct ReceiptArgs {
    /// File holding the model's response text
    pub file: PathBuf,
    /// Scan time (RFC 3339). Defaults to now
    #[arg(long)]
    pub scanned_at: Option<Timestamp>,
    /// Days until scanned items expire, overriding the settings file
    #[arg(long)]
    pub shelf_life_days: Option<u32>,
    /// Print the scan as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_timer_args_into_step() {
        let args = Args::parse_from(["simmer", "timer", "90", "--label", "Eggs"]);
        let Commands::Timer(timer) = args.command else {
            panic!("expected timer command");
        };
        let step = Step::from(timer);
        assert_eq!(step.instruction, "Eggs");
        assert_eq!(step.timer, Some(90));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from(["simmer", "voice", "next", "step", "--tick-millis", "5"]);
        assert_eq!(args.tick_millis, Some(5));
        let Commands::Voice(voice) = args.command else {
            panic!("expected voice command");
        };
        assert_eq!(voice.transcript(), "next step");
    }
}
