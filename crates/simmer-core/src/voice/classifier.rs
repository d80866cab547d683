//! Keyword classifier for spoken cooking commands.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{Result, SimmerError},
    models::VoiceAction,
};

/// One recognisable phrase family and the action it maps to.
struct CommandPattern {
    regex: Regex,
    build: fn(&str) -> VoiceAction,
}

impl CommandPattern {
    fn new(pattern: &str, build: fn(&str) -> VoiceAction) -> Self {
        Self {
            regex: Regex::new(pattern).expect("command pattern must compile"),
            build,
        }
    }
}

// Checked in order; the first match wins. "stop timer" and "time left on the
// timer" must be tried before the bare "timer" of StartTimer.
static PATTERNS: Lazy<Vec<CommandPattern>> = Lazy::new(|| {
    vec![
        CommandPattern::new(r"\b(next step|continue|proceed)\b", |_| VoiceAction::NextStep),
        CommandPattern::new(r"\b(previous step|go back|back)\b", |_| {
            VoiceAction::PreviousStep
        }),
        CommandPattern::new(r"\b(stop|pause) timer\b", |_| VoiceAction::StopTimer),
        CommandPattern::new(r"\b(how long|time left|remaining)\b", |_| {
            VoiceAction::TimeRemaining
        }),
        CommandPattern::new(r"\b(start timer|set timer|timer)\b", |_| VoiceAction::StartTimer),
        CommandPattern::new(r"\b(what'?s next|next instruction)\b", |_| {
            VoiceAction::NextInstruction
        }),
        CommandPattern::new(r"\b(repeat|say again)\b", |_| VoiceAction::RepeatInstruction),
        CommandPattern::new(r"\b(substitute|replace|alternative for)\b", |text| {
            VoiceAction::Substitute {
                ingredient: extract_ingredient(text),
            }
        }),
        CommandPattern::new(r"\b(help|what can i say)\b", |_| VoiceAction::Help),
    ]
});

static RE_INGREDIENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:alternative for|substitute(?: for)?|replace(?: the)?) ([\w\s]+)")
        .expect("ingredient pattern must compile")
});

/// Phrases users can say, for help screens.
pub const AVAILABLE_COMMANDS: [&str; 9] = [
    "Next step",
    "Previous step",
    "Start timer",
    "Stop timer",
    "How long?",
    "What's next?",
    "Repeat",
    "Substitute [ingredient]",
    "Help",
];

/// Map a transcript to a [`VoiceAction`].
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// ```rust
/// use simmer_core::{models::VoiceAction, voice::classify};
///
/// assert_eq!(classify("Next step please").unwrap(), VoiceAction::NextStep);
/// assert_eq!(
///     classify("what's an alternative for heavy cream").unwrap(),
///     VoiceAction::Substitute { ingredient: Some("heavy cream".to_string()) }
/// );
/// assert!(classify("sing me a song").is_err());
/// ```
///
/// # Errors
///
/// Returns `SimmerError::UnrecognizedCommand` when no phrase matches.
pub fn classify(command: &str) -> Result<VoiceAction> {
    let normalized = command.trim().to_lowercase();

    let action = PATTERNS
        .iter()
        .find(|pattern| pattern.regex.is_match(&normalized))
        .map(|pattern| (pattern.build)(&normalized))
        .ok_or_else(|| SimmerError::UnrecognizedCommand {
            command: command.trim().to_string(),
        })?;

    debug!("Classified '{normalized}' as {}", action.name());
    Ok(action)
}

/// User-facing list of supported phrases.
pub fn available_commands() -> &'static [&'static str] {
    &AVAILABLE_COMMANDS
}

fn extract_ingredient(text: &str) -> Option<String> {
    RE_INGREDIENT
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|ingredient| ingredient.as_str().trim().to_string())
        .filter(|ingredient| !ingredient.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_commands() {
        assert_eq!(classify("NEXT STEP").unwrap(), VoiceAction::NextStep);
        assert_eq!(classify("  continue ").unwrap(), VoiceAction::NextStep);
        assert_eq!(classify("go back").unwrap(), VoiceAction::PreviousStep);
        assert_eq!(classify("previous step").unwrap(), VoiceAction::PreviousStep);
    }

    #[test]
    fn test_stop_timer_wins_over_start() {
        assert_eq!(classify("stop timer").unwrap(), VoiceAction::StopTimer);
        assert_eq!(classify("pause timer").unwrap(), VoiceAction::StopTimer);
        assert_eq!(classify("start timer").unwrap(), VoiceAction::StartTimer);
        assert_eq!(classify("set timer").unwrap(), VoiceAction::StartTimer);
    }

    #[test]
    fn test_time_remaining_wins_over_bare_timer() {
        assert_eq!(
            classify("how long is left on the timer").unwrap(),
            VoiceAction::TimeRemaining
        );
        assert_eq!(classify("time left?").unwrap(), VoiceAction::TimeRemaining);
    }

    #[test]
    fn test_instruction_commands() {
        assert_eq!(classify("What's next?").unwrap(), VoiceAction::NextInstruction);
        assert_eq!(classify("whats next").unwrap(), VoiceAction::NextInstruction);
        assert_eq!(classify("say again").unwrap(), VoiceAction::RepeatInstruction);
        assert_eq!(classify("what can I say").unwrap(), VoiceAction::Help);
    }

    #[test]
    fn test_substitute_extracts_ingredient() {
        assert_eq!(
            classify("substitute butter").unwrap(),
            VoiceAction::Substitute {
                ingredient: Some("butter".to_string())
            }
        );
        assert_eq!(
            classify("Can I replace the parmesan cheese").unwrap(),
            VoiceAction::Substitute {
                ingredient: Some("parmesan cheese".to_string())
            }
        );
        assert_eq!(
            classify("substitute").unwrap(),
            VoiceAction::Substitute { ingredient: None }
        );
    }

    #[test]
    fn test_word_boundaries() {
        // "background" contains "back" but is not a command
        assert!(matches!(
            classify("background music"),
            Err(SimmerError::UnrecognizedCommand { .. })
        ));
    }

    #[test]
    fn test_unrecognized_keeps_original_text() {
        match classify("  Play some jazz ") {
            Err(SimmerError::UnrecognizedCommand { command }) => {
                assert_eq!(command, "Play some jazz")
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_available_commands() {
        assert_eq!(available_commands().len(), 9);
        assert!(available_commands().contains(&"Substitute [ingredient]"));
    }
}
