//! Markdown views of recipes and live cooking guides.

use std::fmt;

use super::Clock;
use crate::{
    guide::CookingGuide,
    models::{Progress, Recipe, Step},
};

/// How a step's countdown should be shown.
enum TimerLabel {
    None,
    Preset(u32),
    Running(u32),
    Paused(u32),
}

/// Recipe card shown before cooking starts.
///
/// ```rust
/// use simmer_core::{display::RecipeOverview, models::{Recipe, Step}};
///
/// let recipe = Recipe {
///     title: "Toast".to_string(),
///     description: None,
///     servings: None,
///     ingredients: vec![],
///     steps: vec![Step::new(1, "Toast the bread").with_timer(90)],
/// };
/// let output = RecipeOverview(&recipe).to_string();
/// assert!(output.contains("# Toast"));
/// assert!(output.contains("### 1. Toast the bread"));
/// ```
pub struct RecipeOverview<'a>(pub &'a Recipe);

impl fmt::Display for RecipeOverview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let recipe = self.0;
        writeln!(f, "# {}", recipe.title)?;
        writeln!(f)?;

        if let Some(desc) = &recipe.description {
            writeln!(f, "{desc}")?;
            writeln!(f)?;
        }

        if let Some(servings) = recipe.servings {
            writeln!(f, "- Servings: {servings}")?;
        }
        writeln!(f, "- Steps: {}", recipe.steps.len())?;
        let timed = recipe.total_timer_seconds();
        if timed > 0 {
            let timed = u32::try_from(timed).unwrap_or(u32::MAX);
            writeln!(f, "- Timed cooking: {}", Clock(timed))?;
        }

        if !recipe.ingredients.is_empty() {
            writeln!(f, "\n## Ingredients")?;
            writeln!(f)?;
            for ingredient in &recipe.ingredients {
                writeln!(f, "- {ingredient}")?;
            }
        }

        if recipe.steps.is_empty() {
            writeln!(f, "\nNo steps in this recipe.")?;
        } else {
            writeln!(f, "\n## Steps")?;
            writeln!(f)?;
            for step in &recipe.steps {
                let label = step.timer.map_or(TimerLabel::None, TimerLabel::Preset);
                write_step(f, step, false, &label)?;
            }
        }
        Ok(())
    }
}

/// Live view of a cooking session: progress bar text and per-step status.
pub struct GuideView<'a, S>(pub &'a CookingGuide<S>);

impl<S> fmt::Display for GuideView<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guide = self.0;
        writeln!(f, "{}", ProgressLine(guide.progress()))?;
        writeln!(f)?;

        for (index, step) in guide.steps().iter().enumerate() {
            let label = timer_label(guide, index, step);
            write_step(f, step, guide.is_step_complete(step.number), &label)?;
        }
        Ok(())
    }
}

/// `completed / total steps completed`, with a percentage when meaningful.
pub struct ProgressLine(pub Progress);

impl fmt::Display for ProgressLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Progress { completed, total } = self.0;
        write!(f, "**{completed} / {total} steps completed**")?;
        if let Some(fraction) = self.0.fraction() {
            write!(f, " ({:.0}%)", fraction * 100.0)?;
        }
        Ok(())
    }
}

fn timer_label<S>(guide: &CookingGuide<S>, index: usize, step: &Step) -> TimerLabel {
    let Some(preset) = step.timer else {
        return TimerLabel::None;
    };
    if guide.active_index() != index {
        return TimerLabel::Preset(preset);
    }
    if guide.is_timer_running() {
        TimerLabel::Running(guide.time_remaining())
    } else if guide.time_remaining() > 0 {
        TimerLabel::Paused(guide.time_remaining())
    } else {
        TimerLabel::Preset(preset)
    }
}

fn write_step(
    f: &mut fmt::Formatter<'_>,
    step: &Step,
    completed: bool,
    timer: &TimerLabel,
) -> fmt::Result {
    let icon = if completed { "✓ Done" } else { "○ Todo" };
    writeln!(f, "### {}. {} ({icon})", step.number, step.instruction)?;
    writeln!(f)?;

    match timer {
        TimerLabel::None => {}
        TimerLabel::Preset(seconds) => writeln!(f, "- Timer: {seconds} sec")?,
        TimerLabel::Running(left) => writeln!(f, "- Timer: ⏱ {} running", Clock(*left))?,
        TimerLabel::Paused(left) => writeln!(f, "- Timer: {} paused", Clock(*left))?,
    }
    for tip in &step.tips {
        writeln!(f, "- Tip: *{tip}*")?;
    }
    if !matches!(timer, TimerLabel::None) || !step.tips.is_empty() {
        writeln!(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::EventLog;

    fn steps() -> Vec<Step> {
        vec![
            Step::new(1, "Boil pasta")
                .with_timer(600)
                .with_tip("Salt the water"),
            Step::new(2, "Make sauce").with_timer(120),
            Step::new(3, "Serve"),
        ]
    }

    #[test]
    fn test_guide_view_shows_progress_and_status() {
        let mut guide = CookingGuide::new(steps(), EventLog::new());
        guide.mark_step_complete(3);
        guide.start_timer(0, 600);
        guide.tick();

        let output = GuideView(&guide).to_string();
        assert!(output.contains("**1 / 3 steps completed** (33%)"));
        assert!(output.contains("### 1. Boil pasta (○ Todo)"));
        assert!(output.contains("- Timer: ⏱ 9:59 running"));
        assert!(output.contains("- Tip: *Salt the water*"));
        assert!(output.contains("- Timer: 120 sec"));
        assert!(output.contains("### 3. Serve (✓ Done)"));
    }

    #[test]
    fn test_guide_view_paused_timer() {
        let mut guide = CookingGuide::new(steps(), EventLog::new());
        guide.start_timer(1, 120);
        guide.tick();
        guide.stop_timer();

        let output = GuideView(&guide).to_string();
        assert!(output.contains("- Timer: 1:59 paused"));
        assert!(output.contains("- Timer: 600 sec"));
    }

    #[test]
    fn test_progress_line_empty_guide() {
        assert_eq!(
            ProgressLine(Progress::new(0, 0)).to_string(),
            "**0 / 0 steps completed**"
        );
    }

    #[test]
    fn test_overview_without_steps() {
        let recipe = Recipe {
            title: "Water".to_string(),
            description: Some("Just water".to_string()),
            servings: Some(1),
            ingredients: vec!["1 glass of water".to_string()],
            steps: vec![],
        };
        let output = RecipeOverview(&recipe).to_string();
        assert!(output.contains("- Servings: 1"));
        assert!(output.contains("## Ingredients"));
        assert!(output.contains("No steps in this recipe."));
        assert!(!output.contains("Timed cooking"));
    }
}
