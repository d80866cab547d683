//! Command handlers: load inputs, call into `simmer_core`, render results.

use std::path::Path;

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::{debug, info};
use simmer_core::{
    classify,
    display::{CountdownLine, Notice, ReceiptReport, RecipeOverview},
    drive_countdown,
    receipt::{batches, BACKEND_BATCH_SIZE},
    parse_response, CookingGuide, EventLog, Recipe, Settings, Step, VoiceAction,
};
use tokio::io::BufReader;

use crate::{
    args::{CookArgs, ReceiptArgs, ShowArgs, TimerArgs, VoiceArgs},
    kitchen::Kitchen,
    renderer::TerminalRenderer,
};

/// Executes one parsed command with the resolved settings.
pub struct Cli {
    settings: Settings,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(settings: Settings, renderer: TerminalRenderer) -> Self {
        Self { settings, renderer }
    }

    pub fn show(&self, args: ShowArgs) -> Result<()> {
        let recipe = load_recipe(&args.recipe)?;
        self.renderer.render(RecipeOverview(&recipe))
    }

    pub async fn cook(&self, args: CookArgs) -> Result<()> {
        let recipe = load_recipe(&args.recipe)?;
        self.renderer.render(format!("# {}\n\n", recipe.title))?;

        Kitchen::new(recipe.steps, &self.settings, &self.renderer)
            .run(BufReader::new(tokio::io::stdin()))
            .await
    }

    pub async fn timer(&self, args: TimerArgs) -> Result<()> {
        let seconds = args.seconds;
        let label = args.label.clone();
        let mut guide = CookingGuide::new(vec![Step::from(args)], EventLog::new());

        if seconds > 0 {
            self.renderer.render(CountdownLine(seconds))?;
        }
        guide.start_step_timer(0);

        let mut write_error = None;
        drive_countdown(&mut guide, self.settings.tick_period(), |remaining| {
            if let Err(e) = self.renderer.render(CountdownLine(remaining)) {
                write_error.get_or_insert(e);
            }
        })
        .await;
        if let Some(e) = write_error {
            return Err(e);
        }

        if seconds == 0 {
            self.renderer.render(CountdownLine(0))?;
        }
        if guide.sink().timer_completions() > 0 {
            info!("Timer '{label}' finished");
            self.renderer
                .render(Notice::alert(format!("Timer finished: {label}")))?;
        }
        Ok(())
    }

    pub fn voice(&self, args: VoiceArgs) -> Result<()> {
        let transcript = args.transcript();
        let action = classify(&transcript).context("Could not classify voice command")?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&action)?);
            return Ok(());
        }

        let mut output = format!("**Action:** {}\n", action.name());
        if let VoiceAction::Substitute {
            ingredient: Some(ingredient),
        } = &action
        {
            output.push_str(&format!("**Ingredient:** {ingredient}\n"));
        }
        self.renderer.render(output)
    }

    pub fn receipt(&self, args: ReceiptArgs) -> Result<()> {
        let text = std::fs::read_to_string(&args.file).with_context(|| {
            format!("Failed to read receipt response '{}'", args.file.display())
        })?;
        let scanned_at = args.scanned_at.unwrap_or_else(Timestamp::now);
        let shelf_life_days = args.shelf_life_days.unwrap_or(self.settings.shelf_life_days);

        let scan = parse_response(&text, scanned_at, shelf_life_days)
            .context("Failed to parse receipt response")?;
        debug!(
            "Receipt scan: {} items, {} rejected",
            scan.items.len(),
            scan.rejected.len()
        );

        if args.json {
            println!("{}", serde_json::to_string_pretty(&scan)?);
            return Ok(());
        }

        self.renderer.render(ReceiptReport(&scan))?;
        if !scan.items.is_empty() {
            let batch_count = batches(&scan.items, BACKEND_BATCH_SIZE).count();
            self.renderer.render(format!(
                "\n**{} items ready to save in {batch_count} batch(es)**\n",
                scan.items.len()
            ))?;
        }
        Ok(())
    }
}

fn load_recipe(path: &Path) -> Result<Recipe> {
    Recipe::load(path).with_context(|| format!("Failed to load recipe '{}'", path.display()))
}
