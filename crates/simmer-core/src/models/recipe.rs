//! Recipe model: the source of a cooking guide's step list.

use std::{collections::HashSet, path::Path};

use serde::{Deserialize, Serialize};

use super::Step;
use crate::error::{IoResultExt, Result, SimmerError};

/// A recipe as stored in bundled data or handed over by a content source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Recipe title
    pub title: String,

    /// Optional short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Number of servings, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,

    /// Free-form ingredient lines ("400g spaghetti")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ingredients: Vec<String>,

    /// Ordered procedure
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Parse a recipe from JSON text and validate its steps.
    pub fn from_json(text: &str) -> Result<Self> {
        let recipe: Recipe = serde_json::from_str(text)?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Read and validate a recipe file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).fs_context(path)?;
        Self::from_json(&text)
    }

    /// Check the step list: numbers positive and unique, instructions
    /// non-blank. An empty step list is accepted.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(SimmerError::invalid_input("title").with_reason("title cannot be empty"));
        }

        let mut seen = HashSet::with_capacity(self.steps.len());
        for step in &self.steps {
            if step.number == 0 {
                return Err(SimmerError::invalid_input("steps")
                    .with_reason("step numbers must be positive"));
            }
            if !seen.insert(step.number) {
                return Err(SimmerError::invalid_input("steps")
                    .with_reason(format!("duplicate step number {}", step.number)));
            }
            if step.instruction.trim().is_empty() {
                return Err(SimmerError::invalid_input("steps").with_reason(format!(
                    "step {} has an empty instruction",
                    step.number
                )));
            }
        }
        Ok(())
    }

    /// Sum of all step timers in seconds.
    pub fn total_timer_seconds(&self) -> u64 {
        self.steps
            .iter()
            .filter_map(|step| step.timer)
            .map(u64::from)
            .sum()
    }
}
