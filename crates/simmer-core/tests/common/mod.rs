use std::path::PathBuf;

use tempfile::TempDir;

pub const GARLIC_PASTA: &str = r#"{
    "title": "Creamy Garlic Pasta",
    "description": "Weeknight pasta in a garlic cream sauce",
    "servings": 4,
    "ingredients": ["400g spaghetti", "4 cloves garlic", "200ml cream"],
    "steps": [
        {"number": 1, "instruction": "Boil pasta in salted water", "timer": 600},
        {"number": 2, "instruction": "Sauté garlic in butter", "timer": 120,
         "tips": ["Keep the heat low so the garlic does not burn"]},
        {"number": 3, "instruction": "Add cream and simmer", "timer": 300},
        {"number": 4, "instruction": "Toss pasta with sauce and serve"}
    ]
}"#;

/// Helper function to write a recipe file into a fresh temp dir
pub fn write_recipe(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("recipe.json");
    std::fs::write(&path, contents).expect("Failed to write recipe");
    (temp_dir, path)
}
