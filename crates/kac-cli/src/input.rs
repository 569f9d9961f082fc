//! Recipe loading.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kac_physics::DrumRecipe;

/// Reads and parses a JSON recipe file.
pub fn load_recipe(path: &Path) -> Result<DrumRecipe> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read recipe file: {}", path.display()))?;
    let recipe = DrumRecipe::from_json(&json)
        .with_context(|| format!("Failed to parse recipe file: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        backend = recipe.synthesis.as_str(),
        "loaded recipe"
    );
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let err = load_recipe(Path::new("/nonexistent/recipe.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read recipe file"));
    }

    #[test]
    fn test_parse_error_keeps_cause() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"duration_seconds": 1.0}"#).unwrap();
        let err = load_recipe(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse recipe file"));
        assert!(format!("{:#}", err).contains("invalid recipe"));
    }
}
