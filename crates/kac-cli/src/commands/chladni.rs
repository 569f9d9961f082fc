//! Chladni command implementation
//!
//! Prints the nodal-line pattern of one membrane mode as ASCII art.

use std::collections::HashSet;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use kac_physics::{chladni_pattern, DrumShape, ModeIndex, SamplePoint};

use crate::input::load_recipe;

/// Parses a mode index written as `I,J`.
pub fn parse_mode(s: &str) -> Result<ModeIndex, String> {
    let (first, second) = s
        .split_once(',')
        .ok_or_else(|| format!("expected I,J but got '{}'", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid mode index '{}': {}", part.trim(), e))
    };
    Ok(ModeIndex::new(parse(first)?, parse(second)?))
}

/// Run the chladni command
///
/// # Arguments
/// * `recipe_path` - Path to the JSON recipe (only its shape is used)
/// * `mode` - Zero-based mode index
/// * `resolution` - Cells across the longest extent of the shape
///
/// # Returns
/// Exit code: 0 on success
pub fn run(recipe_path: &str, mode: ModeIndex, resolution: usize) -> Result<ExitCode> {
    let recipe = load_recipe(Path::new(recipe_path))?;
    let art = render_ascii(&recipe.shape, mode, resolution)?;

    println!(
        "{} {} mode ({}, {})",
        "Chladni:".cyan().bold(),
        recipe.shape.kind(),
        mode.first,
        mode.second
    );
    print!("{}", art);
    Ok(ExitCode::SUCCESS)
}

/// Draws the pattern with `y` increasing upwards: `#` on a nodal line, `.`
/// elsewhere on the membrane, blank outside it.
pub fn render_ascii(shape: &DrumShape, mode: ModeIndex, resolution: usize) -> Result<String> {
    let pattern: HashSet<SamplePoint> = chladni_pattern(shape, mode, resolution)
        .context("Failed to compute Chladni pattern")?
        .into_iter()
        .collect();
    let raster = shape.raster(resolution, 0)?;
    let mask = raster.mask(shape);
    let (size_x, size_y) = raster.dimensions();

    let mut art = String::with_capacity((size_x + 1) * size_y);
    for y in (0..size_y).rev() {
        let row: String = (0..size_x)
            .map(|x| {
                if pattern.contains(&SamplePoint::new(x, y)) {
                    '#'
                } else if mask.is_interior(x, y) {
                    '.'
                } else {
                    ' '
                }
            })
            .collect();
        art.push_str(row.trim_end());
        art.push('\n');
    }
    Ok(art)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("1,2").unwrap(), ModeIndex::new(1, 2));
        assert_eq!(parse_mode(" 0 , 3").unwrap(), ModeIndex::new(0, 3));
        assert!(parse_mode("1").is_err());
        assert!(parse_mode("a,1").is_err());
        assert!(parse_mode("-1,1").is_err());
    }

    #[test]
    fn test_rectangle_art() {
        let shape = DrumShape::Rectangular {
            width: 1.0,
            height: 0.5,
        };
        let art = render_ascii(&shape, ModeIndex::new(1, 0), 4).unwrap();
        assert_eq!(art, ".#..\n.#..\n");
    }

    #[test]
    fn test_fundamental_has_no_lines() {
        let shape = DrumShape::Circular { radius: 0.3 };
        let art = render_ascii(&shape, ModeIndex::new(0, 0), 12).unwrap();
        assert!(!art.contains('#'));
        assert!(art.contains('.'));
    }
}
