use std::io::{self, Write};

use crate::model::{fields, Record};

pub const BANNER: &str = "==================== RECIPE RECOMMENDATION ====================";
pub const CLOSING_BANNER: &str =
    "===============================================================";

/// Render one recipe as lines of text.
///
/// Numeric lines are printed when the field is on the record; the free-text
/// sections (ingredients, instructions, description) additionally require a
/// non-null value. Nothing here can fail, whatever subset of fields the record
/// carries.
pub fn format_recipe(recipe: &Record) -> Vec<String> {
    let mut lines = vec![String::new(), BANNER.to_string()];

    let name = recipe.name().unwrap_or("Unknown".into());
    lines.push(format!("Name: {name}"));

    if let Some(minutes) = recipe.value(fields::MINUTES) {
        lines.push(format!("Cooking Time: {minutes} minutes"));
    }
    if let Some(steps) = recipe.value(fields::N_STEPS) {
        lines.push(format!("Number of Steps: {steps}"));
    }
    if let Some(count) = recipe.value(fields::N_INGREDIENTS) {
        lines.push(format!("Number of Ingredients: {count}"));
    }

    let sections = [
        ("Ingredients:", fields::INGREDIENTS),
        ("Instructions:", fields::STEPS),
        ("Description:", fields::DESCRIPTION),
    ];
    for (heading, field) in sections {
        if let Some(text) = recipe.text(field) {
            lines.push(String::new());
            lines.push(heading.to_string());
            lines.push(text.into_owned());
        }
    }

    lines.push(CLOSING_BANNER.to_string());
    lines
}

/// Write the formatted recipe to `out`.
pub fn display_recipe<W: Write + ?Sized>(out: &mut W, recipe: &Record) -> io::Result<()> {
    for line in format_recipe(recipe) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
