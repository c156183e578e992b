//! Interactive prompts

use anyhow::Result;
use athlete_perf_domain::{TestDimension, SCORE_MAX, SCORE_MIN};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Prompt for an athlete name; blank answers are re-asked
pub fn prompt_name() -> Result<String> {
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Athlete name")
        .validate_with(|input: &String| check_name(input).map(|_| ()))
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Prompt for one test score until it parses and lies in range
pub fn prompt_score(dimension: TestDimension) -> Result<f64> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("{} score (0-100)", dimension))
        .validate_with(|input: &String| parse_score(input).map(|_| ()))
        .interact_text()?;
    parse_score(&raw).map_err(anyhow::Error::msg)
}

/// Prompt for confirmation
pub fn confirm(prompt: &str) -> Result<bool> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;
    Ok(confirmed)
}

/// Trimmed name, or the message shown for a blank one
pub fn check_name(input: &str) -> std::result::Result<&str, &'static str> {
    let name = input.trim();
    if name.is_empty() {
        Err("Name cannot be empty")
    } else {
        Ok(name)
    }
}

/// Parse a score typed by the user
pub fn parse_score(input: &str) -> std::result::Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", input.trim()))?;
    if !value.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&value) {
        return Err(format!(
            "Score must be between {} and {}",
            SCORE_MIN, SCORE_MAX
        ));
    }
    Ok(value)
}
