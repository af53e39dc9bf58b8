//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use crate::views;

/// Format a whole-rupee amount with Indian digit grouping.
///
/// Usage in templates: `{{ card.price|inr }}`
#[askama::filter_fn]
pub fn inr(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    match raw.parse::<i64>() {
        Ok(amount) => Ok(views::format_inr(amount)),
        Err(_) => Ok(raw),
    }
}

/// Render a rating or star count as a 5-glyph star row.
///
/// Fractional inputs get the half-step cue; integers fill exactly that
/// many stars.
///
/// Usage in templates: `{{ card.rating|stars }}` or `{{ review.stars|stars }}`
#[askama::filter_fn]
pub fn stars(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    let rating = raw.parse::<f32>().unwrap_or(0.0);
    Ok(views::star_glyphs(shopverse_core::Rating::clamped(rating)))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
