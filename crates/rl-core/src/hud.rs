//! Status bar layout
//!
//! Pure layout math for the frontend's health bar: how many cells to fill,
//! what label to print, which color to use. A non-positive maximum is a
//! configuration mistake and fails fast instead of being clamped away.

use thiserror::Error;

use crate::data::colors::{self, Rgb};

/// Invalid status bar configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HudError {
    #[error("bar maximum must be positive, got {0}")]
    NonPositiveMaximum(i32),

    #[error("bar width must be positive, got {0}")]
    NonPositiveWidth(i32),
}

/// Computed layout for a horizontal value bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarLayout {
    /// Number of filled cells, in `0..=total_width`
    pub filled_width: i32,
    /// Text drawn over the bar, e.g. "HP: 24/30"
    pub label: String,
    /// Fill color picked from the remaining fraction
    pub fill_color: Rgb,
}

/// Lay out a health bar for the given current/maximum values.
///
/// The current value is clamped into `[0, maximum]` before use; a bad
/// maximum or width is rejected outright.
pub fn health_bar(current: i32, maximum: i32, total_width: i32) -> Result<BarLayout, HudError> {
    if maximum <= 0 {
        return Err(HudError::NonPositiveMaximum(maximum));
    }
    if total_width <= 0 {
        return Err(HudError::NonPositiveWidth(total_width));
    }

    let current = current.clamp(0, maximum);
    let fraction = current as f64 / maximum as f64;
    let filled_width = (fraction * total_width as f64) as i32;

    let fill_color = if fraction < 0.25 {
        colors::BAR_LOW
    } else if fraction < 0.50 {
        colors::BAR_HALF
    } else {
        colors::BAR_FULL
    };

    Ok(BarLayout {
        filled_width,
        label: format!("HP: {}/{}", current, maximum),
        fill_color,
    })
}
