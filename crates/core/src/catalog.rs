//! Catalog field constraints and validation functions.
//!
//! Items are books or films; every text field is free-form but required,
//! the year must be plausible, and ratings are whole stars from 1 to 5.
//! Handlers run these checks before any store call so a validation
//! failure never leaves a partial write behind.

use chrono::Datelike;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Earliest accepted publication/release year.
pub const MIN_YEAR: i32 = 1000;

/// How far into the future a year may lie (announced releases).
pub const YEAR_FUTURE_SLACK: i32 = 10;

/// Minimum rating value (stars).
pub const MIN_RATING: i32 = 1;

/// Maximum rating value (stars).
pub const MAX_RATING: i32 = 5;

/// Latest accepted year: the current year plus [`YEAR_FUTURE_SLACK`].
pub fn max_year() -> i32 {
    chrono::Utc::now().year() + YEAR_FUTURE_SLACK
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate that the title is non-empty.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("title must not be empty".to_string());
    }
    Ok(())
}

/// Validate that the creator (author or director) is non-empty.
pub fn validate_creator(creator: &str) -> Result<(), String> {
    if creator.trim().is_empty() {
        return Err("creator must not be empty".to_string());
    }
    Ok(())
}

/// Validate that the genre is non-empty. Genres are free-form text,
/// not an enum.
pub fn validate_genre(genre: &str) -> Result<(), String> {
    if genre.trim().is_empty() {
        return Err("genre must not be empty".to_string());
    }
    Ok(())
}

/// Validate that the year lies in `[MIN_YEAR, current year + 10]`.
pub fn validate_year(year: i32) -> Result<(), String> {
    let max = max_year();
    if year < MIN_YEAR || year > max {
        return Err(format!("year must be between {MIN_YEAR} and {max}"));
    }
    Ok(())
}

/// Validate that a rating value lies in `[MIN_RATING, MAX_RATING]`.
pub fn validate_rating_value(value: i32) -> Result<(), String> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(format!(
            "rating value must be between {MIN_RATING} and {MAX_RATING}"
        ));
    }
    Ok(())
}
