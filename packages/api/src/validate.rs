//! Client-side input checks, run before a request is dispatched.
//!
//! Limits mirror what the backend enforces, so input that fails here would have
//! been rejected anyway; catching it locally saves the round trip and lets the
//! form show the problem next to the field. Lengths count characters (Unicode
//! scalar values) of the whitespace-trimmed input.

use thiserror::Error;

pub const FEEDBACK_MIN: usize = 10;
pub const FEEDBACK_MAX: usize = 1000;
pub const GOAL_MIN: usize = 5;
pub const GOAL_MAX: usize = 500;
pub const POST_MAX: usize = 2000;
pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 100;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 100;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn length(field: &'static str, value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let n = value.trim().chars().count();
    if n == 0 {
        return Err(ValidationError::Required { field });
    }
    if n < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if n > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Impact feedback, for a user or a post.
pub fn feedback(text: &str) -> Result<(), ValidationError> {
    length("Feedback", text, FEEDBACK_MIN, FEEDBACK_MAX)
}

pub fn goal(text: &str) -> Result<(), ValidationError> {
    length("Goal", text, GOAL_MIN, GOAL_MAX)
}

pub fn post_content(text: &str) -> Result<(), ValidationError> {
    length("Post", text, 1, POST_MAX)
}

pub fn username(name: &str) -> Result<(), ValidationError> {
    length("Username", name, USERNAME_MIN, USERNAME_MAX)
}

pub fn password(password: &str) -> Result<(), ValidationError> {
    let n = password.chars().count();
    if n < PASSWORD_MIN {
        return Err(ValidationError::TooShort {
            field: "Password",
            min: PASSWORD_MIN,
        });
    }
    if n > PASSWORD_MAX {
        return Err(ValidationError::TooLong {
            field: "Password",
            max: PASSWORD_MAX,
        });
    }
    Ok(())
}

pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

pub fn coordinates(latitude: f64, longitude: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(ValidationError::OutOfRange {
            field: "Latitude",
            min: -90.0,
            max: 90.0,
        });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(ValidationError::OutOfRange {
            field: "Longitude",
            min: -180.0,
            max: 180.0,
        });
    }
    Ok(())
}

/// Parse a coordinate typed into a form field. Range is checked by [`coordinates`].
pub fn parse_coordinate(field: &'static str, input: &str) -> Result<f64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required { field });
    }
    input
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_boundary() {
        assert_eq!(
            feedback("too short"),
            Err(ValidationError::TooShort { field: "Feedback", min: 10 })
        );
        assert!(feedback("ten chars!").is_ok());
        assert!(feedback("  ten chars!  ").is_ok());
        assert_eq!(feedback("   "), Err(ValidationError::Required { field: "Feedback" }));
        assert!(feedback(&"x".repeat(1001)).is_err());
        // Characters, not bytes.
        assert!(feedback("héllo wörl").is_ok());
        assert!(feedback("日本語のテキスト").is_err());
    }

    #[test]
    fn test_goal_and_post_limits() {
        assert!(goal("Ship").is_err());
        assert!(goal("Ship v1").is_ok());
        assert!(post_content("").is_err());
        assert!(post_content("a").is_ok());
        assert!(post_content(&"a".repeat(2001)).is_err());
    }

    #[test]
    fn test_register_fields() {
        assert!(email("ada@example.com").is_ok());
        assert_eq!(email("ada.example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(email("@example.com"), Err(ValidationError::InvalidEmail));
        assert!(username("ad").is_err());
        assert!(username("ada").is_ok());
        assert!(password("1234567").is_err());
        assert!(password("12345678").is_ok());
    }

    #[test]
    fn test_coordinates() {
        assert!(coordinates(52.37, 4.89).is_ok());
        assert!(coordinates(-90.0, 180.0).is_ok());
        assert!(coordinates(90.5, 0.0).is_err());
        assert!(coordinates(0.0, -181.0).is_err());
        assert_eq!(
            coordinates(0.0, 200.0).unwrap_err().to_string(),
            "Longitude must be between -180 and 180"
        );
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate("Latitude", " 52.37 "), Ok(52.37));
        assert_eq!(
            parse_coordinate("Latitude", ""),
            Err(ValidationError::Required { field: "Latitude" })
        );
        assert_eq!(
            parse_coordinate("Longitude", "east"),
            Err(ValidationError::NotANumber { field: "Longitude" })
        );
        assert!(parse_coordinate("Longitude", "NaN").is_err());
        assert_eq!(
            password_confirmation("hunter22", "hunter23"),
            Err(ValidationError::PasswordMismatch)
        );
    }
}
