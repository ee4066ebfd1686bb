//! Field-level validation rules shared by the entity constructors.
//!
//! Lengths are measured in Unicode scalar values, not bytes, and input is
//! never trimmed before measuring.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive bounds for `Publication::name`, in characters.
pub const PUBLICATION_NAME_CHARS: (usize, usize) = (2, 16);
/// Inclusive bounds for `Contribution::title`, in characters.
pub const CONTRIBUTION_TITLE_CHARS: (usize, usize) = (5, 50);

/// A string field violated its length or non-emptiness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyCreatorName,
    PublicationNameLength { chars: usize },
    EmptyCategory,
    TitleLength { chars: usize },
}

impl ValidationError {
    /// Stable machine-readable code, safe to log.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyCreatorName => "empty_creator_name",
            Self::PublicationNameLength { .. } => "publication_name_length",
            Self::EmptyCategory => "empty_category",
            Self::TitleLength { .. } => "title_length",
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCreatorName => write!(f, "creator name must not be empty"),
            Self::PublicationNameLength { chars } => write!(
                f,
                "publication name must be between {} and {} characters, got {chars}",
                PUBLICATION_NAME_CHARS.0, PUBLICATION_NAME_CHARS.1
            ),
            Self::EmptyCategory => write!(f, "publication category must not be empty"),
            Self::TitleLength { chars } => write!(
                f,
                "contribution title must be between {} and {} characters, got {chars}",
                CONTRIBUTION_TITLE_CHARS.0, CONTRIBUTION_TITLE_CHARS.1
            ),
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn validate_creator_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyCreatorName);
    }
    Ok(())
}

pub(crate) fn validate_publication_name(value: &str) -> Result<(), ValidationError> {
    let chars = value.chars().count();
    if !within(chars, PUBLICATION_NAME_CHARS) {
        return Err(ValidationError::PublicationNameLength { chars });
    }
    Ok(())
}

pub(crate) fn validate_category(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(value: &str) -> Result<(), ValidationError> {
    let chars = value.chars().count();
    if !within(chars, CONTRIBUTION_TITLE_CHARS) {
        return Err(ValidationError::TitleLength { chars });
    }
    Ok(())
}

fn within(chars: usize, (min, max): (usize, usize)) -> bool {
    (min..=max).contains(&chars)
}

#[cfg(test)]
mod tests {
    use super::{
        validate_category, validate_creator_name, validate_publication_name, validate_title,
        ValidationError,
    };

    #[test]
    fn publication_name_bounds_are_inclusive() {
        assert_eq!(
            validate_publication_name("A"),
            Err(ValidationError::PublicationNameLength { chars: 1 })
        );
        assert!(validate_publication_name("AB").is_ok());
        assert!(validate_publication_name("ABCDEFGHIJKLMNOP").is_ok());
        assert_eq!(
            validate_publication_name("ABCDEFGHIJKLMNOPQ"),
            Err(ValidationError::PublicationNameLength { chars: 17 })
        );
    }

    #[test]
    fn title_bounds_are_inclusive() {
        assert!(validate_title("Bad").is_err());
        assert!(validate_title("Five!").is_ok());
        assert!(validate_title(&"x".repeat(50)).is_ok());
        assert_eq!(
            validate_title(&"x".repeat(51)),
            Err(ValidationError::TitleLength { chars: 51 })
        );
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 5 characters, 10 bytes.
        assert!(validate_title("ééééé").is_ok());
        assert!(validate_publication_name("ü").is_err());
    }

    #[test]
    fn empty_strings_are_rejected() {
        assert_eq!(
            validate_creator_name(""),
            Err(ValidationError::EmptyCreatorName)
        );
        assert_eq!(validate_category(""), Err(ValidationError::EmptyCategory));
        assert!(validate_creator_name(" ").is_ok());
    }

    #[test]
    fn display_names_the_bounds() {
        let message = ValidationError::TitleLength { chars: 3 }.to_string();
        assert!(message.contains("between 5 and 50"));
        assert!(message.contains("got 3"));
    }
}
