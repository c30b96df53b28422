//! URL-safe slug type for products, categories, articles, and content pages.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug may only contain lowercase letters, digits, and hyphens")]
    InvalidCharacter,
    /// The input starts or ends with a hyphen.
    #[error("slug cannot start or end with a hyphen")]
    EdgeHyphen,
}

/// A URL-safe identifier segment.
///
/// Slugs appear directly in paths like `/products/{slug}` and
/// `/articles/{slug}`, so they are restricted to lowercase ASCII letters,
/// digits, and interior hyphens.
///
/// ## Examples
///
/// ```
/// use amrita_core::Slug;
///
/// assert!(Slug::parse("ashwagandha-capsules").is_ok());
/// assert!(Slug::parse("Triphala").is_err());   // uppercase
/// assert!(Slug::parse("-leading").is_err());   // edge hyphen
/// assert!(Slug::parse("a b").is_err());        // whitespace
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum length of a slug.
    pub const MAX_LENGTH: usize = 120;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns a [`SlugError`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, SlugError> {
        if input.is_empty() {
            return Err(SlugError::Empty);
        }
        if input.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }
        if !input
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(SlugError::InvalidCharacter);
        }
        if input.starts_with('-') || input.ends_with('-') {
            return Err(SlugError::EdgeHyphen);
        }

        Ok(Self(input.to_owned()))
    }

    /// Derive a slug from free text (e.g., a product name).
    ///
    /// Lowercases, maps runs of non-alphanumeric characters to single
    /// hyphens, and trims edge hyphens. Returns `None` if nothing
    /// slug-worthy remains.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let mut out = String::with_capacity(text.len());
        let mut last_hyphen = true; // suppress leading hyphen
        for c in text.chars() {
            if c.is_ascii_alphanumeric() {
                out.push(c.to_ascii_lowercase());
                last_hyphen = false;
            } else if !last_hyphen {
                out.push('-');
                last_hyphen = true;
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        out.truncate(Self::MAX_LENGTH);
        if out.is_empty() { None } else { Some(Self(out)) }
    }

    /// Get the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert!(Slug::parse("ashwagandha-capsules").is_ok());
        assert!(Slug::parse("triphala").is_ok());
        assert!(Slug::parse("chyawanprash-500g").is_ok());
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(matches!(Slug::parse(""), Err(SlugError::Empty)));
        assert!(matches!(
            Slug::parse("Triphala"),
            Err(SlugError::InvalidCharacter)
        ));
        assert!(matches!(
            Slug::parse("a b c"),
            Err(SlugError::InvalidCharacter)
        ));
        assert!(matches!(Slug::parse("-edge"), Err(SlugError::EdgeHyphen)));
        assert!(matches!(Slug::parse("edge-"), Err(SlugError::EdgeHyphen)));
    }

    #[test]
    fn test_from_text() {
        let slug = Slug::from_text("Brahmi Memory Tonic (200ml)").expect("slug");
        assert_eq!(slug.as_str(), "brahmi-memory-tonic-200ml");
    }

    #[test]
    fn test_from_text_empty() {
        assert!(Slug::from_text("!!!").is_none());
    }
}
