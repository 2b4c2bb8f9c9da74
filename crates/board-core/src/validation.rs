//! Input validation for post forms and path ids.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use crate::domain::PostInput;

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_AUTHOR_CHARS: usize = 100;

/// A post form field that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Title,
    Content,
    Author,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Author => "author",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failures, plus the trimmed values so a form can be
/// re-rendered with what the user typed.
#[derive(Debug, Clone, Error)]
#[error("invalid post input ({} field errors)", .errors.len())]
pub struct ValidationErrors {
    errors: BTreeMap<Field, &'static str>,
    values: PostInput,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The trimmed submitted values.
    pub fn values(&self) -> &PostInput {
        &self.values
    }
}

/// Trim and check a submitted post form.
///
/// Missing values count as empty. Lengths are measured in characters.
pub fn validate_post_input(
    title: Option<&str>,
    content: Option<&str>,
    author: Option<&str>,
) -> Result<PostInput, ValidationErrors> {
    let values = PostInput::new(
        title.unwrap_or_default().trim(),
        content.unwrap_or_default().trim(),
        author.unwrap_or_default().trim(),
    );

    let mut errors = BTreeMap::new();

    if values.title.is_empty() {
        errors.insert(Field::Title, "Please enter a title.");
    } else if values.title.chars().count() > MAX_TITLE_CHARS {
        errors.insert(Field::Title, "Title must be 200 characters or fewer.");
    }

    if values.content.is_empty() {
        errors.insert(Field::Content, "Please enter the content.");
    }

    if values.author.is_empty() {
        errors.insert(Field::Author, "Please enter an author.");
    } else if values.author.chars().count() > MAX_AUTHOR_CHARS {
        errors.insert(Field::Author, "Author must be 100 characters or fewer.");
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(ValidationErrors { errors, values })
    }
}

/// Largest integer a double represents exactly (2^53 - 1).
const MAX_EXACT_ID: f64 = 9_007_199_254_740_991.0;

/// Parse a path segment as a post id.
///
/// The segment is read as a number, so `1e2` and ` 3.0` name posts 100 and
/// 3. Only finite, positive, whole values are accepted.
pub fn parse_post_id(raw: &str) -> Option<i64> {
    let value = raw.trim().parse::<f64>().ok()?;
    let whole = value.is_finite() && value > 0.0 && value.fract() == 0.0;

    (whole && value <= MAX_EXACT_ID).then_some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_is_trimmed() {
        let input = validate_post_input(Some("  Hello "), Some("\nBody\n"), Some(" kim ")).unwrap();
        assert_eq!(input, PostInput::new("Hello", "Body", "kim"));
    }

    #[test]
    fn test_missing_fields_are_reported() {
        let err = validate_post_input(None, Some("   "), None).unwrap_err();
        assert_eq!(err.len(), 3);
        assert_eq!(err.get(Field::Title), Some("Please enter a title."));
        assert_eq!(err.get(Field::Content), Some("Please enter the content."));
        assert_eq!(err.get(Field::Author), Some("Please enter an author."));
    }

    #[test]
    fn test_title_length_limit() {
        let at_limit = "a".repeat(MAX_TITLE_CHARS);
        assert!(validate_post_input(Some(&at_limit), Some("c"), Some("a")).is_ok());

        let over = "a".repeat(MAX_TITLE_CHARS + 1);
        let err = validate_post_input(Some(&over), Some("c"), Some("a")).unwrap_err();
        assert_eq!(err.get(Field::Title), Some("Title must be 200 characters or fewer."));
        assert_eq!(err.values().title, over);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let hangul = "가".repeat(MAX_AUTHOR_CHARS);
        assert!(validate_post_input(Some("t"), Some("c"), Some(&hangul)).is_ok());

        let over = "가".repeat(MAX_AUTHOR_CHARS + 1);
        let err = validate_post_input(Some("t"), Some("c"), Some(&over)).unwrap_err();
        assert_eq!(err.get(Field::Author), Some("Author must be 100 characters or fewer."));
        assert_eq!(err.get(Field::Title), None);
    }

    #[test]
    fn test_parse_post_id() {
        assert_eq!(parse_post_id("42"), Some(42));
        assert_eq!(parse_post_id("0"), None);
        assert_eq!(parse_post_id("-3"), None);
        assert_eq!(parse_post_id("abc"), None);
        assert_eq!(parse_post_id("1.5"), None);
        assert_eq!(parse_post_id(""), None);
        assert_eq!(parse_post_id("NaN"), None);
        assert_eq!(parse_post_id("inf"), None);
        assert_eq!(parse_post_id("12abc"), None);
    }

    #[test]
    fn test_parse_post_id_reads_numeric_notation() {
        assert_eq!(parse_post_id("1e2"), Some(100));
        assert_eq!(parse_post_id(" 1.0"), Some(1));
        assert_eq!(parse_post_id("+7"), Some(7));
        assert_eq!(parse_post_id("9007199254740991"), Some(9_007_199_254_740_991));
        assert_eq!(parse_post_id("1e300"), None);
    }
}
