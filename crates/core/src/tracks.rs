//! Track input rules.

use validator::{ValidateLength, ValidateUrl};

use crate::error::CoreError;

/// Maximum title length, in characters.
pub const MAX_TITLE_LEN: u64 = 50;

/// URL schemes a track link may use.
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps"];

/// The user-editable fields of a track, as supplied by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackFields {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl TrackFields {
    pub fn new(title: String, description: Option<String>, url: String) -> Self {
        Self {
            title,
            description: description.unwrap_or_default(),
            url,
        }
    }

    /// Check every field, reporting the first violation.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_title(&self.title)?;
        ensure_no_nul("Description", &self.description)?;
        validate_url(&self.url)
    }
}

/// Reject text containing NUL, which PostgreSQL cannot store.
pub fn ensure_no_nul(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Validate a track title (1 to 50 characters).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    ensure_no_nul("Title", title)?;
    if !title.validate_length(Some(1), Some(MAX_TITLE_LEN), None) {
        return Err(CoreError::Validation(format!(
            "Title must be between 1 and {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a track URL: syntactically valid, absolute, web or ftp scheme.
pub fn validate_url(url: &str) -> Result<(), CoreError> {
    ensure_no_nul("URL", url)?;
    let scheme_ok = url
        .split_once("://")
        .map(|(scheme, _)| {
            ALLOWED_URL_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false);

    if !scheme_ok || !url.validate_url() {
        return Err(CoreError::Validation(format!("'{url}' is not a valid URL")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn fields(title: &str, url: &str) -> TrackFields {
        TrackFields::new(title.to_string(), None, url.to_string())
    }

    #[test]
    fn missing_description_becomes_empty() {
        assert_eq!(fields("Jazz Mix", "http://x.com/jazz").description, "");
    }

    #[test]
    fn valid_fields_pass() {
        assert!(fields("Jazz Mix", "http://x.com/jazz").validate().is_ok());
    }

    #[test]
    fn empty_title_rejected() {
        assert_matches!(validate_title(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn title_at_limit_accepted() {
        assert!(validate_title(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn title_over_limit_rejected() {
        assert_matches!(validate_title(&"a".repeat(51)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn title_length_counts_characters() {
        // 50 two-byte characters.
        assert!(validate_title(&"é".repeat(50)).is_ok());
    }

    #[test]
    fn https_url_accepted() {
        assert!(validate_url("https://soundcloud.com/artist/track").is_ok());
    }

    #[test]
    fn scheme_is_case_insensitive() {
        assert!(validate_url("HTTP://x.com").is_ok());
    }

    #[test]
    fn relative_url_rejected() {
        assert_matches!(validate_url("x.com/jazz"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unsupported_scheme_rejected() {
        assert!(validate_url("javascript://alert(1)").is_err());
        assert!(validate_url("mailto:someone@x.com").is_err());
    }

    #[test]
    fn nul_in_title_rejected() {
        assert_matches!(validate_title("a\0b"), Err(CoreError::Validation(msg)) if msg.starts_with("Title"));
    }

    #[test]
    fn nul_in_description_rejected() {
        let fields = TrackFields::new("Ok".into(), Some("a\0b".into()), "http://x.com".into());
        assert_matches!(fields.validate(), Err(CoreError::Validation(msg)) if msg.starts_with("Description"));
    }

    #[test]
    fn nul_in_url_rejected() {
        assert_matches!(validate_url("http://x.com/\0"), Err(CoreError::Validation(msg)) if msg.starts_with("URL"));
    }

    #[test]
    fn validate_reports_title_first() {
        let err = fields("", "nope").validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.starts_with("Title"));
    }
}
