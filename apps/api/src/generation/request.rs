//! Request-side types for generation: target platform and what to generate.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Target content network. Influences prompt wording only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Youtube,
    Linkedin,
}

impl Platform {
    /// Display name used inside prompts.
    pub fn label(self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Linkedin => "LinkedIn",
        }
    }

    /// Resolves an optional wire value; absent or blank means YouTube.
    pub fn from_request(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(Platform::default()),
            Some(value) => value.parse().map_err(AppError::Validation),
        }
    }
}

impl Platform {
    /// Lenient resolution for the single-category endpoints: anything other than
    /// "linkedin" is YouTube.
    pub fn from_legacy(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("linkedin") => Platform::Linkedin,
            _ => Platform::Youtube,
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "youtube" => Ok(Platform::Youtube),
            "linkedin" => Ok(Platform::Linkedin),
            other => Err(format!(
                "unsupported platform '{other}' (expected 'youtube' or 'linkedin')"
            )),
        }
    }
}

/// What a `POST /api/generate` call produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationKind {
    /// One structured call; every section.
    #[default]
    Full,
    Tags,
    Titles,
    /// Tags and titles from two concurrent focused calls.
    Split,
}

impl GenerationKind {
    pub fn from_request(raw: Option<&str>) -> Result<Self, AppError> {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            None => Ok(GenerationKind::default()),
            Some(value) => value.parse().map_err(AppError::Validation),
        }
    }
}

impl FromStr for GenerationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(GenerationKind::Full),
            "tags" => Ok(GenerationKind::Tags),
            "titles" => Ok(GenerationKind::Titles),
            "split" => Ok(GenerationKind::Split),
            other => Err(format!(
                "unsupported type '{other}' (expected 'full', 'tags', 'titles' or 'split')"
            )),
        }
    }
}

/// Validated input for one generation. Constructed per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub text: String,
    pub platform: Platform,
}

impl GenerationRequest {
    /// Rejects blank text before any upstream call is made.
    pub fn new(text: &str, platform: Platform, field: &str) -> Result<Self, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} cannot be empty")));
        }
        Ok(Self {
            text: text.to_string(),
            platform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_defaults_to_youtube() {
        assert_eq!(Platform::from_request(None).unwrap(), Platform::Youtube);
        assert_eq!(Platform::from_request(Some("  ")).unwrap(), Platform::Youtube);
    }

    #[test]
    fn test_platform_parse_is_case_insensitive() {
        assert_eq!(
            Platform::from_request(Some(" LinkedIn ")).unwrap(),
            Platform::Linkedin
        );
        assert_eq!("YOUTUBE".parse::<Platform>().unwrap(), Platform::Youtube);
    }

    #[test]
    fn test_unknown_platform_is_validation_error() {
        let err = Platform::from_request(Some("tiktok")).unwrap_err();
        match err {
            AppError::Validation(msg) => assert!(msg.contains("tiktok")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_legacy_platform_falls_back_to_youtube() {
        assert_eq!(Platform::from_legacy(Some("LinkedIn")), Platform::Linkedin);
        assert_eq!(Platform::from_legacy(Some("tiktok")), Platform::Youtube);
        assert_eq!(Platform::from_legacy(None), Platform::Youtube);
    }

    #[test]
    fn test_platform_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Platform::Linkedin).unwrap(), r#""linkedin""#);
        let p: Platform = serde_json::from_str(r#""youtube""#).unwrap();
        assert_eq!(p, Platform::Youtube);
    }

    #[test]
    fn test_generation_kind_parse() {
        assert_eq!(GenerationKind::from_request(None).unwrap(), GenerationKind::Full);
        assert_eq!(
            GenerationKind::from_request(Some("Titles")).unwrap(),
            GenerationKind::Titles
        );
        assert_eq!("split".parse::<GenerationKind>().unwrap(), GenerationKind::Split);
        assert!(GenerationKind::from_request(Some("everything")).is_err());
    }

    #[test]
    fn test_generation_request_rejects_blank_text() {
        assert!(matches!(
            GenerationRequest::new(" \n ", Platform::Youtube, "prompt"),
            Err(AppError::Validation(_))
        ));
        let req = GenerationRequest::new("rust tips", Platform::Linkedin, "prompt").unwrap();
        assert_eq!(req.text, "rust tips");
        assert_eq!(req.platform, Platform::Linkedin);
    }
}
