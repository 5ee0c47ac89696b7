// Payload fields are named after their wire keys
#![allow(missing_docs)]

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{Validate, Violation, max_length, not_empty};

/// Language code shape: a 2-3 letter language, then an optional 4-letter
/// script or 2-letter region (e.g., "en", "en-US", "zh-Hant").
static CULTURE_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{2,3}(-([A-Z][a-z]{3}|[A-Z]{2}))?$").expect("culture code pattern")
});

const MAX_NAME_LENGTH: usize = 128;

/// Body of a create-language request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguagePayload {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

impl Validate for LanguagePayload {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        match not_empty("code", &self.code) {
            Some(violation) => violations.push(violation),
            None => {
                if !CULTURE_CODE.is_match(self.code.trim()) {
                    violations.push(Violation::new(
                        "code",
                        "must be a culture code such as 'en' or 'en-US'",
                    ));
                }
            }
        }

        violations.extend(not_empty("name", &self.name));
        violations.extend(max_length("name", &self.name, MAX_NAME_LENGTH));

        violations
    }
}
