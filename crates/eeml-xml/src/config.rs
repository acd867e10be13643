//! Codec configuration.
//!
//! Defaults produce the plain EEML 005 document with no `version` attribute and
//! a lenient parser. Both knobs can be driven by environment variables.

/// Options controlling EEML serialization and parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodecConfig {
    /// Value of the `version` attribute on the root element, omitted when unset.
    pub version: Option<String>,
    /// Reject unknown child elements instead of skipping them.
    pub strict: bool,
}

impl CodecConfig {
    /// Configuration that writes the given root `version` attribute.
    #[must_use]
    pub fn with_version(version: impl Into<String>) -> Self {
        Self {
            version: Some(version.into()),
            ..Self::default()
        }
    }

    /// Load configuration from `EEML_VERSION` and `EEML_STRICT`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("EEML_VERSION") {
            if !v.is_empty() {
                config.version = Some(v);
            }
        }
        if let Ok(v) = std::env::var("EEML_STRICT") {
            config.strict = v == "1" || v.eq_ignore_ascii_case("true");
        }

        config
    }
}
