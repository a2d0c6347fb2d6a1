//! Runtime configuration.
//!
//! The namespace prefix for generated concept IRIs and the language tag
//! attached to every text literal. Both have fixed defaults and can be
//! overridden from the command line or environment.

use url::Url;

use crate::error::ConfigError;

/// Namespace prefix prepended to every local concept identifier.
pub const DEFAULT_BASE_URI: &str = "http://example.org/kb/";

/// Language tag attached to labels, definitions and scope notes.
pub const DEFAULT_LANG: &str = "en";

/// Settings that shape the generated concept graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptConfig {
    /// Namespace prefix for concept IRIs. Ends with `/` or `#`.
    pub base_uri: String,
    /// BCP 47 language tag for literals.
    pub lang: String,
}

impl Default for ConceptConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_BASE_URI.to_string(),
            lang: DEFAULT_LANG.to_string(),
        }
    }
}

impl ConceptConfig {
    /// Builds a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `base_uri` is not an absolute
    /// IRI ending in `/` or `#`, or if `lang` is not a plausible language tag.
    pub fn new(base_uri: &str, lang: &str) -> Result<Self, ConfigError> {
        validate_base_uri(base_uri)?;
        validate_lang(lang)?;
        Ok(Self {
            base_uri: base_uri.to_string(),
            lang: lang.to_string(),
        })
    }
}

fn validate_base_uri(base_uri: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        field: "base-uri".to_string(),
        value: base_uri.to_string(),
        expected: "an absolute IRI ending in '/' or '#'".to_string(),
    };

    let parsed = Url::parse(base_uri).map_err(|_| invalid())?;
    if parsed.cannot_be_a_base() || !(base_uri.ends_with('/') || base_uri.ends_with('#')) {
        return Err(invalid());
    }
    Ok(())
}

fn validate_lang(lang: &str) -> Result<(), ConfigError> {
    let well_formed = !lang.is_empty()
        && !lang.starts_with('-')
        && !lang.ends_with('-')
        && lang.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: "lang".to_string(),
            value: lang.to_string(),
            expected: "a language tag such as 'en' or 'pt-BR'".to_string(),
        })
    }
}
