//! Runtime configuration
//!
//! Consolidates environment variable reads (after `.env` is loaded by the
//! binary) and command-line overrides into one validated `Config`.

use crate::core::SecretWord;
use crate::wordsource::{HttpWordSource, ListWordSource, WordSource, WordSourceError, loader};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Word service used when `HANGMAN_WORD_URL` is not set
pub const DEFAULT_WORD_URL: &str = "http://127.0.0.1:8080/word";

/// Request timeout used when `HANGMAN_TIMEOUT_SECS` is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where secret words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// The HTTP word service
    Remote,
    /// The list compiled into the binary
    Embedded,
    /// A newline-separated word file
    File(PathBuf),
}

impl SourceKind {
    /// Parse a source name
    ///
    /// "remote" and "embedded" are keywords; anything else is a file path.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "remote" | "http" => Self::Remote,
            "embedded" | "builtin" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Endpoint of the word service
    pub word_url: String,
    /// Per-request timeout for the word service
    pub timeout: Duration,
    /// Which word source new games draw from
    pub source: SourceKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_url: DEFAULT_WORD_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            source: SourceKind::Remote,
        }
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Reads `HANGMAN_WORD_URL`, `HANGMAN_TIMEOUT_SECS` and
    /// `HANGMAN_WORD_SOURCE`; unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let word_url = lookup("HANGMAN_WORD_URL").unwrap_or(defaults.word_url);

        let timeout = match lookup("HANGMAN_TIMEOUT_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| {
                ConfigError::Invalid {
                    var: "HANGMAN_TIMEOUT_SECS".to_string(),
                    reason: format!("'{raw}' is not a whole number of seconds"),
                }
            })?),
            None => defaults.timeout,
        };

        let source = lookup("HANGMAN_WORD_SOURCE")
            .map_or(defaults.source, |name| SourceKind::from_name(&name));

        let config = Self {
            word_url,
            timeout,
            source,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    #[must_use]
    pub fn with_overrides(
        mut self,
        source: Option<&str>,
        word_url: Option<String>,
        timeout_secs: Option<u64>,
    ) -> Self {
        if let Some(name) = source {
            self.source = SourceKind::from_name(name);
        }
        if let Some(url) = word_url {
            self.word_url = url;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Validate configuration after loading
    ///
    /// # Errors
    ///
    /// Returns error if the URL is not http(s) or the timeout is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.word_url.starts_with("http://") || self.word_url.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "HANGMAN_WORD_URL".to_string(),
                reason: format!("'{}' must start with http:// or https://", self.word_url),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::Invalid {
                var: "HANGMAN_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Build the word source new games draw from
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built or the word file
    /// cannot be read
    pub fn build_source(&self) -> Result<Box<dyn WordSource>, WordSourceError> {
        match &self.source {
            SourceKind::Remote => Ok(Box::new(HttpWordSource::new(
                self.word_url.clone(),
                self.timeout,
            )?)),
            SourceKind::Embedded => Ok(Box::new(ListWordSource::embedded())),
            SourceKind::File(path) => Ok(Box::new(ListWordSource::new(loader::load_from_file(
                path,
            )?))),
        }
    }

    /// Word list the solver draws candidates from
    ///
    /// A file source doubles as the dictionary; otherwise the embedded list.
    ///
    /// # Errors
    ///
    /// Returns error if the word file cannot be read
    pub fn dictionary(&self) -> Result<Vec<SecretWord>, WordSourceError> {
        match &self.source {
            SourceKind::File(path) => Ok(loader::load_from_file(path)?),
            SourceKind::Remote | SourceKind::Embedded => {
                Ok(loader::words_from_slice(crate::wordsource::WORDS))
            }
        }
    }
}
