//! Rules configuration.
//!
//! Settings are read from TOML, either from a string or from a file on
//! disk. Every field is optional and falls back to standard chess.

use std::path::Path;

use chess_core::{PieceKind, Side};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The default promotion names a kind a pawn cannot become.
    #[error("Invalid default promotion: {0}")]
    InvalidPromotion(PieceKind),
}

/// Tunable parts of the standard rules.
///
/// ```toml
/// first_mover = "white"
/// default_promotion = "queen"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RulesConfig {
    /// Side to move in the initial position. Defaults to White.
    #[serde(default = "default_first_mover")]
    pub first_mover: Side,
    /// Piece chosen when a promotion is looked up by squares alone.
    /// Defaults to the queen.
    #[serde(default = "default_promotion")]
    pub default_promotion: PieceKind,
}

fn default_first_mover() -> Side {
    Side::White
}

fn default_promotion() -> PieceKind {
    PieceKind::Queen
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            first_mover: default_first_mover(),
            default_promotion: default_promotion(),
        }
    }
}

impl RulesConfig {
    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed TOML or unknown
    /// values, and [`ConfigError::InvalidPromotion`] if the promotion piece
    /// is a pawn or a king.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file cannot be read, and
    /// otherwise the errors of [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Checks the settings for values the rules cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.default_promotion.is_promotion_target() {
            return Err(ConfigError::InvalidPromotion(self.default_promotion));
        }
        Ok(())
    }
}
