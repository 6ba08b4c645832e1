//! Configuration errors

use core::fmt;

use alloc::format;
use heapless::String;

/// Maximum length of a retained parser message
pub const MAX_ERROR_LEN: usize = 128;

/// Configuration error
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Document could not be parsed (message truncated to `MAX_ERROR_LEN`)
    Syntax(String<MAX_ERROR_LEN>),
    /// Step duration is negative or not finite
    InvalidDuration { step: usize },
    /// Elapsing threshold is not a positive finite number
    InvalidThreshold,
}

impl ConfigError {
    /// Build a syntax error from any displayable parser error
    pub fn syntax(err: impl fmt::Display) -> Self {
        let text = format!("{}", err);
        let mut message = String::new();
        for c in text.chars() {
            if message.push(c).is_err() {
                break;
            }
        }
        ConfigError::Syntax(message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Syntax(message) => write!(f, "syntax error: {}", message),
            ConfigError::InvalidDuration { step } => {
                write!(f, "step {} has a negative or non-finite duration", step)
            }
            ConfigError::InvalidThreshold => {
                write!(f, "elapsing threshold must be a positive number of milliseconds")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
