//! Heap sizing configuration
//!
//! [`HeapConfig`] carries the initial and minimum capacity of a
//! [`BinaryHeap`](crate::binary::BinaryHeap). With the `serde` feature it can
//! be loaded from TOML:
//!
//! ```toml
//! initial_capacity = 64
//! min_capacity = 16
//! ```
//!
//! Both keys are optional and default to 1. Values are read as signed
//! integers so that a negative capacity is reported as
//! [`HeapError::InvalidArgument`] rather than a parse failure.

use crate::traits::HeapError;

#[cfg(feature = "serde")]
use serde::Deserialize;
#[cfg(feature = "serde")]
use thiserror::Error;

/// Validated capacity settings for a heap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapConfig {
    initial_capacity: usize,
    min_capacity: usize,
}

impl HeapConfig {
    /// Creates a configuration
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] if `min_capacity` is zero.
    pub fn new(initial_capacity: usize, min_capacity: usize) -> Result<Self, HeapError> {
        if min_capacity == 0 {
            return Err(HeapError::invalid("min_capacity must be at least 1"));
        }
        Ok(Self {
            initial_capacity,
            min_capacity,
        })
    }

    /// Creates a configuration from signed values, rejecting negatives
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] for a negative or
    /// unrepresentable capacity, or a zero `min_capacity`.
    pub fn from_signed(initial_capacity: i64, min_capacity: i64) -> Result<Self, HeapError> {
        Self::new(
            to_capacity("initial_capacity", initial_capacity)?,
            to_capacity("min_capacity", min_capacity)?,
        )
    }

    /// Returns the number of slots reserved at construction
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Returns the capacity below which the heap never shrinks
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 1,
            min_capacity: 1,
        }
    }
}

fn to_capacity(name: &str, value: i64) -> Result<usize, HeapError> {
    usize::try_from(value)
        .map_err(|_| HeapError::invalid(format!("{name} must be non-negative, got {value}")))
}

/// Error loading a [`HeapConfig`]
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse heap config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] HeapError),
}

#[cfg(feature = "serde")]
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHeapConfig {
    initial_capacity: Option<i64>,
    min_capacity: Option<i64>,
}

#[cfg(feature = "serde")]
impl HeapConfig {
    /// Parses and validates a TOML document
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for rejected values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let raw: RawHeapConfig = toml::from_str(s)?;
        let defaults = Self::default();
        let config = Self::from_signed(
            raw.initial_capacity
                .unwrap_or(defaults.initial_capacity as i64),
            raw.min_capacity.unwrap_or(defaults.min_capacity as i64),
        )?;
        log::debug!("loaded heap config {config:?}");
        Ok(config)
    }
}
