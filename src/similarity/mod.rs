//! Similarity scoring module.
//!
//! # Overview
//!
//! Two scoring algorithms operate on the fingerprints produced by
//! [`crate::fingerprint`]:
//!
//! - [`positional`]: compares 1 KiB blocks at matching indices for exact
//!   byte equality. Order matters.
//! - [`overlap`]: counts order-independent matches between two chunk-sum
//!   digest sequences via greedy search-and-remove. Asymmetric: the
//!   denominator is always the base sequence's length.
//!
//! Both algorithms can hit a zero denominator (neither input contributes a
//! single comparable chunk). That outcome is modeled as a distinguished
//! [`Similarity::Undefined`] variant rather than a floating-point NaN, so it
//! can be reported explicitly and never leaks into aggregation.

pub mod overlap;
pub mod positional;

pub use overlap::overlap_similarity;
pub use positional::positional_similarity;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Outcome of one similarity computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Similarity {
    /// Similarity as a percentage in `[0, 100]`, with fractional precision.
    Percent(f64),
    /// The comparison had no comparable chunks (zero denominator).
    Undefined,
}

impl Similarity {
    /// The percentage value, if defined.
    #[must_use]
    pub fn as_percent(self) -> Option<f64> {
        match self {
            Self::Percent(p) => Some(p),
            Self::Undefined => None,
        }
    }

    /// Whether this outcome is the distinguished undefined case.
    #[must_use]
    pub fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for Similarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Six decimal places, matching the report line format
            Self::Percent(p) => write!(f, "{p:.6}%"),
            Self::Undefined => write!(f, "undefined (no comparable chunks)"),
        }
    }
}

impl Serialize for Similarity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Percent(p) => serializer.serialize_some(p),
            Self::Undefined => serializer.serialize_none(),
        }
    }
}

/// Scored comparison of one unordered pair of inputs.
///
/// Produced by exactly one worker and never mutated afterwards. For the
/// overlap algorithm, `left` is the base of the (asymmetric) comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    /// First input of the pair (base, for asymmetric algorithms).
    pub left: PathBuf,
    /// Second input of the pair (target).
    pub right: PathBuf,
    /// Similarity outcome.
    pub score: Similarity,
}

impl PairScore {
    /// Create a new pair score.
    #[must_use]
    pub fn new(left: PathBuf, right: PathBuf, score: Similarity) -> Self {
        Self { left, right, score }
    }
}
