// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Validated batch job and export identifiers
//!
//! Identifiers end up as URL path segments, so a blank value would address the
//! wrong resource (`/email/batch//export` or the batch collection itself).
//! [`Identifier`] trims its input and refuses to exist when nothing is left.
//!
//! ```rust
//! use opportify_sdk::Identifier;
//!
//! let job_id = Identifier::new("  job-123456 ").unwrap();
//! assert_eq!(job_id.as_str(), "job-123456");
//!
//! assert!(Identifier::new(" \t").is_err());
//! ```

use core::fmt;
use std::str::FromStr;

/// A trimmed, non-empty identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(Box<str>);

impl Identifier {
    /// Trim `value` and wrap it
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when `value` is empty or
    /// whitespace-only
    pub fn new(value: impl AsRef<str>) -> Result<Self, String> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            Err("Identifier cannot be empty or whitespace-only".to_string())
        } else {
            Ok(Identifier(trimmed.into()))
        }
    }

    /// The trimmed identifier
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
