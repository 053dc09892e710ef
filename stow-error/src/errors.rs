// Stow - stow-error
// Module: Stow Error Types
//
// Copyright (c) 2025 The Stow Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Unified error types for Stow
//!
//! This module provides the error type used across the Stow workspace. An
//! error is a category, a numeric code from [`crate::codes`], and a static
//! message. Errors are `Copy` and never allocate, so they can be created
//! and propagated in `no_std` environments.

use core::fmt;

use crate::codes;

/// `Error` categories for Stow operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorCategory {
    /// Capacity errors (a fixed-capacity collection is full)
    Capacity   = 1,
    /// Bounds errors (index or range outside the occupied slots)
    Bounds     = 2,
    /// Validation errors (internal consistency checks)
    Validation = 3,
    /// Parse errors (malformed CLI input)
    Parse      = 4,
    /// Runtime errors (general)
    Runtime    = 5,
    /// System errors
    System     = 6,
    /// Unknown errors
    Unknown    = 7,
}

/// Base trait for all error types
pub trait ErrorSource: fmt::Debug + Send + Sync {
    /// Get the error code
    fn code(&self) -> u16;

    /// Get the error message
    fn message(&self) -> &'static str;

    /// Get the error category
    fn category(&self) -> ErrorCategory;
}

/// Stow `Error` type
///
/// This is the main error type for the Stow collection library. It provides
/// categorized errors with error codes and static messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error {
    /// `Error` category
    pub category: ErrorCategory,
    /// `Error` code
    pub code:     u16,
    /// `Error` message
    pub message:  &'static str,
}

impl Error {
    /// Capacity exceeded error
    pub const CAPACITY_EXCEEDED: Self = Self::new(
        ErrorCategory::Capacity,
        codes::CAPACITY_EXCEEDED,
        "Fixed-capacity collection is full",
    );
    /// Empty collection error
    pub const EMPTY_COLLECTION: Self = Self::new(
        ErrorCategory::Bounds,
        codes::EMPTY_COLLECTION,
        "Operation requires a non-empty collection",
    );
    /// Index out of bounds error
    pub const INDEX_OUT_OF_BOUNDS: Self = Self::new(
        ErrorCategory::Bounds,
        codes::INDEX_OUT_OF_BOUNDS,
        "Index past the occupied range",
    );

    /// Create a new error.
    #[must_use]
    pub const fn new(category: ErrorCategory, code: u16, message: &'static str) -> Self {
        Self {
            category,
            code,
            message,
        }
    }

    /// Check if this is a capacity error
    #[must_use]
    pub fn is_capacity_error(&self) -> bool {
        self.category == ErrorCategory::Capacity
    }

    /// Check if this is a bounds error
    #[must_use]
    pub fn is_bounds_error(&self) -> bool {
        self.category == ErrorCategory::Bounds
    }

    /// Check if this is a validation error
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        self.category == ErrorCategory::Validation
    }

    /// Check if this is a parse error
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        self.category == ErrorCategory::Parse
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:?}][E{:04X}] {}",
            self.category, self.code, self.message
        )
    }
}

impl core::error::Error for Error {}

impl ErrorSource for Error {
    fn code(&self) -> u16 {
        self.code
    }

    fn message(&self) -> &'static str {
        self.message
    }

    fn category(&self) -> ErrorCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_construction_and_classification() {
        let error = Error::new(
            ErrorCategory::Capacity,
            codes::CAPACITY_EXCEEDED,
            "FixedVec capacity exceeded",
        );
        assert!(error.is_capacity_error());
        assert!(!error.is_bounds_error());
        assert_eq!(error.code, codes::CAPACITY_EXCEEDED);
        assert_eq!(error.message, "FixedVec capacity exceeded");
    }

    #[test]
    fn error_display_includes_category_and_code() {
        use std::string::ToString;

        let error = Error::INDEX_OUT_OF_BOUNDS;
        let rendered = error.to_string();
        assert!(rendered.contains("Bounds"));
        assert!(rendered.contains("E07D0"));
        assert!(rendered.contains("Index past the occupied range"));
    }

    #[test]
    fn const_errors_match_their_codes() {
        assert_eq!(Error::CAPACITY_EXCEEDED.code, codes::CAPACITY_EXCEEDED);
        assert_eq!(Error::EMPTY_COLLECTION.code, codes::EMPTY_COLLECTION);
        assert_eq!(Error::INDEX_OUT_OF_BOUNDS.code, codes::INDEX_OUT_OF_BOUNDS);
    }
}
