// Stow - stow-error
// Module: Stow Error Handling
//
// Copyright (c) 2025 The Stow Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Stow error handling library
//!
//! This library provides the error handling system shared by every crate in
//! the Stow workspace. It includes error types, error codes, and helper
//! functions for creating and classifying errors.
//!
//! # Error Categories
//!
//! Errors are organized into categories, each with its own range of error
//! codes:
//!
//! ## Capacity Errors (1000-1999)
//! - A fixed-capacity collection rejected an insertion
//!
//! ## Bounds Errors (2000-2999)
//! - Out-of-range index access
//! - Operations on empty collections that require an element
//!
//! ## Validation Errors (3000-3999)
//! - Internal consistency violations
//!
//! ## Parse Errors (4000-4999)
//! - Malformed CLI input such as log levels or demonstration names
//!
//! ## Runtime/System Errors (5000-5999)
//! - Unexpected internal states and unsupported operations
//!
//! # Usage
//!
//! ```
//! use stow_error::{codes, helpers, Error, ErrorCategory};
//!
//! // Constructing an error directly
//! let error = Error::new(
//!     ErrorCategory::Capacity,
//!     codes::CAPACITY_EXCEEDED,
//!     "FixedVec capacity exceeded",
//! );
//! assert!(error.is_capacity_error());
//!
//! // Using the const helpers for common cases
//! let bounds = helpers::index_out_of_bounds("index past the occupied range");
//! assert_eq!(bounds.code, codes::INDEX_OUT_OF_BOUNDS);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(any(feature = "std", test))]
extern crate std;

/// Error codes for Stow
pub mod codes;
/// Error and error handling types
pub mod errors;
/// Helper constructors for common errors
pub mod helpers;

// Re-export key types
pub use errors::{Error, ErrorCategory, ErrorSource};

/// A specialized `Result` type for Stow operations.
///
/// This type alias uses `stow_error::Error` as the error type. It is
/// suitable for `no_std` environments as the error type carries only a
/// category, a code, and a `&'static str` message.
pub type Result<T> = core::result::Result<T, Error>;
