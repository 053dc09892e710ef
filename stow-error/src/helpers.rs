// Stow - stow-error
// Module: Stow Error Helpers
//
// Copyright (c) 2025 The Stow Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error helper functions for common error patterns.
//!
//! This module provides const constructors for the errors the collection
//! crates and the demonstration binary raise most often. Each helper pins
//! the category and code; the caller supplies the message.

use crate::{codes, Error, ErrorCategory};

/// Create a capacity exceeded error
#[must_use]
pub const fn capacity_exceeded(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::CAPACITY_EXCEEDED, message)
}

/// Create a capacity overflow error
#[must_use]
pub const fn capacity_overflow(message: &'static str) -> Error {
    Error::new(ErrorCategory::Capacity, codes::CAPACITY_OVERFLOW, message)
}

/// Create an index out of bounds error
#[must_use]
pub const fn index_out_of_bounds(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::INDEX_OUT_OF_BOUNDS, message)
}

/// Create an empty collection error
#[must_use]
pub const fn empty_collection(message: &'static str) -> Error {
    Error::new(ErrorCategory::Bounds, codes::EMPTY_COLLECTION, message)
}

/// Create a validation error
#[must_use]
pub const fn validation_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::VALIDATION_ERROR, message)
}

/// Create a slot state mismatch error
#[must_use]
pub const fn slot_state_mismatch(message: &'static str) -> Error {
    Error::new(ErrorCategory::Validation, codes::SLOT_STATE_MISMATCH, message)
}

/// Create a parse error
#[must_use]
pub const fn parse_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Parse, codes::PARSE_ERROR, message)
}

/// Create an invalid log level error
#[must_use]
pub const fn invalid_log_level(message: &'static str) -> Error {
    Error::new(ErrorCategory::Parse, codes::INVALID_LOG_LEVEL, message)
}

/// Create an unknown demonstration error
#[must_use]
pub const fn unknown_demo(message: &'static str) -> Error {
    Error::new(ErrorCategory::Parse, codes::UNKNOWN_DEMO, message)
}

/// Create a runtime error
#[must_use]
pub const fn runtime_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::Runtime, codes::RUNTIME_ERROR, message)
}

/// Create an internal error
#[must_use]
pub const fn internal_error(message: &'static str) -> Error {
    Error::new(ErrorCategory::System, codes::INTERNAL_ERROR, message)
}

/// Create an unsupported operation error
#[must_use]
pub const fn unsupported(message: &'static str) -> Error {
    Error::new(ErrorCategory::System, codes::UNSUPPORTED, message)
}
