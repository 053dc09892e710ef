// Stow - stow-error
// Module: Stow Error Codes
//
// Copyright (c) 2025 The Stow Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for Stow

// Capacity error codes (1000-1999)
/// A fixed-capacity collection is full and rejected an insertion
pub const CAPACITY_EXCEEDED: u16 = 1000;
/// A collection was asked to reserve more slots than its capacity
pub const CAPACITY_OVERFLOW: u16 = 1001;

// Bounds error codes (2000-2999)
/// Index past the occupied range of a collection
pub const INDEX_OUT_OF_BOUNDS: u16 = 2000;
/// An element was required from an empty collection
pub const EMPTY_COLLECTION: u16 = 2001;

// Validation error codes (3000-3999)
/// General validation error
pub const VALIDATION_ERROR: u16 = 3000;
/// A probe sequence ended on a slot in an unexpected state
pub const SLOT_STATE_MISMATCH: u16 = 3001;

// Parse error codes (4000-4999)
/// General parse error
pub const PARSE_ERROR: u16 = 4000;
/// Unrecognized log level name
pub const INVALID_LOG_LEVEL: u16 = 4001;
/// Unrecognized demonstration name
pub const UNKNOWN_DEMO: u16 = 4002;

// Runtime and system error codes (5000-5999)
/// General runtime error
pub const RUNTIME_ERROR: u16 = 5000;
/// Invariant violation that indicates a bug in Stow itself
pub const INTERNAL_ERROR: u16 = 5001;
/// Operation not supported in this configuration
pub const UNSUPPORTED: u16 = 5002;
