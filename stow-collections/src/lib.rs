// Stow - stow-collections
//
// Copyright (c) 2025 The Stow Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Fixed-capacity collection types for the Stow workspace.
//!
//! Every collection in this crate has a compile-time capacity chosen at the
//! construction site and stores its elements inline. Nothing here allocates;
//! an insertion into a full collection is rejected with a
//! [`stow_error::ErrorCategory::Capacity`] error instead of growing or
//! overrunning adjacent storage. It supports two configurations:
//! - `std`: standard library support (enables [`FixedVec::render`])
//! - `no_std`: pure `no_std` without any allocation
//!
//! # Feature Flags
//!
//! - `std`: Enables standard library support (default)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

// Core library is always available
extern crate core;

#[cfg(feature = "std")]
extern crate std;

// Prelude module for consistent imports across std and no_std environments
pub mod prelude;

/// Append-only inline-storage vector with a fixed maximum capacity
pub mod fixed_vec;
/// Hash-based fixed-capacity collections (open addressing)
pub mod hash;
/// Ordered fixed-capacity map over sorted inline storage
pub mod static_map;
/// Ordered fixed-capacity set over sorted inline storage
pub mod static_set;

pub use fixed_vec::FixedVec;
pub use hash::{Fnv1aHasher, ProbeMap, ProbeSet};
pub use static_map::StaticMap;
pub use static_set::StaticSet;
// Re-export error related types for convenience
pub use stow_error::{codes, Error, ErrorCategory, Result};
