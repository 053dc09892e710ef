// Stow - stow-collections
// Module: Prelude
//
// Copyright (c) 2025 The Stow Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Prelude for consistent imports across `std` and `no_std` users.
//!
//! Pulls in every collection type plus the error surface in one `use`:
//!
//! ```
//! use stow_collections::prelude::*;
//!
//! let mut vec = FixedVec::<u32, 4>::new();
//! vec.push(7)?;
//! # Ok::<(), Error>(())
//! ```

pub use crate::fixed_vec::FixedVec;
pub use crate::hash::{Fnv1aHasher, ProbeMap, ProbeSet};
pub use crate::static_map::StaticMap;
pub use crate::static_set::StaticSet;
pub use stow_error::{Error, ErrorCategory, Result};
