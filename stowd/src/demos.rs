// Stow - stowd
// Module: Collection demonstrations
//
// Copyright (c) 2025 The Stow Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! The demonstration bodies.
//!
//! Each demonstration builds its output as a string so the exact text can be
//! asserted in tests; `main` is responsible for printing.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use stow_collections::{FixedVec, ProbeMap, ProbeSet, StaticMap, StaticSet};
use tracing::debug;

/// Sample values for the set demonstration, duplicates included.
const SET_DATA: [i32; 9] = [7, 1, 1, 2, 3, 4, 5, 5, 6];

/// Student names for the map demonstration.
const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Marks parallel to [`NAMES`].
const MARKS: [f64; 6] = [86.43, 98.22, 84.64, 92.76, 85.89, 76.32];

/// Fixed-capacity container demonstration.
///
/// Fills a capacity-3 vector, shows the rendering, and demonstrates that a
/// push past capacity is rejected without disturbing the contents.
pub fn container_demo() -> Result<String> {
    let mut vec = FixedVec::<&str, 3>::new();
    for item in ["x", "y", "z"] {
        vec.push(item).context("filling the container")?;
    }

    if let Err(err) = vec.push("w") {
        debug!(%err, "append past capacity rejected");
    }

    let mut out = vec.render();
    out.push('\n');
    Ok(out)
}

/// Set demonstration: hash-based vs ordered vs plain sequence.
///
/// Inserts the same data into a hash set, an ordered set, and a plain
/// vector, then prints one line per collection: hash iteration is table
/// order, ordered iteration is ascending, the vector keeps insertion order
/// and duplicates.
pub fn set_demo() -> Result<String> {
    let mut hashed = ProbeSet::<i32, 16>::new();
    let mut ordered = StaticSet::<i32, 16>::new();
    let mut sequence = FixedVec::<i32, 9>::new();

    for value in SET_DATA {
        hashed.insert(value).context("inserting into the hash set")?;
        ordered
            .insert(value)
            .context("inserting into the ordered set")?;
        sequence.push(value).context("appending to the sequence")?;
    }

    let mut out = String::new();
    for value in hashed.iter() {
        write!(out, "{value} ")?;
    }
    out.push('\n');
    for value in ordered.iter() {
        write!(out, "{value} ")?;
    }
    out.push('\n');
    writeln!(out, "{sequence}")?;
    Ok(out)
}

/// Map demonstration: hash-based vs ordered student marks.
///
/// Loads the same name/mark pairs into a hash map and an ordered map, looks
/// one student up in each, then prints both key sets. The ordered key set is
/// ascending; the hash key set is table order.
pub fn map_demo() -> Result<String> {
    let mut by_hash = ProbeMap::<&str, f64, 8>::new();
    let mut by_name = StaticMap::<&str, f64, 8>::new();

    for (name, mark) in NAMES.into_iter().zip(MARKS) {
        by_hash
            .insert(name, mark)
            .context("inserting into the hash map")?;
        by_name
            .insert(name, mark)
            .context("inserting into the ordered map")?;
    }

    let mut out = String::new();
    writeln!(
        out,
        "{}",
        by_hash.get("A").context("student A is missing")?
    )?;
    writeln!(
        out,
        "{}",
        by_name.get(&"D").context("student D is missing")?
    )?;
    writeln!(out, "{}", key_line(by_hash.keys()))?;
    writeln!(out, "{}", key_line(by_name.keys()))?;
    Ok(out)
}

/// Runs every demonstration in order.
pub fn all_demos() -> Result<String> {
    let mut out = container_demo()?;
    out.push_str(&set_demo()?);
    out.push_str(&map_demo()?);
    Ok(out)
}

/// Formats a key iterator as a bracketed, comma-separated list.
fn key_line<'a>(keys: impl Iterator<Item = &'a &'a str>) -> String {
    let keys: Vec<&str> = keys.copied().collect();
    format!("[{}]", keys.join(", "))
}
