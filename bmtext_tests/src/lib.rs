// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the bmtext integration tests.

#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{ensure, Result};
use bmtext::Font;

/// BMFont text-format export of a 32px Ubuntu subset.
pub const UBUNTU_FNT: &str = include_str!("../assets/ubuntu.fnt");

/// A two-line string the fixture's glyph set fully covers.
pub const DEMO_TEXT: &str = "Ubanita\ntogether, we play";

/// Parses the bundled Ubuntu fixture.
pub fn ubuntu() -> Result<Font> {
    let font: Font = UBUNTU_FNT.parse()?;
    ensure!(font.glyph_count() > 0, "fixture descriptor has no glyphs");
    Ok(font)
}
