// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parsing the bundled Ubuntu fixture, end to end.

use anyhow::Result;
use bmtext::{Error, Font};
use bmtext_tests::ubuntu;

#[test]
fn fixture_round_trips_known_fields() -> Result<()> {
    let font = ubuntu()?;

    let info = font.info();
    assert_eq!(info.face, "Ubuntu");
    assert_eq!(info.size, 32);
    assert!(!info.bold);
    assert!(!info.italic);
    assert!(info.unicode);
    assert_eq!(info.stretch_h, 100);
    assert!(info.smooth);
    assert_eq!(info.aa, 1);
    assert_eq!(info.padding, [2, 2, 2, 2]);
    assert_eq!(info.spacing, [1, 1]);

    let common = font.common();
    assert_eq!(common.line_height, 36.0);
    assert_eq!(common.base, 28);
    assert_eq!(common.scale_w, 512.0);
    assert_eq!(common.scale_h, 512.0);
    assert_eq!(common.pages, 1);

    assert_eq!(font.page().id, 0);
    assert_eq!(font.page().file, "ubuntu_0.png");
    assert_eq!(font.glyph_count(), 20);
    assert_eq!(font.kerning_count(), 4);
    Ok(())
}

#[test]
fn loads_the_same_font_from_a_file() -> Result<()> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/ubuntu.fnt");
    let font = Font::load(path)?;
    assert_eq!(font.to_string(), ubuntu()?.to_string());
    assert_eq!(font.glyph_count(), 20);
    Ok(())
}

#[test]
fn missing_file_surfaces_the_io_error() {
    let err = Font::load("no-such-directory/no-such.fnt").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn uncovered_characters_fall_back_to_space() -> Result<()> {
    let font = ubuntu()?;
    let glyph = font.glyph_or_space(b'Z')?;
    assert_eq!(glyph.id, b' ');
    assert_eq!(glyph.xadvance, 9.0);
    Ok(())
}

#[test]
fn kerning_pairs_from_the_fixture() -> Result<()> {
    let font = ubuntu()?;
    assert_eq!(font.kerning(b'A', b'V'), -2.0);
    assert_eq!(font.kerning(b'V', b'A'), -2.0);
    assert_eq!(font.kerning(b'y', b','), -2.0);
    // Order matters; the reversed pair has no entry.
    assert_eq!(font.kerning(b',', b'y'), 0.0);
    assert_eq!(font.kerning(b'V', b'W'), 0.0);
    Ok(())
}
