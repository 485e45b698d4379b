// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory font model: the records built from a descriptor and the
//! read-only query surface the layout engine works against.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use static_assertions::assert_impl_all;

use crate::{descriptor, Error, Result};

/// Glyph id substituted for characters the font does not cover.
const SPACE: u8 = b' ';

/// How the font was generated. Descriptive metadata only; none of these
/// fields participate in layout math.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontInfo {
    /// Name of the source typeface.
    pub face: String,
    /// Nominal size the font was rendered at, in pixels.
    pub size: i32,
    pub bold: bool,
    pub italic: bool,
    /// OEM charset name, when not unicode.
    pub charset: String,
    pub unicode: bool,
    /// Height stretch in percent; 100 means no stretch.
    pub stretch_h: i32,
    pub smooth: bool,
    /// Supersampling level; 1 means none.
    pub aa: i32,
    /// Padding baked around each glyph image: up, right, down, left.
    pub padding: [i32; 4],
    /// Spacing between glyph images: horizontal, vertical.
    pub spacing: [i32; 2],
    /// Outline thickness in pixels.
    pub outline: i32,
}

/// Metrics shared by every glyph in the font.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CommonMetrics {
    /// Distance in pixels between successive baselines.
    pub line_height: f32,
    /// Pixels from the top of a line to the glyph baseline.
    pub base: i32,
    /// Atlas texture width in pixels; divides glyph x coordinates into
    /// normalized texture space.
    pub scale_w: f32,
    /// Atlas texture height in pixels.
    pub scale_h: f32,
    /// Number of atlas pages. Only single-page fonts are supported here.
    pub pages: i32,
    /// Whether monochrome glyphs are packed into the texture channels.
    pub packed: bool,
}

/// One atlas page: an id and the texture file it names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub id: i32,
    pub file: String,
}

/// A single character's placement data.
///
/// `x`/`y`/`width`/`height` locate the glyph image inside the atlas, in
/// pixels. `xoffset`/`yoffset` displace the image when it is placed on
/// screen, and `xadvance` is how far the cursor moves afterwards, before
/// any kerning with the next glyph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Glyph {
    pub id: u8,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub xoffset: f32,
    pub yoffset: f32,
    pub xadvance: f32,
    /// Atlas page holding the glyph image.
    pub page: i32,
    /// Texture channel mask (1 = blue, 2 = green, 4 = red, 8 = alpha).
    pub channel: i32,
    /// Human-readable letter, when the generator wrote one.
    pub letter: String,
}

/// Horizontal adjustment applied when `second` immediately follows `first`
/// on a line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KerningPair {
    pub first: u8,
    pub second: u8,
    /// Signed adjustment in pixels.
    pub amount: f32,
}

/// A parsed bitmap font: metadata, shared metrics, one atlas page, the
/// glyph table, and the kerning list. Built once by the descriptor parser
/// and read-only afterwards, so any number of [`Text`](crate::Text) values
/// can share one `Font`.
#[derive(Clone, Debug)]
pub struct Font {
    info: FontInfo,
    common: CommonMetrics,
    page: Page,
    glyphs: HashMap<u8, Glyph>,
    kernings: Vec<KerningPair>,
}

assert_impl_all!(Font: Send, Sync);

impl Font {
    pub(crate) fn from_parts(
        info: FontInfo,
        common: CommonMetrics,
        page: Page,
        glyphs: HashMap<u8, Glyph>,
        kernings: Vec<KerningPair>,
    ) -> Self {
        Self {
            info,
            common,
            page,
            glyphs,
            kernings,
        }
    }

    /// Reads and parses a descriptor file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        std::fs::read_to_string(path)?.parse()
    }

    /// Looks up the glyph for a character id. No fallback is applied.
    pub fn glyph(&self, id: u8) -> Option<&Glyph> {
        self.glyphs.get(&id)
    }

    /// Looks up the glyph for a character id, substituting the space glyph
    /// for ids the font does not cover.
    ///
    /// The substitution is a fixed design choice: unknown characters render
    /// as blanks rather than failing the layout. A font without a space
    /// glyph cannot honor it, so the lookup fails instead of guessing.
    pub fn glyph_or_space(&self, id: u8) -> Result<&Glyph> {
        self.glyphs
            .get(&id)
            .or_else(|| self.glyphs.get(&SPACE))
            .ok_or(Error::MissingFallbackGlyph(id))
    }

    /// Returns the kerning adjustment for `second` following `first`, or
    /// 0 when the pair has no entry.
    pub fn kerning(&self, first: u8, second: u8) -> f32 {
        // Linear scan; kerning tables are small.
        for pair in &self.kernings {
            if pair.first == first && pair.second == second {
                return pair.amount;
            }
        }
        0.0
    }

    /// Distance in pixels between successive baselines.
    pub fn line_height(&self) -> f32 {
        self.common.line_height
    }

    /// Pixels from the top of a line to the glyph baseline.
    pub fn base(&self) -> f32 {
        self.common.base as f32
    }

    /// Atlas texture dimensions `(width, height)` in pixels. Glyph atlas
    /// rectangles divide by these to produce normalized texture coordinates.
    pub fn atlas_scale(&self) -> (f32, f32) {
        (self.common.scale_w, self.common.scale_h)
    }

    pub fn info(&self) -> &FontInfo {
        &self.info
    }

    pub fn common(&self) -> &CommonMetrics {
        &self.common
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    pub fn kerning_count(&self) -> usize {
        self.kernings.len()
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Font(face={}, size={}, bold={}, #glyphs={}, #kernings={})",
            self.info.face,
            self.info.size,
            self.info.bold,
            self.glyphs.len(),
            self.kernings.len()
        )
    }
}

impl FromStr for Font {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        descriptor::parse(s)
    }
}
