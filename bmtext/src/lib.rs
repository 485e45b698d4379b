// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bitmap-font text layout.
//!
//! `bmtext` reads the textual [BMFont] descriptor format and lays out
//! multi-line strings as textured quads for a graphics backend to draw.
//! The crate does not open windows, decode images, or drive a GPU; it turns
//! a descriptor into a [`Font`] and a string into a [`Text`] whose cached
//! quad list pairs normalized texture coordinates with screen positions in
//! pixels. Uploading the atlas image and drawing the quads is the renderer's
//! job, whatever the graphics API.
//!
//! ```
//! use bmtext::kurbo::{Point, Size};
//! use bmtext::{Font, Text};
//!
//! let descriptor = r#"info face="Ubuntu" size=32 bold=0 italic=0
//! common lineHeight=36 base=28 scaleW=512 scaleH=512 pages=1 packed=0
//! page id=0 file="ubuntu_0.png"
//! chars count=2
//! char id=32 x=0 y=0 width=0 height=0 xoffset=0 yoffset=0 xadvance=8 page=0 chnl=15
//! char id=65 x=8 y=0 width=20 height=24 xoffset=1 yoffset=4 xadvance=22 page=0 chnl=15
//! "#;
//! let font: Font = descriptor.parse()?;
//! let text = Text::new("A", Point::ZERO, Size::new(220.0, 36.0), &font)?;
//! assert_eq!(text.quads().len(), 1);
//! # Ok::<(), bmtext::Error>(())
//! ```
//!
//! [BMFont]: https://www.angelcode.com/products/bmfont/doc/file_format.html

#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]

mod atlas;
mod descriptor;
mod font;
mod text;

pub use atlas::AtlasFont;
pub use font::{CommonMetrics, Font, FontInfo, Glyph, KerningPair, Page};
pub use text::{Quad, Text, TextureVertex};

/// 2D geometry, with a focus on curves.
pub use peniko::kurbo;

use thiserror::Error;

/// Errors that can occur while reading a descriptor or laying out text.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The descriptor source could not be read.
    #[error("Couldn't read the font descriptor")]
    Io(#[from] std::io::Error),
    /// A numeric field in the descriptor did not parse as an integer.
    ///
    /// This aborts the whole parse; the descriptor format has no recovery
    /// point inside a value.
    #[error("Malformed integer '{token}' in font descriptor")]
    InvalidInteger {
        /// The offending token, verbatim.
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
    /// A character had no glyph and the font has no space glyph to
    /// substitute for it.
    #[error("No glyph for character id {0} and no space glyph to fall back to")]
    MissingFallbackGlyph(u8),
    /// Non-empty text was laid out into a box of height zero.
    ///
    /// Only a width of zero is the "derive from natural width" sentinel;
    /// a zero height cannot produce meaningful geometry.
    #[error("Box height must be non-zero to lay out non-empty text")]
    ZeroHeightBox,
    /// The font's atlas dimensions are zero, usually because the descriptor
    /// had no `common` line.
    #[error("Font atlas dimensions are zero; the descriptor lacks a usable `common` line")]
    UnusableMetrics,
}

pub(crate) type Result<T, E = Error> = std::result::Result<T, E>;
