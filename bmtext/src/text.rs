// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text layout: turns a string, an anchor, and a bounding box into scaled
//! quad geometry.
//!
//! Layout is a pure computation over the font's metrics. Lines are placed
//! top to bottom from the anchor; one scale-factor pair, derived from the
//! requested box and the text's natural (unscaled) dimensions, applies to
//! the whole block. A requested width of zero means "derive from the
//! natural width": the horizontal scale then equals the vertical scale and
//! character spacing keeps its natural aspect.

use bytemuck::{Pod, Zeroable};
use peniko::kurbo::{Point, Size};

use crate::font::Font;
use crate::{Error, Result};

/// One corner of a rendered glyph: a normalized texture coordinate and a
/// screen position in pixels.
///
/// The layout is `repr(C)` so a renderer can hand whole quad lists to the
/// GPU with [`bytemuck::cast_slice`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct TextureVertex {
    /// Horizontal texture coordinate, 0..1.
    pub s: f32,
    /// Vertical texture coordinate, 0..1.
    pub t: f32,
    /// Screen x in pixels.
    pub x: f32,
    /// Screen y in pixels.
    pub y: f32,
}

/// Four vertices per glyph, in top-left, top-right, bottom-right,
/// bottom-left order.
pub type Quad = [TextureVertex; 4];

/// A laid-out string: the source text, its anchor and box, and the quad
/// list derived from them at construction.
///
/// The quad list is computed once and never changes; rendering iterates the
/// cached quads with no recomputation. To show different text or a
/// different box, construct a new `Text`. The font is borrowed, so many
/// `Text` values can share one [`Font`].
#[derive(Debug)]
pub struct Text<'a> {
    content: String,
    origin: Point,
    bounds: Size,
    font: &'a Font,
    quads: Vec<Quad>,
}

impl<'a> Text<'a> {
    /// Lays out `content` into `bounds` at `origin`.
    ///
    /// A `bounds.width` of zero derives the width from the text's natural
    /// width instead of fitting to the box. Empty content produces an empty
    /// quad list and never fails. Non-empty content fails with
    /// [`Error::ZeroHeightBox`] when `bounds.height` is zero and with
    /// [`Error::UnusableMetrics`] when the font's atlas dimensions are zero.
    pub fn new(
        content: impl Into<String>,
        origin: Point,
        bounds: Size,
        font: &'a Font,
    ) -> Result<Self> {
        let content = content.into();
        let quads = layout(&content, origin, bounds, font)?;
        Ok(Self {
            content,
            origin,
            bounds,
            font,
            quads,
        })
    }

    /// The cached quads, one per glyph, in line order, left to right, top
    /// to bottom.
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// The cached quads as a flat vertex slice, ready for buffer upload.
    pub fn vertices(&self) -> &[TextureVertex] {
        bytemuck::cast_slice(&self.quads)
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn font(&self) -> &'a Font {
        self.font
    }
}

fn layout(content: &str, origin: Point, bounds: Size, font: &Font) -> Result<Vec<Quad>> {
    if content.is_empty() {
        return Ok(Vec::new());
    }
    if bounds.height == 0.0 {
        return Err(Error::ZeroHeightBox);
    }
    let (scale_w, scale_h) = font.atlas_scale();
    if scale_w <= 0.0 || scale_h <= 0.0 {
        return Err(Error::UnusableMetrics);
    }

    let (natural_w, natural_h) = natural_dimensions(content, font)?;
    // A zero natural dimension would otherwise divide to NaN; the scale
    // factor is defined as 1 in that case.
    let sy = if natural_h == 0.0 {
        1.0
    } else {
        bounds.height as f32 / natural_h
    };
    let sx = if bounds.width == 0.0 {
        sy
    } else if natural_w == 0.0 {
        1.0
    } else {
        bounds.width as f32 / natural_w
    };

    let anchor_x = origin.x as f32;
    let mut left = anchor_x;
    let mut top = origin.y as f32;
    let mut quads = Vec::new();
    for line in content.split('\n') {
        let mut prev = None;
        for byte in line.bytes() {
            let glyph = font.glyph_or_space(byte)?;
            if let Some(prev) = prev {
                left += font.kerning(prev, glyph.id) * sx;
            }
            prev = Some(glyph.id);

            let glyph_right = left + glyph.width * sx;
            let glyph_top = top + glyph.yoffset * sy;
            let glyph_bottom = glyph_top + glyph.height * sy;
            let (u0, v0) = (glyph.x / scale_w, glyph.y / scale_h);
            let (u1, v1) = (
                (glyph.x + glyph.width) / scale_w,
                (glyph.y + glyph.height) / scale_h,
            );
            quads.push([
                TextureVertex {
                    s: u0,
                    t: v0,
                    x: left,
                    y: glyph_top,
                },
                TextureVertex {
                    s: u1,
                    t: v0,
                    x: glyph_right,
                    y: glyph_top,
                },
                TextureVertex {
                    s: u1,
                    t: v1,
                    x: glyph_right,
                    y: glyph_bottom,
                },
                TextureVertex {
                    s: u0,
                    t: v1,
                    x: left,
                    y: glyph_bottom,
                },
            ]);
            left += glyph.xadvance * sx;
        }
        top += font.line_height() * sy;
        left = anchor_x;
    }
    Ok(quads)
}

/// Unscaled dimensions of the laid-out block: the widest line's advance sum
/// (kerning included) and line count times line height.
fn natural_dimensions(content: &str, font: &Font) -> Result<(f32, f32)> {
    let mut width = 0.0f32;
    let mut height = 0.0f32;
    for line in content.split('\n') {
        let mut line_width = 0.0;
        let mut prev = None;
        for byte in line.bytes() {
            let glyph = font.glyph_or_space(byte)?;
            if let Some(prev) = prev {
                line_width += font.kerning(prev, glyph.id);
            }
            line_width += glyph.xadvance;
            prev = Some(glyph.id);
        }
        width = width.max(line_width);
        height += font.line_height();
    }
    Ok((width, height))
}
