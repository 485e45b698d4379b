// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pairing of a [`Font`] with the texture handle its atlas was uploaded to.

use std::ops::Deref;

use crate::font::Font;

/// A [`Font`] together with the opaque handle of its uploaded atlas
/// texture.
///
/// The crate never talks to a graphics API, so the handle type is the
/// caller's: a GL texture name, a `wgpu::Texture`, an index into a texture
/// array. Pairing them in one value keeps the texture owned exactly once,
/// by the same owner as the font; [`release`](Self::release) hands the
/// handle back when the font is discarded so the caller can free the GPU
/// resource.
///
/// Dereferences to [`Font`], so layout and queries work directly on the
/// pair.
#[derive(Clone, Debug)]
pub struct AtlasFont<T> {
    font: Font,
    texture: T,
}

impl<T> AtlasFont<T> {
    pub fn new(font: Font, texture: T) -> Self {
        Self { font, texture }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    /// Consumes the pair, returning the texture handle for the caller to
    /// free.
    pub fn release(self) -> T {
        self.texture
    }
}

impl<T> Deref for AtlasFont<T> {
    type Target = Font;

    fn deref(&self) -> &Font {
        &self.font
    }
}
