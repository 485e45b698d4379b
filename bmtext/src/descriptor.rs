// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parser for the BMFont "text" descriptor format.
//!
//! The format is line oriented: each line starts with a tag token followed
//! by space-separated `key=value` pairs. String values are double-quoted,
//! multi-valued fields are comma-separated integers, and everything else is
//! a bare integer. There is no float syntax; fields that are logically
//! fractional are written as integers and widened to `f32` when the record
//! is built.

use std::collections::HashMap;

use smallvec::SmallVec;

use crate::font::{CommonMetrics, Font, FontInfo, Glyph, KerningPair, Page};
use crate::{Error, Result};

/// Line tags this parser understands. Lines with any other tag are skipped,
/// so descriptors from newer generators still load.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Tag {
    Info,
    Common,
    Page,
    Char,
    Kerning,
}

impl Tag {
    fn parse(tag: &str) -> Option<Self> {
        match tag {
            "info" => Some(Self::Info),
            "common" => Some(Self::Common),
            "page" => Some(Self::Page),
            "char" => Some(Self::Char),
            "kerning" => Some(Self::Kerning),
            _ => None,
        }
    }
}

/// A single `key=value` payload. The type is inferred from the value's
/// syntax alone; the format carries no schema.
#[derive(Clone, Debug, PartialEq)]
enum Value {
    Int(i32),
    Str(String),
    List(SmallVec<[i32; 4]>),
}

impl Value {
    fn int(&self) -> i32 {
        if let Self::Int(v) = self {
            *v
        } else {
            0
        }
    }
}

/// The parsed fields of one line, with typed lookups that default to zero
/// or empty when a key is missing. Unknown keys are simply never asked for.
struct Fields<'a>(HashMap<&'a str, Value>);

impl Fields<'_> {
    fn int(&self, key: &str) -> i32 {
        self.0.get(key).map_or(0, Value::int)
    }

    /// Integer-to-float widening; the format has no native float type.
    fn f32(&self, key: &str) -> f32 {
        self.int(key) as f32
    }

    fn flag(&self, key: &str) -> bool {
        self.int(key) != 0
    }

    fn str(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::Str(s)) => s.clone(),
            _ => String::new(),
        }
    }

    fn list<const N: usize>(&self, key: &str) -> [i32; N] {
        let mut out = [0; N];
        if let Some(Value::List(items)) = self.0.get(key) {
            for (slot, item) in out.iter_mut().zip(items) {
                *slot = *item;
            }
        }
        out
    }
}

pub(crate) fn parse(src: &str) -> Result<Font> {
    let mut info = FontInfo::default();
    let mut common = CommonMetrics::default();
    let mut page = Page::default();
    let mut glyphs = HashMap::new();
    let mut kernings = Vec::new();

    for line in src.lines() {
        let mut tokens = line.split(' ');
        let Some(tag) = tokens.next().and_then(Tag::parse) else {
            continue;
        };
        let fields = parse_fields(tokens)?;
        match tag {
            Tag::Info => info = build_info(&fields),
            Tag::Common => common = build_common(&fields),
            Tag::Page => page = build_page(&fields),
            Tag::Char => {
                let glyph = build_glyph(&fields);
                // Last write wins; duplicate ids are not expected in
                // well-formed descriptors.
                glyphs.insert(glyph.id, glyph);
            }
            Tag::Kerning => kernings.push(build_kerning(&fields)),
        }
    }

    Ok(Font::from_parts(info, common, page, glyphs, kernings))
}

fn parse_fields<'a>(tokens: impl Iterator<Item = &'a str>) -> Result<Fields<'a>> {
    let mut fields = HashMap::new();
    for token in tokens.filter(|t| !t.is_empty()) {
        // Split on the first '=' only; values may legally contain '='.
        match token.split_once('=') {
            Some((key, raw)) if !raw.is_empty() => {
                fields.insert(key, parse_value(raw)?);
            }
            _ => {
                log::warn!("Skipping malformed token {token:?} in font descriptor");
            }
        }
    }
    Ok(Fields(fields))
}

fn parse_value(raw: &str) -> Result<Value> {
    if raw.starts_with('"') {
        Ok(Value::Str(raw.trim_matches('"').to_owned()))
    } else if raw.contains(',') {
        let mut items = SmallVec::new();
        for piece in raw.split(',') {
            items.push(parse_int(piece)?);
        }
        Ok(Value::List(items))
    } else {
        parse_int(raw).map(Value::Int)
    }
}

fn parse_int(token: &str) -> Result<i32> {
    token.parse().map_err(|source| Error::InvalidInteger {
        token: token.to_owned(),
        source,
    })
}

fn build_info(fields: &Fields<'_>) -> FontInfo {
    FontInfo {
        face: fields.str("face"),
        size: fields.int("size"),
        // Some exporters write `bld` instead of `bold`.
        bold: fields.flag("bold") || fields.flag("bld"),
        italic: fields.flag("italic"),
        charset: fields.str("charset"),
        unicode: fields.flag("unicode"),
        stretch_h: fields.int("stretchH"),
        smooth: fields.flag("smooth"),
        aa: fields.int("aa"),
        padding: fields.list("padding"),
        spacing: fields.list("spacing"),
        outline: fields.int("outline"),
    }
}

fn build_common(fields: &Fields<'_>) -> CommonMetrics {
    CommonMetrics {
        line_height: fields.f32("lineHeight"),
        base: fields.int("base"),
        scale_w: fields.f32("scaleW"),
        scale_h: fields.f32("scaleH"),
        pages: fields.int("pages"),
        packed: fields.flag("packed"),
    }
}

fn build_page(fields: &Fields<'_>) -> Page {
    Page {
        id: fields.int("id"),
        file: fields.str("file"),
    }
}

fn build_glyph(fields: &Fields<'_>) -> Glyph {
    Glyph {
        id: fields.int("id") as u8,
        x: fields.f32("x"),
        y: fields.f32("y"),
        width: fields.f32("width"),
        height: fields.f32("height"),
        xoffset: fields.f32("xoffset"),
        yoffset: fields.f32("yoffset"),
        xadvance: fields.f32("xadvance"),
        page: fields.int("page"),
        channel: fields.int("chnl"),
        letter: fields.str("letter"),
    }
}

fn build_kerning(fields: &Fields<'_>) -> KerningPair {
    KerningPair {
        first: fields.int("first") as u8,
        second: fields.int("second") as u8,
        amount: fields.f32("amount"),
    }
}
