// Copyright 2026 the Bmtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Laying out real strings with the bundled Ubuntu fixture.

use anyhow::Result;
use bmtext::kurbo::{Point, Size};
use bmtext::Text;
use bmtext_tests::{ubuntu, DEMO_TEXT};

#[test]
fn demo_text_produces_one_quad_per_character() -> Result<()> {
    let font = ubuntu()?;
    let text = Text::new(DEMO_TEXT, Point::ZERO, Size::new(300.0, 100.0), &font)?;

    let characters = DEMO_TEXT.chars().filter(|&c| c != '\n').count();
    assert_eq!(text.quads().len(), characters);
    assert_eq!(text.vertices().len(), characters * 4);

    for vertex in text.vertices() {
        assert!(vertex.x.is_finite() && vertex.y.is_finite());
        assert!((0.0..=1.0).contains(&vertex.s), "u out of range: {}", vertex.s);
        assert!((0.0..=1.0).contains(&vertex.t), "v out of range: {}", vertex.t);
    }
    Ok(())
}

#[test]
fn lines_are_stacked_top_to_bottom() -> Result<()> {
    let font = ubuntu()?;
    let text = Text::new(DEMO_TEXT, Point::ZERO, Size::new(300.0, 100.0), &font)?;

    // Vertical scale is 100 / (2 lines x 36px), so the second line starts
    // at y = 50. Glyph y-offsets only push quads further down.
    let first_line = DEMO_TEXT.lines().next().unwrap().len();
    for (i, quad) in text.quads().iter().enumerate() {
        if i < first_line {
            assert!(quad[0].y < 50.0, "line 1 quad {i} at y={}", quad[0].y);
        } else {
            assert!(quad[0].y >= 50.0, "line 2 quad {i} at y={}", quad[0].y);
        }
    }
    Ok(())
}

#[test]
fn block_fills_the_requested_width() -> Result<()> {
    let font = ubuntu()?;
    let text = Text::new(DEMO_TEXT, Point::ZERO, Size::new(300.0, 100.0), &font)?;

    // The widest line's last glyph has width equal to its advance, so the
    // block's right edge lands exactly on the box edge.
    let right = text
        .vertices()
        .iter()
        .map(|v| v.x)
        .fold(f32::NEG_INFINITY, f32::max);
    assert!((right - 300.0).abs() < 1e-3, "right edge at {right}");
    Ok(())
}

#[test]
fn kerning_tightens_adjacent_capitals() -> Result<()> {
    let font = ubuntu()?;
    // One natural-size line: height matches the line height and the width
    // sentinel keeps the horizontal scale uniform, so positions are
    // unscaled pixels.
    let text = Text::new("AV", Point::ZERO, Size::new(0.0, 36.0), &font)?;
    let quads = text.quads();
    // 'A' advances 21, then the A-V pair pulls the cursor back by 2.
    assert_eq!(quads[0][0].x, 0.0);
    assert_eq!(quads[1][0].x, 19.0);
    Ok(())
}

#[test]
fn unscaled_line_width_sums_advances() -> Result<()> {
    let font = ubuntu()?;
    let text = Text::new("Ubanita", Point::ZERO, Size::new(0.0, 36.0), &font)?;
    let right = text
        .vertices()
        .iter()
        .map(|v| v.x)
        .fold(f32::NEG_INFINITY, f32::max);
    // U23 + b19 + a17 + n18 + i7 + t12, then the final 'a' is 17 wide.
    assert_eq!(right, 113.0);
    Ok(())
}

#[test]
fn quads_keep_a_consistent_winding_order() -> Result<()> {
    let font = ubuntu()?;
    let text = Text::new(DEMO_TEXT, Point::ZERO, Size::new(300.0, 100.0), &font)?;
    for quad in text.quads() {
        let [tl, tr, br, bl] = quad;
        assert_eq!(tl.y, tr.y);
        assert_eq!(bl.y, br.y);
        assert_eq!(tl.x, bl.x);
        assert_eq!(tr.x, br.x);
        assert!(tr.x >= tl.x);
        assert!(br.y >= tr.y);
    }
    Ok(())
}

#[test]
fn identical_inputs_yield_identical_quads() -> Result<()> {
    let font = ubuntu()?;
    let a = Text::new(DEMO_TEXT, Point::new(10.0, 10.0), Size::new(300.0, 100.0), &font)?;
    let b = Text::new(DEMO_TEXT, Point::new(10.0, 10.0), Size::new(300.0, 100.0), &font)?;
    assert_eq!(a.quads(), b.quads());
    Ok(())
}
