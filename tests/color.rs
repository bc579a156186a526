//! Color resolver tests.

use framesheet::{FramesheetError, parse_color};
use image::Rgba;

#[test]
fn named_colors_resolve() {
    assert_eq!(parse_color("white").unwrap(), Rgba([255, 255, 255, 255]));
    assert_eq!(parse_color("black").unwrap(), Rgba([0, 0, 0, 255]));
    assert_eq!(parse_color("red").unwrap(), Rgba([255, 0, 0, 255]));
    assert_eq!(parse_color("navy").unwrap(), Rgba([0, 0, 128, 255]));
    assert_eq!(parse_color("darkgray").unwrap(), Rgba([169, 169, 169, 255]));
}

#[test]
fn named_colors_case_insensitive() {
    assert_eq!(parse_color("WHITE").unwrap(), Rgba([255, 255, 255, 255]));
    assert_eq!(parse_color("LightGrey").unwrap(), Rgba([211, 211, 211, 255]));
}

#[test]
fn grey_spelling_aliases() {
    assert_eq!(parse_color("gray").unwrap(), parse_color("grey").unwrap());
    assert_eq!(
        parse_color("lightgray").unwrap(),
        parse_color("lightgrey").unwrap()
    );
}

#[test]
fn hex_with_and_without_prefix() {
    assert_eq!(parse_color("#111111").unwrap(), Rgba([17, 17, 17, 255]));
    assert_eq!(parse_color("111111").unwrap(), Rgba([17, 17, 17, 255]));
    assert_eq!(parse_color("#A0B0C0").unwrap(), Rgba([160, 176, 192, 255]));
}

#[test]
fn alpha_always_opaque() {
    assert_eq!(parse_color("#000000").unwrap().0[3], 255);
    assert_eq!(parse_color("teal").unwrap().0[3], 255);
}

#[test]
fn invalid_tokens_rejected() {
    for token in ["zzzzzz", "#zzzzzz", "", "#fff", "fff", "#1111111", "not a color"] {
        match parse_color(token) {
            Err(FramesheetError::InvalidColor(reported)) => assert_eq!(reported, token),
            other => panic!("expected InvalidColor for {token:?}, got {other:?}"),
        }
    }
}
