//! Low-level nom parser functions for theme color values and page settings.
//!
//! Theme colors reach the engine in three loose shapes: a hex string, a CSS
//! gradient with hex stops, or an `rgb()`/`rgba()` function. The parsers here
//! recognize each shape; [`resolve_color`] combines them and never fails.

use crate::page::{Orientation, PageFormat};
use carta_types::Color;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, map_res, opt};
use nom::number::complete::float;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

/// Color used whenever a theme value cannot be resolved.
pub const FALLBACK_COLOR: Color = Color::rgb(16, 185, 129);

// --- Helper Parsers ---

fn ws<'a, P, O>(inner: P) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16)
    })
    .parse(input)
}

fn hex_doubled(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(1, 1, is_hex_digit), |s: &str| {
        u8::from_str_radix(s, 16).map(|v| v * 17)
    })
    .parse(input)
}

fn hex_color_6(input: &str) -> IResult<&str, Color> {
    map((hex_primary, hex_primary, hex_primary), |(r, g, b)| {
        Color::rgb(r, g, b)
    })
    .parse(input)
}

fn hex_color_3(input: &str) -> IResult<&str, Color> {
    map((hex_doubled, hex_doubled, hex_doubled), |(r, g, b)| {
        Color::rgb(r, g, b)
    })
    .parse(input)
}

/// A numeric channel, rounded and clamped into `0..=255`.
fn channel(input: &str) -> IResult<&str, u8> {
    map(ws(float), |v: f32| v.round().clamp(0.0, 255.0) as u8).parse(input)
}

// --- Color Parsers ---

/// Parses a hex color (e.g., "#FF0000" or "#F00").
pub fn parse_hex_color(input: &str) -> IResult<&str, Color> {
    preceded(char('#'), alt((hex_color_6, hex_color_3))).parse(input)
}

/// Parses `rgb(r, g, b)` or `rgba(r, g, b, a)`. The alpha component is
/// accepted and ignored.
pub fn parse_rgb_function(input: &str) -> IResult<&str, Color> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb"))).parse(input)?;
    let (input, _) = ws(char('(')).parse(input)?;
    let (input, (r, _, g, _, b)) =
        (channel, char(','), channel, char(','), channel).parse(input)?;
    let (input, _) = opt(preceded(char(','), ws(float))).parse(input)?;
    let (input, _) = char(')').parse(input)?;
    Ok((input, Color::rgb(r, g, b)))
}

/// Finds the first `#RRGGBB` token embedded anywhere in `input`.
pub fn first_embedded_hex(input: &str) -> Option<Color> {
    input
        .match_indices('#')
        .find_map(|(idx, _)| preceded(char('#'), hex_color_6).parse(&input[idx..]).ok())
        .map(|(_, color)| color)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Resolves a loosely typed theme color, reporting why resolution failed.
pub fn try_resolve_color(value: &str) -> Result<Color, StyleParseError> {
    let value = value.trim();
    let invalid = || StyleParseError::InvalidValue {
        property: "color".to_string(),
        value: value.to_string(),
    };

    if value.to_ascii_lowercase().contains("gradient") {
        first_embedded_hex(value).ok_or_else(invalid)
    } else if value.starts_with('#') {
        run_parser(parse_hex_color, value)
    } else if value.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("rgb")) {
        run_parser(parse_rgb_function, value)
    } else {
        Err(invalid())
    }
}

/// Resolves a theme color value into an RGB triplet.
///
/// Never fails: unparseable input yields [`FALLBACK_COLOR`].
pub fn resolve_color(value: &str) -> Color {
    try_resolve_color(value).unwrap_or_else(|e| {
        log::debug!("Falling back to default color: {}", e);
        FALLBACK_COLOR
    })
}

/// Parses a physical page format name ("A4", "A6").
pub fn parse_page_format(s: &str) -> Result<PageFormat, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "a4" => Ok(PageFormat::A4),
        "a6" => Ok(PageFormat::A6),
        _ => Err(StyleParseError::InvalidValue {
            property: "page-format".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses a page orientation ("portrait", "landscape", or the short "p"/"l").
pub fn parse_orientation(s: &str) -> Result<Orientation, StyleParseError> {
    match s.trim().to_lowercase().as_str() {
        "portrait" | "p" => Ok(Orientation::Portrait),
        "landscape" | "l" => Ok(Orientation::Landscape),
        _ => Err(StyleParseError::InvalidValue {
            property: "orientation".to_string(),
            value: s.to_string(),
        }),
    }
}
