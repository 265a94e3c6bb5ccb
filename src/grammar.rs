//! Parsers and encoders for the scalar styling mini-languages
//!
//! Each grammar is tiny and comma-delimited: fonts, colors, frames and
//! padding are compact strings, while grid columns, animations and clips
//! arrive as structured JSON literals. Parsing never coerces: anything
//! outside a grammar is reported as `MalformedLiteral`, `OutOfRange` or
//! `UnknownKeyword` with the attribute name attached. Encoding is the
//! `Display` impl of each spec, and `parse(encode(x)) == x` holds for every
//! spec (hex colors keep their exact source text).

use crate::error::{Result, StyleError};
use crate::types::*;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{4}|[0-9A-Fa-f]{6}|[0-9A-Fa-f]{8})$")
        .expect("hex color pattern")
});

static TIMEZONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_]+/[A-Za-z_]+$").expect("timezone pattern"));

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Render a JSON value the way it appeared in the description, for error
/// messages. Strings lose their quotes; everything else keeps JSON syntax.
pub(crate) fn raw_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A fixed-point value in [0, 1]: exactly `"0"`, `"1"`, or `"0." + digits`.
/// The source text is kept verbatim so encoding is lossless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal(String);

impl Decimal {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn parse_decimal(field: &str, raw: &str) -> Result<Decimal> {
    if raw == "0" || raw == "1" {
        return Ok(Decimal(raw.to_string()));
    }
    if let Some(rest) = raw.strip_prefix("0.") {
        if is_digits(rest) {
            return Ok(Decimal(raw.to_string()));
        }
    }
    // Numeric but outside the textual grammar: distinguish a domain error
    // from a malformed literal so "2" and "1.0" report differently.
    if let Ok(v) = raw.parse::<f64>() {
        if !(0.0..=1.0).contains(&v) {
            return Err(StyleError::out_of_range(field, raw));
        }
    }
    Err(StyleError::malformed(field, raw))
}

/// Digits only: no sign, no decimal point. Distinct from `Decimal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberString(String);

impl NumberString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NumberString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NumberString {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

pub fn parse_number(field: &str, raw: &str) -> Result<NumberString> {
    if is_digits(raw) {
        Ok(NumberString(raw.to_string()))
    } else {
        Err(StyleError::malformed(field, raw))
    }
}

/// Accept a `NumberString` given either as a JSON string or a non-negative
/// integer literal. Structured records (grid columns) use integer literals.
pub fn number_from_value(field: &str, value: &Value) -> Result<NumberString> {
    match value {
        Value::String(s) => parse_number(field, s),
        Value::Number(n) => match n.as_u64() {
            Some(u) => Ok(NumberString(u.to_string())),
            None => Err(StyleError::malformed(field, raw_text(value))),
        },
        _ => Err(StyleError::malformed(field, raw_text(value))),
    }
}

/// A font: one of the named presets, or `<size>[,bold|,light][,monospaced]`
/// with the modifiers in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Font {
    Named(NamedFont),
    Custom {
        size: NumberString,
        weight: Option<FontWeight>,
        monospaced: bool,
    },
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Font::Named(named) => f.write_str(named.as_str()),
            Font::Custom {
                size,
                weight,
                monospaced,
            } => {
                write!(f, "{size}")?;
                if let Some(weight) = weight {
                    write!(f, ",{}", weight.as_str())?;
                }
                if *monospaced {
                    f.write_str(",monospaced")?;
                }
                Ok(())
            }
        }
    }
}

pub fn parse_font(field: &str, raw: &str) -> Result<Font> {
    if let Some(named) = NamedFont::from_name(raw) {
        return Ok(Font::Named(named));
    }
    let parts: Vec<&str> = raw.split(',').collect();
    if !is_digits(parts[0]) {
        // Neither a preset nor a size: a keyword we do not know.
        return Err(StyleError::unknown_keyword(field, raw));
    }
    let size = parse_number(field, parts[0])?;
    let mut rest = &parts[1..];
    let mut weight = None;
    if let Some(token) = rest.first() {
        if let Some(w) = FontWeight::from_name(token) {
            weight = Some(w);
            rest = &rest[1..];
        }
    }
    let mut monospaced = false;
    if let Some(token) = rest.first() {
        if *token == "monospaced" {
            monospaced = true;
            rest = &rest[1..];
        }
    }
    match rest.first() {
        None => Ok(Font::Custom {
            size,
            weight,
            monospaced,
        }),
        // A known modifier out of order is a shape problem, not a vocabulary
        // problem.
        Some(token) if FontWeight::from_name(token).is_some() || *token == "monospaced" => {
            Err(StyleError::malformed(field, raw))
        }
        Some(token) => Err(StyleError::unknown_keyword(field, *token)),
    }
}

/// A plain color body: a named keyword or `#`-prefixed hex text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorBody {
    Named(NamedColor),
    /// Exact source text including the `#`, 3/4/6/8 hex digits.
    Hex(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    pub body: ColorBody,
    pub opacity: Option<Decimal>,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            ColorBody::Named(named) => f.write_str(named.as_str())?,
            ColorBody::Hex(text) => f.write_str(text)?,
        }
        if let Some(opacity) = &self.opacity {
            write!(f, ",{opacity}")?;
        }
        Ok(())
    }
}

pub fn parse_color(field: &str, raw: &str) -> Result<Color> {
    if raw.starts_with("gradient:") {
        // Pre-resolved gradient tokens are not colors; route through
        // `resolve_color_prop` instead.
        return Err(StyleError::malformed(field, raw));
    }
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() > 2 || parts[0].is_empty() {
        return Err(StyleError::malformed(field, raw));
    }
    let body = if parts[0].starts_with('#') {
        if !HEX_COLOR_RE.is_match(parts[0]) {
            return Err(StyleError::malformed(field, parts[0]));
        }
        ColorBody::Hex(parts[0].to_string())
    } else {
        match NamedColor::from_name(parts[0]) {
            Some(named) => ColorBody::Named(named),
            None => return Err(StyleError::unknown_keyword(field, parts[0])),
        }
    };
    let opacity = match parts.get(1) {
        Some(text) => Some(parse_decimal(field, text)?),
        None => None,
    };
    Ok(Color { body, opacity })
}

/// A frame: `max[,<align>]`, a single square dimension, or
/// `<w>,<h>[,<align>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Max {
        alignment: Option<Alignment>,
    },
    Uniform(NumberString),
    Size {
        width: NumberString,
        height: NumberString,
        alignment: Option<Alignment>,
    },
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frame::Max { alignment: None } => f.write_str("max"),
            Frame::Max {
                alignment: Some(alignment),
            } => write!(f, "max,{}", alignment.as_str()),
            Frame::Uniform(size) => write!(f, "{size}"),
            Frame::Size {
                width,
                height,
                alignment,
            } => {
                write!(f, "{width},{height}")?;
                if let Some(alignment) = alignment {
                    write!(f, ",{}", alignment.as_str())?;
                }
                Ok(())
            }
        }
    }
}

pub fn parse_frame(field: &str, raw: &str) -> Result<Frame> {
    let parts: Vec<&str> = raw.split(',').collect();
    let alignment_of = |token: &str| -> Result<Alignment> {
        Alignment::from_name(token).ok_or_else(|| StyleError::unknown_keyword(field, token))
    };
    match parts.as_slice() {
        ["max"] => Ok(Frame::Max { alignment: None }),
        ["max", align] => Ok(Frame::Max {
            alignment: Some(alignment_of(align)?),
        }),
        [single] if is_digits(single) => Ok(Frame::Uniform(parse_number(field, single)?)),
        [single] => Err(StyleError::unknown_keyword(field, *single)),
        [w, h] if is_digits(w) && is_digits(h) => Ok(Frame::Size {
            width: parse_number(field, w)?,
            height: parse_number(field, h)?,
            alignment: None,
        }),
        [w, h, align] if is_digits(w) && is_digits(h) => Ok(Frame::Size {
            width: parse_number(field, w)?,
            height: parse_number(field, h)?,
            alignment: Some(alignment_of(align)?),
        }),
        _ => Err(StyleError::malformed(field, raw)),
    }
}

/// Padding: one uniform value, four explicit values in fixed order
/// (top, bottom, leading, trailing), or a single edge keyword with a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Padding {
    Uniform(NumberString),
    Edges {
        top: NumberString,
        bottom: NumberString,
        leading: NumberString,
        trailing: NumberString,
    },
    Edge {
        edge: PaddingEdge,
        value: NumberString,
    },
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Padding::Uniform(value) => write!(f, "{value}"),
            Padding::Edges {
                top,
                bottom,
                leading,
                trailing,
            } => write!(f, "{top},{bottom},{leading},{trailing}"),
            Padding::Edge { edge, value } => write!(f, "{},{value}", edge.as_str()),
        }
    }
}

pub fn parse_padding(field: &str, raw: &str) -> Result<Padding> {
    let parts: Vec<&str> = raw.split(',').collect();
    match parts.as_slice() {
        [single] if is_digits(single) => Ok(Padding::Uniform(parse_number(field, single)?)),
        [edge, value] => {
            if is_digits(edge) {
                // Two bare numbers is not a padding form.
                return Err(StyleError::malformed(field, raw));
            }
            let edge = PaddingEdge::from_name(edge)
                .ok_or_else(|| StyleError::unknown_keyword(field, *edge))?;
            Ok(Padding::Edge {
                edge,
                value: parse_number(field, value)?,
            })
        }
        [top, bottom, leading, trailing] => Ok(Padding::Edges {
            top: parse_number(field, top)?,
            bottom: parse_number(field, bottom)?,
            leading: parse_number(field, leading)?,
            trailing: parse_number(field, trailing)?,
        }),
        _ => Err(StyleError::malformed(field, raw)),
    }
}

/// One column of an `hgrid`/`vgrid` layout. Arrives as a structured JSON
/// literal with a `type` discriminator, not as an encoded string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridColumn {
    Adaptive {
        min: Option<NumberString>,
        max: Option<NumberString>,
    },
    Fixed {
        value: NumberString,
    },
    Flexible,
}

impl Serialize for GridColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            GridColumn::Adaptive { min, max } => {
                map.serialize_entry("type", "adaptive")?;
                if let Some(min) = min {
                    map.serialize_entry("min", min)?;
                }
                if let Some(max) = max {
                    map.serialize_entry("max", max)?;
                }
            }
            GridColumn::Fixed { value } => {
                map.serialize_entry("type", "fixed")?;
                map.serialize_entry("value", value)?;
            }
            GridColumn::Flexible => {
                map.serialize_entry("type", "flexible")?;
            }
        }
        map.end()
    }
}

pub fn parse_grid_column(field: &str, value: &Value) -> Result<GridColumn> {
    let record = value
        .as_object()
        .ok_or_else(|| StyleError::malformed(field, raw_text(value)))?;
    for key in record.keys() {
        if !matches!(key.as_str(), "type" | "min" | "max" | "value") {
            return Err(StyleError::unknown_keyword(field, key));
        }
    }
    let kind = record
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| StyleError::malformed(field, raw_text(value)))?;
    match kind {
        "adaptive" => {
            let min = match record.get("min") {
                Some(v) => Some(number_from_value(field, v)?),
                None => None,
            };
            let max = match record.get("max") {
                Some(v) => Some(number_from_value(field, v)?),
                None => None,
            };
            if min.is_none() && max.is_none() {
                return Err(StyleError::malformed(field, raw_text(value)));
            }
            Ok(GridColumn::Adaptive { min, max })
        }
        "fixed" => {
            let value = record
                .get("value")
                .ok_or_else(|| StyleError::malformed(field, raw_text(value)))
                .and_then(|v| number_from_value(field, v))?;
            Ok(GridColumn::Fixed { value })
        }
        "flexible" => Ok(GridColumn::Flexible),
        other => Err(StyleError::unknown_keyword(field, other)),
    }
}

/// A date value: a named relative keyword or an absolute instant given as
/// epoch milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSpec {
    Named(NamedDate),
    Instant(i64),
}

impl Serialize for DateSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            DateSpec::Named(named) => serializer.serialize_str(named.as_str()),
            DateSpec::Instant(millis) => serializer.serialize_i64(*millis),
        }
    }
}

pub fn parse_date(field: &str, value: &Value) -> Result<DateSpec> {
    match value {
        Value::String(s) => {
            if let Some(named) = NamedDate::from_name(s) {
                return Ok(DateSpec::Named(named));
            }
            if is_digits(s) {
                return s
                    .parse::<i64>()
                    .map(DateSpec::Instant)
                    .map_err(|_| StyleError::out_of_range(field, s.as_str()));
            }
            Err(StyleError::unknown_keyword(field, s.as_str()))
        }
        Value::Number(n) => n
            .as_i64()
            .map(DateSpec::Instant)
            .ok_or_else(|| StyleError::malformed(field, raw_text(value))),
        _ => Err(StyleError::malformed(field, raw_text(value))),
    }
}

pub fn parse_date_style(field: &str, raw: &str) -> Result<DateStyle> {
    DateStyle::from_name(raw).ok_or_else(|| StyleError::unknown_keyword(field, raw))
}

/// A clip setting: a bare toggle or a shape keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Toggle(bool),
    Shape(ClipShape),
}

impl Serialize for Clip {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Clip::Toggle(on) => serializer.serialize_bool(*on),
            Clip::Shape(shape) => serializer.serialize_str(shape.as_str()),
        }
    }
}

pub fn parse_clip(field: &str, value: &Value) -> Result<Clip> {
    match value {
        Value::Bool(on) => Ok(Clip::Toggle(*on)),
        Value::String(s) => ClipShape::from_name(s)
            .map(Clip::Shape)
            .ok_or_else(|| StyleError::unknown_keyword(field, s.as_str())),
        _ => Err(StyleError::malformed(field, raw_text(value))),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timezone {
    Current,
    /// A validated `Region/City` identifier.
    Region(String),
}

impl Timezone {
    pub fn as_str(&self) -> &str {
        match self {
            Timezone::Current => "current",
            Timezone::Region(zone) => zone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Zero,
    Aligned(Alignment),
}

impl Anchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Zero => "zero",
            Anchor::Aligned(alignment) => alignment.as_str(),
        }
    }
}

/// A clock animation: which hand drives it, in which timezone, around which
/// anchor point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animation {
    pub kind: AnimationType,
    pub timezone: Timezone,
    pub anchor: Anchor,
}

impl Serialize for Animation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("type", self.kind.as_str())?;
        map.serialize_entry("timezone", self.timezone.as_str())?;
        map.serialize_entry("anchor", self.anchor.as_str())?;
        map.end()
    }
}

pub fn parse_animation(field: &str, value: &Value) -> Result<Animation> {
    let record = value
        .as_object()
        .ok_or_else(|| StyleError::malformed(field, raw_text(value)))?;
    for key in record.keys() {
        if !matches!(key.as_str(), "type" | "timezone" | "anchor") {
            return Err(StyleError::unknown_keyword(field, key));
        }
    }
    let text_of = |key: &str| -> Result<&str> {
        record
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| StyleError::malformed(format!("{field}.{key}"), raw_text(value)))
    };
    let kind_text = text_of("type")?;
    let kind = AnimationType::from_name(kind_text)
        .ok_or_else(|| StyleError::unknown_keyword(format!("{field}.type"), kind_text))?;
    let zone_text = text_of("timezone")?;
    let timezone = if zone_text == "current" {
        Timezone::Current
    } else if TIMEZONE_RE.is_match(zone_text) {
        Timezone::Region(zone_text.to_string())
    } else {
        return Err(StyleError::unknown_keyword(
            format!("{field}.timezone"),
            zone_text,
        ));
    };
    let anchor_text = text_of("anchor")?;
    let anchor = if anchor_text == "zero" {
        Anchor::Zero
    } else {
        Alignment::from_name(anchor_text)
            .map(Anchor::Aligned)
            .ok_or_else(|| StyleError::unknown_keyword(format!("{field}.anchor"), anchor_text))?
    };
    Ok(Animation {
        kind,
        timezone,
        anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decimal_round_trips_valid_strings() {
        for text in ["0", "1", "0.5", "0.999"] {
            let parsed = parse_decimal("opacity", text).unwrap();
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn decimal_rejects_out_of_grammar_input() {
        assert_eq!(
            parse_decimal("opacity", "2"),
            Err(StyleError::out_of_range("opacity", "2"))
        );
        assert_eq!(
            parse_decimal("opacity", "-0.1"),
            Err(StyleError::out_of_range("opacity", "-0.1"))
        );
        assert_eq!(
            parse_decimal("opacity", "abc"),
            Err(StyleError::malformed("opacity", "abc"))
        );
        // In range but not in the textual grammar.
        assert_eq!(
            parse_decimal("opacity", "1.0"),
            Err(StyleError::malformed("opacity", "1.0"))
        );
        assert!(parse_decimal("opacity", "0.").is_err());
        assert!(parse_decimal("opacity", ".5").is_err());
    }

    #[test]
    fn number_string_is_digits_only() {
        assert_eq!(parse_number("corner", "5").unwrap().as_str(), "5");
        assert!(parse_number("corner", "-5").is_err());
        assert!(parse_number("corner", "5.5").is_err());
        assert!(parse_number("corner", "").is_err());
    }

    #[test]
    fn font_composite_parses_and_re_encodes_in_fixed_order() {
        let font = parse_font("font", "12,bold,monospaced").unwrap();
        assert_eq!(
            font,
            Font::Custom {
                size: parse_number("font", "12").unwrap(),
                weight: Some(FontWeight::Bold),
                monospaced: true,
            }
        );
        assert_eq!(font.to_string(), "12,bold,monospaced");

        assert_eq!(parse_font("font", "12,monospaced").unwrap().to_string(), "12,monospaced");
        assert_eq!(parse_font("font", "body").unwrap(), Font::Named(NamedFont::Body));
    }

    #[test]
    fn font_modifiers_are_order_fixed() {
        assert_eq!(
            parse_font("font", "12,monospaced,bold"),
            Err(StyleError::malformed("font", "12,monospaced,bold"))
        );
        assert_eq!(
            parse_font("font", "12,heavy"),
            Err(StyleError::unknown_keyword("font", "heavy"))
        );
        assert_eq!(
            parse_font("font", "bigText"),
            Err(StyleError::unknown_keyword("font", "bigText"))
        );
    }

    #[test]
    fn color_accepts_names_hex_and_opacity() {
        let color = parse_color("color", "red,0.5").unwrap();
        assert_eq!(color.body, ColorBody::Named(NamedColor::Red));
        assert_eq!(color.to_string(), "red,0.5");

        // Hex text is preserved exactly, including case.
        let hex = parse_color("color", "#A1b2C3").unwrap();
        assert_eq!(hex.to_string(), "#A1b2C3");
        assert!(parse_color("color", "#12345").is_err());
        assert!(parse_color("color", "#GG0000").is_err());

        assert_eq!(
            parse_color("color", "crimson"),
            Err(StyleError::unknown_keyword("color", "crimson"))
        );
        assert_eq!(
            parse_color("color", "red,2"),
            Err(StyleError::out_of_range("color", "2"))
        );
    }

    #[test]
    fn color_refuses_gradient_tokens() {
        assert!(parse_color("color", "gradient:linear|red|top|bottom").is_err());
    }

    #[test]
    fn frame_forms() {
        assert_eq!(parse_frame("frame", "max").unwrap(), Frame::Max { alignment: None });
        assert_eq!(
            parse_frame("frame", "max,topLeading").unwrap(),
            Frame::Max {
                alignment: Some(Alignment::TopLeading)
            }
        );
        assert_eq!(parse_frame("frame", "40").unwrap().to_string(), "40");
        assert_eq!(parse_frame("frame", "100,40").unwrap().to_string(), "100,40");
        assert_eq!(
            parse_frame("frame", "100,40,center").unwrap().to_string(),
            "100,40,center"
        );
        assert_eq!(
            parse_frame("frame", "max,middle"),
            Err(StyleError::unknown_keyword("frame", "middle"))
        );
        assert!(parse_frame("frame", "100,40,center,extra").is_err());
    }

    #[test]
    fn padding_forms() {
        assert_eq!(
            parse_padding("padding", "top,10").unwrap(),
            Padding::Edge {
                edge: PaddingEdge::Top,
                value: parse_number("padding", "10").unwrap(),
            }
        );
        assert_eq!(
            parse_padding("padding", "1,2,3,4").unwrap().to_string(),
            "1,2,3,4"
        );
        assert_eq!(parse_padding("padding", "8").unwrap().to_string(), "8");
        assert_eq!(
            parse_padding("padding", "1,2,3,4,5"),
            Err(StyleError::malformed("padding", "1,2,3,4,5"))
        );
        assert_eq!(
            parse_padding("padding", "10,20"),
            Err(StyleError::malformed("padding", "10,20"))
        );
        assert_eq!(
            parse_padding("padding", "middle,10"),
            Err(StyleError::unknown_keyword("padding", "middle"))
        );
    }

    #[test]
    fn grid_column_variants() {
        let fixed = parse_grid_column("columns", &json!({"type": "fixed", "value": 10})).unwrap();
        assert_eq!(
            fixed,
            GridColumn::Fixed {
                value: parse_number("columns", "10").unwrap()
            }
        );
        let adaptive =
            parse_grid_column("columns", &json!({"type": "adaptive", "min": "80"})).unwrap();
        assert!(matches!(adaptive, GridColumn::Adaptive { min: Some(_), max: None }));
        assert_eq!(
            parse_grid_column("columns", &json!({"type": "flexible"})).unwrap(),
            GridColumn::Flexible
        );

        // adaptive needs at least one bound; fixed needs a value.
        assert!(parse_grid_column("columns", &json!({"type": "adaptive"})).is_err());
        assert!(parse_grid_column("columns", &json!({"type": "fixed"})).is_err());
        assert_eq!(
            parse_grid_column("columns", &json!({"type": "rigid"})),
            Err(StyleError::unknown_keyword("columns", "rigid"))
        );
        assert!(parse_grid_column("columns", &json!({"type": "flexible", "span": 2})).is_err());
    }

    #[test]
    fn date_values() {
        assert_eq!(
            parse_date("date", &json!("now")).unwrap(),
            DateSpec::Named(NamedDate::Now)
        );
        assert_eq!(
            parse_date("date", &json!("start of today")).unwrap(),
            DateSpec::Named(NamedDate::StartOfToday)
        );
        assert_eq!(
            parse_date("date", &json!(1700000000000i64)).unwrap(),
            DateSpec::Instant(1700000000000)
        );
        assert_eq!(
            parse_date("date", &json!("1700000000000")).unwrap(),
            DateSpec::Instant(1700000000000)
        );
        assert_eq!(
            parse_date("date", &json!("someday")),
            Err(StyleError::unknown_keyword("date", "someday"))
        );
        assert!(parse_date_style("style", "relative").is_ok());
        assert!(parse_date_style("style", "fancy").is_err());
    }

    #[test]
    fn clip_accepts_bool_or_shape() {
        assert_eq!(parse_clip("clip", &json!(true)).unwrap(), Clip::Toggle(true));
        assert_eq!(
            parse_clip("clip", &json!("circle")).unwrap(),
            Clip::Shape(ClipShape::Circle)
        );
        assert_eq!(
            parse_clip("clip", &json!("star")),
            Err(StyleError::unknown_keyword("clip", "star"))
        );
        assert!(parse_clip("clip", &json!(3)).is_err());
    }

    #[test]
    fn animation_record() {
        let anim = parse_animation(
            "animation",
            &json!({"type": "clockSecond", "timezone": "America/New_York", "anchor": "zero"}),
        )
        .unwrap();
        assert_eq!(anim.kind, AnimationType::ClockSecond);
        assert_eq!(anim.timezone, Timezone::Region("America/New_York".into()));
        assert_eq!(anim.anchor, Anchor::Zero);

        let current = parse_animation(
            "animation",
            &json!({"type": "clockHour", "timezone": "current", "anchor": "center"}),
        )
        .unwrap();
        assert_eq!(current.timezone, Timezone::Current);
        assert_eq!(current.anchor, Anchor::Aligned(Alignment::Center));

        // A bare zone name is not Region/City.
        assert_eq!(
            parse_animation(
                "animation",
                &json!({"type": "clockHour", "timezone": "UTC", "anchor": "zero"}),
            ),
            Err(StyleError::unknown_keyword("animation.timezone", "UTC"))
        );
        // The original's misspelled keyword is not part of the grammar.
        assert!(parse_animation(
            "animation",
            &json!({"type": "clockMiniute", "timezone": "current", "anchor": "zero"}),
        )
        .is_err());
        assert!(parse_animation("animation", &json!({"type": "clockHour"})).is_err());
    }
}
