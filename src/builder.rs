//! Widget tree builder
//!
//! Turns a raw component description (kind name, raw attribute bag, children)
//! into a validated, normalized `WidgetNode` tree. Field errors are collected
//! across the whole tree before surfacing, so one pass over a malformed
//! description reports everything wrong with it.

use crate::error::{SchemaViolation, StyleError};
use crate::gradient::{resolve_color_prop, ColorProp};
use crate::grammar::{
    parse_animation, parse_clip, parse_date, parse_date_style, parse_decimal, parse_font,
    parse_frame, parse_grid_column, parse_number, parse_padding, raw_text, Animation, Clip,
    DateSpec, Decimal, Font, Frame, GridColumn, NumberString, Padding,
};
use crate::schema::check_shape;
use crate::types::{DateStyle, ImageMode, NodeKind};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A raw component description as assembled by the caller, before any
/// validation. Attribute values are JSON literals: compact grammar strings
/// for most fields, structured records for grid columns, animations and
/// clips.
#[derive(Debug, Clone, Deserialize)]
pub struct Description {
    pub kind: String,
    #[serde(default)]
    pub attrs: BTreeMap<String, Value>,
    #[serde(default)]
    pub children: Vec<Description>,
}

/// A normalized attribute value. Every variant serializes back to its wire
/// form (encoded string, structured record, or plain literal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Decimal(Decimal),
    Number(NumberString),
    Font(Font),
    Color(ColorProp),
    Frame(Frame),
    Padding(Padding),
    Columns(Vec<GridColumn>),
    Date(DateSpec),
    DateStyle(DateStyle),
    Animation(Animation),
    Clip(Clip),
    Mode(ImageMode),
    Text(String),
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AttrValue::Decimal(v) => serializer.serialize_str(&v.to_string()),
            AttrValue::Number(v) => serializer.serialize_str(v.as_str()),
            AttrValue::Font(v) => serializer.serialize_str(&v.to_string()),
            AttrValue::Color(v) => serializer.serialize_str(&v.to_string()),
            AttrValue::Frame(v) => serializer.serialize_str(&v.to_string()),
            AttrValue::Padding(v) => serializer.serialize_str(&v.to_string()),
            AttrValue::Columns(v) => serializer.collect_seq(v),
            AttrValue::Date(v) => v.serialize(serializer),
            AttrValue::DateStyle(v) => serializer.serialize_str(v.as_str()),
            AttrValue::Animation(v) => v.serialize(serializer),
            AttrValue::Clip(v) => v.serialize(serializer),
            AttrValue::Mode(v) => serializer.serialize_str(v.as_str()),
            AttrValue::Text(v) => serializer.serialize_str(v),
        }
    }
}

/// One validated node of the widget tree. A pure value: the node exclusively
/// owns its children, nothing is shared, and the tree never mutates after
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetNode {
    pub kind: NodeKind,
    pub attrs: BTreeMap<String, AttrValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WidgetNode>,
}

impl WidgetNode {
    /// Field names present on this node, for shape checks.
    pub fn present_fields(&self) -> Vec<&str> {
        self.attrs.keys().map(String::as_str).collect()
    }
}

/// Build and validate a widget tree from a raw description.
///
/// Does not fail fast: every grammar and schema error in the entire tree is
/// collected into one batch. A tree is only returned when the batch is empty.
pub fn build(desc: &Description) -> Result<WidgetNode, Vec<StyleError>> {
    let mut errors = Vec::new();
    let node = build_node(desc, &mut errors);
    match node {
        Some(node) if errors.is_empty() => Ok(node),
        _ => {
            log::debug!(
                "rejected <{}> description with {} validation errors",
                desc.kind,
                errors.len()
            );
            Err(errors)
        }
    }
}

fn build_node(desc: &Description, errors: &mut Vec<StyleError>) -> Option<WidgetNode> {
    let Some(kind) = NodeKind::from_name(&desc.kind) else {
        errors.push(StyleError::UnknownKind {
            raw: desc.kind.clone(),
        });
        // Still walk the children so their errors surface in the same pass.
        for child in &desc.children {
            build_node(child, errors);
        }
        return None;
    };

    let mut attrs = BTreeMap::new();
    for (field, value) in &desc.attrs {
        match normalize_attr(kind, field, value) {
            Some(Ok(normalized)) => {
                attrs.insert(field.clone(), normalized);
            }
            Some(Err(error)) => errors.push(error),
            // Unroutable field: reported by the shape check below.
            None => {}
        }
    }

    let present: Vec<&str> = desc.attrs.keys().map(String::as_str).collect();
    for violation in check_shape(kind, &present, desc.children.len()) {
        errors.push(StyleError::schema(kind.as_str(), violation));
    }

    let mut children = Vec::with_capacity(desc.children.len());
    for child in &desc.children {
        if let Some(node) = build_node(child, errors) {
            children.push(node);
        }
    }

    Some(WidgetNode {
        kind,
        attrs,
        children,
    })
}

/// Route one attribute to its mini-language parser. `None` means the field
/// belongs to no grammar at all; the schema check reports it.
fn normalize_attr(kind: NodeKind, field: &str, value: &Value) -> Option<Result<AttrValue, StyleError>> {
    let text = || {
        value
            .as_str()
            .ok_or_else(|| StyleError::malformed(field, raw_text(value)))
    };
    let result = match field {
        "font" | "labelFont" | "titleFont" => text().and_then(|t| parse_font(field, t)).map(AttrValue::Font),
        "color" | "background" | "needleColor" => text()
            .and_then(|t| resolve_color_prop(field, t))
            .map(AttrValue::Color),
        "frame" => text().and_then(|t| parse_frame(field, t)).map(AttrValue::Frame),
        "padding" => text().and_then(|t| parse_padding(field, t)).map(AttrValue::Padding),
        "corner" | "spacing" | "rotation" | "angle" | "value" | "thickness" => {
            text().and_then(|t| parse_number(field, t)).map(AttrValue::Number)
        }
        "ratio" | "trim" => text().and_then(|t| parse_decimal(field, t)).map(AttrValue::Decimal),
        "clip" => parse_clip(field, value).map(AttrValue::Clip),
        "animation" => parse_animation(field, value).map(AttrValue::Animation),
        "columns" => normalize_columns(kind, field, value),
        "date" => parse_date(field, value).map(AttrValue::Date),
        "style" => text().and_then(|t| parse_date_style(field, t)).map(AttrValue::DateStyle),
        "mode" => text().and_then(|t| {
            ImageMode::from_name(t)
                .ok_or_else(|| StyleError::unknown_keyword(field, t))
        }).map(AttrValue::Mode),
        "url" | "id" | "systemName" | "content" | "label" | "title" | "sections" => {
            text().map(|t| AttrValue::Text(t.to_string()))
        }
        _ => return None,
    };
    Some(result)
}

fn normalize_columns(kind: NodeKind, field: &str, value: &Value) -> Result<AttrValue, StyleError> {
    let items = value
        .as_array()
        .ok_or_else(|| StyleError::malformed(field, raw_text(value)))?;
    if items.is_empty() {
        return Err(StyleError::schema(
            kind.as_str(),
            SchemaViolation::EmptyColumns,
        ));
    }
    let mut columns = Vec::with_capacity(items.len());
    for item in items {
        columns.push(parse_grid_column(field, item)?);
    }
    Ok(AttrValue::Columns(columns))
}
