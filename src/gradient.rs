//! Gradient resolution and color-property routing
//!
//! A gradient is described once as a structured record and resolved into an
//! opaque `gradient:`-prefixed token. The token is the only gradient form a
//! color-bearing attribute ever carries, and it is passed through untouched
//! rather than re-parsed as a scalar color.

use crate::error::{Result, StyleError};
use crate::grammar::{parse_color, Color};
use crate::types::Alignment;
use serde::Deserialize;
use std::fmt;

pub const GRADIENT_PREFIX: &str = "gradient:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Angular,
    Radial,
}

impl GradientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Angular => "angular",
            Self::Radial => "radial",
        }
    }
}

/// A structured gradient description as supplied by the caller. Colors are
/// raw mini-language strings and are validated during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub colors: Vec<String>,
    pub start_point: Alignment,
    pub end_point: Alignment,
}

/// The canonical encoded form of a resolved gradient. Opaque to everything
/// except the rendering host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientToken(String);

impl GradientToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap a raw string that already carries the gradient prefix.
    fn pre_resolved(raw: &str) -> Self {
        GradientToken(raw.to_string())
    }
}

impl fmt::Display for GradientToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A color-bearing attribute value: either a plain color or a pre-resolved
/// gradient token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorProp {
    Plain(Color),
    Gradient(GradientToken),
}

impl fmt::Display for ColorProp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorProp::Plain(color) => color.fmt(f),
            ColorProp::Gradient(token) => token.fmt(f),
        }
    }
}

/// Resolve a gradient description into its canonical token.
///
/// Deterministic and order-preserving over `colors`. Every color is run
/// through the color grammar first; an empty color list is rejected. Encoded
/// colors may contain commas (opacity suffixes), so colors are joined with
/// `;` and sections with `|`.
pub fn resolve_gradient(desc: &Gradient) -> Result<GradientToken> {
    if desc.colors.is_empty() {
        return Err(StyleError::invalid_gradient("color sequence is empty"));
    }
    let mut encoded = Vec::with_capacity(desc.colors.len());
    for raw in &desc.colors {
        let color = parse_color("gradient color", raw)?;
        encoded.push(color.to_string());
    }
    Ok(GradientToken(format!(
        "{GRADIENT_PREFIX}{}|{}|{}|{}",
        desc.kind.as_str(),
        encoded.join(";"),
        desc.start_point.as_str(),
        desc.end_point.as_str(),
    )))
}

/// Normalize a raw color-bearing attribute value. Gradient tokens are
/// produced by a separate resolution call and pass through unchanged;
/// everything else must satisfy the plain color grammar.
pub fn resolve_color_prop(field: &str, raw: &str) -> Result<ColorProp> {
    if raw.starts_with(GRADIENT_PREFIX) {
        Ok(ColorProp::Gradient(GradientToken::pre_resolved(raw)))
    } else {
        parse_color(field, raw).map(ColorProp::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(colors: &[&str]) -> Gradient {
        Gradient {
            kind: GradientKind::Linear,
            colors: colors.iter().map(|c| c.to_string()).collect(),
            start_point: Alignment::Top,
            end_point: Alignment::Bottom,
        }
    }

    #[test]
    fn resolves_to_prefixed_token_preserving_order() {
        let token = resolve_gradient(&linear(&["red", "blue"])).unwrap();
        assert!(token.as_str().starts_with(GRADIENT_PREFIX));
        assert_eq!(token.as_str(), "gradient:linear|red;blue|top|bottom");

        let reversed = resolve_gradient(&linear(&["blue", "red"])).unwrap();
        assert_ne!(token, reversed);
    }

    #[test]
    fn colors_with_opacity_stay_unambiguous() {
        let token = resolve_gradient(&linear(&["red,0.5", "#00FF00"])).unwrap();
        assert_eq!(token.as_str(), "gradient:linear|red,0.5;#00FF00|top|bottom");
    }

    #[test]
    fn empty_color_sequence_is_invalid() {
        assert_eq!(
            resolve_gradient(&linear(&[])),
            Err(StyleError::invalid_gradient("color sequence is empty"))
        );
    }

    #[test]
    fn bad_color_in_sequence_is_reported() {
        assert!(matches!(
            resolve_gradient(&linear(&["red", "crimson"])),
            Err(StyleError::UnknownKeyword { .. })
        ));
    }

    #[test]
    fn tokens_pass_through_color_prop_unchanged() {
        let token = resolve_gradient(&linear(&["red", "blue"])).unwrap();
        let prop = resolve_color_prop("background", token.as_str()).unwrap();
        assert_eq!(prop, ColorProp::Gradient(token));

        let plain = resolve_color_prop("background", "blue,0.8").unwrap();
        assert!(matches!(plain, ColorProp::Plain(_)));
        assert_eq!(plain.to_string(), "blue,0.8");
    }
}
