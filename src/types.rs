//! Core keyword enumerations shared by every styling mini-language

use serde::{Deserialize, Serialize};

/// The node-kind catalogue. These names are the wire-level contract with the
/// native rendering host and must remain exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Link,
    Text,
    Image,
    HStack,
    VStack,
    ZStack,
    HGrid,
    VGrid,
    Spacer,
    Date,
    Rect,
    Ellipse,
    Capsule,
    Circle,
    Gauge,
}

impl NodeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "link" => Some(Self::Link),
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            "hstack" => Some(Self::HStack),
            "vstack" => Some(Self::VStack),
            "zstack" => Some(Self::ZStack),
            "hgrid" => Some(Self::HGrid),
            "vgrid" => Some(Self::VGrid),
            "spacer" => Some(Self::Spacer),
            "date" => Some(Self::Date),
            "rect" => Some(Self::Rect),
            "ellipse" => Some(Self::Ellipse),
            "capsule" => Some(Self::Capsule),
            "circle" => Some(Self::Circle),
            "gauge" => Some(Self::Gauge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Text => "text",
            Self::Image => "image",
            Self::HStack => "hstack",
            Self::VStack => "vstack",
            Self::ZStack => "zstack",
            Self::HGrid => "hgrid",
            Self::VGrid => "vgrid",
            Self::Spacer => "spacer",
            Self::Date => "date",
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::Capsule => "capsule",
            Self::Circle => "circle",
            Self::Gauge => "gauge",
        }
    }
}

/// Two-dimensional anchor used by frames, gradients and animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Center,
    Leading,
    Trailing,
    Top,
    Bottom,
    TopLeading,
    TopTrailing,
    BottomLeading,
    BottomTrailing,
}

impl Alignment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "center" => Some(Self::Center),
            "leading" => Some(Self::Leading),
            "trailing" => Some(Self::Trailing),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "topLeading" => Some(Self::TopLeading),
            "topTrailing" => Some(Self::TopTrailing),
            "bottomLeading" => Some(Self::BottomLeading),
            "bottomTrailing" => Some(Self::BottomTrailing),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::TopLeading => "topLeading",
            Self::TopTrailing => "topTrailing",
            Self::BottomLeading => "bottomLeading",
            Self::BottomTrailing => "bottomTrailing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Clear,
    Black,
    White,
    Gray,
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
    Pink,
    Purple,
    Primary,
    Secondary,
}

impl NamedColor {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clear" => Some(Self::Clear),
            "black" => Some(Self::Black),
            "white" => Some(Self::White),
            "gray" => Some(Self::Gray),
            "red" => Some(Self::Red),
            "green" => Some(Self::Green),
            "blue" => Some(Self::Blue),
            "orange" => Some(Self::Orange),
            "yellow" => Some(Self::Yellow),
            "pink" => Some(Self::Pink),
            "purple" => Some(Self::Purple),
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedFont {
    LargeTitle,
    Title,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption,
    Caption2,
}

impl NamedFont {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "largeTitle" => Some(Self::LargeTitle),
            "title" => Some(Self::Title),
            "title2" => Some(Self::Title2),
            "title3" => Some(Self::Title3),
            "headline" => Some(Self::Headline),
            "subheadline" => Some(Self::Subheadline),
            "body" => Some(Self::Body),
            "callout" => Some(Self::Callout),
            "footnote" => Some(Self::Footnote),
            "caption" => Some(Self::Caption),
            "caption2" => Some(Self::Caption2),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LargeTitle => "largeTitle",
            Self::Title => "title",
            Self::Title2 => "title2",
            Self::Title3 => "title3",
            Self::Headline => "headline",
            Self::Subheadline => "subheadline",
            Self::Body => "body",
            Self::Callout => "callout",
            Self::Footnote => "footnote",
            Self::Caption => "caption",
            Self::Caption2 => "caption2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Bold,
    Light,
}

impl FontWeight {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "bold" => Some(Self::Bold),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipShape {
    Circle,
    Rect,
    Ellipse,
    Capsule,
}

impl ClipShape {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "circle" => Some(Self::Circle),
            "rect" => Some(Self::Rect),
            "ellipse" => Some(Self::Ellipse),
            "capsule" => Some(Self::Capsule),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rect => "rect",
            Self::Ellipse => "ellipse",
            Self::Capsule => "capsule",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingEdge {
    Top,
    Bottom,
    Leading,
    Trailing,
    All,
    Horizontal,
    Vertical,
}

impl PaddingEdge {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "leading" => Some(Self::Leading),
            "trailing" => Some(Self::Trailing),
            "all" => Some(Self::All),
            "horizontal" => Some(Self::Horizontal),
            "vertical" => Some(Self::Vertical),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Leading => "leading",
            Self::Trailing => "trailing",
            Self::All => "all",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedDate {
    Now,
    Tomorrow,
    Yesterday,
    StartOfToday,
}

impl NamedDate {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "now" => Some(Self::Now),
            "tomorrow" => Some(Self::Tomorrow),
            "yesterday" => Some(Self::Yesterday),
            "start of today" => Some(Self::StartOfToday),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Now => "now",
            Self::Tomorrow => "tomorrow",
            Self::Yesterday => "yesterday",
            Self::StartOfToday => "start of today",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    Time,
    Date,
    Relative,
    Offset,
    Timer,
}

impl DateStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "time" => Some(Self::Time),
            "date" => Some(Self::Date),
            "relative" => Some(Self::Relative),
            "offset" => Some(Self::Offset),
            "timer" => Some(Self::Timer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Date => "date",
            Self::Relative => "relative",
            Self::Offset => "offset",
            Self::Timer => "timer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationType {
    ClockSecond,
    ClockMinute,
    ClockHour,
    ClockCustom,
}

impl AnimationType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clockSecond" => Some(Self::ClockSecond),
            "clockMinute" => Some(Self::ClockMinute),
            "clockHour" => Some(Self::ClockHour),
            "clockCustom" => Some(Self::ClockCustom),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClockSecond => "clockSecond",
            Self::ClockMinute => "clockMinute",
            Self::ClockHour => "clockHour",
            Self::ClockCustom => "clockCustom",
        }
    }
}

/// Content scaling for image nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Fit,
    Fill,
}

impl ImageMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "fit" => Some(Self::Fit),
            "fill" => Some(Self::Fill),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_catalogue_round_trips() {
        let names = [
            "link", "text", "image", "hstack", "vstack", "zstack", "hgrid", "vgrid", "spacer",
            "date", "rect", "ellipse", "capsule", "circle", "gauge",
        ];
        for name in names {
            let kind = NodeKind::from_name(name).unwrap();
            assert_eq!(kind.as_str(), name);
        }
        assert_eq!(NodeKind::from_name("guage"), None);
        assert_eq!(NodeKind::from_name("Text"), None);
    }

    #[test]
    fn alignment_names_are_camel_case() {
        assert_eq!(Alignment::from_name("topLeading"), Some(Alignment::TopLeading));
        assert_eq!(Alignment::TopLeading.as_str(), "topLeading");
        assert_eq!(Alignment::from_name("topleading"), None);
    }

    #[test]
    fn named_date_accepts_spaced_keyword() {
        assert_eq!(NamedDate::from_name("start of today"), Some(NamedDate::StartOfToday));
    }
}
