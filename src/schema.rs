//! Attribute schema registry
//!
//! One declarative record per node kind: which fields must be present, which
//! may be, which are mutually exclusive, and how many children the kind
//! accepts. Validation is a pure function of (kind, present fields, child
//! count) against the table; no kind carries special-case code.

use crate::error::SchemaViolation;
use crate::types::NodeKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildPolicy {
    /// Leaf kind: any child is an error.
    None,
    /// At most one child.
    Single,
    /// Any number of children, order preserved.
    Many,
}

/// A set of fields of which at most one may be present. With `required` set,
/// exactly one must be.
#[derive(Debug, Clone, Copy)]
pub struct ExclusiveGroup {
    pub fields: &'static [&'static str],
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
    pub exclusive: &'static [ExclusiveGroup],
    pub children: ChildPolicy,
}

impl Schema {
    fn accepts(&self, field: &str) -> bool {
        self.required.contains(&field)
            || self.optional.contains(&field)
            || self.exclusive.iter().any(|g| g.fields.contains(&field))
    }
}

const LINK: Schema = Schema {
    required: &["url"],
    optional: &["background", "color", "frame", "padding", "animation"],
    exclusive: &[],
    children: ChildPolicy::Single,
};

const TEXT: Schema = Schema {
    required: &[],
    optional: &[
        "content",
        "font",
        "background",
        "color",
        "frame",
        "padding",
        "animation",
    ],
    exclusive: &[],
    children: ChildPolicy::Many,
};

const IMAGE: Schema = Schema {
    required: &[],
    optional: &[
        "corner",
        "clip",
        "mode",
        "ratio",
        "background",
        "color",
        "frame",
        "padding",
        "animation",
    ],
    // The image source capabilities are mutually exclusive and one of them
    // must be chosen.
    exclusive: &[ExclusiveGroup {
        fields: &["id", "systemName", "url"],
        required: true,
    }],
    children: ChildPolicy::None,
};

const STACK: Schema = Schema {
    required: &[],
    optional: &[
        "spacing",
        "background",
        "color",
        "frame",
        "padding",
        "animation",
    ],
    exclusive: &[],
    children: ChildPolicy::Many,
};

const GRID: Schema = Schema {
    required: &["columns"],
    optional: &["background", "color", "frame", "padding", "animation"],
    exclusive: &[],
    children: ChildPolicy::Many,
};

const SPACER: Schema = Schema {
    required: &[],
    optional: &["background", "color", "frame", "padding", "animation"],
    exclusive: &[],
    children: ChildPolicy::None,
};

const DATE: Schema = Schema {
    required: &[],
    optional: &[
        "date",
        "style",
        "font",
        "background",
        "color",
        "frame",
        "padding",
        "animation",
    ],
    exclusive: &[],
    children: ChildPolicy::None,
};

const RECT: Schema = Schema {
    // Unlike image, corner is mandatory here.
    required: &["corner"],
    optional: &["background", "color", "frame", "padding", "animation"],
    exclusive: &[],
    children: ChildPolicy::None,
};

const SHAPE: Schema = Schema {
    required: &[],
    optional: &["background", "color", "frame", "padding", "animation"],
    exclusive: &[],
    children: ChildPolicy::None,
};

const CIRCLE: Schema = Schema {
    required: &[],
    optional: &[
        "trim",
        "rotation",
        "background",
        "color",
        "frame",
        "padding",
        "animation",
    ],
    exclusive: &[],
    children: ChildPolicy::None,
};

// Gauges take no general styling attributes.
const GAUGE: Schema = Schema {
    required: &[],
    optional: &[
        "angle",
        "value",
        "thickness",
        "needleColor",
        "label",
        "labelFont",
        "title",
        "titleFont",
        "sections",
    ],
    exclusive: &[],
    children: ChildPolicy::None,
};

pub fn schema_for(kind: NodeKind) -> &'static Schema {
    match kind {
        NodeKind::Link => &LINK,
        NodeKind::Text => &TEXT,
        NodeKind::Image => &IMAGE,
        NodeKind::HStack | NodeKind::VStack | NodeKind::ZStack => &STACK,
        NodeKind::HGrid | NodeKind::VGrid => &GRID,
        NodeKind::Spacer => &SPACER,
        NodeKind::Date => &DATE,
        NodeKind::Rect => &RECT,
        NodeKind::Ellipse | NodeKind::Capsule => &SHAPE,
        NodeKind::Circle => &CIRCLE,
        NodeKind::Gauge => &GAUGE,
    }
}

/// Validate an attribute bag's shape against a kind's schema. Returns every
/// violation found, not just the first.
pub fn check_shape(kind: NodeKind, present: &[&str], child_count: usize) -> Vec<SchemaViolation> {
    let schema = schema_for(kind);
    let mut violations = Vec::new();

    for field in present {
        if !schema.accepts(*field) {
            violations.push(SchemaViolation::UnknownField(field.to_string()));
        }
    }

    let missing: Vec<String> = schema
        .required
        .iter()
        .filter(|f| !present.contains(*f))
        .map(|f| f.to_string())
        .collect();
    if !missing.is_empty() {
        violations.push(SchemaViolation::Missing(missing));
    }

    for group in schema.exclusive {
        let set: Vec<String> = group
            .fields
            .iter()
            .filter(|f| present.contains(*f))
            .map(|f| f.to_string())
            .collect();
        if set.len() > 1 {
            violations.push(SchemaViolation::Conflicting(set));
        } else if set.is_empty() && group.required {
            violations.push(SchemaViolation::MissingExclusive(
                group.fields.iter().map(|f| f.to_string()).collect(),
            ));
        }
    }

    match schema.children {
        ChildPolicy::None if child_count > 0 => violations.push(SchemaViolation::Children {
            expected: "no",
            found: child_count,
        }),
        ChildPolicy::Single if child_count > 1 => violations.push(SchemaViolation::Children {
            expected: "at most one",
            found: child_count,
        }),
        _ => {}
    }

    violations
}
