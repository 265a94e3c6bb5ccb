//! Weft widget styling compiler
//!
//! A compiler for the compact, text-encoded styling grammar used by
//! declarative widget descriptions, plus the tree builder that turns a
//! component description into a validated, render-ready node graph. The
//! crate guarantees that fonts, colors, gradients, frames, padding, grids,
//! dates, animations and clips are well-formed before a tree is handed to
//! the external native rendering host; it never lays out or paints anything
//! itself.
//!
//! # Pipeline
//!
//! 1. **Grammar parsers** - each scalar mini-language (font, color, frame,
//!    padding, ...) parses and re-encodes losslessly ([`grammar`]).
//! 2. **Gradient resolver** - structured gradient records become opaque
//!    `gradient:` tokens that pass through color fields untouched
//!    ([`gradient`]).
//! 3. **Schema registry** - one declarative record per node kind: required
//!    fields, exclusive groups, child policy ([`schema`]).
//! 4. **Tree builder** - normalizes every attribute, applies the schema, and
//!    batches all errors from one pass over the tree ([`builder`]).
//! 5. **Dispatch boundary** - the single synchronous handoff to the
//!    injected rendering host ([`host`]).
//!
//! # Basic usage
//!
//! ```no_run
//! use weft::{build, dispatch, Description, RenderHost, WidgetNode};
//!
//! struct Host;
//! impl RenderHost for Host {
//!     fn render(&mut self, _root: &WidgetNode) { /* native side */ }
//! }
//!
//! let desc: Description = serde_json::from_str(
//!     r#"{"kind": "text", "attrs": {"content": "hi", "font": "body"}}"#,
//! ).unwrap();
//! let tree = build(&desc).expect("validated tree");
//! dispatch(&tree, &mut Host).unwrap();
//! ```

pub mod builder;
pub mod cli;
pub mod error;
pub mod gradient;
pub mod grammar;
pub mod host;
pub mod schema;
pub mod types;

// Re-export the surface most callers need.
pub use builder::{build, AttrValue, Description, WidgetNode};
pub use error::{Result, SchemaViolation, StyleError};
pub use gradient::{resolve_color_prop, resolve_gradient, ColorProp, Gradient, GradientToken};
pub use grammar::{
    parse_animation, parse_clip, parse_color, parse_date, parse_date_style, parse_decimal,
    parse_font, parse_frame, parse_grid_column, parse_number, parse_padding,
};
pub use host::{dispatch, EnvAction, EnvSource, RenderHost};
pub use schema::{check_shape, schema_for, ChildPolicy, Schema};
pub use types::{Alignment, NodeKind};

/// Compiler version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
