//! Render dispatch boundary and external collaborators
//!
//! The core never paints anything. A validated tree is handed to a
//! [`RenderHost`] exactly once, synchronously, with no retries and no
//! buffering. Hosts and environment sources are injected rather than
//! reached for as process-wide singletons, so the core is testable without
//! a live rendering host.

use crate::builder::WidgetNode;
use crate::error::StyleError;
use crate::schema::check_shape;

/// The external native rendering host.
pub trait RenderHost {
    /// Paint a tree that has passed full validation. Side effects live
    /// entirely on the host's side.
    fn render(&mut self, root: &WidgetNode);
}

/// Enumerated environment queries the host environment answers with raw
/// strings; callers parse the answers with the scalar grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvAction {
    WidgetSize,
    WidgetParam,
}

impl EnvAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WidgetSize => "widget-size",
            Self::WidgetParam => "widget-param",
        }
    }
}

/// Source of environment values (widget size, launch parameter).
pub trait EnvSource {
    fn getenv(&self, action: EnvAction) -> String;
}

/// Hand a validated root node to the rendering host.
///
/// The root's own shape is re-checked first, so a tree constructed by some
/// path that bypassed the builder is still refused; a partial or malformed
/// tree never crosses the boundary.
pub fn dispatch(root: &WidgetNode, host: &mut dyn RenderHost) -> Result<(), Vec<StyleError>> {
    let present = root.present_fields();
    let violations = check_shape(root.kind, &present, root.children.len());
    if !violations.is_empty() {
        log::warn!(
            "refusing to dispatch <{}>: {} shape violations",
            root.kind.as_str(),
            violations.len()
        );
        return Err(violations
            .into_iter()
            .map(|v| StyleError::schema(root.kind.as_str(), v))
            .collect());
    }
    host.render(root);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build, Description};
    use serde_json::json;

    #[derive(Default)]
    struct RecordingHost {
        rendered: Vec<String>,
    }

    impl RenderHost for RecordingHost {
        fn render(&mut self, root: &WidgetNode) {
            self.rendered.push(root.kind.as_str().to_string());
        }
    }

    fn built(value: serde_json::Value) -> WidgetNode {
        let desc: Description = serde_json::from_value(value).unwrap();
        build(&desc).unwrap()
    }

    #[test]
    fn dispatches_a_valid_tree_exactly_once() {
        let root = built(json!({
            "kind": "zstack",
            "children": [{"kind": "ellipse"}]
        }));
        let mut host = RecordingHost::default();
        dispatch(&root, &mut host).unwrap();
        assert_eq!(host.rendered, vec!["zstack"]);
    }

    #[test]
    fn refuses_a_hand_built_tree_that_skipped_validation() {
        // A rect without its required corner, assembled without the builder.
        let root = WidgetNode {
            kind: crate::types::NodeKind::Rect,
            attrs: Default::default(),
            children: Vec::new(),
        };
        let mut host = RecordingHost::default();
        let errors = dispatch(&root, &mut host).unwrap_err();
        assert!(!errors.is_empty());
        assert!(host.rendered.is_empty());
    }

    #[test]
    fn env_actions_use_wire_names() {
        assert_eq!(EnvAction::WidgetSize.as_str(), "widget-size");
        assert_eq!(EnvAction::WidgetParam.as_str(), "widget-param");
    }
}
