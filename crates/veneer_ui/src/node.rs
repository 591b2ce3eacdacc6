//! Declarative node builders
//!
//! Provides a fluent builder API for describing a page as an immutable tree
//! of [`UiNode`] values. Nodes are built once per request, serialized to the
//! client and never mutated server-side afterwards:
//!
//! ```rust
//! use veneer_ui::prelude::*;
//!
//! let tree = vlayout(vec![
//!     label("Simple form demo").with_sclass("main-title"),
//!     textbox("tbUserId").with_placeholder("User Id").with_width("200px"),
//! ])
//! .with_hflex("min");
//! ```

use serde::{Deserialize, Serialize};

use crate::action::ActionBinding;

/// The node kinds understood by the client renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Stylesheet reference, rendered into the document head.
    Style,
    /// Vertical flex container.
    Vlayout,
    /// Horizontal flex container.
    Hlayout,
    /// Static text.
    Label,
    /// Single-line text input.
    Textbox,
    /// Push button.
    Button,
}

/// Kind-specific node properties.
///
/// All fields are optional; absent properties are omitted from the wire
/// representation entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProps {
    /// Visible text (labels, buttons).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Stylesheet source path (style nodes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Placeholder text (textboxes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// CSS width, e.g. `200px`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Style class name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sclass: Option<String>,
    /// Inline style fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Input type (textboxes), e.g. `password`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    /// Client-side input constraint, e.g. `no empty`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    /// Horizontal flex policy, e.g. `min`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hflex: Option<String>,
    /// Instant mode: edits fire change events per keystroke rather than on blur.
    #[serde(default, skip_serializing_if = "is_false")]
    pub instant: bool,
}

fn is_false(v: &bool) -> bool {
    !*v
}

/// One node of the declarative page tree.
///
/// Immutable by convention: every builder method consumes `self` and returns
/// the updated value, so a finished tree can be shared and re-serialized
/// freely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    /// What the client renders this node as.
    pub kind: NodeKind,
    /// Stable page-unique identifier. Required for nodes that participate in
    /// actions or are targeted by updates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Kind-specific properties.
    #[serde(default, skip_serializing_if = "NodeProps::is_empty")]
    pub props: NodeProps,
    /// Child nodes, in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UiNode>,
    /// Server-side callback bound to a client event on this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionBinding>,
}

impl NodeProps {
    /// True when no property is set.
    pub fn is_empty(&self) -> bool {
        *self == NodeProps::default()
    }
}

impl UiNode {
    /// Create a bare node of the given kind.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            id: None,
            props: NodeProps::default(),
            children: Vec::new(),
            action: None,
        }
    }

    // =========================================================================
    // Identity & children
    // =========================================================================

    /// Set the node id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a child node.
    pub fn child(mut self, child: UiNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the child list.
    pub fn with_children(mut self, children: Vec<UiNode>) -> Self {
        self.children = children;
        self
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Set the visible text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.props.text = Some(text.into());
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.props.placeholder = Some(placeholder.into());
        self
    }

    /// Set the CSS width.
    pub fn with_width(mut self, width: impl Into<String>) -> Self {
        self.props.width = Some(width.into());
        self
    }

    /// Set the style class.
    pub fn with_sclass(mut self, sclass: impl Into<String>) -> Self {
        self.props.sclass = Some(sclass.into());
        self
    }

    /// Set an inline style fragment.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.props.style = Some(style.into());
        self
    }

    /// Set the input type, e.g. `password`.
    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.props.input_type = Some(input_type.into());
        self
    }

    /// Set a client-side constraint, e.g. `no empty`.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.props.constraint = Some(constraint.into());
        self
    }

    /// Set the horizontal flex policy.
    pub fn with_hflex(mut self, hflex: impl Into<String>) -> Self {
        self.props.hflex = Some(hflex.into());
        self
    }

    /// Enable or disable instant change events.
    pub fn with_instant(mut self, instant: bool) -> Self {
        self.props.instant = instant;
        self
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Bind a server-side action to this node.
    pub fn with_action(mut self, action: ActionBinding) -> Self {
        self.action = Some(action);
        self
    }

    /// Visible text, if any.
    pub fn text(&self) -> Option<&str> {
        self.props.text.as_deref()
    }
}

// =============================================================================
// Free constructors
// =============================================================================

/// Stylesheet reference node.
pub fn style_src(src: impl Into<String>) -> UiNode {
    let mut node = UiNode::new(NodeKind::Style);
    node.props.src = Some(src.into());
    node
}

/// Vertical flex container.
pub fn vlayout(children: Vec<UiNode>) -> UiNode {
    UiNode::new(NodeKind::Vlayout).with_children(children)
}

/// Horizontal flex container.
pub fn hlayout(children: Vec<UiNode>) -> UiNode {
    UiNode::new(NodeKind::Hlayout).with_children(children)
}

/// Label with initial text.
pub fn label(text: impl Into<String>) -> UiNode {
    UiNode::new(NodeKind::Label).with_text(text)
}

/// Empty label addressable by id, typically an update target.
pub fn label_with_id(id: impl Into<String>) -> UiNode {
    UiNode::new(NodeKind::Label).with_id(id).with_text("")
}

/// Textbox addressable by id.
pub fn textbox(id: impl Into<String>) -> UiNode {
    UiNode::new(NodeKind::Textbox).with_id(id)
}

/// Button with a caption.
pub fn button(text: impl Into<String>) -> UiNode {
    UiNode::new(NodeKind::Button).with_text(text)
}
