//! An owned, serializable UI tree.
//!
//! `Widget` is a ready-made `Node` for callers that do not have their own
//! tree type, and the format the `apply` command reads and writes.

use crate::tree::{KindSet, Node, NodeKind, Relation};
use serde::{Deserialize, Serialize};

/// A UI element with every child relation stored inline.
///
/// Relations a widget's kinds do not expose are ignored by the walker even
/// when populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    pub kinds: KindSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<Widget>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub drop_down: Vec<Widget>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Widget>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub controls: Vec<Widget>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_menu: Option<Box<Widget>>,
}

impl Widget {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kinds: KindSet::of(kind),
            ..Self::default()
        }
    }

    /// A text-bearing leaf.
    pub fn label(text: impl Into<String>) -> Self {
        Self::new(NodeKind::Label).with_text(text)
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kinds = self.kinds.with(kind);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_column(mut self, column: Widget) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_drop_down(mut self, item: Widget) -> Self {
        self.drop_down.push(item);
        self
    }

    pub fn with_item(mut self, item: Widget) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_control(mut self, control: Widget) -> Self {
        self.controls.push(control);
        self
    }

    pub fn with_context_menu(mut self, menu: Widget) -> Self {
        self.context_menu = Some(Box::new(menu));
        self
    }
}

impl Node for Widget {
    fn kinds(&self) -> KindSet {
        self.kinds
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    fn set_text(&mut self, text: String) {
        self.text = Some(text);
    }

    fn for_each_child(&mut self, relation: Relation, f: &mut dyn FnMut(&mut dyn Node)) {
        let children: &mut [Widget] = match relation {
            Relation::ColumnHeaders => &mut self.columns,
            Relation::DropDownItems => &mut self.drop_down,
            Relation::Items => &mut self.items,
            Relation::Controls => &mut self.controls,
            Relation::AttachedContextMenu => match self.context_menu.as_deref_mut() {
                Some(menu) => std::slice::from_mut(menu),
                None => &mut [],
            },
        };

        for child in children {
            f(child);
        }
    }
}
