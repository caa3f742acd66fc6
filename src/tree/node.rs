//! Node classification and child relations.
//!
//! A node describes itself with a `KindSet` rather than a single type, so one
//! node can be, say, both a container and a menu bar. Every kind in the set
//! contributes its child relations to the walk.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// A list view with column headers.
    TabularList,
    /// A column header of a tabular list.
    ColumnHeader,
    /// A menu entry that may open a drop-down of further items.
    MenuItem,
    /// A top-level menu strip.
    MenuBar,
    /// A pop-up menu, either free-standing or attached to a container.
    ContextMenu,
    /// Any control that holds child controls.
    GenericContainer,
    /// A free-text input field. Its text is user data.
    TextInput,
    /// A list/combo selection control. Its text is user data.
    SelectionList,
    /// A plain text-bearing leaf.
    Label,
}

impl NodeKind {
    const ALL: [NodeKind; 9] = [
        NodeKind::TabularList,
        NodeKind::ColumnHeader,
        NodeKind::MenuItem,
        NodeKind::MenuBar,
        NodeKind::ContextMenu,
        NodeKind::GenericContainer,
        NodeKind::TextInput,
        NodeKind::SelectionList,
        NodeKind::Label,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A named edge from a node to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Column headers of a tabular list.
    ColumnHeaders,
    /// Drop-down entries of a menu item.
    DropDownItems,
    /// Top-level entries of a menu bar or context menu.
    Items,
    /// Child controls of a container.
    Controls,
    /// The context menu attached to a container (at most one node).
    AttachedContextMenu,
}

/// The set of kinds a node satisfies: its capability descriptor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<NodeKind>", into = "Vec<NodeKind>")]
pub struct KindSet(u16);

impl KindSet {
    /// A set with no kinds (a leaf with no special handling).
    pub const fn empty() -> Self {
        KindSet(0)
    }

    /// A set holding a single kind.
    pub const fn of(kind: NodeKind) -> Self {
        KindSet(kind.bit())
    }

    /// Add a kind.
    pub const fn with(self, kind: NodeKind) -> Self {
        KindSet(self.0 | kind.bit())
    }

    pub const fn contains(self, kind: NodeKind) -> bool {
        self.0 & kind.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the kinds in declaration order.
    pub fn iter(self) -> impl Iterator<Item = NodeKind> {
        NodeKind::ALL.into_iter().filter(move |kind| self.contains(*kind))
    }

    /// Text of free-text inputs and selection lists is user data and must
    /// never be translated.
    pub const fn is_text_exempt(self) -> bool {
        self.contains(NodeKind::TextInput) || self.contains(NodeKind::SelectionList)
    }

    /// Whether any kind in the set has child relations.
    pub fn has_children(self) -> bool {
        !self.relations().is_empty()
    }

    /// Whether the set carries an attached context-menu edge.
    pub const fn has_attached_menu(self) -> bool {
        self.contains(NodeKind::GenericContainer)
    }

    /// The child relations to follow, in walk order.
    ///
    /// `Items` appears once even when the node is both a menu bar and a
    /// context menu. The attached context menu always comes after the
    /// container's own controls.
    pub fn relations(self) -> Vec<Relation> {
        let mut relations = Vec::new();
        if self.contains(NodeKind::TabularList) {
            relations.push(Relation::ColumnHeaders);
        }
        if self.contains(NodeKind::MenuItem) {
            relations.push(Relation::DropDownItems);
        }
        if self.contains(NodeKind::MenuBar) || self.contains(NodeKind::ContextMenu) {
            relations.push(Relation::Items);
        }
        if self.contains(NodeKind::GenericContainer) {
            relations.push(Relation::Controls);
            relations.push(Relation::AttachedContextMenu);
        }
        relations
    }
}

impl From<NodeKind> for KindSet {
    fn from(kind: NodeKind) -> Self {
        KindSet::of(kind)
    }
}

impl From<Vec<NodeKind>> for KindSet {
    fn from(kinds: Vec<NodeKind>) -> Self {
        kinds.into_iter().collect()
    }
}

impl From<KindSet> for Vec<NodeKind> {
    fn from(set: KindSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<NodeKind> for KindSet {
    fn from_iter<I: IntoIterator<Item = NodeKind>>(iter: I) -> Self {
        iter.into_iter().fold(KindSet::empty(), KindSet::with)
    }
}

impl fmt::Debug for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// A tree element the visitor can walk.
///
/// Implement this for any concrete UI representation. The walker only reads
/// `kinds` and follows `for_each_child`; text access is used by callers such
/// as `TranslationStore::apply_translations`.
pub trait Node {
    /// The node's capability descriptor.
    fn kinds(&self) -> KindSet;

    /// The display text, if this node has one.
    fn text(&self) -> Option<&str>;

    /// Replace the display text. Nodes without a text field ignore this.
    fn set_text(&mut self, text: String);

    /// Call `f` on each child reachable through `relation`, in declared order.
    /// Relations the node does not have yield nothing.
    fn for_each_child(&mut self, relation: Relation, f: &mut dyn FnMut(&mut dyn Node));
}
