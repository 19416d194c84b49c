use serde::Serialize;

use crate::query::filter::{FilterCategory, FilterValues};

/// Index of a node inside [`Document::nodes`].
pub type NodeId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum NodeKind {
    Heading(u8),
    Paragraph,
    TableCell,
    ListItem,
    Button,
    Link,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(NodeKind::Heading(1)),
            "h2" => Some(NodeKind::Heading(2)),
            "h3" => Some(NodeKind::Heading(3)),
            "h4" => Some(NodeKind::Heading(4)),
            "h5" => Some(NodeKind::Heading(5)),
            "h6" => Some(NodeKind::Heading(6)),
            "p" => Some(NodeKind::Paragraph),
            "td" => Some(NodeKind::TableCell),
            "li" => Some(NodeKind::ListItem),
            "button" => Some(NodeKind::Button),
            "a" => Some(NodeKind::Link),
            _ => None,
        }
    }

    /// Headings, paragraphs, table cells and list items take part in search.
    pub fn is_searchable(&self) -> bool {
        !matches!(self, NodeKind::Button | NodeKind::Link)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Heading(1) => "h1",
            NodeKind::Heading(2) => "h2",
            NodeKind::Heading(3) => "h3",
            NodeKind::Heading(4) => "h4",
            NodeKind::Heading(5) => "h5",
            NodeKind::Heading(_) => "h6",
            NodeKind::Paragraph => "p",
            NodeKind::TableCell => "td",
            NodeKind::ListItem => "li",
            NodeKind::Button => "button",
            NodeKind::Link => "a",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    pub text: String,
    pub html_id: Option<String>,
    pub aria_label: Option<String>,
    pub title: Option<String>,
    pub hidden: bool,
    /// Set when the node lives inside a table; cells are rendered with their table.
    pub table: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableCell {
    /// `None` for header cells inside the body, which are not searchable.
    pub node: Option<NodeId>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Trimmed text of the cell at `column`, empty when the row is shorter.
    pub fn cell_text(&self, column: usize) -> &str {
        self.cells.get(column).map(|c| c.text.trim()).unwrap_or("")
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    /// Body rows in their current order.
    pub rows: Vec<TableRow>,
    /// Number of nodes that precede the table in the page.
    pub anchor: usize,
}

impl Table {
    pub fn column_texts(&self, column: usize) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.cell_text(column).to_string())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Filterable {
    pub label: String,
    pub values: FilterValues,
    pub visible: bool,
    /// Nodes inside the element; they follow its visibility.
    pub nodes: Vec<NodeId>,
}

impl Filterable {
    pub fn value(&self, category: FilterCategory) -> Option<&str> {
        self.values.get(category)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterControl {
    pub category: FilterCategory,
    pub value: String,
    pub checked: bool,
}

/// Structural targets the interactive features attach to.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Landmarks {
    pub search_input: bool,
    pub navigation: bool,
    pub main_content: Option<String>,
    pub pagination: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkipLink {
    pub target: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Document {
    pub title: Option<String>,
    pub nodes: Vec<Node>,
    pub tables: Vec<Table>,
    pub filterables: Vec<Filterable>,
    pub filter_controls: Vec<FilterControl>,
    pub landmarks: Landmarks,
    pub skip_links: Vec<SkipLink>,
    /// Node currently flashed by a "View" action.
    pub highlighted: Option<NodeId>,
}

impl Document {
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn searchable_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind.is_searchable())
    }

    pub fn visible_filterable_count(&self) -> usize {
        self.filterables.iter().filter(|f| f.visible).count()
    }

    /// Headings in document order, used for the navigation outline.
    pub fn outline(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Heading(_)))
            .collect()
    }
}
