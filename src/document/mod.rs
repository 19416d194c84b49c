//! The page the interaction layer attaches to.

pub mod discovery;
pub mod html;
pub mod model;

pub use discovery::{discover_pages, expand_tilde, load_page};
pub use html::normalize_text;
pub use model::{
    Document, FilterControl, Filterable, Landmarks, Node, NodeId, NodeKind, SkipLink, Table,
    TableCell, TableRow,
};
