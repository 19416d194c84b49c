pub mod config;
pub mod document;
pub mod formatters;
pub mod interactive;
pub mod logging;
pub mod query;
pub mod view;

pub use config::Settings;
pub use document::{Document, discover_pages, expand_tilde, load_page};
pub use formatters::{format_search_result, printable, render_document, results_summary};
pub use interactive::InteractiveView;
pub use query::{FilterCategory, SearchResult, SortOrder, search};
pub use view::{ContentArea, DocView, DocumentView, Message, ViewState};
