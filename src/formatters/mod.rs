pub mod page;
pub mod result;

pub use page::{Block, DisplayMode, blocks, printable, render_document, table_lines};
pub use result::{format_search_result, results_summary};
