use colored::Colorize;

use crate::document::{Document, Node, NodeId, NodeKind, Table};
use crate::query::pagination::PageControl;
use crate::query::sort::{SortOrder, resolve_column};
use crate::view::DocumentView;

/// Widest a table column is allowed to render.
pub const MAX_COLUMN_WIDTH: usize = 40;

/// How a page is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Everything the reader interacts with: skip links, controls, pager.
    Screen,
    /// Content only, as it would come out of a printer.
    Print,
}

/// One renderable piece of the document, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block<'a> {
    Heading { node: NodeId, level: u8, text: &'a str },
    Paragraph { node: NodeId, text: &'a str },
    ListItem { node: NodeId, text: &'a str },
    Table { index: usize, table: &'a Table },
    Control { node: NodeId, label: &'a str },
}

impl Block<'_> {
    /// Nodes rendered by this block.
    pub fn contains(&self, id: NodeId, document: &Document) -> bool {
        match self {
            Block::Heading { node, .. }
            | Block::Paragraph { node, .. }
            | Block::ListItem { node, .. }
            | Block::Control { node, .. } => *node == id,
            Block::Table { index, .. } => document
                .node(id)
                .is_some_and(|n| n.table == Some(*index)),
        }
    }
}

/// Visible blocks in document order. Each table appears at its own position
/// in the page, whether or not it has body rows.
pub fn blocks(document: &Document, mode: DisplayMode) -> Vec<Block<'_>> {
    let mut out = Vec::new();
    let mut tables = document.tables.iter().enumerate().peekable();

    for node in &document.nodes {
        while let Some((index, table)) = tables.next_if(|(_, t)| t.anchor <= node.id) {
            out.push(Block::Table { index, table });
        }
        if node.table.is_some() {
            continue;
        }
        if node.hidden || (node.text.is_empty() && !is_control(node)) {
            continue;
        }
        match node.kind {
            NodeKind::Heading(level) => out.push(Block::Heading {
                node: node.id,
                level,
                text: &node.text,
            }),
            NodeKind::Paragraph => out.push(Block::Paragraph {
                node: node.id,
                text: &node.text,
            }),
            NodeKind::ListItem => out.push(Block::ListItem {
                node: node.id,
                text: &node.text,
            }),
            NodeKind::Button if mode == DisplayMode::Screen => out.push(Block::Control {
                node: node.id,
                label: node.aria_label.as_deref().unwrap_or(&node.text),
            }),
            // cells outside a table and links are not rendered on their own
            _ => {}
        }
    }

    out.extend(tables.map(|(index, table)| Block::Table { index, table }));
    out
}

fn is_control(node: &Node) -> bool {
    matches!(node.kind, NodeKind::Button | NodeKind::Link)
}

/// Body rows that are not hidden by a filter.
pub fn visible_rows<'a>(
    document: &'a Document,
    table: &'a Table,
) -> impl Iterator<Item = &'a crate::document::TableRow> {
    table.rows.iter().filter(move |row| {
        !row.cells.iter().any(|cell| {
            cell.node
                .and_then(|id| document.node(id))
                .is_some_and(|n| n.hidden)
        })
    })
}

/// Header labels with an arrow on the sorted column.
pub fn header_labels(table: &Table, sort_by: Option<&str>, order: SortOrder) -> Vec<String> {
    let sorted = sort_by.and_then(|key| resolve_column(&table.headers, key));
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| match (sorted == Some(i), order) {
            (true, SortOrder::Asc) => format!("{header} ▲"),
            (true, SortOrder::Desc) => format!("{header} ▼"),
            (false, _) => header.clone(),
        })
        .collect()
}

/// Fixed-width text lines for a table: header, rule, then visible rows.
pub fn table_lines(
    document: &Document,
    table: &Table,
    sort_by: Option<&str>,
    order: SortOrder,
) -> Vec<String> {
    let headers = header_labels(table, sort_by, order);
    let rows: Vec<Vec<&str>> = visible_rows(document, table)
        .map(|row| row.cells.iter().map(|c| c.text.as_str()).collect())
        .collect();

    let columns = rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);
    let mut widths = vec![0; columns];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = widths[i].max(header.chars().count());
    }
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    for width in &mut widths {
        *width = (*width).min(MAX_COLUMN_WIDTH);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    if !headers.is_empty() {
        lines.push(join_cells(headers.iter().map(String::as_str), &widths));
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
    }
    for row in rows {
        lines.push(join_cells(row.into_iter(), &widths));
    }
    lines
}

fn join_cells<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut cells: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| fit(cell, *width))
        .collect();
    while cells.len() < widths.len() {
        cells.push(" ".repeat(widths[cells.len()]));
    }
    cells.join(" | ").trim_end().to_string()
}

fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('…');
        cut
    } else {
        format!("{text}{}", " ".repeat(width - count))
    }
}

/// Pager line: `‹ Previous  1 [2] 3  Next ›`.
pub fn page_controls_line(controls: &[PageControl], current: usize) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::Previous(_) => "‹ Previous".to_string(),
            PageControl::Page(n) if *n == current => format!("[{n}]"),
            PageControl::Page(n) => n.to_string(),
            PageControl::Next(_) => "Next ›".to_string(),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the document as plain or colored text.
pub fn render_document(
    document: &Document,
    view: &DocumentView,
    mode: DisplayMode,
    use_color: bool,
) -> String {
    let mut out = Vec::new();

    if let Some(title) = &document.title {
        out.push(if use_color {
            title.bold().to_string()
        } else {
            title.clone()
        });
        out.push(String::new());
    }

    if mode == DisplayMode::Screen {
        if !view.skip_links.is_empty() {
            let links: Vec<_> = view
                .skip_links
                .iter()
                .map(|l| format!("{} ({})", l.label, l.target))
                .collect();
            out.push(dim(&links.join(" · "), use_color));
        }
        if view.total_count > 0 {
            out.push(dim(&view.count_label, use_color));
        }
        if out.last().is_some_and(|l| !l.is_empty()) {
            out.push(String::new());
        }
    }

    for block in blocks(document, mode) {
        match block {
            Block::Heading { level, text, .. } => {
                let marker = "#".repeat(level as usize);
                let line = format!("{marker} {text}");
                out.push(if use_color {
                    line.bright_cyan().bold().to_string()
                } else {
                    line
                });
            }
            Block::Paragraph { text, .. } => out.push(text.to_string()),
            Block::ListItem { text, .. } => out.push(format!("  - {text}")),
            Block::Table { table, .. } => {
                let lines = table_lines(document, table, view.sort_by.as_deref(), view.sort_order);
                for (i, line) in lines.into_iter().enumerate() {
                    out.push(if use_color && i == 0 && !table.headers.is_empty() {
                        line.yellow().to_string()
                    } else {
                        line
                    });
                }
                out.push(String::new());
            }
            Block::Control { label, .. } => out.push(dim(&format!("[{label}]"), use_color)),
        }
    }

    if mode == DisplayMode::Screen {
        if let Some(pagination) = &view.pagination {
            if !view.page_controls.is_empty() {
                out.push(String::new());
                out.push(page_controls_line(
                    &view.page_controls,
                    pagination.clamp(pagination.current_page),
                ));
            }
        }
    }

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

/// The print rendering: content only, no color.
pub fn printable(document: &Document, view: &DocumentView) -> String {
    render_document(document, view, DisplayMode::Print, false)
}

fn dim(text: &str, use_color: bool) -> String {
    if use_color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}
