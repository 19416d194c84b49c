use regex::Regex;
use scraper::{ElementRef, Html};
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

use super::model::{
    Document, FilterControl, Filterable, Node, NodeKind, Table, TableCell, TableRow,
};
use crate::query::filter::{FilterCategory, FilterValues};

static WHITESPACE: OnceLock<Regex> = OnceLock::new();

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Collapse runs of whitespace and trim, the way text renders on the page.
pub fn normalize_text(raw: &str) -> String {
    whitespace().replace_all(raw, " ").trim().to_string()
}

fn element_text(element: &ElementRef) -> String {
    normalize_text(&element.text().collect::<String>())
}

fn has_class(element: &ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

fn nearest_table<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == "table")
}

fn is_filterable(element: &ElementRef) -> bool {
    has_class(element, "filterable") || element.value().attr("data-filterable").is_some()
}

impl Document {
    /// Build the document model from rendered HTML.
    ///
    /// Parsing never fails: malformed markup is repaired by the HTML parser
    /// and anything unrecognized is simply not part of the model.
    pub fn parse_html(source: &str) -> Document {
        let html = Html::parse_document(source);
        let elements: Vec<ElementRef> = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .collect();

        let mut document = Document::default();
        let mut node_ids = HashMap::new();
        let mut table_anchors = Vec::new();

        for element in &elements {
            let value = element.value();
            let tag = value.name();

            if let Some(kind) = NodeKind::from_tag(tag) {
                let id = document.nodes.len();
                node_ids.insert(element.id(), id);
                document.nodes.push(Node {
                    id,
                    kind,
                    text: element_text(element),
                    html_id: value.attr("id").map(str::to_string),
                    aria_label: value.attr("aria-label").map(str::to_string),
                    title: value.attr("title").map(str::to_string),
                    hidden: false,
                    table: None,
                });
            }

            match tag {
                "title" if document.title.is_none() => {
                    let text = element_text(element);
                    if !text.is_empty() {
                        document.title = Some(text);
                    }
                }
                "input" => collect_input(element, &mut document),
                "table" => table_anchors.push(document.nodes.len()),
                "nav" => document.landmarks.navigation = true,
                "main" if document.landmarks.main_content.is_none() => {
                    document.landmarks.main_content =
                        Some(value.attr("id").unwrap_or("main").to_string());
                }
                _ => {}
            }

            if value.attr("id") == Some("main-content") {
                document.landmarks.main_content = Some("main-content".to_string());
            }
            if has_class(element, "pagination") {
                document.landmarks.pagination = true;
            }
            if has_class(element, "nav") || has_class(element, "sidebar") {
                document.landmarks.navigation = true;
            }
        }

        if document.title.is_none() {
            document.title = document
                .nodes
                .iter()
                .find(|n| n.kind == NodeKind::Heading(1))
                .map(|n| n.text.clone());
        }

        let table_elements = elements.iter().filter(|e| e.value().name() == "table");
        for (table_element, anchor) in table_elements.zip(table_anchors) {
            let index = document.tables.len();
            let mut table = collect_table(table_element, |e| node_ids.get(&e.id()).copied());
            table.anchor = anchor;
            for row in &table.rows {
                for cell in &row.cells {
                    if let Some(node) = cell.node.and_then(|id| document.nodes.get_mut(id)) {
                        node.table = Some(index);
                    }
                }
            }
            document.tables.push(table);
        }

        for element in elements.iter().filter(|e| is_filterable(e)) {
            let mut values = FilterValues::default();
            for category in FilterCategory::ALL {
                if let Some(value) = element.value().attr(category.data_attribute()) {
                    values.set(category, value.trim());
                }
            }
            let nodes: Vec<usize> = element
                .descendants()
                .filter_map(ElementRef::wrap)
                .filter_map(|e| node_ids.get(&e.id()).copied())
                .collect();
            document.filterables.push(Filterable {
                label: element_text(element),
                values,
                visible: true,
                nodes,
            });
        }

        debug!(
            nodes = document.nodes.len(),
            tables = document.tables.len(),
            filterables = document.filterables.len(),
            controls = document.filter_controls.len(),
            "parsed document"
        );
        document
    }
}

fn collect_input(element: &ElementRef, document: &mut Document) {
    let value = element.value();
    let input_type = value.attr("type").unwrap_or("text");
    let id = value.attr("id").unwrap_or("");

    if input_type == "search" || id == "search-input" || id == "search-box" {
        document.landmarks.search_input = true;
    }

    if input_type != "checkbox" {
        return;
    }
    let Some(category) = value
        .attr("data-filter")
        .and_then(|c| c.parse::<FilterCategory>().ok())
    else {
        return;
    };
    let Some(filter_value) = value.attr("value") else {
        return;
    };
    document.filter_controls.push(FilterControl {
        category,
        value: filter_value.trim().to_string(),
        checked: value.attr("checked").is_some(),
    });
}

fn row_cells<'a>(row: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .filter(|c| matches!(c.value().name(), "td" | "th"))
        .collect()
}

fn collect_table<F>(table: &ElementRef, lookup: F) -> Table
where
    F: Fn(&ElementRef) -> Option<usize>,
{
    // rows of nested tables belong to those tables
    let rows: Vec<ElementRef> = table
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "tr")
        .filter(|tr| nearest_table(tr).is_some_and(|t| t.id() == table.id()))
        .collect();

    let headers: Vec<String> = rows
        .iter()
        .map(row_cells)
        .find(|cells| cells.iter().any(|c| c.value().name() == "th"))
        .map(|cells| cells.iter().map(element_text).collect())
        .unwrap_or_default();

    let body: Vec<TableRow> = rows
        .iter()
        .filter(|tr| {
            tr.parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|p| p.value().name() == "tbody")
        })
        .map(row_cells)
        .filter(|cells| cells.iter().any(|c| c.value().name() == "td"))
        .map(|cells| TableRow {
            cells: cells
                .iter()
                .map(|c| TableCell {
                    node: lookup(c),
                    text: element_text(c),
                })
                .collect(),
        })
        .collect();

    Table {
        headers,
        rows: body,
        anchor: 0,
    }
}
