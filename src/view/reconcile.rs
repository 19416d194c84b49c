//! Applies a computed view back onto the [`Document`].
//!
//! Everything here writes to the document; the decisions themselves come from
//! the pure functions in [`crate::query`].

use serde::Serialize;
use tracing::debug;

use crate::document::{Document, NodeId, SkipLink};
use crate::query::filter::{FilterSelection, visible_count_label};
use crate::query::pagination::{PageControl, Pagination};
use crate::query::search::SearchResult;
use crate::query::sort::{ComparisonRules, SortOrder, resolve_column, sorted_order};

use super::state::ViewState;

/// Which content area is showing.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ContentArea {
    /// No query: the normal document content.
    Document,
    Results { results: Vec<SearchResult> },
    NoResults { query: String },
}

impl ContentArea {
    pub fn from_search(query: &str, results: Option<&[SearchResult]>) -> Self {
        match results {
            _ if query.trim().is_empty() => ContentArea::Document,
            None => ContentArea::Document,
            Some([]) => ContentArea::NoResults {
                query: query.trim().to_string(),
            },
            Some(results) => ContentArea::Results {
                results: results.to_vec(),
            },
        }
    }
}

/// Snapshot of what the page shows for a given [`ViewState`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DocumentView {
    pub content: ContentArea,
    pub visible_count: usize,
    pub total_count: usize,
    pub count_label: String,
    /// `None` when the page has no pagination container.
    pub pagination: Option<Pagination>,
    pub page_controls: Vec<PageControl>,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub skip_links: Vec<SkipLink>,
}

impl DocumentView {
    pub fn compute(
        document: &Document,
        state: &ViewState,
        results: Option<&[SearchResult]>,
    ) -> Self {
        let total_count = document.filterables.len();
        let visible_count = document.visible_filterable_count();
        let pagination = document
            .landmarks
            .pagination
            .then(|| Pagination::new(total_count, state.items_per_page, state.current_page));

        Self {
            content: ContentArea::from_search(&state.search_query, results),
            visible_count,
            total_count,
            count_label: visible_count_label(visible_count, total_count),
            page_controls: pagination.map(|p| p.controls()).unwrap_or_default(),
            pagination,
            sort_by: (!state.sort_by.is_empty()).then(|| state.sort_by.clone()),
            sort_order: state.sort_order,
            skip_links: document.skip_links.clone(),
        }
    }
}

/// Reorder the body rows of every table that has a column matching `key`.
///
/// Returns the number of tables that were reordered. Tables without a
/// matching header are left alone.
pub fn apply_sort(
    document: &mut Document,
    key: &str,
    order: SortOrder,
    rules: &ComparisonRules,
) -> usize {
    let mut sorted = 0;
    for table in &mut document.tables {
        let Some(column) = resolve_column(&table.headers, key) else {
            continue;
        };
        let comparison = rules.for_header(&table.headers[column]);
        let permutation = sorted_order(&table.column_texts(column), order, comparison);
        let mut rows: Vec<_> = std::mem::take(&mut table.rows).into_iter().map(Some).collect();
        table.rows = permutation
            .into_iter()
            .filter_map(|i| rows[i].take())
            .collect();
        sorted += 1;
    }
    debug!(key, %order, tables = sorted, "sorted tables");
    sorted
}

/// Show or hide every filterable element, and the nodes inside it.
///
/// Returns the number of visible filterable elements.
pub fn apply_filters(document: &mut Document, selection: &FilterSelection) -> usize {
    for node in &mut document.nodes {
        node.hidden = false;
    }

    let mut hidden_nodes: Vec<NodeId> = Vec::new();
    for filterable in &mut document.filterables {
        filterable.visible = selection.matches(&filterable.values);
        if !filterable.visible {
            hidden_nodes.extend(filterable.nodes.iter().copied());
        }
    }
    for id in hidden_nodes {
        if let Some(node) = document.nodes.get_mut(id) {
            node.hidden = true;
        }
    }

    for control in &mut document.filter_controls {
        control.checked = selection.is_selected(control.category, &control.value);
    }

    let visible = document.visible_filterable_count();
    debug!(
        visible,
        total = document.filterables.len(),
        "applied filters"
    );
    visible
}

/// Make everything visible again and drop any highlight.
pub fn restore(document: &mut Document) {
    for node in &mut document.nodes {
        node.hidden = false;
    }
    for filterable in &mut document.filterables {
        filterable.visible = true;
    }
    for control in &mut document.filter_controls {
        control.checked = false;
    }
    document.highlighted = None;
}

/// Flash a node; ignored when the node does not exist.
pub fn highlight(document: &mut Document, node: NodeId) -> bool {
    if document.node(node).is_some() {
        document.highlighted = Some(node);
        true
    } else {
        false
    }
}

pub fn clear_highlight(document: &mut Document) {
    document.highlighted = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::FilterCategory;
    use crate::query::sort::ComparisonRules;

    const TABLE: &str = r#"
        <table>
          <thead><tr><th>Page</th><th>Performance</th></tr></thead>
          <tbody>
            <tr><td>Payroll</td><td>90</td></tr>
            <tr><td>Benefits</td><td>60</td></tr>
            <tr><td>Absence</td><td>100</td></tr>
          </tbody>
        </table>
        <table><thead><tr><th>Owner</th></tr></thead>
          <tbody><tr><td>z</td></tr><tr><td>a</td></tr></tbody></table>
    "#;

    fn column(document: &Document, table: usize, column: usize) -> Vec<String> {
        document.tables[table].column_texts(column)
    }

    #[test]
    fn test_performance_sorts_as_strings() {
        let mut document = Document::parse_html(TABLE);

        let sorted = apply_sort(
            &mut document,
            "performance",
            SortOrder::Asc,
            &ComparisonRules::default(),
        );

        assert_eq!(sorted, 1);
        assert_eq!(column(&document, 0, 1), vec!["100", "60", "90"]);
        assert_eq!(column(&document, 0, 0), vec!["Absence", "Benefits", "Payroll"]);
        assert_eq!(column(&document, 1, 0), vec!["z", "a"]);
    }

    #[test]
    fn test_numeric_column_rule() {
        let mut document = Document::parse_html(TABLE);

        apply_sort(
            &mut document,
            "performance",
            SortOrder::Asc,
            &ComparisonRules::new(["performance"]),
        );

        assert_eq!(column(&document, 0, 1), vec!["60", "90", "100"]);
    }

    #[test]
    fn test_asc_desc_asc_round_trip() {
        let mut document = Document::parse_html(TABLE);
        let rules = ComparisonRules::default();

        apply_sort(&mut document, "page", SortOrder::Asc, &rules);
        let ascending = column(&document, 0, 0);
        apply_sort(&mut document, "page", SortOrder::Desc, &rules);
        assert_eq!(column(&document, 0, 0), vec!["Payroll", "Benefits", "Absence"]);
        apply_sort(&mut document, "page", SortOrder::Asc, &rules);

        assert_eq!(column(&document, 0, 0), ascending);
    }

    #[test]
    fn test_unknown_key_is_a_no_op() {
        let mut document = Document::parse_html(TABLE);
        let before = document.tables.clone();

        let sorted = apply_sort(
            &mut document,
            "budget",
            SortOrder::Asc,
            &ComparisonRules::default(),
        );

        assert_eq!(sorted, 0);
        assert_eq!(document.tables, before);
    }

    const CARDS: &str = r#"
        <div class="filterable" data-complexity="high" data-priority="5"><p>A</p></div>
        <div class="filterable" data-complexity="low" data-priority="5"><p>B</p></div>
        <div class="filterable" data-complexity="high" data-priority="1"><p>C</p></div>
        <div class="filterable"><p>D</p></div>
        <input type="checkbox" data-filter="complexity" value="high">
        <ul class="pagination"></ul>
    "#;

    #[test]
    fn test_complexity_high_hides_the_rest() {
        let mut document = Document::parse_html(CARDS);
        let mut selection = FilterSelection::new();
        selection.toggle(FilterCategory::Complexity, "high", true);

        let visible = apply_filters(&mut document, &selection);

        assert_eq!(visible, 2);
        let shown: Vec<_> = document
            .filterables
            .iter()
            .filter(|f| f.visible)
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(shown, vec!["A", "C"]);

        let hidden: Vec<_> = document
            .nodes
            .iter()
            .filter(|n| n.hidden)
            .map(|n| n.text.as_str())
            .collect();
        assert_eq!(hidden, vec!["B", "D"]);
        assert!(document.filter_controls[0].checked);
    }

    #[test]
    fn test_restore_shows_everything() {
        let mut document = Document::parse_html(CARDS);
        let mut selection = FilterSelection::new();
        selection.toggle(FilterCategory::Priority, "1", true);
        apply_filters(&mut document, &selection);
        highlight(&mut document, 0);

        restore(&mut document);

        assert!(document.filterables.iter().all(|f| f.visible));
        assert!(document.nodes.iter().all(|n| !n.hidden));
        assert_eq!(document.highlighted, None);
    }

    #[test]
    fn test_highlight_missing_node() {
        let mut document = Document::parse_html(CARDS);
        assert!(!highlight(&mut document, 999));
        assert!(highlight(&mut document, 1));
        assert_eq!(document.highlighted, Some(1));
        clear_highlight(&mut document);
        assert_eq!(document.highlighted, None);
    }

    #[test]
    fn test_content_area_states() {
        assert_eq!(ContentArea::from_search("", None), ContentArea::Document);
        assert_eq!(ContentArea::from_search("", Some(&[])), ContentArea::Document);
        assert_eq!(
            ContentArea::from_search(" zzz ", Some(&[])),
            ContentArea::NoResults {
                query: "zzz".to_string()
            }
        );
    }

    #[test]
    fn test_document_view_counts_and_pagination() {
        let document = Document::parse_html(CARDS);
        let state = ViewState::new(2);

        let view = DocumentView::compute(&document, &state, None);

        assert_eq!(view.total_count, 4);
        assert_eq!(view.visible_count, 4);
        assert_eq!(view.count_label, "4 of 4 shown");
        assert_eq!(view.pagination.map(|p| p.total_pages()), Some(2));
        assert_eq!(view.page_controls.len(), 3);
        assert_eq!(view.sort_by, None);

        let without_container = Document::parse_html("<div class=\"filterable\"></div>");
        let view = DocumentView::compute(&without_container, &state, None);
        assert!(view.pagination.is_none());
        assert!(view.page_controls.is_empty());
    }
}
