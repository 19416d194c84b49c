use std::time::{Duration, Instant};

use super::controller::{DocView, ScrollTarget};
use super::events::Message;
use super::reconcile::ContentArea;
use crate::config::Settings;
use crate::document::Document;
use crate::query::filter::FilterCategory;
use crate::query::sort::SortOrder;

const REPORT: &str = r#"
<html>
<head><title>Oracle HCM Analysis Report</title></head>
<body>
  <nav><a href="index.html">Overview</a><a href="pages.html"></a></nav>
  <input type="search" id="search-input">
  <main id="main-content">
    <h1>HCM Pages</h1>
    <p>see payroll for details</p>
    <table>
      <thead><tr><th>Page Name</th><th>Performance</th><th>Complexity</th></tr></thead>
      <tbody>
        <tr class="filterable" data-complexity="high"><td>Payroll Processing Overview</td><td>90</td><td>high</td></tr>
        <tr class="filterable" data-complexity="low"><td>Benefits Enrollment</td><td>60</td><td>low</td></tr>
        <tr class="filterable" data-complexity="high"><td>Absence Plans</td><td>100</td><td>high</td></tr>
      </tbody>
    </table>
    <h2>Features</h2>
    <div class="feature-card filterable" data-priority="5" data-category="payroll" data-complexity="medium" data-business-value="high">
      <h3>Retro Pay</h3>
      <p>Retroactive pay calculations</p>
    </div>
    <div class="feature-card filterable" data-priority="3" data-category="benefits" data-complexity="high" data-business-value="medium">
      <h3>Life Events</h3>
      <p>Life event processing</p>
    </div>
    <input type="checkbox" data-filter="complexity" value="high">
    <input type="checkbox" data-filter="priority" value="5">
    <nav class="pagination"></nav>
    <button></button>
  </main>
</body>
</html>
"#;

fn create_view() -> DocView {
    DocView::new(Document::parse_html(REPORT), Settings::default())
}

fn table_column(view: &DocView, column: usize) -> Vec<String> {
    view.document().tables[0].column_texts(column)
}

#[test]
fn test_ready_state() {
    let view = create_view();
    let snapshot = view.view();

    assert_eq!(snapshot.content, ContentArea::Document);
    assert_eq!(snapshot.total_count, 5);
    assert_eq!(snapshot.visible_count, 5);
    assert_eq!(snapshot.count_label, "5 of 5 shown");
    assert!(snapshot.page_controls.is_empty());
    assert_eq!(view.enhancements().aria_labels, 3);
    assert_eq!(snapshot.skip_links.len(), 3);
}

#[test]
fn test_debounced_search_runs_after_quiet_period() {
    let mut view = create_view();
    let start = Instant::now();

    view.dispatch_at(Message::QueryChanged("pay".to_string()), start);
    view.dispatch_at(
        Message::QueryChanged("payroll".to_string()),
        start + Duration::from_millis(200),
    );
    assert!(view.is_search_pending());
    assert!(!view.tick_at(start + Duration::from_millis(400)));
    assert_eq!(view.results(), None);

    assert!(view.tick_at(start + Duration::from_millis(500)));
    assert!(!view.is_search_pending());

    let results = view.results().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].text, "Payroll Processing Overview");
    assert_eq!(results[1].text, "see payroll for details");
    assert!(matches!(view.view().content, ContentArea::Results { .. }));
}

#[test]
fn test_submit_searches_immediately() {
    let mut view = create_view();

    view.submit_search("no such thing");

    assert_eq!(
        view.view().content,
        ContentArea::NoResults {
            query: "no such thing".to_string()
        }
    );
}

#[test]
fn test_clearing_the_query_restores_content() {
    let mut view = create_view();
    view.submit_search("payroll");
    assert!(matches!(view.view().content, ContentArea::Results { .. }));

    let start = Instant::now();
    view.dispatch_at(Message::QueryChanged(String::new()), start);
    view.tick_at(start + Duration::from_millis(300));

    assert_eq!(view.view().content, ContentArea::Document);
    assert_eq!(view.results(), None);
}

#[test]
fn test_sort_clicks_toggle_direction() {
    let mut view = create_view();

    view.sort("performance");
    assert_eq!(table_column(&view, 1), vec!["100", "60", "90"]);

    view.sort("performance");
    assert_eq!(view.state().sort_order, SortOrder::Desc);
    assert_eq!(table_column(&view, 1), vec!["90", "60", "100"]);

    view.sort("performance");
    assert_eq!(table_column(&view, 1), vec!["100", "60", "90"]);

    view.sort("page");
    assert_eq!(view.state().sort_order, SortOrder::Asc);
    assert_eq!(
        table_column(&view, 0),
        vec![
            "Absence Plans",
            "Benefits Enrollment",
            "Payroll Processing Overview"
        ]
    );
}

#[test]
fn test_numeric_columns_setting() {
    let settings = Settings {
        numeric_columns: vec!["performance".to_string()],
        ..Settings::default()
    };
    let mut view = DocView::new(Document::parse_html(REPORT), settings);

    view.sort("performance");

    assert_eq!(table_column(&view, 1), vec!["60", "90", "100"]);
}

#[test]
fn test_filters_combine_across_categories() {
    let mut view = create_view();

    view.toggle_filter(FilterCategory::Complexity, "high", true);
    assert_eq!(view.view().count_label, "3 of 5 shown");

    view.toggle_filter(FilterCategory::Complexity, "medium", true);
    assert_eq!(view.view().visible_count, 4);

    view.toggle_filter(FilterCategory::Priority, "5", true);
    let visible: Vec<_> = view
        .document()
        .filterables
        .iter()
        .filter(|f| f.visible)
        .map(|f| f.label.as_str())
        .collect();
    assert_eq!(visible, vec!["Retro Pay Retroactive pay calculations"]);
}

#[test]
fn test_checked_controls_apply_on_ready() {
    let page = REPORT.replace(
        r#"data-filter="complexity" value="high">"#,
        r#"data-filter="complexity" value="high" checked>"#,
    );
    let view = DocView::new(Document::parse_html(&page), Settings::default());

    assert!(view.state().filters.is_selected(FilterCategory::Complexity, "high"));
    assert_eq!(view.view().visible_count, 3);
}

#[test]
fn test_view_result_highlights_then_clears() {
    let mut view = create_view();
    view.submit_search("retro");
    let node = view.results().unwrap()[0].node;
    let start = Instant::now();

    view.dispatch_at(Message::ViewResult(node), start);

    assert_eq!(view.document().highlighted, Some(node));
    assert_eq!(view.take_scroll(), Some(ScrollTarget::Node(node)));
    assert_eq!(view.take_scroll(), None);

    assert!(!view.tick_at(start + Duration::from_millis(1999)));
    assert!(view.tick_at(start + Duration::from_millis(2000)));
    assert_eq!(view.document().highlighted, None);
}

#[test]
fn test_pagination_and_reset() {
    let settings = Settings {
        items_per_page: 2,
        ..Settings::default()
    };
    let mut view = DocView::new(Document::parse_html(REPORT), settings);

    assert_eq!(view.view().pagination.map(|p| p.total_pages()), Some(3));
    view.go_to_page(7);
    assert_eq!(view.state().current_page, 3);
    assert_eq!(view.take_scroll(), Some(ScrollTarget::Top));

    view.toggle_filter(FilterCategory::Complexity, "low", true);
    view.submit_search("payroll");
    view.sort("page");

    view.reset();

    let state = view.state();
    assert_eq!(state.search_query, "");
    assert_eq!(state.current_page, 1);
    assert!(state.filters.is_empty());
    assert_eq!(state.sort_by, "page");
    assert_eq!(view.view().content, ContentArea::Document);
    assert!(view.document().filterables.iter().all(|f| f.visible));
    assert!(view.document().nodes.iter().all(|n| !n.hidden));
}

#[test]
fn test_query_change_resets_page() {
    let settings = Settings {
        items_per_page: 1,
        ..Settings::default()
    };
    let mut view = DocView::new(Document::parse_html(REPORT), settings);
    view.go_to_page(4);
    assert_eq!(view.state().current_page, 4);

    view.search("benefits");

    assert_eq!(view.state().current_page, 1);
}
