use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use super::InteractiveView;
use super::ui::app_state::{Focus, Mode};
use crate::config::Settings;
use crate::document::Document;
use crate::query::filter::FilterCategory;
use crate::query::sort::SortOrder;
use crate::view::{ContentArea, DocView};

const PAGE: &str = r#"
<html>
<head><title>Payroll Pages</title></head>
<body>
  <main>
    <h1>Pages</h1>
    <table>
      <thead><tr><th>Page Name</th><th>Score</th></tr></thead>
      <tbody>
        <tr class="filterable" data-priority="5"><td>Payroll Run</td><td>30</td></tr>
        <tr class="filterable" data-priority="3"><td>Absence Plans</td><td>10</td></tr>
        <tr class="filterable" data-priority="1"><td>Benefits</td><td>20</td></tr>
      </tbody>
    </table>
    <input type="checkbox" data-filter="priority" value="5">
    <nav class="pagination"></nav>
  </main>
</body>
</html>
"#;

fn create_app() -> InteractiveView {
    let settings = Settings {
        items_per_page: 2,
        ..Settings::default()
    };
    InteractiveView::new(DocView::new(Document::parse_html(PAGE), settings))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut InteractiveView, text: &str) {
    for c in text.chars() {
        app.press(key(KeyCode::Char(c)));
    }
}

fn draw(app: &mut InteractiveView) -> String {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| {
            let InteractiveView {
                view,
                state,
                renderer,
                ..
            } = app;
            renderer.render(f, state, view);
        })
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_typing_searches_after_debounce() {
    let mut app = create_app();
    assert_eq!(app.state().focus, Focus::Search);

    type_text(&mut app, "payroll");
    assert!(app.view().is_search_pending());
    assert!(app.view().results().is_none());

    app.tick_at(Instant::now() + Duration::from_secs(1));
    assert!(!app.view().is_search_pending());
    let results = app.view().results().unwrap();
    assert!(!results.is_empty());
    assert!(results[0].text.contains("Payroll"));
}

#[test]
fn test_view_result_moves_focus_and_highlights() {
    let mut app = create_app();
    type_text(&mut app, "absence");
    app.press(key(KeyCode::Enter));
    assert!(matches!(
        app.view().view().content,
        ContentArea::Results { .. }
    ));

    app.press(key(KeyCode::Down));
    assert_eq!(app.state().focus, Focus::Results);

    app.press(key(KeyCode::Enter));
    assert_eq!(app.state().focus, Focus::Content);
    assert!(app.view().document().highlighted.is_some());
}

#[test]
fn test_focus_results_ignored_without_results() {
    let mut app = create_app();
    app.press(key(KeyCode::Down));
    assert_eq!(app.state().focus, Focus::Search);

    app.press(key(KeyCode::Tab));
    assert_eq!(app.state().focus, Focus::Content);
}

#[test]
fn test_digit_sorts_by_column() {
    let mut app = create_app();
    app.press(key(KeyCode::Tab));

    app.press(key(KeyCode::Char('2')));
    assert_eq!(app.view().state().sort_by, "Score");
    assert_eq!(app.view().state().sort_order, SortOrder::Asc);

    app.press(key(KeyCode::Char('2')));
    assert_eq!(app.view().state().sort_order, SortOrder::Desc);
    assert_eq!(
        app.view().document().tables[0].column_texts(1),
        vec!["30", "20", "10"]
    );

    app.press(key(KeyCode::Char('9')));
    assert_eq!(app.state().message.as_deref(), Some("No table has a column 9"));
}

#[test]
fn test_page_keys_stop_at_edges() {
    let mut app = create_app();
    app.press(key(KeyCode::Tab));

    app.press(key(KeyCode::Char('[')));
    assert_eq!(app.view().state().current_page, 1);

    app.press(key(KeyCode::Char(']')));
    assert_eq!(app.view().state().current_page, 2);

    app.press(key(KeyCode::Char(']')));
    assert_eq!(app.view().state().current_page, 2);
}

#[test]
fn test_filter_panel_toggles_selection() {
    let mut app = create_app();
    app.press(key(KeyCode::Tab));
    app.press(key(KeyCode::Char('f')));
    assert_eq!(app.state().mode, Mode::Filters);

    app.press(key(KeyCode::Char(' ')));
    assert!(
        app.view()
            .state()
            .filters
            .is_selected(FilterCategory::Priority, "5")
    );
    assert_eq!(app.view().view().visible_count, 1);

    app.press(key(KeyCode::Esc));
    assert_eq!(app.state().mode, Mode::Browse);

    app.press(key(KeyCode::Char('r')));
    assert!(app.view().state().filters.is_empty());
    assert_eq!(app.view().view().visible_count, 3);
    assert_eq!(app.state().message.as_deref(), Some("View reset"));
}

#[test]
fn test_message_clears_after_delay() {
    let mut app = create_app();
    app.press(key(KeyCode::Tab));
    app.press(key(KeyCode::Char('p')));
    assert!(app.state().print_requested);
    assert!(app.state().message.is_some());

    app.tick_at(Instant::now() + Duration::from_secs(5));
    assert!(app.state().message.is_none());
}

#[test]
fn test_double_ctrl_c_quits() {
    let mut app = create_app();
    app.press(ctrl('c'));
    assert!(!app.should_quit());
    assert!(app.state().is_exit_prompt());

    app.press(ctrl('c'));
    assert!(app.should_quit());
}

#[test]
fn test_help_overlay_round_trip() {
    let mut app = create_app();
    app.press(key(KeyCode::Tab));
    app.press(key(KeyCode::Char('?')));
    assert_eq!(app.state().mode, Mode::Help);
    assert!(draw(&mut app).contains("docview - Interactive Mode"));

    app.press(key(KeyCode::Char('x')));
    assert_eq!(app.state().mode, Mode::Browse);
}

#[test]
fn test_render_shows_page_and_status() {
    let mut app = create_app();
    let screen = draw(&mut app);

    assert!(screen.contains("Payroll Run"));
    assert!(screen.contains("Page 1 of 2"));
    assert!(screen.contains("Navigation"));

    app.press(key(KeyCode::Tab));
    app.press(key(KeyCode::Char('n')));
    assert!(!draw(&mut app).contains("Navigation"));
}

#[test]
fn test_results_replace_document_until_viewed() {
    let mut app = create_app();
    type_text(&mut app, "payroll");
    app.press(key(KeyCode::Enter));

    let screen = draw(&mut app);
    assert!(screen.contains("Results (1)"));
    assert!(screen.contains("Payroll Run"));
    assert!(!screen.contains("Absence Plans"));

    app.press(key(KeyCode::Down));
    app.press(key(KeyCode::Enter));
    assert_eq!(app.state().focus, Focus::Content);
    assert!(draw(&mut app).contains("Absence Plans"));

    app.press(key(KeyCode::Char('/')));
    assert!(!draw(&mut app).contains("Absence Plans"));
}

#[test]
fn test_no_results_hides_document() {
    let mut app = create_app();
    type_text(&mut app, "zzz");
    app.press(key(KeyCode::Enter));

    let screen = draw(&mut app);
    assert!(screen.contains("No results found for \"zzz\""));
    assert!(!screen.contains("Payroll Run"));
}

#[test]
fn test_reset_message_clears_after_delay() {
    let mut app = create_app();
    app.press(key(KeyCode::Tab));
    app.press(key(KeyCode::Char('r')));
    assert_eq!(app.state().message.as_deref(), Some("View reset"));

    app.tick_at(Instant::now() + Duration::from_secs(5));
    assert!(app.state().message.is_none());
}

#[test]
fn test_digit_sorts_exact_header_among_similar() {
    let page = r#"
        <table>
          <thead><tr><th>Performance Score</th><th>Score</th></tr></thead>
          <tbody>
            <tr><td>9</td><td>1</td></tr>
            <tr><td>1</td><td>3</td></tr>
            <tr><td>5</td><td>2</td></tr>
          </tbody>
        </table>
    "#;
    let mut app = InteractiveView::new(DocView::new(
        Document::parse_html(page),
        Settings::default(),
    ));
    app.press(key(KeyCode::Tab));

    app.press(key(KeyCode::Char('2')));
    assert_eq!(app.view().state().sort_by, "Score");
    assert_eq!(
        app.view().document().tables[0].column_texts(1),
        vec!["1", "2", "3"]
    );
    assert_eq!(
        app.view().document().tables[0].column_texts(0),
        vec!["9", "5", "1"]
    );
}
