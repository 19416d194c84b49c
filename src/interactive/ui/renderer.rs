use crate::interactive::constants::{
    NO_RESULTS_HEIGHT, OUTLINE_PERCENT, SEARCH_BAR_HEIGHT, STATUS_BAR_HEIGHT,
};
use crate::interactive::ui::app_state::{AppState, Focus, Mode};
use crate::interactive::ui::components::{
    Component,
    document_pane::DocumentPane,
    filter_panel::{FilterPanel, filter_options},
    help_dialog::HelpDialog,
    outline::Outline,
    result_list::ResultList,
    search_bar::SearchBar,
    status_bar::StatusBar,
    styles::Styles,
};
use crate::view::{ContentArea, DocView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

#[derive(Default)]
pub struct Renderer {
    search_bar: SearchBar,
    result_list: ResultList,
    document_pane: DocumentPane,
    outline: Outline,
    status_bar: StatusBar,
    filter_panel: FilterPanel,
    help_dialog: HelpDialog,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState, view: &DocView) {
        let snapshot = view.view();
        let document = view.document();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        self.search_bar.sync_query(&view.state().search_query);
        self.search_bar.set_pending(view.is_search_pending());
        self.search_bar
            .set_focused(state.mode == Mode::Browse && state.focus == Focus::Search);
        self.search_bar.set_message(None);
        self.search_bar.render(f, chunks[0]);

        self.outline.set_document(document);
        let content_area = if state.nav_open && !self.outline.is_empty() {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(OUTLINE_PERCENT),
                    Constraint::Min(0),
                ])
                .split(chunks[1]);
            self.outline.render(f, columns[0]);
            columns[1]
        } else {
            chunks[1]
        };

        self.document_pane.set_content(document, &snapshot);
        self.document_pane
            .set_focused(state.mode == Mode::Browse && state.focus == Focus::Content);
        // a query replaces the page with its results until one is viewed
        let content_focused = state.focus == Focus::Content;
        match &snapshot.content {
            ContentArea::Document => self.document_pane.render(f, content_area),
            _ if content_focused => self.document_pane.render(f, content_area),
            ContentArea::Results { results } => {
                self.result_list.set_results(results);
                self.result_list
                    .set_focused(state.mode == Mode::Browse && state.focus == Focus::Results);
                self.result_list.render(f, content_area);
            }
            ContentArea::NoResults { query } => {
                let rows = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(NO_RESULTS_HEIGHT), Constraint::Min(0)])
                    .split(content_area);
                render_no_results(f, rows[0], query);
            }
        }

        self.status_bar.set_view(&snapshot);
        self.status_bar.set_message(state.message.clone());
        self.status_bar.render(f, chunks[2]);

        match state.mode {
            Mode::Browse => {}
            Mode::Filters => self.render_filters(f, view),
            Mode::Help => {
                if state.mode_before_help == Some(Mode::Filters) {
                    self.render_filters(f, view);
                }
                self.help_dialog.render(f, f.area());
            }
        }
    }

    fn render_filters(&mut self, f: &mut Frame, view: &DocView) {
        self.filter_panel
            .set_options(filter_options(view.document(), &view.state().filters));
        self.filter_panel.set_count_label(view.view().count_label);
        self.filter_panel.render(f, f.area());
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_document_pane_mut(&mut self) -> &mut DocumentPane {
        &mut self.document_pane
    }

    pub fn get_filter_panel_mut(&mut self) -> &mut FilterPanel {
        &mut self.filter_panel
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}

fn render_no_results(f: &mut Frame, area: Rect, query: &str) {
    let message = Paragraph::new(format!("No results found for \"{query}\""))
        .style(Styles::dimmed())
        .block(Block::default().title("Results").borders(Borders::ALL));
    f.render_widget(message, area);
}
