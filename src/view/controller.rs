use std::time::Instant;
use tracing::{debug, info};

use super::commands::Command;
use super::debounce::Debouncer;
use super::enhance::{EnhanceReport, enhance};
use super::events::Message;
use super::reconcile::{self, DocumentView};
use super::state::ViewState;
use crate::config::Settings;
use crate::document::{Document, NodeId};
use crate::query::filter::FilterCategory;
use crate::query::pagination::Pagination;
use crate::query::search::{SearchResult, search};
use crate::query::sort::ComparisonRules;

/// Where the hosting surface should scroll next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Top,
    Node(NodeId),
}

/// A document together with its interaction state.
///
/// Messages go through [`ViewState::update`]; the returned [`Command`] is
/// executed here against the document.
pub struct DocView {
    document: Document,
    state: ViewState,
    settings: Settings,
    rules: ComparisonRules,
    results: Option<Vec<SearchResult>>,
    search_timer: Debouncer,
    highlight_timer: Debouncer,
    scroll: Option<ScrollTarget>,
    enhancements: EnhanceReport,
}

impl DocView {
    /// Attach to a freshly loaded document: run the enhancement pass and pick
    /// up any filter checkboxes that are already checked.
    pub fn new(mut document: Document, settings: Settings) -> Self {
        let enhancements = enhance(&mut document);
        let mut state = ViewState::new(settings.items_per_page);
        for control in &document.filter_controls {
            if control.checked {
                state.filters.toggle(control.category, &control.value, true);
            }
        }

        let mut view = Self {
            rules: settings.comparison_rules(),
            search_timer: Debouncer::from_millis(settings.search_debounce_ms),
            highlight_timer: Debouncer::from_millis(settings.highlight_ms),
            document,
            state,
            settings,
            results: None,
            scroll: None,
            enhancements,
        };
        if !view.state.filters.is_empty() {
            view.apply_filters();
        }
        view
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn enhancements(&self) -> &EnhanceReport {
        &self.enhancements
    }

    pub fn results(&self) -> Option<&[SearchResult]> {
        self.results.as_deref()
    }

    pub fn is_search_pending(&self) -> bool {
        self.search_timer.is_pending()
    }

    pub fn view(&self) -> DocumentView {
        DocumentView::compute(&self.document, &self.state, self.results())
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.document.filterables.len(),
            self.state.items_per_page,
            self.state.current_page,
        )
    }

    /// Next scroll request, if any. Each request is handed out once.
    pub fn take_scroll(&mut self) -> Option<ScrollTarget> {
        self.scroll.take()
    }

    pub fn dispatch(&mut self, message: Message) {
        self.dispatch_at(message, Instant::now());
    }

    pub fn dispatch_at(&mut self, message: Message, now: Instant) {
        let command = self.state.update(message);
        self.execute(command, now);
    }

    fn execute(&mut self, command: Command, now: Instant) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => {
                self.search_timer.cancel();
                self.run_search();
            }
            Command::ScheduleSearch => {
                self.search_timer.schedule(now);
            }
            Command::ApplySort => {
                reconcile::apply_sort(
                    &mut self.document,
                    &self.state.sort_by,
                    self.state.sort_order,
                    &self.rules,
                );
            }
            Command::ApplyFilters => {
                self.apply_filters();
            }
            Command::ScrollToTop => {
                debug!(page = self.state.current_page, "page selected");
                self.scroll = Some(ScrollTarget::Top);
            }
            Command::ScrollToNode(node) => {
                if reconcile::highlight(&mut self.document, node) {
                    self.scroll = Some(ScrollTarget::Node(node));
                    self.highlight_timer.schedule(now);
                }
            }
            Command::ClearHighlight => {
                self.highlight_timer.cancel();
                reconcile::clear_highlight(&mut self.document);
            }
            Command::ResetView => {
                self.search_timer.cancel();
                self.highlight_timer.cancel();
                self.results = None;
                reconcile::restore(&mut self.document);
                info!("view reset");
            }
        }
    }

    fn run_search(&mut self) {
        if self.state.has_query() {
            let results = search(&self.document, &self.state.search_query);
            info!(
                query = %self.state.search_query,
                results = results.len(),
                "search"
            );
            self.results = Some(results);
        } else {
            self.results = None;
        }
    }

    /// Fire whatever timers are due. Returns true if the view changed.
    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.search_timer.fire_if_due(now) {
            self.dispatch_at(Message::SearchRequested, now);
            changed = true;
        }
        if self.highlight_timer.fire_if_due(now) {
            self.dispatch_at(Message::HighlightExpired, now);
            changed = true;
        }
        changed
    }

    /// Debounced search, as typed into the search input.
    pub fn search(&mut self, query: &str) {
        self.dispatch(Message::QueryChanged(query.to_string()));
    }

    /// Immediate search, as on an explicit submit.
    pub fn submit_search(&mut self, query: &str) {
        self.dispatch(Message::QuerySubmitted(query.to_string()));
    }

    pub fn sort(&mut self, key: &str) {
        self.dispatch(Message::SortRequested(key.to_string()));
    }

    pub fn toggle_filter(&mut self, category: FilterCategory, value: &str, checked: bool) {
        self.dispatch(Message::FilterToggled {
            category,
            value: value.to_string(),
            checked,
        });
    }

    /// Re-run the visibility rule with the current selection.
    pub fn apply_filters(&mut self) -> usize {
        reconcile::apply_filters(&mut self.document, &self.state.filters)
    }

    pub fn go_to_page(&mut self, page: usize) {
        let page = self.pagination().clamp(page);
        self.dispatch(Message::PageSelected(page));
    }

    pub fn view_result(&mut self, node: NodeId) {
        self.dispatch(Message::ViewResult(node));
    }

    pub fn reset(&mut self) {
        self.dispatch(Message::Reset);
    }
}
