use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::formatters::page::printable;
use crate::view::{ContentArea, DocView, Debouncer, Message as ViewMessage};

pub mod constants;
pub mod ui;

#[cfg(test)]
mod integration_tests;

use self::constants::{DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, MESSAGE_CLEAR_DELAY_MS};
use self::ui::{
    app_state::{AppState, Focus, Mode},
    commands::{Command, PageStep},
    components::{Component, filter_panel::filter_options},
    events::Message,
    renderer::Renderer,
};

/// Full-screen terminal front end for a [`DocView`].
pub struct InteractiveView {
    view: DocView,
    state: AppState,
    renderer: Renderer,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Debouncer,
    should_quit: bool,
}

impl InteractiveView {
    pub fn new(view: DocView) -> Self {
        Self {
            view,
            state: AppState::new(),
            renderer: Renderer::new(),
            last_ctrl_c_press: None,
            message_timer: Debouncer::from_millis(MESSAGE_CLEAR_DELAY_MS),
            should_quit: false,
        }
    }

    /// Run until the user quits. Returns the printable page if one was
    /// requested, for the caller to write once the terminal is restored.
    pub fn run(mut self) -> Result<Option<String>> {
        let mut terminal = self.setup_terminal()?;
        let result = self.run_app(&mut terminal);
        self.cleanup_terminal(&mut terminal)?;
        result?;

        Ok(self
            .state
            .print_requested
            .then(|| printable(self.view.document(), &self.view.view())))
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                self.renderer.render(f, &self.state, &self.view);
            })?;

            self.tick(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_input(key);
                    }
                }
            }
            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Fire due timers: the debounced search, the highlight clear and the
    /// status message clear.
    fn tick(&mut self, now: Instant) {
        if self.view.tick_at(now) {
            self.sync_results();
            self.sync_scroll();
        }
        if self.message_timer.fire_if_due(now) {
            self.handle_message(Message::ClearMessage);
        }
    }

    fn results_visible(&self) -> bool {
        matches!(self.view.view().content, ContentArea::Results { .. })
    }

    fn handle_input(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    self.handle_message(Message::Quit);
                    return;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::ExitRequested);
            return;
        }

        let message = match self.state.mode {
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
            Mode::Filters => self.renderer.get_filter_panel_mut().handle_key(key),
            Mode::Browse => self.handle_browse_input(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_browse_input(&mut self, key: KeyEvent) -> Option<Message> {
        if key.code == KeyCode::Tab {
            return Some(Message::CycleFocus {
                results_visible: self.results_visible(),
            });
        }
        if key.code == KeyCode::Char('k')
            && key.modifiers.contains(KeyModifiers::CONTROL)
            && self.state.focus != Focus::Search
        {
            return Some(Message::FocusSearch);
        }

        match self.state.focus {
            Focus::Search => self.renderer.get_search_bar_mut().handle_key(key),
            Focus::Results => match key.code {
                KeyCode::Char('/') => Some(Message::FocusSearch),
                KeyCode::Char('?') => Some(Message::ShowHelp),
                _ => self.renderer.get_result_list_mut().handle_key(key),
            },
            Focus::Content => self.handle_content_input(key),
        }
    }

    fn handle_content_input(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }
        match key.code {
            KeyCode::Char('/') => Some(Message::FocusSearch),
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Char('f') => Some(Message::OpenFilters),
            KeyCode::Char(']') => Some(Message::NextPage),
            KeyCode::Char('[') => Some(Message::PreviousPage),
            KeyCode::Char('n') => Some(Message::ToggleNavigation),
            KeyCode::Char('r') => Some(Message::View(ViewMessage::Reset)),
            KeyCode::Char('p') => Some(Message::Print),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map(|d| Message::SortColumn(d as usize - 1)),
            _ => self.renderer.get_document_pane_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        if message == Message::FocusResults && !self.results_visible() {
            return;
        }
        let opens_filters = message == Message::OpenFilters;
        let previous_message = self.state.message.clone();
        let command = self.state.update(message);
        if self.state.message.is_some() && self.state.message != previous_message {
            self.message_timer.schedule(Instant::now());
        }
        self.execute_command(command);
        if opens_filters {
            self.refresh_filter_panel();
        }
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Dispatch(msg) => {
                let refresh_filters = matches!(msg, ViewMessage::FilterToggled { .. });
                self.view.dispatch(msg);
                self.sync_results();
                self.sync_scroll();
                if refresh_filters {
                    self.refresh_filter_panel();
                }
            }
            Command::ChangePage(step) => {
                let pagination = self.view.pagination();
                let current = pagination.clamp(self.view.state().current_page);
                let target = match step {
                    PageStep::Next if current < pagination.total_pages() => current + 1,
                    PageStep::Previous if current > 1 => current - 1,
                    _ => return,
                };
                self.view.go_to_page(target);
                self.sync_scroll();
            }
            Command::SortColumn(column) => {
                let header = self
                    .view
                    .document()
                    .tables
                    .iter()
                    .find_map(|t| t.headers.get(column))
                    .cloned();
                match header {
                    Some(header) => self.execute_command(Command::Dispatch(
                        ViewMessage::SortRequested(header),
                    )),
                    None => self.execute_command(Command::ShowMessage(format!(
                        "No table has a column {}",
                        column + 1
                    ))),
                }
            }
            Command::ShowMessage(msg) => {
                self.state.message = Some(msg);
                self.message_timer.schedule(Instant::now());
            }
            Command::Quit => {
                debug!("quit requested");
                self.should_quit = true;
            }
        }
    }

    fn sync_results(&mut self) {
        if let Some(results) = self.view.results() {
            self.renderer.get_result_list_mut().set_results(results);
        }
    }

    fn sync_scroll(&mut self) {
        if let Some(target) = self.view.take_scroll() {
            self.renderer.get_document_pane_mut().scroll_to(target);
        }
    }

    fn refresh_filter_panel(&mut self) {
        let options = filter_options(self.view.document(), &self.view.state().filters);
        self.renderer.get_filter_panel_mut().set_options(options);
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> &DocView {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    #[cfg(test)]
    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    #[cfg(test)]
    pub(crate) fn press(&mut self, key: KeyEvent) {
        self.handle_input(key);
    }

    #[cfg(test)]
    pub(crate) fn tick_at(&mut self, now: Instant) {
        self.tick(now);
    }
}
