use crate::interactive::constants::EXIT_PROMPT;
use crate::interactive::ui::commands::{Command, PageStep};
use crate::interactive::ui::events::Message;
use crate::view::Message as ViewMessage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Filters,
    Help,
}

/// Which pane receives keys in [`Mode::Browse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
    Content,
}

/// Terminal-only state. Everything about the page itself lives in
/// [`DocView`](crate::view::DocView).
pub struct AppState {
    pub mode: Mode,
    pub mode_before_help: Option<Mode>,
    pub focus: Focus,
    pub nav_open: bool,
    pub message: Option<String>,
    pub print_requested: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            mode: Mode::Browse,
            mode_before_help: None,
            focus: Focus::Search,
            nav_open: true,
            message: None,
            print_requested: false,
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::View(view_msg) => {
                match &view_msg {
                    ViewMessage::ViewResult(_) => self.focus = Focus::Content,
                    ViewMessage::Reset => {
                        self.mode = Mode::Browse;
                        self.message = Some("View reset".to_string());
                    }
                    _ => {}
                }
                Command::Dispatch(view_msg)
            }
            Message::FocusSearch => {
                self.focus = Focus::Search;
                Command::None
            }
            Message::FocusResults => {
                self.focus = Focus::Results;
                Command::None
            }
            Message::FocusContent => {
                self.focus = Focus::Content;
                Command::None
            }
            Message::CycleFocus { results_visible } => {
                self.focus = match self.focus {
                    Focus::Search if results_visible => Focus::Results,
                    Focus::Search | Focus::Results => Focus::Content,
                    Focus::Content => Focus::Search,
                };
                Command::None
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.mode_before_help = Some(self.mode);
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                self.mode = self.mode_before_help.take().unwrap_or(Mode::Browse);
                Command::None
            }
            Message::OpenFilters => {
                self.mode = Mode::Filters;
                Command::None
            }
            Message::CloseFilters => {
                self.mode = Mode::Browse;
                Command::None
            }
            Message::ToggleNavigation => {
                self.nav_open = !self.nav_open;
                Command::None
            }
            Message::NextPage => Command::ChangePage(PageStep::Next),
            Message::PreviousPage => Command::ChangePage(PageStep::Previous),
            Message::SortColumn(column) => Command::SortColumn(column),
            Message::Print => {
                self.print_requested = true;
                Command::ShowMessage("Printable page will be written on exit".to_string())
            }
            Message::ExitRequested => {
                self.message = Some(EXIT_PROMPT.to_string());
                Command::None
            }
            Message::ClearMessage => {
                self.message = None;
                Command::None
            }
            Message::Quit => Command::Quit,
        }
    }

    pub fn is_exit_prompt(&self) -> bool {
        self.message.as_deref() == Some(EXIT_PROMPT)
    }
}
