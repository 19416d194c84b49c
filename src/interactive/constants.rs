//! Layout and timing values for the terminal UI.

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// Layout
pub const SEARCH_BAR_HEIGHT: u16 = 3;
pub const STATUS_BAR_HEIGHT: u16 = 2;
pub const NO_RESULTS_HEIGHT: u16 = 3;

/// Share of the screen given to the navigation outline
pub const OUTLINE_PERCENT: u16 = 25;

/// Lines moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Lines kept above a node scrolled into view
pub const SCROLL_CONTEXT_LINES: usize = 1;

// Dialogs
pub const HELP_DIALOG_MAX_WIDTH: u16 = 72;
pub const FILTER_PANEL_MAX_WIDTH: u16 = 56;
pub const DIALOG_MARGIN: u16 = 4;
