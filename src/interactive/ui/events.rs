use crate::view::Message as ViewMessage;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    /// Forwarded to the document view.
    View(ViewMessage),

    // Focus
    FocusSearch,
    FocusResults,
    FocusContent,
    CycleFocus { results_visible: bool },

    // Overlays
    ShowHelp,
    CloseHelp,
    OpenFilters,
    CloseFilters,

    // Page chrome
    ToggleNavigation,
    NextPage,
    PreviousPage,
    SortColumn(usize),
    Print,

    // Status line
    ExitRequested,
    ClearMessage,
    Quit,
}
