use crate::view::Message as ViewMessage;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageStep {
    Previous,
    Next,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    Dispatch(ViewMessage),
    ChangePage(PageStep),
    SortColumn(usize),
    ShowMessage(String),
    Quit,
}
