use crate::document::NodeId;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch,
    ScheduleSearch,
    ApplySort,
    ApplyFilters,
    ScrollToTop,
    ScrollToNode(NodeId),
    ClearHighlight,
    ResetView,
}
