//! UI events routed to the controller

/// User actions the controller reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Enter pressed in the search input, or the search button
    Search,
    ApplyFilters,
    ClearFilters,
    /// Detail action on a table row
    ShowDetail(i64),
    /// Explicit modal close
    CloseDetail,
    /// Click on the backdrop outside the modal
    BackdropClick,
    /// Full reload of statistics and transactions
    Reload,
}

/// What happened to the result of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State was updated and re-rendered
    Applied,
    /// A newer operation was issued meanwhile; the result was dropped
    Superseded,
    /// Event arrived before handlers were wired
    Ignored,
}
