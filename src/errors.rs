//! Error types for the list view module

use thiserror::Error;

/// Errors surfaced at the list view's fallible seams
#[derive(Error, Debug)]
pub enum ListViewError {
    /// An API call arrived before the host loaded a view
    #[error("no list view is loaded")]
    ViewNotLoaded,

    /// A toolbar click named an action that was never registered
    #[error("unknown toolbar action: {0}")]
    UnknownAction(String),
}
