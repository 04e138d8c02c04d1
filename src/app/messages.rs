//! Actions for the Rollcall controller
//!
//! Every change to the application state goes through one of these.

use super::state::{FilterKey, Theme};
use crate::form::Field;
use crate::view::{Direction, SortField};

/// Actions that drive the application state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Form
    SetField(Field, String),
    Save,
    ClearForm,

    // Records
    Edit(String),
    Delete(String),

    // Search / filter / sort
    Search(String),
    /// Empty value clears the filter
    SetFilter(FilterKey, String),
    SetSort(SortField, Direction),
    ToggleSort(SortField),
    ResetFilters,

    // Misc
    ToggleTheme,
    RunChecks,
}

/// Side effect requested by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Theme changed and should be written to the config
    PersistTheme(Theme),
    /// Something to tell the user
    Notice(String),
}
