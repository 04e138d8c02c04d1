//! Application state for Rollcall
//!
//! `AppState` owns the record store together with the form, search, filter,
//! sort and theme state. It only changes through [`AppState::update`].

pub mod messages;
pub mod state;

use tracing::{debug, info, warn};

use crate::checks::run_helper_checks;
use crate::form::StudentForm;
use crate::record::{Department, Record};
use crate::store::RecordStore;
use crate::utils::fuzzy::find_best_match;
use crate::view::{self, Filters, SortConfig};

pub use messages::{Action, Effect};
pub use state::{FilterKey, Theme};

/// Default score a department name needs before it is offered as a suggestion
pub const DEFAULT_SUGGEST_CUTOFF: f64 = 0.5;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// All records
    pub(crate) store: RecordStore,
    /// Form drafts
    pub(crate) form: StudentForm,
    /// Roll of the record being edited, if any
    pub(crate) editing: Option<String>,
    pub(crate) query: String,
    pub(crate) filters: Filters,
    pub(crate) sort: SortConfig,
    pub(crate) theme: Theme,
    /// Last message shown to the user
    pub(crate) message: Option<String>,
    suggest_cutoff: f64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), DEFAULT_SUGGEST_CUTOFF)
    }
}

impl AppState {
    pub fn new(theme: Theme, suggest_cutoff: f64) -> Self {
        Self {
            store: RecordStore::new(),
            form: StudentForm::default(),
            editing: None,
            query: String::new(),
            filters: Filters::default(),
            sort: SortConfig::default(),
            theme,
            message: None,
            suggest_cutoff,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn form(&self) -> &StudentForm {
        &self.form
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn sort(&self) -> SortConfig {
        self.sort
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Records as the table shows them: filtered, then sorted
    pub fn visible(&self) -> Vec<&Record> {
        view::visible(self.store.list_all(), &self.query, &self.filters, self.sort)
    }

    /// Apply one action
    pub fn update(&mut self, action: Action) -> Effect {
        debug!("⚙️ {:?}", action);
        let effect = match action {
            Action::SetField(field, value) => {
                self.form.set(field, &value);
                Effect::None
            }
            Action::Save => {
                if self.save() {
                    Effect::Notice("Student saved".to_string())
                } else {
                    let fields: Vec<String> =
                        self.form.errors.keys().map(|f| f.to_string()).collect();
                    Effect::Notice(format!("Not saved, check: {}", fields.join(", ")))
                }
            }
            Action::ClearForm => {
                self.form.clear();
                self.editing = None;
                Effect::None
            }
            Action::Edit(roll) => match self.store.get(&roll) {
                Some(record) => {
                    self.form.load(record);
                    self.editing = Some(roll.clone());
                    Effect::Notice(format!("Editing {}", roll))
                }
                None => Effect::Notice(format!("No student with roll number '{}'", roll)),
            },
            Action::Delete(roll) => match self.store.remove(&roll) {
                Some(_) => {
                    if self.editing.as_deref() == Some(roll.as_str()) {
                        self.editing = None;
                        self.form.clear();
                    }
                    Effect::Notice(format!("Deleted {}", roll))
                }
                None => Effect::Notice(format!("No student with roll number '{}'", roll)),
            },
            Action::Search(text) => {
                self.query = text;
                Effect::None
            }
            Action::SetFilter(key, value) => self.set_filter(key, value.trim()),
            Action::SetSort(field, direction) => {
                self.sort = SortConfig::by(field, direction);
                Effect::None
            }
            Action::ToggleSort(field) => {
                self.sort = self.sort.toggled(field);
                Effect::None
            }
            Action::ResetFilters => {
                self.query.clear();
                self.filters = Filters::default();
                self.sort = SortConfig::default();
                Effect::None
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                info!("🎨 Theme set to {}", self.theme);
                Effect::PersistTheme(self.theme)
            }
            Action::RunChecks => Effect::Notice(run_helper_checks().summary()),
        };

        if let Effect::Notice(msg) = &effect {
            self.message = Some(msg.clone());
        }
        effect
    }

    /// Validate the form and write it to the store
    ///
    /// On success the form is cleared and edit mode ends. On failure the
    /// drafts stay and the field errors are kept on the form.
    fn save(&mut self) -> bool {
        let editing = self.editing.clone();
        let record = match self.form.validate(self.store.list_all(), editing.as_deref()) {
            Ok(record) => record,
            Err(errors) => {
                warn!("⚠️ Form has {} invalid field(s)", errors.len());
                self.form.errors = errors;
                return false;
            }
        };

        match editing {
            Some(original) => {
                if let Err(e) = self.store.replace(&original, record) {
                    warn!("⚠️ Update failed: {}", e);
                    return false;
                }
            }
            None => self.store.add_or_update(record),
        }

        self.form.clear();
        self.editing = None;
        true
    }

    fn set_filter(&mut self, key: FilterKey, value: &str) -> Effect {
        match key {
            FilterKey::Year => {
                self.filters.year = (!value.is_empty()).then(|| value.to_string());
                Effect::None
            }
            FilterKey::Dept if value.is_empty() => {
                self.filters.dept = None;
                Effect::None
            }
            FilterKey::Dept => match value.parse::<Department>() {
                Ok(dept) => {
                    self.filters.dept = Some(dept);
                    Effect::None
                }
                Err(_) => {
                    let hint = find_best_match(value, &Department::codes(), self.suggest_cutoff)
                        .map(|m| format!(" Did you mean {}?", m.value))
                        .unwrap_or_default();
                    Effect::Notice(format!("Unknown department '{}'.{}", value, hint))
                }
            },
        }
    }
}
