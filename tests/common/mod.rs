use rollcall::app::{Action, AppState};
use rollcall::config::Config;
use rollcall::form::Field;
use rollcall::session::Session;
use tempfile::TempDir;

/// A session whose config lives in a throwaway directory
#[allow(dead_code)]
pub struct TestContext {
    pub temp_dir: TempDir,
    pub session: Session,
}

impl TestContext {
    #[allow(dead_code)]
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let session = Session::new(Config::default(), temp_dir.path().join("config.json"));
        Self { temp_dir, session }
    }
}

/// Fill every form field and save
#[allow(dead_code)]
pub fn add_student(state: &mut AppState, roll: &str, name: &str, dept: &str, year: u8, cgpa: f64) {
    state.update(Action::ClearForm);
    state.update(Action::SetField(Field::Roll, roll.to_string()));
    state.update(Action::SetField(Field::Name, name.to_string()));
    state.update(Action::SetField(Field::Dept, dept.to_string()));
    state.update(Action::SetField(Field::Year, year.to_string()));
    state.update(Action::SetField(Field::Cgpa, cgpa.to_string()));
    state.update(Action::Save);
}

/// Rolls currently visible, in display order
#[allow(dead_code)]
pub fn visible_rolls(state: &AppState) -> Vec<String> {
    state.visible().iter().map(|r| r.roll.clone()).collect()
}
