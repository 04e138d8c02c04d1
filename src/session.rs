//! Interactive session
//!
//! Glue between shell lines, the application state and the config file.

use crate::app::{Action, AppState, Effect};
use crate::config::Config;
use crate::render::{render_form, render_state};
use crate::shell::{parse_line, ShellCommand, HELP};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Result of feeding one line to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// Text to print, possibly empty
    Output(String),
    Quit,
}

pub struct Session {
    state: AppState,
    config: Config,
    config_path: PathBuf,
}

impl Session {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        let state = AppState::new(config.theme, config.suggest_cutoff);
        Self {
            state,
            config,
            config_path,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn prompt(&self) -> &str {
        &self.config.prompt
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        let command = match parse_line(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Step::Output(String::new()),
            Err(e) => return Step::Output(e.to_string()),
        };

        match command {
            ShellCommand::Quit => Step::Quit,
            ShellCommand::Help => Step::Output(HELP.to_string()),
            ShellCommand::List => Step::Output(render_state(&self.state)),
            ShellCommand::ShowForm => {
                Step::Output(render_form(self.state.form(), self.state.editing()))
            }
            ShellCommand::Apply(actions) => {
                let saving = actions.contains(&Action::Save);
                let mut notices = Vec::new();
                for action in actions {
                    match self.state.update(action) {
                        Effect::None => {}
                        Effect::Notice(msg) => notices.push(msg),
                        Effect::PersistTheme(theme) => {
                            self.config.theme = theme;
                            match self.config.save_to(&self.config_path) {
                                Ok(()) => notices.push(format!("Theme: {}", theme)),
                                Err(e) => {
                                    warn!("⚠️ Could not persist theme: {}", e);
                                    notices.push(format!("Theme: {} (not saved: {})", theme, e));
                                }
                            }
                        }
                    }
                }
                debug!("📋 {} visible record(s)", self.state.visible().len());

                if saving && !self.state.form().errors.is_empty() {
                    notices.push(render_form(self.state.form(), self.state.editing()));
                }
                Step::Output(notices.join("\n"))
            }
        }
    }
}
