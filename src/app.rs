//! Application wiring and key handling
//!
//! Maps terminal events onto controller operations. All form semantics
//! live in the controller; this layer only decides which operation a key
//! means in the current status.

use crate::config::WaitlistConfig;
use crate::controller::FormController;
use crate::state::SubmissionStatus;
use crate::store::JsonLeadStore;
use crate::submit::HttpSubmitClient;
use crate::validation::Field;
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// The form controller driving the capture flow
    pub controller: FormController<HttpSubmitClient, JsonLeadStore>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = WaitlistConfig::load().unwrap_or_default();
        let client = HttpSubmitClient::from_config(&config);

        let store_path = std::env::var("WAITLIST_STORE_PATH")
            .ok()
            .map(PathBuf::from)
            .or_else(|| config.store_path.clone())
            .or_else(JsonLeadStore::default_path)
            .ok_or_else(|| anyhow!("could not determine a lead store path"))?;
        let store = JsonLeadStore::open(store_path)?;

        Ok(Self {
            controller: FormController::new(client, store),
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            self.quit = true;
            return Ok(());
        }

        match self.controller.status() {
            SubmissionStatus::Success => {
                // Success screen: Enter starts a new entry
                if key.code == KeyCode::Enter {
                    self.controller.reset();
                }
            }
            _ => self.handle_form_key(key).await,
        }

        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        let on_industry = self.controller.form().active_field_kind() == Field::Industry;

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.controller.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.controller.prev_field(),
            KeyCode::Enter => self.controller.submit().await,
            KeyCode::Right if on_industry => self.controller.select_next_industry(),
            KeyCode::Left if on_industry => self.controller.select_prev_industry(),
            KeyCode::Backspace => self.controller.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.push_char(c);
            }
            _ => {}
        }
    }
}
