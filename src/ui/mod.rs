//! UI module for rendering the lead capture client
//!
//! Rendering is a pure projection of the controller snapshot; nothing in
//! here mutates state.

mod form;
mod success;
mod widgets;

use crate::app::App;
use crate::state::SubmissionStatus;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.controller.snapshot();

    match snapshot.status {
        SubmissionStatus::Success => success::draw(frame, &snapshot),
        _ => form::draw(frame, &snapshot),
    }
}
