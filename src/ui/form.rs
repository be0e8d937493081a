//! Lead capture form view

use super::widgets::centered_rect;
use crate::controller::ControllerSnapshot;
use crate::state::{FieldValue, FormField, SubmissionStatus};
use crate::validation::{Field, FieldError};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, snapshot: &ControllerSnapshot) {
    let area = centered_rect(frame.area(), 54, 21);

    let block = Block::default()
        .title(" Join Our Waitlist ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Subtitle
            Constraint::Length(3), // Name
            Constraint::Length(1), // Name error
            Constraint::Length(3), // Email
            Constraint::Length(1), // Email error
            Constraint::Length(3), // Industry
            Constraint::Length(1), // Industry error
            Constraint::Length(3), // Submit button
            Constraint::Length(1), // Failure banner
            Constraint::Length(1), // Help text
            Constraint::Length(1), // Privacy footer
        ])
        .margin(1)
        .split(area);

    let subtitle = Paragraph::new("Get early access to our product")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[0]);

    let active = snapshot.form.active_field_index;
    let error_for = |field: Field| snapshot.errors.iter().find(|e| e.field == field);

    draw_field(
        frame,
        chunks[1],
        &snapshot.form.name,
        active == 0,
        error_for(Field::Name).is_some(),
    );
    draw_error_line(frame, chunks[2], error_for(Field::Name));

    draw_field(
        frame,
        chunks[3],
        &snapshot.form.email,
        active == 1,
        error_for(Field::Email).is_some(),
    );
    draw_error_line(frame, chunks[4], error_for(Field::Email));

    draw_field(
        frame,
        chunks[5],
        &snapshot.form.industry,
        active == 2,
        error_for(Field::Industry).is_some(),
    );
    draw_error_line(frame, chunks[6], error_for(Field::Industry));

    draw_submit_button(frame, chunks[7], snapshot.status);

    if snapshot.status == SubmissionStatus::Error {
        let banner = Paragraph::new("Something went wrong. Please try again.")
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(banner, chunks[8]);
    }

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[9]);

    let footer = Paragraph::new("We respect your privacy. Unsubscribe anytime.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[10]);
}

/// Draw a single form field
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, has_error: bool) {
    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = match &field.value {
        FieldValue::Text(_) => {
            let cursor = if is_active { "▌" } else { "" };
            Line::from(vec![
                Span::styled(field.display_value(), value_style),
                Span::styled(cursor, Style::default().fg(Color::Cyan)),
            ])
        }
        FieldValue::Select(selected) => {
            // Active selector shows cycle arrows
            let placeholder = selected.is_none();
            let label_style = if placeholder {
                Style::default().fg(Color::DarkGray)
            } else {
                value_style
            };
            if is_active {
                Line::from(vec![
                    Span::styled("◂ ", Style::default().fg(Color::Cyan)),
                    Span::styled(field.display_value(), label_style),
                    Span::styled(" ▸", Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(Span::styled(field.display_value(), label_style))
            }
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the error message under a field, if any
fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&FieldError>) {
    if let Some(error) = error {
        let message = Paragraph::new(error.message()).style(Style::default().fg(Color::Red));
        frame.render_widget(message, area);
    }
}

fn draw_submit_button(frame: &mut Frame, area: Rect, status: SubmissionStatus) {
    let (label, style) = if status == SubmissionStatus::Submitting {
        (
            "Submitting...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            "Join Waitlist",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let button = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
