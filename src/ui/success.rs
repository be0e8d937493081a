//! Success view shown after a recorded submission

use super::widgets::centered_rect;
use crate::controller::ControllerSnapshot;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, snapshot: &ControllerSnapshot) {
    let area = centered_rect(frame.area(), 44, 9);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Checkmark
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Waitlist position
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let check = Paragraph::new("✓")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(check, chunks[0]);

    let heading = Paragraph::new("Thank you!")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(heading, chunks[1]);

    let position = Paragraph::new(format!("You're #{} on our waitlist", snapshot.lead_count))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(position, chunks[3]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit another  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}
