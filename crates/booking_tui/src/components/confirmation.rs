use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Component;

pub const BOOKED: &str = "Your appointment has been booked!";
pub const EMAIL_SENT: &str = "A confirmation has been sent to your email address.";

/// Success message shown once the booking is finalized.
pub struct ConfirmationCard;

impl Component for ConfirmationCard {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(7)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let lines = vec![
            Line::raw(""),
            Line::from(Span::styled("✔", Style::default().fg(Color::Green))),
            Line::raw(""),
            Line::from(Span::styled(BOOKED, Style::default().add_modifier(Modifier::BOLD))),
            Line::raw(EMAIL_SENT),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        Ok(())
    }
}
