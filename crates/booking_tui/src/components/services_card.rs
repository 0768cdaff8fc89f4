use booking::Service;
use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Component;

pub struct ServicesCard {
    services: Vec<Service>,
}

impl ServicesCard {
    pub fn new(services: Vec<Service>) -> Self {
        Self { services }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        self.services
            .iter()
            .flat_map(|service| {
                [
                    Line::from(Span::styled(
                        service.name.as_str(),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        service.summary(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ]
            })
            .collect()
    }
}

impl Component for ServicesCard {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(self.services.len() as u16 * 2 + 2)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let block = Block::default()
            .title(Span::styled(
                " Services ",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        f.render_widget(Paragraph::new(self.lines()).block(block), area);
        Ok(())
    }
}
