use booking::Clinic;
use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Component;

const LABEL_WIDTH: usize = 9;

pub struct ClinicCard {
    clinic: Clinic,
}

impl ClinicCard {
    pub fn new(clinic: Clinic) -> Self {
        Self { clinic }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let address = &self.clinic.address;
        let city_line = address.city_line();
        let row = |label: &'static str, value: String, style: Style| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<LABEL_WIDTH$}"),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(value, style),
            ])
        };
        let plain = Style::default();
        let link = Style::default().fg(Color::Magenta);

        vec![
            Line::from(Span::styled(
                self.clinic.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::raw(""),
            row("Address", address.line1.clone(), plain),
            row("", address.line2.clone(), plain),
            row("", city_line, plain),
            row("Email", self.clinic.email.clone(), link),
            row("Phone", self.clinic.phone.clone(), link),
        ]
    }
}

impl Component for ClinicCard {
    fn height_constraint(&self) -> Constraint {
        // content plus the two border rows
        Constraint::Length(self.lines().len() as u16 + 2)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        f.render_widget(Paragraph::new(self.lines()).block(block), area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::render_to_string;

    #[test]
    fn shows_name_address_and_contacts() {
        let mut card = ClinicCard::new(Clinic::default());
        assert_eq!(card.height_constraint(), Constraint::Length(9));

        let out = render_to_string(48, 9, |f| {
            let area = f.area();
            card.draw(f, area).unwrap()
        });
        assert!(out.contains("Gold Spa"), "{out}");
        assert!(out.contains("Address  2525 Camino del Rio S"), "{out}");
        assert!(out.contains("Suite 315 Room B"), "{out}");
        assert!(out.contains("San Diego, CA 92108"), "{out}");
        assert!(out.contains("Email    goldspa@gmail.com"), "{out}");
        assert!(out.contains("Phone    +11 123 4567 222"), "{out}");
    }
}
