use booking::{BookingFlow, Step};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
};

use super::{CatalogCards, Hint, Page};
use crate::{
    action::Action,
    components::{Component, ConfirmationCard},
    config::Config,
    tui::EventResponse,
};

const COLUMN_WIDTH: u16 = 60;

pub struct ConfirmationPage {
    card: ConfirmationCard,
    cards: CatalogCards,
}

impl Default for ConfirmationPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmationPage {
    pub fn new() -> Self {
        Self {
            card: ConfirmationCard,
            cards: CatalogCards::default(),
        }
    }
}

impl Page for ConfirmationPage {
    fn step(&self) -> Step {
        Step::Confirmation
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.cards = CatalogCards::new(config.catalog);
        Ok(())
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        _flow: &mut BookingFlow,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(match key.code {
            KeyCode::Enter | KeyCode::Char('q') => Some(EventResponse::Stop(Action::Quit)),
            _ => None,
        })
    }

    fn hints(&self) -> &'static [Hint] {
        &[("Enter/q", "quit")]
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, _flow: &BookingFlow) -> Result<()> {
        let [column] = Layout::horizontal([Constraint::Length(COLUMN_WIDTH)])
            .flex(Flex::Center)
            .areas(area);
        let [card, cards, _] = Layout::vertical([
            self.card.height_constraint(),
            Constraint::Length(self.cards.height()),
            Constraint::Fill(1),
        ])
        .areas(column);
        self.card.draw(frame, card)?;
        self.cards.draw(frame, cards)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::confirmation::{BOOKED, EMAIL_SENT};
    use crate::components::testing::render_to_string;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    #[test]
    fn enter_and_q_quit() {
        let mut flow = BookingFlow::new();
        let mut page = ConfirmationPage::new();
        for code in [KeyCode::Enter, KeyCode::Char('q')] {
            let response = page
                .handle_key_events(KeyEvent::new(code, KeyModifiers::NONE), &mut flow)
                .unwrap();
            assert_eq!(response, Some(EventResponse::Stop(Action::Quit)));
        }
        let other = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(page.handle_key_events(other, &mut flow).unwrap(), None);
    }

    #[test]
    fn renders_success_message_above_the_cards() {
        let flow = BookingFlow::new();
        let mut page = ConfirmationPage::new();
        let out = render_to_string(80, 24, |f| {
            let area = f.area();
            page.draw(f, area, &flow).unwrap()
        });
        assert!(out.contains(BOOKED), "{out}");
        assert!(out.contains(EMAIL_SENT), "{out}");
        assert!(out.contains("Gold Spa"), "{out}");
        assert!(out.contains("Services"), "{out}");
        let booked_row = out.lines().position(|l| l.contains(BOOKED)).unwrap();
        let clinic_row = out.lines().position(|l| l.contains("Gold Spa")).unwrap();
        assert!(booked_row < clinic_row);
    }
}
