use booking::{BookingFlow, PaymentSchema, Step};
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};

use super::{CatalogCards, FORM_HINTS, Hint, Page, button, draw_panel, split_with_sidebar};
use crate::{action::Action, components::StepFormView, config::Config, tui::EventResponse};

pub const HEADING: &str = "Secure your appointment by card";
pub const CARD_REQUIRED: &str = "A credit or debit card is required to book your appointment.";
pub const ACKNOWLEDGEMENT: &str = "By creating this appointment, you acknowledge you will \
receive automated transactional messages from this merchant.";

pub struct PaymentPage {
    cards: CatalogCards,
    form: StepFormView<PaymentSchema>,
}

impl Default for PaymentPage {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentPage {
    pub fn new() -> Self {
        Self {
            cards: CatalogCards::default(),
            form: StepFormView::new(),
        }
    }
}

impl Page for PaymentPage {
    fn step(&self) -> Step {
        Step::PaymentInformation
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.cards = CatalogCards::new(config.catalog);
        Ok(())
    }

    fn on_enter(&mut self, flow: &BookingFlow) -> Result<()> {
        if let Some(form) = flow.payment_form() {
            self.form.sync_input(form);
        }
        Ok(())
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        flow: &mut BookingFlow,
    ) -> Result<Option<EventResponse<Action>>> {
        Ok(flow
            .payment_form_mut()
            .and_then(|form| self.form.handle_key_events(key, form)))
    }

    fn hints(&self) -> &'static [Hint] {
        FORM_HINTS
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, flow: &BookingFlow) -> Result<()> {
        let (sidebar, panel) = split_with_sidebar(area);
        self.cards.draw(frame, sidebar)?;

        let body = draw_panel(frame, panel, HEADING, Some(CARD_REQUIRED));
        let [fields, submit, note] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(body);
        if let Some(form) = flow.payment_form() {
            self.form.draw(frame, fields, form);
        }
        frame.render_widget(button("Book appointment"), submit);
        frame.render_widget(
            Paragraph::new(ACKNOWLEDGEMENT)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
            note,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::render_to_string;
    use booking::payment::POLICY_NOT_ACCEPTED;
    use booking::{ContactField, PaymentField};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn at_payment() -> BookingFlow {
        let mut flow = BookingFlow::new();
        flow.update_contact_field(ContactField::FullName, "Jane Smith");
        flow.update_contact_field(ContactField::Email, "jane@example.com");
        flow.update_contact_field(ContactField::Phone, "555-123-4567");
        flow.update_contact_field(ContactField::VisitReason, "Consultation");
        flow.submit();
        assert_eq!(flow.step(), Step::PaymentInformation);
        flow
    }

    #[test]
    fn space_on_the_policy_checkbox_reaches_the_flow() {
        let mut flow = at_payment();
        let mut page = PaymentPage::new();
        page.on_enter(&flow).unwrap();
        let back_tab = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        page.handle_key_events(back_tab, &mut flow).unwrap();
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        page.handle_key_events(space, &mut flow).unwrap();
        assert!(flow.payment_form().unwrap().draft().agree_to_cancellation_policy);
    }

    #[test]
    fn renders_heading_fields_button_and_policy_error() {
        let mut flow = at_payment();
        for (field, value) in [
            (PaymentField::CardNumber, "1234 5678 9012 3456"),
            (PaymentField::ExpiryDate, "12/25"),
            (PaymentField::Cvv, "123"),
            (PaymentField::BillingZip, "12345"),
        ] {
            flow.update_payment_field(field, value);
        }
        flow.submit();

        let mut page = PaymentPage::new();
        let out = render_to_string(120, 40, |f| {
            let area = f.area();
            page.draw(f, area, &flow).unwrap()
        });
        assert!(out.contains(HEADING), "{out}");
        assert!(out.contains(CARD_REQUIRED), "{out}");
        assert!(out.contains("Card information"), "{out}");
        assert!(out.contains("1234 5678 9012 3456"), "{out}");
        assert!(out.contains(POLICY_NOT_ACCEPTED), "{out}");
        assert!(out.contains("Book appointment"), "{out}");
        assert!(out.contains("By creating this appointment"), "{out}");
    }
}
