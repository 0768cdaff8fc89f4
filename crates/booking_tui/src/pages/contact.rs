use booking::{BookingFlow, ContactSchema, Step};
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::{CatalogCards, FORM_HINTS, Hint, Page, button, draw_panel, split_with_sidebar};
use crate::{action::Action, components::StepFormView, config::Config, tui::EventResponse};

pub struct ContactPage {
    cards: CatalogCards,
    form: StepFormView<ContactSchema>,
}

impl Default for ContactPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactPage {
    pub fn new() -> Self {
        Self {
            cards: CatalogCards::default(),
            form: StepFormView::new(),
        }
    }
}

impl Page for ContactPage {
    fn step(&self) -> Step {
        Step::ContactInformation
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.cards = CatalogCards::new(config.catalog);
        Ok(())
    }

    fn on_enter(&mut self, flow: &BookingFlow) -> Result<()> {
        if let Some(form) = flow.contact_form() {
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
            .contact_form_mut()
            .and_then(|form| self.form.handle_key_events(key, form)))
    }

    fn hints(&self) -> &'static [Hint] {
        FORM_HINTS
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, flow: &BookingFlow) -> Result<()> {
        let (sidebar, panel) = split_with_sidebar(area);
        self.cards.draw(frame, sidebar)?;

        let body = draw_panel(frame, panel, "Enter your details below", None);
        let [fields, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(body);
        if let Some(form) = flow.contact_form() {
            self.form.draw(frame, fields, form);
        }
        frame.render_widget(button("Continue"), footer);
        Ok(())
    }
}
