use booking::{BookingFlow, Catalog, Step};
use color_eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::{
    action::Action,
    components::{ClinicCard, Component, ServicesCard},
    config::Config,
    tui::EventResponse,
};

mod confirmation;
mod contact;
mod payment;

pub use confirmation::ConfirmationPage;
pub use contact::ContactPage;
pub use payment::PaymentPage;

/// Key hint shown in the footer: (key, what it does).
pub type Hint = (&'static str, &'static str);

/// One screen of the booking flow. Exactly one page is active, the one whose
/// `step()` matches the flow.
pub trait Page {
    fn step(&self) -> Step;

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    /// Called when the flow arrives at this page's step.
    fn on_enter(&mut self, flow: &BookingFlow) -> Result<()> {
        let _ = flow;
        Ok(())
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        flow: &mut BookingFlow,
    ) -> Result<Option<EventResponse<Action>>> {
        let _ = (key, flow);
        Ok(None)
    }

    fn hints(&self) -> &'static [Hint];

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, flow: &BookingFlow) -> Result<()>;
}

/// Every page in flow order.
pub fn all() -> Vec<Box<dyn Page>> {
    vec![
        Box::new(ContactPage::new()),
        Box::new(PaymentPage::new()),
        Box::new(ConfirmationPage::new()),
    ]
}

pub(crate) const FORM_HINTS: &[Hint] = &[
    ("Tab/↓", "next field"),
    ("Shift-Tab/↑", "previous field"),
    ("Space", "toggle"),
    ("Enter", "submit"),
    ("Ctrl-C", "quit"),
];

/// Clinic and services cards, stacked.
pub(crate) struct CatalogCards {
    clinic: ClinicCard,
    services: ServicesCard,
}

impl Default for CatalogCards {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl CatalogCards {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            clinic: ClinicCard::new(catalog.clinic),
            services: ServicesCard::new(catalog.services),
        }
    }

    pub fn height(&self) -> u16 {
        [self.clinic.height_constraint(), self.services.height_constraint()]
            .iter()
            .map(|c| match c {
                Constraint::Length(n) => *n,
                _ => 0,
            })
            .sum()
    }

    pub fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let [clinic, services, _] = Layout::vertical([
            self.clinic.height_constraint(),
            self.services.height_constraint(),
            Constraint::Fill(1),
        ])
        .areas(area);
        self.clinic.draw(f, clinic)?;
        self.services.draw(f, services)?;
        Ok(())
    }
}

/// Cards on the left, the step's panel on the right. Returns the panel area.
pub(crate) fn split_with_sidebar(area: Rect) -> (Rect, Rect) {
    let [sidebar, panel] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Fill(1)]).areas(area);
    (sidebar, panel)
}

/// Bordered panel with a bold heading and optional description. Returns the
/// area left for the body.
pub(crate) fn draw_panel(
    f: &mut Frame<'_>,
    area: Rect,
    heading: &str,
    description: Option<&str>,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![Line::from(Span::styled(
        heading.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    if let Some(description) = description {
        lines.push(Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(Color::Gray),
        )));
    }
    lines.push(Line::raw(""));

    let [head, body] =
        Layout::vertical([Constraint::Length(lines.len() as u16), Constraint::Fill(1)])
            .areas(inner);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), head);
    body
}

/// A right-aligned button label.
pub(crate) fn button(label: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .right_aligned()
}
