use color_eyre::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
};

pub mod clinic_card;
pub mod confirmation;
pub mod services_card;
pub mod step_form;

pub use clinic_card::ClinicCard;
pub use confirmation::ConfirmationCard;
pub use services_card::ServicesCard;
pub use step_form::StepFormView;

/// A self-contained, stateless piece of the screen.
///
/// Components own the data they show and only know how tall they want to be
/// and how to draw themselves into the area they are given.
pub trait Component {
    fn height_constraint(&self) -> Constraint;

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()>;
}
