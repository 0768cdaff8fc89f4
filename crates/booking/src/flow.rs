//! Booking flow state machine.
//!
//! `BookingFlow` is the single owner of `BookingData`. Exactly one step is
//! active at a time; the contact and payment steps each carry their own
//! `StepForm`, seeded with whatever was stored for that step before.
//!
//! Transitions are driven by validated step completions and reduced the
//! same way every time:
//!
//! ```text
//! ContactInformation --ContactCompleted--> PaymentInformation
//! PaymentInformation --PaymentCompleted--> Confirmation   (+ Effect::Submit)
//! Confirmation       --(anything)-------->  Confirmation   (ignored)
//! ```
//!
//! Completions can only be produced by `submit()` on a valid draft, so a
//! draft never reaches `BookingData`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::{info, warn};

use crate::contact::{ContactData, ContactField, ContactSchema};
use crate::form::{StepForm, Submission};
use crate::payment::{PaymentData, PaymentField, PaymentSchema};
use crate::submission::{SubmissionError, SubmissionHandler};
use crate::validation::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Step {
    ContactInformation,
    PaymentInformation,
    Confirmation,
}

impl Step {
    pub fn next(self) -> Option<Step> {
        match self {
            Step::ContactInformation => Some(Step::PaymentInformation),
            Step::PaymentInformation => Some(Step::Confirmation),
            Step::Confirmation => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Everything collected across the completed steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingData {
    pub contact: ContactData,
    pub payment: PaymentData,
}

/// Validated step completion fed into the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FlowEvent {
    ContactCompleted(ContactData),
    PaymentCompleted(PaymentData),
}

/// Side effect the caller has to carry out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The booking is finalized; hand it to the submission collaborator.
    Submit(BookingData),
}

impl Effect {
    pub fn execute(self, handler: &mut dyn SubmissionHandler) -> Result<(), SubmissionError> {
        match self {
            Effect::Submit(booking) => handler.submit(&booking),
        }
    }
}

/// Stored record for one step, as handed to that step's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRecord<'a> {
    Contact(&'a ContactData),
    Payment(&'a PaymentData),
}

/// The view that is currently active.
pub enum ActiveStep {
    Contact(StepForm<ContactSchema>),
    Payment(StepForm<PaymentSchema>),
    Confirmation,
}

impl ActiveStep {
    pub fn step(&self) -> Step {
        match self {
            ActiveStep::Contact(_) => Step::ContactInformation,
            ActiveStep::Payment(_) => Step::PaymentInformation,
            ActiveStep::Confirmation => Step::Confirmation,
        }
    }
}

pub struct BookingFlow {
    data: BookingData,
    active: ActiveStep,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingFlow {
    pub fn new() -> Self {
        let data = BookingData::default();
        let active = ActiveStep::Contact(StepForm::new(data.contact.clone()));
        Self { data, active }
    }

    /// What the form for `step` starts from: whatever was stored for that
    /// step before. Confirmation has no form.
    pub fn initial_data_for(&self, step: Step) -> Option<StepRecord<'_>> {
        match step {
            Step::ContactInformation => Some(StepRecord::Contact(&self.data.contact)),
            Step::PaymentInformation => Some(StepRecord::Payment(&self.data.payment)),
            Step::Confirmation => None,
        }
    }

    pub fn step(&self) -> Step {
        self.active.step()
    }

    pub fn data(&self) -> &BookingData {
        &self.data
    }

    pub fn active(&self) -> &ActiveStep {
        &self.active
    }

    /// True once the payment step completed; `data()` is final from then on.
    pub fn is_finalized(&self) -> bool {
        self.step().is_terminal()
    }

    pub fn contact_form(&self) -> Option<&StepForm<ContactSchema>> {
        match &self.active {
            ActiveStep::Contact(form) => Some(form),
            _ => None,
        }
    }

    pub fn contact_form_mut(&mut self) -> Option<&mut StepForm<ContactSchema>> {
        match &mut self.active {
            ActiveStep::Contact(form) => Some(form),
            _ => None,
        }
    }

    pub fn payment_form(&self) -> Option<&StepForm<PaymentSchema>> {
        match &self.active {
            ActiveStep::Payment(form) => Some(form),
            _ => None,
        }
    }

    pub fn payment_form_mut(&mut self) -> Option<&mut StepForm<PaymentSchema>> {
        match &mut self.active {
            ActiveStep::Payment(form) => Some(form),
            _ => None,
        }
    }

    /// Edit a contact field. Ignored unless the contact step is active.
    pub fn update_contact_field(&mut self, field: ContactField, value: impl Into<FieldValue>) {
        match self.contact_form_mut() {
            Some(form) => form.update_field(field, value),
            None => warn!(step = %self.step(), field = field.as_ref(), "contact edit ignored"),
        }
    }

    /// Edit a payment field. Ignored unless the payment step is active.
    pub fn update_payment_field(&mut self, field: PaymentField, value: impl Into<FieldValue>) {
        match self.payment_form_mut() {
            Some(form) => form.update_field(field, value),
            None => warn!(step = %self.step(), field = field.as_ref(), "payment edit ignored"),
        }
    }

    /// Submit the active step.
    ///
    /// A rejected form keeps the step where it is (its errors are on the form).
    /// A completed form advances the flow; the returned effects must be executed
    /// by the caller. Submitting on the confirmation screen does nothing.
    pub fn submit(&mut self) -> Vec<Effect> {
        let event = match &mut self.active {
            ActiveStep::Contact(form) => match form.submit() {
                Submission::Completed(contact) => FlowEvent::ContactCompleted(contact),
                Submission::Rejected => return Vec::new(),
            },
            ActiveStep::Payment(form) => match form.submit() {
                Submission::Completed(payment) => FlowEvent::PaymentCompleted(payment),
                Submission::Rejected => return Vec::new(),
            },
            ActiveStep::Confirmation => {
                warn!("submit ignored, booking already finalized");
                return Vec::new();
            }
        };
        self.reduce(event)
    }

    /// Apply one validated completion. Events that do not belong to the
    /// current step are ignored; `BookingData` is only written here.
    fn reduce(&mut self, event: FlowEvent) -> Vec<Effect> {
        match (self.step(), event) {
            (Step::ContactInformation, FlowEvent::ContactCompleted(contact)) => {
                self.data.contact = contact;
                let seed = self.data.payment.clone();
                self.active = ActiveStep::Payment(StepForm::new(seed));
                info!(step = %self.step(), "contact information completed");
                Vec::new()
            }
            (Step::PaymentInformation, FlowEvent::PaymentCompleted(payment)) => {
                self.data.payment = payment;
                self.active = ActiveStep::Confirmation;
                info!(step = %self.step(), "payment information completed, booking finalized");
                vec![Effect::Submit(self.data.clone())]
            }
            (step, event) => {
                warn!(%step, ?event, "event does not match the current step, ignoring");
                Vec::new()
            }
        }
    }
}
