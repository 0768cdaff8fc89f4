//! Core of the appointment booking form.
//!
//! The crate is split the same way the booking screens are:
//! - `validation`: shared field/value/error plumbing and the `Schema` trait
//! - `contact` / `payment`: the two step schemas and their data records
//! - `form`: the generic `StepForm` controller holding a draft + errors
//! - `flow`: the `BookingFlow` state machine that owns the accumulated `BookingData`
//! - `submission`: the boundary the finalized booking is handed to
//! - `catalog`: read-only clinic and service reference data
//!
//! Nothing in here does I/O. The rendering layer drives a `BookingFlow`
//! with field edits and submits, and executes the `Effect`s it returns.

pub mod catalog;
pub mod contact;
pub mod flow;
pub mod form;
pub mod payment;
pub mod submission;
pub mod validation;

pub use catalog::{Address, Catalog, Clinic, Service};
pub use contact::{ContactData, ContactField, ContactSchema};
pub use flow::{ActiveStep, BookingData, BookingFlow, Effect, Step, StepRecord};
pub use form::{StepForm, Submission};
pub use payment::{PaymentData, PaymentField, PaymentSchema};
pub use submission::{LogSubmission, SubmissionError, SubmissionHandler};
pub use validation::{FieldKind, FieldValue, Schema, SchemaField, ValidationErrors};
