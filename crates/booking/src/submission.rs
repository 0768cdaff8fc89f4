//! Hand-off point for the finalized booking.
//!
//! No transport lives in this crate. The default handler writes the record
//! to the log; anything that talks to a real backend implements
//! `SubmissionHandler` outside the core.

use thiserror::Error;
use tracing::info;

use crate::flow::BookingData;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to encode booking: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait SubmissionHandler {
    fn submit(&mut self, booking: &BookingData) -> Result<(), SubmissionError>;
}

/// Emits the finalized booking as JSON at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSubmission;

impl SubmissionHandler for LogSubmission {
    fn submit(&mut self, booking: &BookingData) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(booking)?;
        info!(target: "booking::submission", %payload, "booking submitted");
        Ok(())
    }
}

/// Collects submitted bookings in memory.
impl SubmissionHandler for Vec<BookingData> {
    fn submit(&mut self, booking: &BookingData) -> Result<(), SubmissionError> {
        self.push(booking.clone());
        Ok(())
    }
}
