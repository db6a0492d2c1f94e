//! Submission flow: loading indicator, completion tickets and response interpretation.

use serde::Deserialize;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::client::{ChartRequest, ChartResponse, ChartTransport};
use crate::model::ErrorMap;

/// How a submission ended, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The server answered with some status.
    Response(ChartResponse),
    /// The request could not be sent or its response not read.
    Failed(String),
    /// The submission task ended without reporting, e.g. it panicked or was cancelled.
    Interrupted,
}

/// The terminal state a resolved submission reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// `200 OK`: the chart was generated.
    Success,
    /// `400 Bad Request` with per-field messages.
    FieldErrors,
    /// Any other status, an unreadable error body, or a transport failure.
    GeneralError,
}

/// Where the submission state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: ErrorMap,
}

/// Maps an outcome to its resolution and the error map to present.
pub fn interpret(outcome: &SubmissionOutcome) -> (Resolution, ErrorMap) {
    match outcome {
        SubmissionOutcome::Response(response) if response.status == 200 => {
            (Resolution::Success, ErrorMap::new())
        }
        SubmissionOutcome::Response(response) if response.status == 400 => {
            match serde_json::from_slice::<ErrorBody>(&response.body) {
                Ok(body) => (Resolution::FieldErrors, body.errors),
                Err(e) => {
                    warn!(error = %e, "malformed validation error body");
                    (Resolution::GeneralError, ErrorMap::general_failure())
                }
            }
        }
        SubmissionOutcome::Response(response) => {
            warn!(status = response.status, "unexpected response status");
            (Resolution::GeneralError, ErrorMap::general_failure())
        }
        SubmissionOutcome::Failed(reason) => {
            warn!(%reason, "finder chart request failed");
            (Resolution::GeneralError, ErrorMap::general_failure())
        }
        SubmissionOutcome::Interrupted => {
            warn!("finder chart request was interrupted");
            (Resolution::GeneralError, ErrorMap::general_failure())
        }
    }
}

/// Counts submissions in flight; the indicator is active while any are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingIndicator {
    in_flight: usize,
}

impl LoadingIndicator {
    pub fn is_active(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(crate) fn start(&mut self) {
        self.in_flight += 1;
    }

    pub(crate) fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// A finished submission, delivered back to the UI loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The id of the ticket that produced this completion.
    pub id: u64,
    pub outcome: SubmissionOutcome,
}

/// Obligation to report exactly one [`Completion`] for a started submission.
///
/// Dropping an unfinished ticket reports [`SubmissionOutcome::Interrupted`],
/// so the loading indicator is released on every exit path.
#[derive(Debug)]
pub struct SubmissionTicket {
    id: u64,
    tx: Option<UnboundedSender<Completion>>,
}

impl SubmissionTicket {
    pub(crate) fn new(id: u64, tx: UnboundedSender<Completion>) -> Self {
        Self { id, tx: Some(tx) }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Reports `outcome` and consumes the ticket.
    pub fn complete(mut self, outcome: SubmissionOutcome) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: SubmissionOutcome) {
        if let Some(tx) = self.tx.take() {
            // The receiver is gone only when the UI has shut down.
            let _ = tx.send(Completion {
                id: self.id,
                outcome,
            });
        }
    }
}

impl Drop for SubmissionTicket {
    fn drop(&mut self) {
        self.send(SubmissionOutcome::Interrupted);
    }
}

/// Sends `request` through `transport` and reports the outcome on `ticket`.
pub async fn run_submission<T>(transport: &T, request: ChartRequest, ticket: SubmissionTicket)
where
    T: ChartTransport + ?Sized,
{
    let outcome = match transport.post(&request).await {
        Ok(response) => {
            info!(id = ticket.id(), status = response.status, mode = %request.mode, "submission resolved");
            SubmissionOutcome::Response(response)
        }
        Err(e) => SubmissionOutcome::Failed(e.to_string()),
    };
    ticket.complete(outcome);
}
