//! Submission collaborator for the contact and quote forms.
//!
//! With a configured endpoint the validated record is posted as JSON. Without
//! one (the shipped default) the call waits a fixed interval and succeeds, so
//! the forms behave end to end before the CRM integration exists. Either way
//! the contract is the same: one attempt, success or a failure reason, no
//! retries here.

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::fmt;

use crate::config;

const SIMULATED_DELAY_MS: u32 = 1_500;

#[derive(Clone, PartialEq, Debug)]
pub enum SubmitError {
    Network(String),
    Rejected(u16),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(reason) => {
                write!(f, "We couldn't send your request ({reason}). Please try again or call us.")
            }
            SubmitError::Rejected(status) => {
                write!(f, "Our server couldn't accept the request (status {status}). Please try again or call us.")
            }
        }
    }
}

pub async fn deliver<T: Serialize>(kind: &str, payload: &T) -> Result<(), SubmitError> {
    let endpoint = config::get_form_endpoint();
    if endpoint.is_empty() {
        TimeoutFuture::new(SIMULATED_DELAY_MS).await;
        return Ok(());
    }

    let response = Request::post(&format!("{}/api/requests/{}", endpoint, kind))
        .json(payload)
        .map_err(|e| SubmitError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(SubmitError::Rejected(response.status()))
    }
}
