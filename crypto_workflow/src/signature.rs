// crypto_demo/crypto_workflow/src/signature.rs

//! Digital signature view: a sender signs, a receiver verifies.
//!
//! Neither side sends raw text to the service. Each action hashes its own
//! input locally, stores that digest for display right away, and exchanges
//! only the digest. The algorithm is read when the action fires, so the two
//! sides may legitimately use different algorithms.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, warn};

use crate::algorithm::{Algorithm, AlgorithmSelector};
use crate::digest::digest;
use crate::models::{Decoded, SignRequest, VerifyRequest};
use crate::service::CryptoService;
use crate::state::{ReceiverRecord, SenderRecord, VerificationOutcome, SIGN_FAILED};
use crate::trigger::Trigger;

/// A copy of the view's state for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureSnapshot {
    pub algorithm: Algorithm,
    pub sender: SenderRecord,
    pub receiver: ReceiverRecord,
}

#[derive(Debug, Default)]
struct SignatureState {
    algorithm: AlgorithmSelector,
    sender: SenderRecord,
    receiver: ReceiverRecord,
}

impl SignatureState {
    fn signature_in_use(&self) -> String {
        match &self.receiver.pasted_signature {
            Some(pasted) => pasted.clone(),
            None => self.sender.signature.get().clone(),
        }
    }
}

/// State container and orchestrators for one signature view.
///
/// Cloning yields another handle to the same view.
#[derive(Clone)]
pub struct SignatureWorkflow {
    service: Arc<dyn CryptoService>,
    state: Arc<Mutex<SignatureState>>,
}

impl SignatureWorkflow {
    pub fn new(service: Arc<dyn CryptoService>) -> Self {
        SignatureWorkflow {
            service,
            state: Arc::default(),
        }
    }

    pub fn select_algorithm(&self, algorithm: Algorithm) {
        self.state.lock().algorithm.select(algorithm);
    }

    pub fn algorithm(&self) -> Algorithm {
        self.state.lock().algorithm.current()
    }

    pub fn set_sender_input(&self, input: impl Into<String>) {
        self.state.lock().sender.raw_input = input.into();
    }

    pub fn set_receiver_input(&self, input: impl Into<String>) {
        self.state.lock().receiver.raw_input = input.into();
    }

    /// Verify against `signature` instead of the sender's current signature.
    pub fn paste_signature(&self, signature: impl Into<String>) {
        self.state.lock().receiver.pasted_signature = Some(signature.into());
    }

    pub fn clear_pasted_signature(&self) {
        self.state.lock().receiver.pasted_signature = None;
    }

    /// The signature `verify` would send right now.
    pub fn signature_in_use(&self) -> String {
        self.state.lock().signature_in_use()
    }

    pub fn snapshot(&self) -> SignatureSnapshot {
        let state = self.state.lock();
        SignatureSnapshot {
            algorithm: state.algorithm.current(),
            sender: state.sender.clone(),
            receiver: state.receiver.clone(),
        }
    }

    /// Sign the sender's input.
    ///
    /// The digest is stored before this returns; the signature (or
    /// [`SIGN_FAILED`]) is stored when the spawned call completes.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn sign(&self) -> Trigger<String> {
        let (request, ticket) = {
            let mut state = self.state.lock();
            let message = digest(&state.sender.raw_input);
            state.sender.digest = message.clone();
            let ticket = state.sender.signature.begin();
            let request = SignRequest {
                algorithm: state.algorithm.current(),
                message,
            };
            (request, ticket)
        };
        debug!(algorithm = %request.algorithm, digest = %request.message, "sign triggered");

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        Trigger::spawn(async move {
            let signature = match service.sign(&request).await {
                Ok(response) => match response.decode() {
                    Decoded::Present(signature) => signature,
                    Decoded::MissingField(field) => {
                        warn!(field, algorithm = %request.algorithm, "sign response carried no signature");
                        SIGN_FAILED.to_string()
                    }
                },
                Err(e) => {
                    error!(error = %e, algorithm = %request.algorithm, "error signing message");
                    SIGN_FAILED.to_string()
                }
            };

            let written = state.lock().sender.signature.settle(ticket, signature.clone());
            if !written {
                debug!("discarding stale sign response");
            }
            written.then_some(signature)
        })
    }

    /// Verify the receiver's input against the signature currently held.
    ///
    /// The digest is stored before this returns; the outcome is stored when
    /// the spawned call completes.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn verify(&self) -> Trigger<VerificationOutcome> {
        let (request, ticket) = {
            let mut state = self.state.lock();
            let message = digest(&state.receiver.raw_input);
            state.receiver.digest = message.clone();
            let ticket = state.receiver.outcome.begin();
            let request = VerifyRequest {
                algorithm: state.algorithm.current(),
                message,
                signature: state.signature_in_use(),
            };
            (request, ticket)
        };
        debug!(algorithm = %request.algorithm, digest = %request.message, "verify triggered");

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        Trigger::spawn(async move {
            let outcome = match service.verify(&request).await {
                Ok(response) => match response.decode() {
                    Decoded::Present(true) => VerificationOutcome::Valid,
                    Decoded::Present(false) => VerificationOutcome::Invalid,
                    Decoded::MissingField(field) => {
                        warn!(field, algorithm = %request.algorithm, "verify response carried no verdict");
                        VerificationOutcome::Failed
                    }
                },
                Err(e) => {
                    error!(error = %e, algorithm = %request.algorithm, "error verifying signature");
                    VerificationOutcome::Failed
                }
            };

            let written = state.lock().receiver.outcome.settle(ticket, outcome);
            if !written {
                debug!("discarding stale verify response");
            }
            written.then_some(outcome)
        })
    }
}
