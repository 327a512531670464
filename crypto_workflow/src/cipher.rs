// crypto_demo/crypto_workflow/src/cipher.rs

//! Encrypt/decrypt view. Pure delegation: nothing is computed locally and
//! ciphertext format is left for the service to judge.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, warn};

use crate::algorithm::{Algorithm, AlgorithmSelector};
use crate::models::{DecryptRequest, Decoded, EncryptRequest};
use crate::service::CryptoService;
use crate::state::{CipherRecord, DECRYPT_FAILED, ENCRYPT_FAILED};
use crate::trigger::Trigger;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherSnapshot {
    pub algorithm: Algorithm,
    pub record: CipherRecord,
}

#[derive(Debug, Default)]
struct CipherState {
    algorithm: AlgorithmSelector,
    record: CipherRecord,
}

/// State container and orchestrators for one cipher view.
#[derive(Clone)]
pub struct CipherWorkflow {
    service: Arc<dyn CryptoService>,
    state: Arc<Mutex<CipherState>>,
}

impl CipherWorkflow {
    pub fn new(service: Arc<dyn CryptoService>) -> Self {
        CipherWorkflow {
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

    pub fn set_message(&self, message: impl Into<String>) {
        self.state.lock().record.message = message.into();
    }

    /// Replace the ciphertext by hand. An encrypt still in flight will not overwrite it.
    pub fn set_ciphertext(&self, ciphertext: impl Into<String>) {
        self.state.lock().record.ciphertext.set(ciphertext.into());
    }

    pub fn snapshot(&self) -> CipherSnapshot {
        let state = self.state.lock();
        CipherSnapshot {
            algorithm: state.algorithm.current(),
            record: state.record.clone(),
        }
    }

    /// Encrypt the current message into the ciphertext field.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn encrypt(&self) -> Trigger<String> {
        let (request, ticket) = {
            let mut state = self.state.lock();
            let ticket = state.record.ciphertext.begin();
            let request = EncryptRequest {
                algorithm: state.algorithm.current(),
                message: state.record.message.clone(),
            };
            (request, ticket)
        };
        debug!(algorithm = %request.algorithm, "encrypt triggered");

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        Trigger::spawn(async move {
            let ciphertext = match service.encrypt(&request).await {
                Ok(response) => match response.decode() {
                    Decoded::Present(ciphertext) => ciphertext,
                    Decoded::MissingField(field) => {
                        warn!(field, algorithm = %request.algorithm, "encrypt response carried no ciphertext");
                        ENCRYPT_FAILED.to_string()
                    }
                },
                Err(e) => {
                    error!(error = %e, algorithm = %request.algorithm, "error during encryption");
                    ENCRYPT_FAILED.to_string()
                }
            };

            let written = state.lock().record.ciphertext.settle(ticket, ciphertext.clone());
            written.then_some(ciphertext)
        })
    }

    /// Decrypt whatever the ciphertext field currently holds.
    ///
    /// # Panics
    /// Panics when called outside a Tokio runtime.
    pub fn decrypt(&self) -> Trigger<String> {
        let (request, ticket) = {
            let mut state = self.state.lock();
            let ticket = state.record.decrypted.begin();
            let request = DecryptRequest {
                algorithm: state.algorithm.current(),
                encrypted_message: state.record.ciphertext.get().clone(),
            };
            (request, ticket)
        };
        debug!(algorithm = %request.algorithm, "decrypt triggered");

        let service = Arc::clone(&self.service);
        let state = Arc::clone(&self.state);
        Trigger::spawn(async move {
            let plaintext = match service.decrypt(&request).await {
                Ok(response) => match response.decode() {
                    Decoded::Present(plaintext) => plaintext,
                    Decoded::MissingField(field) => {
                        warn!(field, algorithm = %request.algorithm, "decrypt response carried no plaintext");
                        DECRYPT_FAILED.to_string()
                    }
                },
                Err(e) => {
                    error!(error = %e, algorithm = %request.algorithm, "error during decryption");
                    DECRYPT_FAILED.to_string()
                }
            };

            let written = state.lock().record.decrypted.settle(ticket, plaintext.clone());
            written.then_some(plaintext)
        })
    }
}
