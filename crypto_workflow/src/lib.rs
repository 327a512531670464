// crypto_demo/crypto_workflow/src/lib.rs

//! Client-side orchestration for the asymmetric cryptography demo.
//!
//! The remote service does all RSA/ECC/ElGamal work. This crate holds the
//! per-view state, hashes sender/receiver input locally before signing and
//! verifying, and maps every remote outcome onto display state.

pub mod algorithm;
pub mod cipher;
pub mod digest;
pub mod error;
pub mod models;
pub mod service;
pub mod signature;
pub mod state;
pub mod trigger;

// Re-exports used by the front end.
pub use algorithm::{Algorithm, AlgorithmSelector, ParseAlgorithmError};
pub use cipher::{CipherSnapshot, CipherWorkflow};
pub use digest::{digest, is_digest_hex, DIGEST_HEX_LEN};
pub use error::ServiceError;
pub use models::{
    DecryptRequest, DecryptResponse, Decoded, EncryptRequest, EncryptResponse, SignRequest,
    SignResponse, VerifyRequest, VerifyResponse,
};
pub use service::{CryptoService, HttpCryptoService, ServiceConfig};
pub use signature::{SignatureSnapshot, SignatureWorkflow};
pub use state::{CipherRecord, ReceiverRecord, SenderRecord, Ticket, Tracked, VerificationOutcome};
pub use trigger::Trigger;
