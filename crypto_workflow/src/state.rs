// crypto_demo/crypto_workflow/src/state.rs

//! Display state for the two views.
//!
//! Every field starts empty, lives only as long as its workflow, and is
//! written only by an input handler or by the action that computes it.

use std::fmt;

/// Stored in the encrypt output field when `/encrypt` fails.
pub const ENCRYPT_FAILED: &str = "Encryption failed";
/// Stored in the decrypt output field when `/decrypt` fails.
pub const DECRYPT_FAILED: &str = "Decryption failed";
/// Stored in the signature field when `/sign` fails or returns no signature.
pub const SIGN_FAILED: &str = "Failed to create signature";
pub const SIGNATURE_VALID: &str = "Signature is valid";
pub const SIGNATURE_INVALID: &str = "Signature is invalid";
pub const VERIFY_FAILED: &str = "Error while verifying signature";

/// Issued when an action starts computing a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// A display value guarded by a generation counter.
///
/// Only the most recent [`Ticket`] may write the value, so a slow response
/// from an earlier trigger cannot overwrite the result of a later one.
/// A direct edit through [`Tracked::set`] also invalidates outstanding tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracked<T> {
    value: T,
    generation: u64,
}

impl<T> Tracked<T> {
    pub fn new(value: T) -> Self {
        Tracked {
            value,
            generation: 0,
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Write `value` if `ticket` is still the latest. Returns whether it was written.
    pub fn settle(&mut self, ticket: Ticket, value: T) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.value = value;
        true
    }

    pub fn set(&mut self, value: T) {
        self.generation += 1;
        self.value = value;
    }
}

/// Result shown on the receiver side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerificationOutcome {
    #[default]
    Unset,
    Valid,
    Invalid,
    /// The call failed or the response had no `isValid`.
    Failed,
}

impl VerificationOutcome {
    pub fn display_text(self) -> &'static str {
        match self {
            VerificationOutcome::Unset => "",
            VerificationOutcome::Valid => SIGNATURE_VALID,
            VerificationOutcome::Invalid => SIGNATURE_INVALID,
            VerificationOutcome::Failed => VERIFY_FAILED,
        }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// Sender side of the signature view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenderRecord {
    pub raw_input: String,
    /// Digest of `raw_input` as it was when signing was last triggered.
    pub digest: String,
    pub signature: Tracked<String>,
}

/// Receiver side of the signature view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReceiverRecord {
    /// The text the receiver hashes and checks.
    pub raw_input: String,
    /// Digest of `raw_input` as it was when verification was last triggered.
    pub digest: String,
    /// A signature pasted by hand; when absent the sender's signature is used.
    pub pasted_signature: Option<String>,
    pub outcome: Tracked<VerificationOutcome>,
}

/// The cipher view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherRecord {
    pub message: String,
    /// Output of encrypt and input of decrypt; the user may also paste into it.
    pub ciphertext: Tracked<String>,
    pub decrypted: Tracked<String>,
}
