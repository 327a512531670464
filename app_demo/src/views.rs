// crypto_demo/app_demo/src/views.rs

use std::fmt;
use std::io;
use std::sync::Arc;

use inquire::Select;
use tracing::error;

use crypto_workflow::{is_digest_hex, CipherWorkflow, CryptoService, SignatureWorkflow};

use crate::screen::{field, prompt_algorithm, prompt_text, Screen};
use crate::View;

/// Where to go after a view returns.
pub enum Navigation {
    Switch(View),
    Quit,
}

#[derive(Debug, Clone, Copy)]
enum CipherAction {
    ChooseAlgorithm,
    EnterMessage,
    Encrypt,
    EditCiphertext,
    Decrypt,
    ToSignature,
    Exit,
}

const CIPHER_ACTIONS: [CipherAction; 7] = [
    CipherAction::ChooseAlgorithm,
    CipherAction::EnterMessage,
    CipherAction::Encrypt,
    CipherAction::EditCiphertext,
    CipherAction::Decrypt,
    CipherAction::ToSignature,
    CipherAction::Exit,
];

impl fmt::Display for CipherAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CipherAction::ChooseAlgorithm => "1. Choose algorithm",
            CipherAction::EnterMessage => "2. Enter message",
            CipherAction::Encrypt => "3. Encrypt",
            CipherAction::EditCiphertext => "4. Edit encrypted message",
            CipherAction::Decrypt => "5. Decrypt",
            CipherAction::ToSignature => "6. Go to Digital Signature",
            CipherAction::Exit => "7. Exit",
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum SignatureAction {
    ChooseAlgorithm,
    SenderInput,
    Sign,
    ReceiverInput,
    ReceiverInputFromSignature,
    PasteSignature,
    ClearPastedSignature,
    Verify,
    ToCipher,
    Exit,
}

const SIGNATURE_ACTIONS: [SignatureAction; 10] = [
    SignatureAction::ChooseAlgorithm,
    SignatureAction::SenderInput,
    SignatureAction::Sign,
    SignatureAction::ReceiverInput,
    SignatureAction::ReceiverInputFromSignature,
    SignatureAction::PasteSignature,
    SignatureAction::ClearPastedSignature,
    SignatureAction::Verify,
    SignatureAction::ToCipher,
    SignatureAction::Exit,
];

impl fmt::Display for SignatureAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignatureAction::ChooseAlgorithm => "1. Choose algorithm",
            SignatureAction::SenderInput => "2. Sender: enter input",
            SignatureAction::Sign => "3. Sender: create signature",
            SignatureAction::ReceiverInput => "4. Receiver: enter input",
            SignatureAction::ReceiverInputFromSignature => "5. Receiver: use the signature as input",
            SignatureAction::PasteSignature => "6. Receiver: paste a signature",
            SignatureAction::ClearPastedSignature => "7. Receiver: use the sender's signature",
            SignatureAction::Verify => "8. Receiver: verify",
            SignatureAction::ToCipher => "9. Go to Encrypt/Decrypt",
            SignatureAction::Exit => "10. Exit",
        })
    }
}

fn render_cipher(workflow: &CipherWorkflow) {
    let snapshot = workflow.snapshot();
    println!("\n--- Cryptography Resources ({}) ---", snapshot.algorithm);
    field("Message:", &snapshot.record.message);
    field("Encrypted message:", snapshot.record.ciphertext.get());
    field("Decrypted result:", snapshot.record.decrypted.get());
}

fn render_signature(workflow: &SignatureWorkflow) {
    let snapshot = workflow.snapshot();
    println!("\n--- Digital Signature ({}) ---", snapshot.algorithm);
    println!("Sender");
    field("Input:", &snapshot.sender.raw_input);
    field("Hash of input:", &snapshot.sender.digest);
    field("Signature:", snapshot.sender.signature.get());
    println!("Receiver");
    field("Input:", &snapshot.receiver.raw_input);
    field("Hash of input:", &snapshot.receiver.digest);
    field("Signature checked:", &workflow.signature_in_use());
    field("Result:", snapshot.receiver.outcome.get().display_text());
}

/// Run the encrypt/decrypt view until the user leaves it.
pub async fn cipher_view(service: Arc<dyn CryptoService>, screen: &Screen) -> io::Result<Navigation> {
    let workflow = CipherWorkflow::new(service);

    loop {
        screen.clear();
        render_cipher(&workflow);
        println!();

        let action = match Select::new("What would you like to do?", CIPHER_ACTIONS.to_vec()).prompt() {
            Ok(action) => action,
            Err(e) => {
                error!(error = %e, "could not read selection, exiting");
                return Ok(Navigation::Quit);
            }
        };

        match action {
            CipherAction::ChooseAlgorithm => {
                if let Some(algorithm) = prompt_algorithm(workflow.algorithm()) {
                    workflow.select_algorithm(algorithm);
                }
                continue;
            }
            CipherAction::EnterMessage => {
                let current = workflow.snapshot().record.message;
                if let Some(message) = prompt_text("Message:", &current) {
                    workflow.set_message(message);
                }
                continue;
            }
            CipherAction::Encrypt => {
                println!("Encrypting with {}...", workflow.algorithm());
                workflow.encrypt().settled().await;
            }
            CipherAction::EditCiphertext => {
                let current = workflow.snapshot().record.ciphertext.get().clone();
                if let Some(ciphertext) = prompt_text("Encrypted message:", &current) {
                    workflow.set_ciphertext(ciphertext);
                }
                continue;
            }
            CipherAction::Decrypt => {
                println!("Decrypting with {}...", workflow.algorithm());
                workflow.decrypt().settled().await;
            }
            CipherAction::ToSignature => return Ok(Navigation::Switch(View::Signature)),
            CipherAction::Exit => return Ok(Navigation::Quit),
        }

        render_cipher(&workflow);
        screen.pause()?;
    }
}

/// Run the digital signature view until the user leaves it.
pub async fn signature_view(
    service: Arc<dyn CryptoService>,
    screen: &Screen,
) -> io::Result<Navigation> {
    let workflow = SignatureWorkflow::new(service);

    loop {
        screen.clear();
        render_signature(&workflow);
        println!();

        let action = match Select::new("What would you like to do?", SIGNATURE_ACTIONS.to_vec()).prompt() {
            Ok(action) => action,
            Err(e) => {
                error!(error = %e, "could not read selection, exiting");
                return Ok(Navigation::Quit);
            }
        };

        match action {
            SignatureAction::ChooseAlgorithm => {
                if let Some(algorithm) = prompt_algorithm(workflow.algorithm()) {
                    workflow.select_algorithm(algorithm);
                }
                continue;
            }
            SignatureAction::SenderInput => {
                let current = workflow.snapshot().sender.raw_input;
                if let Some(input) = prompt_text("Sender input:", &current) {
                    workflow.set_sender_input(input);
                }
                continue;
            }
            SignatureAction::Sign => {
                println!("Signing with {}...", workflow.algorithm());
                workflow.sign().settled().await;
            }
            SignatureAction::ReceiverInput => {
                let current = workflow.snapshot().receiver.raw_input;
                if let Some(input) = prompt_text("Receiver input:", &current) {
                    workflow.set_receiver_input(input);
                }
                continue;
            }
            SignatureAction::ReceiverInputFromSignature => {
                workflow.set_receiver_input(workflow.signature_in_use());
                continue;
            }
            SignatureAction::PasteSignature => {
                let current = workflow.signature_in_use();
                if let Some(signature) = prompt_text("Signature:", &current) {
                    workflow.paste_signature(signature);
                }
                continue;
            }
            SignatureAction::ClearPastedSignature => {
                workflow.clear_pasted_signature();
                continue;
            }
            SignatureAction::Verify => {
                println!("Verifying with {}...", workflow.algorithm());
                workflow.verify().settled().await;
                let snapshot = workflow.snapshot();
                if is_digest_hex(&snapshot.sender.digest)
                    && snapshot.receiver.digest != snapshot.sender.digest
                {
                    println!("Note: the receiver's hash differs from the hash that was signed.");
                }
            }
            SignatureAction::ToCipher => return Ok(Navigation::Switch(View::Cipher)),
            SignatureAction::Exit => return Ok(Navigation::Quit),
        }

        render_signature(&workflow);
        screen.pause()?;
    }
}
