// crypto_demo/crypto_workflow/tests/common/mod.rs

//! A [`CryptoService`] whose replies are queued by the test.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use crypto_workflow::{
    CryptoService, DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse, ServiceError,
    SignRequest, SignResponse, VerifyRequest, VerifyResponse,
};
use parking_lot::Mutex;
use tokio::sync::oneshot;

/// A request the service received, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Encrypt(EncryptRequest),
    Decrypt(DecryptRequest),
    Sign(SignRequest),
    Verify(VerifyRequest),
}

enum Reply<T> {
    Ready(Result<T, ServiceError>),
    Gated(oneshot::Receiver<Result<T, ServiceError>>),
}

impl<T> Reply<T> {
    async fn resolve(self, endpoint: &'static str) -> Result<T, ServiceError> {
        match self {
            Reply::Ready(result) => result,
            Reply::Gated(rx) => rx.await.unwrap_or_else(|_| Err(failure(endpoint))),
        }
    }
}

#[derive(Default)]
struct Script {
    encrypt: VecDeque<Reply<EncryptResponse>>,
    decrypt: VecDeque<Reply<DecryptResponse>>,
    sign: VecDeque<Reply<SignResponse>>,
    verify: VecDeque<Reply<VerifyResponse>>,
    calls: Vec<Call>,
}

pub type Gate<T> = oneshot::Sender<Result<T, ServiceError>>;

#[derive(Clone, Default)]
pub struct ScriptedService {
    script: Arc<Mutex<Script>>,
}

/// An error standing in for a failed call.
pub fn failure(endpoint: &'static str) -> ServiceError {
    ServiceError::Status {
        endpoint,
        status: 500,
        body: "scripted failure".to_string(),
    }
}

fn gated<T>() -> (Gate<T>, Reply<T>) {
    let (tx, rx) = oneshot::channel();
    (tx, Reply::Gated(rx))
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(&self) -> Arc<dyn CryptoService> {
        Arc::new(self.clone())
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().calls.clone()
    }

    /// Yield until at least `n` requests have reached the service.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.script.lock().calls.len() < n {
            tokio::task::yield_now().await;
        }
    }

    pub fn reply_encrypt(&self, result: Result<EncryptResponse, ServiceError>) {
        self.script.lock().encrypt.push_back(Reply::Ready(result));
    }

    pub fn reply_decrypt(&self, result: Result<DecryptResponse, ServiceError>) {
        self.script.lock().decrypt.push_back(Reply::Ready(result));
    }

    pub fn reply_sign(&self, result: Result<SignResponse, ServiceError>) {
        self.script.lock().sign.push_back(Reply::Ready(result));
    }

    pub fn reply_verify(&self, result: Result<VerifyResponse, ServiceError>) {
        self.script.lock().verify.push_back(Reply::Ready(result));
    }

    pub fn gate_encrypt(&self) -> Gate<EncryptResponse> {
        let (tx, reply) = gated();
        self.script.lock().encrypt.push_back(reply);
        tx
    }

    pub fn gate_sign(&self) -> Gate<SignResponse> {
        let (tx, reply) = gated();
        self.script.lock().sign.push_back(reply);
        tx
    }

    pub fn gate_verify(&self) -> Gate<VerifyResponse> {
        let (tx, reply) = gated();
        self.script.lock().verify.push_back(reply);
        tx
    }
}

pub fn signed(signature: &str) -> SignResponse {
    SignResponse {
        signature: Some(signature.to_string()),
    }
}

pub fn verdict(is_valid: bool) -> VerifyResponse {
    VerifyResponse {
        is_valid: Some(is_valid),
    }
}

#[async_trait]
impl CryptoService for ScriptedService {
    async fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse, ServiceError> {
        let reply = {
            let mut script = self.script.lock();
            script.calls.push(Call::Encrypt(request.clone()));
            script.encrypt.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve("encrypt").await,
            None => Err(failure("encrypt")),
        }
    }

    async fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse, ServiceError> {
        let reply = {
            let mut script = self.script.lock();
            script.calls.push(Call::Decrypt(request.clone()));
            script.decrypt.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve("decrypt").await,
            None => Err(failure("decrypt")),
        }
    }

    async fn sign(&self, request: &SignRequest) -> Result<SignResponse, ServiceError> {
        let reply = {
            let mut script = self.script.lock();
            script.calls.push(Call::Sign(request.clone()));
            script.sign.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve("sign").await,
            None => Err(failure("sign")),
        }
    }

    async fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse, ServiceError> {
        let reply = {
            let mut script = self.script.lock();
            script.calls.push(Call::Verify(request.clone()));
            script.verify.pop_front()
        };
        match reply {
            Some(reply) => reply.resolve("verify").await,
            None => Err(failure("verify")),
        }
    }
}
