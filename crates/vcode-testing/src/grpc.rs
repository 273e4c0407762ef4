//! Mock gRPC server helpers.
//!
//! Runs an in-process tonic `EmailService` with configurable behaviour for
//! testing code that calls the email collaborator over gRPC.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::{Code, Request, Response, Status};

use vcode_proto::email::email_service_server::{EmailService, EmailServiceServer};
use vcode_proto::email::{SendEmailCodeRequest, SendEmailCodeResponse};

/// Mock email service that records every `SendEmailCode` it receives.
#[derive(Clone, Default)]
pub struct MockEmailServer {
    sent: Arc<Mutex<Vec<SendEmailCodeRequest>>>,
    fail_with: Option<Code>,
    delay: Option<Duration>,
}

impl MockEmailServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every call with the given status code.
    pub fn failing(code: Code) -> Self {
        Self {
            fail_with: Some(code),
            ..Self::default()
        }
    }

    /// Hold every call for `delay` before answering.
    pub fn delayed(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Shared handle to the recorded requests for post-execution inspection.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SendEmailCodeRequest>>> {
        Arc::clone(&self.sent)
    }

    /// Bind to an ephemeral localhost port and serve in a background task.
    ///
    /// Returns the `http://` URL to connect a client to.
    pub async fn spawn(self) -> std::io::Result<String> {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;
        let incoming = TcpListenerStream::new(listener);
        tokio::spawn(async move {
            let _ = tonic::transport::Server::builder()
                .add_service(EmailServiceServer::new(self))
                .serve_with_incoming(incoming)
                .await;
        });
        Ok(format!("http://{addr}"))
    }
}

#[tonic::async_trait]
impl EmailService for MockEmailServer {
    async fn send_email_code(
        &self,
        request: Request<SendEmailCodeRequest>,
    ) -> Result<Response<SendEmailCodeResponse>, Status> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if let Some(code) = self.fail_with {
            return Err(Status::new(code, "mock email failure"));
        }
        self.sent.lock().unwrap().push(request.into_inner());
        Ok(Response::new(SendEmailCodeResponse {}))
    }
}
