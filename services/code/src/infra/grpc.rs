use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

use vcode_proto::email::{SendEmailCodeRequest, email_service_client::EmailServiceClient};

use crate::domain::repository::CodeDelivery;
use crate::error::CodeServiceError;

/// gRPC client implementing `CodeDelivery` via `email.EmailService`.
#[derive(Clone)]
pub struct GrpcEmailDelivery {
    client: EmailServiceClient<Channel>,
    timeout: Duration,
}

impl GrpcEmailDelivery {
    pub fn new(channel: Channel, timeout: Duration) -> Self {
        Self {
            client: EmailServiceClient::new(channel),
            timeout,
        }
    }

    /// Build a client with lazy connection (connects on first RPC call) and
    /// a per-call timeout.
    pub fn lazy(url: &str, timeout: Duration) -> Result<Self, CodeServiceError> {
        let channel = Endpoint::from_shared(url.to_owned())
            .map_err(|e| CodeServiceError::Delivery(anyhow::anyhow!("invalid email url: {e}")))?
            .connect_lazy();
        Ok(Self::new(channel, timeout))
    }
}

impl CodeDelivery for GrpcEmailDelivery {
    async fn send_code(
        &self,
        email: &str,
        display_name: &str,
        code: u64,
    ) -> Result<(), CodeServiceError> {
        let mut client = self.client.clone();
        let call = client.send_email_code(SendEmailCodeRequest {
            email: email.to_owned(),
            username: display_name.to_owned(),
            code,
        });
        // The channel reports its own timeout as CANCELLED, so the deadline
        // is enforced here instead.
        let response = tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| CodeServiceError::DeadlineExceeded)?;
        match response {
            Ok(_) => Ok(()),
            Err(status) => Err(match status.code() {
                tonic::Code::Cancelled => CodeServiceError::Cancelled,
                tonic::Code::DeadlineExceeded => CodeServiceError::DeadlineExceeded,
                _ => CodeServiceError::Delivery(anyhow::anyhow!(
                    "gRPC send_email_code failed: {status}"
                )),
            }),
        }
    }
}
