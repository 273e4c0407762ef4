#![allow(async_fn_in_trait)]

use crate::domain::types::VerificationCode;
use crate::error::CodeServiceError;

/// Expiring key-value store holding at most one live code per email.
pub trait CodeStore: Send + Sync {
    /// Store the code with its TTL, replacing any code already held for the email.
    async fn set(&self, code: &VerificationCode) -> Result<(), CodeServiceError>;

    /// Fetch the live code for an email. `None` if never created or expired.
    async fn get(&self, email: &str) -> Result<Option<u64>, CodeServiceError>;

    async fn delete(&self, email: &str) -> Result<(), CodeServiceError>;
}

/// Port for delivering a code to its recipient via the email service.
pub trait CodeDelivery: Send + Sync {
    async fn send_code(
        &self,
        email: &str,
        display_name: &str,
        code: u64,
    ) -> Result<(), CodeServiceError>;
}
