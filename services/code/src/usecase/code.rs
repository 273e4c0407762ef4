use crate::domain::repository::{CodeDelivery, CodeStore};
use crate::domain::types::{CodeSettings, VerificationCode};
use crate::error::CodeServiceError;
use crate::usecase::generator;

fn require_email(email: &str) -> Result<(), CodeServiceError> {
    if email.trim().is_empty() {
        return Err(CodeServiceError::InvalidEmail);
    }
    Ok(())
}

// ── CreateVerifyEmailCode ────────────────────────────────────────────────────

pub struct CreateVerifyEmailCodeUseCase<S, D>
where
    S: CodeStore,
    D: CodeDelivery,
{
    pub store: S,
    pub delivery: D,
    pub settings: CodeSettings,
}

impl<S, D> CreateVerifyEmailCodeUseCase<S, D>
where
    S: CodeStore,
    D: CodeDelivery,
{
    pub fn new(store: S, delivery: D, settings: CodeSettings) -> Self {
        Self {
            store,
            delivery,
            settings,
        }
    }

    pub async fn execute(&self, email: &str) -> Result<(), CodeServiceError> {
        require_email(email)?;

        // 1. Generate the code within the configured digit bounds
        let code = generator::generate(self.settings.max_length, self.settings.min_length)?;

        // 2. Store it with its TTL, overwriting any pending code for this email
        self.store
            .set(&VerificationCode {
                email: email.to_owned(),
                code,
                ttl: self.settings.ttl,
            })
            .await?;

        // 3. Hand it to the email service; on failure the stored code stays put
        self.delivery
            .send_code(email, &self.settings.display_name, code)
            .await
    }
}

// ── VerifyEmailCode ──────────────────────────────────────────────────────────

pub struct VerifyEmailCodeUseCase<S: CodeStore> {
    pub store: S,
    pub settings: CodeSettings,
}

impl<S: CodeStore> VerifyEmailCodeUseCase<S> {
    pub fn new(store: S, settings: CodeSettings) -> Self {
        Self { store, settings }
    }

    /// Returns `Ok(true)` on an exact match. A wrong code is an error, never
    /// `Ok(false)`.
    pub async fn execute(&self, email: &str, input: u64) -> Result<bool, CodeServiceError> {
        require_email(email)?;

        let stored = self
            .store
            .get(email)
            .await?
            .ok_or(CodeServiceError::CodeNotFound)?;

        if stored != input {
            return Err(CodeServiceError::InvalidCode);
        }

        if self.settings.consume_on_verify {
            self.store.delete(email).await?;
        }

        Ok(true)
    }
}
