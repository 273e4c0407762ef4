use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use vcode_code::domain::repository::{CodeDelivery, CodeStore};
use vcode_code::domain::types::{CodeSettings, VerificationCode};
use vcode_code::error::CodeServiceError;
use vcode_code::infra::grpc::GrpcEmailDelivery;
use vcode_code::state::AppState;

// ── MemoryCodeStore ──────────────────────────────────────────────────────────

/// In-memory store honouring TTLs against the tokio clock, so tests can use a
/// paused runtime and `tokio::time::advance`.
#[derive(Clone, Default)]
pub struct MemoryCodeStore {
    entries: Arc<Mutex<HashMap<String, (u64, Instant)>>>,
    unavailable: bool,
}

impl MemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails as if Redis were unreachable.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Peek at the live code for an email without going through the trait.
    pub fn live_code(&self, email: &str) -> Option<u64> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(email)
            .filter(|(_, expires_at)| *expires_at > Instant::now())
            .map(|(code, _)| *code)
    }

    fn check(&self) -> Result<(), CodeServiceError> {
        if self.unavailable {
            return Err(CodeServiceError::Storage(anyhow::anyhow!(
                "connection refused"
            )));
        }
        Ok(())
    }
}

impl CodeStore for MemoryCodeStore {
    async fn set(&self, code: &VerificationCode) -> Result<(), CodeServiceError> {
        self.check()?;
        self.entries.lock().unwrap().insert(
            code.email.clone(),
            (code.code, Instant::now() + code.ttl),
        );
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<u64>, CodeServiceError> {
        self.check()?;
        Ok(self.live_code(email))
    }

    async fn delete(&self, email: &str) -> Result<(), CodeServiceError> {
        self.check()?;
        self.entries.lock().unwrap().remove(email);
        Ok(())
    }
}

// ── MockDelivery ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentCode {
    pub email: String,
    pub display_name: String,
    pub code: u64,
}

#[derive(Clone, Default)]
pub struct MockDelivery {
    pub sent: Arc<Mutex<Vec<SentCode>>>,
    pub failing: bool,
}

impl MockDelivery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Returns a shared handle to the delivered codes for post-execution inspection.
    pub fn sent_handle(&self) -> Arc<Mutex<Vec<SentCode>>> {
        Arc::clone(&self.sent)
    }
}

impl CodeDelivery for MockDelivery {
    async fn send_code(
        &self,
        email: &str,
        display_name: &str,
        code: u64,
    ) -> Result<(), CodeServiceError> {
        if self.failing {
            return Err(CodeServiceError::Delivery(anyhow::anyhow!(
                "email service down"
            )));
        }
        self.sent.lock().unwrap().push(SentCode {
            email: email.to_owned(),
            display_name: display_name.to_owned(),
            code,
        });
        Ok(())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub const TEST_EMAIL: &str = "a@b.com";

pub fn test_settings() -> CodeSettings {
    CodeSettings {
        ttl: Duration::from_secs(900),
        max_length: 6,
        min_length: 6,
        display_name: "new user".to_owned(),
        consume_on_verify: false,
    }
}

/// State pointing at collaborators that are not running.
pub fn offline_state() -> AppState {
    let redis = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("pool");
    let email = GrpcEmailDelivery::lazy("http://127.0.0.1:1", Duration::from_secs(1))
        .expect("valid url");
    AppState {
        redis,
        email,
        settings: test_settings(),
    }
}

// ── Live Redis ───────────────────────────────────────────────────────────────

/// Env var naming a disposable Redis for store tests, e.g.
/// `REDIS_TEST_URL=redis://127.0.0.1:6379`. Tests using it are skipped when
/// it is unset.
pub const REDIS_TEST_URL: &str = "REDIS_TEST_URL";

pub fn live_redis_pool() -> Option<deadpool_redis::Pool> {
    let Ok(url) = std::env::var(REDIS_TEST_URL) else {
        eprintln!("{REDIS_TEST_URL} not set, skipping");
        return None;
    };
    let pool = deadpool_redis::Config::from_url(url)
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("pool");
    Some(pool)
}
