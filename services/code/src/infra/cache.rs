use std::time::Duration;

use deadpool_redis::redis::{AsyncCommands, RedisError};
use deadpool_redis::{Connection, Pool, PoolError};

use crate::domain::repository::CodeStore;
use crate::domain::types::VerificationCode;
use crate::error::CodeServiceError;

/// Key namespace for email verification codes.
pub const USER_EMAIL_MODULE: &str = "user:email";

#[derive(Clone)]
pub struct RedisCodeStore {
    pub pool: Pool,
}

pub fn email_code_key(email: &str) -> String {
    format!("{}:{}", USER_EMAIL_MODULE, email)
}

/// `PSETEX` expiry for a TTL: sub-millisecond values round up to 1 ms,
/// and a zero TTL is rejected since the key would never expire.
fn ttl_millis(ttl: Duration) -> Result<u64, CodeServiceError> {
    if ttl.is_zero() {
        return Err(CodeServiceError::InvalidTtl);
    }
    u64::try_from(ttl.as_millis().max(1))
        .map_err(|_| CodeServiceError::Storage(anyhow::anyhow!("ttl out of range")))
}

impl RedisCodeStore {
    async fn conn(&self) -> Result<Connection, CodeServiceError> {
        self.pool.get().await.map_err(|e| match e {
            PoolError::Timeout(_) => CodeServiceError::DeadlineExceeded,
            other => CodeServiceError::Storage(other.into()),
        })
    }

    /// Round-trip a `PING`, used by the readiness probe.
    pub async fn ping(&self) -> Result<(), CodeServiceError> {
        let mut conn = self.conn().await?;
        let (): () = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e: RedisError| CodeServiceError::Storage(e.into()))?;
        Ok(())
    }
}

impl CodeStore for RedisCodeStore {
    async fn set(&self, code: &VerificationCode) -> Result<(), CodeServiceError> {
        let ttl_ms = ttl_millis(code.ttl)?;
        let mut conn = self.conn().await?;
        let key = email_code_key(&code.email);
        let (): () = conn
            .pset_ex(&key, code.code, ttl_ms)
            .await
            .map_err(|e: RedisError| CodeServiceError::Storage(e.into()))?;
        Ok(())
    }

    async fn get(&self, email: &str) -> Result<Option<u64>, CodeServiceError> {
        let mut conn = self.conn().await?;
        let key = email_code_key(email);
        let value: Option<u64> = conn
            .get(&key)
            .await
            .map_err(|e: RedisError| CodeServiceError::Storage(e.into()))?;
        Ok(value)
    }

    async fn delete(&self, email: &str) -> Result<(), CodeServiceError> {
        let mut conn = self.conn().await?;
        let key = email_code_key(email);
        let (): () = conn
            .del(&key)
            .await
            .map_err(|e: RedisError| CodeServiceError::Storage(e.into()))?;
        Ok(())
    }
}
