use deadpool_redis::Pool as RedisPool;

use crate::domain::types::CodeSettings;
use crate::infra::cache::RedisCodeStore;
use crate::infra::grpc::GrpcEmailDelivery;

/// Shared application state passed to the gRPC server and health router.
#[derive(Clone)]
pub struct AppState {
    pub redis: RedisPool,
    pub email: GrpcEmailDelivery,
    pub settings: CodeSettings,
}

impl AppState {
    pub fn code_store(&self) -> RedisCodeStore {
        RedisCodeStore {
            pool: self.redis.clone(),
        }
    }

    pub fn email_delivery(&self) -> GrpcEmailDelivery {
        self.email.clone()
    }
}
