pub mod cache;
pub mod grpc;
