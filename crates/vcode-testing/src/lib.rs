//! Test utilities for vcode services.
//!
//! Provides an in-process mock of the email gRPC collaborator.
//! Import from tests only, never from production code.

pub mod grpc;
