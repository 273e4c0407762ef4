//! Plumbing shared by vcode services: env config, tracing, health probes and
//! HTTP middleware.

pub mod config;
pub mod health;
pub mod middleware;
pub mod tracing;
