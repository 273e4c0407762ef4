//! Generated gRPC types for the code service and its email collaborator.

pub mod code {
    tonic::include_proto!("code");
}

pub mod email {
    tonic::include_proto!("email");
}
