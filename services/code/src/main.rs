use tracing::info;

use vcode_core::config::Config;
use vcode_core::tracing::init_tracing;
use vcode_proto::code::code_service_server::CodeServiceServer;

use vcode_code::config::CodeConfig;
use vcode_code::grpc_server::CodeGrpcServer;
use vcode_code::infra::grpc::GrpcEmailDelivery;
use vcode_code::router::build_router;
use vcode_code::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = CodeConfig::from_env();
    let settings = config.settings().expect("invalid code settings");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let email = GrpcEmailDelivery::lazy(&config.email_grpc_url, config.request_timeout())
        .expect("invalid EMAIL_GRPC_URL");

    let state = AppState {
        redis,
        email,
        settings,
    };

    // Spawn health HTTP server
    let router = build_router(state.clone());
    let http_addr = format!("0.0.0.0:{}", config.code_http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");
    tokio::spawn(async move {
        info!("code health server listening on {http_addr}");
        axum::serve(listener, router).await.expect("health server error");
    });

    // gRPC server
    let grpc_addr = format!("0.0.0.0:{}", config.code_grpc_port);
    info!("code gRPC server listening on {grpc_addr}");
    tonic::transport::Server::builder()
        .timeout(config.request_timeout())
        .add_service(CodeServiceServer::new(CodeGrpcServer { state }))
        .serve(grpc_addr.parse().expect("invalid gRPC address"))
        .await
        .expect("gRPC server error");
}
