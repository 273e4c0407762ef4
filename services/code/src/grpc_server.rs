use tonic::{Request, Response, Status};

use vcode_proto::code::{
    CreateVerifyEmailCodeRequest, CreateVerifyEmailCodeResponse, VerifyEmailCodeRequest,
    VerifyEmailCodeResponse, code_service_server::CodeService,
};

use crate::state::AppState;
use crate::usecase::code::{CreateVerifyEmailCodeUseCase, VerifyEmailCodeUseCase};

#[derive(Clone)]
pub struct CodeGrpcServer {
    pub state: AppState,
}

#[tonic::async_trait]
impl CodeService for CodeGrpcServer {
    async fn create_verify_email_code(
        &self,
        request: Request<CreateVerifyEmailCodeRequest>,
    ) -> Result<Response<CreateVerifyEmailCodeResponse>, Status> {
        let req = request.into_inner();
        let uc = CreateVerifyEmailCodeUseCase::new(
            self.state.code_store(),
            self.state.email_delivery(),
            self.state.settings.clone(),
        );
        uc.execute(&req.email).await?;
        Ok(Response::new(CreateVerifyEmailCodeResponse {}))
    }

    async fn verify_email_code(
        &self,
        request: Request<VerifyEmailCodeRequest>,
    ) -> Result<Response<VerifyEmailCodeResponse>, Status> {
        let req = request.into_inner();
        let uc = VerifyEmailCodeUseCase::new(self.state.code_store(), self.state.settings.clone());
        let status = uc.execute(&req.email, req.code).await?;
        Ok(Response::new(VerifyEmailCodeResponse { status }))
    }
}
