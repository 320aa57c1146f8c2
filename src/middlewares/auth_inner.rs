//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::errors::AppError;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::TokenService;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let token_service = self.token_service.clone();

        Box::pin(async move {
            match authenticate_request(&req, &token_service) {
                // 유효한 토큰: 주체를 Request Extensions에 저장
                Ok(Some(user)) => {
                    log::debug!("인증 성공: 주체 {}", user.subject);
                    req.extensions_mut().insert(user);
                }
                // 헤더 없음 또는 Bearer 스킴이 아님: 익명으로 진행
                Ok(None) => {
                    log::debug!("익명 요청: {} {}", req.method(), req.path());
                }
                // 토큰 검증 실패: 즉시 401
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response)
                        .map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn authenticate_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<Option<AuthenticatedUser>, AppError> {
    let Some(auth_header) = req.headers().get(AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_header = auth_header
        .to_str()
        .map_err(|_| AppError::AuthenticationError("Authorization 헤더를 읽을 수 없습니다".to_string()))?;

    match token_service.extract_bearer_token(auth_header) {
        Some(token) => token_service.authenticate(token).map(Some),
        None => Ok(None),
    }
}
