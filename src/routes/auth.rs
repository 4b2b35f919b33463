use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::requests::{BlacklistRequest, RefreshRequest, TokenObtainRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn obtain_token(
    req: HttpRequest,
    obtain_data: web::Json<TokenObtainRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .obtain_token(obtain_data.into_inner(), &req)
        .await
}

pub async fn refresh_token(
    req: HttpRequest,
    refresh_data: web::Json<RefreshRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .refresh_token(refresh_data.into_inner(), &req)
        .await
}

pub async fn blacklist_token(
    req: HttpRequest,
    blacklist_data: web::Json<BlacklistRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .blacklist_token(blacklist_data.into_inner(), &req)
        .await
}

pub async fn get_me(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_me(&request).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/token")
            .route("", web::post().to(obtain_token))
            .route("/refresh", web::post().to(refresh_token))
            .route("/blacklist", web::post().to(blacklist_token)),
    );
    cfg.service(
        web::scope("/api/v1/auth")
            .wrap(middlewares::RequireJWT)
            .route("/me", web::get().to(get_me)),
    );
}
