use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::services::MediaService;

// 懒加载的全局 MediaService 实例
static MEDIA_SERVICE: Lazy<MediaService> = Lazy::new(MediaService::new_lazy);

pub async fn handle_upload(
    request: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE.handle_upload(&request, payload).await
}

pub async fn handle_serve(
    request: HttpRequest,
    filename: web::Path<String>,
) -> ActixResult<HttpResponse> {
    MEDIA_SERVICE
        .handle_serve(&request, filename.into_inner())
        .await
}

// 配置路由
pub fn configure_media_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/media")
            .wrap(middlewares::RequireJWT)
            .route("/users", web::post().to(handle_upload)),
    );
    // 头像读取走公开前缀，不鉴权
    cfg.service(
        web::scope("/media/users")
            .wrap(middleware::Compress::default())
            .route("/{filename}", web::get().to(handle_serve)),
    );
}
