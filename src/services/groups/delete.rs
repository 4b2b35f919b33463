use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GroupService;
use crate::models::{ApiResponse, ErrorCode};

/// 删除班组
///
/// 学生关联由 CASCADE 清理，仍有课次时由 RESTRICT 拦下。
pub async fn delete_group(
    service: &GroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_group(group_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("班组删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => {
            if e.is_foreign_key_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::GroupProtected,
                    "Group has existing lessons",
                )))
            } else {
                let msg = format!("Group deletion failed: {e}");
                error!("{}", msg);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
