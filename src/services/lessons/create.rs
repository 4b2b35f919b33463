use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::LessonService;
use crate::models::{
    ApiResponse, ErrorCode,
    lessons::{requests::CreateLessonRequest, responses::LessonResponse},
};

pub async fn create_lesson(
    service: &LessonService,
    lesson_data: CreateLessonRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if lesson_data.theme.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Lesson theme must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    // 班组必须存在
    match storage.get_group_by_id(lesson_data.group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                "Group not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to verify group: {e}"),
                )),
            );
        }
    }

    match storage.create_lesson(lesson_data).await {
        Ok(lesson) => Ok(HttpResponse::Created().json(ApiResponse::success(
            LessonResponse { lesson },
            "课次创建成功",
        ))),
        Err(e) => {
            let msg = format!("Lesson creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
