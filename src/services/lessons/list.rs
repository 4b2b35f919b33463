use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LessonService;
use crate::models::{
    ApiResponse, ErrorCode,
    lessons::requests::{LessonListParams, LessonListQuery},
};

pub async fn list_lessons(
    service: &LessonService,
    params: LessonListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = LessonListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        group_id: params.group_id,
        date_from: params.date_from,
        date_to: params.date_to,
        search: params.search,
    };

    match storage.list_lessons_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取课次列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list lessons: {e}"),
            )),
        ),
    }
}
