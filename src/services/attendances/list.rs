use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendances::requests::{AttendanceListParams, AttendanceListQuery},
};

pub async fn list_attendances(
    service: &AttendanceService,
    params: AttendanceListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = AttendanceListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        lesson_id: params.lesson_id,
        student_id: params.student_id,
        is_absent: params.is_absent,
    };

    match storage.list_attendances_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取考勤列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list attendances: {e}"),
            )),
        ),
    }
}
