use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendances::{requests::UpdateAttendanceRequest, responses::AttendanceResponse},
};

/// 更新考勤记录（标记出勤/缺勤）
pub async fn update_attendance(
    service: &AttendanceService,
    attendance_id: i64,
    update_data: UpdateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .update_attendance(attendance_id, update_data.is_absent)
        .await
    {
        Ok(Some(attendance)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceResponse { attendance },
            "考勤记录更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttendanceNotFound,
            "Attendance record not found",
        ))),
        Err(e) => {
            let msg = format!("Attendance update failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
