use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendances::{requests::CreateAttendanceRequest, responses::AttendanceResponse},
    users::entities::UserRole,
};

/// 创建考勤记录
///
/// 未显式给出 is_absent 时默认记为缺勤。
/// 同一课次同一学生允许多条记录，不做唯一性检查。
pub async fn create_attendance(
    service: &AttendanceService,
    attendance_data: CreateAttendanceRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 课次必须存在
    match storage.get_lesson_by_id(attendance_data.lesson_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::LessonNotFound,
                "Lesson not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to verify lesson: {e}"),
                )),
            );
        }
    }

    // 学生必须存在且角色为学生
    match storage.get_user_by_id(attendance_data.student_id).await {
        Ok(Some(user)) if user.role == UserRole::Student => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::AttendanceStudentInvalid,
                "Student not found or user is not a student",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to verify student: {e}"),
                )),
            );
        }
    }

    match storage.create_attendance(attendance_data).await {
        Ok(attendance) => Ok(HttpResponse::Created().json(ApiResponse::success(
            AttendanceResponse { attendance },
            "考勤记录创建成功",
        ))),
        Err(e) => {
            let msg = format!("Attendance creation failed: {e}");
            error!("{}", msg);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
        }
    }
}
