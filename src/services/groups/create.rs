use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GroupService;
use crate::models::{
    ApiResponse, ErrorCode,
    groups::{requests::CreateGroupRequest, responses::GroupResponse},
    users::entities::UserRole,
};

pub async fn create_group(
    service: &GroupService,
    group_data: CreateGroupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if group_data.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Group name must not be empty",
        )));
    }

    if group_data.end_date < group_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "End date must not be before start date",
        )));
    }

    if group_data.lesson_end_time <= group_data.lesson_start_time {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Lesson end time must be after start time",
        )));
    }

    let storage = service.get_storage(request);

    // 授课教师必须存在且角色为教师
    match storage.get_user_by_id(group_data.teacher_id).await {
        Ok(Some(user)) if user.role == UserRole::Teacher => {}
        Ok(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::GroupTeacherInvalid,
                "Teacher not found or user is not a teacher",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to verify teacher: {e}"),
                )),
            );
        }
    }

    // 科目必须存在
    match storage.get_subject_by_id(group_data.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to verify subject: {e}"),
                )),
            );
        }
    }

    match storage.create_group(group_data).await {
        Ok(group) => Ok(HttpResponse::Created().json(ApiResponse::success(
            GroupResponse { group },
            "班组创建成功",
        ))),
        Err(e) => {
            if e.is_unique_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::GroupAlreadyExists,
                    "Group name already exists",
                )))
            } else {
                let msg = format!("Group creation failed: {e}");
                error!("{}", msg);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
