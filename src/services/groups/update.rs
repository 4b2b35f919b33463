use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::GroupService;
use crate::models::{
    ApiResponse, ErrorCode,
    groups::{requests::UpdateGroupRequest, responses::GroupResponse},
    users::entities::UserRole,
};

pub async fn update_group(
    service: &GroupService,
    group_id: i64,
    update_data: UpdateGroupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_group_by_id(group_id).await {
        Ok(Some(group)) => group,
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
                    format!("Failed to get group: {e}"),
                )),
            );
        }
    };

    if let Some(ref name) = update_data.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Group name must not be empty",
        )));
    }

    // 校验合并后的日期与时间窗口
    let start_date = update_data.start_date.unwrap_or(existing.start_date);
    let end_date = update_data.end_date.unwrap_or(existing.end_date);
    if end_date < start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "End date must not be before start date",
        )));
    }

    let lesson_start = update_data
        .lesson_start_time
        .unwrap_or(existing.lesson_start_time);
    let lesson_end = update_data
        .lesson_end_time
        .unwrap_or(existing.lesson_end_time);
    if lesson_end <= lesson_start {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Lesson end time must be after start time",
        )));
    }

    if let Some(teacher_id) = update_data.teacher_id {
        match storage.get_user_by_id(teacher_id).await {
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
    }

    if let Some(subject_id) = update_data.subject_id {
        match storage.get_subject_by_id(subject_id).await {
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
    }

    match storage.update_group(group_id, update_data).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            GroupResponse { group },
            "班组更新成功",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => {
            if e.is_unique_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::GroupAlreadyExists,
                    "Group name already exists",
                )))
            } else {
                let msg = format!("Group update failed: {e}");
                error!("{}", msg);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
