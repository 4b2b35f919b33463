use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::SubjectService;
use crate::models::{
    ApiResponse, ErrorCode,
    subjects::{requests::CreateSubjectRequest, responses::SubjectResponse},
};

pub async fn create_subject(
    service: &SubjectService,
    subject_data: CreateSubjectRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let name = subject_data.name.trim().to_string();
    if name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Subject name must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_subject(name).await {
        Ok(subject) => Ok(HttpResponse::Created().json(ApiResponse::success(
            SubjectResponse { subject },
            "科目创建成功",
        ))),
        Err(e) => {
            if e.is_unique_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::SubjectAlreadyExists,
                    "Subject name already exists",
                )))
            } else {
                let msg = format!("Subject creation failed: {e}");
                error!("{}", msg);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
