use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        requests::{UpdateUserRequest, UserUpdateRecord},
        responses::UserResponse,
    },
};
use crate::utils::password::{hash_password, is_password_hash};
use crate::utils::validate::{capitalize, derive_username, normalize_email, validate_email, validate_name};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 先取当前记录（角色视图之外的用户按不存在处理）
    let existing = match storage.get_user_by_id(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get user: {e}"),
                )),
            );
        }
    };

    if let Some(scope) = service.role_scope() {
        if existing.role != scope {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UserNotFound,
                "User not found",
            )));
        }
        // 角色视图内不允许把用户改成别的角色
        if let Some(new_role) = update_data.role
            && new_role != scope
        {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Role cannot be changed through this view",
            )));
        }
    }

    let mut record = UserUpdateRecord::default();

    if let Some(email) = update_data.email {
        if let Err(msg) = validate_email(&email) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
        }
        let email = normalize_email(&email);
        if email != existing.email {
            // 邮箱变更时重新派生用户名
            record.username = Some(derive_username(&email));
            record.email = Some(email);
        }
    }

    if let Some(first_name) = update_data.first_name {
        if let Err(msg) = validate_name(&first_name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
        }
        record.first_name = Some(capitalize(&first_name));
    }

    if let Some(last_name) = update_data.last_name {
        if let Err(msg) = validate_name(&last_name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
        }
        record.last_name = Some(capitalize(&last_name));
    }

    if let Some(password) = update_data.password {
        // 回传的旧哈希原样保留，其余值一律重新哈希
        if !(is_password_hash(&password) && password == existing.password_hash) {
            match hash_password(&password) {
                Ok(hash) => record.password_hash = Some(hash),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Password hashing failed: {e}"),
                        ),
                    ));
                }
            }
        }
    }

    record.role = update_data.role;
    record.profile_photo = update_data.profile_photo;
    record.is_staff = update_data.is_staff;
    record.is_superuser = update_data.is_superuser;
    record.is_active = update_data.is_active;

    // 超级用户必须同时是 staff，属权限问题而非参数问题
    let final_is_staff = record.is_staff.unwrap_or(existing.is_staff);
    let final_is_superuser = record.is_superuser.unwrap_or(existing.is_superuser);
    if final_is_superuser && !final_is_staff {
        return Ok(super::superuser_flags_response());
    }

    match storage.update_user(user_id, record).await {
        Ok(Some(user)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "用户更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            if e.is_unique_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Email or full name already exists",
                )))
            } else {
                let msg = format!("User update failed: {e}");
                error!("{}", msg);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::InternalServerError, msg)))
            }
        }
    }
}
