use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::config::AppConfig;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{
        entities::UserRole,
        requests::{CreateUserRequest, NewUserRecord},
        responses::UserResponse,
    },
};
use crate::utils::password::hash_password;
use crate::utils::validate::{capitalize, derive_username, normalize_email, validate_email, validate_name};

pub async fn create_user(
    service: &UserService,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证邮箱（用户名由邮箱派生，邮箱缺失即无法建号）
    if user_data.email.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserEmailRequired,
            "Email is required",
        )));
    }
    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 验证姓名
    if let Err(msg) = validate_name(&user_data.first_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    if let Err(msg) = validate_name(&user_data.last_name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 角色视图强制角色，普通入口默认学生
    let role = service
        .role_scope()
        .or(user_data.role)
        .unwrap_or(UserRole::Student);

    let is_staff = user_data.is_staff.unwrap_or(false);
    let is_superuser = user_data.is_superuser.unwrap_or(false);

    // 超级用户必须同时是 staff，属权限问题而非参数问题
    if is_superuser && !is_staff {
        return Ok(super::superuser_flags_response());
    }

    let password_hash = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Password hashing failed: {e}"),
                )),
            );
        }
    };

    // 规范化：域名小写、姓名首字母大写、用户名取邮箱本地部分
    let email = normalize_email(&user_data.email);
    let username = derive_username(&email);
    let config = AppConfig::get();

    let record = NewUserRecord {
        username,
        email,
        first_name: capitalize(&user_data.first_name),
        last_name: capitalize(&user_data.last_name),
        profile_photo: user_data
            .profile_photo
            .unwrap_or_else(|| config.media.default_user_photo.clone()),
        role,
        password_hash,
        is_staff,
        is_superuser,
    };

    let storage = service.get_storage(request);

    match storage.create_user(record).await {
        Ok(user) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(UserResponse { user }, "用户创建成功"))),
        Err(e) => {
            // 邮箱和 (first_name, last_name) 都有唯一约束
            if e.is_unique_violation() {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Email or full name already exists",
                )))
            } else {
                let msg = format!("User creation failed: {e}");
                error!("{}", msg);
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::UserCreationFailed, msg)))
            }
        }
    }
}
