use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        requests::{BlacklistRequest, RefreshRequest, TokenObtainRequest},
        responses::{TokenPairResponse, TokenRefreshResponse},
    },
};
use crate::utils::jwt::{Claims, JwtUtils, TokenError};
use crate::utils::password::verify_password;

use super::AuthService;

// sub 必须是用户 ID，解析失败按畸形令牌处理
fn subject_user_id(claims: &Claims) -> Result<i64, TokenError> {
    claims.sub.parse::<i64>().map_err(|_| TokenError::Malformed)
}

fn token_error_response(err: TokenError) -> HttpResponse {
    let code = match err {
        TokenError::Expired => ErrorCode::TokenExpired,
        TokenError::Malformed => ErrorCode::TokenMalformed,
        TokenError::WrongType => ErrorCode::TokenWrongType,
        TokenError::Revoked => ErrorCode::TokenRevoked,
    };
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(code, err.to_string()))
}

/// 凭据换令牌对
///
/// email 字段同时接受邮箱和用户名（邮箱本地部分）。
pub async fn handle_obtain_token(
    service: &AuthService,
    obtain_request: TokenObtainRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .get_user_by_username_or_email(&obtain_request.email)
        .await
    {
        Ok(Some(user)) => {
            // 凭据错误与账号不存在返回同一响应，避免账号枚举
            if !user.is_active || !verify_password(&obtain_request.password, &user.password_hash) {
                return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Email or password is incorrect",
                )));
            }

            let _ = storage.update_last_login(user.id).await;

            match JwtUtils::generate_token_pair(&user) {
                Ok(token_pair) => {
                    tracing::info!("User {} obtained a token pair", user.username);
                    Ok(HttpResponse::Ok().json(ApiResponse::success(
                        TokenPairResponse {
                            access: token_pair.access_token,
                            refresh: token_pair.refresh_token,
                        },
                        "Token obtained successfully",
                    )))
                }
                Err(e) => {
                    tracing::error!("Failed to generate JWT token: {}", e);
                    Ok(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Unable to generate token",
                        )),
                    )
                }
            }
        }
        Ok(None) => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Email or password is incorrect",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Token obtain failed: {e}"),
            )),
        ),
    }
}

/// 刷新访问令牌
///
/// 身份声明从刷新令牌原样复制，不回读数据库。
pub async fn handle_refresh_token(
    service: &AuthService,
    refresh_request: RefreshRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let claims = match JwtUtils::verify_refresh_token(&refresh_request.refresh) {
        Ok(claims) => claims,
        Err(err) => return Ok(token_error_response(err)),
    };

    let storage = service.get_storage(request);

    // 已吊销的刷新令牌即使签名有效也不能再用
    match storage.is_token_revoked(&claims.jti).await {
        Ok(true) => return Ok(token_error_response(TokenError::Revoked)),
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Token refresh failed: {e}"),
                )),
            );
        }
    }

    match JwtUtils::access_token_from_refresh_claims(&claims) {
        Ok(access) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TokenRefreshResponse { access },
            "Token refreshed successfully",
        ))),
        Err(e) => {
            tracing::error!("Failed to generate access token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Unable to generate token",
                )),
            )
        }
    }
}

/// 吊销刷新令牌（登出）
pub async fn handle_blacklist_token(
    service: &AuthService,
    blacklist_request: BlacklistRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let claims = match JwtUtils::verify_refresh_token(&blacklist_request.refresh) {
        Ok(claims) => claims,
        Err(err) => return Ok(token_error_response(err)),
    };

    let storage = service.get_storage(request);
    let user_id = match subject_user_id(&claims) {
        Ok(id) => id,
        Err(err) => return Ok(token_error_response(err)),
    };

    match storage
        .revoke_token(&claims.jti, user_id, claims.exp as i64)
        .await
    {
        Ok(_) => {
            tracing::info!("Refresh token revoked for user {}", claims.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Token blacklisted")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Token blacklist failed: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_sub(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            username: "john.doe".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            full_name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            profile_photo: "/media/users/user-default.png".to_string(),
            role: "teacher".to_string(),
            token_type: "refresh".to_string(),
            jti: "jti-1".to_string(),
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        }
    }

    #[test]
    fn test_subject_user_id_parses_numeric_sub() {
        assert_eq!(subject_user_id(&claims_with_sub("42")), Ok(42));
    }

    #[test]
    fn test_subject_user_id_rejects_non_numeric_sub() {
        assert_eq!(
            subject_user_id(&claims_with_sub("not-a-number")),
            Err(TokenError::Malformed)
        );
    }
}
