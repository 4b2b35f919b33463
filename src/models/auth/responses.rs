use crate::models::users::entities::User;
use serde::Serialize;

// 令牌对响应
#[derive(Debug, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

// 令牌刷新响应
#[derive(Debug, Serialize)]
pub struct TokenRefreshResponse {
    pub access: String,
}

// 当前用户信息响应
#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub user: User,
}
