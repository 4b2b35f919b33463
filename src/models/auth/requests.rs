use serde::Deserialize;

// 令牌获取请求（邮箱或用户名 + 密码）
#[derive(Debug, Deserialize)]
pub struct TokenObtainRequest {
    pub email: String,
    pub password: String,
}

// 令牌刷新请求
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

// 令牌吊销请求
#[derive(Debug, Deserialize)]
pub struct BlacklistRequest {
    pub refresh: String,
}
