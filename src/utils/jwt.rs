use crate::config::AppConfig;
use crate::models::users::entities::User;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
//
// 访问令牌内嵌冗余的身份信息（签发时刻的快照），
// 下游消费者无需再查一次用户表。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,           // Subject (user ID)
    pub username: String,      // 用户名（邮箱本地部分）
    pub first_name: String,    // 名
    pub last_name: String,     // 姓
    pub full_name: String,     // 全名
    pub email: String,         // 邮箱
    pub profile_photo: String, // 头像 URL
    pub role: String,          // 用户角色
    pub token_type: String,    // token类型: "access" 或 "refresh"
    pub jti: String,           // Token 唯一标识（黑名单用）
    pub exp: usize,            // Expiration time (时间戳)
    pub iat: usize,            // Issued at (签发时间)
}

impl Claims {
    /// 从用户构建身份声明快照
    pub fn snapshot_of(
        user: &User,
        token_type: &str,
        jti: String,
        iat: chrono::DateTime<chrono::Utc>,
        exp: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: format!("{} {}", user.first_name, user.last_name),
            email: user.email.clone(),
            profile_photo: user.profile_photo.clone(),
            role: user.role.to_string(),
            token_type: token_type.to_string(),
            jti,
            exp: exp.timestamp() as usize,
            iat: iat.timestamp() as usize,
        }
    }
}

// Token 响应结构体
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Token 验证失败的区分类别
///
/// 过期、格式错误、类型不符、已吊销必须可区分（映射到不同的 ErrorCode）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Malformed,
    WrongType,
    Revoked,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Expired => write!(f, "token expired"),
            TokenError::Malformed => write!(f, "token malformed"),
            TokenError::WrongType => write!(f, "wrong token type"),
            TokenError::Revoked => write!(f, "token blacklisted"),
        }
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    fn encode_claims(claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), claims, &encoding_key)
    }

    // 生成 Access Token
    pub fn generate_access_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user,
            "access",
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成 Refresh Token
    pub fn generate_refresh_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            user,
            "refresh",
            chrono::Duration::days(config.jwt.refresh_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        user: &User,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims::snapshot_of(
            user,
            token_type,
            uuid::Uuid::new_v4().to_string(),
            now,
            now + expiry_duration,
        );
        Self::encode_claims(&claims)
    }

    // 生成完整的 Token 响应（包含 access 和 refresh token）
    pub fn generate_token_pair(user: &User) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let access_token = Self::generate_access_token(user)?;
        let refresh_token = Self::generate_refresh_token(user)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    // 验证 JWT token，区分过期与格式错误
    pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            })
    }

    // 验证 token 是否为指定类型
    pub fn verify_token_type(token: &str, expected_type: &str) -> Result<Claims, TokenError> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != expected_type {
            return Err(TokenError::WrongType);
        }
        Ok(claims)
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, TokenError> {
        Self::verify_token_type(token, "access")
    }

    // 验证 Refresh Token
    pub fn verify_refresh_token(token: &str) -> Result<Claims, TokenError> {
        Self::verify_token_type(token, "refresh")
    }

    // 使用 Refresh Token 的声明生成新的 Access Token
    //
    // 身份声明从刷新令牌原样复制（签发时刻的快照），不从数据库回读。
    pub fn access_token_from_refresh_claims(
        refresh_claims: &Claims,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();
        let expiration = now + chrono::Duration::minutes(config.jwt.access_token_expiry);

        let mut claims = refresh_claims.clone();
        claims.token_type = "access".to_string();
        claims.jti = uuid::Uuid::new_v4().to_string();
        claims.iat = now.timestamp() as usize;
        claims.exp = expiration.timestamp() as usize;

        Self::encode_claims(&claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::{User, UserRole};

    fn sample_user() -> User {
        User {
            id: 42,
            username: "john.doe".to_string(),
            email: "john.doe@example.com".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            profile_photo: "/media/users/user-default.png".to_string(),
            role: UserRole::Teacher,
            password_hash: "hash".to_string(),
            is_staff: false,
            is_superuser: false,
            is_active: true,
            last_login: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_claims_snapshot_embeds_identity() {
        let user = sample_user();
        let now = chrono::Utc::now();
        let claims = Claims::snapshot_of(
            &user,
            "access",
            "jti-1".to_string(),
            now,
            now + chrono::Duration::minutes(15),
        );

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "john.doe");
        assert_eq!(claims.full_name, "John Doe");
        assert_eq!(claims.email, "john.doe@example.com");
        assert_eq!(claims.role, "teacher");
        assert_eq!(claims.token_type, "access");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_error_display() {
        assert_eq!(TokenError::Expired.to_string(), "token expired");
        assert_eq!(TokenError::Revoked.to_string(), "token blacklisted");
    }
}
