use crate::config::AppConfig;
use crate::errors::SchoolSysError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, SchoolSysError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| SchoolSysError::validation(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SchoolSysError::validation(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

/// 判断输入是否已经是一个 Argon2 哈希串
///
/// 更新用户时用于避免把已哈希的值再次哈希：
/// 只有当传入的密码与库中哈希不一致时才重新哈希。
pub fn is_password_hash(value: &str) -> bool {
    PasswordHash::new(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_password_hash_rejects_plaintext() {
        assert!(!is_password_hash("plain-text-password"));
        assert!(!is_password_hash(""));
    }

    #[test]
    fn test_is_password_hash_accepts_phc_string() {
        // PHC 格式的 Argon2 哈希串
        let hash = "$argon2id$v=19$m=19456,t=2,p=1$MTIzNDU2Nzg5MDEyMzQ1Ng$3QX0Hh4exOsvUWq1BLeGWUvuQZrEnF6cAJgB7Gxm9RI";
        assert!(is_password_hash(hash));
    }

    #[test]
    fn test_verify_password_with_garbage_hash() {
        assert!(!verify_password("secret", "not-a-hash"));
    }
}
