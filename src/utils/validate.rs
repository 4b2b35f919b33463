use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() {
        return Err("Email is required");
    }
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("Name must not be empty");
    }
    if name.len() > 100 {
        return Err("Name must be at most 100 characters");
    }
    Ok(())
}

/// 规范化邮箱：小写域名部分，本地部分保持原样
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// 从邮箱派生用户名（@ 之前的本地部分）
pub fn derive_username(email: &str) -> String {
    email
        .split('@')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// 首字母大写，其余保持小写
pub fn capitalize(name: &str) -> String {
    let mut chars = name.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("teacher@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.domain.io").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("missing@tld").is_err());
    }

    #[test]
    fn test_normalize_email_lowercases_domain_only() {
        assert_eq!(
            normalize_email("John.Doe@EXAMPLE.Com"),
            "John.Doe@example.com"
        );
    }

    #[test]
    fn test_normalize_email_without_at() {
        assert_eq!(normalize_email("whatever"), "whatever");
    }

    #[test]
    fn test_derive_username_is_local_part() {
        assert_eq!(derive_username("john.doe@example.com"), "john.doe");
        assert_eq!(derive_username("plain"), "plain");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("john"), "John");
        assert_eq!(capitalize("MARY"), "Mary");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Aziz").is_ok());
        assert!(validate_name("  ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }
}
