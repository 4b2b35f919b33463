use sea_orm::sea_query::LikeExpr;

/// 转义 LIKE 模式中的通配符，避免用户输入被当作模式使用
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// 构造带 ESCAPE 子句的子串匹配模式
///
/// 转义只有配合 `LIKE ... ESCAPE '\'` 才生效，
/// 所以搜索统一走 `.like(contains_pattern(..))` 而不是 `.contains(..)`。
pub fn contains_pattern(input: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(input.trim()))).escape('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent_and_underscore() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("a\\b%"), "a\\\\b\\%");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_like_pattern("math"), "math");
    }
}
