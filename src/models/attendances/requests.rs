use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 考勤查询参数
#[derive(Debug, Deserialize)]
pub struct AttendanceListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(alias = "lesson")]
    pub lesson_id: Option<i64>,
    #[serde(alias = "student")]
    pub student_id: Option<i64>,
    pub is_absent: Option<bool>,
}

// 考勤创建请求
//
// 未给出 is_absent 时默认按缺勤记录。
#[derive(Debug, Deserialize)]
pub struct CreateAttendanceRequest {
    pub lesson_id: i64,
    pub student_id: i64,
    #[serde(default = "default_is_absent")]
    pub is_absent: bool,
}

// 考勤更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateAttendanceRequest {
    pub is_absent: bool,
}

// 考勤列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct AttendanceListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub lesson_id: Option<i64>,
    pub student_id: Option<i64>,
    pub is_absent: Option<bool>,
}

fn default_is_absent() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_to_absent() {
        let req: CreateAttendanceRequest =
            serde_json::from_str(r#"{"lesson_id": 1, "student_id": 2}"#).unwrap();
        assert!(req.is_absent);
    }

    #[test]
    fn test_create_accepts_explicit_present() {
        let req: CreateAttendanceRequest =
            serde_json::from_str(r#"{"lesson_id": 1, "student_id": 2, "is_absent": false}"#)
                .unwrap();
        assert!(!req.is_absent);
    }
}
