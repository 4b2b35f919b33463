use serde::{Deserialize, Serialize};

// 考勤记录实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub lesson_id: i64,
    pub student_id: i64,
    pub is_absent: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
