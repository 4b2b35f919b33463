use super::entities::MeetingDays;
use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 班组查询参数
#[derive(Debug, Deserialize)]
pub struct GroupListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}

// 班组创建请求
#[derive(Debug, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub days: MeetingDays,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub lesson_start_time: chrono::NaiveTime,
    pub lesson_end_time: chrono::NaiveTime,
    pub is_active: Option<bool>,
}

// 班组更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub days: Option<MeetingDays>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub lesson_start_time: Option<chrono::NaiveTime>,
    pub lesson_end_time: Option<chrono::NaiveTime>,
    pub is_active: Option<bool>,
}

// 班组加入学生请求
#[derive(Debug, Deserialize)]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

// 班组列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct GroupListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub subject_id: Option<i64>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
}
