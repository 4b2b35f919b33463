use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 课次查询参数
#[derive(Debug, Deserialize)]
pub struct LessonListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    #[serde(alias = "group")]
    pub group_id: Option<i64>,
    pub date_from: Option<chrono::NaiveDate>,
    pub date_to: Option<chrono::NaiveDate>,
    pub search: Option<String>,
}

// 课次创建请求
#[derive(Debug, Deserialize)]
pub struct CreateLessonRequest {
    pub group_id: i64,
    pub theme: String,
    pub date: chrono::NaiveDate,
}

// 课次更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateLessonRequest {
    pub theme: Option<String>,
    pub date: Option<chrono::NaiveDate>,
}

// 课次列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct LessonListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub group_id: Option<i64>,
    pub date_from: Option<chrono::NaiveDate>,
    pub date_to: Option<chrono::NaiveDate>,
    pub search: Option<String>,
}
