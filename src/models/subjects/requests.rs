use crate::models::common::pagination::PaginationQuery;
use serde::Deserialize;

// 科目查询参数
#[derive(Debug, Deserialize)]
pub struct SubjectListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 科目创建请求
#[derive(Debug, Deserialize)]
pub struct CreateSubjectRequest {
    pub name: String,
}

// 科目更新请求
#[derive(Debug, Deserialize)]
pub struct UpdateSubjectRequest {
    pub name: String,
}

// 科目列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct SubjectListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}
