use super::entities::Group;
use crate::models::common::pagination::PaginationInfo;
use crate::models::users::entities::User;
use serde::Serialize;

// 班组响应
#[derive(Debug, Serialize)]
pub struct GroupResponse {
    pub group: Group,
}

// 班组列表响应
#[derive(Debug, Serialize)]
pub struct GroupListResponse {
    pub items: Vec<Group>,
    pub pagination: PaginationInfo,
}

// 班组学生名单响应
#[derive(Debug, Serialize)]
pub struct GroupStudentListResponse {
    pub group_id: i64,
    pub items: Vec<User>,
    pub total: i64,
}
