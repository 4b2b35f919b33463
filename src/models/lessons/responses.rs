use super::entities::Lesson;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 课次响应
#[derive(Debug, Serialize)]
pub struct LessonResponse {
    pub lesson: Lesson,
}

// 课次列表响应
#[derive(Debug, Serialize)]
pub struct LessonListResponse {
    pub items: Vec<Lesson>,
    pub pagination: PaginationInfo,
}
