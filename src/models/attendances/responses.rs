use super::entities::Attendance;
use crate::models::common::pagination::PaginationInfo;
use serde::Serialize;

// 考勤响应
#[derive(Debug, Serialize)]
pub struct AttendanceResponse {
    pub attendance: Attendance,
}

// 考勤列表响应
#[derive(Debug, Serialize)]
pub struct AttendanceListResponse {
    pub items: Vec<Attendance>,
    pub pagination: PaginationInfo,
}
