//! 考勤存储操作

use super::SeaOrmStorage;
use crate::entity::attendances::{ActiveModel, Column, Entity as Attendances};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationInfo,
    attendances::{
        entities::Attendance,
        requests::{AttendanceListQuery, CreateAttendanceRequest},
        responses::AttendanceListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建考勤记录
    pub async fn create_attendance_impl(
        &self,
        req: CreateAttendanceRequest,
    ) -> Result<Attendance> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            lesson_id: Set(req.lesson_id),
            student_id: Set(req.student_id),
            is_absent: Set(req.is_absent),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("创建考勤记录失败: {e}")))?;

        Ok(result.into_attendance())
    }

    /// 通过 ID 获取考勤记录
    pub async fn get_attendance_by_id_impl(&self, id: i64) -> Result<Option<Attendance>> {
        let result = Attendances::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(result.map(|m| m.into_attendance()))
    }

    /// 分页列出考勤记录
    pub async fn list_attendances_with_pagination_impl(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Attendances::find();

        if let Some(lesson_id) = query.lesson_id {
            select = select.filter(Column::LessonId.eq(lesson_id));
        }

        if let Some(student_id) = query.student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        if let Some(is_absent) = query.is_absent {
            select = select.filter(Column::IsAbsent.eq(is_absent));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            SchoolSysError::database_operation(format!("查询考勤总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            SchoolSysError::database_operation(format!("查询考勤页数失败: {e}"))
        })?;

        let attendances = paginator.fetch_page(page - 1).await.map_err(|e| {
            SchoolSysError::database_operation(format!("查询考勤列表失败: {e}"))
        })?;

        Ok(AttendanceListResponse {
            items: attendances
                .into_iter()
                .map(|m| m.into_attendance())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新考勤记录
    pub async fn update_attendance_impl(
        &self,
        id: i64,
        is_absent: bool,
    ) -> Result<Option<Attendance>> {
        let existing = Attendances::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询考勤记录失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            is_absent: Set(is_absent),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("更新考勤记录失败: {e}")))?;

        Ok(Some(result.into_attendance()))
    }

    /// 删除考勤记录
    pub async fn delete_attendance_impl(&self, id: i64) -> Result<bool> {
        let result = Attendances::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除考勤记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
