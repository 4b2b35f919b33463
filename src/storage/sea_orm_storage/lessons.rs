//! 课次存储操作

use super::SeaOrmStorage;
use crate::entity::lessons::{ActiveModel, Column, Entity as Lessons};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationInfo,
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, LessonListQuery, UpdateLessonRequest},
        responses::LessonListResponse,
    },
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

impl SeaOrmStorage {
    /// 创建课次
    pub async fn create_lesson_impl(&self, req: CreateLessonRequest) -> Result<Lesson> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            group_id: Set(req.group_id),
            theme: Set(req.theme),
            date: Set(req.date.format(DATE_FORMAT).to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("创建课次失败: {e}")))?;

        Ok(result.into_lesson())
    }

    /// 通过 ID 获取课次
    pub async fn get_lesson_by_id_impl(&self, id: i64) -> Result<Option<Lesson>> {
        let result = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课次失败: {e}")))?;

        Ok(result.map(|m| m.into_lesson()))
    }

    /// 分页列出课次
    pub async fn list_lessons_with_pagination_impl(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Lessons::find();

        if let Some(group_id) = query.group_id {
            select = select.filter(Column::GroupId.eq(group_id));
        }

        // 日期是 ISO 格式字符串，可以直接按字典序比较
        if let Some(date_from) = query.date_from {
            select = select.filter(Column::Date.gte(date_from.format(DATE_FORMAT).to_string()));
        }

        if let Some(date_to) = query.date_to {
            select = select.filter(Column::Date.lte(date_to.format(DATE_FORMAT).to_string()));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select.filter(Column::Theme.like(contains_pattern(search)));
        }

        select = select.order_by_desc(Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课次总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课次页数失败: {e}")))?;

        let lessons = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课次列表失败: {e}")))?;

        Ok(LessonListResponse {
            items: lessons.into_iter().map(|m| m.into_lesson()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新课次
    pub async fn update_lesson_impl(
        &self,
        id: i64,
        update: UpdateLessonRequest,
    ) -> Result<Option<Lesson>> {
        let existing = Lessons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询课次失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(theme) = update.theme {
            model.theme = Set(theme);
        }

        if let Some(date) = update.date {
            model.date = Set(date.format(DATE_FORMAT).to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("更新课次失败: {e}")))?;

        Ok(Some(result.into_lesson()))
    }

    /// 删除课次
    ///
    /// 考勤引用由外键 RESTRICT 保护。
    pub async fn delete_lesson_impl(&self, id: i64) -> Result<bool> {
        let result = Lessons::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除课次失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
