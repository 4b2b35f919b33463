//! 班组与班组学生存储操作

use super::SeaOrmStorage;
use crate::entity::group_students::{
    ActiveModel as GroupStudentActiveModel, Column as GroupStudentColumn,
    Entity as GroupStudents,
};
use crate::entity::groups::{ActiveModel, Column, Entity as Groups};
use crate::entity::subjects::Column as SubjectColumn;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SchoolSysError};
use crate::models::{
    PaginationInfo,
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
        responses::GroupListResponse,
    },
    users::entities::User,
};
use crate::utils::contains_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

impl SeaOrmStorage {
    /// 统计班组学生数量
    async fn count_group_students(&self, group_id: i64) -> Result<i64> {
        let count = GroupStudents::find()
            .filter(GroupStudentColumn::GroupId.eq(group_id))
            .count(&self.db)
            .await
            .map_err(|e| {
                SchoolSysError::database_operation(format!("查询班组学生数量失败: {e}"))
            })?;

        Ok(count as i64)
    }

    /// 创建班组
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<Group> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            teacher_id: Set(req.teacher_id),
            subject_id: Set(req.subject_id),
            days: Set(req.days.to_string()),
            start_date: Set(req.start_date.format(DATE_FORMAT).to_string()),
            end_date: Set(req.end_date.format(DATE_FORMAT).to_string()),
            lesson_start_time: Set(req.lesson_start_time.format(TIME_FORMAT).to_string()),
            lesson_end_time: Set(req.lesson_end_time.format(TIME_FORMAT).to_string()),
            is_active: Set(req.is_active.unwrap_or(true)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("创建班组失败: {e}")))?;

        Ok(result.into_group(0))
    }

    /// 通过 ID 获取班组
    pub async fn get_group_by_id_impl(&self, id: i64) -> Result<Option<Group>> {
        let result = Groups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班组失败: {e}")))?;

        match result {
            Some(model) => {
                let student_count = self.count_group_students(model.id).await?;
                Ok(Some(model.into_group(student_count)))
            }
            None => Ok(None),
        }
    }

    /// 分页列出班组
    ///
    /// 搜索覆盖班组名、科目名和教师姓名。
    pub async fn list_groups_with_pagination_impl(
        &self,
        query: GroupListQuery,
    ) -> Result<GroupListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Groups::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            select = select
                .left_join(Users)
                .left_join(crate::entity::subjects::Entity)
                .filter(
                    Condition::any()
                        .add(Column::Name.like(contains_pattern(search)))
                        .add(SubjectColumn::Name.like(contains_pattern(search)))
                        .add(UserColumn::FirstName.like(contains_pattern(search)))
                        .add(UserColumn::LastName.like(contains_pattern(search))),
                );
        }

        if let Some(teacher_id) = query.teacher_id {
            select = select.filter(Column::TeacherId.eq(teacher_id));
        }

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(is_active) = query.is_active {
            select = select.filter(Column::IsActive.eq(is_active));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班组总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班组页数失败: {e}")))?;

        let groups = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班组列表失败: {e}")))?;

        let mut items = Vec::with_capacity(groups.len());
        for model in groups {
            let student_count = self.count_group_students(model.id).await?;
            items.push(model.into_group(student_count));
        }

        Ok(GroupListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新班组
    pub async fn update_group_impl(
        &self,
        id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<Group>> {
        let existing = Groups::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班组失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(teacher_id) = update.teacher_id {
            model.teacher_id = Set(teacher_id);
        }

        if let Some(subject_id) = update.subject_id {
            model.subject_id = Set(subject_id);
        }

        if let Some(days) = update.days {
            model.days = Set(days.to_string());
        }

        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.format(DATE_FORMAT).to_string());
        }

        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.format(DATE_FORMAT).to_string());
        }

        if let Some(lesson_start_time) = update.lesson_start_time {
            model.lesson_start_time = Set(lesson_start_time.format(TIME_FORMAT).to_string());
        }

        if let Some(lesson_end_time) = update.lesson_end_time {
            model.lesson_end_time = Set(lesson_end_time.format(TIME_FORMAT).to_string());
        }

        if let Some(is_active) = update.is_active {
            model.is_active = Set(is_active);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("更新班组失败: {e}")))?;

        self.get_group_by_id_impl(id).await
    }

    /// 删除班组
    ///
    /// 课次引用由外键 RESTRICT 保护，学生关联由 CASCADE 清理。
    pub async fn delete_group_impl(&self, id: i64) -> Result<bool> {
        let result = Groups::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("删除班组失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生加入班组
    pub async fn enroll_student_impl(&self, group_id: i64, student_id: i64) -> Result<bool> {
        let model = GroupStudentActiveModel {
            group_id: Set(group_id),
            student_id: Set(student_id),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("加入班组失败: {e}")))?;

        Ok(true)
    }

    /// 学生退出班组
    pub async fn unenroll_student_impl(&self, group_id: i64, student_id: i64) -> Result<bool> {
        let result = GroupStudents::delete_many()
            .filter(
                Condition::all()
                    .add(GroupStudentColumn::GroupId.eq(group_id))
                    .add(GroupStudentColumn::StudentId.eq(student_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("退出班组失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 学生是否已在班组中
    pub async fn is_student_enrolled_impl(&self, group_id: i64, student_id: i64) -> Result<bool> {
        let count = GroupStudents::find()
            .filter(
                Condition::all()
                    .add(GroupStudentColumn::GroupId.eq(group_id))
                    .add(GroupStudentColumn::StudentId.eq(student_id)),
            )
            .count(&self.db)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("查询班组学生失败: {e}")))?;

        Ok(count > 0)
    }

    /// 列出班组学生名单
    pub async fn list_group_students_impl(&self, group_id: i64) -> Result<Vec<User>> {
        let students = Users::find()
            .inner_join(GroupStudents)
            .filter(GroupStudentColumn::GroupId.eq(group_id))
            .order_by_asc(UserColumn::LastName)
            .all(&self.db)
            .await
            .map_err(|e| {
                SchoolSysError::database_operation(format!("查询班组学生名单失败: {e}"))
            })?;

        Ok(students.into_iter().map(|m| m.into_user()).collect())
    }
}
