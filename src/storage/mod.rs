use std::sync::Arc;

use crate::models::{
    attendances::{
        entities::Attendance,
        requests::{AttendanceListQuery, CreateAttendanceRequest},
        responses::AttendanceListResponse,
    },
    groups::{
        entities::Group,
        requests::{CreateGroupRequest, GroupListQuery, UpdateGroupRequest},
        responses::GroupListResponse,
    },
    lessons::{
        entities::Lesson,
        requests::{CreateLessonRequest, LessonListQuery, UpdateLessonRequest},
        responses::LessonListResponse,
    },
    subjects::{entities::Subject, requests::SubjectListQuery, responses::SubjectListResponse},
    users::{
        entities::User,
        requests::{NewUserRecord, UserListQuery, UserUpdateRecord},
        responses::UserListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（记录已规范化，密码已散列）
    async fn create_user(&self, record: NewUserRecord) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UserUpdateRecord) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 科目管理方法
    // 创建科目
    async fn create_subject(&self, name: String) -> Result<Subject>;
    // 通过ID获取科目信息
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 列出科目
    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse>;
    // 更新科目信息
    async fn update_subject(&self, id: i64, name: String) -> Result<Option<Subject>>;
    // 删除科目（级联删除其班组）
    async fn delete_subject(&self, id: i64) -> Result<bool>;

    /// 班组管理方法
    // 创建班组
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group>;
    // 通过ID获取班组信息
    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>>;
    // 列出班组
    async fn list_groups_with_pagination(&self, query: GroupListQuery)
    -> Result<GroupListResponse>;
    // 更新班组信息
    async fn update_group(&self, id: i64, update: UpdateGroupRequest) -> Result<Option<Group>>;
    // 删除班组
    async fn delete_group(&self, id: i64) -> Result<bool>;

    /// 班组学生管理方法
    // 学生加入班组
    async fn enroll_student(&self, group_id: i64, student_id: i64) -> Result<bool>;
    // 学生退出班组
    async fn unenroll_student(&self, group_id: i64, student_id: i64) -> Result<bool>;
    // 学生是否已在班组中
    async fn is_student_enrolled(&self, group_id: i64, student_id: i64) -> Result<bool>;
    // 列出班组学生名单
    async fn list_group_students(&self, group_id: i64) -> Result<Vec<User>>;

    /// 课次管理方法
    // 创建课次
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson>;
    // 通过ID获取课次信息
    async fn get_lesson_by_id(&self, id: i64) -> Result<Option<Lesson>>;
    // 列出课次
    async fn list_lessons_with_pagination(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse>;
    // 更新课次信息
    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>>;
    // 删除课次
    async fn delete_lesson(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 创建考勤记录
    async fn create_attendance(&self, attendance: CreateAttendanceRequest) -> Result<Attendance>;
    // 通过ID获取考勤记录
    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>>;
    // 列出考勤记录
    async fn list_attendances_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 更新考勤记录
    async fn update_attendance(&self, id: i64, is_absent: bool) -> Result<Option<Attendance>>;
    // 删除考勤记录
    async fn delete_attendance(&self, id: i64) -> Result<bool>;

    /// 令牌黑名单方法
    // 吊销令牌（按 jti 登记）
    async fn revoke_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<bool>;
    // 令牌是否已被吊销
    async fn is_token_revoked(&self, jti: &str) -> Result<bool>;
    // 清理已自然过期的吊销记录
    async fn purge_expired_revocations(&self) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
