//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendances;
mod groups;
mod lessons;
mod revoked_tokens;
mod subjects;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolSysError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            // 外键约束承担引用保护，必须启用
            .pragma("foreign_keys", "ON")
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, record: NewUserRecord) -> Result<User> {
        self.create_user_impl(record).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UserUpdateRecord) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 科目模块
    async fn create_subject(&self, name: String) -> Result<Subject> {
        self.create_subject_impl(name).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects_with_pagination(
        &self,
        query: SubjectListQuery,
    ) -> Result<SubjectListResponse> {
        self.list_subjects_with_pagination_impl(query).await
    }

    async fn update_subject(&self, id: i64, name: String) -> Result<Option<Subject>> {
        self.update_subject_impl(id, name).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    // 班组模块
    async fn create_group(&self, group: CreateGroupRequest) -> Result<Group> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, id: i64) -> Result<Option<Group>> {
        self.get_group_by_id_impl(id).await
    }

    async fn list_groups_with_pagination(
        &self,
        query: GroupListQuery,
    ) -> Result<GroupListResponse> {
        self.list_groups_with_pagination_impl(query).await
    }

    async fn update_group(&self, id: i64, update: UpdateGroupRequest) -> Result<Option<Group>> {
        self.update_group_impl(id, update).await
    }

    async fn delete_group(&self, id: i64) -> Result<bool> {
        self.delete_group_impl(id).await
    }

    // 班组学生模块
    async fn enroll_student(&self, group_id: i64, student_id: i64) -> Result<bool> {
        self.enroll_student_impl(group_id, student_id).await
    }

    async fn unenroll_student(&self, group_id: i64, student_id: i64) -> Result<bool> {
        self.unenroll_student_impl(group_id, student_id).await
    }

    async fn is_student_enrolled(&self, group_id: i64, student_id: i64) -> Result<bool> {
        self.is_student_enrolled_impl(group_id, student_id).await
    }

    async fn list_group_students(&self, group_id: i64) -> Result<Vec<User>> {
        self.list_group_students_impl(group_id).await
    }

    // 课次模块
    async fn create_lesson(&self, lesson: CreateLessonRequest) -> Result<Lesson> {
        self.create_lesson_impl(lesson).await
    }

    async fn get_lesson_by_id(&self, id: i64) -> Result<Option<Lesson>> {
        self.get_lesson_by_id_impl(id).await
    }

    async fn list_lessons_with_pagination(
        &self,
        query: LessonListQuery,
    ) -> Result<LessonListResponse> {
        self.list_lessons_with_pagination_impl(query).await
    }

    async fn update_lesson(&self, id: i64, update: UpdateLessonRequest) -> Result<Option<Lesson>> {
        self.update_lesson_impl(id, update).await
    }

    async fn delete_lesson(&self, id: i64) -> Result<bool> {
        self.delete_lesson_impl(id).await
    }

    // 考勤模块
    async fn create_attendance(&self, attendance: CreateAttendanceRequest) -> Result<Attendance> {
        self.create_attendance_impl(attendance).await
    }

    async fn get_attendance_by_id(&self, id: i64) -> Result<Option<Attendance>> {
        self.get_attendance_by_id_impl(id).await
    }

    async fn list_attendances_with_pagination(
        &self,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendances_with_pagination_impl(query).await
    }

    async fn update_attendance(&self, id: i64, is_absent: bool) -> Result<Option<Attendance>> {
        self.update_attendance_impl(id, is_absent).await
    }

    async fn delete_attendance(&self, id: i64) -> Result<bool> {
        self.delete_attendance_impl(id).await
    }

    // 令牌黑名单模块
    async fn revoke_token(&self, jti: &str, user_id: i64, expires_at: i64) -> Result<bool> {
        self.revoke_token_impl(jti, user_id, expires_at).await
    }

    async fn is_token_revoked(&self, jti: &str) -> Result<bool> {
        self.is_token_revoked_impl(jti).await
    }

    async fn purge_expired_revocations(&self) -> Result<u64> {
        self.purge_expired_revocations_impl().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::groups::entities::MeetingDays;
    use crate::models::users::entities::UserRole;

    /// 内存 SQLite 存储（外键约束开启，与生产连接一致）
    async fn memory_storage() -> SeaOrmStorage {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .pragma("foreign_keys", "ON");

        // 内存库随连接消失，池必须只留一个连接
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opt)
            .await
            .unwrap();

        let db = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);
        Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    fn user_record(email: &str, first_name: &str, last_name: &str, role: UserRole) -> NewUserRecord {
        NewUserRecord {
            username: email.split('@').next().unwrap().to_string(),
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            profile_photo: "/media/users/user-default.png".to_string(),
            role,
            password_hash: "hash".to_string(),
            is_staff: false,
            is_superuser: false,
        }
    }

    fn group_request(name: &str, teacher_id: i64, subject_id: i64) -> CreateGroupRequest {
        CreateGroupRequest {
            name: name.to_string(),
            teacher_id,
            subject_id,
            days: MeetingDays::Odd,
            start_date: chrono::NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2026, 12, 20).unwrap(),
            lesson_start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            lesson_end_time: chrono::NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_duplicate_full_name_is_unique_violation() {
        let storage = memory_storage().await;

        storage
            .create_user(user_record("john.doe@example.com", "John", "Doe", UserRole::Student))
            .await
            .unwrap();

        // 邮箱不同但 (first_name, last_name) 相同
        let err = storage
            .create_user(user_record("j.doe@example.com", "John", "Doe", UserRole::Student))
            .await
            .unwrap_err();
        assert!(err.is_unique_violation(), "unexpected error: {err}");
    }

    #[tokio::test]
    async fn test_subject_delete_cascades_to_groups() {
        let storage = memory_storage().await;

        let teacher = storage
            .create_user(user_record("anna.lee@example.com", "Anna", "Lee", UserRole::Teacher))
            .await
            .unwrap();
        let subject = storage.create_subject("Math".to_string()).await.unwrap();
        let group = storage
            .create_group(group_request("Math A", teacher.id, subject.id))
            .await
            .unwrap();

        assert!(storage.delete_subject(subject.id).await.unwrap());
        assert!(storage.get_group_by_id(group.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_teacher_delete_blocked_while_group_exists() {
        let storage = memory_storage().await;

        let teacher = storage
            .create_user(user_record("anna.lee@example.com", "Anna", "Lee", UserRole::Teacher))
            .await
            .unwrap();
        let subject = storage.create_subject("Math".to_string()).await.unwrap();
        let group = storage
            .create_group(group_request("Math A", teacher.id, subject.id))
            .await
            .unwrap();

        let err = storage.delete_user(teacher.id).await.unwrap_err();
        assert!(err.is_foreign_key_violation(), "unexpected error: {err}");

        // 班组删除后教师可删
        assert!(storage.delete_group(group.id).await.unwrap());
        assert!(storage.delete_user(teacher.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_role_filter_isolates_role_views() {
        let storage = memory_storage().await;

        storage
            .create_user(user_record("anna.lee@example.com", "Anna", "Lee", UserRole::Teacher))
            .await
            .unwrap();
        storage
            .create_user(user_record("bob.kim@example.com", "Bob", "Kim", UserRole::Student))
            .await
            .unwrap();
        storage
            .create_user(user_record("carl.wu@example.com", "Carl", "Wu", UserRole::Parent))
            .await
            .unwrap();

        let teachers = storage
            .list_users_with_pagination(UserListQuery {
                page: None,
                size: None,
                role: Some(UserRole::Teacher),
                is_active: None,
                search: None,
            })
            .await
            .unwrap();

        assert_eq!(teachers.items.len(), 1);
        assert!(teachers.items.iter().all(|u| u.role == UserRole::Teacher));
    }

    #[tokio::test]
    async fn test_search_treats_like_wildcards_literally() {
        let storage = memory_storage().await;

        storage.create_subject("50% off".to_string()).await.unwrap();
        storage.create_subject("50x off".to_string()).await.unwrap();

        let found = storage
            .list_subjects_with_pagination(SubjectListQuery {
                page: None,
                size: None,
                search: Some("50%".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(found.items.len(), 1);
        assert_eq!(found.items[0].name, "50% off");
    }
}
