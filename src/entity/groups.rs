//! 班组实体
//!
//! 一个班组绑定一名教师、一个科目、单双日模式和一个时间窗口。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "groups")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub teacher_id: i64,
    pub subject_id: i64,
    pub days: String,
    pub start_date: String,
    pub end_date: String,
    pub lesson_start_time: String,
    pub lesson_end_time: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::subjects::Entity",
        from = "Column::SubjectId",
        to = "super::subjects::Column::Id"
    )]
    Subject,
    #[sea_orm(has_many = "super::lessons::Entity")]
    Lessons,
    #[sea_orm(has_many = "super::group_students::Entity")]
    GroupStudents,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::subjects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subject.def()
    }
}

impl Related<super::lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<super::group_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupStudents.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_group(self, student_count: i64) -> crate::models::groups::entities::Group {
        use crate::models::groups::entities::{Group, MeetingDays};
        use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

        Group {
            id: self.id,
            name: self.name,
            teacher_id: self.teacher_id,
            subject_id: self.subject_id,
            days: self.days.parse::<MeetingDays>().unwrap_or(MeetingDays::Odd),
            start_date: NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
                .unwrap_or_default(),
            end_date: NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").unwrap_or_default(),
            lesson_start_time: NaiveTime::parse_from_str(&self.lesson_start_time, "%H:%M")
                .unwrap_or_default(),
            lesson_end_time: NaiveTime::parse_from_str(&self.lesson_end_time, "%H:%M")
                .unwrap_or_default(),
            is_active: self.is_active,
            student_count,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
