pub use super::attendances::Entity as Attendances;
pub use super::group_students::Entity as GroupStudents;
pub use super::groups::Entity as Groups;
pub use super::lessons::Entity as Lessons;
pub use super::revoked_tokens::Entity as RevokedTokens;
pub use super::subjects::Entity as Subjects;
pub use super::users::Entity as Users;
