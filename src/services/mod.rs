pub mod attendances;
pub mod auth;
pub mod groups;
pub mod lessons;
pub mod media;
pub mod subjects;
pub mod users;

pub use attendances::AttendanceService;
pub use auth::AuthService;
pub use groups::GroupService;
pub use lessons::LessonService;
pub use media::MediaService;
pub use subjects::SubjectService;
pub use users::UserService;
