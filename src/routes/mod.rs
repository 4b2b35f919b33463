pub mod auth;

pub mod users;

pub mod role_views;

pub mod subjects;

pub mod groups;

pub mod lessons;

pub mod attendances;

pub mod media;

pub use attendances::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use groups::configure_group_routes;
pub use lessons::configure_lesson_routes;
pub use media::configure_media_routes;
pub use role_views::configure_role_view_routes;
pub use subjects::configure_subject_routes;
pub use users::configure_user_routes;
