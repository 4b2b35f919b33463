use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::groups::requests::{
    CreateGroupRequest, EnrollStudentRequest, GroupListParams, UpdateGroupRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::GroupService;
use crate::utils::SafeIDI64;

use crate::define_safe_i64_extractor;

// 用于从请求路径中安全地提取 student_id
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");

// 懒加载的全局 GroupService 实例
static GROUP_SERVICE: Lazy<GroupService> = Lazy::new(GroupService::new_lazy);

pub async fn list_groups(
    req: HttpRequest,
    query: web::Query<GroupListParams>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_groups(query.into_inner(), &req).await
}

pub async fn create_group(
    req: HttpRequest,
    group_data: web::Json<CreateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.create_group(group_data.into_inner(), &req).await
}

pub async fn get_group(req: HttpRequest, group_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.get_group(group_id.0, &req).await
}

pub async fn update_group(
    req: HttpRequest,
    group_id: SafeIDI64,
    update_data: web::Json<UpdateGroupRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .update_group(group_id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_group(req: HttpRequest, group_id: SafeIDI64) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.delete_group(group_id.0, &req).await
}

pub async fn list_group_students(
    req: HttpRequest,
    group_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE.list_students(group_id.0, &req).await
}

pub async fn enroll_student(
    req: HttpRequest,
    group_id: SafeIDI64,
    enroll_data: web::Json<EnrollStudentRequest>,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .enroll_student(group_id.0, enroll_data.into_inner().student_id, &req)
        .await
}

pub async fn unenroll_student(
    req: HttpRequest,
    group_id: SafeIDI64,
    student_id: SafeStudentIdI64,
) -> ActixResult<HttpResponse> {
    GROUP_SERVICE
        .unenroll_student(group_id.0, student_id.0, &req)
        .await
}

// 配置路由
pub fn configure_group_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/groups")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::staff_roles()))
                    .route("", web::get().to(list_groups))
                    .route("", web::post().to(create_group))
                    .route("/{id}", web::get().to(get_group))
                    .route("/{id}", web::put().to(update_group))
                    .route("/{id}", web::delete().to(delete_group))
                    .route("/{id}/students", web::get().to(list_group_students))
                    .route("/{id}/students", web::post().to(enroll_student))
                    .route(
                        "/{id}/students/{student_id}",
                        web::delete().to(unenroll_student),
                    ),
            ),
    );
}
