//! 按角色收窄的用户视图路由
//!
//! /teachers /students /parents /admins 四组视图共用 UserService，
//! 仅 role_scope 不同：创建强制该角色，列表只出该角色，
//! 取到其他角色的记录一律按 404 处理。

use actix_web::web;

macro_rules! role_view {
    ($mod_name:ident, $path:literal, $role:expr) => {
        pub mod $mod_name {
            use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
            use once_cell::sync::Lazy;

            use crate::middlewares;
            use crate::models::users::entities::UserRole;
            use crate::models::users::requests::{
                CreateUserRequest, UpdateUserRequest, UserListParams,
            };
            use crate::services::UserService;
            use crate::utils::SafeIDI64;

            static SERVICE: Lazy<UserService> = Lazy::new(|| UserService::new_scoped($role));

            pub async fn list(
                req: HttpRequest,
                query: web::Query<UserListParams>,
            ) -> ActixResult<HttpResponse> {
                SERVICE.list_users(query.into_inner(), &req).await
            }

            pub async fn create(
                req: HttpRequest,
                user_data: web::Json<CreateUserRequest>,
            ) -> ActixResult<HttpResponse> {
                SERVICE.create_user(user_data.into_inner(), &req).await
            }

            pub async fn get(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
                SERVICE.get_user(user_id.0, &req).await
            }

            pub async fn update(
                req: HttpRequest,
                user_id: SafeIDI64,
                update_data: web::Json<UpdateUserRequest>,
            ) -> ActixResult<HttpResponse> {
                SERVICE
                    .update_user(user_id.0, update_data.into_inner(), &req)
                    .await
            }

            pub async fn delete(req: HttpRequest, user_id: SafeIDI64) -> ActixResult<HttpResponse> {
                SERVICE.delete_user(user_id.0, &req).await
            }

            pub fn configure(cfg: &mut web::ServiceConfig) {
                cfg.service(
                    web::scope($path)
                        .wrap(middlewares::RequireJWT)
                        .service(
                            web::scope("")
                                .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                                .route("", web::get().to(list))
                                .route("", web::post().to(create))
                                .route("/{id}", web::get().to(get))
                                .route("/{id}", web::put().to(update))
                                .route("/{id}", web::delete().to(delete)),
                        ),
                );
            }
        }
    };
}

role_view!(teachers, "/api/v1/teachers", UserRole::Teacher);
role_view!(students, "/api/v1/students", UserRole::Student);
role_view!(parents, "/api/v1/parents", UserRole::Parent);
role_view!(admins, "/api/v1/admins", UserRole::Admin);

// 配置路由
pub fn configure_role_view_routes(cfg: &mut web::ServiceConfig) {
    teachers::configure(cfg);
    students::configure(cfg);
    parents::configure(cfg);
    admins::configure(cfg);
}
