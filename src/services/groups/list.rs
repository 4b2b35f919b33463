use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GroupService;
use crate::models::{
    ApiResponse, ErrorCode,
    groups::requests::{GroupListParams, GroupListQuery},
};

pub async fn list_groups(
    service: &GroupService,
    params: GroupListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = GroupListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        teacher_id: params.teacher_id,
        subject_id: params.subject_id,
        is_active: params.is_active,
        search: params.search,
    };

    match storage.list_groups_with_pagination(query).await {
        Ok(response) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "获取班组列表成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to list groups: {e}"),
            )),
        ),
    }
}
