pub mod me;
pub mod token;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::auth::requests::{BlacklistRequest, RefreshRequest, TokenObtainRequest};
use crate::storage::Storage;

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 凭据换令牌对
    pub async fn obtain_token(
        &self,
        obtain_request: TokenObtainRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        token::handle_obtain_token(self, obtain_request, request).await
    }

    // 刷新访问令牌
    pub async fn refresh_token(
        &self,
        refresh_request: RefreshRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        token::handle_refresh_token(self, refresh_request, request).await
    }

    // 吊销刷新令牌
    pub async fn blacklist_token(
        &self,
        blacklist_request: BlacklistRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        token::handle_blacklist_token(self, blacklist_request, request).await
    }

    // 获取当前用户信息
    pub async fn get_me(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        me::handle_get_me(self, request).await
    }
}
