pub mod serve;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct MediaService;

impl MediaService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 上传用户头像
    pub async fn handle_upload(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload(self, request, payload).await
    }

    // 按文件名读取头像
    pub async fn handle_serve(
        &self,
        request: &HttpRequest,
        filename: String,
    ) -> ActixResult<HttpResponse> {
        serve::handle_serve(self, request, filename).await
    }
}
