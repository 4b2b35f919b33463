use serde::Serialize;

// 媒体上传响应
#[derive(Debug, Serialize)]
pub struct MediaUploadResponse {
    pub filename: String,
    pub url: String,
    pub size: u64,
}
