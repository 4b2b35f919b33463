use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::MediaService;
use crate::config::AppConfig;
use crate::errors::SchoolSysError;
use crate::models::ErrorCode;
use crate::models::{ApiResponse, media::responses::MediaUploadResponse};
use crate::utils::validate_magic_bytes;

/// 处理头像上传
///
/// 只接受 multipart 表单中名为 file 的第一个字段，
/// 首个数据块校验魔术字节，写盘过程中校验累计大小。
pub async fn handle_upload(
    _service: &MediaService,
    _req: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let media_dir = format!("{}/users", config.media.dir);
    let max_size = config.media.max_size;

    // 确保存储目录存在
    if !Path::new(&media_dir).exists()
        && let Err(e) = fs::create_dir_all(&media_dir)
    {
        tracing::error!("{}", SchoolSysError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::InternalServerError,
                "创建媒体目录失败",
            )),
        );
    }

    let mut file_uploaded = false;
    let mut stored_name = String::new();
    let mut file_size: usize = 0;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        if name == "file" {
            if file_uploaded {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::MediaInvalid,
                    "Only one file can be uploaded at a time",
                )));
            }
            file_uploaded = true;

            let original_name = content_disposition
                .and_then(|cd| cd.get_filename())
                .map(|s| s.to_string())
                .unwrap_or_default();

            let extension = Path::new(&original_name)
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| format!(".{}", ext.to_lowercase()))
                .unwrap_or_default();

            stored_name = format!("{}{}", Uuid::new_v4(), extension);
            let file_path = format!("{media_dir}/{stored_name}");
            let mut f = match File::create(&file_path) {
                Ok(file) => file,
                Err(e) => {
                    tracing::error!("{}", SchoolSysError::file_operation(format!("{e}")));
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::<()>::error_empty(
                            ErrorCode::InternalServerError,
                            "文件创建失败",
                        ),
                    ));
                }
            };

            let mut total_size: usize = 0;
            let mut first_chunk = true;
            while let Some(chunk) = field.next().await {
                let data = chunk?;

                // 第一个 chunk 时验证魔术字节，只接受图片
                if first_chunk {
                    first_chunk = false;
                    if !validate_magic_bytes(&data, &extension) {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::MediaInvalid,
                            "文件内容与扩展名不匹配或不是图片",
                        )));
                    }
                }

                total_size += data.len();
                if total_size > max_size {
                    let _ = fs::remove_file(&file_path);
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::MediaTooLarge,
                        "File size exceeds the limit",
                    )));
                }
                f.write_all(&data)?;
            }
            file_size = total_size;
        }
    }

    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::MediaInvalid,
            "No file found in upload payload",
        )));
    }

    let response = MediaUploadResponse {
        url: format!("{}/users/{}", config.media.url_prefix, stored_name),
        filename: stored_name,
        size: file_size as u64,
    };

    Ok(HttpResponse::Created().json(ApiResponse::success(response, "File uploaded successfully")))
}
