use std::sync::Arc;

use actix_web::{delete, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::UploadParams,
    models::dto::response::{MessageResponse, UploadResponse},
};

/// Uploads raw image bytes; the key is derived from the filename.
#[post("/s3")]
pub async fn upload_image(
    state: web::Data<Arc<AppState>>,
    query: web::Query<UploadParams>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let file_key = format!("quiz_images/{}", query.filename);
    let file_url = state.storage.upload(body.to_vec(), &file_key).await?;

    Ok(HttpResponse::Ok().json(UploadResponse { file_url, file_key }))
}

/// Overwrite upload under an existing key. No versioning.
#[put("/s3/{file_key:.*}")]
pub async fn update_image(
    state: web::Data<Arc<AppState>>,
    file_key: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let file_key = file_key.into_inner();
    let file_url = state.storage.upload(body.to_vec(), &file_key).await?;

    Ok(HttpResponse::Ok().json(UploadResponse { file_url, file_key }))
}

#[delete("/s3/delete/{file_key:.*}")]
pub async fn delete_image(
    state: web::Data<Arc<AppState>>,
    file_key: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.storage.delete(&file_key).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("File deleted successfully")))
}
