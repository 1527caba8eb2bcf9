use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::AnalyzeResponse;
use crate::services::{AnalysisProvider, StorageService};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, web};
use futures::StreamExt;
use log::{error, info};

/// Обрабатывает POST /analyze: принимает multipart-поле `file`,
/// отправляет его во внешний сервис анализа, сохраняет оригинал
/// на диск и возвращает URL картинки вместе с нормализованным результатом.
pub async fn analyze_document(
    mut payload: Multipart,
    config: web::Data<Config>,
    storage: web::Data<StorageService>,
    provider: web::Data<dyn AnalysisProvider>,
) -> AppResult<HttpResponse> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(item) = payload.next().await {
        let mut field = item
            .map_err(|e| AppError::BadRequest(format!("Failed to read multipart field: {}", e)))?;

        let is_file = field.name() == Some("file") && upload.is_none();
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        // Каждое поле вычитывается до конца, буферизуется только `file`
        let mut buffer: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
            if is_file {
                buffer.extend_from_slice(&chunk);
            }
        }

        if is_file {
            let Some(name) = filename else {
                return Err(AppError::MissingFile);
            };
            upload = Some((name, buffer));
        }
    }

    let Some((filename, bytes)) = upload else {
        return Err(AppError::MissingFile);
    };

    info!(
        "Analyzing uploaded file '{}' ({} bytes) via {}",
        filename,
        bytes.len(),
        provider.provider_id()
    );

    // При ошибке анализа ничего не сохраняется
    let result = provider.analyze(&bytes).await.map_err(|e| {
        error!("Error processing the document: {}", e);
        e
    })?;

    storage.save(&filename, &bytes).await?;

    let image_url = format!(
        "{}/image/{}",
        config.base_url.trim_end_matches('/'),
        filename
    );

    Ok(HttpResponse::Ok().json(AnalyzeResponse { image_url, result }))
}
