use crate::error::{AppError, AppResult};
use crate::services::{StorageService, content_type_for};
use actix_files::NamedFile;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

/// Отдаёт сохранённое изображение по имени файла.
/// Content-Type берётся из фиксированной таблицы расширений,
/// тело файла стримится через NamedFile.
pub async fn get_image(
    req: HttpRequest,
    path: web::Path<String>,
    storage: web::Data<StorageService>,
) -> AppResult<HttpResponse> {
    let filename = path.into_inner();
    let full_path = storage.resolve(&filename);

    let file = NamedFile::open_async(&full_path)
        .await
        .map_err(|_| AppError::NotFound("Image not found".to_string()))?;

    let mut response = file.into_response(&req);
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static(content_type_for(&filename)),
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use tempfile::TempDir;

    async fn get(
        dir: &TempDir,
        uri: &str,
    ) -> actix_web::dev::ServiceResponse {
        let storage = StorageService::new(dir.path().to_path_buf());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .route("/image/{filename}", web::get().to(get_image)),
        )
        .await;
        let req = test::TestRequest::get().uri(uri).to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn serves_stored_image_with_inferred_content_type() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("photo.png"), b"png-bytes").unwrap();

        let resp = get(&dir, "/image/photo.png").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "image/png"
        );
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"png-bytes");
    }

    #[actix_web::test]
    async fn unknown_extension_is_served_as_octet_stream() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("doc.xyz"), b"payload").unwrap();

        let resp = get(&dir, "/image/doc.xyz").await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/octet-stream"
        );
    }

    #[actix_web::test]
    async fn missing_image_returns_plain_text_404() {
        let dir = TempDir::new().unwrap();

        let resp = get(&dir, "/image/does-not-exist.png").await;
        assert_eq!(resp.status(), 404);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"Image not found");
    }
}
