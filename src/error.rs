use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    MissingFile,
    Analysis(String),
    NotFound(String),
    BadRequest(String),
    Config(String),
    Internal(String),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingFile => write!(f, "No file uploaded."),
            AppError::Analysis(msg) => write!(f, "Analysis error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::MissingFile | AppError::BadRequest(_) => {
                HttpResponse::BadRequest().json(serde_json::json!({ "error": self.to_string() }))
            }
            // 404 для картинок отдаётся простым текстом
            AppError::NotFound(msg) => HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(msg.clone()),
            _ => {
                // Детали остаются в логе, клиент видит общее сообщение
                log::error!("Error processing the document: {}", self);
                HttpResponse::InternalServerError()
                    .json(serde_json::json!({ "error": "Error processing the document." }))
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        AppError::Internal(msg)
    }
}

pub type AppResult<T> = Result<T, AppError>;
