// src/constants.rs

pub const DEFAULT_STORAGE_DIR: &str = "./saved_images";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MODEL_ID: &str = "prebuilt-layout";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

// Azure Document Intelligence REST surface
pub const ANALYSIS_API_VERSION: &str = "2023-07-31";
pub const API_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
pub const OPERATION_LOCATION_HEADER: &str = "operation-location";

// Расширения изображений и их Content-Type для отдачи файлов
pub const IMAGE_CONTENT_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
];
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";
