use crate::constants;
use crate::error::AppError;
use log::info;
use std::path::{Path, PathBuf};

/// Плоский каталог сохранённых изображений. Ключ — имя файла клиента,
/// повторная загрузка с тем же именем перезаписывает файл.
#[derive(Clone)]
pub struct StorageService {
    dir: PathBuf,
}

impl StorageService {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Каталог создаётся один раз на старте процесса.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, AppError> {
        let path = self.dir.join(filename);
        tokio::fs::write(&path, bytes).await?;
        info!("Saved image to: {:?}", path);
        Ok(path)
    }

    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.dir.join(filename)
    }
}

pub fn content_type_for(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match ext.as_deref() {
        Some(ext) => constants::IMAGE_CONTENT_TYPES
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, content_type)| *content_type)
            .unwrap_or(constants::FALLBACK_CONTENT_TYPE),
        None => constants::FALLBACK_CONTENT_TYPE,
    }
}
