use crate::config::AnalysisConfig;
use crate::constants;
use crate::error::AppError;
use crate::models::{
    AnalysisResult, AnalyzeOperation, CellEntry, DocumentEntry, FieldEntry, PageEntry,
    RawAnalyzeResult, TableEntry,
};
use crate::utils::encode_bytes_to_base64;
use async_trait::async_trait;
use log::info;
use serde_json::Value;
use std::time::Duration;

#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn analyze(&self, document: &[u8]) -> Result<AnalysisResult, AppError>;
    fn provider_id(&self) -> &'static str;
}

/// Провайдер поверх REST API Azure Document Intelligence:
/// submit -> operation-location -> poll до succeeded/failed.
pub struct AzureAnalysisProvider {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model_id: String,
    poll_interval: Duration,
}

impl AzureAnalysisProvider {
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AppError> {
        if config.endpoint.is_empty() || config.api_key.is_empty() {
            return Err(AppError::Config(
                "ANALYSIS_ENDPOINT and ANALYSIS_API_KEY must be set".to_string(),
            ));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model_id: config.model_id.clone(),
            poll_interval: config.poll_interval,
        })
    }

    fn analyze_url(&self) -> String {
        format!(
            "{}/formrecognizer/documentModels/{}:analyze?api-version={}",
            self.endpoint,
            self.model_id,
            constants::ANALYSIS_API_VERSION
        )
    }

    async fn submit(&self, document: &[u8]) -> Result<String, AppError> {
        let request_body = serde_json::json!({
            "base64Source": encode_bytes_to_base64(document)
        });

        let resp = self
            .client
            .post(self.analyze_url())
            .header(constants::API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AppError::Analysis(format!("Failed to submit document: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::Analysis(format!(
                "Submission rejected, status: {}, body: {}",
                status, text
            )));
        }

        resp.headers()
            .get(constants::OPERATION_LOCATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::Analysis("Submission response missing operation-location".to_string())
            })
    }

    async fn poll(&self, operation_url: &str) -> Result<RawAnalyzeResult, AppError> {
        loop {
            tokio::time::sleep(self.poll_interval).await;

            let resp = self
                .client
                .get(operation_url)
                .header(constants::API_KEY_HEADER, &self.api_key)
                .send()
                .await
                .map_err(|e| AppError::Analysis(format!("Failed to poll operation: {}", e)))?;

            let status = resp.status();
            let text = resp
                .text()
                .await
                .map_err(|e| AppError::Analysis(format!("Failed to read poll response: {}", e)))?;

            if !status.is_success() {
                return Err(AppError::Analysis(format!(
                    "Polling failed, status: {}, body: {}",
                    status, text
                )));
            }

            let operation: AnalyzeOperation = serde_json::from_str(&text)
                .map_err(|e| AppError::Analysis(format!("Failed to parse poll response: {}", e)))?;

            info!("status: {}", operation.status);

            match operation.status.as_str() {
                "succeeded" => return Ok(operation.analyze_result.unwrap_or_default()),
                "failed" => {
                    let detail = operation
                        .error
                        .map(|e| e.to_string())
                        .unwrap_or_else(|| "unknown error".to_string());
                    return Err(AppError::Analysis(format!("Analysis failed: {}", detail)));
                }
                _ => continue,
            }
        }
    }
}

#[async_trait]
impl AnalysisProvider for AzureAnalysisProvider {
    async fn analyze(&self, document: &[u8]) -> Result<AnalysisResult, AppError> {
        let operation_url = self.submit(document).await?;
        let raw = self.poll(&operation_url).await?;
        Ok(normalize(raw))
    }

    fn provider_id(&self) -> &'static str {
        "azure-document-intelligence"
    }
}

/// Приводит сырой ответ сервиса к фиксированной форме из трёх секций.
/// Отсутствующие секции становятся пустыми списками, порядок не меняется.
pub fn normalize(raw: RawAnalyzeResult) -> AnalysisResult {
    let documents = raw
        .documents
        .unwrap_or_default()
        .into_iter()
        .map(|doc| DocumentEntry {
            doc_type: doc.doc_type.unwrap_or_default(),
            fields: doc
                .fields
                .unwrap_or_default()
                .into_iter()
                .map(|(name, field)| field_entry(name, &field))
                .collect(),
        })
        .collect();

    let pages = raw
        .pages
        .unwrap_or_default()
        .into_iter()
        .map(|page| PageEntry {
            page_number: page.page_number,
            width: page.width,
            height: page.height,
            unit: page.unit,
        })
        .collect();

    let tables = raw
        .tables
        .unwrap_or_default()
        .into_iter()
        .map(|table| TableEntry {
            column_count: table.column_count,
            row_count: table.row_count,
            cells: table
                .cells
                .into_iter()
                .map(|cell| CellEntry {
                    row_index: cell.row_index,
                    column_index: cell.column_index,
                    content: cell.content.unwrap_or_default(),
                })
                .collect(),
        })
        .collect();

    AnalysisResult {
        documents,
        pages,
        tables,
    }
}

/// Поле документа несёт типизированное значение в члене `value*`
/// (valueString, valueNumber, valueObject, ...). Берём его как есть,
/// иначе откатываемся на `content`.
fn field_entry(name: String, field: &Value) -> FieldEntry {
    let value = field
        .as_object()
        .and_then(|obj| {
            obj.iter()
                .find(|(k, _)| k.starts_with("value"))
                .map(|(_, v)| v.clone())
                .or_else(|| obj.get("content").cloned())
        })
        .unwrap_or(Value::Null);

    FieldEntry {
        name,
        value,
        confidence: field.get("confidence").and_then(Value::as_f64),
    }
}
