use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---- Нормализованный результат анализа (собственная форма сервиса) ----

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisResult {
    pub documents: Vec<DocumentEntry>,
    pub pages: Vec<PageEntry>,
    pub tables: Vec<TableEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentEntry {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub fields: Vec<FieldEntry>,
}

/// Значение поля передаётся как есть: вложенные объекты и массивы
/// не разворачиваются и не валидируются.
#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry {
    pub name: String,
    pub value: Value,
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    pub page_number: Option<u32>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub column_count: u32,
    pub row_count: u32,
    pub cells: Vec<CellEntry>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellEntry {
    pub row_index: u32,
    pub column_index: u32,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub image_url: String,
    pub result: AnalysisResult,
}

// ---- Сырые формы ответа внешнего сервиса анализа ----

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOperation {
    pub status: String,
    #[serde(default)]
    pub analyze_result: Option<RawAnalyzeResult>,
    #[serde(default)]
    pub error: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawAnalyzeResult {
    #[serde(default)]
    pub documents: Option<Vec<RawDocument>>,
    #[serde(default)]
    pub pages: Option<Vec<RawPage>>,
    #[serde(default)]
    pub tables: Option<Vec<RawTable>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub doc_type: Option<String>,
    // serde_json собран с preserve_order: порядок полей сервиса сохраняется
    #[serde(default)]
    pub fields: Option<serde_json::Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPage {
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTable {
    #[serde(default)]
    pub column_count: u32,
    #[serde(default)]
    pub row_count: u32,
    #[serde(default)]
    pub cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCell {
    #[serde(default)]
    pub row_index: u32,
    #[serde(default)]
    pub column_index: u32,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_response_uses_camel_case_keys() {
        let resp = AnalyzeResponse {
            image_url: "http://localhost:3000/image/photo.png".to_string(),
            result: AnalysisResult::default(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("imageUrl").is_some());
        assert!(json["result"]["documents"].is_array());
        assert!(json["result"]["pages"].is_array());
        assert!(json["result"]["tables"].is_array());
    }

    #[test]
    fn operation_envelope_tolerates_missing_result() {
        let op: AnalyzeOperation =
            serde_json::from_str(r#"{ "status": "running" }"#).unwrap();
        assert_eq!(op.status, "running");
        assert!(op.analyze_result.is_none());
    }

    #[test]
    fn raw_table_defaults_missing_counts_to_zero() {
        let table: RawTable = serde_json::from_str(r#"{ "cells": [] }"#).unwrap();
        assert_eq!(table.column_count, 0);
        assert_eq!(table.row_count, 0);
    }
}
