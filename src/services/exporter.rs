//! 标注导出服务 - 业务能力层
//!
//! 只负责"导出"能力：把整个存储展平成 JSONL 文本。

use crate::error::{AppResult, ExportError};
use crate::models::Annotation;
use crate::services::annotation_store::AnnotationStore;

/// 导出全部标注为 JSONL 文本
///
/// 展平顺序：键的插入顺序在外，列表顺序在内；每条标注一行。
/// 存储为空时报 [`ExportError::Empty`]，调用方据此向用户提示，
/// 不产生任何输出。
pub fn export_jsonl(store: &AnnotationStore) -> AppResult<String> {
    if store.total() == 0 {
        return Err(ExportError::Empty.into());
    }

    let mut lines = Vec::with_capacity(store.total());
    for annotation in store.iter_all() {
        let line = serde_json::to_string(annotation)
            .map_err(|e| ExportError::SerializeFailed { source: e })?;
        lines.push(line);
    }

    Ok(lines.join("\n"))
}

/// 解析导出的 JSONL 文本
///
/// 按行拆分并逐行反序列化，空行跳过。
pub fn parse_export(blob: &str) -> AppResult<Vec<Annotation>> {
    let mut annotations = Vec::new();
    for (line_no, line) in blob.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let annotation = serde_json::from_str(line).map_err(|e| ExportError::ParseFailed {
            line: line_no + 1,
            source: e,
        })?;
        annotations.push(annotation);
    }
    Ok(annotations)
}
