//! 标注存储服务 - 业务能力层
//!
//! 只负责"存标注"能力：按题目ID维护有序的标注列表，并通过注入的
//! 持久化端口落盘。不关心当前浏览到哪道题，也不关心表单。

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{AppResult, StoreError};
use crate::infrastructure::StoragePort;
use crate::models::Annotation;

/// 标注存储
///
/// 职责：
/// - 维护 题目ID -> 标注列表 的映射（键按插入顺序）
/// - 追加 / 原位覆盖 / 按位删除单条标注
/// - 每次变更后整体持久化；持久化失败时回滚内存状态
///
/// 列表内顺序即创建顺序；删除使后续索引前移一位；列表删空时
/// 整个键从映射中移除。
pub struct AnnotationStore {
    storage: Box<dyn StoragePort>,
    annotations: IndexMap<String, Vec<Annotation>>,
}

impl std::fmt::Debug for AnnotationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationStore")
            .field("annotations", &self.annotations)
            .finish_non_exhaustive()
    }
}

impl AnnotationStore {
    /// 从持久化端口加载存储
    ///
    /// 端口中没有数据块时从空映射开始；数据块损坏时报错，
    /// 不会静默丢弃已有标注。
    pub fn load(storage: Box<dyn StoragePort>) -> AppResult<Self> {
        let annotations = match storage
            .load()
            .map_err(|e| StoreError::PersistFailed { source: e.into() })?
        {
            Some(blob) => serde_json::from_str(&blob)
                .map_err(|e| StoreError::CorruptBlob { source: e })?,
            None => IndexMap::new(),
        };

        Ok(Self {
            storage,
            annotations,
        })
    }

    /// 保存一条标注
    ///
    /// # 参数
    /// - `question_id`: 所属题目ID
    /// - `selected`: 当前选中的标注索引；None 表示新建
    /// - `annotation`: 标注内容
    ///
    /// # 返回
    /// 返回标注最终所在的索引，调用方据此更新选择状态。
    /// 新建时追加到列表末尾；有选中时原位覆盖，选中索引已失效则报错。
    pub fn save(
        &mut self,
        question_id: &str,
        selected: Option<usize>,
        annotation: Annotation,
    ) -> AppResult<usize> {
        if annotation.question_id != question_id {
            return Err(StoreError::QuestionIdMismatch {
                key: question_id.to_string(),
                annotation_id: annotation.question_id,
            }
            .into());
        }

        let existing = self.annotations.get(question_id).map_or(0, Vec::len);
        if let Some(index) = selected {
            if index >= existing {
                return Err(StoreError::IndexOutOfRange {
                    question_id: question_id.to_string(),
                    index,
                    len: existing,
                }
                .into());
            }
        }

        let snapshot = self.annotations.clone();
        let list = self.annotations.entry(question_id.to_string()).or_default();
        let index = match selected {
            Some(index) => {
                list[index] = annotation;
                index
            }
            None => {
                list.push(annotation);
                list.len() - 1
            }
        };

        self.commit(snapshot)?;
        debug!("已保存标注: 题目 {} | 索引 {}", question_id, index);
        Ok(index)
    }

    /// 删除一条标注
    ///
    /// 按位置删除，后续索引前移一位；列表删空时移除整个键。
    /// 索引已失效（过期的界面状态）时记录警告并按无操作处理。
    ///
    /// # 返回
    /// 是否真正删除了一条标注
    pub fn delete(&mut self, question_id: &str, index: usize) -> AppResult<bool> {
        let len = self.annotations.get(question_id).map_or(0, Vec::len);
        if index >= len {
            warn!(
                "忽略失效的删除请求: 题目 {} | 索引 {} (共 {} 条)",
                question_id, index, len
            );
            return Ok(false);
        }

        let snapshot = self.annotations.clone();
        if let Some(list) = self.annotations.get_mut(question_id) {
            list.remove(index);
            if list.is_empty() {
                // shift_remove 保持其余键的插入顺序
                self.annotations.shift_remove(question_id);
            }
        }

        self.commit(snapshot)?;
        debug!("已删除标注: 题目 {} | 索引 {}", question_id, index);
        Ok(true)
    }

    /// 获取某道题目的标注列表
    pub fn list(&self, question_id: &str) -> &[Annotation] {
        self.annotations
            .get(question_id)
            .map_or(&[], Vec::as_slice)
    }

    /// 全部标注数量
    pub fn total(&self) -> usize {
        self.annotations.values().map(Vec::len).sum()
    }

    /// 按 键插入顺序 + 列表顺序 遍历全部标注
    pub fn iter_all(&self) -> impl Iterator<Item = &Annotation> {
        self.annotations.values().flatten()
    }

    /// 持久化当前映射；失败时恢复快照
    fn commit(&mut self, snapshot: IndexMap<String, Vec<Annotation>>) -> AppResult<()> {
        let blob = serde_json::to_string(&self.annotations)
            .map_err(|e| StoreError::PersistFailed { source: e.into() })?;

        if let Err(e) = self.storage.save(&blob) {
            self.annotations = snapshot;
            return Err(StoreError::PersistFailed { source: e.into() }.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::infrastructure::MemoryStorage;
    use crate::models::{AnnotationForm, QaPair};
    use anyhow::Result;
    use chrono::Utc;

    fn annotation(question_id: &str, content: &str) -> Annotation {
        AnnotationForm {
            modified_content: content.to_string(),
            ..Default::default()
        }
        .into_annotation(question_id, Utc::now())
    }

    fn empty_store() -> AnnotationStore {
        AnnotationStore::load(Box::new(MemoryStorage::new())).unwrap()
    }

    /// 保存必定失败的端口，用于验证回滚
    struct FailingStorage;

    impl StoragePort for FailingStorage {
        fn load(&self) -> Result<Option<String>> {
            Ok(None)
        }

        fn save(&self, _blob: &str) -> Result<()> {
            anyhow::bail!("磁盘已满")
        }
    }

    #[test]
    fn test_save_without_selection_appends() {
        let mut store = empty_store();

        let i0 = store.save("p1", None, annotation("p1", "v1")).unwrap();
        let i1 = store.save("p1", None, annotation("p1", "v2")).unwrap();

        assert_eq!((i0, i1), (0, 1));
        assert_eq!(store.list("p1").len(), 2);
        assert_eq!(store.list("p1")[1].modified_content, "v2");
    }

    #[test]
    fn test_save_with_selection_replaces_in_place() {
        let mut store = empty_store();
        store.save("p1", None, annotation("p1", "v1")).unwrap();
        store.save("p1", None, annotation("p1", "v2")).unwrap();
        let before = store.list("p1")[1].clone();

        let index = store.save("p1", Some(0), annotation("p1", "v1-new")).unwrap();

        assert_eq!(index, 0);
        assert_eq!(store.list("p1").len(), 2);
        assert_eq!(store.list("p1")[0].modified_content, "v1-new");
        // 其余条目不受影响
        assert_eq!(store.list("p1")[1], before);
    }

    #[test]
    fn test_save_with_stale_selection_fails() {
        let mut store = empty_store();
        store.save("p1", None, annotation("p1", "v1")).unwrap();

        let err = store.save("p1", Some(5), annotation("p1", "v2")).unwrap_err();

        assert!(matches!(
            err,
            AppError::Store(StoreError::IndexOutOfRange { index: 5, len: 1, .. })
        ));
        assert_eq!(store.list("p1").len(), 1);
    }

    #[test]
    fn test_save_rejects_mismatched_question_id() {
        let mut store = empty_store();

        let err = store.save("p1", None, annotation("p2", "v1")).unwrap_err();

        assert!(matches!(
            err,
            AppError::Store(StoreError::QuestionIdMismatch { .. })
        ));
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_delete_shifts_later_indices() {
        let mut store = empty_store();
        for content in ["v1", "v2", "v3"] {
            store.save("p1", None, annotation("p1", content)).unwrap();
        }

        assert!(store.delete("p1", 0).unwrap());

        let list = store.list("p1");
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].modified_content, "v2");
        assert_eq!(list[1].modified_content, "v3");
    }

    #[test]
    fn test_delete_last_annotation_removes_key() {
        let mut store = empty_store();
        store.save("p1", None, annotation("p1", "fix typo")).unwrap();

        assert!(store.delete("p1", 0).unwrap());

        assert_eq!(store.total(), 0);
        assert!(store.iter_all().next().is_none());
        // 键已整体移除，而不是留下空列表
        assert_eq!(
            serde_json::to_string(&store.annotations).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_delete_stale_index_is_noop() {
        let mut store = empty_store();
        store.save("p1", None, annotation("p1", "v1")).unwrap();

        assert!(!store.delete("p1", 3).unwrap());
        assert!(!store.delete("p9", 0).unwrap());
        assert_eq!(store.list("p1").len(), 1);
    }

    #[test]
    fn test_failed_persist_rolls_back_memory_state() {
        let mut store = AnnotationStore::load(Box::new(FailingStorage)).unwrap();

        let err = store.save("p1", None, annotation("p1", "v1")).unwrap_err();

        assert!(matches!(
            err,
            AppError::Store(StoreError::PersistFailed { .. })
        ));
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_store_survives_reload_from_same_blob() {
        let storage = MemoryStorage::new();
        let mut store = AnnotationStore::load(Box::new(MemoryStorage::new())).unwrap();
        let mut anno = annotation("p1", "fix typo");
        anno.qa_pairs = vec![QaPair {
            question: "What is N?".to_string(),
            answer: "N≤1e5".to_string(),
        }];
        store.save("p1", None, anno.clone()).unwrap();

        // 把数据块搬到新端口，模拟重启后加载
        let blob = serde_json::to_string(&store.annotations).unwrap();
        storage.save(&blob).unwrap();
        let reloaded = AnnotationStore::load(Box::new(storage)).unwrap();

        assert_eq!(reloaded.list("p1"), &[anno]);
    }

    #[test]
    fn test_iter_all_follows_key_insertion_order() {
        let mut store = empty_store();
        store.save("p2", None, annotation("p2", "b1")).unwrap();
        store.save("p1", None, annotation("p1", "a1")).unwrap();
        store.save("p2", None, annotation("p2", "b2")).unwrap();

        let contents: Vec<&str> = store
            .iter_all()
            .map(|a| a.modified_content.as_str())
            .collect();

        assert_eq!(contents, ["b1", "b2", "a1"]);
    }

    #[test]
    fn test_load_rejects_corrupt_blob() {
        let storage = MemoryStorage::with_blob("not json");

        let err = AnnotationStore::load(Box::new(storage)).unwrap_err();

        assert!(matches!(
            err,
            AppError::Store(StoreError::CorruptBlob { .. })
        ));
    }
}
