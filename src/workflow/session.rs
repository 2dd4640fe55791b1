//! 标注会话 - 流程层
//!
//! 定义"浏览题目并标注"的完整状态机：当前题目索引 + 标注选择，
//! 以及保存 / 删除 / 导航 / 导出之间的状态衔接。所有操作同步执行，
//! 单一逻辑线程，无并发写入者。

use chrono::Utc;
use tracing::{debug, warn};

use crate::error::{AppResult, BusinessError};
use crate::models::{Annotation, AnnotationForm, Problem};
use crate::services::annotation_store::AnnotationStore;
use crate::services::exporter;
use crate::services::renderer::{self, AnnotationItemView, FormView, ProblemView};

/// 标注选择状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// 新建标注（无选中）
    New,
    /// 编辑第 index 条已有标注
    Existing(usize),
}

/// 标注会话
///
/// 职责：
/// - 持有只读题目列表、标注存储和导航状态
/// - 切换题目时把选择重置为新建，且索引不越界、不回绕
/// - 保存后选中结果位置；删除后修正选择状态
pub struct AnnotationSession {
    problems: Vec<Problem>,
    store: AnnotationStore,
    current: usize,
    selection: Selection,
}

impl std::fmt::Debug for AnnotationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationSession")
            .field("problems", &self.problems)
            .field("store", &self.store)
            .field("current", &self.current)
            .field("selection", &self.selection)
            .finish()
    }
}

impl AnnotationSession {
    /// 创建会话
    ///
    /// 题目列表不能为空（导航状态以至少一道题为前提）。
    pub fn new(problems: Vec<Problem>, store: AnnotationStore) -> AppResult<Self> {
        if problems.is_empty() {
            return Err(BusinessError::EmptyProblemSet.into());
        }

        Ok(Self {
            problems,
            store,
            current: 0,
            selection: Selection::New,
        })
    }

    /// 当前题目
    pub fn current_problem(&self) -> &Problem {
        &self.problems[self.current]
    }

    /// 当前题目索引
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// 题目总数
    pub fn total_problems(&self) -> usize {
        self.problems.len()
    }

    /// 当前选择状态
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// 当前题目的标注列表
    pub fn annotations(&self) -> &[Annotation] {
        self.store.list(&self.current_problem().question_id)
    }

    /// 只读访问标注存储
    pub fn store(&self) -> &AnnotationStore {
        &self.store
    }

    /// 切换到下一题
    ///
    /// 已在最后一题时不动；切换成功时选择重置为新建。
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.problems.len() {
            return false;
        }
        self.current += 1;
        self.selection = Selection::New;
        true
    }

    /// 切换到上一题
    ///
    /// 已在第一题时不动；切换成功时选择重置为新建。
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        self.selection = Selection::New;
        true
    }

    /// 选中当前题目的第 index 条标注进入编辑
    ///
    /// 索引失效（过期的界面状态）时保持原状。
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.annotations().len() {
            warn!(
                "忽略失效的选择请求: 题目 {} | 索引 {}",
                self.current_problem().question_id,
                index
            );
            return false;
        }
        self.selection = Selection::Existing(index);
        true
    }

    /// 进入新建标注状态（题目不变）
    pub fn new_annotation(&mut self) {
        self.selection = Selection::New;
    }

    /// 校验并保存表单
    ///
    /// 无选中时追加，有选中时原位覆盖；保存成功后选中结果位置。
    ///
    /// # 返回
    /// 返回标注所在索引
    pub fn save_form(&mut self, form: AnnotationForm) -> AppResult<usize> {
        let question_id = self.current_problem().question_id.clone();
        let annotation = form.into_annotation(&question_id, Utc::now());

        let selected = match self.selection {
            Selection::New => None,
            Selection::Existing(index) => Some(index),
        };
        let index = self.store.save(&question_id, selected, annotation)?;

        self.selection = Selection::Existing(index);
        debug!("标注已保存: 题目 {} | 索引 {}", question_id, index);
        Ok(index)
    }

    /// 删除当前题目的第 index 条标注
    ///
    /// 调用方负责先向用户确认。删除后修正选择：删的是选中项则回到
    /// 新建；选中项在其后则索引前移一位。
    ///
    /// # 返回
    /// 是否真正删除了一条标注
    pub fn delete(&mut self, index: usize) -> AppResult<bool> {
        let question_id = self.current_problem().question_id.clone();
        let deleted = self.store.delete(&question_id, index)?;

        if deleted {
            match self.selection {
                Selection::Existing(sel) if sel == index => self.selection = Selection::New,
                Selection::Existing(sel) if sel > index => {
                    self.selection = Selection::Existing(sel - 1)
                }
                _ => {}
            }
        }
        Ok(deleted)
    }

    /// 导出全部标注为 JSONL 文本
    pub fn export(&self) -> AppResult<String> {
        exporter::export_jsonl(&self.store)
    }

    /// 当前题目的展示模型
    pub fn problem_view(&self) -> ProblemView {
        renderer::render_problem(self.current_problem(), self.current, self.problems.len())
    }

    /// 当前题目的标注列表展示模型
    pub fn annotation_list_view(&self) -> Vec<AnnotationItemView> {
        renderer::render_annotation_list(self.annotations(), self.selection)
    }

    /// 当前表单展示模型
    pub fn form_view(&self) -> FormView {
        let annotation = match self.selection {
            Selection::New => None,
            Selection::Existing(index) => self.annotations().get(index),
        };
        renderer::render_form(annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::infrastructure::MemoryStorage;

    fn problems(n: usize) -> Vec<Problem> {
        (1..=n)
            .map(|i| Problem {
                question_id: format!("p{i}"),
                question_title: format!("题目 {i}"),
                question_content: format!("内容 {i}"),
                platform: "leetcode".to_string(),
            })
            .collect()
    }

    fn session(n: usize) -> AnnotationSession {
        let store = AnnotationStore::load(Box::new(MemoryStorage::new())).unwrap();
        AnnotationSession::new(problems(n), store).unwrap()
    }

    fn form(content: &str) -> AnnotationForm {
        AnnotationForm {
            modified_content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_problem_set_is_rejected() {
        let store = AnnotationStore::load(Box::new(MemoryStorage::new())).unwrap();

        let err = AnnotationSession::new(Vec::new(), store).unwrap_err();

        assert!(matches!(
            err,
            AppError::Business(BusinessError::EmptyProblemSet)
        ));
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut session = session(3);

        assert!(!session.prev());
        assert_eq!(session.current_index(), 0);

        assert!(session.next());
        assert!(session.next());
        assert!(!session.next());
        assert_eq!(session.current_index(), 2);

        assert!(session.prev());
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_single_problem_disables_both_directions() {
        let mut session = session(1);

        assert!(!session.prev());
        assert!(!session.next());
        let view = session.problem_view();
        assert!(view.prev_disabled && view.next_disabled);
    }

    #[test]
    fn test_navigation_resets_selection() {
        let mut session = session(2);
        session.save_form(form("v1")).unwrap();
        assert_eq!(session.selection(), Selection::Existing(0));

        session.next();
        assert_eq!(session.selection(), Selection::New);

        session.prev();
        assert_eq!(session.selection(), Selection::New);
    }

    #[test]
    fn test_save_selects_result_and_overwrites_in_place() {
        let mut session = session(1);

        let i0 = session.save_form(form("v1")).unwrap();
        assert_eq!(i0, 0);
        assert_eq!(session.selection(), Selection::Existing(0));

        // 选中状态下再次保存是原位覆盖
        session.save_form(form("v1-new")).unwrap();
        assert_eq!(session.annotations().len(), 1);
        assert_eq!(session.annotations()[0].modified_content, "v1-new");

        // 回到新建后保存是追加
        session.new_annotation();
        let i1 = session.save_form(form("v2")).unwrap();
        assert_eq!(i1, 1);
        assert_eq!(session.annotations().len(), 2);
    }

    #[test]
    fn test_select_guards_stale_index() {
        let mut session = session(1);
        session.save_form(form("v1")).unwrap();
        session.new_annotation();

        assert!(session.select(0));
        assert!(!session.select(9));
        assert_eq!(session.selection(), Selection::Existing(0));
    }

    #[test]
    fn test_delete_fixes_selection() {
        let mut session = session(1);
        for content in ["v1", "v2", "v3"] {
            session.new_annotation();
            session.save_form(form(content)).unwrap();
        }

        // 选中项之前的条目被删：索引前移
        session.select(2);
        assert!(session.delete(0).unwrap());
        assert_eq!(session.selection(), Selection::Existing(1));
        assert_eq!(session.annotations()[1].modified_content, "v3");

        // 删除选中项本身：回到新建
        assert!(session.delete(1).unwrap());
        assert_eq!(session.selection(), Selection::New);
    }

    #[test]
    fn test_spec_example_save_then_delete_empties_store() {
        let mut session = session(1);

        let mut f = form("fix typo");
        f.qa_inputs[0] = ("What is N?".to_string(), "N≤1e5".to_string());
        session.save_form(f).unwrap();

        let list = session.annotations();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].question_id, "p1");
        assert_eq!(list[0].modified_content, "fix typo");
        assert_eq!(list[0].qa_pairs.len(), 1);
        assert_eq!(list[0].qa_pairs[0].question, "What is N?");
        assert_eq!(list[0].qa_pairs[0].answer, "N≤1e5");

        assert!(session.delete(0).unwrap());
        assert!(session.annotations().is_empty());
        assert_eq!(session.store().total(), 0);
    }

    #[test]
    fn test_export_flattens_all_problems() {
        let mut session = session(2);
        session.save_form(form("v1")).unwrap();
        session.next();
        session.save_form(form("v2")).unwrap();

        let blob = session.export().unwrap();

        assert_eq!(blob.lines().count(), 2);
        assert!(blob.contains("\"question_id\":\"p1\""));
        assert!(blob.contains("\"question_id\":\"p2\""));
    }

    #[test]
    fn test_export_empty_store_is_user_visible_error() {
        let session = session(1);

        assert!(session.export().is_err());
    }

    #[test]
    fn test_form_view_follows_selection() {
        let mut session = session(1);
        session.save_form(form("v1")).unwrap();

        let editing = session.form_view();
        assert_eq!(editing.modified_content, "v1");

        session.new_annotation();
        let fresh = session.form_view();
        assert!(fresh.modified_content.is_empty());
    }
}
