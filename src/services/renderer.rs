//! 视图渲染服务 - 业务能力层
//!
//! 把状态渲染成展示模型（纯函数，不做 I/O）。浏览器端的页面
//! 渲染与这里的结构保持一致，便于对照测试显示契约。

use regex::Regex;
use std::sync::OnceLock;

use crate::models::{AmbiguityKeyword, Annotation, Problem, MAX_QA_PAIRS};
use crate::workflow::Selection;

/// 标注列表为空时的提示文案
pub const EMPTY_LIST_NOTICE: &str = "暂无标注";

/// 题面内容为空时的占位文案
pub const EMPTY_CONTENT_NOTICE: &str = "无内容。";

/// 题目展示模型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemView {
    /// 题目标题
    pub title: String,
    /// 进度文案，如 `问题 3 / 20`
    pub counter: String,
    /// 题面内容，换行统一替换为空格
    pub content: String,
    /// 信息栏条目（ID、平台）
    pub info_lines: Vec<String>,
    /// 上一题按钮是否禁用（已在第一题）
    pub prev_disabled: bool,
    /// 下一题按钮是否禁用（已在最后一题）
    pub next_disabled: bool,
}

/// 标注列表条目展示模型
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationItemView {
    /// 条目文案，如 `标注 #1 (08:30:00)`
    pub label: String,
    /// 是否为当前选中条目
    pub active: bool,
}

/// 表单展示模型
///
/// 选中已有标注时从记录回填，新建时全部清空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// 勾选的歧义分类
    pub checked: Vec<AmbiguityKeyword>,
    /// 修改后的题面
    pub modified_content: String,
    /// 三组问答槽位 (question, answer)
    pub qa_slots: [(String, String); MAX_QA_PAIRS],
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|\n|\r").expect("换行正则不合法"))
}

/// 渲染题目展示模型
pub fn render_problem(problem: &Problem, index: usize, total: usize) -> ProblemView {
    let content = if problem.question_content.is_empty() {
        EMPTY_CONTENT_NOTICE.to_string()
    } else {
        line_break_re()
            .replace_all(&problem.question_content, " ")
            .into_owned()
    };

    ProblemView {
        title: problem.question_title.clone(),
        counter: format!("问题 {} / {}", index + 1, total),
        content,
        info_lines: vec![
            format!("ID: {}", problem.question_id),
            format!("Platform: {}", problem.platform),
        ],
        prev_disabled: index == 0,
        next_disabled: index + 1 == total,
    }
}

/// 渲染标注列表
///
/// 条目时间取时间戳的 UTC 时分秒，与导出记录一致。
pub fn render_annotation_list(
    annotations: &[Annotation],
    selection: Selection,
) -> Vec<AnnotationItemView> {
    annotations
        .iter()
        .enumerate()
        .map(|(index, anno)| AnnotationItemView {
            label: format!(
                "标注 #{} ({})",
                index + 1,
                anno.timestamp.format("%H:%M:%S")
            ),
            active: selection == Selection::Existing(index),
        })
        .collect()
}

/// 渲染表单
pub fn render_form(annotation: Option<&Annotation>) -> FormView {
    let mut view = FormView {
        checked: Vec::new(),
        modified_content: String::new(),
        qa_slots: Default::default(),
    };

    if let Some(anno) = annotation {
        view.checked = anno.keywords.clone();
        view.modified_content = anno.modified_content.clone();
        for (slot, pair) in view.qa_slots.iter_mut().zip(&anno.qa_pairs) {
            *slot = (pair.question.clone(), pair.answer.clone());
        }
    }

    view
}
