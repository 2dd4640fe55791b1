use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::keyword::AmbiguityKeyword;

/// 每条标注最多保留的问答对数量
pub const MAX_QA_PAIRS: usize = 3;

/// 问答对
///
/// 保存时两个字段去除首尾空白后都必须非空，否则整对丢弃。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// 单条标注记录
///
/// 一次针对某道题目的标注提交：歧义分类 + 修改后的题面 + 问答对 + 时间戳。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// 保存时刻（RFC 3339）
    pub timestamp: DateTime<Utc>,
    /// 所属题目ID，必须与存储键一致
    pub question_id: String,
    /// 勾选的歧义分类
    pub keywords: Vec<AmbiguityKeyword>,
    /// 修改后的题面
    pub modified_content: String,
    /// 问答对，最多 3 对
    pub qa_pairs: Vec<QaPair>,
}

/// 标注表单输入
///
/// 对应页面右侧的输入区域：复选框、题面文本框和三组固定的问答槽位。
/// 通过 [`AnnotationForm::into_annotation`] 做结构化校验后才会进入存储，
/// 而不是按约定直接读取控件值。
#[derive(Debug, Clone, Default)]
pub struct AnnotationForm {
    /// 勾选的歧义分类
    pub keywords: Vec<AmbiguityKeyword>,
    /// 修改后的题面
    pub modified_content: String,
    /// 三组问答输入 (question, answer)
    pub qa_inputs: [(String, String); MAX_QA_PAIRS],
}

impl AnnotationForm {
    /// 校验表单并生成标注记录
    ///
    /// 规则：
    /// - 修改后的题面去除首尾空白
    /// - 问答对两侧去除首尾空白后任一为空则丢弃整对
    /// - 保留的问答对不超过 [`MAX_QA_PAIRS`]
    pub fn into_annotation(self, question_id: &str, timestamp: DateTime<Utc>) -> Annotation {
        let qa_pairs = self
            .qa_inputs
            .iter()
            .filter_map(|(q, a)| {
                let q = q.trim();
                let a = a.trim();
                if q.is_empty() || a.is_empty() {
                    None
                } else {
                    Some(QaPair {
                        question: q.to_string(),
                        answer: a.to_string(),
                    })
                }
            })
            .take(MAX_QA_PAIRS)
            .collect();

        Annotation {
            timestamp,
            question_id: question_id.to_string(),
            keywords: self.keywords,
            modified_content: self.modified_content.trim().to_string(),
            qa_pairs,
        }
    }
}
