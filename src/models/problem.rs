use serde::{Deserialize, Serialize};

/// 题目记录
///
/// 从输入 JSONL 文件加载，只读，按行顺序索引。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// 题目唯一标识
    pub question_id: String,
    /// 题目标题
    pub question_title: String,
    /// 题面内容
    #[serde(default)]
    pub question_content: String,
    /// 来源平台
    #[serde(default)]
    pub platform: String,
}
