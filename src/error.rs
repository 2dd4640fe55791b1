use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 标注存储错误
    #[error("存储错误: {0}")]
    Store(#[from] StoreError),
    /// 导出错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
    /// 业务逻辑错误
    #[error("业务错误: {0}")]
    Business(#[from] BusinessError),
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 输入文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
    /// JSONL 行解析失败
    #[error("JSONL解析失败 ({path} 第 {line} 行): {source}")]
    JsonlParseFailed {
        path: String,
        line: usize,
        source: serde_json::Error,
    },
}

/// 标注存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 替换索引超出范围（过期的选择状态）
    #[error("标注索引 {index} 超出范围 (题目 {question_id} 共有 {len} 条标注)")]
    IndexOutOfRange {
        question_id: String,
        index: usize,
        len: usize,
    },
    /// 标注的题目ID与存储键不一致
    #[error("标注的题目ID '{annotation_id}' 与存储键 '{key}' 不一致")]
    QuestionIdMismatch { key: String, annotation_id: String },
    /// 持久化失败（内存状态已回滚）
    #[error("持久化失败: {source}")]
    PersistFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 持久化数据损坏，无法解析
    #[error("存储数据解析失败: {source}")]
    CorruptBlob { source: serde_json::Error },
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 没有可导出的标注
    #[error("没有可下载的标注")]
    Empty,
    /// 标注序列化失败
    #[error("标注序列化失败: {source}")]
    SerializeFailed { source: serde_json::Error },
    /// 导出内容解析失败
    #[error("导出内容解析失败 (第 {line} 行): {source}")]
    ParseFailed { line: usize, source: serde_json::Error },
}

/// 业务逻辑错误
#[derive(Debug, Error)]
pub enum BusinessError {
    /// 题目列表为空
    #[error("题目列表不能为空")]
    EmptyProblemSet,
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
