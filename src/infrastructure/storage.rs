//! 持久化端口 - 基础设施层
//!
//! 持有存储资源（文件/内存），只暴露 load / save 能力。
//! 标注存储通过注入的端口读写，不直接接触具体后端，便于测试。

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::debug;

/// 持久化端口
///
/// 整个标注存储序列化为一个 JSON 数据块，挂在一个固定的存储键下。
/// 浏览器端对应 localStorage，命令行端对应 [`FileStorage`]。
pub trait StoragePort: Send + Sync {
    /// 读取数据块，不存在时返回 None
    fn load(&self) -> Result<Option<String>>;

    /// 写入数据块，要求整体成功或整体失败
    fn save(&self, blob: &str) -> Result<()>;
}

/// 文件存储
///
/// 数据块保存在 `<dir>/<key>.json`；写入先落临时文件再重命名，
/// 中断时不会留下半写的数据块。
pub struct FileStorage {
    dir: PathBuf,
    key: String,
}

impl FileStorage {
    /// 创建文件存储
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            key: key.into(),
        }
    }

    /// 数据块文件路径
    pub fn blob_path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.key))
    }

    fn temp_path(&self) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", self.key))
    }
}

impl StoragePort for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        let path = self.blob_path();
        if !path.exists() {
            return Ok(None);
        }

        let blob = std::fs::read_to_string(&path)
            .with_context(|| format!("无法读取存储文件: {}", path.display()))?;
        Ok(Some(blob))
    }

    fn save(&self, blob: &str) -> Result<()> {
        let path = self.blob_path();
        let temp = self.temp_path();
        debug!("写入存储文件: {} ({} 字节)", path.display(), blob.len());

        std::fs::write(&temp, blob)
            .with_context(|| format!("无法写入临时文件: {}", temp.display()))?;
        std::fs::rename(&temp, &path)
            .with_context(|| format!("无法替换存储文件: {}", path.display()))?;
        Ok(())
    }
}

/// 内存存储
///
/// 不落盘的端口实现，用于测试和嵌入场景。
#[derive(Default)]
pub struct MemoryStorage {
    blob: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用已有数据块创建
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        let guard = self.blob.lock().map_err(|_| anyhow::anyhow!("存储锁中毒"))?;
        Ok(guard.clone())
    }

    fn save(&self, blob: &str) -> Result<()> {
        let mut guard = self.blob.lock().map_err(|_| anyhow::anyhow!("存储锁中毒"))?;
        *guard = Some(blob.to_string());
        Ok(())
    }
}
