//! 静态网站生成器
//!
//! 把题目列表嵌入模板并写出四个静态文件。所有内容先在内存中
//! 组装完成，再依次落盘；组装阶段失败时不产生任何输出文件。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;
use tracing::info;

use crate::generator::templates;
use crate::models::Problem;

/// 静态网站生成器
pub struct SiteGenerator {
    output_dir: PathBuf,
    storage_key: String,
    download_file: String,
}

impl SiteGenerator {
    /// 创建生成器
    pub fn new(
        output_dir: impl Into<PathBuf>,
        storage_key: impl Into<String>,
        download_file: impl Into<String>,
    ) -> Self {
        Self {
            output_dir: output_dir.into(),
            storage_key: storage_key.into(),
            download_file: download_file.into(),
        }
    }

    /// 生成标注工具网站
    ///
    /// # 返回
    /// 返回写出的文件路径列表（index.html、explanations.html、style.css、script.js）
    pub async fn generate(&self, problems: &[Problem]) -> Result<Vec<PathBuf>> {
        let problems_json =
            serde_json::to_string_pretty(problems).context("题目数据序列化失败")?;

        let index_html = templates::INDEX_HTML
            .replace("__CHECKBOXES__", &templates::render_checkboxes())
            .replace("__PROBLEM_DATA__", &problems_json);
        let explanations_html =
            templates::EXPLANATIONS_HTML.replace("__DEFINITIONS__", &templates::render_definitions());
        let script_js = templates::SCRIPT_JS
            .replace("__STORAGE_KEY__", &self.storage_key)
            .replace("__DOWNLOAD_FILE__", &self.download_file);

        fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| format!("无法创建输出目录: {}", self.output_dir.display()))?;

        let files = [
            ("index.html", index_html.as_str()),
            ("explanations.html", explanations_html.as_str()),
            ("style.css", templates::STYLE_CSS),
            ("script.js", script_js.as_str()),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, content) in files {
            let path = self.output_dir.join(name);
            fs::write(&path, content)
                .await
                .with_context(|| format!("无法写入文件: {}", path.display()))?;
            info!("已生成: {}", path.display());
            written.push(path);
        }

        Ok(written)
    }

    /// 入口页面路径
    pub fn index_path(&self) -> PathBuf {
        self.output_dir.join("index.html")
    }

    /// 输出目录
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
