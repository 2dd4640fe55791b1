use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::generator::SiteGenerator;
use crate::models::load_problems;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        if config.verbose_logging {
            info!("配置: {:?}", config);
        }
        Self { config }
    }

    /// 运行应用主逻辑
    ///
    /// 先加载全部题目，加载失败（文件缺失、某行解析失败）时直接
    /// 返回错误，不写任何输出文件。
    pub async fn run(&self) -> Result<()> {
        info!("📁 正在读取题目文件: {}", self.config.input_jsonl_path);
        let problems = load_problems(Path::new(&self.config.input_jsonl_path)).await?;

        let generator = SiteGenerator::new(
            &self.config.output_dir,
            &self.config.storage_key,
            &self.config.download_file,
        );
        generator.generate(&problems).await?;

        info!(
            "✓ 标注工具已成功生成在 '{}' 文件夹中！",
            generator.output_dir().display()
        );
        info!(
            "请在浏览器中打开 '{}' 文件开始标注。",
            generator.index_path().display()
        );
        Ok(())
    }
}
