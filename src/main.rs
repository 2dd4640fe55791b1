use anyhow::Result;
use annotation_tool_gen::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    annotation_tool_gen::logger::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}
