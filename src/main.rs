use anyhow::Result;
use tbkt_spider::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志（终端 + 运行日志文件）
    logger::init_with_log_file(config.verbose_logging, &config.output_log_file)?;

    // 初始化并运行应用
    let _stats = App::initialize(config).await?.run().await?;

    Ok(())
}
