//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：输出目录、HTTP 客户端、转码器
//! 2. **数据加载**：拉取分类数据与课例列表
//! 3. **导航**：定位所选学科下的单元与课例
//! 4. **顺序处理**：逐单元委托 `unit_processor`
//! 5. **全局统计**：汇总所有课例的处理结果
//!
//! 文档级错误（拉取、解析、导航）直接终止；单个课例的失败只计数。

use crate::clients::{ContentClient, HttpClient};
use crate::config::Config;
use crate::models::{CaseDocument, ItemDocument, Selection};
use crate::orchestrator::unit_processor::{process_unit, CaseStats};
use crate::services::{FailureWriter, FfmpegTranscoder, StreamProbe, TaxonomyNavigator, Transcoder};
use crate::utils::logging;
use crate::workflow::CaseFlow;
use anyhow::{Context, Result};
use std::fs;
use tracing::{info, warn};

/// 应用主结构
pub struct App<P = HttpClient, T = FfmpegTranscoder> {
    config: Config,
    content: ContentClient,
    flow: CaseFlow<P, T>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let http = HttpClient::new(&config).context("无法创建HTTP客户端")?;
        let content = ContentClient::new(http.clone(), &config);
        let transcoder = FfmpegTranscoder::new(config.ffmpeg_path.clone());
        let flow = CaseFlow::new(
            http,
            transcoder,
            FailureWriter::with_path(config.failure_file.clone()),
            config.output_dir.clone(),
            config.skip_existing,
        );

        Self::with_parts(config, content, flow)
    }
}

impl<P: StreamProbe, T: Transcoder> App<P, T> {
    /// 使用给定组件创建应用（测试中替换探测器和转码器）
    pub fn with_parts(config: Config, content: ContentClient, flow: CaseFlow<P, T>) -> Result<Self> {
        let selection = Selection::from_config(&config);
        logging::log_startup(&selection.to_string(), &config.output_dir);

        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("无法创建输出目录: {}", config.output_dir))?;

        Ok(Self {
            config,
            content,
            flow,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<CaseStats> {
        let items = self.content.fetch_items().await?;
        let cases = self.content.fetch_cases().await?;
        self.run_with_documents(items, cases).await
    }

    /// 使用已解析的文档运行
    pub async fn run_with_documents(
        &self,
        items: ItemDocument,
        cases: CaseDocument,
    ) -> Result<CaseStats> {
        let navigator = TaxonomyNavigator::new(items, cases)?;
        logging::log_documents_loaded(navigator.stage_count(), navigator.case_count());

        let selection = Selection::from_config(&self.config);
        let plan = navigator
            .plan(&selection)
            .with_context(|| format!("无法定位 {}", selection))?;

        if plan.is_empty() {
            warn!("⚠️ {} 下没有可处理的课例，程序结束", selection);
            return Ok(CaseStats::default());
        }

        let mut stats = CaseStats::default();
        let total_units = plan.len();
        for unit in &plan {
            logging::log_unit_start(unit.unit_index, total_units, unit.case_codes.len());
            let unit_stats =
                process_unit(&self.flow, &navigator, unit, self.config.item_delay()).await?;
            stats.merge(unit_stats);
        }

        logging::print_final_stats(
            stats.success,
            stats.skipped,
            stats.failed,
            &self.config.output_log_file,
        );
        info!("📁 视频目录: {}", self.config.output_dir);

        Ok(stats)
    }
}
