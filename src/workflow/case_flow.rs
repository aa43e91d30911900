//! 课例处理流程 - 流程层
//!
//! 核心职责：定义"一个课例"的完整处理流程
//!
//! 流程顺序：
//! 1. 在课例索引中查找课例
//! 2. 取第一个资源的缩略图地址
//! 3. 推导并探测清单地址
//! 4. 转码到 `<output_dir>/<case_code>.mp4`
//! 5. 无法产出视频时写入失败记录

use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::error::{AppError, AppResult};
use crate::services::{
    output_path, FailureWriter, StreamProbe, TaxonomyNavigator, Transcoder, UrlDeriver,
};
use crate::utils::logging::truncate_text;
use crate::workflow::case_ctx::CaseCtx;

/// 跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// 课例列表中没有该课例
    NotInCaseList,
    /// 课例没有缩略图地址
    NoThumbnail,
    /// 缩略图地址不符合命名约定
    UnsupportedNaming,
    /// 输出文件已存在
    AlreadyExists,
}

/// 课例处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 转码成功
    Success,
    /// 跳过，未尝试转码
    Skipped(SkipReason),
    /// 转码失败
    Failed,
}

impl ProcessResult {
    /// 是否调用过转码程序（决定是否需要等待间隔）
    pub fn attempted_transcode(&self) -> bool {
        matches!(self, ProcessResult::Success | ProcessResult::Failed)
    }
}

/// 课例处理流程
///
/// - 编排单个课例的处理流程
/// - 不持有文档数据，只依赖导航器查询
pub struct CaseFlow<P, T> {
    deriver: UrlDeriver<P>,
    transcoder: T,
    failure_writer: FailureWriter,
    output_dir: PathBuf,
    skip_existing: bool,
}

impl<P: StreamProbe, T: Transcoder> CaseFlow<P, T> {
    /// 创建新的课例处理流程
    pub fn new(
        probe: P,
        transcoder: T,
        failure_writer: FailureWriter,
        output_dir: impl Into<PathBuf>,
        skip_existing: bool,
    ) -> Self {
        Self {
            deriver: UrlDeriver::new(probe),
            transcoder,
            failure_writer,
            output_dir: output_dir.into(),
            skip_existing,
        }
    }

    pub async fn run(
        &self,
        navigator: &TaxonomyNavigator,
        ctx: &CaseCtx,
    ) -> AppResult<ProcessResult> {
        let Some(record) = navigator.case(&ctx.case_code) else {
            warn!("{} 课例列表中不存在，跳过", ctx);
            return Ok(ProcessResult::Skipped(SkipReason::NotInCaseList));
        };

        let Some(pic_url) = record.thumbnail_url() else {
            warn!("{} 没有缩略图地址，跳过", ctx);
            return Ok(ProcessResult::Skipped(SkipReason::NoThumbnail));
        };

        info!("{} 获取到课例", ctx);
        info!("{} pic url: {}", ctx, truncate_text(pic_url, 120));

        let output = output_path(&self.output_dir, &ctx.case_code);
        if self.skip_existing && output.exists() {
            info!("{} ⏭️ 视频已存在: {}", ctx, output.display());
            return Ok(ProcessResult::Skipped(SkipReason::AlreadyExists));
        }

        let stream_url = match self.deriver.resolve(pic_url).await {
            Ok(url) => url,
            Err(AppError::Derive(e)) => {
                warn!("{} {}", ctx, e);
                self.record_failure(ctx, &e.to_string());
                return Ok(ProcessResult::Skipped(SkipReason::UnsupportedNaming));
            }
            Err(e) => return Err(e),
        };

        info!("{} m3u8 url: {}", ctx, stream_url);

        match self.transcoder.transcode(&stream_url, &output).await {
            Ok(()) => {
                info!("{} ✅ 已保存: {}", ctx, output.display());
                Ok(ProcessResult::Success)
            }
            Err(e) => {
                error!("{} ❌ {}", ctx, e);
                self.record_failure(ctx, &e.to_string());
                Ok(ProcessResult::Failed)
            }
        }
    }

    fn record_failure(&self, ctx: &CaseCtx, reason: &str) {
        if let Err(e) = self.failure_writer.write(&ctx.case_code, reason) {
            error!("{} 写入失败记录失败: {}", ctx, e);
        }
    }
}
