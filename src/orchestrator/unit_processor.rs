//! 单元处理器 - 编排层
//!
//! ## 职责
//!
//! 顺序处理一个单元内的全部课例，每次转码后固定等待一段时间。

use crate::services::{StreamProbe, TaxonomyNavigator, Transcoder, UnitCases};
use crate::workflow::{CaseCtx, CaseFlow, ProcessResult};
use anyhow::Result;
use std::time::Duration;
use tracing::info;

/// 课例处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CaseStats {
    pub success: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl CaseStats {
    pub fn record(&mut self, result: &ProcessResult) {
        match result {
            ProcessResult::Success => self.success += 1,
            ProcessResult::Skipped(_) => self.skipped += 1,
            ProcessResult::Failed => self.failed += 1,
        }
    }

    pub fn merge(&mut self, other: CaseStats) {
        self.success += other.success;
        self.skipped += other.skipped;
        self.failed += other.failed;
    }

    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 处理单个单元
///
/// # 参数
/// - `flow`: 课例处理流程
/// - `navigator`: 分类导航器（用于查询课例）
/// - `unit`: 本单元的课例代码
/// - `item_delay`: 每次转码后的等待时间
pub async fn process_unit<P: StreamProbe, T: Transcoder>(
    flow: &CaseFlow<P, T>,
    navigator: &TaxonomyNavigator,
    unit: &UnitCases,
    item_delay: Duration,
) -> Result<CaseStats> {
    let mut stats = CaseStats::default();

    for (index, case_code) in unit.case_codes.iter().enumerate() {
        let ctx = CaseCtx::new(unit.unit_index, index + 1, case_code.as_str());

        let result = flow.run(navigator, &ctx).await?;
        stats.record(&result);

        if result.attempted_transcode() && !item_delay.is_zero() {
            info!("{} ⏳ 等待 {} 秒", ctx, item_delay.as_secs());
            tokio::time::sleep(item_delay).await;
        }
    }

    info!(
        "[单元 {}] 课例统计: 成功 {}, 跳过 {}, 失败 {}",
        unit.unit_index, stats.success, stats.skipped, stats.failed
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::SkipReason;

    #[test]
    fn test_stats_record_and_merge() {
        let mut a = CaseStats::default();
        a.record(&ProcessResult::Success);
        a.record(&ProcessResult::Skipped(SkipReason::NoThumbnail));

        let mut b = CaseStats::default();
        b.record(&ProcessResult::Failed);
        a.merge(b);

        assert_eq!(
            a,
            CaseStats {
                success: 1,
                skipped: 1,
                failed: 1
            }
        );
        assert_eq!(a.total(), 3);
    }
}
