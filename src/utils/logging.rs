//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use crate::error::{AppError, AppResult};
use std::fs;
use tracing::info;

/// 初始化日志文件
///
/// # 参数
/// - `log_file_path`: 日志文件路径
pub fn init_log_file(log_file_path: &str) -> AppResult<()> {
    let log_header = format!(
        "{}\n同步课堂视频抓取日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(selection: &str, output_dir: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 同步课堂视频抓取");
    info!("🎯 目标: {}", selection);
    info!("📁 输出目录: {}", output_dir);
    info!("{}", "=".repeat(60));
}

/// 记录数据加载信息
///
/// # 参数
/// - `stages`: 学段数量
/// - `cases`: 课例索引条数
pub fn log_documents_loaded(stages: usize, cases: usize) {
    info!("✓ 分类数据: {} 个学段", stages);
    info!("✓ 课例数据: {} 个课例", cases);
}

/// 记录单元开始信息
pub fn log_unit_start(unit_index: usize, total_units: usize, case_count: usize) {
    info!("\n{}", "─".repeat(60));
    info!(
        "📦 单元 {}/{}，共 {} 个课例",
        unit_index, total_units, case_count
    );
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `skipped`: 跳过数量
/// - `failed`: 失败数量
/// - `log_file_path`: 日志文件路径
pub fn print_final_stats(success: usize, skipped: usize, failed: usize, log_file_path: &str) {
    let total = success + skipped + failed;
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, total);
    info!("⏭️ 跳过: {}", skipped);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", log_file_path);
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
