//! tracing 订阅器初始化

use crate::error::{AppError, AppResult};
use crate::utils::logging;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// 初始化日志，`RUST_LOG` 优先，否则使用 info 级别
pub fn init() {
    init_with_verbose(false);
}

/// 初始化日志；`verbose` 为真时默认级别为 debug
pub fn init_with_verbose(verbose: bool) {
    let _ = build_subscriber(verbose, None).try_init();
}

/// 初始化日志，并把所有日志同时追加到运行日志文件
///
/// 文件先写入带时间戳的表头，之后的日志以纯文本（无颜色）追加
pub fn init_with_log_file(verbose: bool, log_file_path: &str) -> AppResult<()> {
    let file = open_log_file(log_file_path)?;
    let _ = build_subscriber(verbose, Some(file)).try_init();
    Ok(())
}

/// 写入表头并以追加模式打开日志文件
pub fn open_log_file(log_file_path: &str) -> AppResult<File> {
    logging::init_log_file(log_file_path)?;
    OpenOptions::new()
        .append(true)
        .open(log_file_path)
        .map_err(|e| AppError::file_write_failed(log_file_path, e))
}

/// 组装订阅器：终端输出 + 可选的日志文件输出
pub fn build_subscriber(
    verbose: bool,
    log_file: Option<File>,
) -> impl Subscriber + Send + Sync + 'static {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = log_file.map(|file| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
    });

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
}
