//! 失败记录服务 - 业务能力层
//!
//! 只负责"写 failed.txt"能力，不关心流程

use crate::error::{AppError, AppResult};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 失败记录服务
///
/// 职责：
/// - 将没能产出视频的课例追加写入失败文件
/// - 只处理单个课例
pub struct FailureWriter {
    failure_file_path: String,
}

impl FailureWriter {
    /// 创建新的失败记录服务
    pub fn new() -> Self {
        Self {
            failure_file_path: "failed.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            failure_file_path: path.into(),
        }
    }

    /// 写入失败信息
    ///
    /// # 参数
    /// - `case_code`: 课例代码
    /// - `reason`: 失败原因
    pub fn write(&self, case_code: &str, reason: &str) -> AppResult<()> {
        debug!("写入失败记录: 课例 {} | {}", case_code, reason);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.failure_file_path)
            .map_err(|e| AppError::file_write_failed(&self.failure_file_path, e))?;

        let line = format!(
            "{} | 课例 {} | {}\n",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            case_code,
            reason
        );

        file.write_all(line.as_bytes())
            .map_err(|e| AppError::file_write_failed(&self.failure_file_path, e))?;

        Ok(())
    }
}

impl Default for FailureWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("failed.txt");
        let writer = FailureWriter::with_path(path.to_string_lossy());

        writer.write("SX1", "转码失败").unwrap();
        writer.write("SX2", "缺少缩略图").unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("课例 SX1 | 转码失败"));
        assert!(lines[1].contains("课例 SX2"));
    }
}
