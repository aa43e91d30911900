//! 转码能力 - 业务能力层
//!
//! 把 HLS 清单转成本地 MP4。外部程序调用集中在 `FfmpegTranscoder`，
//! 流程层只依赖 `Transcoder` trait，测试中可以替换。

use crate::error::{AppResult, TranscodeError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, info, warn};

/// 转码器
#[async_trait]
pub trait Transcoder: Send + Sync {
    /// 把 `stream_url` 转码到 `output`，完成后返回
    async fn transcode(&self, stream_url: &str, output: &Path) -> AppResult<()>;
}

/// 课例对应的输出文件：`<output_dir>/<case_code>.mp4`
pub fn output_path(output_dir: &Path, case_code: &str) -> PathBuf {
    output_dir.join(format!("{}.mp4", case_code))
}

/// 转码过程中写入的临时文件：`<case_code>.part.mp4`
///
/// 只有转码成功后才改名为正式文件，失败时删除，
/// 避免残缺文件被当成已完成的视频。
pub fn partial_path(output: &Path) -> PathBuf {
    output.with_extension("part.mp4")
}

/// 调用 ffmpeg 直接复制音视频流
#[derive(Debug, Clone)]
pub struct FfmpegTranscoder {
    program: String,
}

impl FfmpegTranscoder {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// ffmpeg 参数：不重新编码，音频流加 ADTS → ASC 过滤器
    ///
    /// `target` 是临时文件，上次中断留下的同名文件直接覆盖
    pub fn build_args(stream_url: &str, target: &Path) -> Vec<String> {
        vec![
            "-nostdin".to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-y".to_string(),
            "-i".to_string(),
            stream_url.to_string(),
            "-vcodec".to_string(),
            "copy".to_string(),
            "-acodec".to_string(),
            "copy".to_string(),
            "-bsf:a".to_string(),
            "aac_adtstoasc".to_string(),
            target.to_string_lossy().to_string(),
        ]
    }
}

impl Default for FfmpegTranscoder {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl Transcoder for FfmpegTranscoder {
    async fn transcode(&self, stream_url: &str, output: &Path) -> AppResult<()> {
        let partial = partial_path(output);
        let args = Self::build_args(stream_url, &partial);
        debug!("执行: {} {}", self.program, args.join(" "));
        info!("🎬 开始转码 -> {}", output.display());

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|source| TranscodeError::SpawnFailed {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            discard_partial(&partial).await;
            return Err(TranscodeError::ExitFailure {
                output: output.display().to_string(),
                code: status.code(),
            }
            .into());
        }

        if let Err(source) = fs::rename(&partial, output).await {
            discard_partial(&partial).await;
            return Err(TranscodeError::FinalizeFailed {
                output: output.display().to_string(),
                source,
            }
            .into());
        }

        Ok(())
    }
}

async fn discard_partial(partial: &Path) {
    match fs::remove_file(partial).await {
        Ok(()) => debug!("已删除残缺文件: {}", partial.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => warn!("无法删除残缺文件 {}: {}", partial.display(), e),
    }
}
