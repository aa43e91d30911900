//! 视频地址推导 - 业务能力层
//!
//! 缩略图与 HLS 清单在同一目录结构下，只是 `pic` 换成 `video`、
//! `00001000.jpg` 换成 `.m3u8`：
//!
//! ```text
//! .../ykt_tbkt_hls_1080_7_CJ_1/pic/数学广角练习00001000.jpg
//! .../ykt_tbkt_hls_1080_7_CJ_1/video/数学广角练习 .m3u8
//! ```
//!
//! 清单文件名有时带一个尾随空格，有时没有，需要探测后决定。

use crate::error::{AppResult, DeriveError};
use async_trait::async_trait;
use tracing::{debug, warn};

/// 缩略图路径中被替换的片段
pub const PIC_FRAGMENT: &str = "pic";
/// 缩略图文件名的固定后缀
pub const THUMBNAIL_SUFFIX: &str = "00001000.jpg";

/// 探测远程地址的 HTTP 状态码
#[async_trait]
pub trait StreamProbe: Send + Sync {
    async fn probe_status(&self, url: &str) -> AppResult<u16>;
}

/// 同一缩略图推导出的两种清单地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamCandidates {
    /// 文件名带尾随空格
    pub primary: String,
    /// 文件名不带尾随空格
    pub fallback: String,
}

impl StreamCandidates {
    /// 根据主地址的探测状态选择地址：404/400 时改用备用地址
    pub fn choose(&self, primary_status: Option<u16>) -> &str {
        match primary_status {
            Some(404) | Some(400) => &self.fallback,
            _ => &self.primary,
        }
    }
}

/// 从缩略图地址推导两种清单地址
pub fn derive_stream_urls(pic_url: &str) -> Result<StreamCandidates, DeriveError> {
    let mut parts = pic_url.split(PIC_FRAGMENT);
    let prefix = parts.next().unwrap_or_default();
    let name = parts.next().ok_or_else(|| DeriveError::MissingPicFragment {
        url: pic_url.to_string(),
    })?;

    if !name.contains(THUMBNAIL_SUFFIX) {
        return Err(DeriveError::UnexpectedSuffix {
            url: pic_url.to_string(),
            suffix: THUMBNAIL_SUFFIX,
        });
    }

    let build = |replacement: &str| {
        format!(
            "{}video{}.m3u8",
            prefix,
            name.replace(THUMBNAIL_SUFFIX, replacement)
        )
    };

    Ok(StreamCandidates {
        primary: build(" "),
        fallback: build(""),
    })
}

/// 推导并探测出最终使用的清单地址
pub struct UrlDeriver<P> {
    probe: P,
}

impl<P: StreamProbe> UrlDeriver<P> {
    pub fn new(probe: P) -> Self {
        Self { probe }
    }

    /// 推导清单地址；探测请求本身失败时保留主地址
    pub async fn resolve(&self, pic_url: &str) -> AppResult<String> {
        let candidates = derive_stream_urls(pic_url)?;

        let status = match self.probe.probe_status(&candidates.primary).await {
            Ok(status) => {
                debug!("探测 {} -> {}", candidates.primary, status);
                Some(status)
            }
            Err(e) => {
                warn!("探测失败，使用默认地址: {}", e);
                None
            }
        };

        Ok(candidates.choose(status).to_string())
    }
}
