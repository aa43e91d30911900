//! HTTP 客户端
//!
//! 封装 reqwest：统一请求头、连接/响应超时、查询参数拼接

use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::services::StreamProbe;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use tracing::debug;

/// 一次请求的结果
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub code: u16,
    pub content: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.code == 200
    }
}

/// HTTP 客户端
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    /// 按配置创建客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .connect_timeout(config.connect_timeout())
            .timeout(config.socket_timeout())
            .gzip(true)
            .build()
            .map_err(ApiError::ClientBuildFailed)?;

        Ok(Self { client })
    }

    /// GET 请求，`params` 会拼接到查询串
    pub async fn get(&self, url: &str, params: &[(&str, &str)]) -> AppResult<HttpResponse> {
        let full_url = build_url(url, params);
        debug!("GET {}", full_url);

        let response = self
            .client
            .get(&full_url)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(url, e))?;

        let code = response.status().as_u16();
        let content = response
            .text()
            .await
            .map_err(|e| AppError::api_request_failed(url, e))?;

        Ok(HttpResponse { code, content })
    }

    /// HEAD 请求，只返回状态码
    pub async fn head_status(&self, url: &str) -> AppResult<u16> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(url, e))?;
        Ok(response.status().as_u16())
    }
}

#[async_trait]
impl StreamProbe for HttpClient {
    async fn probe_status(&self, url: &str) -> AppResult<u16> {
        self.head_status(url).await
    }
}

/// 拼接查询参数：地址已有 `?` 时用 `&` 连接
pub fn build_url(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();
    let separator = if url.contains('?') { '&' } else { '?' };

    format!("{}{}{}", url, separator, query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_without_params() {
        assert_eq!(build_url("https://h/a.js", &[]), "https://h/a.js");
    }

    #[test]
    fn test_build_url_appends_query() {
        assert_eq!(
            build_url("https://h/a.js", &[("t", "1600000000")]),
            "https://h/a.js?t=1600000000"
        );
        assert_eq!(
            build_url("https://h/a.js?v=2", &[("t", "1"), ("q", "a b")]),
            "https://h/a.js?v=2&t=1&q=a+b"
        );
    }

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(HttpClient::new(&Config::default()).is_ok());
    }
}
