/// 同步课堂数据客户端
///
/// 拉取分类数据和课例列表两份 JS 包装的 JSON
use crate::clients::http_client::{HttpClient, HttpResponse};
use crate::config::Config;
use crate::error::{ApiError, AppResult};
use crate::models::{CaseDocument, ItemDocument};
use crate::services::parse_js_json;
use serde::de::DeserializeOwned;
use tracing::info;

/// 同步课堂数据客户端
pub struct ContentClient {
    http: HttpClient,
    item_json_url: String,
    case_list_json_url: String,
}

impl ContentClient {
    /// 创建新的数据客户端
    pub fn new(http: HttpClient, config: &Config) -> Self {
        Self {
            http,
            item_json_url: config.item_json_url.clone(),
            case_list_json_url: config.case_list_json_url.clone(),
        }
    }

    /// 拉取学段/年级/学科分类数据
    pub async fn fetch_items(&self) -> AppResult<ItemDocument> {
        info!("📥 正在获取分类数据...");
        self.fetch_document(&self.item_json_url).await
    }

    /// 拉取课例列表
    pub async fn fetch_cases(&self) -> AppResult<CaseDocument> {
        info!("📥 正在获取课例数据...");
        self.fetch_document(&self.case_list_json_url).await
    }

    /// 带时间戳参数请求，避免拿到缓存
    async fn fetch_document<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let response = self.http.get(url, &[("t", timestamp.as_str())]).await?;
        let body = check_response(url, &response)?;
        parse_js_json(body)
    }
}

/// 校验响应：状态码必须为 200，内容不能为空
pub fn check_response<'a>(url: &str, response: &'a HttpResponse) -> AppResult<&'a str> {
    if !response.is_ok() {
        return Err(ApiError::BadStatus {
            endpoint: url.to_string(),
            status: response.code,
        }
        .into());
    }
    if response.content.trim().is_empty() {
        return Err(ApiError::EmptyResponse {
            endpoint: url.to_string(),
        }
        .into());
    }

    Ok(&response.content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn response(code: u16, content: &str) -> HttpResponse {
        HttpResponse {
            code,
            content: content.to_string(),
        }
    }

    #[test]
    fn test_check_response_accepts_200_with_body() {
        let resp = response(200, "var caseJson = {\"clist\":[]};");
        assert_eq!(
            check_response("https://h/CaseListJsonData.js", &resp).unwrap(),
            "var caseJson = {\"clist\":[]};"
        );
    }

    #[test]
    fn test_check_response_rejects_bad_status() {
        let err = check_response("https://h/ItemJsonData.js", &response(404, "not found"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Api(ApiError::BadStatus { status: 404, .. })
        ));
    }

    #[test]
    fn test_check_response_rejects_blank_body() {
        let err = check_response("https://h/ItemJsonData.js", &response(200, " \n")).unwrap_err();
        assert!(matches!(
            err,
            AppError::Api(ApiError::EmptyResponse { .. })
        ));
    }
}
