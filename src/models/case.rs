//! 课例列表，对应 `CaseListJsonData.js` 中的 `caseJson` 数据

use super::taxonomy::null_as_empty;
use serde::Deserialize;

/// 课例列表文档
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseDocument {
    #[serde(rename = "clist", default, deserialize_with = "null_as_empty")]
    pub cases: Vec<CaseRecord>,
}

/// 单个课例
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseRecord {
    #[serde(rename = "caseCode")]
    pub case_code: Option<String>,
    #[serde(rename = "caseBeanList", default, deserialize_with = "null_as_empty")]
    pub beans: Vec<CaseBean>,
}

/// 课例附带的资源信息，其中的缩略图用于推导视频地址
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseBean {
    #[serde(rename = "picUrl")]
    pub pic_url: Option<String>,
}

impl CaseRecord {
    /// 第一个资源的缩略图地址（空字符串视为缺失）
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.beans
            .first()
            .and_then(|bean| bean.pic_url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}
