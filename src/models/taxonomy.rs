//! 学段 → 年级 → 学科 → 单元 → 课例 的分类树
//!
//! 对应 `ItemJsonData.js` 中的 `xueduanJson` 数据，只读

use serde::{Deserialize, Deserializer};

/// 分类数据文档
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDocument {
    /// 学段列表
    #[serde(rename = "xueDuan", default, deserialize_with = "null_as_empty")]
    pub stages: Vec<Stage>,
}

/// 学段（小学、初中……）
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stage {
    #[serde(rename = "xueDuanCode")]
    pub code: Option<String>,
    #[serde(rename = "nianJiList", default, deserialize_with = "null_as_empty")]
    pub grades: Vec<Grade>,
}

/// 年级
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Grade {
    #[serde(rename = "njCode")]
    pub code: Option<String>,
    #[serde(rename = "subjectsList", default, deserialize_with = "null_as_empty")]
    pub subjects: Vec<SubjectNode>,
}

/// 学科
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubjectNode {
    #[serde(rename = "xkCode")]
    pub code: Option<String>,
    /// 单元列表；缺失时为 `None`，用于区分"没有这个键"和"空列表"
    #[serde(rename = "danYuanList")]
    pub units: Option<Vec<Unit>>,
}

/// 单元
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Unit {
    #[serde(rename = "caseList", default, deserialize_with = "null_as_empty")]
    pub cases: Vec<CaseRef>,
}

/// 单元中对课例的引用
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseRef {
    #[serde(rename = "caseCode")]
    pub case_code: Option<String>,
}

/// 列表字段为 `null` 时按空列表处理（键缺失由 `default` 处理）
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_lists_parse_as_empty() {
        let doc: ItemDocument = serde_json::from_str(
            r#"{"xueDuan":[{"xueDuanCode":"xd0001","nianJiList":[
                {"njCode":"njx001","subjectsList":null},
                {"njCode":"njx002","subjectsList":[
                    {"xkCode":"sx0001","danYuanList":[{"caseList":null},{"caseList":[{"caseCode":"SX1"}]}]}
                ]}
            ]}]}"#,
        )
        .unwrap();

        let grades = &doc.stages[0].grades;
        assert!(grades[0].subjects.is_empty());
        let units = grades[1].subjects[0].units.as_ref().unwrap();
        assert!(units[0].cases.is_empty());
        assert_eq!(units[1].cases[0].case_code.as_deref(), Some("SX1"));
    }

    #[test]
    fn test_null_top_level_list_is_empty() {
        let doc: ItemDocument = serde_json::from_str(r#"{"xueDuan":null}"#).unwrap();
        assert!(doc.stages.is_empty());
    }

    #[test]
    fn test_null_unit_list_is_none() {
        let subject: SubjectNode =
            serde_json::from_str(r#"{"xkCode":"sx0001","danYuanList":null}"#).unwrap();
        assert!(subject.units.is_none());
    }
}
