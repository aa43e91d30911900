//! 分类树导航 - 业务能力层
//!
//! 按 学段 → 年级 → 学科 逐级定位单元列表，并按文档顺序列出可抓取的课例代码。
//! 任一层级缺失都会直接返回错误，不再继续向下查找。

use crate::error::{AppResult, NavigationError};
use crate::models::{CaseDocument, CaseRecord, ItemDocument, Selection, Stage, Unit};
use crate::utils::{column, index_by};
use std::collections::HashMap;
use tracing::debug;

/// 单个单元中待处理的课例
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitCases {
    /// 单元序号（从1开始，按文档顺序）
    pub unit_index: usize,
    pub case_codes: Vec<String>,
}

/// 分类树导航器
///
/// 持有按代码建好的学段索引和课例索引
#[derive(Debug)]
pub struct TaxonomyNavigator {
    stages: HashMap<String, Stage>,
    cases: HashMap<String, CaseRecord>,
}

impl TaxonomyNavigator {
    /// 校验两份文档的顶层列表并建立索引
    ///
    /// 学段列表为空时返回 `EmptyTaxonomy`，课例列表为空时返回 `EmptyCaseList`
    pub fn new(items: ItemDocument, cases: CaseDocument) -> AppResult<Self> {
        if items.stages.is_empty() {
            return Err(NavigationError::EmptyTaxonomy.into());
        }
        if cases.cases.is_empty() {
            return Err(NavigationError::EmptyCaseList.into());
        }

        let stages = index_by(items.stages, |s| s.code.clone());
        let cases = index_by(cases.cases, |c| c.case_code.clone());
        debug!("索引完成: {} 个学段, {} 个课例", stages.len(), cases.len());

        Ok(Self { stages, cases })
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// 按课例代码查找课例
    pub fn case(&self, case_code: &str) -> Option<&CaseRecord> {
        self.cases.get(case_code)
    }

    /// 定位所选学科下的单元列表
    pub fn units(&self, selection: &Selection) -> AppResult<&[Unit]> {
        let stage = self.stages.get(&selection.stage_code).ok_or_else(|| {
            NavigationError::StageNotFound {
                code: selection.stage_code.clone(),
            }
        })?;

        let grades = index_by(stage.grades.iter(), |g| g.code.clone());
        let grade = grades
            .get(&selection.grade_code)
            .copied()
            .ok_or_else(|| NavigationError::GradeNotFound {
                stage: selection.stage_code.clone(),
                code: selection.grade_code.clone(),
            })?;

        let subjects = index_by(grade.subjects.iter(), |s| s.code.clone());
        let subject = subjects
            .get(&selection.subject_code)
            .copied()
            .ok_or_else(|| NavigationError::SubjectNotFound {
                grade: selection.grade_code.clone(),
                code: selection.subject_code.clone(),
            })?;

        subject.units.as_deref().ok_or_else(|| {
            NavigationError::MissingUnits {
                subject: selection.subject_code.clone(),
            }
            .into()
        })
    }

    /// 列出所选学科下每个单元的课例代码（没有课例的单元跳过）
    pub fn plan(&self, selection: &Selection) -> AppResult<Vec<UnitCases>> {
        let units = self.units(selection)?;

        let plan = units
            .iter()
            .enumerate()
            .filter(|(_, unit)| !unit.cases.is_empty())
            .map(|(idx, unit)| UnitCases {
                unit_index: idx + 1,
                case_codes: column(&unit.cases, |c| c.case_code.clone()),
            })
            .collect();

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::js_payload::parse_js_json;

    const ITEMS: &str = r#"var xueduanJson = {"xueDuan":[
        {"xueDuanCode":"xd0001","nianJiList":[
            {"njCode":"njx001","subjectsList":[]},
            {"njCode":"njx002","subjectsList":[
                {"xkCode":"yw0001","danYuanList":[{"caseList":[{"caseCode":"YW1"}]}]},
                {"xkCode":"sx0001","danYuanList":[
                    {"caseList":[{"caseCode":"SX1"},{"caseCode":"SX2"}]},
                    {"caseList":[]},
                    {},
                    {"caseList":[{"name":"no code"},{"caseCode":"SX3"}]}
                ]},
                {"xkCode":"yy0001"}
            ]}
        ]}
    ]};"#;

    const CASES: &str = r#"var caseJson = {"clist":[
        {"caseCode":"SX1","caseBeanList":[{"picUrl":"https://d006.eduyun.cn/v/hls/pic/a00001000.jpg"}]},
        {"caseCode":"SX2","caseBeanList":[]}
    ]};"#;

    fn navigator() -> TaxonomyNavigator {
        TaxonomyNavigator::new(parse_js_json(ITEMS).unwrap(), parse_js_json(CASES).unwrap())
            .unwrap()
    }

    fn default_selection() -> Selection {
        Selection::new("xd0001", "njx002", "sx0001")
    }

    #[test]
    fn test_plan_keeps_document_order_and_skips_empty_units() {
        let plan = navigator().plan(&default_selection()).unwrap();

        assert_eq!(
            plan,
            vec![
                UnitCases {
                    unit_index: 1,
                    case_codes: vec!["SX1".to_string(), "SX2".to_string()],
                },
                UnitCases {
                    unit_index: 4,
                    case_codes: vec!["SX3".to_string()],
                },
            ]
        );
    }

    #[test]
    fn test_case_lookup() {
        let nav = navigator();
        assert_eq!(nav.case_count(), 2);
        assert!(nav.case("SX1").is_some());
        assert!(nav.case("SX3").is_none());
    }

    #[test]
    fn test_empty_taxonomy_halts_before_case_list() {
        let items: ItemDocument = parse_js_json("var xueduanJson = {};").unwrap();
        let cases: CaseDocument = parse_js_json("var caseJson = {};").unwrap();

        let err = TaxonomyNavigator::new(items, cases).unwrap_err();
        assert!(matches!(
            err,
            AppError::Navigation(NavigationError::EmptyTaxonomy)
        ));
    }

    #[test]
    fn test_empty_case_list_halts() {
        let items: ItemDocument = parse_js_json(ITEMS).unwrap();
        let cases: CaseDocument = parse_js_json(r#"var caseJson = {"clist":[]};"#).unwrap();

        let err = TaxonomyNavigator::new(items, cases).unwrap_err();
        assert!(matches!(
            err,
            AppError::Navigation(NavigationError::EmptyCaseList)
        ));
    }

    #[test]
    fn test_missing_codes_are_reported_per_level() {
        let nav = navigator();

        let err = nav
            .plan(&Selection::new("xd0009", "njx002", "sx0001"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Navigation(NavigationError::StageNotFound { .. })
        ));

        let err = nav
            .plan(&Selection::new("xd0001", "njx009", "sx0001"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Navigation(NavigationError::GradeNotFound { .. })
        ));

        let err = nav
            .plan(&Selection::new("xd0001", "njx001", "sx0001"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Navigation(NavigationError::SubjectNotFound { .. })
        ));

        let err = nav
            .plan(&Selection::new("xd0001", "njx002", "yy0001"))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Navigation(NavigationError::MissingUnits { .. })
        ));
    }
}
