use crate::config::Config;
use std::fmt::Display;

/// 要抓取的学段/年级/学科组合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub stage_code: String,
    pub grade_code: String,
    pub subject_code: String,
}

impl Selection {
    pub fn new(
        stage_code: impl Into<String>,
        grade_code: impl Into<String>,
        subject_code: impl Into<String>,
    ) -> Self {
        Self {
            stage_code: stage_code.into(),
            grade_code: grade_code.into(),
            subject_code: subject_code.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.stage_code.clone(),
            config.grade_code.clone(),
            config.subject_code.clone(),
        )
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "学段 {} / 年级 {} / 学科 {}",
            self.stage_code, self.grade_code, self.subject_code
        )
    }
}
