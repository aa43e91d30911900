//! 课例处理上下文
//!
//! 封装"我正在处理第几单元的哪个课例"这一信息

use std::fmt::Display;

/// 课例处理上下文
#[derive(Debug, Clone)]
pub struct CaseCtx {
    /// 单元序号（仅用于日志显示）
    pub unit_index: usize,

    /// 课例在单元中的序号（从1开始）
    pub case_index: usize,

    /// 课例代码，同时也是输出文件名
    pub case_code: String,
}

impl CaseCtx {
    /// 创建新的课例上下文
    pub fn new(unit_index: usize, case_index: usize, case_code: impl Into<String>) -> Self {
        Self {
            unit_index,
            case_index,
            case_code: case_code.into(),
        }
    }
}

impl Display for CaseCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[单元 {} 课例#{} {}]",
            self.unit_index, self.case_index, self.case_code
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_unit_position_and_code() {
        let ctx = CaseCtx::new(2, 3, "c42");
        assert_eq!(ctx.to_string(), "[单元 2 课例#3 c42]");
    }
}
