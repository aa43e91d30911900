//! JS 赋值语句包装的 JSON 数据
//!
//! 远程接口返回形如 `var xueduanJson = {...};` 的脚本，需要去掉变量赋值和结尾分号

use crate::error::{AppResult, PayloadError};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::OnceLock;
use tracing::debug;

const ASSIGNMENT_PATTERN: &str = r"^\s*var\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=\s*";

fn assignment_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ASSIGNMENT_PATTERN).expect("赋值语句正则无效"))
}

/// 去掉开头的 `var <name> =` 和结尾的分号/空白
///
/// 没有赋值包装的内容只做首尾去空白
pub fn strip_js_assignment(body: &str) -> &str {
    let unwrapped = match assignment_regex().find(body) {
        Some(m) => &body[m.end()..],
        None => body,
    };
    unwrapped.trim().trim_end_matches(';').trim_end()
}

/// 去掉包装后反序列化
pub fn parse_js_json<T: DeserializeOwned>(body: &str) -> AppResult<T> {
    let json = strip_js_assignment(body);
    debug!("解析 JSON，长度: {} 字节", json.len());
    let value = serde_json::from_str(json).map_err(PayloadError::from)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_strip_known_wrappers() {
        assert_eq!(
            strip_js_assignment("var xueduanJson = {\"xueDuan\":[]};"),
            "{\"xueDuan\":[]}"
        );
        assert_eq!(
            strip_js_assignment("  var caseJson={\"clist\":[]} ;\n"),
            "{\"clist\":[]}"
        );
    }

    #[test]
    fn test_strip_plain_json_untouched() {
        assert_eq!(strip_js_assignment(" {\"a\":1}\n"), "{\"a\":1}");
    }

    #[test]
    fn test_strip_only_trailing_semicolons() {
        assert_eq!(
            strip_js_assignment("var x = {\"s\":\"a;b\"};;"),
            "{\"s\":\"a;b\"}"
        );
    }

    #[test]
    fn test_repeated_strips_reuse_pattern() {
        let first = strip_js_assignment("var a = [1];");
        let second = strip_js_assignment("var b = [2];");
        assert_eq!(first, "[1]");
        assert_eq!(second, "[2]");
        assert!(std::ptr::eq(assignment_regex(), assignment_regex()));
    }

    #[test]
    fn test_parse_js_json() {
        let value: Value = parse_js_json("var caseJson = {\"clist\":[{\"caseCode\":\"c1\"}]};").unwrap();
        assert_eq!(value["clist"][0]["caseCode"], "c1");
    }

    #[test]
    fn test_parse_js_json_rejects_garbage() {
        let err = parse_js_json::<Value>("var caseJson = <html>;").unwrap_err();
        assert!(matches!(err, crate::error::AppError::Payload(_)));
    }
}
