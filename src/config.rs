use crate::error::{AppError, AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// 指向可选 TOML 配置文件的环境变量
pub const CONFIG_FILE_ENV: &str = "TBKT_CONFIG";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 学段/年级/学科分类数据地址
    pub item_json_url: String,
    /// 课例列表数据地址
    pub case_list_json_url: String,
    /// 学段代码
    pub stage_code: String,
    /// 年级代码
    pub grade_code: String,
    /// 学科代码
    pub subject_code: String,
    /// 视频输出目录
    pub output_dir: String,
    /// ffmpeg 可执行文件
    pub ffmpeg_path: String,
    /// 每个视频之间的等待秒数
    pub item_delay_secs: u64,
    /// 连接超时（毫秒）
    pub connect_timeout_ms: u64,
    /// 响应超时（毫秒）
    pub socket_timeout_ms: u64,
    pub user_agent: String,
    /// 已存在的视频是否跳过
    pub skip_existing: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 失败记录文件
    pub failure_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_json_url: "https://tongbu.eduyun.cn/tbkt/tbkthtml/ItemJsonData.js".to_string(),
            case_list_json_url: "https://tongbu.eduyun.cn/tbkt/tbkthtml/CaseListJsonData.js"
                .to_string(),
            stage_code: "xd0001".to_string(),
            grade_code: "njx002".to_string(),
            subject_code: "sx0001".to_string(),
            output_dir: "videos".to_string(),
            ffmpeg_path: "ffmpeg".to_string(),
            item_delay_secs: 5,
            connect_timeout_ms: 5000,
            socket_timeout_ms: 5000,
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_3) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/80.0.3987.149 Safari/537.36".to_string(),
            skip_existing: true,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            failure_file: "failed.txt".to_string(),
        }
    }
}

impl Config {
    /// 加载配置：TOML 文件（若 `TBKT_CONFIG` 已设置）+ 环境变量覆盖
    pub fn load() -> AppResult<Self> {
        let base = match std::env::var(CONFIG_FILE_ENV) {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        base.with_env_overrides()
    }

    /// 仅从环境变量加载，缺省值为内置常量
    pub fn from_env() -> AppResult<Self> {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取配置，未出现的字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    pub fn from_toml_str(content: &str, origin: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|source| {
            ConfigError::TomlParseFailed {
                path: origin.to_string(),
                source,
            }
            .into()
        })
    }

    /// 使用环境变量覆盖当前配置
    pub fn with_env_overrides(self) -> AppResult<Self> {
        Ok(Self {
            item_json_url: env_string("ITEM_JSON_URL", self.item_json_url),
            case_list_json_url: env_string("CASE_LIST_JSON_URL", self.case_list_json_url),
            stage_code: env_string("STAGE_CODE", self.stage_code),
            grade_code: env_string("GRADE_CODE", self.grade_code),
            subject_code: env_string("SUBJECT_CODE", self.subject_code),
            output_dir: env_string("OUTPUT_DIR", self.output_dir),
            ffmpeg_path: env_string("FFMPEG_PATH", self.ffmpeg_path),
            item_delay_secs: env_parsed("ITEM_DELAY_SECS", self.item_delay_secs, "u64")?,
            connect_timeout_ms: env_parsed("CONNECT_TIMEOUT_MS", self.connect_timeout_ms, "u64")?,
            socket_timeout_ms: env_parsed("SOCKET_TIMEOUT_MS", self.socket_timeout_ms, "u64")?,
            user_agent: env_string("USER_AGENT", self.user_agent),
            skip_existing: env_parsed("SKIP_EXISTING", self.skip_existing, "bool")?,
            verbose_logging: env_parsed("VERBOSE_LOGGING", self.verbose_logging, "bool")?,
            output_log_file: env_string("OUTPUT_LOG_FILE", self.output_log_file),
            failure_file: env_string("FAILURE_FILE", self.failure_file),
        })
    }

    pub fn item_delay(&self) -> Duration {
        Duration::from_secs(self.item_delay_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn socket_timeout(&self) -> Duration {
        Duration::from_millis(self.socket_timeout_ms)
    }
}

fn env_string(var_name: &str, default: String) -> String {
    std::env::var(var_name).unwrap_or(default)
}

fn env_parsed<T: FromStr>(var_name: &str, default: T, expected_type: &str) -> AppResult<T> {
    match std::env::var(var_name) {
        Ok(value) => parse_value(var_name, &value, expected_type),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(var_name: &str, value: &str, expected_type: &str) -> AppResult<T> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvVarParseFailed {
            var_name: var_name.to_string(),
            value: value.to_string(),
            expected_type: expected_type.to_string(),
        }
        .into()
    })
}
