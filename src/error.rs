use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 远程接口错误
    #[error("API错误: {0}")]
    Api(#[from] ApiError),
    /// 数据包解析错误
    #[error("数据解析错误: {0}")]
    Payload(#[from] PayloadError),
    /// 分类导航错误
    #[error("导航错误: {0}")]
    Navigation(#[from] NavigationError),
    /// 视频地址推导错误
    #[error("地址推导错误: {0}")]
    Derive(#[from] DeriveError),
    /// 转码错误
    #[error("转码错误: {0}")]
    Transcode(#[from] TranscodeError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// API 调用错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败
    #[error("API请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 返回非 200 状态码
    #[error("API返回错误状态 ({endpoint}): {status}")]
    BadStatus { endpoint: String, status: u16 },
    /// 返回内容为空
    #[error("API返回空结果: {endpoint}")]
    EmptyResponse { endpoint: String },
    /// HTTP 客户端构建失败
    #[error("HTTP客户端构建失败: {0}")]
    ClientBuildFailed(#[source] reqwest::Error),
}

/// JS 包装的 JSON 数据解析错误
#[derive(Debug, Error)]
pub enum PayloadError {
    /// JSON 解析失败
    #[error("JSON解析失败: {0}")]
    JsonParseFailed(#[from] serde_json::Error),
}

/// 分类树导航错误
#[derive(Debug, Error)]
pub enum NavigationError {
    /// 学段列表为空
    #[error("nothing itemData: 学段列表为空")]
    EmptyTaxonomy,
    /// 课例列表为空
    #[error("nothing caseListData: 课例列表为空")]
    EmptyCaseList,
    /// 学段不存在
    #[error("学段不存在: {code}")]
    StageNotFound { code: String },
    /// 年级不存在
    #[error("年级不存在: {code} (学段: {stage})")]
    GradeNotFound { stage: String, code: String },
    /// 学科不存在
    #[error("学科不存在: {code} (年级: {grade})")]
    SubjectNotFound { grade: String, code: String },
    /// 学科下没有单元列表
    #[error("学科 {subject} 缺少单元列表")]
    MissingUnits { subject: String },
}

/// 视频地址推导错误
#[derive(Debug, Error)]
pub enum DeriveError {
    /// 缩略图地址中没有 pic 片段
    #[error("缩略图地址缺少 \"pic\" 片段: {url}")]
    MissingPicFragment { url: String },
    /// 缩略图文件名不是约定的后缀
    #[error("缩略图文件名缺少后缀 \"{suffix}\": {url}")]
    UnexpectedSuffix { url: String, suffix: &'static str },
}

/// 转码错误
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// 无法启动转码程序
    #[error("无法启动转码程序 {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// 转码程序返回失败
    #[error("转码失败 ({output}): 退出码 {code:?}")]
    ExitFailure { output: String, code: Option<i32> },
    /// 临时文件改名失败
    #[error("无法保存转码结果 ({output}): {source}")]
    FinalizeFailed {
        output: String,
        #[source]
        source: std::io::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Payload(PayloadError::JsonParseFailed(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
