//! # TBKT Spider
//!
//! 抓取同步课堂（tongbu.eduyun.cn）课例视频并转存为 MP4
//!
//! ## 架构设计
//!
//! 本系统沿用分层架构：
//!
//! ### ① 基础设施层（Clients）
//! - `clients/` - HTTP 请求与两份 JS 包装的 JSON 数据拉取
//! - `HttpClient` - 统一请求头与超时，同时提供状态探测
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `TaxonomyNavigator` - 学段 → 年级 → 学科 → 单元 导航
//! - `UrlDeriver` - 缩略图地址 → HLS 清单地址
//! - `Transcoder` - 调用 ffmpeg 转码
//! - `FailureWriter` - 写 failed.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个课例"的完整处理流程
//! - `CaseCtx` - 上下文封装（单元序号 + 课例代码）
//! - `CaseFlow` - 流程编排（lookup → derive → probe → transcode → failure）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 应用入口，加载数据并顺序处理
//! - `orchestrator/unit_processor` - 单元处理器，遍历课例并控制间隔
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{ContentClient, HttpClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{CaseDocument, ItemDocument, Selection};
pub use orchestrator::{App, CaseStats};
pub use services::{FfmpegTranscoder, StreamProbe, TaxonomyNavigator, Transcoder};
pub use workflow::{CaseCtx, CaseFlow, ProcessResult, SkipReason};
