//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 管理应用生命周期（初始化、运行）
//! - 拉取并解析两份数据文档
//! - 输出全局统计信息
//!
//! ### `unit_processor` - 单元处理器
//! - 顺序遍历单元内的课例
//! - 每次转码后固定等待
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<UnitCases>)
//!     ↓
//! unit_processor (处理一个单元的课例代码)
//!     ↓
//! workflow::CaseFlow (处理单个课例)
//!     ↓
//! services (能力层：navigate / derive / transcode / failure)
//!     ↓
//! clients (基础设施：HTTP)
//! ```

pub mod app;
pub mod unit_processor;

pub use app::App;
pub use unit_processor::{process_unit, CaseStats};
