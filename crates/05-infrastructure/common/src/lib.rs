//! # Kits Common
//!
//! 这个 crate 提供了组件池（kit pool）各层共享的基础类型。
//!
//! ## 核心内容
//!
//! - [`KitError`] - 能力查找错误
//! - [`ConfigError`] - 配置与日志初始化错误
//! - [`TypeInfo`] / [`KitId`] - 组件与能力的元数据
//! - [`PoolConfig`] - 组件池配置
//! - [`init_logging`] - 基于 tracing-subscriber 的日志初始化
//!
//! ## 设计原则
//!
//! - 组件身份由其声明的能力决定，而非具体类型
//! - 后注册者优先
//! - 显式上下文对象，无全局可变状态

pub mod configuration;
pub mod errors;
pub mod logging;
pub mod metadata;

pub use configuration::*;
pub use errors::*;
pub use logging::*;
pub use metadata::*;
