//! # Kit Pool Abstractions
//!
//! 组件池抽象层，定义组件注册、初始化和按能力查找的核心接口。
//!
//! ## 核心接口
//!
//! - [`Kit`] - 组件 trait，注册时声明自己提供的能力
//! - [`Startup`] - 可选的启动钩子能力
//! - [`KitRegistry`] - 组件注册表接口
//! - [`KitInitializer`] - 初始化队列接口
//! - [`KitLocator`] - 能力查找接口
//! - [`Handle`] - 查找结果的承载句柄
//!
//! ## 使用示例
//!
//! ```rust
//! use std::sync::Arc;
//! use kits_abstractions::{Capabilities, Kit};
//!
//! pub trait Clock: Send + Sync {
//!     fn now(&self) -> u64;
//! }
//!
//! #[derive(Debug)]
//! pub struct FixedClock(u64);
//!
//! impl Clock for FixedClock {
//!     fn now(&self) -> u64 {
//!         self.0
//!     }
//! }
//!
//! impl Kit for FixedClock {
//!     fn provide(self: Arc<Self>, capabilities: &mut Capabilities) {
//!         capabilities.provide::<dyn Clock>(self);
//!     }
//! }
//! ```

pub mod capability;
pub mod handle;
pub mod initializer;
pub mod kit;
pub mod locator;
pub mod registry;

pub use capability::*;
pub use handle::*;
pub use initializer::*;
pub use kit::*;
pub use locator::*;
pub use registry::*;

/// 常用 trait 与类型的一次性导入
pub mod prelude {
    pub use crate::{
        Capabilities, Handle, Kit, KitContext, KitInitializer, KitLocator, KitRegistry,
        LocatorExt, RegistryExt, Startup,
    };
    pub use kits_common::{KitError, KitResult, KitResultExt};
}
