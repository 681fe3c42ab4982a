//! # 组件池具体实现
//!
//! 提供 [`KitPool`]：同时实现组件注册表、初始化器和能力查找器的显式上下文对象。
//!
//! ```rust
//! use std::sync::Arc;
//! use kits_abstractions::prelude::*;
//! use kits_impl::KitPool;
//!
//! pub trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! #[derive(Debug)]
//! struct English;
//!
//! impl Greeter for English {
//!     fn greet(&self) -> String {
//!         "hello".to_string()
//!     }
//! }
//!
//! impl Kit for English {
//!     fn provide(self: Arc<Self>, capabilities: &mut Capabilities) {
//!         capabilities.provide::<dyn Greeter>(self);
//!     }
//! }
//!
//! let mut pool = KitPool::new();
//! pool.register(English);
//! pool.init();
//!
//! let mut greeter: Option<Arc<dyn Greeter>> = None;
//! pool.find(&mut greeter).unwrap();
//! assert_eq!(greeter.unwrap().greet(), "hello");
//! ```

mod initializer;
mod install;
mod locator;
mod pool;
mod registry;

pub use install::{install_kit, installed_kits};
pub use pool::{KitPool, PoolState};
