//! # Kit Macros
//!
//! 这个 crate 提供了声明组件能力和自动安装组件的过程宏。
//!
//! ## 核心宏
//!
//! - [`kit`](macro@kit) - 生成 `Kit` 实现，可选生成自安装代码
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use kits_abstractions::prelude::*;
//! use kits_macros::kit;
//!
//! pub trait Clock: Send + Sync {
//!     fn now(&self) -> u64;
//! }
//!
//! #[kit(name = "system-clock", provides(dyn Clock), startup, install)]
//! #[derive(Debug, Default)]
//! pub struct SystemClock;
//! ```

use proc_macro::TokenStream;

mod kit;
mod utils;

/// 声明式组件宏
///
/// 为结构体实现 `kits_abstractions::Kit`，每个声明的能力都会生成一次显式的
/// `Arc<Self>` 到能力类型的转换。
///
/// # 参数
///
/// - `name = "custom_name"` - 自定义组件名称（默认为完整类型名）
/// - `provides(dyn A, dyn B)` - 组件提供的能力
/// - `startup` - 声明 `Startup` 能力，结构体需自行实现 `Startup`
/// - `install` - 通过 `ctor` 在进程启动时登记到安装表，要求实现 `Default`，
///   使用方需要依赖 `ctor` 和 `kits-impl`
///
/// # 示例
///
/// ```rust,ignore
/// #[kit(provides(dyn Clock, dyn Ticker), startup)]
/// #[derive(Debug)]
/// pub struct SystemClock {
///     // 字段
/// }
/// ```
#[proc_macro_attribute]
pub fn kit(args: TokenStream, input: TokenStream) -> TokenStream {
    kit::kit_impl(args, input)
}
