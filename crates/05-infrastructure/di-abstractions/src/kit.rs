//! 组件基础接口定义

use crate::capability::Capabilities;
use crate::locator::KitLocator;
use crate::registry::KitRegistry;
use kits_common::TypeInfo;
use std::fmt::Debug;
use std::sync::Arc;

/// 组件 trait
///
/// 组件对池来说是不透明的值，身份由 [`Kit::provide`] 中声明的能力决定。
/// 每个能力都由组件作者显式地把 `Arc<Self>` 转换为对应的 trait 对象。
pub trait Kit: Send + Sync + Debug + 'static {
    /// 组件名称，默认为完整类型名
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 组件具体类型
    fn kit_type(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    /// 声明组件提供的能力
    ///
    /// 注册时调用一次，声明顺序会保留在组件描述信息中。
    fn provide(self: Arc<Self>, capabilities: &mut Capabilities);
}

/// 启动钩子能力
///
/// 组件通过 `capabilities.provide::<dyn Startup>(self)` 声明。初始化器对每个组件
/// 至多调用一次，钩子内可以通过 `context` 继续注册组件或查找协作者。
pub trait Startup: Send + Sync {
    /// 执行启动逻辑
    fn start(&self, context: &mut dyn KitContext);
}

/// 启动钩子可见的组件池上下文
pub trait KitContext: KitRegistry + KitLocator {}

impl<T: KitRegistry + KitLocator> KitContext for T {}
