//! 组件注册表抽象接口

use crate::kit::Kit;
use kits_common::{KitId, KitInfo};
use std::sync::Arc;

/// 组件注册表 trait
///
/// 注册序列只追加，不去重，不重排。
pub trait KitRegistry {
    /// 注册共享组件
    ///
    /// 组件立即对查找可见，并进入待初始化队列。注册不会失败。
    fn register_shared(&mut self, kit: Arc<dyn Kit>) -> KitId;

    /// 所有已注册组件的描述信息，按注册顺序
    fn kits(&self) -> Vec<KitInfo>;

    /// 待初始化队列长度
    fn pending(&self) -> usize;
}

/// 注册表的泛型便捷方法
pub trait RegistryExt: KitRegistry {
    /// 注册组件，组件所有权移交给注册表
    fn register<K: Kit>(&mut self, kit: K) -> KitId {
        self.register_shared(Arc::new(kit))
    }

    /// 注册调用方同时持有的组件
    fn register_arc<K: Kit>(&mut self, kit: Arc<K>) -> KitId {
        self.register_shared(kit)
    }
}

impl<R: KitRegistry + ?Sized> RegistryExt for R {}
