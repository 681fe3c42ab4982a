//! 组件自安装
//!
//! 组件可以在各自的 crate 中通过 `ctor` 构造函数调用 [`install_kit`] 把工厂登记到
//! 进程级安装表，应用再用 [`KitPool::with_installed`] 一次性注册到显式组件池中。
//! 安装表只保存工厂，组件实例属于组件池。

use crate::pool::KitPool;
use kits_abstractions::{Kit, KitRegistry};
use kits_common::PoolConfig;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

type KitFactory = Box<dyn Fn() -> Arc<dyn Kit> + Send + Sync>;

/// 安装表条目
struct Installer {
    name: &'static str,
    factory: KitFactory,
}

/// 进程级安装表
static INSTALLED: Lazy<Mutex<Vec<Installer>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// 登记组件工厂
///
/// 工厂按登记顺序保存。由 `ctor` 触发时，不同构造函数之间的执行顺序由链接器决定，
/// 需要确定覆盖顺序的组件应显式注册。
pub fn install_kit<K, F>(factory: F)
where
    K: Kit,
    F: Fn() -> K + Send + Sync + 'static,
{
    INSTALLED.lock().push(Installer {
        name: std::any::type_name::<K>(),
        factory: Box::new(move || Arc::new(factory()) as Arc<dyn Kit>),
    });
}

/// 已登记的组件类型名，按登记顺序
pub fn installed_kits() -> Vec<&'static str> {
    INSTALLED.lock().iter().map(|installer| installer.name).collect()
}

impl KitPool {
    /// 创建组件池并注册安装表中的全部组件
    pub fn with_installed(config: PoolConfig) -> Self {
        let mut pool = Self::with_config(config);
        pool.register_installed();
        pool
    }

    /// 注册安装表中的全部组件，返回注册数量
    ///
    /// 每次调用都会用工厂创建新实例。
    pub fn register_installed(&mut self) -> usize {
        // 先在锁内创建实例，注册时不持有锁，启动钩子可以继续登记工厂
        let kits: Vec<Arc<dyn Kit>> = INSTALLED
            .lock()
            .iter()
            .map(|installer| (installer.factory)())
            .collect();

        let count = kits.len();
        for kit in kits {
            self.register_shared(kit);
        }

        info!("从安装表注册了 {} 个组件", count);
        count
    }
}
