//! 组件宏集成测试

use kits_abstractions::prelude::*;
use kits_common::{CapabilityId, PoolConfig};
use kits_impl::{installed_kits, KitPool};
use kits_macros::kit;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

pub trait Ticker: Send + Sync {
    fn interval(&self) -> u64;
}

/// 同时提供两个能力并带启动钩子的组件
#[kit(name = "system-clock", provides(dyn Clock, dyn Ticker), startup)]
#[derive(Debug, Default)]
pub struct SystemClock {
    started: AtomicBool,
}

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        42
    }
}

impl Ticker for SystemClock {
    fn interval(&self) -> u64 {
        10
    }
}

impl Startup for SystemClock {
    fn start(&self, _context: &mut dyn KitContext) {
        self.started.store(true, Ordering::SeqCst);
    }
}

/// 无参数组件：不声明任何能力
#[kit]
#[derive(Debug)]
pub struct Inert;

/// 自安装组件
#[kit(provides(dyn Clock), install)]
#[derive(Debug, Default)]
pub struct InstalledClock;

impl Clock for InstalledClock {
    fn now(&self) -> u64 {
        7
    }
}

#[test]
fn test_kit_macro_generates_name_and_capabilities() {
    let mut pool = KitPool::new();
    let clock = Arc::new(SystemClock::default());
    let id = pool.register_arc(Arc::clone(&clock));

    let kits = pool.kits();
    let info = &kits[id.index()];
    assert_eq!(info.name, "system-clock");
    assert_eq!(
        info.capabilities,
        vec![
            CapabilityId::of::<dyn Clock>(),
            CapabilityId::of::<dyn Ticker>(),
            CapabilityId::of::<dyn Startup>(),
        ]
    );

    pool.init();
    assert!(clock.started.load(Ordering::SeqCst));
    assert_eq!(pool.find_one::<dyn Ticker>().unwrap().interval(), 10);
}

#[test]
fn test_kit_without_arguments_uses_type_name() {
    let mut pool = KitPool::new();
    let id = pool.register(Inert);

    let kits = pool.kits();
    let info = &kits[id.index()];
    assert!(info.name.ends_with("Inert"));
    assert!(info.capabilities.is_empty());
}

#[test]
fn test_install_registers_through_ctor() {
    assert!(installed_kits()
        .iter()
        .any(|name| name.ends_with("InstalledClock")));

    let mut pool = KitPool::with_installed(PoolConfig::default());
    assert_eq!(pool.find_one::<dyn Clock>().unwrap().now(), 7);

    // 显式注册的组件排在安装组件之后，覆盖同一能力
    pool.register(SystemClock::default());
    assert_eq!(pool.find_one::<dyn Clock>().unwrap().now(), 42);
    assert_eq!(pool.find_all::<dyn Clock>().unwrap().len(), 2);
}
