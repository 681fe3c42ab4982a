//! # 组件池演示
//!
//! 演示组件池的完整使用流程：
//! - 通过 `#[kit(install)]` 自安装组件
//! - 显式注册组件并在启动钩子中注册子组件
//! - 按能力查找单个实现和全部实现
//! - 在异步任务间共享初始化后的组件池

use kits_abstractions::prelude::*;
use kits_common::{init_logging, PoolConfig};
use kits_impl::KitPool;
use kits_macros::kit;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// 键值存储能力
pub trait Store: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: String);
}

/// 问候能力
pub trait Greeter: Send + Sync {
    fn greet(&self, who: &str) -> String;
}

/// 审计能力
pub trait Auditor: Send + Sync {
    fn record(&self, event: &str);
}

/// 内存存储，进程启动时自安装
#[kit(name = "memory-store", provides(dyn Store), startup, install)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn put(&self, key: &str, value: String) {
        self.entries.write().insert(key.to_string(), value);
    }
}

impl Startup for MemoryStore {
    fn start(&self, _context: &mut dyn KitContext) {
        self.put("greeting", "你好".to_string());
        info!("内存存储已就绪");
    }
}

/// 控制台审计
#[kit(provides(dyn Auditor))]
#[derive(Debug, Default)]
pub struct ConsoleAuditor;

impl Auditor for ConsoleAuditor {
    fn record(&self, event: &str) {
        info!("审计: {}", event);
    }
}

/// 使用存储中问候语的问候组件
///
/// 启动时注册审计组件，演示钩子中的重入注册。
#[kit(name = "store-greeter", provides(dyn Greeter), startup)]
#[derive(Debug, Default)]
pub struct StoreGreeter {
    greeting: RwLock<Option<String>>,
}

impl Greeter for StoreGreeter {
    fn greet(&self, who: &str) -> String {
        let greeting = self.greeting.read();
        format!("{}，{}", greeting.as_deref().unwrap_or("hello"), who)
    }
}

impl Startup for StoreGreeter {
    fn start(&self, context: &mut dyn KitContext) {
        // 存储的钩子在本组件之前运行，问候语已写入
        let mut store: Option<Arc<dyn Store>> = None;
        match context.find(&mut store) {
            Ok(()) => {
                *self.greeting.write() = store.and_then(|store| store.get("greeting"));
            }
            Err(e) => warn!("问候组件未找到存储: {}", e),
        }

        context.register(ConsoleAuditor);
    }
}

/// 固定文本问候，后注册时覆盖 `Greeter` 的单值查找
#[kit(name = "plain-greeter", provides(dyn Greeter))]
#[derive(Debug)]
pub struct PlainGreeter {
    prefix: &'static str,
}

impl Greeter for PlainGreeter {
    fn greet(&self, who: &str) -> String {
        format!("{} {}", self.prefix, who)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PoolConfig::load()?;
    init_logging(&config.logging)?;

    info!("组件池演示程序启动");

    let mut pool = KitPool::with_installed(config);
    pool.register(StoreGreeter::default());
    pool.init();

    for kit in pool.kits() {
        info!(
            "组件 {} {} 提供 {} 个能力 ({:?})",
            kit.id,
            kit.name,
            kit.capabilities.len(),
            kit.state
        );
    }

    // 迟到注册：按默认策略立即可查找，钩子等待下一次 init
    pool.register(PlainGreeter { prefix: "Hi" });
    pool.init();

    let mut greeter: Option<Arc<dyn Greeter>> = None;
    pool.must_find(&mut greeter);
    if let Some(greeter) = &greeter {
        info!("最后注册的问候: {}", greeter.greet("world"));
    }

    let mut greeters: Vec<Arc<dyn Greeter>> = Vec::new();
    pool.find(&mut greeters)?;

    let pool = Arc::new(pool);
    let mut tasks = Vec::new();
    for (index, greeter) in greeters.into_iter().enumerate() {
        let pool = Arc::clone(&pool);
        tasks.push(tokio::spawn(async move {
            let message = greeter.greet(&format!("task-{index}"));
            if let Ok(Some(auditor)) = pool.try_find::<dyn Auditor>() {
                auditor.record(&message);
            }
            message
        }));
    }

    for task in tasks {
        info!("任务完成: {}", task.await?);
    }

    match pool.find_one::<dyn std::fmt::Display>() {
        Ok(_) => info!("意外找到 Display 能力"),
        Err(e) => info!("预期的查找失败: {}", e),
    }

    info!("组件池演示程序结束");
    Ok(())
}
