//! 组件池端到端集成测试：启动钩子、迟到注册与配置

use kits_abstractions::prelude::*;
use kits_common::{KitState, LateRegistration, PoolConfig};
use kits_impl::{KitPool, PoolState};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::thread;

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// 记录启动顺序的共享日志
type StartLog = Arc<Mutex<Vec<&'static str>>>;

trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

trait Cache: Send + Sync {
    fn backend(&self) -> &'static str;
}

/// 内存存储，启动时写入日志
#[derive(Debug)]
struct MemoryStorage {
    log: StartLog,
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        (key == "greeting").then(|| "hello".to_string())
    }
}

impl Startup for MemoryStorage {
    fn start(&self, _context: &mut dyn KitContext) {
        self.log.lock().unwrap().push("storage");
    }
}

impl Kit for MemoryStorage {
    fn provide(self: Arc<Self>, capabilities: &mut Capabilities) {
        capabilities
            .provide::<dyn Storage>(self.clone())
            .provide::<dyn Startup>(self);
    }
}

/// 缓存，启动时查找存储并延迟注册一个子组件
#[derive(Debug)]
struct LayeredCache {
    log: StartLog,
    starts: AtomicUsize,
    saw_storage: AtomicUsize,
}

impl LayeredCache {
    fn new(log: StartLog) -> Self {
        Self {
            log,
            starts: AtomicUsize::new(0),
            saw_storage: AtomicUsize::new(0),
        }
    }
}

impl Cache for LayeredCache {
    fn backend(&self) -> &'static str {
        "layered"
    }
}

impl Startup for LayeredCache {
    fn start(&self, context: &mut dyn KitContext) {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push("cache");

        if let Ok(storage) = context.find_one::<dyn Storage>() {
            if storage.get("greeting").is_some() {
                self.saw_storage.fetch_add(1, Ordering::SeqCst);
            }
        }

        context.register(Warmer {
            log: Arc::clone(&self.log),
        });
    }
}

impl Kit for LayeredCache {
    fn provide(self: Arc<Self>, capabilities: &mut Capabilities) {
        capabilities
            .provide::<dyn Cache>(self.clone())
            .provide::<dyn Startup>(self);
    }
}

/// 由缓存在启动钩子中注册
#[derive(Debug)]
struct Warmer {
    log: StartLog,
}

impl Cache for Warmer {
    fn backend(&self) -> &'static str {
        "warmer"
    }
}

impl Startup for Warmer {
    fn start(&self, _context: &mut dyn KitContext) {
        self.log.lock().unwrap().push("warmer");
    }
}

impl Kit for Warmer {
    fn provide(self: Arc<Self>, capabilities: &mut Capabilities) {
        capabilities
            .provide::<dyn Cache>(self.clone())
            .provide::<dyn Startup>(self);
    }
}

/// 只计数的启动组件
#[derive(Debug, Default)]
struct Late {
    starts: AtomicUsize,
}

impl Startup for Late {
    fn start(&self, _context: &mut dyn KitContext) {
        self.starts.fetch_add(1, Ordering::SeqCst);
    }
}

impl Kit for Late {
    fn provide(self: Arc<Self>, capabilities: &mut Capabilities) {
        capabilities.provide::<dyn Startup>(self);
    }
}

fn new_log() -> StartLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[test]
fn test_hooks_run_in_registration_order_with_reentrant_registration() {
    init_test_logger();
    let log = new_log();
    let mut pool = KitPool::new();

    let cache = Arc::new(LayeredCache::new(Arc::clone(&log)));
    pool.register_arc(Arc::clone(&cache));
    pool.register(MemoryStorage {
        log: Arc::clone(&log),
    });
    assert_eq!(pool.pending(), 2);

    pool.init();

    // 钩子中注册的组件排在队尾，同样在 init 返回前完成初始化
    assert_eq!(*log.lock().unwrap(), vec!["cache", "storage", "warmer"]);
    assert_eq!(cache.starts.load(Ordering::SeqCst), 1);
    assert_eq!(pool.pending(), 0);
    assert_eq!(pool.len(), 3);
    assert!(pool
        .kits()
        .iter()
        .all(|info| info.state == KitState::Initialized));

    // 查找不依赖初始化：缓存启动时存储尚未初始化但已注册
    assert_eq!(cache.saw_storage.load(Ordering::SeqCst), 1);

    // 后注册的 Warmer 覆盖缓存能力
    assert_eq!(pool.find_one::<dyn Cache>().unwrap().backend(), "warmer");
    let backends: Vec<_> = pool
        .find_all::<dyn Cache>()
        .unwrap()
        .iter()
        .map(|cache| cache.backend())
        .collect();
    assert_eq!(backends, vec!["layered", "warmer"]);
}

#[test]
fn test_second_init_is_noop_without_new_registrations() {
    init_test_logger();
    let log = new_log();
    let mut pool = KitPool::new();
    pool.register(MemoryStorage {
        log: Arc::clone(&log),
    });

    pool.init();
    pool.init();

    assert_eq!(*log.lock().unwrap(), vec!["storage"]);
}

#[test]
fn test_late_registration_is_deferred_by_default() {
    init_test_logger();
    let mut pool = KitPool::new();
    pool.init();
    assert_eq!(pool.state(), PoolState::Ready);

    let late = Arc::new(Late::default());
    let id = pool.register_arc(Arc::clone(&late));

    // 立即可查找，但钩子要等下一次 init
    assert_eq!(late.starts.load(Ordering::SeqCst), 0);
    assert_eq!(pool.pending(), 1);
    assert_eq!(pool.kits()[id.index()].state, KitState::Registered);
    assert!(pool.find_one::<dyn Startup>().is_ok());

    pool.init();
    assert_eq!(late.starts.load(Ordering::SeqCst), 1);
    assert_eq!(pool.kits()[id.index()].state, KitState::Initialized);
}

#[test]
fn test_late_registration_immediate_policy() {
    init_test_logger();
    let config = PoolConfig::default().with_late_registration(LateRegistration::Immediate);
    let mut pool = KitPool::with_config(config);

    // 初始化之前注册仍然等待 init
    let early = Arc::new(Late::default());
    pool.register_arc(Arc::clone(&early));
    assert_eq!(early.starts.load(Ordering::SeqCst), 0);

    pool.init();
    assert_eq!(early.starts.load(Ordering::SeqCst), 1);

    let late = Arc::new(Late::default());
    pool.register_arc(Arc::clone(&late));
    assert_eq!(late.starts.load(Ordering::SeqCst), 1);
    assert_eq!(pool.pending(), 0);
    assert_eq!(early.starts.load(Ordering::SeqCst), 1);
}

#[test]
fn test_immediate_policy_from_config_file() {
    init_test_logger();
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "late_registration = \"immediate\"").unwrap();
    writeln!(file, "[logging]").unwrap();
    writeln!(file, "level = \"warn\"").unwrap();

    let path = file.path().to_str().unwrap();
    let config = PoolConfig::load_from(path).unwrap();
    assert_eq!(config.late_registration, LateRegistration::Immediate);
    assert_eq!(config.logging.level, "warn");

    let mut pool = KitPool::with_config(config);
    pool.init();
    let late = Arc::new(Late::default());
    pool.register_arc(Arc::clone(&late));
    assert_eq!(late.starts.load(Ordering::SeqCst), 1);
}

#[test]
fn test_initialized_pool_is_shareable_across_threads() {
    init_test_logger();
    let mut pool = KitPool::new();
    pool.register(MemoryStorage { log: new_log() });
    pool.init();

    let pool = Arc::new(pool);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                pool.find_one::<dyn Storage>()
                    .ok()
                    .and_then(|storage| storage.get("greeting"))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().as_deref(), Some("hello"));
    }
}

#[test]
fn test_capabilities_summary_lists_providers() {
    init_test_logger();
    let log = new_log();
    let mut pool = KitPool::new();
    pool.register(MemoryStorage {
        log: Arc::clone(&log),
    });
    pool.register(Warmer { log });

    let names: Vec<_> = pool
        .capabilities()
        .iter()
        .map(|info| (info.id.short_name(), info.providers.len()))
        .collect();
    assert_eq!(names, vec![("Storage", 1), ("Startup", 2), ("Cache", 1)]);
}
