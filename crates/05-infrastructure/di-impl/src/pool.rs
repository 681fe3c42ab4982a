//! 组件池

use kits_abstractions::{Kit, Provision, Startup};
use kits_common::{CapabilityId, KitInfo, PoolConfig};
use std::any::TypeId;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::Arc;

/// 组件池阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolState {
    /// 尚未执行过初始化
    #[default]
    Registering,
    /// 正在排空初始化队列
    Initializing,
    /// 初始化队列已排空过至少一次
    Ready,
}

/// 已注册组件
pub(crate) struct RegisteredKit {
    pub(crate) kit: Arc<dyn Kit>,
    pub(crate) info: KitInfo,
    pub(crate) startup: Option<Arc<dyn Startup>>,
}

/// 能力表条目
pub(crate) struct CapabilityEntry {
    pub(crate) id: CapabilityId,
    pub(crate) providers: Vec<Provision>,
}

/// 组件池
///
/// 注册表、初始化器和查找器共享的显式上下文对象。注册和初始化需要 `&mut`，
/// 查找只需要 `&`，因此"先注册再查找"的约定体现在借用规则上。
/// 池内部没有锁，初始化完成后可以放进 `Arc` 只读共享。
pub struct KitPool {
    pub(crate) config: PoolConfig,
    /// 注册序列，下标即 `KitId`
    pub(crate) kits: Vec<RegisteredKit>,
    /// 待初始化队列
    pub(crate) pending: VecDeque<usize>,
    /// 能力表：能力类型ID -> 按注册顺序排列的供给
    pub(crate) table: HashMap<TypeId, CapabilityEntry>,
    /// 能力首次声明顺序
    pub(crate) declared: Vec<TypeId>,
    pub(crate) state: PoolState,
}

impl KitPool {
    /// 使用默认配置创建空组件池
    pub fn new() -> Self {
        Self::with_config(PoolConfig::default())
    }

    /// 使用指定配置创建空组件池
    pub fn with_config(config: PoolConfig) -> Self {
        Self {
            config,
            kits: Vec::new(),
            pending: VecDeque::new(),
            table: HashMap::new(),
            declared: Vec::new(),
            state: PoolState::Registering,
        }
    }

    /// 组件池配置
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// 当前阶段
    pub fn state(&self) -> PoolState {
        self.state
    }

    /// 已注册组件数量
    pub fn len(&self) -> usize {
        self.kits.len()
    }

    /// 是否没有注册任何组件
    pub fn is_empty(&self) -> bool {
        self.kits.is_empty()
    }

    /// 按注册顺序遍历组件实例
    pub fn instances(&self) -> impl Iterator<Item = &Arc<dyn Kit>> + '_ {
        self.kits.iter().map(|registered| &registered.kit)
    }
}

impl Default for KitPool {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KitPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KitPool")
            .field("state", &self.state)
            .field("kits", &self.kits.iter().map(|k| k.info.name).collect::<Vec<_>>())
            .field("capabilities", &self.declared.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}
