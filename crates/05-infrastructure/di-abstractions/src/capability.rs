//! 能力声明与能力表条目

use kits_common::{CapabilityId, KitError, KitId, KitResult};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 类型擦除后的能力值，内部保存 `Arc<C>`
type ErasedValue = Arc<dyn Any + Send + Sync>;

/// 组件在注册时声明的能力集合
#[derive(Default)]
pub struct Capabilities {
    entries: Vec<(CapabilityId, ErasedValue)>,
}

impl Capabilities {
    /// 创建空的能力集合
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明一个能力
    ///
    /// `C` 通常是 trait 对象类型，调用方传入 `Arc<Self>` 时由编译器完成转换。
    /// 同一能力重复声明时保留最后一次的值和第一次的位置。
    pub fn provide<C>(&mut self, value: Arc<C>) -> &mut Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let id = CapabilityId::of::<C>();
        let erased: ErasedValue = Arc::new(value);

        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = erased,
            None => self.entries.push((id, erased)),
        }
        self
    }

    /// 移除类型为 `type_id` 的能力声明，返回被移除的能力
    pub fn remove(&mut self, type_id: TypeId) -> Option<CapabilityId> {
        let position = self
            .entries
            .iter()
            .position(|(id, _)| id.type_id() == type_id)?;
        Some(self.entries.remove(position).0)
    }

    /// 是否声明了指定能力
    pub fn contains(&self, capability: &CapabilityId) -> bool {
        self.entries.iter().any(|(id, _)| id == capability)
    }

    /// 声明的能力，按声明顺序
    pub fn ids(&self) -> Vec<CapabilityId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    /// 能力数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 是否未声明任何能力
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 绑定到注册序号，生成能力表条目
    pub fn into_provisions(self, kit: KitId) -> Vec<Provision> {
        self.entries
            .into_iter()
            .map(|(capability, value)| Provision {
                kit,
                capability,
                value,
            })
            .collect()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id.name()))
            .finish()
    }
}

/// 能力表条目：某个组件对某个能力的供给
#[derive(Clone)]
pub struct Provision {
    kit: KitId,
    capability: CapabilityId,
    value: ErasedValue,
}

impl Provision {
    /// 提供者的注册序号
    pub fn kit(&self) -> KitId {
        self.kit
    }

    /// 所供给的能力
    pub fn capability(&self) -> CapabilityId {
        self.capability
    }

    /// 取出具体能力值
    ///
    /// 请求的类型与供给的能力不一致时返回 [`KitError::Unassignable`]。
    pub fn downcast<C: ?Sized + 'static>(&self) -> KitResult<Arc<C>> {
        self.value
            .downcast_ref::<Arc<C>>()
            .cloned()
            .ok_or_else(|| {
                KitError::unassignable(std::any::type_name::<Arc<C>>(), self.capability.name())
            })
    }
}

impl fmt::Debug for Provision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provision")
            .field("kit", &self.kit)
            .field("capability", &self.capability.name())
            .field("value", &"<erased>")
            .finish()
    }
}

/// 能力摘要
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityInfo {
    /// 能力标识
    pub id: CapabilityId,
    /// 提供者，按注册顺序
    pub providers: Vec<KitId>,
}
