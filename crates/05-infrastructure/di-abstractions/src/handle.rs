//! 查找句柄
//!
//! 句柄描述调用方需要的能力以及需要的数量：
//!
//! - `Option<Arc<C>>` 接收最后注册的一个匹配组件
//! - `Vec<Arc<C>>` 按注册顺序接收全部匹配组件

use crate::capability::Provision;
use kits_common::{CapabilityId, KitError, KitResult};
use std::sync::Arc;

/// 句柄需要的结果数量
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// 单个值，取最后注册的匹配
    One,
    /// 全部匹配，保持注册顺序
    All,
}

/// 查找结果的承载句柄
pub trait Handle {
    /// 句柄请求的能力
    fn capability(&self) -> CapabilityId;

    /// 句柄需要的结果数量
    fn cardinality(&self) -> Cardinality;

    /// 写入选中的供给
    ///
    /// 所有供给都转换成功后才修改句柄，失败时句柄保持原样。
    fn assign(&mut self, provisions: &[Provision]) -> KitResult<()>;

    /// 句柄类型名，用于错误信息
    fn describe(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<C: ?Sized + 'static> Handle for Option<Arc<C>> {
    fn capability(&self) -> CapabilityId {
        CapabilityId::of::<C>()
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::One
    }

    fn assign(&mut self, provisions: &[Provision]) -> KitResult<()> {
        let last = provisions
            .last()
            .ok_or_else(|| KitError::not_found(self.capability().name()))?;
        *self = Some(last.downcast::<C>()?);
        Ok(())
    }
}

impl<C: ?Sized + 'static> Handle for Vec<Arc<C>> {
    fn capability(&self) -> CapabilityId {
        CapabilityId::of::<C>()
    }

    fn cardinality(&self) -> Cardinality {
        Cardinality::All
    }

    fn assign(&mut self, provisions: &[Provision]) -> KitResult<()> {
        if provisions.is_empty() {
            return Err(KitError::not_found(self.capability().name()));
        }
        let values = provisions
            .iter()
            .map(Provision::downcast::<C>)
            .collect::<KitResult<Vec<_>>>()?;
        *self = values;
        Ok(())
    }
}
