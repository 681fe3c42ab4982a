//! 能力查找抽象接口
//!
//! [`KitLocator`] 只负责把能力解析为按注册顺序排列的供给列表，
//! [`LocatorExt`] 在此之上实现句柄填充和覆盖规则：单值句柄取最后注册的匹配，
//! 序列句柄取全部匹配。

use crate::capability::{CapabilityInfo, Provision};
use crate::handle::{Cardinality, Handle};
use kits_common::{CapabilityId, KitError, KitResult, KitResultExt};
use std::slice;
use std::sync::Arc;
use tracing::trace;

/// 能力查找 trait
pub trait KitLocator {
    /// 解析能力
    ///
    /// 返回所有提供该能力的供给，按注册顺序且非空。
    /// 请求的是已注册组件的具体类型时返回 [`KitError::NonInterface`]，
    /// 没有提供者时返回 [`KitError::NotFound`]。
    fn resolve(&self, capability: &CapabilityId) -> KitResult<&[Provision]>;

    /// 按名称查找已声明的能力
    ///
    /// 名称可以是完整名称（`dyn app::Clock`）或简短名称（`Clock`）。
    fn capability_named(&self, name: &str) -> KitResult<CapabilityId>;

    /// 所有已声明的能力及其提供者，按首次声明顺序
    fn capabilities(&self) -> Vec<CapabilityInfo>;
}

/// 查找的泛型便捷方法
pub trait LocatorExt: KitLocator {
    /// 查找能力并填充句柄
    ///
    /// 失败时句柄保持原样。
    fn find<H: Handle + ?Sized>(&self, handle: &mut H) -> KitResult<()> {
        let capability = handle.capability();
        let provisions = self.resolve(&capability)?;

        let selected = match handle.cardinality() {
            Cardinality::One => match provisions.last() {
                Some(last) => slice::from_ref(last),
                None => return Err(KitError::not_found(capability.name())),
            },
            Cardinality::All => provisions,
        };

        trace!(
            "填充句柄: {} <- {} 个 {} 供给",
            handle.describe(),
            selected.len(),
            capability
        );
        handle.assign(selected)
    }

    /// 按能力名称查找并填充句柄
    ///
    /// 名称解析出的能力与句柄元素类型不一致时返回 [`KitError::Unassignable`]。
    fn find_named<H: Handle + ?Sized>(&self, name: &str, handle: &mut H) -> KitResult<()> {
        let capability = self.capability_named(name)?;
        if capability != handle.capability() {
            return Err(KitError::unassignable(handle.describe(), capability.name()));
        }
        self.find(handle)
    }

    /// 查找必需能力，失败时 panic
    ///
    /// 仅用于能力缺失属于编程错误的场景。
    #[track_caller]
    fn must_find<H: Handle + ?Sized>(&self, handle: &mut H) {
        self.find(handle).or_abort();
    }

    /// 查找最后注册的能力提供者
    fn find_one<C: ?Sized + 'static>(&self) -> KitResult<Arc<C>> {
        let mut handle: Option<Arc<C>> = None;
        self.find(&mut handle)?;
        handle.ok_or_else(|| KitError::not_found(CapabilityId::of::<C>().name()))
    }

    /// 查找全部能力提供者，按注册顺序
    fn find_all<C: ?Sized + 'static>(&self) -> KitResult<Vec<Arc<C>>> {
        let mut handle: Vec<Arc<C>> = Vec::new();
        self.find(&mut handle)?;
        Ok(handle)
    }

    /// 查找可选协作者
    ///
    /// 只有 [`KitError::NotFound`] 被视为缺失，其余错误仍然返回。
    fn try_find<C: ?Sized + 'static>(&self) -> KitResult<Option<Arc<C>>> {
        match self.find_one::<C>() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl<L: KitLocator + ?Sized> LocatorExt for L {}
