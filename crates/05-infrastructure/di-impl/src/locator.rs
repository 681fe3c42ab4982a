//! 能力查找

use crate::pool::{KitPool, RegisteredKit};
use kits_abstractions::{CapabilityInfo, KitLocator, Provision};
use kits_common::{CapabilityId, KitError, KitResult};
use std::any::TypeId;
use tracing::debug;

impl KitPool {
    /// 查找具体类型为 `type_id` 的已注册组件
    fn kit_of_type(&self, type_id: TypeId) -> Option<&RegisteredKit> {
        self.kits
            .iter()
            .find(|registered| registered.info.type_info.id == type_id)
    }

    /// 按完整或简短类型名查找已注册组件
    fn kit_named(&self, name: &str) -> Option<&RegisteredKit> {
        self.kits.iter().find(|registered| {
            let type_info = &registered.info.type_info;
            registered.info.name == name
                || type_info.name == name
                || type_info.short_name() == name
        })
    }

    /// 按首次声明顺序遍历已声明能力
    fn declared_capabilities(&self) -> impl DoubleEndedIterator<Item = CapabilityId> + '_ {
        self.declared
            .iter()
            .filter_map(|type_id| self.table.get(type_id))
            .map(|entry| entry.id)
    }
}

impl KitLocator for KitPool {
    fn resolve(&self, capability: &CapabilityId) -> KitResult<&[Provision]> {
        // 具体组件类型优先判定，即使某个组件把它声明成了能力
        if let Some(registered) = self.kit_of_type(capability.type_id()) {
            debug!("解析能力 {}: 请求的是具体组件类型", capability);
            return Err(KitError::non_interface(registered.info.type_info.name));
        }

        match self.table.get(&capability.type_id()) {
            Some(entry) if !entry.providers.is_empty() => {
                debug!(
                    "解析能力 {}: {} 个提供者",
                    capability,
                    entry.providers.len()
                );
                Ok(&entry.providers)
            }
            _ => {
                debug!("解析能力 {}: 没有提供者", capability);
                Err(KitError::not_found(capability.name()))
            }
        }
    }

    fn capability_named(&self, name: &str) -> KitResult<CapabilityId> {
        // 完整名称优先；简短名称冲突时取最后声明的能力
        let found = self
            .declared_capabilities()
            .find(|id| id.name() == name)
            .or_else(|| {
                self.declared_capabilities()
                    .rev()
                    .find(|id| id.short_name() == name)
            });

        if let Some(capability) = found {
            return Ok(capability);
        }

        if let Some(registered) = self.kit_named(name) {
            return Err(KitError::non_interface(registered.info.type_info.name));
        }

        Err(KitError::not_found(name))
    }

    fn capabilities(&self) -> Vec<CapabilityInfo> {
        self.declared
            .iter()
            .filter_map(|type_id| self.table.get(type_id))
            .map(|entry| CapabilityInfo {
                id: entry.id,
                providers: entry.providers.iter().map(Provision::kit).collect(),
            })
            .collect()
    }
}
