//! 组件注册

use crate::pool::{CapabilityEntry, KitPool, PoolState, RegisteredKit};
use kits_abstractions::{Capabilities, Kit, KitInitializer, KitRegistry, Startup};
use kits_common::{CapabilityId, KitId, KitInfo, KitState, LateRegistration};
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tracing::{debug, info, warn};

impl KitRegistry for KitPool {
    fn register_shared(&mut self, kit: Arc<dyn Kit>) -> KitId {
        let id = KitId::new(self.kits.len());

        let type_info = kit.kit_type();
        let mut capabilities = Capabilities::new();
        Arc::clone(&kit).provide(&mut capabilities);

        // 具体组件类型不是能力，查找它总是返回 NonInterface
        if let Some(concrete) = capabilities.remove(type_info.id) {
            warn!("组件 {} 把自身具体类型 {} 声明为能力，已忽略", id, concrete);
        }

        let info = KitInfo {
            id,
            name: kit.name(),
            type_info,
            capabilities: capabilities.ids(),
            state: KitState::Registered,
        };
        info!(
            "注册组件: {} {} ({} 个能力)",
            id,
            info.name,
            info.capabilities.len()
        );

        let startup_id = CapabilityId::of::<dyn Startup>();
        let mut startup = None;
        for provision in capabilities.into_provisions(id) {
            let capability = provision.capability();
            debug!("  {} 提供能力 {}", info.name, capability);

            if capability == startup_id {
                startup = provision.downcast::<dyn Startup>().ok();
            }

            match self.table.entry(capability.type_id()) {
                Entry::Occupied(mut occupied) => occupied.get_mut().providers.push(provision),
                Entry::Vacant(vacant) => {
                    self.declared.push(capability.type_id());
                    vacant.insert(CapabilityEntry {
                        id: capability,
                        providers: vec![provision],
                    });
                }
            }
        }

        self.kits.push(RegisteredKit { kit, info, startup });
        self.pending.push_back(id.index());

        if self.state == PoolState::Ready {
            match self.config.late_registration {
                LateRegistration::Deferred => {
                    warn!(
                        "组件 {} 在初始化完成后注册，启动钩子将在下一次 init() 时执行",
                        id
                    );
                }
                LateRegistration::Immediate => {
                    debug!("组件 {} 在初始化完成后注册，立即初始化", id);
                    self.init();
                }
            }
        }

        id
    }

    fn kits(&self) -> Vec<KitInfo> {
        self.kits.iter().map(|registered| registered.info.clone()).collect()
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}
