//! 组件初始化

use crate::pool::{KitPool, PoolState};
use kits_abstractions::KitInitializer;
use kits_common::KitState;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info};

impl KitInitializer for KitPool {
    fn init(&mut self) {
        if self.state == PoolState::Initializing {
            // 钩子内的注册只入队，由外层循环负责排空
            return;
        }
        self.state = PoolState::Initializing;

        let mut drained = 0usize;
        let mut started = 0usize;

        while let Some(index) = self.pending.pop_front() {
            let Some(registered) = self.kits.get_mut(index) else {
                continue;
            };
            drained += 1;

            // 先标记再调用，保证每个组件至多初始化一次
            registered.info.state = KitState::Initialized;
            let name = registered.info.name;
            let Some(hook) = registered.startup.clone() else {
                continue;
            };

            debug!("执行启动钩子: {}", name);
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| hook.start(self))) {
                // 恢复就绪状态，剩余队列留给下一次 init
                self.state = PoolState::Ready;
                error!(
                    "启动钩子 {} 发生 panic，初始化中止，剩余 {} 个组件待初始化",
                    name,
                    self.pending.len()
                );
                panic::resume_unwind(payload);
            }
            started += 1;
        }

        self.state = PoolState::Ready;
        info!(
            "组件初始化完成: 出队 {} 个, 执行启动钩子 {} 个",
            drained, started
        );
    }
}
