//! 初始化队列抽象接口

/// 组件初始化器 trait
pub trait KitInitializer {
    /// 依次取出待初始化组件并调用其启动钩子
    ///
    /// 钩子中新注册的组件同样会在返回前完成初始化。
    /// 没有新注册组件时重复调用不做任何事。
    fn init(&mut self);
}
