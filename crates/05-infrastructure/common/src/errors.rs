//! 错误类型定义

use thiserror::Error;
use tracing::error;

/// 能力查找错误类型
///
/// 三种错误都表示误用或缺失，而非瞬时故障，重试没有意义。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KitError {
    /// 句柄无法承载解析出的能力
    #[error("查找目标不可赋值: 句柄 {handle} 无法承载能力 {capability}")]
    Unassignable { handle: String, capability: String },

    /// 请求的是具体组件类型而不是能力接口
    #[error("查找目标不是能力接口: {requested} 是具体组件类型")]
    NonInterface { requested: String },

    /// 没有已注册的组件提供该能力
    #[error("未找到匹配的组件: {capability}")]
    NotFound { capability: String },
}

impl KitError {
    /// 创建不可赋值错误
    pub fn unassignable(handle: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::Unassignable {
            handle: handle.into(),
            capability: capability.into(),
        }
    }

    /// 创建非接口错误
    pub fn non_interface(requested: impl Into<String>) -> Self {
        Self::NonInterface {
            requested: requested.into(),
        }
    }

    /// 创建未找到错误
    pub fn not_found(capability: impl Into<String>) -> Self {
        Self::NotFound {
            capability: capability.into(),
        }
    }

    /// 是否为未找到错误
    ///
    /// 可选协作者缺失时调用方通常只关心这一种情况。
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载失败: {source}")]
    LoadError {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置值无效: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("日志初始化失败: {message}")]
    LoggingInit { message: String },
}

/// 结果类型别名
pub type KitResult<T> = Result<T, KitError>;
pub type ConfigResult<T> = Result<T, ConfigError>;

/// 在调用点把查找错误升级为进程故障
///
/// 只在能力缺失属于编程错误时使用，可选协作者应直接处理 `Err`。
pub trait KitResultExt<T> {
    /// 成功时返回值，失败时记录错误并 panic
    fn or_abort(self) -> T;
}

impl<T> KitResultExt<T> for KitResult<T> {
    #[track_caller]
    fn or_abort(self) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                error!("必需能力解析失败: {}", e);
                panic!("{e}");
            }
        }
    }
}
