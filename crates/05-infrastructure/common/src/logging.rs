//! 日志初始化

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 日志配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 过滤指令，语法同 `RUST_LOG`，例如 `info` 或 `kits_impl=debug`
    pub level: String,
    /// 是否输出 JSON 格式
    pub json_format: bool,
    /// 是否显示日志目标
    pub show_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            show_target: true,
        }
    }
}

/// 初始化全局日志订阅者
///
/// 进程内只能成功一次，重复调用返回 [`ConfigError::LoggingInit`]。
pub fn init_logging(config: &LoggingConfig) -> ConfigResult<()> {
    let filter = EnvFilter::try_new(&config.level).map_err(|_| ConfigError::InvalidValue {
        key: "logging.level".to_string(),
        value: config.level.clone(),
    })?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.show_target);

    if config.json_format {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    }
    .map_err(|e| ConfigError::LoggingInit {
        message: e.to_string(),
    })?;

    info!("日志系统初始化完成");
    Ok(())
}
