//! 组件池配置

use crate::errors::ConfigResult;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 默认配置文件（不含扩展名，支持 toml/json/yaml）
pub const DEFAULT_CONFIG_FILE: &str = "config/kits";

/// 环境变量前缀，例如 `KITS__LATE_REGISTRATION=immediate`
pub const ENV_PREFIX: &str = "KITS";

/// 初始化完成后再注册组件时的处理策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LateRegistration {
    /// 组件立即可被查找，但启动钩子要等到下一次 `init()` 才执行
    #[default]
    Deferred,
    /// 注册时立即执行初始化，钩子在 `register` 返回前运行
    Immediate,
}

/// 组件池配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// 迟到注册策略
    pub late_registration: LateRegistration,
    /// 日志配置
    pub logging: LoggingConfig,
}

impl PoolConfig {
    /// 从默认配置文件和环境变量加载
    ///
    /// 配置文件可以不存在，缺失的字段使用默认值。
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// 从指定配置文件（可不存在）和环境变量加载
    pub fn load_from(path: &str) -> ConfigResult<Self> {
        debug!("加载组件池配置: {}", path);

        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config = settings.try_deserialize::<Self>()?;
        debug!("组件池配置加载完成: {:?}", config);
        Ok(config)
    }

    /// 从 TOML 文本加载
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize::<Self>()?)
    }

    /// 设置迟到注册策略
    pub fn with_late_registration(mut self, policy: LateRegistration) -> Self {
        self.late_registration = policy;
        self
    }

    /// 设置日志配置
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}
