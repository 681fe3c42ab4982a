//! 元数据定义
//!
//! 提供组件和能力的元数据信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称（含模块路径）
    pub name: &'static str,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径和 `dyn` 前缀）
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 能力标识
///
/// 能力通常是一个 trait 对象类型（如 `dyn Clock`），以其 `TypeId` 作为能力表的键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityId(TypeInfo);

impl CapabilityId {
    /// 获取能力类型对应的标识
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self(TypeInfo::of::<C>())
    }

    /// 能力类型ID
    pub fn type_id(&self) -> TypeId {
        self.0.id
    }

    /// 完整能力名称，例如 `dyn app::Clock`
    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// 简短能力名称，例如 `Clock`
    pub fn short_name(&self) -> &'static str {
        self.0.short_name()
    }

    /// 检查名称是否指向该能力（完整名称或简短名称）
    pub fn matches_name(&self, name: &str) -> bool {
        self.name() == name || self.short_name() == name
    }
}

impl fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 组件注册序号
///
/// 按注册顺序单调递增，同时是组件在注册序列中的下标。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KitId(usize);

impl KitId {
    /// 由注册序列下标创建
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// 注册序列下标
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for KitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 组件生命周期状态
///
/// 只有 `Registered -> Initialized` 一个方向，组件不会被销毁。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KitState {
    /// 已注册，尚未经过初始化
    #[default]
    Registered,
    /// 已经过初始化队列（有启动钩子则已执行）
    Initialized,
}

/// 组件描述信息
#[derive(Debug, Clone)]
pub struct KitInfo {
    /// 注册序号
    pub id: KitId,
    /// 组件名称
    pub name: &'static str,
    /// 组件具体类型
    pub type_info: TypeInfo,
    /// 组件声明的能力，按声明顺序
    pub capabilities: Vec<CapabilityId>,
    /// 生命周期状态
    pub state: KitState,
}

impl KitInfo {
    /// 组件是否提供指定能力
    pub fn provides(&self, capability: &CapabilityId) -> bool {
        self.capabilities.contains(capability)
    }
}

/// 去掉模块路径、`dyn` 前缀和附加的 trait 约束
fn short_type_name(name: &str) -> &str {
    let name = name.strip_prefix("dyn ").unwrap_or(name);
    let name = &name[..bounds_start(name)];
    // 泛型参数中也可能出现 `::`，只截取泛型之前的部分
    let head = name.find('<').map_or(name, |pos| &name[..pos]);
    match head.rfind("::") {
        Some(pos) => &name[pos + 2..],
        None => name,
    }
}

/// 泛型参数之外第一个 ` + ` 的位置，没有时为名称长度
fn bounds_start(name: &str) -> usize {
    let mut depth = 0usize;
    for (pos, ch) in name.char_indices() {
        match ch {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ' ' if depth == 0 && name[pos..].starts_with(" + ") => return pos,
            _ => {}
        }
    }
    name.len()
}
