//! 类型元数据定义
//!
//! 提供类型标识和服务契约的元数据信息

use std::any::TypeId;
use std::fmt;

/// 类型信息
///
/// 标识一个具体类型或 trait 对象类型。开放泛型定义没有具体的
/// [`TypeId`]，通过 [`TypeInfo::from_name`] 以名称标识。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeInfo {
    /// 类型名称（不含模块路径）
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 模块路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    ///
    /// 支持 `dyn Trait` 等非 Sized 类型。
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: full_name.split("::").last().unwrap_or(full_name).to_string(),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 从类型名称创建类型信息
    ///
    /// 用于无法取得 [`TypeId`] 的场景（如开放泛型定义），
    /// 此时以占位符ID标识，相等性由名称决定。
    pub fn from_name(name: &str) -> Self {
        Self {
            name: name.split("::").last().unwrap_or(name).to_string(),
            id: TypeId::of::<()>(), // 占位符
            module_path: name.to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    pub fn short_name(&self) -> &str {
        self.name.split("::").last().unwrap_or(&self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// 服务契约类型
///
/// 候选类型最终绑定到的抽象类型。泛型契约以独立变体表示，
/// 区分封闭实例化与未绑定的泛型定义，归一化在解析阶段一次完成。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContractType {
    /// 非泛型契约
    Concrete(TypeInfo),
    /// 泛型契约
    Generic {
        /// 泛型定义
        definition: TypeInfo,
        /// 封闭实例化类型；`None` 表示未绑定的泛型定义
        instance: Option<TypeInfo>,
    },
}

impl ContractType {
    /// 从类型创建非泛型契约
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Concrete(TypeInfo::of::<T>())
    }

    /// 从类型名称创建非泛型契约
    pub fn from_name(name: &str) -> Self {
        Self::Concrete(TypeInfo::from_name(name))
    }

    /// 创建封闭泛型实例化契约
    ///
    /// `definition` 为泛型定义名称，`T` 为实例化后的具体类型。
    pub fn generic_of<T: ?Sized + 'static>(definition: &str) -> Self {
        Self::Generic {
            definition: TypeInfo::from_name(definition),
            instance: Some(TypeInfo::of::<T>()),
        }
    }

    /// 创建未绑定的泛型定义契约
    pub fn generic_definition(name: &str) -> Self {
        Self::Generic {
            definition: TypeInfo::from_name(name),
            instance: None,
        }
    }

    /// 是否为泛型契约
    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic { .. })
    }

    /// 是否为未绑定的泛型定义
    pub fn is_generic_definition(&self) -> bool {
        matches!(self, Self::Generic { instance: None, .. })
    }

    /// 归一化为未绑定的泛型定义
    ///
    /// 封闭实例化被归约到其泛型定义，使一次注册可服务于容器
    /// 请求的任意封闭实例化；非泛型契约原样返回。
    pub fn unbound(&self) -> Self {
        match self {
            Self::Generic { definition, .. } => Self::Generic {
                definition: definition.clone(),
                instance: None,
            },
            Self::Concrete(info) => Self::Concrete(info.clone()),
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete(info) => write!(f, "{}", info.name),
            Self::Generic {
                definition,
                instance: Some(instance),
            } => write!(f, "{}<{}>", definition.name, instance.name),
            Self::Generic {
                definition,
                instance: None,
            } => write!(f, "{}<_>", definition.name),
        }
    }
}
