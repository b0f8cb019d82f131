//! 注册候选项定义
//!
//! 候选项是扫描阶段产出的不可变快照，以显式构建的注册表项
//! 取代运行时反射读取的属性标注。

use crate::lifetime::Lifetime;
use crate::metadata::{ContractType, TypeInfo};

/// 注册候选项
///
/// 一个待注册的实现类型及其声明的注册元数据。引擎只读取候选项，
/// 从不修改。接口关系（自身实现的接口与基类型实现的接口）在构建
/// 候选项时一次性预计算，直接接口集由解析器按两者之差推导。
#[derive(Debug, Clone)]
pub struct Candidate {
    /// 实现类型
    pub implementation: TypeInfo,
    /// 类型实现的全部接口（有序，含继承自基类型的接口）
    pub implemented_interfaces: Vec<ContractType>,
    /// 基类型实现的接口（传递闭包）
    pub base_interfaces: Vec<ContractType>,
    /// 显式指定的契约类型
    pub contract_override: Option<ContractType>,
    /// 服务生命周期
    pub lifetime: Lifetime,
    /// 显式指定的服务键
    pub key: Option<String>,
    /// 是否使用键化标记约定
    ///
    /// 键化标记保证以类型简单名称作为唯一键，忽略显式键文本。
    pub keyed_marker: bool,
}

impl Candidate {
    /// 创建新的候选项
    pub fn new(implementation: TypeInfo) -> Self {
        Self {
            implementation,
            implemented_interfaces: Vec::new(),
            base_interfaces: Vec::new(),
            contract_override: None,
            lifetime: Lifetime::default(),
            key: None,
            keyed_marker: false,
        }
    }

    /// 从实现类型创建候选项
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::new(TypeInfo::of::<T>())
    }

    /// 添加类型实现的接口
    pub fn with_interface(mut self, interface: ContractType) -> Self {
        self.implemented_interfaces.push(interface);
        self
    }

    /// 添加基类型实现的接口
    pub fn with_base_interface(mut self, interface: ContractType) -> Self {
        self.base_interfaces.push(interface);
        self
    }

    /// 显式指定契约类型
    pub fn with_contract(mut self, contract: ContractType) -> Self {
        self.contract_override = Some(contract);
        self
    }

    /// 设置生命周期
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// 设置服务键
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// 使用键化标记约定
    pub fn keyed(mut self) -> Self {
        self.keyed_marker = true;
        self
    }
}
