//! 服务描述符定义

use crate::lifetime::Lifetime;
use crate::metadata::{ContractType, TypeInfo};

/// 服务描述符
///
/// 注册引擎的输出单元。每个成功处理的候选项恰好产生一个描述符，
/// 追加进注册表后不再修改，归宿主容器所有。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor {
    /// 契约类型
    pub contract: ContractType,
    /// 服务键
    pub key: Option<String>,
    /// 实现类型
    pub implementation: TypeInfo,
    /// 服务生命周期
    pub lifetime: Lifetime,
}

impl Descriptor {
    /// 创建新的服务描述符
    pub fn new(
        contract: ContractType,
        key: Option<String>,
        implementation: TypeInfo,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            contract,
            key,
            implementation,
            lifetime,
        }
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} (键: {}, 生命周期: {})",
            self.contract,
            self.implementation,
            self.key.as_deref().unwrap_or("无"),
            self.lifetime
        )
    }
}
