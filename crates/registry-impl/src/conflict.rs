//! 基于注册表线性扫描的冲突检测器实现

use autowire_common::{ContractType, TypeInfo};
use registry_abstractions::{ConflictDetector, RegistrySink};

/// 注册表冲突检测器
///
/// 按插入顺序线性扫描注册表，返回第一个契约与键均相等的既有
/// 注册的实现类型。纯查找，无副作用。
///
/// 键的相等性：无键仅与无键相等；空字符串键是一个普通键值，
/// 与无键不等价。
#[derive(Debug, Default)]
pub struct RegistryConflictDetector;

impl RegistryConflictDetector {
    /// 创建新的冲突检测器
    pub fn new() -> Self {
        Self
    }
}

impl ConflictDetector for RegistryConflictDetector {
    fn find_conflict(
        &self,
        contract: &ContractType,
        key: Option<&str>,
        registry: &dyn RegistrySink,
    ) -> Option<TypeInfo> {
        registry
            .descriptors()
            .iter()
            .find(|descriptor| &descriptor.contract == contract && descriptor.key.as_deref() == key)
            .map(|descriptor| descriptor.implementation.clone())
    }
}
