//! 冲突检测器抽象接口

use crate::sink::RegistrySink;
use autowire_common::{ContractType, TypeInfo};

/// 冲突检测器 trait
///
/// 针对当前注册表状态的只读检查：查找与给定契约和键冲突的
/// 既有注册。是否中止由调用方决定。
pub trait ConflictDetector: Send + Sync {
    /// 查找冲突的既有注册
    ///
    /// 键的相等性规则：无键仅与无键相等，否则按字符串精确比较。
    /// 注册表为插入有序，返回最早的冲突实现类型；无冲突返回 `None`。
    fn find_conflict(
        &self,
        contract: &ContractType,
        key: Option<&str>,
        registry: &dyn RegistrySink,
    ) -> Option<TypeInfo>;
}
