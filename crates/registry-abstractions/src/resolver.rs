//! 契约解析器抽象接口

use autowire_common::{Candidate, ContractType, RegistrationResult};

/// 契约解析器 trait
///
/// 为候选项确定其应绑定到的契约类型。解析是纯函数：不读取
/// 注册表状态，也不产生副作用。
pub trait ContractResolver: Send + Sync {
    /// 解析候选项的契约类型
    ///
    /// 候选类型实现多个直接接口且未显式指定契约时返回
    /// [`RegistrationError::AmbiguousContract`]。
    ///
    /// [`RegistrationError::AmbiguousContract`]: autowire_common::RegistrationError::AmbiguousContract
    fn resolve(&self, candidate: &Candidate) -> RegistrationResult<ContractType>;
}
