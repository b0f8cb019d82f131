//! 基于直接接口集的契约解析器实现

use autowire_common::{Candidate, ContractType, RegistrationError, RegistrationResult};
use registry_abstractions::ContractResolver;
use tracing::debug;

/// 直接接口契约解析器
///
/// 从候选项的接口实现关系推导契约类型：
///
/// 1. 显式指定的契约类型始终优先，原样返回，不做泛型归一化；
/// 2. 否则计算直接接口集（类型实现的接口中排除基类型已实现的
///    接口），派生类型不会重新认领其祖先已拥有的契约；
/// 3. 无直接接口时回退为自注册，恰好一个时该接口即为契约，
///    两个以上报契约歧义错误；
/// 4. 推导出的封闭泛型实例化归一化为未绑定的泛型定义。
#[derive(Debug, Default)]
pub struct DirectContractResolver;

impl DirectContractResolver {
    /// 创建新的契约解析器
    pub fn new() -> Self {
        Self
    }
}

impl ContractResolver for DirectContractResolver {
    fn resolve(&self, candidate: &Candidate) -> RegistrationResult<ContractType> {
        if let Some(contract) = &candidate.contract_override {
            debug!(
                "使用显式契约类型: {} -> {}",
                candidate.implementation, contract
            );
            return Ok(contract.clone());
        }

        let direct_interfaces: Vec<&ContractType> = candidate
            .implemented_interfaces
            .iter()
            .filter(|interface| !candidate.base_interfaces.contains(interface))
            .collect();

        let resolved = match direct_interfaces.as_slice() {
            [] => {
                // 无直接接口时回退为自注册
                debug!("类型 {} 无直接接口，自注册", candidate.implementation);
                ContractType::Concrete(candidate.implementation.clone())
            }
            [single] => (*single).clone(),
            _ => return Err(RegistrationError::ambiguous_contract(&candidate.implementation)),
        };

        Ok(resolved.unbound())
    }
}
