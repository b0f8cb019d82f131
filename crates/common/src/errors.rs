//! 错误类型定义

use crate::metadata::{ContractType, TypeInfo};
use thiserror::Error;

/// 注册错误类型
///
/// 两类错误均会中止当前注册批次：错误立即向调用方传播，不重试，
/// 失败候选项之前已追加的描述符保留在注册表中。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// 候选类型实现了多个直接接口且未显式指定契约类型
    #[error("服务契约歧义: 类型 {type_name} 实现了多个直接接口，且未显式指定契约类型，请提供契约类型以消除歧义")]
    AmbiguousContract { type_name: String },

    /// 同一契约与键的组合已存在注册
    #[error("检测到重复注册: 类型 {new_type} 尝试以契约 {contract} (键: {key}) 注册，与已注册的类型 {existing_type} 冲突，不允许重复注册")]
    DuplicateRegistration {
        new_type: String,
        existing_type: String,
        contract: String,
        key: String,
    },
}

impl RegistrationError {
    /// 创建契约歧义错误
    pub fn ambiguous_contract(implementation: &TypeInfo) -> Self {
        Self::AmbiguousContract {
            type_name: implementation.name.clone(),
        }
    }

    /// 创建重复注册错误
    pub fn duplicate_registration(
        new_type: &TypeInfo,
        existing_type: &TypeInfo,
        contract: &ContractType,
        key: Option<&str>,
    ) -> Self {
        Self::DuplicateRegistration {
            new_type: new_type.name.clone(),
            existing_type: existing_type.name.clone(),
            contract: contract.to_string(),
            key: key.map_or_else(|| "无".to_string(), |k| format!("\"{k}\"")),
        }
    }
}

/// 结果类型别名
pub type RegistrationResult<T> = Result<T, RegistrationError>;
