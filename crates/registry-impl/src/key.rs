//! 基于标记约定的服务键推导器实现

use autowire_common::Candidate;
use registry_abstractions::KeyDeriver;

/// 标记约定服务键推导器
///
/// 使用键化标记约定的候选项始终以实现类型的简单名称作为键，
/// 显式键文本被忽略：键化标记的目的是保证一个名称派生的唯一键，
/// 而不是接受调用方提供的文本。普通标记约定使用显式键，未提供
/// 时无键。
#[derive(Debug, Default)]
pub struct MarkerKeyDeriver;

impl MarkerKeyDeriver {
    /// 创建新的服务键推导器
    pub fn new() -> Self {
        Self
    }
}

impl KeyDeriver for MarkerKeyDeriver {
    fn derive_key(&self, candidate: &Candidate) -> Option<String> {
        if candidate.keyed_marker {
            return Some(candidate.implementation.short_name().to_string());
        }
        candidate.key.clone()
    }
}
