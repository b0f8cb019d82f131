//! 服务键推导器抽象接口

use autowire_common::Candidate;

/// 服务键推导器 trait
///
/// 从候选项的标记约定推导可选的服务键，用于区分同一契约下的
/// 多个兄弟实现。
pub trait KeyDeriver: Send + Sync {
    /// 推导候选项的服务键
    fn derive_key(&self, candidate: &Candidate) -> Option<String>;
}
