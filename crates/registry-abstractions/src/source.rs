//! 候选项来源抽象接口

use autowire_common::Candidate;

/// 候选项来源 trait
///
/// 扫描协作方的边界：提供一个有限、有序的候选项序列。来源在
/// 构建期（代码生成或手工注册表）一次性产出候选项，引擎不做
/// 运行时反射扫描。
pub trait CandidateSource: Send + Sync {
    /// 获取候选项序列（按扫描顺序）
    fn candidates(&self) -> &[Candidate];

    /// 获取来源名称
    fn name(&self) -> &str;
}
