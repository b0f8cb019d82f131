//! 显式构建的候选项清单实现

use autowire_common::Candidate;
use registry_abstractions::CandidateSource;

/// 注册清单
///
/// 一个在构建期显式组装的有序候选项表，取代运行时反射扫描：
/// 由代码生成或手工注册步骤产出，作为扫描协作方交给注册器消费。
#[derive(Debug)]
pub struct RegistrationManifest {
    /// 清单名称
    name: String,
    /// 候选项（按扫描顺序）
    candidates: Vec<Candidate>,
}

impl RegistrationManifest {
    /// 创建空的注册清单
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            candidates: Vec::new(),
        }
    }

    /// 追加一个候选项
    pub fn add(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    /// 获取候选项数量
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// 清单是否为空
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl CandidateSource for RegistrationManifest {
    fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    fn name(&self) -> &str {
        &self.name
    }
}
