//! 注册编排器实现

use crate::conflict::RegistryConflictDetector;
use crate::key::MarkerKeyDeriver;
use crate::resolver::DirectContractResolver;
use autowire_common::{Candidate, Descriptor, RegistrationError, RegistrationResult};
use chrono::{DateTime, Utc};
use registry_abstractions::{
    CandidateSource, ConflictDetector, ContractResolver, KeyDeriver, RegistrySink,
};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

/// 一次注册过程的摘要
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationReport {
    /// 注册过程ID
    pub pass_id: Uuid,
    /// 候选项来源名称
    pub source: String,
    /// 成功注册的服务数量
    pub registered: usize,
    /// 开始时间
    pub started_at: DateTime<Utc>,
    /// 结束时间
    pub finished_at: DateTime<Utc>,
}

/// 服务注册器
///
/// 按扫描顺序消费候选项，依次调用契约解析、键推导与冲突检测，
/// 成功则向注册表追加描述符，任一检查失败立即中止整个批次并向
/// 调用方传播错误。失败候选项之前已成功追加的描述符保留在注册
/// 表中，不回滚。
pub struct ServiceRegistrar<'a> {
    /// 目标注册表
    registry: &'a mut dyn RegistrySink,
    /// 契约解析器
    resolver: Box<dyn ContractResolver>,
    /// 服务键推导器
    key_deriver: Box<dyn KeyDeriver>,
    /// 冲突检测器
    conflict_detector: Box<dyn ConflictDetector>,
}

impl<'a> ServiceRegistrar<'a> {
    /// 创建使用默认解析器、推导器与检测器的注册器
    pub fn new(registry: &'a mut dyn RegistrySink) -> Self {
        Self {
            registry,
            resolver: Box::new(DirectContractResolver::new()),
            key_deriver: Box::new(MarkerKeyDeriver::new()),
            conflict_detector: Box::new(RegistryConflictDetector::new()),
        }
    }

    /// 替换契约解析器
    pub fn with_resolver(mut self, resolver: Box<dyn ContractResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// 替换服务键推导器
    pub fn with_key_deriver(mut self, key_deriver: Box<dyn KeyDeriver>) -> Self {
        self.key_deriver = key_deriver;
        self
    }

    /// 替换冲突检测器
    pub fn with_conflict_detector(mut self, conflict_detector: Box<dyn ConflictDetector>) -> Self {
        self.conflict_detector = conflict_detector;
        self
    }

    /// 注册单个候选项
    ///
    /// 处理顺序：解析契约 -> 推导键 -> 冲突检测 -> 追加描述符。
    pub fn register(&mut self, candidate: &Candidate) -> RegistrationResult<()> {
        let contract = self.resolver.resolve(candidate)?;
        let key = self.key_deriver.derive_key(candidate);

        if let Some(existing) =
            self.conflict_detector
                .find_conflict(&contract, key.as_deref(), &*self.registry)
        {
            return Err(RegistrationError::duplicate_registration(
                &candidate.implementation,
                &existing,
                &contract,
                key.as_deref(),
            ));
        }

        let descriptor = Descriptor::new(
            contract,
            key,
            candidate.implementation.clone(),
            candidate.lifetime,
        );
        info!("注册服务: {}", descriptor);
        self.registry.append(descriptor);

        Ok(())
    }

    /// 按顺序注册一批候选项
    ///
    /// 首个失败即中止，返回成功注册的数量。
    pub fn register_all<'c>(
        &mut self,
        candidates: impl IntoIterator<Item = &'c Candidate>,
    ) -> RegistrationResult<usize> {
        let mut registered = 0;
        for candidate in candidates {
            self.register(candidate)?;
            registered += 1;
        }
        Ok(registered)
    }

    /// 从候选项来源执行一次完整的注册过程
    pub fn register_from_source(
        &mut self,
        source: &dyn CandidateSource,
    ) -> RegistrationResult<RegistrationReport> {
        let pass_id = Uuid::new_v4();
        let started_at = Utc::now();
        info!("开始注册过程 {} (来源: {})", pass_id, source.name());

        let registered = match self.register_all(source.candidates()) {
            Ok(registered) => registered,
            Err(e) => {
                error!("注册过程 {} 中止: {}", pass_id, e);
                return Err(e);
            }
        };

        info!("注册过程 {} 完成，共注册 {} 个服务", pass_id, registered);
        Ok(RegistrationReport {
            pass_id,
            source: source.name().to_string(),
            registered,
            started_at,
            finished_at: Utc::now(),
        })
    }
}
