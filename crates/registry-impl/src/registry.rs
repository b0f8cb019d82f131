//! 插入有序的服务注册表实现

use autowire_common::Descriptor;
use registry_abstractions::RegistrySink;
use tracing::debug;

/// 服务注册表
///
/// 插入有序、只追加的描述符集合，由调用方显式持有并传入注册器，
/// 不存在进程级单例状态。注册过程结束后移交宿主容器。
#[derive(Debug, Default)]
pub struct ServiceRegistry {
    /// 已追加的描述符（插入有序）
    descriptors: Vec<Descriptor>,
}

impl ServiceRegistry {
    /// 创建空的注册表
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// 获取已注册的描述符数量
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// 注册表是否为空
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// 按插入顺序遍历描述符
    pub fn iter(&self) -> std::slice::Iter<'_, Descriptor> {
        self.descriptors.iter()
    }
}

impl RegistrySink for ServiceRegistry {
    fn append(&mut self, descriptor: Descriptor) {
        debug!("追加描述符: {}", descriptor);
        self.descriptors.push(descriptor);
    }

    fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
}

impl<'a> IntoIterator for &'a ServiceRegistry {
    type Item = &'a Descriptor;
    type IntoIter = std::slice::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}
