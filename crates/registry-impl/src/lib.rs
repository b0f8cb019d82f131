//! # 注册引擎具体实现
//!
//! 提供契约解析、键推导、冲突检测与注册编排的具体实现。
//!
//! 引擎设计为进程启动期间由单一调用线程同步执行一次注册过程：
//! 无操作挂起、无 I/O，注册表状态只在该过程内顺序追加。
//!
//! ## 核心类型
//!
//! - [`DirectContractResolver`] - 基于直接接口集的契约解析器
//! - [`MarkerKeyDeriver`] - 基于标记约定的服务键推导器
//! - [`RegistryConflictDetector`] - 基于注册表线性扫描的冲突检测器
//! - [`ServiceRegistry`] - 插入有序的描述符注册表
//! - [`RegistrationManifest`] - 显式构建的候选项注册表项清单
//! - [`ServiceRegistrar`] - 注册编排器

pub mod conflict;
pub mod key;
pub mod manifest;
pub mod registrar;
pub mod registry;
pub mod resolver;

pub use conflict::*;
pub use key::*;
pub use manifest::*;
pub use registrar::*;
pub use registry::*;
pub use resolver::*;
