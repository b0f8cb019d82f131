//! # 注册引擎抽象层
//!
//! 定义契约解析、键推导、冲突检测与注册表写入的核心接口。
//!
//! ## 核心接口
//!
//! - [`ContractResolver`] - 契约解析器接口
//! - [`KeyDeriver`] - 服务键推导器接口
//! - [`ConflictDetector`] - 冲突检测器接口
//! - [`RegistrySink`] - 注册表写入接口
//! - [`CandidateSource`] - 候选项来源接口

pub mod conflict;
pub mod key;
pub mod resolver;
pub mod sink;
pub mod source;

pub use conflict::*;
pub use key::*;
pub use resolver::*;
pub use sink::*;
pub use source::*;
