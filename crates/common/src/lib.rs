//! # AutoWire 基础类型
//!
//! 自动注册引擎的基础类型定义，供抽象层和实现层共享。
//!
//! ## 核心类型
//!
//! - [`TypeInfo`] - 类型标识信息
//! - [`ContractType`] - 服务契约类型（含开放泛型变体）
//! - [`Candidate`] - 注册候选项
//! - [`Descriptor`] - 服务描述符
//! - [`Lifetime`] - 服务生命周期
//! - [`RegistrationError`] - 注册错误类型

pub mod candidate;
pub mod descriptor;
pub mod errors;
pub mod lifetime;
pub mod metadata;

pub use candidate::*;
pub use descriptor::*;
pub use errors::*;
pub use lifetime::*;
pub use metadata::*;
