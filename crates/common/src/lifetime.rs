//! 服务生命周期定义

use serde::{Deserialize, Serialize};

/// 服务生命周期类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifetime {
    /// 瞬时模式 - 每次请求都创建新实例
    Transient,
    /// 作用域模式 - 在同一作用域内共享实例
    Scoped,
    /// 单例模式 - 整个应用生命周期内只创建一个实例
    Singleton,
}

impl Default for Lifetime {
    /// 未显式声明生命周期的候选项默认为作用域模式
    fn default() -> Self {
        Self::Scoped
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transient => write!(f, "Transient"),
            Self::Scoped => write!(f, "Scoped"),
            Self::Singleton => write!(f, "Singleton"),
        }
    }
}
