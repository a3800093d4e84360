//! # Error 模块
//!
//! 定义 fx-runtime 中使用的错误类型。
//!
//! ## 设计说明
//!
//! 事件分发本身是不可失败的：效果是尽力而为的视觉增强，
//! 未知元素 ID 等异常输入一律静默忽略。
//! 只有两类**宿主编程错误**会返回 `Err`：
//! 非法配置与重复注册。

use thiserror::Error;

use crate::input::ElementId;

/// 配置错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// 平滑系数超出范围
    #[error("平滑系数 {value} 非法，应在 (0, 1] 区间内")]
    InvalidSmoothing { value: f64 },

    /// 收敛阈值非法
    #[error("收敛阈值 {value} 非法，必须为正数")]
    InvalidEpsilon { value: f64 },

    /// 定时周期非法
    #[error("定时周期 {value}ms 非法，必须大于 0")]
    InvalidTickInterval { value: u64 },

    /// 触发边距非法
    #[error("触发边距 {value} 非法，不能为负数")]
    InvalidMargin { value: f64 },
}

/// 注册错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// 重复注册交互元素
    #[error("{id} 已注册为交互元素")]
    DuplicateInteractive { id: ElementId },

    /// 重复注册入场元素
    #[error("{id} 已注册为入场元素")]
    DuplicateReveal { id: ElementId },
}

/// fx-runtime 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FxError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    /// 注册错误
    #[error("注册错误: {0}")]
    Registry(#[from] RegistryError),
}

/// Result 类型别名
pub type FxResult<T> = Result<T, FxError>;
