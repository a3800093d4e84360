//! # Command 模块
//!
//! 定义 Runtime 向 Host 发出的表现层指令。
//! Command 是 Runtime 与 Host 之间的**唯一通信方式**。
//!
//! ## 设计原则
//!
//! - **声明式**：Command 描述"做什么"，不描述"怎么做"
//! - **无副作用**：Command 本身不执行任何操作
//! - **引擎无关**：不包含任何 Dioxus 或 DOM 的类型，
//!   Host 自行决定用内联样式还是 class 绑定实现

use serde::{Deserialize, Serialize};

use crate::input::ElementId;

/// Runtime 向 Host 发出的指令
///
/// Host 接收 Command 后，将其转换为实际的样式/class 更新。
/// 所有指令都是尽力而为的视觉增强：Host 丢弃或延迟执行某条指令
/// 不会影响 Runtime 的后续决策。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectCommand {
    /// 移动跟随指示器到平滑后的位置（页面坐标）
    MoveIndicator { x: f64, y: f64 },

    /// 切换指示器的悬停形态（放大/还原）
    ///
    /// 仅在悬停状态发生翻转时发出，重复进入嵌套交互元素不会产生指令。
    SetIndicatorHover { hovering: bool },

    /// 锁存元素的入场状态
    ///
    /// 对同一元素至多发出一次；锁存后永不回退。
    Reveal { id: ElementId },
}
