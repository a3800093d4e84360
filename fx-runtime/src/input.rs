//! # Input 模块
//!
//! 定义 Host 向 Runtime 传递的输入事件。
//!
//! ## 设计说明
//!
//! - Runtime 不直接处理 DOM 事件，只处理语义化的输入
//! - 定时器由 Host 持有，Runtime 只接收 `Tick`，不感知真实时间流逝
//! - 元素几何信息（视口尺寸、元素偏移）由 Host 在事件发生时上报，
//!   Runtime 不主动查询页面布局

use serde::{Deserialize, Serialize};

use crate::geometry::Viewport;

/// 元素标识符
///
/// 由 Host 在元素注册时分配并保证唯一，Runtime 只负责透传。
/// 注册/注销与悬停/入场事件都以此 ID 引用元素，
/// 不依赖任何闭包或监听器的身份。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ElementId(pub u64);

impl ElementId {
    /// 创建新的元素 ID
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// 获取内部 ID 值
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ElementId({})", self.0)
    }
}

/// Host 向 Runtime 传递的输入
///
/// Runtime 通过 `dispatch(input)` 接收这些输入，并返回需要 Host
/// 执行的表现层指令。
///
/// # 设计说明
///
/// - `PointerMoved`：原始指针位置，立即更新跟随目标，不做平滑
/// - `Tick`：固定周期（约 16ms，对应 60Hz 一帧）的定时事件
/// - `HoverStarted` / `HoverEnded`：指针进入/离开某个已注册的交互元素
/// - `ViewportChanged`：滚动或缩放导致视口观测值变化，触发入场轮询
/// - `OffsetChanged`：某个入场元素相对视口的顶部偏移变化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EffectInput {
    /// 原始指针移动（页面坐标）
    PointerMoved { x: f64, y: f64 },

    /// 固定周期定时事件
    Tick,

    /// 指针进入交互元素
    HoverStarted { id: ElementId },

    /// 指针离开交互元素
    HoverEnded { id: ElementId },

    /// 视口观测值变化（滚动/缩放后由 Host 上报）
    ViewportChanged { viewport: Viewport },

    /// 入场元素顶部偏移变化（相对视口，单位：像素）
    OffsetChanged { id: ElementId, top: f64 },
}

impl EffectInput {
    /// 创建指针移动输入
    pub fn pointer(x: f64, y: f64) -> Self {
        Self::PointerMoved { x, y }
    }

    /// 创建悬停开始输入
    pub fn hover_started(id: ElementId) -> Self {
        Self::HoverStarted { id }
    }

    /// 创建悬停结束输入
    pub fn hover_ended(id: ElementId) -> Self {
        Self::HoverEnded { id }
    }

    /// 创建视口变化输入
    pub fn viewport(viewport: Viewport) -> Self {
        Self::ViewportChanged { viewport }
    }

    /// 创建偏移变化输入
    pub fn offset(id: ElementId, top: f64) -> Self {
        Self::OffsetChanged { id, top }
    }
}
