//! # Follower 模块
//!
//! 指针跟随器：平滑追踪原始指针位置，并维护交互悬停状态。
//!
//! ## 设计说明
//!
//! - `target` 在每次指针移动时同步更新，不做任何平滑
//! - `displayed` 在每个 Tick 按固定系数向 `target` 收敛
//!   （离散低通滤波：`displayed += (target - displayed) * k`）
//! - 不做视口裁剪：`target` 出界时 `displayed` 照常跟出，与原始输入一致
//! - 悬停状态以"当前悬停元素集合"建模而非单个布尔：
//!   指针在嵌套/重叠的交互元素之间移动时对外状态不抖动，
//!   元素注销时按 ID 精确移除，不依赖监听器身份

use std::collections::HashSet;

use crate::config::FollowerConfig;
use crate::error::RegistryError;
use crate::geometry::Vec2;
use crate::input::ElementId;

/// 指针跟随器
///
/// 纯状态机：不持有定时器，由 Host 按 `config.tick_interval_ms`
/// 周期性驱动 [`tick`](PointerFollower::tick)。
#[derive(Debug, Clone)]
pub struct PointerFollower {
    /// 配置
    config: FollowerConfig,
    /// 原始指针位置（跟随目标）
    target: Vec2,
    /// 平滑后的显示位置
    displayed: Vec2,
    /// 已注册的交互元素
    interactive: HashSet<ElementId>,
    /// 当前悬停中的交互元素
    hovered: HashSet<ElementId>,
}

impl PointerFollower {
    /// 创建新的跟随器
    ///
    /// `target` 与 `displayed` 均从原点开始，首次指针移动后
    /// 显示位置从原点滑向指针。
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            config,
            target: Vec2::zero(),
            displayed: Vec2::zero(),
            interactive: HashSet::new(),
            hovered: HashSet::new(),
        }
    }

    // ========== 指针追踪 ==========

    /// 更新跟随目标（指针移动事件）
    ///
    /// 同步更新，无平滑，不产生输出。
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.target = pos;
    }

    /// 推进一个定时周期
    ///
    /// # 返回
    ///
    /// - `Some(pos)`：显示位置发生变化，Host 应将指示器移动到 `pos`
    /// - `None`：已静止（displayed 与 target 重合），无需重绘
    ///
    /// 单轴剩余距离小于收敛阈值时吸附到目标并静止；
    /// 对固定目标，剩余距离每个 Tick 严格不增。
    pub fn tick(&mut self) -> Option<Vec2> {
        if self.displayed == self.target {
            return None;
        }

        self.displayed = self.displayed.lerp(self.target, self.config.smoothing);
        if self.displayed.max_axis_distance(self.target) < self.config.settle_epsilon {
            self.displayed = self.target;
        }
        Some(self.displayed)
    }

    /// 当前跟随目标
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// 当前显示位置
    pub fn displayed(&self) -> Vec2 {
        self.displayed
    }

    /// 恢复指针位置（快照恢复用）
    pub fn restore_position(&mut self, target: Vec2, displayed: Vec2) {
        self.target = target;
        self.displayed = displayed;
    }

    // ========== 交互元素注册 ==========

    /// 注册交互元素
    pub fn register(&mut self, id: ElementId) -> Result<(), RegistryError> {
        if !self.interactive.insert(id) {
            return Err(RegistryError::DuplicateInteractive { id });
        }
        Ok(())
    }

    /// 注销交互元素
    ///
    /// 若该元素正处于悬停集合中，一并移除。
    ///
    /// # 返回
    ///
    /// 悬停状态因此翻转时返回 `Some(新状态)`，否则 `None`。
    pub fn deregister(&mut self, id: ElementId) -> Option<bool> {
        self.interactive.remove(&id);
        if self.hovered.remove(&id) && self.hovered.is_empty() {
            return Some(false);
        }
        None
    }

    /// 已注册的交互元素数量
    pub fn registered_count(&self) -> usize {
        self.interactive.len()
    }

    // ========== 悬停状态 ==========

    /// 指针进入交互元素
    ///
    /// 未注册的 ID 静默忽略（尽力而为语义）。
    ///
    /// # 返回
    ///
    /// 悬停状态因此翻转时返回 `Some(新状态)`，否则 `None`。
    pub fn hover_started(&mut self, id: ElementId) -> Option<bool> {
        if !self.interactive.contains(&id) {
            return None;
        }
        let was_idle = self.hovered.is_empty();
        self.hovered.insert(id);
        if was_idle { Some(true) } else { None }
    }

    /// 指针离开交互元素
    ///
    /// # 返回
    ///
    /// 悬停状态因此翻转时返回 `Some(新状态)`，否则 `None`。
    pub fn hover_ended(&mut self, id: ElementId) -> Option<bool> {
        if self.hovered.remove(&id) && self.hovered.is_empty() {
            return Some(false);
        }
        None
    }

    /// 当前是否处于悬停状态
    pub fn is_hovering(&self) -> bool {
        !self.hovered.is_empty()
    }

    /// 清除瞬态指针状态（卸载时调用）
    ///
    /// 注册表保留，位置与悬停集合归零。
    pub fn reset_transient(&mut self) {
        self.target = Vec2::zero();
        self.displayed = Vec2::zero();
        self.hovered.clear();
    }
}
