//! # Reveal 模块
//!
//! 入场追踪器：元素首次进入视口时锁存"可见"状态，驱动入场动画。
//!
//! ## 设计说明
//!
//! - 采用**偏移轮询**策略：Host 在滚动时上报各元素相对视口的顶部偏移，
//!   满足 `top < viewport.height - bottom_margin` 即入场（提前约一个
//!   边距触发，元素完整进入前动画已开始）
//! - 锁存单调：一旦入场永不回退，滚回视口外也保持入场态
//! - 显式注册制：元素在创建时注册、移除时注销，晚于初始挂载加入的
//!   元素同样被追踪
//! - 每次滚动的轮询代价为 O(已注册元素数)，作品页量级（几十个元素）
//!   下足够，未为更大规模设计

use std::collections::{BTreeMap, BTreeSet};

use crate::config::RevealConfig;
use crate::error::RegistryError;
use crate::geometry::Viewport;
use crate::input::ElementId;

/// 入场追踪器
///
/// 纯状态机：几何信息全部来自 Host 上报，不主动查询布局。
#[derive(Debug, Clone)]
pub struct RevealTracker {
    /// 配置
    config: RevealConfig,
    /// 已注册元素 → 最近上报的顶部偏移（尚未上报时为 None）
    ///
    /// 用 BTreeMap 保证轮询输出顺序稳定。
    targets: BTreeMap<ElementId, Option<f64>>,
    /// 已入场元素
    ///
    /// 独立于注册表存在：元素注销后再注册，入场态依然保持，
    /// 同一元素的 Reveal 指令至多发出一次。
    revealed: BTreeSet<ElementId>,
}

impl RevealTracker {
    /// 创建新的追踪器
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            targets: BTreeMap::new(),
            revealed: BTreeSet::new(),
        }
    }

    // ========== 注册 ==========

    /// 注册入场元素
    ///
    /// # 参数
    ///
    /// - `id`: Host 分配的元素 ID
    /// - `top`: 注册时刻元素相对视口的顶部偏移（像素）
    ///
    /// 注册本身不判定入场；调用方注册后执行一次
    /// [`poll`](RevealTracker::poll)，挂载时已在触发线内的元素
    /// 无需任何滚动即可入场。
    pub fn register(&mut self, id: ElementId, top: f64) -> Result<(), RegistryError> {
        if self.targets.contains_key(&id) {
            return Err(RegistryError::DuplicateReveal { id });
        }
        self.targets.insert(id, Some(top));
        Ok(())
    }

    /// 注销入场元素
    ///
    /// 停止追踪；已入场记录保留（锁存不随注销失效）。
    pub fn deregister(&mut self, id: ElementId) {
        self.targets.remove(&id);
    }

    /// 已注册元素数量
    pub fn registered_count(&self) -> usize {
        self.targets.len()
    }

    // ========== 几何上报与轮询 ==========

    /// 更新元素的顶部偏移
    ///
    /// 未注册的 ID 静默忽略（尽力而为语义）。
    pub fn offset_changed(&mut self, id: ElementId, top: f64) {
        if let Some(slot) = self.targets.get_mut(&id) {
            *slot = Some(top);
        }
    }

    /// 按最近上报的偏移执行一次入场判定
    ///
    /// # 返回
    ///
    /// 本次新入场的元素 ID（按 ID 升序）。已入场元素不会重复出现
    /// （幂等），偏移未知的元素跳过。
    pub fn poll(&mut self, viewport: Viewport) -> Vec<ElementId> {
        let limit = viewport.height - self.config.bottom_margin;
        let mut newly_revealed = Vec::new();

        for (&id, &top) in &self.targets {
            if self.revealed.contains(&id) {
                continue;
            }
            if let Some(top) = top
                && top < limit
            {
                newly_revealed.push(id);
            }
        }

        for &id in &newly_revealed {
            self.revealed.insert(id);
        }
        newly_revealed
    }

    // ========== 查询与恢复 ==========

    /// 元素是否已入场
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.revealed.contains(&id)
    }

    /// 已入场元素数量
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// 已入场元素（按 ID 升序）
    pub fn revealed_ids(&self) -> Vec<ElementId> {
        self.revealed.iter().copied().collect()
    }

    /// 恢复入场记录（快照恢复用）
    pub fn restore_revealed(&mut self, ids: impl IntoIterator<Item = ElementId>) {
        self.revealed.extend(ids);
    }
}
