//! # Engine 模块
//!
//! 效果引擎：组合指针跟随与入场追踪两个子系统。
//!
//! ## 执行模型
//!
//! ```text
//! dispatch(input) -> Vec<EffectCommand>
//! ```
//!
//! 1. 未挂载时所有输入直接丢弃，不产生任何指令
//! 2. 输入按类别路由到对应子系统
//! 3. 子系统的状态翻转被翻译为表现层指令返回给 Host
//!
//! 两个子系统互不共享可变状态，事件之间的交错顺序不影响正确性。

use crate::command::EffectCommand;
use crate::config::EffectsConfig;
use crate::error::FxResult;
use crate::follower::PointerFollower;
use crate::geometry::{Vec2, Viewport};
use crate::input::{EffectInput, ElementId};
use crate::reveal::RevealTracker;
use crate::state::{EngineSnapshot, FollowerSnapshot};

/// 引擎生命周期阶段
///
/// # 状态转换
///
/// ```text
/// Detached --attach()--> Attached
/// Attached --detach()--> Detached
/// ```
///
/// 卸载后不再产生任何指令；注册表与入场记录跨阶段保留。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnginePhase {
    /// 未挂载（初始状态/已卸载）
    #[default]
    Detached,
    /// 已挂载，事件驱动中
    Attached,
}

/// 效果引擎
///
/// 这是 fx-runtime 的核心类型，负责驱动页面效果。
///
/// # 使用示例
///
/// ```ignore
/// let mut engine = EffectsEngine::new(EffectsConfig::default())?;
///
/// engine.register_interactive(nav_link_id)?;
/// engine.register_reveal(hero_id, hero_top)?;
///
/// let commands = engine.attach(viewport);
/// // Host 执行 commands...
///
/// loop {
///     let commands = engine.dispatch(input);
///     // Host 执行 commands...
/// }
/// ```
pub struct EffectsEngine {
    /// 配置
    config: EffectsConfig,
    /// 生命周期阶段
    phase: EnginePhase,
    /// 最近一次观测的视口（挂载时记录，滚动/缩放时更新）
    viewport: Option<Viewport>,
    /// 指针跟随器
    follower: PointerFollower,
    /// 入场追踪器
    reveal: RevealTracker,
}

impl EffectsEngine {
    /// 创建新的引擎实例
    ///
    /// # 参数
    ///
    /// - `config`: 效果配置，创建时统一校验
    pub fn new(config: EffectsConfig) -> FxResult<Self> {
        config.validate()?;
        Ok(Self {
            follower: PointerFollower::new(config.follower),
            reveal: RevealTracker::new(config.reveal),
            config,
            phase: EnginePhase::Detached,
            viewport: None,
        })
    }

    /// 使用缺省配置创建引擎（缺省配置恒合法）
    pub fn with_defaults() -> Self {
        Self::new(EffectsConfig::default()).expect("缺省配置必定合法")
    }

    /// 当前配置
    pub fn config(&self) -> &EffectsConfig {
        &self.config
    }

    /// 当前生命周期阶段
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// 是否已挂载
    pub fn is_attached(&self) -> bool {
        self.phase == EnginePhase::Attached
    }

    // ========== 生命周期 ==========

    /// 挂载引擎
    ///
    /// 记录视口并立即执行一次入场轮询，
    /// 挂载时已在触发线内的元素无需滚动即可入场。
    ///
    /// # 返回
    ///
    /// 初始轮询产生的 `Reveal` 指令。
    pub fn attach(&mut self, viewport: Viewport) -> Vec<EffectCommand> {
        self.phase = EnginePhase::Attached;
        self.viewport = Some(viewport);
        self.poll_reveals(viewport)
    }

    /// 卸载引擎
    ///
    /// 指针的瞬态状态（位置、悬停集合）随卸载丢弃；
    /// 注册表与入场记录保留，重新挂载后继续生效。
    /// 卸载后 `dispatch` 不再产生任何指令。
    pub fn detach(&mut self) {
        self.phase = EnginePhase::Detached;
        self.follower.reset_transient();
    }

    // ========== 事件驱动 ==========

    /// 核心驱动函数
    ///
    /// 根据输入推进子系统状态，返回需要 Host 执行的表现层指令。
    /// 未挂载时输入被丢弃（返回空指令列表）。
    pub fn dispatch(&mut self, input: EffectInput) -> Vec<EffectCommand> {
        if !self.is_attached() {
            return Vec::new();
        }

        match input {
            EffectInput::PointerMoved { x, y } => {
                // 只更新目标，不平滑、不产出
                self.follower.pointer_moved(Vec2::new(x, y));
                Vec::new()
            }

            EffectInput::Tick => self
                .follower
                .tick()
                .map(|pos| EffectCommand::MoveIndicator { x: pos.x, y: pos.y })
                .into_iter()
                .collect(),

            EffectInput::HoverStarted { id } => self
                .follower
                .hover_started(id)
                .map(|hovering| EffectCommand::SetIndicatorHover { hovering })
                .into_iter()
                .collect(),

            EffectInput::HoverEnded { id } => self
                .follower
                .hover_ended(id)
                .map(|hovering| EffectCommand::SetIndicatorHover { hovering })
                .into_iter()
                .collect(),

            EffectInput::OffsetChanged { id, top } => {
                self.reveal.offset_changed(id, top);
                Vec::new()
            }

            EffectInput::ViewportChanged { viewport } => {
                self.viewport = Some(viewport);
                self.poll_reveals(viewport)
            }
        }
    }

    /// 执行一次入场轮询并翻译为指令
    fn poll_reveals(&mut self, viewport: Viewport) -> Vec<EffectCommand> {
        self.reveal
            .poll(viewport)
            .into_iter()
            .map(|id| EffectCommand::Reveal { id })
            .collect()
    }

    // ========== 元素注册 ==========

    /// 注册交互元素（悬停目标）
    ///
    /// 可在任意阶段调用；晚于挂载注册的元素同样生效。
    pub fn register_interactive(&mut self, id: ElementId) -> FxResult<()> {
        self.follower.register(id)?;
        Ok(())
    }

    /// 注销交互元素
    ///
    /// # 返回
    ///
    /// 注销悬停中的元素可能使悬停状态翻转，返回相应指令；
    /// 未挂载时仅注销，不产生指令。
    pub fn deregister_interactive(&mut self, id: ElementId) -> Vec<EffectCommand> {
        let flipped = self.follower.deregister(id);
        if !self.is_attached() {
            return Vec::new();
        }
        flipped
            .map(|hovering| EffectCommand::SetIndicatorHover { hovering })
            .into_iter()
            .collect()
    }

    /// 注册入场元素
    ///
    /// # 参数
    ///
    /// - `id`: Host 分配的元素 ID
    /// - `top`: 注册时刻元素相对视口的顶部偏移
    ///
    /// # 返回
    ///
    /// 已挂载时立即按当前视口执行一次轮询：
    /// 注册时已在触发线内的元素当场入场。
    pub fn register_reveal(&mut self, id: ElementId, top: f64) -> FxResult<Vec<EffectCommand>> {
        self.reveal.register(id, top)?;
        if !self.is_attached() {
            return Ok(Vec::new());
        }
        match self.viewport {
            Some(viewport) => Ok(self.poll_reveals(viewport)),
            None => Ok(Vec::new()),
        }
    }

    /// 注销入场元素（入场记录保留）
    pub fn deregister_reveal(&mut self, id: ElementId) {
        self.reveal.deregister(id);
    }

    // ========== 查询 ==========

    /// 当前是否处于悬停状态
    pub fn is_hovering(&self) -> bool {
        self.follower.is_hovering()
    }

    /// 元素是否已入场
    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.reveal.is_revealed(id)
    }

    /// 指示器当前显示位置
    pub fn displayed_position(&self) -> Vec2 {
        self.follower.displayed()
    }

    // ========== 快照 ==========

    /// 导出快照（卸载前保存）
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            follower: FollowerSnapshot {
                target: self.follower.target(),
                displayed: self.follower.displayed(),
            },
            revealed: self.reveal.revealed_ids(),
        }
    }

    /// 恢复快照（重新挂载后调用）
    ///
    /// 入场记录按并集恢复，保持锁存单调；注册表不受影响。
    pub fn restore(&mut self, snapshot: EngineSnapshot) {
        self.follower
            .restore_position(snapshot.follower.target, snapshot.follower.displayed);
        self.reveal.restore_revealed(snapshot.revealed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FollowerConfig;

    const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

    fn attached_engine() -> EffectsEngine {
        let mut engine = EffectsEngine::with_defaults();
        engine.attach(VIEWPORT);
        engine
    }

    #[test]
    fn test_engine_creation() {
        let engine = EffectsEngine::with_defaults();
        assert_eq!(engine.phase(), EnginePhase::Detached);
        assert!(!engine.is_attached());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EffectsConfig {
            follower: FollowerConfig {
                smoothing: 2.0,
                ..FollowerConfig::default()
            },
            ..EffectsConfig::default()
        };
        assert!(EffectsEngine::new(config).is_err());
    }

    #[test]
    fn test_detached_engine_emits_nothing() {
        let mut engine = EffectsEngine::with_defaults();

        // 未挂载时所有输入被丢弃
        assert!(engine.dispatch(EffectInput::pointer(10.0, 10.0)).is_empty());
        assert!(engine.dispatch(EffectInput::Tick).is_empty());
        assert!(
            engine
                .dispatch(EffectInput::viewport(VIEWPORT))
                .is_empty()
        );
    }

    #[test]
    fn test_attach_reveals_visible_elements() {
        let mut engine = EffectsEngine::with_defaults();
        let above = ElementId::new(1);
        let below = ElementId::new(2);
        engine.register_reveal(above, 50.0).unwrap();
        engine.register_reveal(below, 900.0).unwrap();

        // 挂载即轮询：触发线内的元素立即入场
        let commands = engine.attach(VIEWPORT);
        assert_eq!(commands, vec![EffectCommand::Reveal { id: above }]);
        assert!(engine.is_revealed(above));
        assert!(!engine.is_revealed(below));
    }

    #[test]
    fn test_pointer_move_then_tick() {
        let mut engine = attached_engine();

        // 指针移动本身不产出
        assert!(
            engine
                .dispatch(EffectInput::pointer(100.0, 100.0))
                .is_empty()
        );

        // Tick 产出平滑后的位置
        let commands = engine.dispatch(EffectInput::Tick);
        assert_eq!(
            commands,
            vec![EffectCommand::MoveIndicator { x: 15.0, y: 15.0 }]
        );
    }

    #[test]
    fn test_tick_quiesces_at_rest() {
        let mut engine = attached_engine();
        engine.dispatch(EffectInput::pointer(10.0, 10.0));

        while !engine.dispatch(EffectInput::Tick).is_empty() {}

        // 静止后 Tick 不再产出指令
        assert!(engine.dispatch(EffectInput::Tick).is_empty());
        assert_eq!(engine.displayed_position(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_hover_commands_only_on_flip() {
        let mut engine = attached_engine();
        let a = ElementId::new(1);
        let b = ElementId::new(2);
        engine.register_interactive(a).unwrap();
        engine.register_interactive(b).unwrap();

        let commands = engine.dispatch(EffectInput::hover_started(a));
        assert_eq!(
            commands,
            vec![EffectCommand::SetIndicatorHover { hovering: true }]
        );

        // 进入嵌套元素、离开外层元素：状态不翻转，无指令
        assert!(engine.dispatch(EffectInput::hover_started(b)).is_empty());
        assert!(engine.dispatch(EffectInput::hover_ended(a)).is_empty());
        assert!(engine.is_hovering());

        let commands = engine.dispatch(EffectInput::hover_ended(b));
        assert_eq!(
            commands,
            vec![EffectCommand::SetIndicatorHover { hovering: false }]
        );
    }

    #[test]
    fn test_scroll_reveal_flow() {
        let mut engine = attached_engine();
        let id = ElementId::new(1);
        assert!(engine.register_reveal(id, 900.0).unwrap().is_empty());

        // 滚动后元素越过触发线
        engine.dispatch(EffectInput::offset(id, 650.0));
        let commands = engine.dispatch(EffectInput::viewport(VIEWPORT));
        assert_eq!(commands, vec![EffectCommand::Reveal { id }]);

        // 再滚动不重复产出
        engine.dispatch(EffectInput::offset(id, -100.0));
        assert!(
            engine
                .dispatch(EffectInput::viewport(VIEWPORT))
                .is_empty()
        );
        assert!(engine.is_revealed(id));
    }

    #[test]
    fn test_register_reveal_while_attached_checks_immediately() {
        let mut engine = attached_engine();
        let id = ElementId::new(1);

        // 已挂载时注册触发线内的元素：当场入场
        let commands = engine.register_reveal(id, 300.0).unwrap();
        assert_eq!(commands, vec![EffectCommand::Reveal { id }]);
    }

    #[test]
    fn test_detach_stops_all_commands() {
        let mut engine = attached_engine();
        let link = ElementId::new(1);
        let section = ElementId::new(2);
        engine.register_interactive(link).unwrap();
        engine.register_reveal(section, 900.0).unwrap();
        engine.dispatch(EffectInput::pointer(500.0, 500.0));
        engine.dispatch(EffectInput::hover_started(link));

        engine.detach();

        // 卸载后：定时、悬停、滚动一律静默
        assert!(engine.dispatch(EffectInput::Tick).is_empty());
        assert!(engine.dispatch(EffectInput::hover_ended(link)).is_empty());
        engine.dispatch(EffectInput::offset(section, 0.0));
        assert!(
            engine
                .dispatch(EffectInput::viewport(VIEWPORT))
                .is_empty()
        );

        // 瞬态指针状态已丢弃
        assert_eq!(engine.displayed_position(), Vec2::zero());
        assert!(!engine.is_hovering());
    }

    #[test]
    fn test_deregister_hovered_interactive() {
        let mut engine = attached_engine();
        let id = ElementId::new(1);
        engine.register_interactive(id).unwrap();
        engine.dispatch(EffectInput::hover_started(id));

        // 注销悬停中的元素：悬停状态随之复位
        let commands = engine.deregister_interactive(id);
        assert_eq!(
            commands,
            vec![EffectCommand::SetIndicatorHover { hovering: false }]
        );
    }

    #[test]
    fn test_snapshot_restore_keeps_latch() {
        let mut engine = attached_engine();
        let id = ElementId::new(1);
        engine.register_reveal(id, 0.0).unwrap();
        assert!(engine.is_revealed(id));

        let snapshot = engine.snapshot();
        engine.detach();

        // 以全新引擎恢复：入场记录单调延续
        let mut restored = EffectsEngine::with_defaults();
        restored.restore(snapshot);
        assert!(restored.is_revealed(id));
        restored.register_reveal(id, 0.0).unwrap();
        assert!(restored.attach(VIEWPORT).is_empty());
    }

    #[test]
    fn test_demo_page_flow_snapshot() {
        let mut engine = EffectsEngine::with_defaults();
        let hero = ElementId::new(1);
        let contact = ElementId::new(2);
        let nav_link = ElementId::new(3);
        engine.register_reveal(hero, 50.0).unwrap();
        engine.register_reveal(contact, 900.0).unwrap();
        engine.register_interactive(nav_link).unwrap();

        let mut commands = engine.attach(VIEWPORT);
        commands.extend(engine.dispatch(EffectInput::pointer(10.0, 30.0)));
        commands.extend(engine.dispatch(EffectInput::Tick));
        commands.extend(engine.dispatch(EffectInput::hover_started(nav_link)));
        commands.extend(engine.dispatch(EffectInput::offset(contact, 650.0)));
        commands.extend(engine.dispatch(EffectInput::viewport(VIEWPORT)));

        insta::assert_yaml_snapshot!("demo_page_flow", commands);
    }
}
