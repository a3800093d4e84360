//! # FX Runtime
//!
//! 作品页效果引擎的核心运行时库。
//!
//! ## 架构概述
//!
//! `fx-runtime` 是纯逻辑核心，不依赖任何 IO、DOM 或渲染引擎。
//! 它通过 **命令驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                          Runtime
//!   │                              │
//!   │──── EffectInput ───────────►│
//!   │                              │ dispatch()
//!   │◄─── Vec<EffectCommand> ─────│
//!   │                              │
//! ```
//!
//! Host 持有事件源（指针、定时器、滚动）与表现层（样式、class），
//! Runtime 持有全部动画状态与判定逻辑。
//!
//! ## 核心类型
//!
//! - [`EffectsEngine`]：效果引擎，组合两个子系统
//! - [`EffectInput`]：Host 向 Runtime 传递的输入
//! - [`EffectCommand`]：Runtime 向 Host 发出的指令
//! - [`PointerFollower`]：指针跟随子系统（平滑追踪 + 悬停状态）
//! - [`RevealTracker`]：入场追踪子系统（单调锁存）
//!
//! ## 使用示例
//!
//! ```ignore
//! use fx_runtime::{EffectsConfig, EffectsEngine, EffectInput};
//!
//! let mut engine = EffectsEngine::new(EffectsConfig::default())?;
//! engine.register_reveal(section_id, section_top)?;
//!
//! // 挂载并执行初始入场轮询
//! for cmd in engine.attach(viewport) {
//!     host.execute(cmd);
//! }
//!
//! // 事件循环
//! loop {
//!     let input = host.next_input();
//!     for cmd in engine.dispatch(input) {
//!         host.execute(cmd);
//!     }
//! }
//! ```
//!
//! ## 模块结构
//!
//! - [`command`]：EffectCommand 定义
//! - [`config`]：参数配置与校验
//! - [`engine`]：效果引擎
//! - [`error`]：错误类型定义
//! - [`follower`]：指针跟随子系统
//! - [`geometry`]：几何基础类型
//! - [`input`]：EffectInput 定义
//! - [`reveal`]：入场追踪子系统
//! - [`state`]：可序列化快照

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod follower;
pub mod geometry;
pub mod input;
pub mod reveal;
pub mod state;

// 重导出核心类型
pub use command::EffectCommand;
pub use config::{EffectsConfig, FollowerConfig, RevealConfig};
pub use engine::{EffectsEngine, EnginePhase};
pub use error::{ConfigError, FxError, FxResult, RegistryError};
pub use follower::PointerFollower;
pub use geometry::{Vec2, Viewport};
pub use input::{EffectInput, ElementId};
pub use reveal::RevealTracker;
pub use state::{EngineSnapshot, FollowerSnapshot, SnapshotError};
