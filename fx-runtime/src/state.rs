//! # State 模块
//!
//! 可序列化的引擎快照。
//!
//! ## 设计原则
//!
//! - 只快照值得跨挂载保留的状态：指针位置与入场记录
//! - 悬停集合是瞬态的（卸载即失效），不进入快照
//! - 注册表由 Host 在重新挂载时重建，不进入快照

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Vec2;
use crate::input::ElementId;

/// 快照序列化错误
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// 序列化失败
    #[error("快照序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),

    /// 反序列化失败
    #[error("快照解析失败: {0}")]
    Deserialize(#[source] serde_json::Error),
}

/// 指针跟随器快照
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FollowerSnapshot {
    /// 跟随目标
    pub target: Vec2,
    /// 平滑后的显示位置
    pub displayed: Vec2,
}

/// 引擎快照
///
/// 供嵌入方在卸载前保存、重新挂载后恢复，
/// 使入场锁存跨挂载保持单调。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// 指针跟随器快照
    pub follower: FollowerSnapshot,
    /// 已入场元素（按 ID 升序）
    pub revealed: Vec<ElementId>,
}

impl EngineSnapshot {
    /// 序列化为 JSON 字符串
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(SnapshotError::Serialize)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(SnapshotError::Deserialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_roundtrip() {
        let snapshot = EngineSnapshot {
            follower: FollowerSnapshot {
                target: Vec2::new(100.0, 200.0),
                displayed: Vec2::new(85.0, 170.0),
            },
            revealed: vec![ElementId::new(1), ElementId::new(4)],
        };

        let json = snapshot.to_json().unwrap();
        let loaded = EngineSnapshot::from_json(&json).unwrap();
        assert_eq!(snapshot, loaded);
    }

    #[test]
    fn test_snapshot_invalid_json() {
        let result = EngineSnapshot::from_json("{ not json");
        assert!(matches!(result, Err(SnapshotError::Deserialize(_))));
    }
}
