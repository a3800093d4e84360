//! # Config 模块
//!
//! 效果引擎的参数配置。
//!
//! ## 设计说明
//!
//! - 所有字段都有缺省值，Host 可以从 JSON 局部覆盖（`#[serde(default)]`）
//! - 参数在引擎创建时统一校验，运行期不再检查

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 缺省平滑系数：每个 Tick 收敛剩余距离的比例（k=1 无延迟）
pub const DEFAULT_SMOOTHING: f64 = 0.15;

/// 缺省收敛阈值（像素）：单轴剩余距离小于该值时吸附到目标
pub const DEFAULT_SETTLE_EPSILON: f64 = 0.5;

/// 缺省定时周期（毫秒），约等于 60Hz 一帧
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

/// 缺省触发边距（像素）：元素顶部越过"视口底部 - 边距"即入场
pub const DEFAULT_BOTTOM_MARGIN: f64 = 100.0;

/// 指针跟随器配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowerConfig {
    /// 平滑系数 k，取值 (0, 1]；越小延迟越明显
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// 收敛阈值（像素）
    #[serde(default = "default_settle_epsilon")]
    pub settle_epsilon: f64,

    /// 定时周期（毫秒）
    ///
    /// Runtime 本身不计时，该值供 Host 建立定时器时读取。
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

fn default_smoothing() -> f64 {
    DEFAULT_SMOOTHING
}

fn default_settle_epsilon() -> f64 {
    DEFAULT_SETTLE_EPSILON
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            settle_epsilon: DEFAULT_SETTLE_EPSILON,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl FollowerConfig {
    /// 校验配置合法性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::InvalidSmoothing {
                value: self.smoothing,
            });
        }
        if !(self.settle_epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon {
                value: self.settle_epsilon,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval {
                value: self.tick_interval_ms,
            });
        }
        Ok(())
    }
}

/// 入场追踪器配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// 触发边距（像素）
    ///
    /// 元素顶部偏移满足 `top < viewport.height - bottom_margin` 时入场，
    /// 即元素完整进入视口前约一个边距的提前量。
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: f64,
}

fn default_bottom_margin() -> f64 {
    DEFAULT_BOTTOM_MARGIN
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
        }
    }
}

impl RevealConfig {
    /// 校验配置合法性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bottom_margin < 0.0 {
            return Err(ConfigError::InvalidMargin {
                value: self.bottom_margin,
            });
        }
        Ok(())
    }
}

/// 效果引擎配置
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EffectsConfig {
    /// 指针跟随器配置
    #[serde(default)]
    pub follower: FollowerConfig,

    /// 入场追踪器配置
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl EffectsConfig {
    /// 校验所有子配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.follower.validate()?;
        self.reveal.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = EffectsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.follower.smoothing, 0.15);
        assert_eq!(config.follower.settle_epsilon, 0.5);
        assert_eq!(config.follower.tick_interval_ms, 16);
        assert_eq!(config.reveal.bottom_margin, 100.0);
    }

    #[test]
    fn test_invalid_smoothing() {
        let mut config = EffectsConfig::default();

        config.follower.smoothing = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSmoothing { .. })
        ));

        config.follower.smoothing = 1.2;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSmoothing { .. })
        ));

        // k=1 表示无延迟，属于合法边界
        config.follower.smoothing = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_margin() {
        let mut config = EffectsConfig::default();
        config.reveal.bottom_margin = -10.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMargin { .. })
        ));

        // 0 边距合法：元素顶部一进入视口底边就入场
        config.reveal.bottom_margin = 0.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_uses_defaults() {
        // 只覆盖一个字段，其余取缺省值
        let config: EffectsConfig =
            serde_json::from_str(r#"{"follower": {"smoothing": 0.3}}"#).unwrap();
        assert_eq!(config.follower.smoothing, 0.3);
        assert_eq!(config.follower.settle_epsilon, DEFAULT_SETTLE_EPSILON);
        assert_eq!(config.reveal.bottom_margin, DEFAULT_BOTTOM_MARGIN);
    }
}
