//! # Geometry 模块
//!
//! 基础几何类型：页面坐标向量与视口尺寸。
//!
//! 所有坐标单位均为 CSS 像素，与 Host 上报的 DOM 几何信息一致。

use serde::{Deserialize, Serialize};

/// 二维向量（页面坐标，单位：像素）
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// 创建新的向量
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 零向量
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// 线性插值
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// 欧几里得距离
    pub fn distance(self, other: Self) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// 单轴最大距离（切比雪夫距离）
    ///
    /// 收敛判定按单轴进行，避免对角线方向提前吸附。
    pub fn max_axis_distance(self, other: Self) -> f64 {
        (other.x - self.x).abs().max((other.y - self.y).abs())
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for (f64, f64) {
    fn from(v: Vec2) -> Self {
        (v.x, v.y)
    }
}

/// 视口尺寸（单位：像素）
///
/// 由 Host 在挂载和每次滚动/缩放时上报。Runtime 不主动查询视口，
/// 只使用最近一次上报的值。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// 创建新的视口尺寸
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
