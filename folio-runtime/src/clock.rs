//! # Clock 模块
//!
//! 共享帧时钟。
//!
//! Host 每帧只提供绝对时间戳（毫秒，通常来自 `requestAnimationFrame`），
//! 时钟负责换算成秒级增量 `dt`，所有动画都由同一个 `dt` 推进。
//!
//! ## 卡顿平滑
//!
//! 标签页切到后台再回来时两帧间隔可能长达数秒。若原样推进，所有进行中的动画
//! 会直接跳到终点。间隔超过 `lag_threshold_ms` 时改用 `lag_adjusted_ms`。

use crate::config::MotionConfig;

/// 帧时钟
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// 上一帧时间戳（毫秒）
    last_timestamp: Option<f64>,
    /// 累计经过的时间（秒）
    elapsed: f64,
    /// 超过该间隔视为卡顿（毫秒）
    lag_threshold_ms: f64,
    /// 卡顿帧使用的替代间隔（毫秒）
    lag_adjusted_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

impl FrameClock {
    /// 使用给定卡顿参数创建时钟
    pub fn new(lag_threshold_ms: f64, lag_adjusted_ms: f64) -> Self {
        Self {
            last_timestamp: None,
            elapsed: 0.0,
            lag_threshold_ms: lag_threshold_ms.max(0.0),
            lag_adjusted_ms: lag_adjusted_ms.max(0.0),
        }
    }

    /// 从动效配置创建时钟
    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(config.lag_threshold_ms, config.lag_adjusted_ms)
    }

    /// 推进到新的时间戳，返回本帧增量（秒）
    ///
    /// 第一帧只建立基准，返回 0。时间戳倒退（host 重置了时间源）同样返回 0。
    pub fn advance_to(&mut self, timestamp_ms: f64) -> f32 {
        let Some(last) = self.last_timestamp.replace(timestamp_ms) else {
            return 0.0;
        };

        let mut delta_ms = timestamp_ms - last;
        if !delta_ms.is_finite() || delta_ms <= 0.0 {
            return 0.0;
        }
        if delta_ms > self.lag_threshold_ms {
            delta_ms = self.lag_adjusted_ms;
        }

        let dt = delta_ms / 1000.0;
        self.elapsed += dt;
        dt as f32
    }

    /// 累计经过的时间（秒）
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// 重置时钟（下一帧重新建立基准）
    pub fn reset(&mut self) {
        self.last_timestamp = None;
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_baseline() {
        let mut clock = FrameClock::new(500.0, 33.0);
        assert_eq!(clock.advance_to(1000.0), 0.0);
        let dt = clock.advance_to(1100.0);
        assert!((dt - 0.1).abs() < 1e-6);
        assert!((clock.elapsed() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_lag_smoothing() {
        let mut clock = FrameClock::new(500.0, 33.0);
        clock.advance_to(0.0);
        let dt = clock.advance_to(5000.0);
        assert!((dt - 0.033).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_timestamp() {
        let mut clock = FrameClock::new(500.0, 33.0);
        clock.advance_to(200.0);
        assert_eq!(clock.advance_to(100.0), 0.0);
        // 倒退后以新时间戳为基准继续
        let dt = clock.advance_to(150.0);
        assert!((dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new(500.0, 33.0);
        clock.advance_to(0.0);
        clock.advance_to(100.0);
        clock.reset();
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.advance_to(400.0), 0.0);
    }
}
