//! # Easing 模块
//!
//! 缓动函数库，用于动画的时间插值。
//!
//! 站点动效沿用 power/back 曲线族的命名习惯，对应关系：
//! `power1` = Quad，`power2` = Cubic，`power3` = Quart，`back.out(1.7)` = `EaseOutBack`。

/// `EaseOutBack` 的回弹系数
const BACK_OVERSHOOT: f32 = 1.7;

/// 缓动函数类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingFunction {
    /// 线性（匀速）
    Linear,
    /// 二次缓出
    #[default]
    EaseOutQuad,
    /// 二次缓入缓出
    EaseInOutQuad,
    /// 三次缓出
    EaseOutCubic,
    /// 三次缓入缓出
    EaseInOutCubic,
    /// 四次缓出
    EaseOutQuart,
    /// 回弹缓出（先越过终点再回落）
    EaseOutBack,
}

impl EasingFunction {
    /// `power1.inOut`
    pub const POWER1_IN_OUT: Self = Self::EaseInOutQuad;
    /// `power2.out`
    pub const POWER2_OUT: Self = Self::EaseOutCubic;
    /// `power2.inOut`
    pub const POWER2_IN_OUT: Self = Self::EaseInOutCubic;
    /// `power3.out`
    pub const POWER3_OUT: Self = Self::EaseOutQuart;
    /// `back.out(1.7)`
    pub const BACK_OUT: Self = Self::EaseOutBack;

    /// 计算缓动值
    ///
    /// # 参数
    /// - `t`: 时间进度 (0.0 - 1.0)
    ///
    /// # 返回
    /// - 缓动后的进度值。`EaseOutBack` 在中途会略超出 1.0
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            EasingFunction::EaseOutBack => ease_out_back(t),
        }
    }
}

/// 回弹缓出
fn ease_out_back(t: f32) -> f32 {
    let c3 = BACK_OVERSHOOT + 1.0;
    let u = t - 1.0;
    1.0 + c3 * u.powi(3) + BACK_OVERSHOOT * u.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingFunction; 7] = [
        EasingFunction::Linear,
        EasingFunction::EaseOutQuad,
        EasingFunction::EaseInOutQuad,
        EasingFunction::EaseOutCubic,
        EasingFunction::EaseInOutCubic,
        EasingFunction::EaseOutQuart,
        EasingFunction::EaseOutBack,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-4, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_linear() {
        let easing = EasingFunction::Linear;
        assert_eq!(easing.apply(0.5), 0.5);
    }

    #[test]
    fn test_clamp() {
        let easing = EasingFunction::Linear;
        // 超出范围应该被限制
        assert_eq!(easing.apply(-0.5), 0.0);
        assert_eq!(easing.apply(1.5), 1.0);
    }

    #[test]
    fn test_back_overshoots() {
        let peak = (1..100)
            .map(|i| EasingFunction::BACK_OUT.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_in_out_is_symmetric() {
        for easing in [EasingFunction::POWER1_IN_OUT, EasingFunction::POWER2_IN_OUT] {
            assert!((easing.apply(0.5) - 0.5).abs() < 1e-6);
            assert!((easing.apply(0.25) + easing.apply(0.75) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_power_out_is_monotonic() {
        for easing in [EasingFunction::POWER2_OUT, EasingFunction::POWER3_OUT] {
            let mut last = 0.0;
            for i in 0..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v >= last);
                last = v;
            }
        }
    }
}
