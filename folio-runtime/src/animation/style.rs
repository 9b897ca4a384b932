//! # Style 模块
//!
//! 可动画的视觉属性快照。
//!
//! 揭示、时间轴、加载闸门最终都只改动这五个属性；`to_css` 把它们翻译成
//! host 直接写进 `style` 属性的字符串。

use serde::{Deserialize, Serialize};

/// 视觉属性快照
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleFrame {
    /// 不透明度 (0.0 - 1.0)
    pub opacity: f32,
    /// 水平位移（px）
    pub x: f32,
    /// 垂直位移（px）
    pub y: f32,
    /// 模糊半径（px）
    pub blur: f32,
    /// 缩放
    pub scale: f32,
}

impl Default for StyleFrame {
    fn default() -> Self {
        Self::resting()
    }
}

impl StyleFrame {
    /// 静止状态：完全可见，无位移、无模糊、原始尺寸
    pub const fn resting() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            blur: 0.0,
            scale: 1.0,
        }
    }

    /// 隐藏状态：仅不透明度为 0，其余同静止状态
    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::resting()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// 按进度插值
    ///
    /// `t` 不做截断：回弹类缓动会产生略大于 1 的进度，位移和缩放需要随之越界。
    /// 不透明度和模糊在插值后截断到合法范围。
    pub fn lerp(&self, to: &StyleFrame, t: f32) -> StyleFrame {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        StyleFrame {
            opacity: mix(self.opacity, to.opacity).clamp(0.0, 1.0),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            blur: mix(self.blur, to.blur).max(0.0),
            scale: mix(self.scale, to.scale),
        }
    }

    /// 转换为内联 CSS
    ///
    /// 静止状态的属性不输出，静止帧返回空字符串。
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();

        if self.opacity < 1.0 {
            decls.push(format!("opacity: {}", round3(self.opacity)));
        }

        let mut transforms = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            transforms.push(format!(
                "translate({}px, {}px)",
                round3(self.x),
                round3(self.y)
            ));
        }
        if self.scale != 1.0 {
            transforms.push(format!("scale({})", round3(self.scale)));
        }
        if !transforms.is_empty() {
            decls.push(format!("transform: {}", transforms.join(" ")));
        }

        if self.blur > 0.0 {
            decls.push(format!("filter: blur({}px)", round3(self.blur)));
        }

        decls.join("; ")
    }
}

/// 保留三位小数，避免输出 `0.30000001`
fn round3(v: f32) -> f32 {
    (v * 1000.0).round() / 1000.0
}
