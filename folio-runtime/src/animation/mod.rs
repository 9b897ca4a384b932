//! # Animation 模块
//!
//! 通用动画核心，滚动揭示、时间轴、加载闸门都建立在它之上。
//!
//! ## 核心设计理念
//!
//! 动画只负责 **时间轴管理**：
//! - 知道某个值从 A 到 B 需要在 duration 内变化
//! - 每帧由共享时钟给出的 `dt` 推进，不自己读时间
//! - 结束时结算一次 [`Completion`]，被 [`CancelToken`] 取消后不再写任何样式
//!
//! ## 核心概念
//!
//! - `Animation`: 单个 f32 动画实例，支持延迟、重复、往返
//! - `StyleTween`: 把动画进度映射到两帧 `StyleFrame` 之间并写回舞台
//! - `EasingFunction`: 缓动函数
//! - `Completion` / `CancelToken`: 完成信号与取消令牌
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! let token = CancelToken::new();
//! let mut tween = StyleTween::new(
//!     AnimationId::new(1),
//!     ElementId::new("about.image"),
//!     StyleFrame::hidden().with_x(-100.0).with_blur(10.0),
//!     StyleFrame::resting(),
//!     1.2,
//! )
//! .with_easing(EasingFunction::POWER3_OUT)
//! .with_token(token.clone());
//!
//! tween.render_initial(&mut stage);
//! while tween.update(dt, &mut stage) {}
//! ```

mod animation;
mod completion;
mod easing;
mod style;
mod tween;

pub use animation::{Animation, AnimationId, AnimationState, Repeat};
pub use completion::{CancelToken, Completion, Outcome};
pub use easing::EasingFunction;
pub use style::StyleFrame;
pub use tween::StyleTween;

/// 动画 ID 分配器
///
/// 揭示引擎、时间轴、环境循环各自持有一个，ID 只在分配器内唯一。
#[derive(Debug, Clone, Default)]
pub struct AnimationIds {
    next: u64,
}

impl AnimationIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生成下一个动画 ID
    pub fn next_id(&mut self) -> AnimationId {
        self.next += 1;
        AnimationId::new(self.next)
    }
}
