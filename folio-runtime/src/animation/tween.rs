//! # Tween 模块
//!
//! 样式补间：把一个 0→1 的 [`Animation`] 进度映射到两帧 [`StyleFrame`] 之间，
//! 并写回舞台上的目标元素。

use super::{
    Animation, AnimationId, AnimationState, CancelToken, Completion, EasingFunction, Repeat,
    StyleFrame,
};
use crate::stage::{ElementId, Stage};

/// 样式补间
#[derive(Debug, Clone)]
pub struct StyleTween {
    /// 目标元素
    pub target: ElementId,
    /// 起始样式
    pub from: StyleFrame,
    /// 目标样式
    pub to: StyleFrame,
    /// 驱动进度的时间轴
    animation: Animation,
}

impl StyleTween {
    /// 创建样式补间
    pub fn new(
        id: AnimationId,
        target: ElementId,
        from: StyleFrame,
        to: StyleFrame,
        duration: f32,
    ) -> Self {
        Self {
            target,
            from,
            to,
            animation: Animation::new(id, 0.0, 1.0, duration),
        }
    }

    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.animation = self.animation.with_easing(easing);
        self
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.animation = self.animation.with_delay(delay);
        self
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.animation = self.animation.with_repeat(repeat);
        self
    }

    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.animation = self.animation.with_yoyo(yoyo);
        self
    }

    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.animation = self.animation.with_token(token);
        self
    }

    /// 动画 ID
    pub fn id(&self) -> AnimationId {
        self.animation.id
    }

    /// 完成信号
    pub fn completion(&self) -> Completion {
        self.animation.completion()
    }

    /// 底层动画
    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// 当前插值样式
    pub fn sample(&self) -> StyleFrame {
        self.from.lerp(&self.to, self.animation.progress)
    }

    /// 立即把起始样式写到目标上
    pub fn render_initial(&self, stage: &mut Stage) -> bool {
        stage.set_style(&self.target, self.from)
    }

    /// 推进补间并写回舞台
    ///
    /// 延迟期间和取消之后都不会写舞台。
    ///
    /// # 返回
    /// - `true`: 补间仍在进行中
    /// - `false`: 补间已结束
    pub fn update(&mut self, dt: f32, stage: &mut Stage) -> bool {
        if !self.animation.is_active() {
            return false;
        }

        let running = self.animation.update(dt);
        if matches!(
            self.animation.state,
            AnimationState::Playing | AnimationState::Completed
        ) {
            self.apply(stage);
        }
        running
    }

    /// 把当前插值写到目标上
    pub fn apply(&self, stage: &mut Stage) -> bool {
        stage.set_style(&self.target, self.sample())
    }

    /// 取消补间，目标保持当前样式
    pub fn cancel(&mut self) {
        self.animation.cancel();
    }

    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        self.animation.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{Bounds, ElementLayout};

    fn stage_with(id: &str) -> Stage {
        let mut stage = Stage::new();
        stage.sync_layout(&[ElementLayout::new(id, Bounds::new(0.0, 100.0))]);
        stage
    }

    #[test]
    fn test_tween_writes_stage() {
        let mut stage = stage_with("card");
        let mut tween = StyleTween::new(
            AnimationId::new(1),
            ElementId::new("card"),
            StyleFrame::hidden().with_y(100.0),
            StyleFrame::resting(),
            1.0,
        )
        .with_easing(EasingFunction::Linear);

        tween.render_initial(&mut stage);
        assert_eq!(stage.style(&ElementId::new("card")).map(|s| s.y), Some(100.0));

        tween.update(0.0, &mut stage);
        tween.update(0.5, &mut stage);
        assert_eq!(stage.style(&ElementId::new("card")).map(|s| s.y), Some(50.0));

        assert!(!tween.update(0.6, &mut stage));
        assert_eq!(
            stage.style(&ElementId::new("card")),
            Some(StyleFrame::resting())
        );
    }

    #[test]
    fn test_delay_does_not_write() {
        let mut stage = stage_with("card");
        let id = ElementId::new("card");
        let mut tween = StyleTween::new(
            AnimationId::new(1),
            id.clone(),
            StyleFrame::hidden(),
            StyleFrame::resting(),
            1.0,
        )
        .with_delay(1.0);

        let before = stage.mutations(&id);
        tween.update(0.5, &mut stage);
        assert_eq!(stage.mutations(&id), before);
    }
}
