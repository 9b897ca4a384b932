//! # Animation 模块
//!
//! 通用动画实例定义。
//!
//! 核心设计：动画只关注 f32 值的时间轴变化，不假设对象类型。
//! 样式动画（[`StyleTween`](super::StyleTween)）在此之上用进度插值整组属性。

use super::{CancelToken, Completion, EasingFunction, Outcome};

/// 动画 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(pub u64);

impl AnimationId {
    /// 创建新的动画 ID
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// 动画状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// 等待开始（有延迟）
    #[default]
    Pending,
    /// 正在播放
    Playing,
    /// 已完成
    Completed,
    /// 已取消
    Cancelled,
}

impl AnimationState {
    /// 是否为活跃状态（需要更新）
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Playing)
    }

    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// 重复次数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// 只播放一次
    #[default]
    Once,
    /// 额外重复 n 次（共播放 n + 1 轮）
    Times(u32),
    /// 无限循环，永不完成
    Infinite,
}

/// 通用动画实例
///
/// 管理单个 f32 值从 `from` 到 `to` 在 `duration` 时间内的变化。
#[derive(Debug, Clone)]
pub struct Animation {
    /// 动画 ID
    pub id: AnimationId,
    /// 起始值
    pub from: f32,
    /// 目标值
    pub to: f32,
    /// 单轮时长（秒）
    pub duration: f32,
    /// 缓动函数
    pub easing: EasingFunction,
    /// 延迟启动（秒）
    pub delay: f32,
    /// 重复次数
    pub repeat: Repeat,
    /// 往返播放（奇数轮倒放）
    pub yoyo: bool,
    /// 当前状态
    pub state: AnimationState,
    /// 当前进度（已应用缓动）
    pub progress: f32,
    /// 当前轮已经过的时间
    elapsed: f32,
    /// 已完成的轮数
    cycle: u32,
    /// 取消令牌
    token: Option<CancelToken>,
    /// 完成信号
    completion: Completion,
}

impl Animation {
    /// 创建新的动画
    pub fn new(id: AnimationId, from: f32, to: f32, duration: f32) -> Self {
        Self {
            id,
            from,
            to,
            duration: duration.max(0.0),
            easing: EasingFunction::default(),
            delay: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
            state: AnimationState::Pending,
            progress: 0.0,
            elapsed: 0.0,
            cycle: 0,
            token: None,
            completion: Completion::new(),
        }
    }

    /// 设置缓动函数
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// 设置延迟
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// 设置重复次数
    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// 设置往返播放
    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// 绑定取消令牌
    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.token = Some(token);
        self
    }

    /// 完成信号
    pub fn completion(&self) -> Completion {
        self.completion.clone()
    }

    /// 更新动画
    ///
    /// # 返回
    /// - `true`: 动画仍在进行中
    /// - `false`: 动画已结束
    pub fn update(&mut self, dt: f32) -> bool {
        if self.token.as_ref().is_some_and(CancelToken::is_cancelled) {
            self.cancel();
            return false;
        }

        match self.state {
            AnimationState::Pending => {
                self.elapsed += dt;
                if self.elapsed >= self.delay {
                    self.state = AnimationState::Playing;
                    self.elapsed -= self.delay;
                    self.update_playing()
                } else {
                    true
                }
            }
            AnimationState::Playing => {
                self.elapsed += dt;
                self.update_playing()
            }
            AnimationState::Completed | AnimationState::Cancelled => false,
        }
    }

    /// 更新播放中的动画
    fn update_playing(&mut self) -> bool {
        if self.duration <= 0.0 {
            if self.repeat == Repeat::Infinite {
                // 零时长的无限循环没有意义，停在当前轮终点
                self.progress = self.cycle_progress(1.0);
                return true;
            }
            self.finish();
            return false;
        }

        while self.elapsed >= self.duration {
            if !self.has_next_cycle() {
                self.finish();
                return false;
            }
            self.elapsed -= self.duration;
            self.cycle += 1;
        }

        self.progress = self.cycle_progress(self.elapsed / self.duration);
        true
    }

    /// 是否还有下一轮
    fn has_next_cycle(&self) -> bool {
        match self.repeat {
            Repeat::Once => false,
            Repeat::Times(n) => self.cycle < n,
            Repeat::Infinite => true,
        }
    }

    /// 当前轮是否倒放
    fn is_reversed(&self) -> bool {
        self.yoyo && self.cycle % 2 == 1
    }

    /// 计算当前轮的缓动进度
    fn cycle_progress(&self, raw: f32) -> f32 {
        if self.is_reversed() {
            self.easing.apply(1.0 - raw)
        } else {
            self.easing.apply(raw)
        }
    }

    /// 正常结束
    fn finish(&mut self) {
        self.progress = if self.is_reversed() { 0.0 } else { 1.0 };
        self.elapsed = self.duration;
        self.state = AnimationState::Completed;
        self.completion.resolve(Outcome::Finished);
    }

    /// 取消动画
    ///
    /// 进度停留在当前值，完成信号以 `Cancelled` 结算。
    pub fn cancel(&mut self) {
        if self.state.is_active() {
            self.state = AnimationState::Cancelled;
            self.completion.resolve(Outcome::Cancelled);
        }
    }

    /// 当前轮的线性时间进度（0.0 - 1.0，未应用缓动）
    pub fn time_fraction(&self) -> f32 {
        match self.state {
            AnimationState::Pending => 0.0,
            AnimationState::Completed => 1.0,
            _ if self.duration <= 0.0 => 1.0,
            _ => (self.elapsed / self.duration).clamp(0.0, 1.0),
        }
    }

    /// 获取当前值
    pub fn current_value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress
    }

    /// 已完成的轮数
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    /// 是否正在播放
    pub fn is_playing(&self) -> bool {
        self.state == AnimationState::Playing
    }

    /// 是否已结束
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// 是否为活跃状态
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_animation() -> Animation {
        Animation::new(AnimationId::new(1), 0.0, 1.0, 1.0).with_easing(EasingFunction::Linear)
    }

    #[test]
    fn test_animation_creation() {
        let anim = create_test_animation();
        assert_eq!(anim.state, AnimationState::Pending);
        assert_eq!(anim.progress, 0.0);
        assert_eq!(anim.from, 0.0);
        assert_eq!(anim.to, 1.0);
    }

    #[test]
    fn test_animation_update() {
        let mut anim = create_test_animation();

        // 开始时是 Pending
        assert!(anim.update(0.1));
        assert_eq!(anim.state, AnimationState::Playing);

        // 进行中
        assert!(anim.update(0.4));
        assert!(anim.progress > 0.0);
        assert!(anim.progress < 1.0);

        let value = anim.current_value();
        assert!(value > 0.0);
        assert!(value < 1.0);

        // 完成
        assert!(!anim.update(0.6));
        assert_eq!(anim.state, AnimationState::Completed);
        assert_eq!(anim.progress, 1.0);
        assert_eq!(anim.current_value(), 1.0);
        assert!(anim.completion().is_finished());
    }

    #[test]
    fn test_animation_with_delay() {
        let mut anim = create_test_animation().with_delay(0.5);

        // 延迟期间
        assert!(anim.update(0.3));
        assert_eq!(anim.state, AnimationState::Pending);
        assert_eq!(anim.time_fraction(), 0.0);

        // 延迟结束，进入播放
        assert!(anim.update(0.3));
        assert_eq!(anim.state, AnimationState::Playing);
    }

    #[test]
    fn test_zero_duration() {
        let mut anim = Animation::new(AnimationId::new(1), 0.0, 1.0, 0.0);
        assert!(!anim.update(0.0));
        assert_eq!(anim.state, AnimationState::Completed);
        assert_eq!(anim.current_value(), 1.0);
    }

    #[test]
    fn test_time_fraction_is_linear() {
        let mut anim = Animation::new(AnimationId::new(1), 0.0, 1.0, 2.0)
            .with_easing(EasingFunction::POWER2_OUT);
        anim.update(0.5);
        assert!((anim.time_fraction() - 0.25).abs() < 1e-6);
        // 缓出曲线前段快于线性
        assert!(anim.progress > 0.25);
    }

    #[test]
    fn test_cancel_via_token() {
        let token = CancelToken::new();
        let mut anim = create_test_animation().with_token(token.clone());
        anim.update(0.3);
        let frozen = anim.current_value();

        token.cancel();
        assert!(!anim.update(0.3));
        assert_eq!(anim.state, AnimationState::Cancelled);
        assert_eq!(anim.current_value(), frozen);
        assert!(anim.completion().is_cancelled());
    }

    #[test]
    fn test_yoyo_infinite() {
        let mut anim = create_test_animation()
            .with_repeat(Repeat::Infinite)
            .with_yoyo(true);

        anim.update(0.0);
        anim.update(0.75);
        assert!((anim.progress - 0.75).abs() < 1e-6);

        // 第二轮倒放
        anim.update(0.5);
        assert_eq!(anim.cycle(), 1);
        assert!((anim.progress - 0.75).abs() < 1e-6);

        // 永不完成
        for _ in 0..100 {
            assert!(anim.update(0.37));
        }
        assert!(!anim.completion().is_settled());
    }

    #[test]
    fn test_repeat_times() {
        let mut anim = create_test_animation().with_repeat(Repeat::Times(1));
        anim.update(0.0);
        assert!(anim.update(1.5));
        assert_eq!(anim.cycle(), 1);
        assert!(!anim.update(0.6));
        assert!(anim.completion().is_finished());
    }
}
