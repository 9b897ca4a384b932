//! # Gate 模块
//!
//! 加载闸门：启动画面的确定性进度动画，结束后淡出，最后通知宿主切换到正文。
//!
//! ## 阶段
//!
//! ```text
//! Loading ──(进度动画完成)──► Fading ──(淡出完成)──► Ready
//! ```
//!
//! - `Loading`：进度 0→1，每帧重算百分比 `round(progress * 100)`
//! - `Fading`：启动画面 opacity 1→0、scale 1→0.9
//! - `Ready`：终态。先释放滚动锁，再调用一次就绪回调
//!
//! `Loading` 和 `Fading` 期间持有滚动锁。闸门被提前取消或 drop 时，
//! 回调被丢弃、锁被释放，之后不再产生任何事件。

use tracing::{debug, info};

use crate::animation::{
    Animation, AnimationId, Completion, EasingFunction, Outcome, StyleFrame, StyleTween,
};
use crate::config::MotionConfig;
use crate::scroll_lock::ScrollLockGuard;
use crate::stage::{ElementId, Stage};

/// 启动画面根元素
pub const SPLASH: &str = "preloader";

/// 闸门阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePhase {
    #[default]
    Loading,
    Fading,
    Ready,
}

impl GatePhase {
    /// 是否需要锁定滚动
    pub fn locks_scroll(&self) -> bool {
        !matches!(self, Self::Ready)
    }
}

/// 闸门事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    /// 百分比变化
    PercentChanged(u8),
    /// 进入新阶段
    PhaseChanged(GatePhase),
}

type ReadyCallback = Box<dyn FnOnce()>;

/// 加载闸门
pub struct ReadyGate {
    phase: GatePhase,
    /// 0→1 的进度动画
    progress: Animation,
    /// 启动画面淡出
    fade: StyleTween,
    percent: u8,
    lock: Option<ScrollLockGuard>,
    on_ready: Option<ReadyCallback>,
    completion: Completion,
    cancelled: bool,
}

impl std::fmt::Debug for ReadyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadyGate")
            .field("phase", &self.phase)
            .field("percent", &self.percent)
            .field("locked", &self.lock.is_some())
            .field("cancelled", &self.cancelled)
            .finish()
    }
}

impl ReadyGate {
    /// 创建闸门并立即加锁
    pub fn new(stage: &Stage, motion: &MotionConfig) -> Self {
        let progress = Animation::new(AnimationId::new(0), 0.0, 1.0, motion.progress_duration)
            .with_easing(EasingFunction::POWER2_OUT);
        let fade = StyleTween::new(
            AnimationId::new(1),
            ElementId::new(SPLASH),
            StyleFrame::resting(),
            StyleFrame::resting()
                .with_opacity(0.0)
                .with_scale(motion.fade_scale),
            motion.fade_duration,
        )
        .with_easing(EasingFunction::POWER2_IN_OUT);

        let lock = stage.scroll_lock().acquire("preloader");
        debug!(duration = motion.progress_duration, "加载闸门进入 loading");

        Self {
            phase: GatePhase::Loading,
            progress,
            fade,
            percent: 0,
            lock: Some(lock),
            on_ready: None,
            completion: Completion::new(),
            cancelled: false,
        }
    }

    /// 设置就绪回调（只会被调用一次）
    pub fn on_ready(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_ready = Some(Box::new(callback));
        self
    }

    /// 推进闸门
    pub fn update(&mut self, dt: f32, stage: &mut Stage) -> Vec<GateEvent> {
        let mut events = Vec::new();
        if self.cancelled {
            return events;
        }

        match self.phase {
            GatePhase::Loading => {
                let running = self.progress.update(dt);
                let percent = if running {
                    let raw = (self.progress.time_fraction() * 100.0).round() as u8;
                    raw.clamp(self.percent, 99)
                } else {
                    100
                };
                if percent != self.percent {
                    self.percent = percent;
                    events.push(GateEvent::PercentChanged(percent));
                }

                if !running {
                    self.phase = GatePhase::Fading;
                    debug!("加载闸门进入 fading");
                    events.push(GateEvent::PhaseChanged(GatePhase::Fading));
                }
            }
            GatePhase::Fading => {
                if !self.fade.update(dt, stage) && self.fade.is_finished() {
                    self.finish();
                    events.push(GateEvent::PhaseChanged(GatePhase::Ready));
                }
            }
            GatePhase::Ready => {}
        }

        events
    }

    /// 进入 ready：先解锁，再回调
    fn finish(&mut self) {
        self.phase = GatePhase::Ready;
        if let Some(lock) = self.lock.take() {
            lock.release();
        }
        info!("加载完成");
        if let Some(callback) = self.on_ready.take() {
            callback();
        }
        self.completion.resolve(Outcome::Finished);
    }

    /// 提前卸载
    ///
    /// 丢弃回调并释放滚动锁，之后 `update` 不再产生事件。已就绪时无效。
    pub fn cancel(&mut self) {
        if self.cancelled || self.phase == GatePhase::Ready {
            return;
        }
        self.cancelled = true;
        self.on_ready = None;
        self.lock = None;
        self.progress.cancel();
        self.fade.cancel();
        self.completion.resolve(Outcome::Cancelled);
        debug!(phase = ?self.phase, "加载闸门已取消");
    }

    /// 当前阶段
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// 当前百分比（0 - 100）
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// 进度条宽度（0.0 - 100.0，已应用缓动）
    pub fn bar_width(&self) -> f32 {
        self.progress.current_value() * 100.0
    }

    /// 启动画面当前样式
    pub fn splash_style(&self) -> StyleFrame {
        match self.phase {
            GatePhase::Loading => StyleFrame::resting(),
            GatePhase::Fading | GatePhase::Ready => self.fade.sample(),
        }
    }

    /// 是否持有滚动锁
    pub fn holds_lock(&self) -> bool {
        self.lock.is_some()
    }

    /// 就绪信号
    pub fn completion(&self) -> Completion {
        self.completion.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Drop for ReadyGate {
    fn drop(&mut self) {
        self.cancel();
    }
}
