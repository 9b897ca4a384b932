//! # Timeline 模块
//!
//! 时间轴编排器：一组有序步骤，每一步相对上一步的结束时间偏移启动。
//!
//! ## 偏移规则
//!
//! ```text
//! start[0] = delay + offset[0]
//! start[i] = end[i-1] + offset[i]      （Offset::Relative）
//! end[i]   = start[i] + duration[i]
//! ```
//!
//! 负偏移让后一步在前一步结束前启动（重叠）。所有步骤由同一个 `dt` 推进，
//! 重叠只是时间上的交错，没有真正的并行。
//!
//! ## 取消
//!
//! 所有步骤共享时间轴的 [`CancelToken`]。`cancel()` 之后未开始和进行中的步骤
//! 立即停止，不再写任何样式，完成信号以 `Cancelled` 结算。
//! 拥有时间轴的视图卸载时必须调用。

use tracing::debug;

use crate::animation::{
    AnimationIds, CancelToken, Completion, EasingFunction, Outcome, StyleFrame, StyleTween,
};
use crate::stage::{ElementId, Stage};

/// 步骤启动偏移
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Offset {
    /// 紧接上一步结束
    #[default]
    AfterPrevious,
    /// 相对上一步结束的偏移（秒），负数表示重叠
    Relative(f32),
    /// 时间轴上的绝对位置（秒，不含时间轴延迟）
    At(f32),
}

/// 时间轴步骤
#[derive(Debug, Clone)]
pub struct TimelineStep {
    pub target: ElementId,
    pub from: StyleFrame,
    pub to: StyleFrame,
    pub duration: f32,
    pub easing: EasingFunction,
    pub offset: Offset,
}

impl TimelineStep {
    pub fn new(target: impl Into<ElementId>, from: StyleFrame, to: StyleFrame, duration: f32) -> Self {
        Self {
            target: target.into(),
            from,
            to,
            duration: duration.max(0.0),
            easing: EasingFunction::default(),
            offset: Offset::AfterPrevious,
        }
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }
}

/// 时间轴状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineState {
    /// 已编排，尚未启动
    #[default]
    Idle,
    /// 运行中
    Running,
    /// 全部步骤完成
    Finished,
    /// 已取消
    Cancelled,
}

/// 已调度的步骤
#[derive(Debug)]
struct ScheduledStep {
    /// 绝对启动时间（秒，含时间轴延迟）
    start: f32,
    /// 目标不存在时为 `None`
    tween: Option<StyleTween>,
}

/// 时间轴
#[derive(Debug, Default)]
pub struct Timeline {
    delay: f32,
    steps: Vec<TimelineStep>,
    scheduled: Vec<ScheduledStep>,
    state: TimelineState,
    elapsed: f32,
    token: CancelToken,
    completion: Completion,
    ids: AnimationIds,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// 整条时间轴的启动延迟（秒）
    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// 追加步骤
    pub fn step(mut self, step: TimelineStep) -> Self {
        self.steps.push(step);
        self
    }

    /// 计算各步骤的绝对启动时间（含延迟）
    pub fn start_times(&self) -> Vec<f32> {
        let mut starts = Vec::with_capacity(self.steps.len());
        let mut previous_end = 0.0_f32;

        for step in &self.steps {
            let start = match step.offset {
                Offset::AfterPrevious => previous_end,
                Offset::Relative(offset) => previous_end + offset,
                Offset::At(at) => at,
            }
            .max(0.0);
            previous_end = start + step.duration;
            starts.push(self.delay + start);
        }

        starts
    }

    /// 每一步目标的起始样式
    ///
    /// 同一目标出现在多步时取第一步的起始帧。
    pub fn start_styles(&self) -> Vec<(ElementId, StyleFrame)> {
        let mut styles: Vec<(ElementId, StyleFrame)> = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            if !styles.iter().any(|(target, _)| target == &step.target) {
                styles.push((step.target.clone(), step.from));
            }
        }
        styles
    }

    /// 总时长（含延迟）
    pub fn duration(&self) -> f32 {
        self.start_times()
            .iter()
            .zip(&self.steps)
            .map(|(start, step)| start + step.duration)
            .fold(self.delay, f32::max)
    }

    /// 启动时间轴
    ///
    /// 立即把每一步的起始样式写到目标上。目标不存在的步骤是空操作。
    /// 重复调用无效。
    pub fn arm(&mut self, stage: &mut Stage) {
        if self.state != TimelineState::Idle {
            return;
        }

        let starts = self.start_times();
        let mut parts = Vec::with_capacity(self.steps.len());

        for (step, start) in self.steps.iter().zip(starts) {
            if !stage.contains(&step.target) {
                debug!(target = %step.target, "时间轴步骤目标不存在，跳过");
                self.scheduled.push(ScheduledStep { start, tween: None });
                continue;
            }

            let tween = StyleTween::new(
                self.ids.next_id(),
                step.target.clone(),
                step.from,
                step.to,
                step.duration,
            )
            .with_easing(step.easing)
            .with_delay(start)
            .with_token(self.token.clone());

            tween.render_initial(stage);
            parts.push(tween.completion());
            self.scheduled.push(ScheduledStep {
                start,
                tween: Some(tween),
            });
        }

        let completion = self.completion.clone();
        Completion::all(parts).on_settle(move |outcome| {
            completion.resolve(outcome);
        });

        self.state = TimelineState::Running;
        debug!(steps = self.steps.len(), "时间轴已启动");
    }

    /// 推进时间轴
    ///
    /// # 返回
    /// - `true`: 仍在运行
    /// - `false`: 已完成、已取消或尚未启动
    pub fn update(&mut self, dt: f32, stage: &mut Stage) -> bool {
        if self.state != TimelineState::Running {
            return false;
        }
        if self.token.is_cancelled() {
            self.cancel();
            return false;
        }

        self.elapsed += dt;
        for step in &mut self.scheduled {
            if let Some(tween) = step.tween.as_mut() {
                tween.update(dt, stage);
            }
        }

        if self.completion.is_finished() {
            self.state = TimelineState::Finished;
            debug!("时间轴已完成");
            return false;
        }
        true
    }

    /// 取消时间轴
    ///
    /// 未开始和进行中的步骤全部停止，之后不再写任何样式。
    pub fn cancel(&mut self) {
        if matches!(self.state, TimelineState::Finished | TimelineState::Cancelled) {
            return;
        }
        self.token.cancel();
        for step in &mut self.scheduled {
            if let Some(tween) = step.tween.as_mut() {
                tween.cancel();
            }
        }
        self.completion.resolve(Outcome::Cancelled);
        self.state = TimelineState::Cancelled;
        debug!(elapsed = self.elapsed, "时间轴已取消");
    }

    /// 取消令牌（可交给外部统一取消）
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// 完成信号
    pub fn completion(&self) -> Completion {
        self.completion.clone()
    }

    /// 当前状态
    pub fn state(&self) -> TimelineState {
        self.state
    }

    /// 已运行时间（秒）
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// 是否全部完成
    pub fn is_finished(&self) -> bool {
        self.state == TimelineState::Finished
    }

    /// 步骤数量
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 第 `index` 步的绝对启动时间（启动后有效）
    pub fn scheduled_start(&self, index: usize) -> Option<f32> {
        self.scheduled.get(index).map(|s| s.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{Bounds, ElementLayout};

    fn stage() -> Stage {
        let mut stage = Stage::new();
        stage.resize(900.0);
        stage.sync_layout(&[
            ElementLayout::new("headline", Bounds::new(100.0, 80.0)),
            ElementLayout::new("subtitle", Bounds::new(200.0, 40.0)),
            ElementLayout::new("cta", Bounds::new(260.0, 50.0)),
        ]);
        stage
    }

    fn hero_like() -> Timeline {
        Timeline::new()
            .with_delay(0.5)
            .step(
                TimelineStep::new(
                    "headline",
                    StyleFrame::hidden().with_y(50.0),
                    StyleFrame::resting(),
                    1.2,
                )
                .easing(EasingFunction::Linear),
            )
            .step(
                TimelineStep::new(
                    "subtitle",
                    StyleFrame::hidden().with_y(30.0),
                    StyleFrame::resting(),
                    1.0,
                )
                .easing(EasingFunction::Linear)
                .offset(Offset::Relative(-0.8)),
            )
            .step(
                TimelineStep::new(
                    "cta",
                    StyleFrame::hidden().with_scale(0.8),
                    StyleFrame::resting(),
                    0.8,
                )
                .easing(EasingFunction::Linear)
                .offset(Offset::Relative(-0.6)),
            )
    }

    #[test]
    fn test_start_times_overlap() {
        let starts = hero_like().start_times();
        assert!((starts[0] - 0.5).abs() < 1e-6);
        assert!((starts[1] - 0.9).abs() < 1e-6);
        assert!((starts[2] - 1.3).abs() < 1e-6);
        assert!((hero_like().duration() - 2.1).abs() < 1e-6);
    }

    #[test]
    fn test_negative_offset_clamped() {
        let timeline = Timeline::new().step(
            TimelineStep::new("a", StyleFrame::hidden(), StyleFrame::resting(), 1.0)
                .offset(Offset::Relative(-5.0)),
        );
        assert_eq!(timeline.start_times(), vec![0.0]);
    }

    #[test]
    fn test_arm_renders_initial_styles() {
        let mut stage = stage();
        let mut timeline = hero_like();
        timeline.arm(&mut stage);

        assert_eq!(timeline.state(), TimelineState::Running);
        assert_eq!(stage.style(&ElementId::new("headline")).map(|s| s.y), Some(50.0));
        assert_eq!(stage.style(&ElementId::new("cta")).map(|s| s.scale), Some(0.8));
    }

    #[test]
    fn test_start_styles_first_step_wins() {
        let timeline = hero_like().step(TimelineStep::new(
            "headline",
            StyleFrame::resting(),
            StyleFrame::hidden(),
            0.5,
        ));
        let styles = timeline.start_styles();
        assert_eq!(styles.len(), 3);
        assert_eq!(styles[0].0.as_str(), "headline");
        assert_eq!(styles[0].1.y, 50.0);
    }

    #[test]
    fn test_runs_in_order() {
        let mut stage = stage();
        let mut timeline = hero_like();
        timeline.arm(&mut stage);

        // 0.7 秒：只有 headline 开始
        timeline.update(0.7, &mut stage);
        assert!(stage.style(&ElementId::new("headline")).unwrap().opacity > 0.0);
        assert_eq!(stage.style(&ElementId::new("subtitle")).unwrap().opacity, 0.0);

        // 1.0 秒：subtitle 已开始（0.9），cta 未开始（1.3）
        timeline.update(0.3, &mut stage);
        assert!(stage.style(&ElementId::new("subtitle")).unwrap().opacity > 0.0);
        assert_eq!(stage.style(&ElementId::new("cta")).unwrap().opacity, 0.0);

        let mut running = true;
        for _ in 0..30 {
            running = timeline.update(0.1, &mut stage);
        }
        assert!(!running);
        assert!(timeline.is_finished());
        assert!(timeline.completion().is_finished());
        for id in ["headline", "subtitle", "cta"] {
            assert_eq!(
                stage.style(&ElementId::new(id)),
                Some(StyleFrame::resting())
            );
        }
    }

    #[test]
    fn test_cancel_mid_flight_stops_mutation() {
        let mut stage = stage();
        let mut timeline = hero_like();
        timeline.arm(&mut stage);
        timeline.update(1.0, &mut stage);

        let ids: Vec<ElementId> = ["headline", "subtitle", "cta"]
            .into_iter()
            .map(ElementId::new)
            .collect();
        let before: Vec<u64> = ids.iter().map(|id| stage.mutations(id)).collect();

        timeline.cancel();
        assert_eq!(timeline.state(), TimelineState::Cancelled);
        assert!(timeline.completion().is_cancelled());

        for _ in 0..30 {
            assert!(!timeline.update(0.1, &mut stage));
        }
        let after: Vec<u64> = ids.iter().map(|id| stage.mutations(id)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_external_token_cancel() {
        let mut stage = stage();
        let mut timeline = hero_like();
        timeline.arm(&mut stage);
        let token = timeline.token();

        timeline.update(0.6, &mut stage);
        token.cancel();
        assert!(!timeline.update(0.1, &mut stage));
        assert_eq!(timeline.state(), TimelineState::Cancelled);
    }

    #[test]
    fn test_missing_target_is_noop() {
        let mut stage = stage();
        let mut timeline = hero_like().step(
            TimelineStep::new("spline", StyleFrame::hidden(), StyleFrame::resting(), 1.5)
                .offset(Offset::Relative(-1.2)),
        );
        timeline.arm(&mut stage);

        for _ in 0..40 {
            timeline.update(0.1, &mut stage);
        }
        assert!(timeline.is_finished());
        assert!(!stage.contains(&ElementId::new("spline")));
    }

    #[test]
    fn test_update_before_arm() {
        let mut stage = stage();
        let mut timeline = hero_like();
        assert!(!timeline.update(0.1, &mut stage));
        assert_eq!(stage.mutations(&ElementId::new("headline")), 0);
    }
}
