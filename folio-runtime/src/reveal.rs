//! # Reveal 模块
//!
//! 滚动揭示引擎：元素所在区块进入视口时，把元素从隐藏样式动画到可见样式，只播放一次。
//!
//! ## 状态机
//!
//! 每个揭示目标是一个独立的状态机：
//!
//! ```text
//! Armed ──(触发条件满足)──► Fired（终态）
//! ```
//!
//! 触发条件在每次滚动、视口尺寸或布局变化时求值：
//! 触发元素顶边（加上元素内偏移）相对视口顶部的距离 ≤ 视口高度 × 比例。
//! 条件是"已越过"而非"正在越过"，所以一次跳过整个区块也会在第一次求值时触发；
//! 向上滚回去不会重放。
//!
//! ## 失败模式
//!
//! 注册时触发元素不存在：注册是空操作，返回 `None`，不报错。
//! 目标列表里不存在的元素被忽略。

use tracing::debug;

use crate::animation::{
    AnimationIds, CancelToken, Completion, EasingFunction, Outcome, StyleFrame, StyleTween,
};
use crate::stage::{ElementId, Stage};

/// 触发点
///
/// "触发元素的 `element_fraction` 处到达视口顶部往下 `viewport_fraction` 处"，
/// 例如 `TriggerPoint::top(0.7)` 即 "top 70%"。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPoint {
    /// 触发元素内的位置（0.0 = 顶边，1.0 = 底边）
    pub element_fraction: f32,
    /// 视口内的位置（0.0 = 顶部，1.0 = 底部）
    pub viewport_fraction: f32,
}

impl TriggerPoint {
    /// 元素顶边到达视口 `viewport_fraction` 处
    pub fn top(viewport_fraction: f32) -> Self {
        Self {
            element_fraction: 0.0,
            viewport_fraction,
        }
    }

    /// 触发条件是否满足
    pub fn is_reached(&self, stage: &Stage, trigger: &ElementId) -> bool {
        let (Some(bounds), Some(top)) = (stage.bounds(trigger), stage.viewport_top(trigger))
        else {
            return false;
        };
        let viewport = stage.viewport();
        if viewport.height <= 0.0 {
            return false;
        }
        let anchor = top + bounds.height * self.element_fraction;
        anchor <= viewport.height * self.viewport_fraction
    }
}

/// 揭示注册描述
#[derive(Debug, Clone)]
pub struct RevealSpec {
    pub trigger: ElementId,
    pub start: TriggerPoint,
    pub targets: Vec<ElementId>,
    pub from: StyleFrame,
    pub to: StyleFrame,
    pub duration: f32,
    pub easing: EasingFunction,
    /// 相邻目标的启动间隔（秒）
    pub stagger: f32,
}

impl RevealSpec {
    /// 以触发元素和触发点创建描述，默认目标为空、动画 1 秒
    pub fn new(trigger: impl Into<ElementId>, start: TriggerPoint) -> Self {
        Self {
            trigger: trigger.into(),
            start,
            targets: Vec::new(),
            from: StyleFrame::hidden(),
            to: StyleFrame::resting(),
            duration: 1.0,
            easing: EasingFunction::default(),
            stagger: 0.0,
        }
    }

    pub fn target(mut self, target: impl Into<ElementId>) -> Self {
        self.targets.push(target.into());
        self
    }

    pub fn targets(mut self, targets: impl IntoIterator<Item = ElementId>) -> Self {
        self.targets.extend(targets);
        self
    }

    pub fn from_to(mut self, from: StyleFrame, to: StyleFrame) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger.max(0.0);
        self
    }

    /// 每个目标的起始样式
    pub fn start_styles(&self) -> Vec<(ElementId, StyleFrame)> {
        self.targets.iter().map(|t| (t.clone(), self.from)).collect()
    }
}

/// 揭示 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(u64);

/// 揭示目标状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// 已布置，等待触发
    Armed,
    /// 已触发（终态）
    Fired,
}

/// 揭示事件
#[derive(Debug, Clone, PartialEq)]
pub enum RevealEvent {
    /// 某个目标开始揭示
    Fired { id: RevealId, target: ElementId },
    /// 某次注册的全部目标揭示完成
    Completed(RevealId),
}

/// 单个揭示目标
#[derive(Debug)]
struct RevealTarget {
    element: ElementId,
    state: RevealState,
    /// 在组内的序号，用于计算错开延迟
    index: usize,
    tween: Option<StyleTween>,
}

/// 一次注册
#[derive(Debug)]
struct RevealGroup {
    id: RevealId,
    spec: RevealSpec,
    targets: Vec<RevealTarget>,
    token: CancelToken,
    completion: Completion,
    completion_reported: bool,
}

impl RevealGroup {
    /// 触发条件满足时启动所有仍在等待的目标
    fn fire(&mut self, stage: &Stage, ids: &mut AnimationIds) -> Vec<RevealEvent> {
        if !self.targets.iter().any(|t| t.state == RevealState::Armed) {
            return Vec::new();
        }
        if !self.spec.start.is_reached(stage, &self.spec.trigger) {
            return Vec::new();
        }

        let mut events = Vec::new();
        let mut parts = Vec::with_capacity(self.targets.len());
        for target in &mut self.targets {
            if target.state != RevealState::Armed {
                continue;
            }
            let tween = StyleTween::new(
                ids.next_id(),
                target.element.clone(),
                self.spec.from,
                self.spec.to,
                self.spec.duration,
            )
            .with_easing(self.spec.easing)
            .with_delay(self.spec.stagger * target.index as f32)
            .with_token(self.token.clone());

            parts.push(tween.completion());
            target.tween = Some(tween);
            target.state = RevealState::Fired;
            events.push(RevealEvent::Fired {
                id: self.id,
                target: target.element.clone(),
            });
        }

        let completion = self.completion.clone();
        Completion::all(parts).on_settle(move |outcome| {
            completion.resolve(outcome);
        });

        debug!(id = self.id.0, trigger = %self.spec.trigger, "揭示已触发");
        events
    }
}

/// 滚动揭示引擎
#[derive(Debug, Default)]
pub struct RevealEngine {
    groups: Vec<RevealGroup>,
    next_id: u64,
    ids: AnimationIds,
}

impl RevealEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册揭示
    ///
    /// 立即把起始样式写到所有存在的目标上，并对当前视口求一次值
    /// （进入页面时已在触发点以下的区块会直接触发）。
    ///
    /// 触发元素不存在时返回 `None`。
    pub fn register(&mut self, stage: &mut Stage, spec: RevealSpec) -> Option<RevealId> {
        if !stage.contains(&spec.trigger) {
            debug!(trigger = %spec.trigger, "触发元素不存在，忽略揭示注册");
            return None;
        }

        self.next_id += 1;
        let id = RevealId(self.next_id);

        let targets: Vec<RevealTarget> = spec
            .targets
            .iter()
            .filter(|element| stage.contains(element))
            .enumerate()
            .map(|(index, element)| RevealTarget {
                element: element.clone(),
                state: RevealState::Armed,
                index,
                tween: None,
            })
            .collect();

        for target in &targets {
            stage.set_style(&target.element, spec.from);
        }

        debug!(
            id = id.0,
            trigger = %spec.trigger,
            targets = targets.len(),
            "揭示已布置"
        );

        self.groups.push(RevealGroup {
            id,
            spec,
            targets,
            token: CancelToken::new(),
            completion: Completion::new(),
            completion_reported: false,
        });

        // 只对新注册求值，其他组的事件留给下一次 evaluate
        if let Some(group) = self.groups.last_mut() {
            group.fire(stage, &mut self.ids);
        }
        Some(id)
    }

    /// 对所有已布置的目标求值触发条件
    ///
    /// 在滚动、视口尺寸或布局变化后调用。
    pub fn evaluate(&mut self, stage: &Stage) -> Vec<RevealEvent> {
        let mut events = Vec::new();
        for group in &mut self.groups {
            events.extend(group.fire(stage, &mut self.ids));
        }
        events
    }

    /// 推进所有已触发的动画
    pub fn update(&mut self, dt: f32, stage: &mut Stage) -> Vec<RevealEvent> {
        let mut events = Vec::new();

        for group in &mut self.groups {
            for target in &mut group.targets {
                if let Some(tween) = target.tween.as_mut() {
                    tween.update(dt, stage);
                }
            }

            if group.completion.is_finished() && !group.completion_reported {
                group.completion_reported = true;
                events.push(RevealEvent::Completed(group.id));
            }
        }

        events
    }

    /// 移除一次注册，取消其进行中的动画
    ///
    /// 目标保持当前样式，之后不再被写入。
    pub fn remove(&mut self, id: RevealId) -> bool {
        let Some(index) = self.groups.iter().position(|g| g.id == id) else {
            return false;
        };
        let mut group = self.groups.remove(index);
        group.token.cancel();
        for target in &mut group.targets {
            if let Some(tween) = target.tween.as_mut() {
                tween.cancel();
            }
        }
        group.completion.resolve(Outcome::Cancelled);
        debug!(id = id.0, "揭示已移除");
        true
    }

    /// 某个目标的状态
    pub fn state(&self, id: RevealId, element: &ElementId) -> Option<RevealState> {
        self.group(id)?
            .targets
            .iter()
            .find(|t| &t.element == element)
            .map(|t| t.state)
    }

    /// 某次注册中已触发的目标数量
    pub fn fired_count(&self, id: RevealId) -> usize {
        self.group(id).map_or(0, |g| {
            g.targets
                .iter()
                .filter(|t| t.state == RevealState::Fired)
                .count()
        })
    }

    /// 某次注册实际接管的目标数量
    pub fn target_count(&self, id: RevealId) -> usize {
        self.group(id).map_or(0, |g| g.targets.len())
    }

    /// 某次注册的完成信号
    pub fn completion(&self, id: RevealId) -> Option<Completion> {
        self.group(id).map(|g| g.completion.clone())
    }

    /// 当前注册数量
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn group(&self, id: RevealId) -> Option<&RevealGroup> {
        self.groups.iter().find(|g| g.id == id)
    }
}
