//! # Sections 模块
//!
//! 页面区块的动效声明。
//!
//! 每个区块在挂载时通过 [`MountContext`] 声明自己的揭示、时间轴和环境循环，
//! 全部记录在该区块的 [`MotionScope`] 里。卸载时 [`MotionScope::revert`] 一次性
//! 撤销：移除揭示、取消时间轴、停止循环，之后不会再写任何样式。
//!
//! 区块挂载要等宿主第一次上报它的元素，而宿主渲染区块要早一帧。
//! [`Section::start_styles`] 给出挂载前就该生效的起始帧，页面在闸门就绪时预置到舞台上。
//!
//! 元素标识约定为 `<区块>.<部件>[.<序号>]`，宿主把它写到 DOM 的 `data-folio` 属性上。

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use hero::Hero;
pub use navigation::Navigation;
pub use projects::Projects;

use tracing::debug;

use crate::animation::{
    AnimationIds, CancelToken, EasingFunction, Repeat, StyleFrame, StyleTween,
};
use crate::config::{MotionConfig, SiteConfig};
use crate::reveal::{RevealEngine, RevealId, RevealSpec};
use crate::stage::{ElementId, Stage};
use crate::timeline::Timeline;

/// 页面区块
pub trait Section {
    /// 区块名（日志用）
    fn name(&self) -> &'static str;

    /// 挂载时声明动效
    fn mount(&self, cx: &mut MountContext<'_>);

    /// 挂载前就应生效的起始样式
    fn start_styles(&self, _motion: &MotionConfig) -> Vec<(ElementId, StyleFrame)> {
        Vec::new()
    }
}

/// 按挂载顺序构建全部区块
pub fn page_sections(site: &SiteConfig) -> Vec<Box<dyn Section>> {
    vec![
        Box::new(Navigation),
        Box::new(Hero::new(site.embed_url.is_some())),
        Box::new(About::new(site.skills.len())),
        Box::new(Projects::new(site.projects.len())),
        Box::new(Contact),
        Box::new(Footer),
    ]
}

/// 环境循环（无限往返）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ambient {
    /// 纵向位移终点（px）
    pub y: f32,
    /// 单程时长（秒）
    pub duration: f32,
    /// 启动延迟（秒）
    pub delay: f32,
}

/// 区块的动效作用域
#[derive(Debug)]
pub struct MotionScope {
    name: &'static str,
    reveals: Vec<RevealId>,
    timelines: Vec<Timeline>,
    loops: Vec<StyleTween>,
    token: CancelToken,
    ids: AnimationIds,
    reverted: bool,
}

impl MotionScope {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            reveals: Vec::new(),
            timelines: Vec::new(),
            loops: Vec::new(),
            token: CancelToken::new(),
            ids: AnimationIds::new(),
            reverted: false,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 推进时间轴和环境循环
    pub fn update(&mut self, dt: f32, stage: &mut Stage) {
        if self.reverted {
            return;
        }
        for timeline in &mut self.timelines {
            timeline.update(dt, stage);
        }
        for tween in &mut self.loops {
            tween.update(dt, stage);
        }
    }

    /// 撤销作用域内注册的全部动效
    pub fn revert(&mut self, reveals: &mut RevealEngine) {
        if self.reverted {
            return;
        }
        self.reverted = true;
        for id in self.reveals.drain(..) {
            reveals.remove(id);
        }
        for timeline in &mut self.timelines {
            timeline.cancel();
        }
        self.token.cancel();
        for tween in &mut self.loops {
            tween.cancel();
        }
        debug!(section = self.name, "区块动效已撤销");
    }

    pub fn reveal_ids(&self) -> &[RevealId] {
        &self.reveals
    }

    pub fn timelines(&self) -> &[Timeline] {
        &self.timelines
    }

    /// 运行中的环境循环数量
    pub fn loop_count(&self) -> usize {
        self.loops.iter().filter(|t| !t.is_finished()).count()
    }

    pub fn is_reverted(&self) -> bool {
        self.reverted
    }
}

/// 挂载上下文
pub struct MountContext<'a> {
    pub stage: &'a mut Stage,
    reveals: &'a mut RevealEngine,
    scope: &'a mut MotionScope,
    motion: &'a MotionConfig,
}

impl<'a> MountContext<'a> {
    pub fn new(
        stage: &'a mut Stage,
        reveals: &'a mut RevealEngine,
        scope: &'a mut MotionScope,
        motion: &'a MotionConfig,
    ) -> Self {
        Self {
            stage,
            reveals,
            scope,
            motion,
        }
    }

    pub fn motion(&self) -> &MotionConfig {
        self.motion
    }

    /// 注册揭示（触发元素不存在时为空操作）
    pub fn reveal(&mut self, spec: RevealSpec) -> Option<RevealId> {
        let id = self.reveals.register(self.stage, spec)?;
        self.scope.reveals.push(id);
        Some(id)
    }

    /// 启动时间轴
    pub fn timeline(&mut self, mut timeline: Timeline) {
        timeline.arm(self.stage);
        self.scope.timelines.push(timeline);
    }

    /// 启动环境循环（目标不存在时为空操作）
    pub fn ambient(&mut self, target: ElementId, ambient: Ambient) -> bool {
        if !self.stage.contains(&target) {
            return false;
        }
        let tween = StyleTween::new(
            self.scope.ids.next_id(),
            target,
            StyleFrame::resting(),
            StyleFrame::resting().with_y(ambient.y),
            ambient.duration,
        )
        .with_easing(EasingFunction::POWER1_IN_OUT)
        .with_delay(ambient.delay)
        .with_repeat(Repeat::Infinite)
        .with_yoyo(true)
        .with_token(self.scope.token.clone());
        self.scope.loops.push(tween);
        true
    }
}

/// 常用的"模糊淡入"起始帧
pub(crate) fn blurred() -> StyleFrame {
    StyleFrame::hidden().with_blur(10.0)
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_ambient_missing_target() {
        let mut stage = stage_with(&["a"], 800.0);
        let mut reveals = RevealEngine::new();
        let motion = MotionConfig::default();
        let mut scope = MotionScope::new("test");
        let mut cx = MountContext::new(&mut stage, &mut reveals, &mut scope, &motion);

        let ambient = Ambient {
            y: -20.0,
            duration: 3.0,
            delay: 0.0,
        };
        assert!(!cx.ambient(ElementId::new("ghost"), ambient));
        assert!(cx.ambient(ElementId::new("a"), ambient));
        assert_eq!(scope.loop_count(), 1);
    }

    #[test]
    fn test_revert_stops_everything() {
        let mut stage = stage_with(&["a", "b"], 800.0);
        let mut reveals = RevealEngine::new();
        let motion = MotionConfig::default();
        let mut scope = MotionScope::new("test");
        {
            let mut cx = MountContext::new(&mut stage, &mut reveals, &mut scope, &motion);
            cx.ambient(
                ElementId::new("a"),
                Ambient {
                    y: -15.0,
                    duration: 2.0,
                    delay: 0.0,
                },
            );
            cx.reveal(
                RevealSpec::new("b", crate::reveal::TriggerPoint::top(0.8))
                    .target("b")
                    .from_to(StyleFrame::hidden(), StyleFrame::resting()),
            );
        }
        scope.update(0.5, &mut stage);
        reveals.update(0.5, &mut stage);

        scope.revert(&mut reveals);
        assert!(reveals.is_empty());
        assert_eq!(scope.loop_count(), 0);

        let a = stage.mutations(&ElementId::new("a"));
        let b = stage.mutations(&ElementId::new("b"));
        for _ in 0..10 {
            scope.update(0.1, &mut stage);
            reveals.update(0.1, &mut stage);
        }
        assert_eq!(stage.mutations(&ElementId::new("a")), a);
        assert_eq!(stage.mutations(&ElementId::new("b")), b);
    }

    #[test]
    fn test_page_sections_order() {
        let names: Vec<&str> = page_sections(&SiteConfig::default())
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(
            names,
            ["navigation", "hero", "about", "projects", "contact", "footer"]
        );
    }
}
