//! 首屏：挂载后立即播放的入场时间轴，加上三个漂浮光球。

use super::{Ambient, MountContext, Section, blurred};
use crate::animation::{EasingFunction, StyleFrame};
use crate::config::MotionConfig;
use crate::stage::ElementId;
use crate::timeline::{Offset, Timeline, TimelineStep};

pub const HEADLINE: &str = "hero.headline";
pub const SUBTITLE: &str = "hero.subtitle";
pub const CTA: &str = "hero.cta";
pub const SPLINE: &str = "hero.spline";
pub const ORBS: &str = "hero.orbs";

/// 光球数量
pub const ORB_COUNT: usize = 3;

/// 首屏
#[derive(Debug, Clone, Copy)]
pub struct Hero {
    with_embed: bool,
}

impl Hero {
    pub fn new(with_embed: bool) -> Self {
        Self { with_embed }
    }

    /// 入场时间轴
    pub fn entrance(&self, delay: f32) -> Timeline {
        let timeline = Timeline::new()
            .with_delay(delay)
            .step(
                TimelineStep::new(HEADLINE, blurred().with_y(50.0), StyleFrame::resting(), 1.2)
                    .easing(EasingFunction::POWER3_OUT),
            )
            .step(
                TimelineStep::new(SUBTITLE, blurred().with_y(30.0), StyleFrame::resting(), 1.0)
                    .easing(EasingFunction::POWER3_OUT)
                    .offset(Offset::Relative(-0.8)),
            )
            .step(
                TimelineStep::new(
                    CTA,
                    StyleFrame::hidden().with_scale(0.8),
                    StyleFrame::resting(),
                    0.8,
                )
                .easing(EasingFunction::BACK_OUT)
                .offset(Offset::Relative(-0.6)),
            );

        if !self.with_embed {
            return timeline;
        }
        timeline.step(
            TimelineStep::new(
                SPLINE,
                StyleFrame::hidden().with_x(100.0),
                StyleFrame::resting(),
                1.5,
            )
            .easing(EasingFunction::POWER2_OUT)
            .offset(Offset::Relative(-1.2)),
        )
    }
}

impl Section for Hero {
    fn name(&self) -> &'static str {
        "hero"
    }

    fn start_styles(&self, motion: &MotionConfig) -> Vec<(ElementId, StyleFrame)> {
        self.entrance(motion.hero_delay).start_styles()
    }

    fn mount(&self, cx: &mut MountContext<'_>) {
        let delay = cx.motion().hero_delay;
        cx.timeline(self.entrance(delay));

        for (i, orb) in ElementId::new(ORBS).children(ORB_COUNT).into_iter().enumerate() {
            cx.ambient(
                orb,
                Ambient {
                    y: -20.0,
                    duration: 3.0,
                    delay: i as f32 * 0.5,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::RevealEngine;
    use crate::sections::test_support::{mount, stage_with};

    const IDS: [&str; 8] = [
        "home",
        HEADLINE,
        SUBTITLE,
        CTA,
        SPLINE,
        "hero.orbs.0",
        "hero.orbs.1",
        "hero.orbs.2",
    ];

    #[test]
    fn test_entrance_schedule() {
        let starts = Hero::new(true).entrance(0.5).start_times();
        let expected = [0.5, 0.9, 1.3, 0.9];
        for (start, expected) in starts.iter().zip(expected) {
            assert!((start - expected).abs() < 1e-5, "{start} != {expected}");
        }
        assert_eq!(Hero::new(false).entrance(0.5).len(), 3);
    }

    #[test]
    fn test_mount_hides_then_plays() {
        let mut stage = stage_with(&IDS, 900.0);
        let mut reveals = RevealEngine::new();
        let mut scope = mount(&Hero::new(true), &mut stage, &mut reveals);

        let headline = ElementId::new(HEADLINE);
        assert_eq!(stage.style(&headline).map(|s| s.opacity), Some(0.0));
        assert_eq!(scope.loop_count(), ORB_COUNT);

        for _ in 0..40 {
            scope.update(0.1, &mut stage);
        }
        assert!(scope.timelines()[0].is_finished());
        assert_eq!(stage.style(&headline), Some(StyleFrame::resting()));
        assert_eq!(scope.loop_count(), ORB_COUNT);
    }

    #[test]
    fn test_start_styles_follow_embed() {
        let motion = MotionConfig::default();
        let with_embed = Hero::new(true).start_styles(&motion);
        assert_eq!(with_embed.len(), 4);
        assert_eq!(with_embed[0], (ElementId::new(HEADLINE), blurred().with_y(50.0)));
        assert!(
            Hero::new(false)
                .start_styles(&motion)
                .iter()
                .all(|(id, _)| id.as_str() != SPLINE)
        );
    }

    #[test]
    fn test_orbs_float() {
        let mut stage = stage_with(&IDS, 900.0);
        let mut reveals = RevealEngine::new();
        let mut scope = mount(&Hero::new(true), &mut stage, &mut reveals);

        for _ in 0..15 {
            scope.update(0.1, &mut stage);
        }
        let y = stage.style(&ElementId::new("hero.orbs.0")).map(|s| s.y);
        assert!(y.is_some_and(|y| y < 0.0 && y > -20.0));
        // 第三个光球延迟 1 秒启动
        let late = stage.style(&ElementId::new("hero.orbs.2")).map(|s| s.y);
        assert!(late.is_some_and(|y| y > -20.0));
    }
}
