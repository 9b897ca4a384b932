//! About：头像从左侧滑入，正文上浮，技能卡片错开弹出。

use super::{MountContext, Section, blurred};
use crate::animation::{EasingFunction, StyleFrame};
use crate::config::MotionConfig;
use crate::reveal::{RevealSpec, TriggerPoint};
use crate::stage::ElementId;

pub const ROOT: &str = "about";
pub const IMAGE: &str = "about.image";
pub const CONTENT: &str = "about.content";
pub const SKILLS: &str = "about.skills";

#[derive(Debug, Clone, Copy)]
pub struct About {
    skills: usize,
}

impl About {
    pub fn new(skills: usize) -> Self {
        Self { skills }
    }

    fn reveals(&self) -> [RevealSpec; 3] {
        let grid = ElementId::new(SKILLS);
        [
            RevealSpec::new(ROOT, TriggerPoint::top(0.7))
                .target(IMAGE)
                .from_to(blurred().with_x(-100.0), StyleFrame::resting())
                .duration(1.2)
                .easing(EasingFunction::POWER3_OUT),
            RevealSpec::new(ROOT, TriggerPoint::top(0.7))
                .target(CONTENT)
                .from_to(blurred().with_y(50.0), StyleFrame::resting())
                .duration(1.0)
                .easing(EasingFunction::POWER3_OUT),
            RevealSpec::new(grid.clone(), TriggerPoint::top(0.8))
                .targets(grid.children(self.skills))
                .from_to(
                    StyleFrame::hidden().with_y(30.0).with_scale(0.8),
                    StyleFrame::resting(),
                )
                .duration(0.6)
                .stagger(0.1)
                .easing(EasingFunction::BACK_OUT),
        ]
    }
}

impl Section for About {
    fn name(&self) -> &'static str {
        "about"
    }

    fn mount(&self, cx: &mut MountContext<'_>) {
        for spec in self.reveals() {
            cx.reveal(spec);
        }
    }

    fn start_styles(&self, _motion: &MotionConfig) -> Vec<(ElementId, StyleFrame)> {
        self.reveals().iter().flat_map(RevealSpec::start_styles).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::{RevealEngine, RevealState};
    use crate::sections::test_support::{mount, stage_with};

    #[test]
    fn test_three_reveals() {
        let mut stage = stage_with(
            &[ROOT, IMAGE, CONTENT, SKILLS, "about.skills.0", "about.skills.1"],
            0.0,
        );
        let mut reveals = RevealEngine::new();
        let scope = mount(&About::new(2), &mut stage, &mut reveals);

        assert_eq!(scope.reveal_ids().len(), 3);
        let skills = scope.reveal_ids()[2];
        assert_eq!(reveals.target_count(skills), 2);
        assert_eq!(
            reveals.state(skills, &ElementId::new("about.skills.1")),
            Some(RevealState::Armed)
        );
        assert_eq!(
            stage.style(&ElementId::new(IMAGE)).map(|s| (s.x, s.blur)),
            Some((-100.0, 10.0))
        );
    }

    #[test]
    fn test_start_styles_match_mount() {
        let about = About::new(2);
        let styles = about.start_styles(&MotionConfig::default());
        assert_eq!(styles.len(), 4);

        let mut stage = stage_with(
            &[ROOT, IMAGE, CONTENT, SKILLS, "about.skills.0", "about.skills.1"],
            0.0,
        );
        let mut reveals = RevealEngine::new();
        mount(&about, &mut stage, &mut reveals);
        for (id, style) in styles {
            assert_eq!(stage.style(&id), Some(style), "{id}");
        }
    }

    #[test]
    fn test_missing_root_is_noop() {
        let mut stage = stage_with(&[IMAGE, CONTENT], 800.0);
        let mut reveals = RevealEngine::new();
        let scope = mount(&About::new(8), &mut stage, &mut reveals);

        assert!(scope.reveal_ids().is_empty());
        assert_eq!(stage.mutations(&ElementId::new(IMAGE)), 0);
    }
}
