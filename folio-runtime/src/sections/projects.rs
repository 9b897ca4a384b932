//! 项目卡片：整组进入视口 80% 处时依次上浮放大。

use super::{MountContext, Section};
use crate::animation::{EasingFunction, StyleFrame};
use crate::config::MotionConfig;
use crate::reveal::{RevealSpec, TriggerPoint};
use crate::stage::ElementId;

pub const ROOT: &str = "projects";
pub const CARDS: &str = "projects.cards";

#[derive(Debug, Clone, Copy)]
pub struct Projects {
    cards: usize,
}

impl Projects {
    pub fn new(cards: usize) -> Self {
        Self { cards }
    }

    fn cascade(&self) -> RevealSpec {
        let grid = ElementId::new(CARDS);
        RevealSpec::new(grid.clone(), TriggerPoint::top(0.8))
            .targets(grid.children(self.cards))
            .from_to(
                StyleFrame::hidden().with_y(100.0).with_scale(0.8),
                StyleFrame::resting(),
            )
            .duration(1.0)
            .stagger(0.2)
            .easing(EasingFunction::POWER3_OUT)
    }
}

impl Section for Projects {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn mount(&self, cx: &mut MountContext<'_>) {
        cx.reveal(self.cascade());
    }

    fn start_styles(&self, _motion: &MotionConfig) -> Vec<(ElementId, StyleFrame)> {
        self.cascade().start_styles()
    }
}
