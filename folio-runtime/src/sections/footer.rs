//! 页脚：整体上浮淡入，背景粒子缓慢漂浮。

use super::{Ambient, MountContext, Section, blurred};
use crate::animation::{EasingFunction, StyleFrame};
use crate::config::MotionConfig;
use crate::reveal::{RevealSpec, TriggerPoint};
use crate::stage::ElementId;

pub const ROOT: &str = "footer";
pub const PARTICLES: &str = "footer.particles";

/// 粒子数量
pub const PARTICLE_COUNT: usize = 4;

/// 第 `index` 个粒子的单程时长，分布在 [2, 4) 秒
pub fn particle_duration(index: usize) -> f32 {
    2.0 + (index as f32 * 0.7) % 2.0
}

#[derive(Debug, Clone, Copy)]
pub struct Footer;

impl Footer {
    fn rise(&self) -> RevealSpec {
        RevealSpec::new(ROOT, TriggerPoint::top(0.9))
            .target(ROOT)
            .from_to(blurred().with_y(60.0), StyleFrame::resting())
            .duration(1.0)
            .easing(EasingFunction::POWER3_OUT)
    }
}

impl Section for Footer {
    fn name(&self) -> &'static str {
        "footer"
    }

    fn start_styles(&self, _motion: &MotionConfig) -> Vec<(ElementId, StyleFrame)> {
        self.rise().start_styles()
    }

    fn mount(&self, cx: &mut MountContext<'_>) {
        cx.reveal(self.rise());

        let particles = ElementId::new(PARTICLES).children(PARTICLE_COUNT);
        for (i, particle) in particles.into_iter().enumerate() {
            cx.ambient(
                particle,
                Ambient {
                    y: -15.0,
                    duration: particle_duration(i),
                    delay: 0.0,
                },
            );
        }
    }
}
