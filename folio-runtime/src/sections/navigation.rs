//! 导航栏。自身没有入场动画；移动端菜单展开时链接依次上浮淡入。

use super::{MountContext, Section};
use crate::animation::{EasingFunction, StyleFrame};
use crate::nav::Anchor;
use crate::stage::ElementId;
use crate::timeline::{Offset, Timeline, TimelineStep};

pub const MENU: &str = "nav.menu";

/// 菜单项数量：四个锚点加一个 "Hire Me"
pub const MENU_ITEMS: usize = Anchor::ALL.len() + 1;

#[derive(Debug, Clone, Copy)]
pub struct Navigation;

impl Navigation {
    /// 移动端菜单的入场时间轴
    ///
    /// 第 `i` 项在 `i * 0.1` 秒启动，各自 0.5 秒。
    pub fn menu_entrance() -> Timeline {
        ElementId::new(MENU)
            .children(MENU_ITEMS)
            .into_iter()
            .enumerate()
            .fold(Timeline::new(), |timeline, (i, item)| {
                timeline.step(
                    TimelineStep::new(
                        item,
                        StyleFrame::hidden().with_y(20.0),
                        StyleFrame::resting(),
                        0.5,
                    )
                    .easing(EasingFunction::EaseOutQuad)
                    .offset(Offset::At(i as f32 * 0.1)),
                )
            })
    }

    /// 菜单第一项是否已渲染
    pub fn menu_rendered(stage: &crate::stage::Stage) -> bool {
        stage.contains(&ElementId::new(MENU).child(0))
    }
}

impl Section for Navigation {
    fn name(&self) -> &'static str {
        "navigation"
    }

    fn mount(&self, _cx: &mut MountContext<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_stagger() {
        let starts = Navigation::menu_entrance().start_times();
        assert_eq!(starts.len(), MENU_ITEMS);
        for (i, start) in starts.iter().enumerate() {
            assert!((start - i as f32 * 0.1).abs() < 1e-6);
        }
    }
}
