//! # Nav 模块
//!
//! 导航栏状态：移动端菜单开关、是否滚过阈值，以及页面锚点。

use serde::{Deserialize, Serialize};

use crate::stage::ElementId;

/// 页面锚点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Home,
    About,
    Projects,
    Contact,
}

impl Anchor {
    /// 全部锚点（按页面顺序）
    pub const ALL: [Anchor; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// DOM id
    pub fn id(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    /// 链接文字
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// 对应的舞台元素
    pub fn element(&self) -> ElementId {
        ElementId::new(self.id())
    }
}

/// 导航栏状态
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    threshold: f32,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(50.0)
    }
}

impl NavState {
    pub fn new(threshold: f32) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            threshold,
        }
    }

    /// 滚动位置变化，返回 `scrolled` 是否翻转
    pub fn on_scroll(&mut self, scroll_y: f32) -> bool {
        let scrolled = scroll_y > self.threshold;
        let flipped = scrolled != self.scrolled;
        self.scrolled = scrolled;
        flipped
    }

    /// 切换移动端菜单
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// 导航栏样式类
    pub fn bar_class(&self) -> &'static str {
        if self.scrolled { "glass-card py-4" } else { "py-6" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_strictly_greater() {
        let mut nav = NavState::default();
        assert!(!nav.on_scroll(50.0));
        assert!(!nav.scrolled);

        assert!(nav.on_scroll(51.0));
        assert!(nav.scrolled);
        assert!(!nav.on_scroll(400.0));

        assert!(nav.on_scroll(0.0));
        assert_eq!(nav.bar_class(), "py-6");
    }

    #[test]
    fn test_toggle_menu() {
        let mut nav = NavState::default();
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
        nav.toggle_menu();
        nav.close_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_anchor_ids() {
        let ids: Vec<&str> = Anchor::ALL.iter().map(Anchor::id).collect();
        assert_eq!(ids, ["home", "about", "projects", "contact"]);
        assert_eq!(Anchor::Projects.element().as_str(), "projects");
    }
}
