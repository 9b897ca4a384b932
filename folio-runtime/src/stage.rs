//! # Stage 模块
//!
//! 文档的内存镜像：元素布局、视口、当前样式、滚动锁。
//!
//! ## 数据流
//!
//! ```text
//! Host (DOM)                         Stage
//!   │── ElementLayout / scroll / resize ──►│  sync_layout / scroll_to / resize
//!   │                                      │  揭示、时间轴通过 set_style 写样式
//!   │◄──────────── style_css ──────────────│
//! ```
//!
//! 元素只有出现在最近一次 `sync_layout` 中才算"存在"。不存在的元素上的
//! 所有写操作都是空操作，这让"目标不存在时注册无效"的约定自然成立。
//!
//! 离开文档的元素若带着非静止样式，样式会被保留下来，元素重新出现时沿用，
//! 而不是以静止样式闪现。尚未出现的元素也可以用 [`Stage::preset_style`]
//! 预置样式，保证它第一次渲染就是起始帧。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::animation::StyleFrame;
use crate::scroll_lock::ScrollLock;

/// 元素标识
///
/// 与 DOM 上的 `data-folio` 属性一一对应，例如 `about.image`、`projects.cards.2`。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// 第 `index` 个子元素的标识：`<parent>.<index>`
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}.{}", self.0, index))
    }

    /// 前 `count` 个子元素的标识
    pub fn children(&self, count: usize) -> Vec<ElementId> {
        (0..count).map(|i| self.child(i)).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// 元素在文档坐标系中的位置
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// 顶边距文档顶部的距离（px）
    pub top: f32,
    /// 高度（px）
    pub height: f32,
}

impl Bounds {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }
}

/// Host 上报的单个元素布局
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementLayout {
    pub id: ElementId,
    #[serde(flatten)]
    pub bounds: Bounds,
}

impl ElementLayout {
    pub fn new(id: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: ElementId::new(id),
            bounds,
        }
    }
}

/// 视口
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// 当前滚动位置（px）
    pub scroll_y: f32,
    /// 视口高度（px）
    pub height: f32,
}

/// 舞台上的元素
#[derive(Debug, Clone)]
struct Element {
    bounds: Bounds,
    style: StyleFrame,
    /// 样式被写入的次数
    mutations: u64,
}

/// 舞台
#[derive(Debug, Default)]
pub struct Stage {
    elements: BTreeMap<ElementId, Element>,
    /// 不在文档中的元素的样式（离开时保留的或预置的）
    retained: BTreeMap<ElementId, StyleFrame>,
    viewport: Viewport,
    /// 自上次 `take_changed` 以来视口或布局是否变化
    changed: bool,
    scroll_lock: ScrollLock,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== 布局与视口 ==========

    /// 同步布局
    ///
    /// 列表中的元素插入或更新位置（保留已有样式），列表外的元素视为已从文档移除。
    /// 移除元素的非静止样式转入保留区，重新插入时取回。
    pub fn sync_layout(&mut self, layouts: &[ElementLayout]) {
        let removed: Vec<ElementId> = self
            .elements
            .keys()
            .filter(|id| !layouts.iter().any(|layout| &layout.id == *id))
            .cloned()
            .collect();
        if !removed.is_empty() {
            debug!(removed = removed.len(), "元素已从舞台移除");
            self.changed = true;
        }
        for id in removed {
            if let Some(element) = self.elements.remove(&id)
                && element.style != StyleFrame::resting()
            {
                self.retained.insert(id, element.style);
            }
        }

        for layout in layouts {
            match self.elements.get_mut(&layout.id) {
                Some(element) => {
                    if element.bounds != layout.bounds {
                        element.bounds = layout.bounds;
                        self.changed = true;
                    }
                }
                None => {
                    let style = self
                        .retained
                        .remove(&layout.id)
                        .unwrap_or_else(StyleFrame::resting);
                    self.elements.insert(
                        layout.id.clone(),
                        Element {
                            bounds: layout.bounds,
                            style,
                            mutations: 0,
                        },
                    );
                    self.changed = true;
                }
            }
        }
    }

    /// 更新滚动位置
    pub fn scroll_to(&mut self, scroll_y: f32) {
        if self.viewport.scroll_y != scroll_y {
            self.viewport.scroll_y = scroll_y;
            self.changed = true;
        }
    }

    /// 更新视口高度
    pub fn resize(&mut self, height: f32) {
        if self.viewport.height != height {
            self.viewport.height = height;
            self.changed = true;
        }
    }

    /// 取出并清除"已变化"标记
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// 当前视口
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ========== 元素查询 ==========

    /// 元素是否存在
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// 元素位置
    pub fn bounds(&self, id: &ElementId) -> Option<Bounds> {
        self.elements.get(id).map(|e| e.bounds)
    }

    /// 元素顶边相对视口顶部的距离
    pub fn viewport_top(&self, id: &ElementId) -> Option<f32> {
        self.bounds(id).map(|b| b.top - self.viewport.scroll_y)
    }

    /// 元素数量
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    // ========== 样式 ==========

    /// 写入元素样式
    ///
    /// 元素不存在时返回 `false`；若它离开文档时保留了样式，保留的样式随之更新，
    /// 重新出现时就是最后一次写入的样子。
    pub fn set_style(&mut self, id: &ElementId, style: StyleFrame) -> bool {
        match self.elements.get_mut(id) {
            Some(element) => {
                element.style = style;
                element.mutations += 1;
                true
            }
            None => {
                if let Some(retained) = self.retained.get_mut(id) {
                    *retained = style;
                }
                false
            }
        }
    }

    /// 预置样式
    ///
    /// 元素存在时等同 [`Stage::set_style`]；否则记到保留区，元素第一次出现时带上。
    pub fn preset_style(&mut self, id: &ElementId, style: StyleFrame) {
        if !self.set_style(id, style) {
            self.retained.insert(id.clone(), style);
        }
    }

    /// 丢弃不在文档中的元素的保留样式
    pub fn forget(&mut self, id: &ElementId) -> bool {
        self.retained.remove(id).is_some()
    }

    /// 元素当前样式
    pub fn style(&self, id: &ElementId) -> Option<StyleFrame> {
        self.elements.get(id).map(|e| e.style)
    }

    /// 元素样式被写入的次数（元素不存在时为 0）
    pub fn mutations(&self, id: &ElementId) -> u64 {
        self.elements.get(id).map_or(0, |e| e.mutations)
    }

    /// 元素当前样式的内联 CSS
    pub fn style_css(&self, id: &ElementId) -> Option<String> {
        self.style(id).map(|s| s.to_css())
    }

    /// 所有非静止元素的内联 CSS
    ///
    /// 包含保留区：宿主下一次渲染出这些元素时，它们已经带着样式。
    pub fn styled_elements(&self) -> BTreeMap<String, String> {
        self.retained
            .iter()
            .chain(self.elements.iter().map(|(id, e)| (id, &e.style)))
            .filter(|(_, style)| **style != StyleFrame::resting())
            .map(|(id, style)| (id.to_string(), style.to_css()))
            .collect()
    }

    // ========== 滚动锁 ==========

    /// 文档滚动锁
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.scroll_lock
    }
}
