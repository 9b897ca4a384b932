//! # Page 模块
//!
//! 页面根状态机，宿主与核心之间唯一的接口。
//!
//! ## 生命周期
//!
//! ```text
//! new ──► Loading ──(闸门 ready)──► Content ──► unmount
//!           │                          │
//!           只渲染启动画面               导航栏 + 各区块 + 页脚
//!           滚动锁定                     滚动解锁
//! ```
//!
//! 任一时刻只有启动画面和正文之一处于挂载状态。
//!
//! ## 每帧
//!
//! 宿主在每个动画帧调用 [`Page::tick`]，传入时间戳、滚动位置、视口高度和
//! 带 `data-folio` 标记的元素布局；随后用 [`Page::view`] 取快照渲染。
//! 正文挂载发生在闸门 ready 之后、第一次上报到正文元素的那一帧。
//! 宿主在 ready 那一帧之后就开始渲染正文，所以 ready 时先把各区块的起始样式
//! 预置到舞台上，正文第一次渲染就是隐藏状态，不会先闪现再藏起来。

use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::animation::Completion;
use crate::clock::FrameClock;
use crate::config::{MotionConfig, SiteConfig};
use crate::contact::{ContactAck, ContactField, ContactForm};
use crate::error::FormError;
use crate::gate::{GateEvent, GatePhase, ReadyGate};
use crate::nav::{Anchor, NavState};
use crate::notify::{Toast, ToastManager};
use crate::reveal::{RevealEngine, RevealEvent};
use crate::sections::{MotionScope, MountContext, Navigation, page_sections};
use crate::stage::{ElementId, ElementLayout, Stage};
use crate::timeline::{Timeline, TimelineState};

/// 宿主每帧上报的输入
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// 帧时间戳（毫秒）
    pub timestamp_ms: f64,
    /// 当前滚动位置（px）
    #[serde(default)]
    pub scroll_y: f32,
    /// 视口高度（px）
    #[serde(default)]
    pub viewport_height: f32,
    /// 元素布局
    #[serde(default)]
    pub layout: Vec<ElementLayout>,
}

impl FrameInput {
    pub fn at(timestamp_ms: f64) -> Self {
        Self {
            timestamp_ms,
            ..Self::default()
        }
    }

    pub fn with_scroll(mut self, scroll_y: f32) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_viewport(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn with_layout(mut self, layout: Vec<ElementLayout>) -> Self {
        self.layout = layout;
        self
    }
}

/// 页面阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PagePhase {
    /// 启动画面
    #[default]
    Loading,
    /// 正文
    Content,
    /// 已卸载
    Unmounted,
}

/// 页面事件
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// 加载百分比变化
    Progress(u8),
    /// 启动画面开始淡出
    SplashFading,
    /// 闸门就绪，切换到正文
    Ready,
    /// 正文区块已挂载
    ContentMounted,
    /// 滚动触发的揭示
    Revealed(ElementId),
    /// 导航栏是否滚过阈值
    NavScrolled(bool),
    /// 滚动锁状态变化
    ScrollLock(bool),
}

/// 平滑滚动请求
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub anchor: Anchor,
    /// 目标元素顶边（px）
    pub top: f32,
}

/// 渲染快照
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub phase: PagePhase,
    pub percent: u8,
    /// 进度条宽度（0.0 - 100.0）
    pub bar_width: f32,
    pub scroll_locked: bool,
    /// 导航栏（滚动阈值、菜单开合）
    pub nav: NavState,
    pub form: ContactForm,
    pub toasts: Vec<Toast>,
    /// 元素 id → 内联 CSS（只含非静止元素）
    pub styles: BTreeMap<String, String>,
}

impl PageView {
    /// 某个元素的内联样式（静止元素为空串）
    pub fn style(&self, id: &str) -> &str {
        self.styles.get(id).map_or("", String::as_str)
    }
}

/// 页面
pub struct Page {
    site: SiteConfig,
    motion: MotionConfig,
    phase: PagePhase,
    clock: FrameClock,
    stage: Stage,
    gate: Option<ReadyGate>,
    ready: Rc<Cell<bool>>,
    reveals: RevealEngine,
    scopes: Vec<MotionScope>,
    mounted: bool,
    nav: NavState,
    menu: Option<Timeline>,
    form: ContactForm,
    toasts: ToastManager,
    lock_reported: bool,
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("phase", &self.phase)
            .field("mounted", &self.mounted)
            .field("scopes", &self.scopes.len())
            .field("reveals", &self.reveals.len())
            .finish()
    }
}

impl Page {
    /// 创建页面并进入 loading
    pub fn new(site: SiteConfig) -> Self {
        let motion = site.motion.clone();
        let stage = Stage::new();

        let ready = Rc::new(Cell::new(false));
        let flag = ready.clone();
        let gate = ReadyGate::new(&stage, &motion).on_ready(move || flag.set(true));

        Self {
            phase: PagePhase::Loading,
            clock: FrameClock::from_config(&motion),
            lock_reported: stage.scroll_lock().is_locked(),
            gate: Some(gate),
            ready,
            reveals: RevealEngine::new(),
            scopes: Vec::new(),
            mounted: false,
            nav: NavState::new(motion.nav_threshold),
            menu: None,
            form: ContactForm::new(),
            toasts: ToastManager::new(motion.toast_duration),
            stage,
            motion,
            site,
        }
    }

    /// 推进一帧
    pub fn tick(&mut self, input: &FrameInput) -> Vec<PageEvent> {
        let mut events = Vec::new();
        if self.phase == PagePhase::Unmounted {
            return events;
        }

        let dt = self.clock.advance_to(input.timestamp_ms);
        self.stage.resize(input.viewport_height);
        self.stage.scroll_to(input.scroll_y);
        self.stage.sync_layout(&input.layout);

        match self.phase {
            PagePhase::Loading => self.tick_loading(dt, &mut events),
            PagePhase::Content => self.tick_content(dt, input.scroll_y, &mut events),
            PagePhase::Unmounted => {}
        }

        let locked = self.stage.scroll_lock().is_locked();
        if locked != self.lock_reported {
            self.lock_reported = locked;
            events.push(PageEvent::ScrollLock(locked));
        }

        events
    }

    fn tick_loading(&mut self, dt: f32, events: &mut Vec<PageEvent>) {
        if let Some(gate) = self.gate.as_mut() {
            for event in gate.update(dt, &mut self.stage) {
                match event {
                    GateEvent::PercentChanged(percent) => events.push(PageEvent::Progress(percent)),
                    GateEvent::PhaseChanged(GatePhase::Fading) => {
                        events.push(PageEvent::SplashFading)
                    }
                    GateEvent::PhaseChanged(_) => {}
                }
            }
        }
        self.stage.take_changed();

        if self.ready.get() {
            self.gate = None;
            self.phase = PagePhase::Content;
            self.preset_sections();
            info!("切换到正文");
            events.push(PageEvent::Ready);
        }
    }

    fn tick_content(&mut self, dt: f32, scroll_y: f32, events: &mut Vec<PageEvent>) {
        if self.nav.on_scroll(scroll_y) {
            events.push(PageEvent::NavScrolled(self.nav.scrolled));
        }

        if !self.mounted && self.stage.contains(&Anchor::Home.element()) {
            self.mount_sections();
            events.push(PageEvent::ContentMounted);
        }

        if let Some(menu) = self.menu.as_mut()
            && menu.state() == TimelineState::Idle
            && Navigation::menu_rendered(&self.stage)
        {
            menu.arm(&mut self.stage);
        }

        if self.stage.take_changed() {
            events.extend(self.reveals.evaluate(&self.stage).into_iter().filter_map(
                |event| match event {
                    RevealEvent::Fired { target, .. } => Some(PageEvent::Revealed(target)),
                    RevealEvent::Completed(_) => None,
                },
            ));
        }

        self.reveals.update(dt, &mut self.stage);
        for scope in &mut self.scopes {
            scope.update(dt, &mut self.stage);
        }
        if let Some(menu) = self.menu.as_mut() {
            menu.update(dt, &mut self.stage);
        }
        self.toasts.update(dt);
    }

    fn preset_sections(&mut self) {
        let mut count = 0;
        for section in page_sections(&self.site) {
            for (id, style) in section.start_styles(&self.motion) {
                self.stage.preset_style(&id, style);
                count += 1;
            }
        }
        debug!(count, "区块起始样式已预置");
    }

    fn mount_sections(&mut self) {
        for section in page_sections(&self.site) {
            let mut scope = MotionScope::new(section.name());
            section.mount(&mut MountContext::new(
                &mut self.stage,
                &mut self.reveals,
                &mut scope,
                &self.motion,
            ));
            self.scopes.push(scope);

            // 挂载时仍未出现的目标不归任何动效管，丢掉预置样式，免得出现后一直隐藏
            for (id, _) in section.start_styles(&self.motion) {
                if !self.stage.contains(&id) {
                    self.stage.forget(&id);
                }
            }
        }
        self.mounted = true;
        debug!(sections = self.scopes.len(), reveals = self.reveals.len(), "正文已挂载");
    }

    // ========== 用户操作 ==========

    /// 跳转到锚点
    ///
    /// 目标元素不存在时不做任何事（菜单保持原状）。
    pub fn navigate(&mut self, anchor: Anchor) -> Option<ScrollRequest> {
        if self.phase != PagePhase::Content {
            return None;
        }
        let Some(bounds) = self.stage.bounds(&anchor.element()) else {
            debug!(anchor = anchor.id(), "锚点不存在，忽略跳转");
            return None;
        };

        self.close_menu();
        Some(ScrollRequest {
            anchor,
            top: bounds.top,
        })
    }

    /// 切换移动端菜单，返回是否展开
    pub fn toggle_menu(&mut self) -> bool {
        if self.nav.toggle_menu() {
            // 菜单项要等下一帧测量后才启动，先预置起始帧
            let menu = Navigation::menu_entrance();
            for (id, style) in menu.start_styles() {
                self.stage.preset_style(&id, style);
            }
            self.menu = Some(menu);
        } else {
            self.cancel_menu();
        }
        self.nav.menu_open
    }

    fn close_menu(&mut self) {
        self.nav.close_menu();
        self.cancel_menu();
    }

    fn cancel_menu(&mut self) {
        if let Some(mut menu) = self.menu.take() {
            menu.cancel();
        }
    }

    /// 更新表单字段
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// 提交联系表单
    ///
    /// 成功时清空表单并弹出一条提示；失败时什么都不变。
    pub fn submit_contact(&mut self) -> Result<ContactAck, FormError> {
        let ack = self.form.submit()?;
        self.toasts.success(ack.message.clone());
        Ok(ack)
    }

    /// 关闭提示
    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        self.toasts.dismiss(id)
    }

    /// 卸载页面
    ///
    /// 闸门未就绪时丢弃回调并解锁；各区块按挂载的逆序撤销动效。
    /// 返回按撤销顺序排列的区块名，重复调用返回空列表。
    pub fn unmount(&mut self) -> Vec<&'static str> {
        if self.phase == PagePhase::Unmounted {
            return Vec::new();
        }
        if let Some(mut gate) = self.gate.take() {
            gate.cancel();
        }
        self.cancel_menu();
        let mut reverted = Vec::with_capacity(self.scopes.len());
        while let Some(mut scope) = self.scopes.pop() {
            scope.revert(&mut self.reveals);
            reverted.push(scope.name());
        }
        self.toasts.clear();
        self.phase = PagePhase::Unmounted;
        self.lock_reported = self.stage.scroll_lock().is_locked();
        debug!(?reverted, "页面已卸载");
        reverted
    }

    // ========== 查询 ==========

    /// 渲染快照
    pub fn view(&self) -> PageView {
        PageView {
            phase: self.phase,
            percent: self.gate.as_ref().map_or(100, ReadyGate::percent),
            bar_width: self.gate.as_ref().map_or(100.0, ReadyGate::bar_width),
            scroll_locked: self.stage.scroll_lock().is_locked(),
            nav: self.nav,
            form: self.form.clone(),
            toasts: self.toasts.toasts().to_vec(),
            styles: self.stage.styled_elements(),
        }
    }

    pub fn phase(&self) -> PagePhase {
        self.phase
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn reveals(&self) -> &RevealEngine {
        &self.reveals
    }

    pub fn scopes(&self) -> &[MotionScope] {
        &self.scopes
    }

    /// 闸门就绪信号（已切到正文后为已完成）
    pub fn ready_signal(&self) -> Completion {
        match &self.gate {
            Some(gate) => gate.completion(),
            None => Completion::settled(if self.ready.get() {
                crate::animation::Outcome::Finished
            } else {
                crate::animation::Outcome::Cancelled
            }),
        }
    }
}
