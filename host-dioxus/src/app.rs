//! 根组件与页面句柄

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use folio_runtime::{
    Anchor, ContactAck, ContactField, FormError, FrameInput, Page, PageEvent, PagePhase, PageView,
    SiteConfig,
};
use tracing::{debug, info};

use crate::bridge::{self, HostCommand};
use crate::components::{About, Contact, Footer, Hero, Navigation, Preloader, Projects, ToastLayer};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// 构建期嵌入的站点内容
const SITE_JSON: &str = include_str!("../../content/site.json");

/// 组件共享的页面句柄
///
/// `Page` 放在 `RefCell` 里由句柄独占修改；组件只订阅 `view` 信号。
#[derive(Clone)]
pub struct Folio {
    page: Rc<RefCell<Page>>,
    site: Rc<SiteConfig>,
    view: Signal<PageView>,
    commands: Rc<RefCell<Vec<HostCommand>>>,
}

impl Folio {
    /// 必须在组件作用域内调用（信号归属当前作用域）
    fn new(site: SiteConfig) -> Self {
        let page = Page::new(site.clone());
        let view = page.view();
        let initial = HostCommand::Lock {
            locked: view.scroll_locked,
        };
        Self {
            page: Rc::new(RefCell::new(page)),
            site: Rc::new(site),
            view: Signal::new(view),
            commands: Rc::new(RefCell::new(vec![initial])),
        }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// 当前渲染快照（读取即订阅）
    pub fn view(&self) -> Signal<PageView> {
        self.view
    }

    /// 推进一帧并把滚动锁变化排进命令队列
    pub fn tick(&self, input: &FrameInput) -> Vec<PageEvent> {
        let events = self.page.borrow_mut().tick(input);
        for event in &events {
            match event {
                PageEvent::ScrollLock(locked) => self.push(HostCommand::Lock { locked: *locked }),
                PageEvent::Ready => info!("启动画面结束"),
                PageEvent::Revealed(target) => debug!(%target, "揭示"),
                _ => {}
            }
        }
        self.refresh();
        events
    }

    /// 取出待发给浏览器的命令
    pub fn drain_commands(&self) -> Vec<HostCommand> {
        std::mem::take(&mut *self.commands.borrow_mut())
    }

    pub fn is_unmounted(&self) -> bool {
        self.page.borrow().phase() == PagePhase::Unmounted
    }

    pub fn navigate(&self, anchor: Anchor) {
        let request = self.page.borrow_mut().navigate(anchor);
        if let Some(request) = request {
            self.push(HostCommand::ScrollTo { top: request.top });
        }
        self.refresh();
    }

    pub fn toggle_menu(&self) {
        self.page.borrow_mut().toggle_menu();
        self.refresh();
    }

    pub fn set_field(&self, field: ContactField, value: String) {
        self.page.borrow_mut().set_field(field, value);
        self.refresh();
    }

    pub fn submit_contact(&self) -> Result<ContactAck, FormError> {
        let result = self.page.borrow_mut().submit_contact();
        self.refresh();
        result
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.page.borrow_mut().dismiss_toast(id);
        self.refresh();
    }

    /// 卸载页面并立即解除滚动锁
    fn unmount(&self) {
        self.page.borrow_mut().unmount();
        bridge::apply_now(&HostCommand::Lock { locked: false });
    }

    fn push(&self, command: HostCommand) {
        self.commands.borrow_mut().push(command);
    }

    /// 快照有变化时才写信号，避免无谓的重渲染
    fn refresh(&self) {
        let next = self.page.borrow().view();
        let mut view = self.view;
        if *view.peek() != next {
            view.set(next);
        }
    }
}

/// 取得页面句柄
pub fn use_folio() -> Folio {
    use_context::<Folio>()
}

#[component]
pub fn App() -> Element {
    let folio = use_context_provider(|| Folio::new(SiteConfig::from_json_or_default(SITE_JSON)));

    use_hook({
        let folio = folio.clone();
        move || {
            spawn(bridge::run(folio));
        }
    });

    use_drop({
        let folio = folio.clone();
        move || folio.unmount()
    });

    let phase = folio.view().read().phase;
    let title = format!("{} | {}", folio.site().name, folio.site().role);

    rsx! {
        document::Title { "{title}" }
        document::Stylesheet { href: MAIN_CSS }

        match phase {
            PagePhase::Loading => rsx! { Preloader {} },
            PagePhase::Content => rsx! {
                div { class: "min-h-screen",
                    Navigation {}
                    main {
                        Hero {}
                        About {}
                        Projects {}
                        Contact {}
                    }
                    Footer {}
                }
            },
            PagePhase::Unmounted => rsx! {},
        }

        ToastLayer {}
    }
}
