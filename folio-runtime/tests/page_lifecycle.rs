//! # 页面生命周期集成测试
//!
//! 以无 DOM 的方式驱动 Page：启动画面 → 就绪 → 正文挂载 → 滚动揭示 → 卸载。

use std::cell::Cell;
use std::rc::Rc;

use folio_runtime::{
    Anchor, Bounds, ContactField, ElementId, ElementLayout, FormError, FrameInput, Outcome,
    Page, PageEvent, PagePhase, SiteConfig, ToastKind,
};

const VIEWPORT: f32 = 1000.0;
const FRAME_MS: f64 = 50.0;

fn site() -> SiteConfig {
    SiteConfig::from_json(include_str!("../../content/site.json")).unwrap()
}

fn splash_layout() -> Vec<ElementLayout> {
    vec![ElementLayout::new("preloader", Bounds::new(0.0, VIEWPORT))]
}

fn content_layout() -> Vec<ElementLayout> {
    vec![
        ElementLayout::new("home", Bounds::new(0.0, 1000.0)),
        ElementLayout::new("hero.headline", Bounds::new(300.0, 120.0)),
        ElementLayout::new("hero.subtitle", Bounds::new(450.0, 60.0)),
        ElementLayout::new("hero.cta", Bounds::new(550.0, 60.0)),
        ElementLayout::new("about", Bounds::new(1200.0, 1200.0)),
        ElementLayout::new("about.image", Bounds::new(1300.0, 600.0)),
        ElementLayout::new("about.content", Bounds::new(1300.0, 900.0)),
        ElementLayout::new("about.skills", Bounds::new(1800.0, 300.0)),
        ElementLayout::new("about.skills.0", Bounds::new(1800.0, 100.0)),
        ElementLayout::new("about.skills.1", Bounds::new(1800.0, 100.0)),
        ElementLayout::new("contact", Bounds::new(2600.0, 900.0)),
    ]
}

/// 以固定帧间隔驱动页面
struct Driver {
    page: Page,
    now: f64,
    scroll: f32,
}

impl Driver {
    fn new(site: SiteConfig) -> Self {
        Self {
            page: Page::new(site),
            now: 0.0,
            scroll: 0.0,
        }
    }

    fn frame(&mut self) -> Vec<PageEvent> {
        let layout = match self.page.phase() {
            PagePhase::Loading => splash_layout(),
            _ => content_layout(),
        };
        let input = FrameInput::at(self.now)
            .with_viewport(VIEWPORT)
            .with_scroll(self.scroll)
            .with_layout(layout);
        self.now += FRAME_MS;
        self.page.tick(&input)
    }

    /// 推进到绝对时间（毫秒），返回期间的全部事件
    fn run_until(&mut self, until_ms: f64) -> Vec<PageEvent> {
        let mut events = Vec::new();
        while self.now <= until_ms {
            events.extend(self.frame());
        }
        events
    }

    fn run_to_content(&mut self) -> Vec<PageEvent> {
        let mut events = Vec::new();
        while self.page.phase() == PagePhase::Loading {
            events.extend(self.frame());
        }
        events.extend(self.frame());
        events
    }
}

fn trace(events: &[PageEvent]) -> Vec<String> {
    events
        .iter()
        .filter(|e| !matches!(e, PageEvent::Progress(_)))
        .map(|e| format!("{e:?}"))
        .collect()
}

/// 加载 → 2.5 秒后百分比到 100 → 1 秒淡出 → 就绪回调一次 → 解锁
#[test]
fn test_loading_scenario() {
    let mut driver = Driver::new(site());
    let ready_calls = Rc::new(Cell::new(0));
    let counter = ready_calls.clone();
    driver
        .page
        .ready_signal()
        .on_settle(move |outcome| {
            assert_eq!(outcome, Outcome::Finished);
            counter.set(counter.get() + 1);
        });

    assert!(driver.page.view().scroll_locked);

    // 进度阶段
    let events = driver.run_until(2600.0);
    let percents: Vec<u8> = events
        .iter()
        .filter_map(|e| match e {
            PageEvent::Progress(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert!(percents.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(percents.last(), Some(&100));
    assert!(events.contains(&PageEvent::SplashFading));

    let view = driver.page.view();
    assert_eq!(view.phase, PagePhase::Loading);
    assert_eq!(view.percent, 100);
    assert!(view.scroll_locked);
    assert_eq!(ready_calls.get(), 0);

    // 淡出阶段：启动画面在变淡
    driver.run_until(3100.0);
    let splash = driver.page.view();
    assert!(splash.style("preloader").starts_with("opacity: 0."));
    assert!(splash.scroll_locked);

    // 淡出结束
    let events = driver.run_until(3700.0);
    assert_eq!(
        trace(&events),
        ["Ready", "ScrollLock(false)", "ContentMounted"]
    );
    assert_eq!(driver.page.phase(), PagePhase::Content);
    assert!(!driver.page.view().scroll_locked);
    assert_eq!(ready_calls.get(), 1);

    driver.run_until(6000.0);
    assert_eq!(ready_calls.get(), 1);
}

/// 任一时刻只有启动画面和正文之一挂载
#[test]
fn test_content_not_mounted_while_loading() {
    let mut driver = Driver::new(site());
    driver.run_until(3000.0);
    assert!(driver.page.scopes().is_empty());
    assert!(driver.page.reveals().is_empty());

    driver.run_to_content();
    assert_eq!(driver.page.scopes().len(), 6);
    assert!(!driver.page.stage().contains(&ElementId::new("preloader")));
}

#[test]
fn test_scroll_reveal_trace() {
    let mut driver = Driver::new(site());
    let mut events = driver.run_to_content();

    for scroll in [600.0, 1100.0, 0.0, 1100.0] {
        driver.scroll = scroll;
        events.extend(driver.frame());
        events.extend(driver.frame());
    }

    insta::assert_snapshot!(trace(&events).join("\n"), @r#"
    SplashFading
    Ready
    ScrollLock(false)
    ContentMounted
    NavScrolled(true)
    Revealed(ElementId("about.image"))
    Revealed(ElementId("about.content"))
    Revealed(ElementId("about.skills.0"))
    Revealed(ElementId("about.skills.1"))
    NavScrolled(false)
    NavScrolled(true)
    "#);
}

#[test]
fn test_reveal_never_replays() {
    let mut driver = Driver::new(site());
    driver.run_to_content();

    let image = ElementId::new("about.image");
    assert_eq!(driver.page.stage().style(&image).map(|s| s.opacity), Some(0.0));

    driver.scroll = 600.0;
    driver.run_until(driver.now + 2000.0);
    let settled = driver.page.stage().mutations(&image);
    assert_eq!(driver.page.view().style("about.image"), "");

    for scroll in [0.0, 600.0, 0.0, 900.0] {
        driver.scroll = scroll;
        driver.frame();
    }
    assert_eq!(driver.page.stage().mutations(&image), settled);
}

#[test]
fn test_hero_timeline_runs_after_ready() {
    let mut driver = Driver::new(site());
    driver.run_to_content();

    // 时间轴延迟 0.5 秒，此时标题仍是起始样式
    assert_eq!(
        driver.page.view().style("hero.headline"),
        "opacity: 0; transform: translate(0px, 50px); filter: blur(10px)"
    );

    driver.run_until(driver.now + 3000.0);
    assert_eq!(driver.page.view().style("hero.headline"), "");
    assert_eq!(driver.page.view().style("hero.cta"), "");
}

#[test]
fn test_contact_submit() {
    let mut driver = Driver::new(site());
    driver.run_to_content();

    driver.page.set_field(ContactField::Name, "Ada");
    driver.page.set_field(ContactField::Message, "Hello there");
    assert_eq!(
        driver.page.submit_contact(),
        Err(FormError::MissingField {
            field: ContactField::Email
        })
    );
    let view = driver.page.view();
    assert_eq!(view.form.name, "Ada");
    assert!(view.toasts.is_empty());

    driver.page.set_field(ContactField::Email, "ada@example.com");
    let ack = driver.page.submit_contact().unwrap();
    let view = driver.page.view();
    assert!(view.form.name.is_empty() && view.form.email.is_empty() && view.form.message.is_empty());
    assert_eq!(view.toasts.len(), 1);
    assert_eq!(view.toasts[0].kind, ToastKind::Success);
    assert_eq!(view.toasts[0].message, ack.message);
    assert_eq!(ack.message, "Message sent! I'll get back to you soon.");

    driver.run_until(driver.now + 4500.0);
    assert!(driver.page.view().toasts.is_empty());
}

#[test]
fn test_unmount_while_loading_releases_lock() {
    let mut driver = Driver::new(site());
    let ready = driver.page.ready_signal();
    driver.run_until(1000.0);

    assert!(driver.page.unmount().is_empty());
    assert!(!driver.page.view().scroll_locked);
    assert!(ready.is_cancelled());

    assert!(driver.run_until(6000.0).is_empty());
    assert_eq!(driver.page.phase(), PagePhase::Unmounted);
}

#[test]
fn test_unmount_reverts_sections() {
    let mut driver = Driver::new(site());
    driver.run_to_content();
    driver.scroll = 600.0;
    driver.frame();
    assert!(!driver.page.reveals().is_empty());

    let reverted = driver.page.unmount();
    assert_eq!(
        reverted,
        ["footer", "contact", "projects", "about", "hero", "navigation"]
    );
    assert!(driver.page.scopes().is_empty());
    assert!(driver.page.reveals().is_empty());
    assert!(!driver.page.view().scroll_locked);
    assert_eq!(driver.page.navigate(Anchor::Contact), None);
    assert!(driver.page.unmount().is_empty());
}

/// 标签页切到后台：长间隔被替换成短步长，淡出不会直接跳到终点
#[test]
fn test_background_tab_does_not_skip_fade() {
    let mut driver = Driver::new(site());
    driver.run_until(2700.0);
    assert_eq!(driver.page.phase(), PagePhase::Loading);

    driver.now += 10_000.0;
    driver.frame();
    assert_eq!(driver.page.phase(), PagePhase::Loading);
    assert!(driver.page.view().scroll_locked);
}
