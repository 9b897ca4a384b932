//! # host-dioxus
//!
//! 作品集页面的 Dioxus 宿主。
//!
//! 宿主只负责三件事：
//! - 把 `content/site.json` 渲染成 DOM，并给动效元素打上 `data-folio` 标记
//! - 每个动画帧测量布局，交给 [`folio_runtime::Page::tick`]
//! - 把核心给出的样式快照、滚动锁和平滑滚动请求落到浏览器
//!
//! 动效逻辑全部在 `folio-runtime` 里，这里不做任何时间计算。

mod app;
mod bridge;
mod components;

fn main() {
    init_logging();
    dioxus::launch(app::App);
}

#[cfg(feature = "desktop")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();
}

#[cfg(not(feature = "desktop"))]
fn init_logging() {
    // 浏览器里没有 stderr，重复初始化的错误直接丢弃
    let _ = dioxus::logger::init(tracing::Level::INFO);
}
