use dioxus::prelude::*;
use folio_runtime::gate::SPLASH;

use crate::app::use_folio;

/// 启动画面：姓名、进度条与百分比
#[component]
pub fn Preloader() -> Element {
    let folio = use_folio();
    let view = folio.view();
    let view = view.read();

    let name = folio.site().name.clone();
    let percent = view.percent;
    let bar = format!("width: {:.1}%", view.bar_width);

    rsx! {
        div {
            class: "preloader",
            "data-folio": SPLASH,
            style: view.style(SPLASH).to_string(),

            div { class: "preloader-inner",
                h1 { class: "preloader-name text-gradient glow-text", "{name}" }
                div { class: "progress-track",
                    div { class: "progress-bar glow-box", style: bar }
                }
                span { class: "progress-percent", "{percent}%" }
            }
            div { class: "bg-gradient-radial" }
        }
    }
}
