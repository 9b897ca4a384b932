//! 线框图标
//!
//! 内容配置里只写图标名，这里映射成 24×24 的 SVG 路径。未知名字退回 `code`。

use dioxus::prelude::*;

fn paths(name: &str) -> &'static [&'static str] {
    match name {
        "database" => &[
            "M4 6c0-1.7 3.6-3 8-3s8 1.3 8 3-3.6 3-8 3-8-1.3-8-3z",
            "M4 6v12c0 1.7 3.6 3 8 3s8-1.3 8-3V6",
            "M4 12c0 1.7 3.6 3 8 3s8-1.3 8-3",
        ],
        "chart-bar" => &["M4 20h16", "M7 16V10", "M12 16V4", "M17 16v-8"],
        "chart-line-up" => &["M4 20h16", "M4 16l5-5 4 3 7-8", "M15 6h5v5"],
        "brain" => &[
            "M9 4a3 3 0 0 0-3 3 3 3 0 0 0-2 5 3 3 0 0 0 2 5 3 3 0 0 0 3 3h1V4z",
            "M15 4a3 3 0 0 1 3 3 3 3 0 0 1 2 5 3 3 0 0 1-2 5 3 3 0 0 1-3 3h-1V4z",
        ],
        "file-py" => &[
            "M14 3H6v18h12V7z",
            "M14 3v4h4",
            "M9 13h2a1.5 1.5 0 0 1 0 3H9v-3zm0 3v2",
        ],
        "mail" => &["M3 6h18v12H3z", "M3 6l9 7 9-7"],
        "phone" => &[
            "M5 4h4l2 5-2.5 1.5a11 11 0 0 0 5 5L15 13l5 2v4a2 2 0 0 1-2 2A16 16 0 0 1 3 6a2 2 0 0 1 2-2",
        ],
        "linkedin" => &[
            "M4 9h4v11H4z",
            "M6 4a2 2 0 1 1 0 4 2 2 0 0 1 0-4",
            "M10 9h4v2a4 4 0 0 1 6 3v6h-4v-6a2 2 0 0 0-4 0v6h-2z",
        ],
        "github" => &[
            "M9 19c-4 1.5-4-2-6-2.5",
            "M15 21v-3.5a3 3 0 0 0-1-2.5c3 0 6-1.5 6-6.5a5 5 0 0 0-1.5-3.5 4.5 4.5 0 0 0 0-3.5s-1.2-.3-3.5 1.3a12 12 0 0 0-6 0C6.7 1.7 5.5 2 5.5 2a4.5 4.5 0 0 0 0 3.5A5 5 0 0 0 4 9c0 5 3 6.5 6 6.5a3 3 0 0 0-1 2.5V21",
        ],
        "menu" => &["M4 6h16", "M4 12h16", "M4 18h16"],
        "close" => &["M6 6l12 12", "M18 6L6 18"],
        "arrow-right" => &["M5 12h14", "M13 6l6 6-6 6"],
        "arrow-up-right" => &["M7 17L17 7", "M8 7h9v9"],
        "download" => &["M12 4v12", "M7 11l5 5 5-5", "M4 20h16"],
        _ => &["M8 8l-4 4 4 4", "M16 8l4 4-4 4", "M14 5l-4 14"],
    }
}

#[component]
pub fn Icon(
    #[props(into)] name: String,
    #[props(default = 24)] size: u32,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        svg {
            class: "icon {class}",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "1.5",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths(&name) {
                path { d: *d }
            }
        }
    }
}
