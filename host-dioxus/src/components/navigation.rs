use dioxus::prelude::*;
use folio_runtime::Anchor;
use folio_runtime::sections::navigation::MENU;

use super::{Icon, child_id};
use crate::app::use_folio;

/// 顶部导航栏与移动端全屏菜单
#[component]
pub fn Navigation() -> Element {
    let folio = use_folio();
    let view = folio.view();
    let view = view.read();

    let logo = folio.site().logo();
    let resume = folio.site().resume_url.clone();
    let menu_open = view.nav.menu_open;
    let bar = format!("nav {}", view.nav.bar_class());
    let toggle_icon = if menu_open { "close" } else { "menu" };
    let toggle = {
        let folio = folio.clone();
        move |_| {
            folio.toggle_menu();
        }
    };

    rsx! {
        nav { class: bar,
            div { class: "container nav-inner",
                NavLink { anchor: Anchor::Home, label: logo, class: "nav-logo text-gradient" }

                div { class: "nav-links",
                    for anchor in Anchor::ALL {
                        NavLink { anchor, label: anchor.label(), class: "nav-link" }
                    }
                    if let Some(url) = resume {
                        a {
                            class: "pill glow-box",
                            href: url,
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Resume"
                        }
                    }
                }

                button { class: "nav-toggle", aria_label: "Toggle menu", onclick: toggle,
                    Icon { name: toggle_icon }
                }
            }
        }

        if menu_open {
            div { class: "mobile-menu glass-card",
                for (i, anchor) in Anchor::ALL.into_iter().enumerate() {
                    NavLink {
                        anchor,
                        label: anchor.label(),
                        class: "mobile-link",
                        motion: child_id(MENU, i),
                    }
                }
                NavLink {
                    anchor: Anchor::Contact,
                    label: "Hire Me",
                    class: "pill pill-lg glow-box",
                    motion: child_id(MENU, Anchor::ALL.len()),
                }
            }
        }
    }
}

/// 跳转按钮；`motion` 给出时挂上动效标记
#[component]
fn NavLink(
    anchor: Anchor,
    #[props(into)] label: String,
    class: &'static str,
    motion: Option<String>,
) -> Element {
    let folio = use_folio();
    let style = match &motion {
        Some(id) => folio.view().read().style(id).to_string(),
        None => String::new(),
    };
    let onclick = move |_| folio.navigate(anchor);

    rsx! {
        button {
            class,
            "data-folio": motion,
            style,
            onclick,
            "{label}"
        }
    }
}
