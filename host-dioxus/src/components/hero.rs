use dioxus::prelude::*;
use folio_runtime::Anchor;
use folio_runtime::sections::hero::{CTA, HEADLINE, ORB_COUNT, ORBS, SPLINE, SUBTITLE};

use super::{Icon, child_id};
use crate::app::use_folio;

const ORB_CLASSES: [&str; ORB_COUNT] = [
    "orb orb-primary glow-box",
    "orb orb-secondary glow-box-secondary",
    "orb orb-accent glow-box-accent",
];

/// 首屏：3D 背景、漂浮光球、标题与行动按钮
#[component]
pub fn Hero() -> Element {
    let folio = use_folio();
    let view = folio.view();
    let view = view.read();
    let site = folio.site();

    let name = site.name.clone();
    let subtitle = site.subtitle.clone();
    let embed = site.embed_url.clone();
    let hire = {
        let folio = folio.clone();
        move |_| folio.navigate(Anchor::Contact)
    };

    rsx! {
        section {
            id: Anchor::Home.id(),
            class: "hero",
            "data-folio": Anchor::Home.id(),

            if let Some(src) = embed {
                div {
                    class: "hero-embed",
                    "data-folio": SPLINE,
                    style: view.style(SPLINE).to_string(),
                    iframe { src, title: "3D Orb Animation", width: "100%", height: "100%" }
                }
            }

            div { class: "hero-backdrop",
                for (i, class) in ORB_CLASSES.into_iter().enumerate() {
                    div {
                        class,
                        "data-folio": child_id(ORBS, i),
                        style: view.style(&child_id(ORBS, i)).to_string(),
                    }
                }
                div { class: "bg-gradient-radial" }
            }

            div { class: "container hero-content",
                h1 {
                    class: "hero-headline",
                    "data-folio": HEADLINE,
                    style: view.style(HEADLINE).to_string(),
                    "Hi, I'm "
                    span { class: "text-gradient glow-text", "{name}" }
                }
                p {
                    class: "hero-subtitle",
                    "data-folio": SUBTITLE,
                    style: view.style(SUBTITLE).to_string(),
                    "{subtitle}"
                }
                div { class: "hero-actions",
                    button {
                        class: "cta glow-box",
                        "data-folio": CTA,
                        style: view.style(CTA).to_string(),
                        onclick: hire,
                        "Hire Me"
                        Icon { name: "arrow-right", size: 20 }
                    }
                }
            }
        }
    }
}
