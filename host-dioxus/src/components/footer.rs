use chrono::Datelike;
use dioxus::prelude::*;
use folio_runtime::Anchor;
use folio_runtime::sections::footer::{PARTICLE_COUNT, PARTICLES, ROOT};

use super::{Icon, child_id};
use crate::app::use_folio;

const PARTICLE_CLASSES: [&str; PARTICLE_COUNT] = [
    "particle particle-a",
    "particle particle-b",
    "particle particle-c",
    "particle particle-d",
];

#[component]
pub fn Footer() -> Element {
    let folio = use_folio();
    let view = folio.view();
    let view = view.read();
    let site = folio.site();

    let name = site.name.clone();
    let tagline = site.tagline.clone();
    let socials = site.socials.clone();
    let mailto = site.contact.mailto();
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer", "data-folio": ROOT, style: view.style(ROOT).to_string(),
            div { class: "footer-particles",
                for (i, class) in PARTICLE_CLASSES.into_iter().enumerate() {
                    div {
                        class,
                        "data-folio": child_id(PARTICLES, i),
                        style: view.style(&child_id(PARTICLES, i)).to_string(),
                    }
                }
            }

            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h3 { class: "footer-brand text-gradient", "{name}" }
                        p { class: "muted small", "{tagline}" }
                    }

                    div {
                        h4 { class: "footer-heading", "Quick Links" }
                        nav { class: "footer-links",
                            for anchor in Anchor::ALL {
                                QuickLink { anchor }
                            }
                        }
                    }

                    div {
                        h4 { class: "footer-heading", "Connect" }
                        div { class: "social-row",
                            for social in socials {
                                a {
                                    class: "social social-sm glow-box",
                                    href: social.url,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    aria_label: social.label,
                                    Icon { name: social.icon, size: 20 }
                                }
                            }
                            a { class: "social social-sm glow-box", href: mailto, aria_label: "Email",
                                Icon { name: "mail", size: 20 }
                            }
                        }
                    }
                }

                div { class: "copyright",
                    p { class: "muted small", "© {year} {name}. All rights reserved." }
                }
            }
        }
    }
}

#[component]
fn QuickLink(anchor: Anchor) -> Element {
    let folio = use_folio();
    let label = anchor.label();
    let onclick = move |_| folio.navigate(anchor);

    rsx! {
        button { class: "footer-link", onclick, "{label}" }
    }
}
