use dioxus::prelude::*;
use folio_runtime::sections::about::{CONTENT, IMAGE, ROOT, SKILLS};

use super::{Icon, child_id};
use crate::app::use_folio;

/// 头像、自我介绍、技术技能网格与软技能
#[component]
pub fn About() -> Element {
    let folio = use_folio();
    let view = folio.view();
    let view = view.read();
    let site = folio.site();

    let portrait = site.portrait.clone();
    let alt = format!("{} - {}", site.name, site.role);
    let paragraphs = site.about.clone();
    let skills = site.skills.clone();
    let soft_skills = site.soft_skills.clone();

    rsx! {
        section { id: ROOT, class: "section", "data-folio": ROOT,
            div { class: "bg-gradient-radial faint" }
            div { class: "container",
                h2 { class: "section-title text-gradient", "About Me" }

                div { class: "about-grid",
                    div {
                        class: "about-image",
                        "data-folio": IMAGE,
                        style: view.style(IMAGE).to_string(),
                        div { class: "glass-card glow-box portrait-frame",
                            img { src: portrait, alt }
                        }
                        div { class: "portrait-glow" }
                    }

                    div {
                        class: "about-content",
                        "data-folio": CONTENT,
                        style: view.style(CONTENT).to_string(),

                        for text in paragraphs {
                            p { class: "lead", "{text}" }
                        }

                        h3 { class: "subsection-title text-gradient", "Technical Skills" }
                        div { class: "skills-grid", "data-folio": SKILLS,
                            for (i, skill) in skills.into_iter().enumerate() {
                                div {
                                    class: "glass-card skill-card",
                                    "data-folio": child_id(SKILLS, i),
                                    style: view.style(&child_id(SKILLS, i)).to_string(),
                                    Icon { name: skill.icon, size: 32, class: skill.tone.class() }
                                    p { class: "skill-name", "{skill.name}" }
                                }
                            }
                        }

                        if !soft_skills.is_empty() {
                            div { class: "glass-card soft-skills",
                                h3 { class: "subsection-title text-gradient", "Soft Skills" }
                                div { class: "tag-row",
                                    for skill in soft_skills {
                                        span { class: "tag", "{skill}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
