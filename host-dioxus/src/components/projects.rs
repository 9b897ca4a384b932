use dioxus::prelude::*;
use folio_runtime::Project;
use folio_runtime::sections::projects::{CARDS, ROOT};

use super::{Icon, child_id};
use crate::app::use_folio;

#[component]
pub fn Projects() -> Element {
    let folio = use_folio();
    let projects = folio.site().projects.clone();

    rsx! {
        section { id: ROOT, class: "section", "data-folio": ROOT,
            div { class: "bg-gradient-radial faint" }
            div { class: "container",
                div { class: "section-head",
                    h2 { class: "section-title text-gradient", "Featured Projects" }
                    p { class: "section-lead",
                        "Transforming complex data into actionable insights through advanced analytics and visualization"
                    }
                }
                div { class: "projects-grid", "data-folio": CARDS,
                    for (i, project) in projects.into_iter().enumerate() {
                        ProjectCard { id: child_id(CARDS, i), project }
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(id: String, project: Project) -> Element {
    let folio = use_folio();
    let style = folio.view().read().style(&id).to_string();

    rsx! {
        div { class: "glass-card project-card", "data-folio": id, style,
            div { class: "project-cover",
                img { src: project.image, alt: project.title.clone() }
                div { class: "cover-fade" }
                div { class: "glass-card project-icon",
                    Icon { name: project.icon, class: "text-primary" }
                }
            }
            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "project-description", "{project.description}" }
                div { class: "tag-row",
                    for tag in project.tags {
                        span { class: "tag tag-sm", "{tag}" }
                    }
                }
                button { class: "pill pill-block",
                    "View Details"
                    Icon { name: "arrow-up-right", size: 16 }
                }
            }
        }
    }
}
