use dioxus::prelude::*;
use folio_runtime::ContactField;
use folio_runtime::sections::contact::{FIELDS, ROOT, field_element};
use tracing::debug;

use super::Icon;
use crate::app::use_folio;

/// 联系表单、联系方式与社交链接
#[component]
pub fn Contact() -> Element {
    let folio = use_folio();
    let view = folio.view();
    let view = view.read();
    let site = folio.site();

    let contact = site.contact.clone();
    let socials = site.socials.clone();
    let (mailto, tel) = (contact.mailto(), contact.tel());
    let submit = {
        let folio = folio.clone();
        move |event: FormEvent| {
            event.prevent_default();
            if let Err(e) = folio.submit_contact() {
                debug!(error = %e, "表单未提交");
            }
        }
    };

    rsx! {
        section { id: ROOT, class: "section", "data-folio": ROOT,
            div { class: "bg-gradient-radial faint" }
            div { class: "container",
                div { class: "section-head",
                    h2 { class: "section-title text-gradient", "Get In Touch" }
                    p { class: "section-lead",
                        "Have a project in mind? Let's work together to turn your data into insights"
                    }
                }

                div { class: "contact-grid",
                    form { class: "contact-form", "data-folio": FIELDS, onsubmit: submit,
                        for field in ContactField::ALL {
                            FormField { field, value: view.form.get(field).to_string() }
                        }
                        button { r#type: "submit", class: "submit glow-box", "Send Message" }
                    }

                    div { class: "contact-info",
                        div { class: "glass-card info-card",
                            h3 { class: "subsection-title text-gradient", "Contact Information" }
                            a { class: "info-row", href: mailto,
                                div { class: "info-icon", Icon { name: "mail" } }
                                span { "{contact.email}" }
                            }
                            if !contact.phone.is_empty() {
                                a { class: "info-row", href: tel,
                                    div { class: "info-icon", Icon { name: "phone" } }
                                    span { "{contact.phone}" }
                                }
                            }
                        }

                        div { class: "glass-card info-card",
                            h3 { class: "subsection-title", "Connect With Me" }
                            div { class: "social-row",
                                for social in socials {
                                    a {
                                        class: "social glow-box",
                                        href: social.url,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        aria_label: social.label,
                                        Icon { name: social.icon, size: 28 }
                                    }
                                }
                            }
                        }

                        if !contact.availability.is_empty() {
                            div { class: "glass-card info-card",
                                h3 { class: "subsection-title", "Availability" }
                                p { class: "muted", "{contact.availability}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// 单个表单项；外层容器挂揭示标记
#[component]
fn FormField(field: ContactField, value: String) -> Element {
    let folio = use_folio();
    let id = field_element(field);
    let style = folio.view().read().style(id.as_str()).to_string();
    let name = field.as_str();
    let label = field.label();
    let kind = if field == ContactField::Email { "email" } else { "text" };
    let oninput = move |event: FormEvent| folio.set_field(field, event.value());

    rsx! {
        div { class: "form-field", "data-folio": id.as_str().to_string(), style,
            label { r#for: name, class: "field-label", "{label}" }
            if field == ContactField::Message {
                textarea {
                    id: name,
                    name,
                    rows: "5",
                    required: true,
                    placeholder: field.placeholder(),
                    value,
                    oninput,
                }
            } else {
                input {
                    id: name,
                    name,
                    r#type: kind,
                    required: true,
                    placeholder: field.placeholder(),
                    value,
                    oninput,
                }
            }
        }
    }
}
