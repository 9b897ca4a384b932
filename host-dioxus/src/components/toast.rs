use dioxus::prelude::*;
use folio_runtime::{Toast, ToastKind};

use crate::app::use_folio;

/// 右下角提示栈
#[component]
pub fn ToastLayer() -> Element {
    let folio = use_folio();
    let toasts = folio.view().read().toasts.clone();

    rsx! {
        div { class: "toast-layer",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let folio = use_folio();
    let id = toast.id;
    let style = format!("opacity: {:.2}", toast.opacity());
    let class = format!("toast toast-{}", kind_class(toast.kind));
    let icon = toast.kind.icon();
    let onclick = move |_| folio.dismiss_toast(id);

    rsx! {
        div { class, style, role: "status", onclick,
            span { class: "toast-icon", "{icon}" }
            span { class: "toast-message", "{toast.message}" }
        }
    }
}

fn kind_class(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Warning => "warning",
        ToastKind::Error => "error",
    }
}
