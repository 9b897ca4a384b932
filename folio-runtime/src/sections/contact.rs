//! 联系区块：三个输入框从左侧错开滑入。

use super::{MountContext, Section, blurred};
use crate::animation::{EasingFunction, StyleFrame};
use crate::config::MotionConfig;
use crate::contact::ContactField;
use crate::reveal::{RevealSpec, TriggerPoint};
use crate::stage::ElementId;

pub const ROOT: &str = "contact";
pub const FIELDS: &str = "contact.fields";

/// 输入框元素
pub fn field_element(field: ContactField) -> ElementId {
    let index = ContactField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or_default();
    ElementId::new(FIELDS).child(index)
}

#[derive(Debug, Clone, Copy)]
pub struct Contact;

impl Contact {
    fn fields(&self) -> RevealSpec {
        RevealSpec::new(ROOT, TriggerPoint::top(0.7))
            .targets(ContactField::ALL.map(field_element))
            .from_to(blurred().with_x(-50.0), StyleFrame::resting())
            .duration(0.8)
            .stagger(0.1)
            .easing(EasingFunction::POWER3_OUT)
    }
}

impl Section for Contact {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn mount(&self, cx: &mut MountContext<'_>) {
        cx.reveal(self.fields());
    }

    fn start_styles(&self, _motion: &MotionConfig) -> Vec<(ElementId, StyleFrame)> {
        self.fields().start_styles()
    }
}
