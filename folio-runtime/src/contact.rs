//! # Contact 模块
//!
//! 联系表单状态。只有"必填"校验；提交只在本地确认，不发送任何网络请求。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormError;

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// 全部字段（按表单顺序）
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    /// DOM 上的字段名
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// 标签文字
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// 占位提示
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "your.email@example.com",
            Self::Message => "Tell me about your project...",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 提交成功后的确认消息
pub const ACK_MESSAGE: &str = "Message sent! I'll get back to you soon.";

/// 提交确认
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAck {
    pub message: String,
}

/// 联系表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 更新字段（每次按键）
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// 读取字段
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    /// 为空的必填字段
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }

    /// 提交
    ///
    /// 任一字段为空时返回第一个空字段，表单保持原样；成功时清空全部字段。
    pub fn submit(&mut self) -> Result<ContactAck, FormError> {
        if let Some(field) = self.missing_fields().first().copied() {
            debug!(%field, "表单提交被拦截");
            return Err(FormError::MissingField { field });
        }

        *self = Self::default();
        debug!("表单已提交并重置");
        Ok(ContactAck {
            message: ACK_MESSAGE.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.missing_fields().len() == ContactField::ALL.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Ada");
        form.set(ContactField::Email, "ada@example.com");
        form.set(ContactField::Message, "Hello");
        form
    }

    #[test]
    fn test_submit_resets() {
        let mut form = filled();
        let ack = form.submit().unwrap();
        assert_eq!(ack.message, ACK_MESSAGE);
        assert!(form.is_empty());
    }

    #[test]
    fn test_missing_field_keeps_state() {
        let mut form = filled();
        form.set(ContactField::Email, "");
        let before = form.clone();

        assert_eq!(
            form.submit(),
            Err(FormError::MissingField {
                field: ContactField::Email
            })
        );
        assert_eq!(form, before);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = filled();
        form.set(ContactField::Message, " ");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_missing_fields_order() {
        let mut form = ContactForm::new();
        form.set(ContactField::Email, "x@y");
        assert_eq!(
            form.missing_fields(),
            vec![ContactField::Name, ContactField::Message]
        );
    }
}
