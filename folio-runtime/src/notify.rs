//! # Notify 模块
//!
//! 短暂提示（toast）。每条提示有剩余时间，最后 0.3 秒淡出，归零后移除。

use serde::Serialize;

/// 淡出时长（秒）
const FADE_OUT: f32 = 0.3;

/// 提示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// 图标
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

/// 单条提示
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// 剩余显示时间（秒）
    pub remaining: f32,
    /// 淡出进度 (0.0 - 1.0)
    pub fade: f32,
}

impl Toast {
    fn new(id: u64, message: String, kind: ToastKind, duration: f32) -> Self {
        Self {
            id,
            message,
            kind,
            remaining: duration,
            fade: 0.0,
        }
    }

    /// 更新状态，返回是否应该移除
    fn update(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= FADE_OUT {
            self.fade = 1.0 - (self.remaining / FADE_OUT).max(0.0);
        }
        self.remaining <= 0.0
    }

    /// 当前不透明度
    pub fn opacity(&self) -> f32 {
        1.0 - self.fade
    }
}

/// 提示管理器
#[derive(Debug, Clone)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    default_duration: f32,
    next_id: u64,
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl ToastManager {
    pub fn new(default_duration: f32) -> Self {
        Self {
            toasts: Vec::new(),
            default_duration,
            next_id: 0,
        }
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Info)
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Success)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Warning)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(message, ToastKind::Error)
    }

    /// 显示提示，返回提示 ID
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.next_id += 1;
        self.toasts.push(Toast::new(
            self.next_id,
            message.into(),
            kind,
            self.default_duration,
        ));
        self.next_id
    }

    /// 更新所有提示
    pub fn update(&mut self, dt: f32) {
        self.toasts.retain_mut(|toast| !toast.update(dt));
    }

    /// 手动关闭
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
