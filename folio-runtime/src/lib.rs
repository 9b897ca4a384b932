//! # Folio Runtime
//!
//! 动效作品集单页站点的核心运行时库。
//!
//! ## 架构概述
//!
//! `folio-runtime` 是纯逻辑核心，不依赖 DOM、IO 或渲染器。
//! 它通过 **帧驱动模式** 与宿主层（Host）通信：
//!
//! ```text
//! Host                               Runtime
//!   │                                   │
//!   │──── FrameInput ──────────────────►│
//!   │     (时间戳 / 滚动 / 视口 / 布局)     │ tick()
//!   │◄─── Vec<PageEvent> ───────────────│
//!   │◄─── PageView (样式 / 表单 / 提示) ──│ view()
//!   │                                   │
//!   │──── navigate / toggle_menu ──────►│
//!   │     set_field / submit_contact    │
//! ```
//!
//! ## 核心类型
//!
//! - [`Page`]：页面根状态机（启动画面 ⇄ 正文）
//! - [`RevealEngine`]：滚动揭示，每个目标最多触发一次
//! - [`Timeline`]：带相对偏移的有序动画序列，可整体取消
//! - [`ReadyGate`]：加载进度、淡出、就绪回调与滚动锁
//! - [`Stage`]：文档的内存镜像，所有动画只写它
//!
//! ## 使用示例
//!
//! ```ignore
//! use folio_runtime::{FrameInput, Page, SiteConfig};
//!
//! let site = SiteConfig::from_json(include_str!("site.json"))?;
//! let mut page = Page::new(site);
//!
//! // 每个 requestAnimationFrame
//! let events = page.tick(&FrameInput::at(timestamp).with_viewport(900.0));
//! render(page.view());
//! ```
//!
//! ## 模块结构
//!
//! - [`animation`]：缓动、补间、完成信号与取消令牌
//! - [`clock`]：帧时钟与卡顿平滑
//! - [`stage`] / [`scroll_lock`]：文档镜像与滚动锁
//! - [`reveal`] / [`timeline`] / [`gate`]：三类动效编排
//! - [`sections`]：各区块的动效声明
//! - [`nav`] / [`contact`] / [`notify`]：导航、表单与提示
//! - [`config`] / [`error`]：配置与错误类型

pub mod animation;
pub mod clock;
pub mod config;
pub mod contact;
pub mod error;
pub mod gate;
pub mod nav;
pub mod notify;
pub mod page;
pub mod reveal;
pub mod scroll_lock;
pub mod sections;
pub mod stage;
pub mod timeline;

// 重导出核心类型
pub use animation::{
    Animation, AnimationId, AnimationState, CancelToken, Completion, EasingFunction, Outcome,
    Repeat, StyleFrame, StyleTween,
};
pub use clock::FrameClock;
pub use config::{ContactInfo, MotionConfig, Project, SiteConfig, Skill, SocialLink, Tone};
pub use contact::{ACK_MESSAGE, ContactAck, ContactField, ContactForm};
pub use error::{ConfigError, FolioError, FolioResult, FormError};
pub use gate::{GateEvent, GatePhase, ReadyGate};
pub use nav::{Anchor, NavState};
pub use notify::{Toast, ToastKind, ToastManager};
pub use page::{FrameInput, Page, PageEvent, PagePhase, PageView, ScrollRequest};
pub use reveal::{RevealEngine, RevealEvent, RevealId, RevealSpec, RevealState, TriggerPoint};
pub use scroll_lock::{ScrollLock, ScrollLockGuard};
pub use sections::{MotionScope, MountContext, Section};
pub use stage::{Bounds, ElementId, ElementLayout, Stage, Viewport};
pub use timeline::{Offset, Timeline, TimelineState, TimelineStep};
