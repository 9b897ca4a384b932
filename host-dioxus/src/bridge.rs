//! # 浏览器桥
//!
//! 一段常驻脚本负责帧泵：每个 `requestAnimationFrame` 测量所有带 `data-folio`
//! 标记的元素，把 [`FrameInput`] 发回 Rust，然后等待本帧的命令。
//!
//! ```text
//! JS                                  Rust
//!  │── FrameInput ───────────────────►│ Page::tick
//!  │◄── Lock / ScrollTo ... ──────────│ 命令队列
//!  │◄── FrameDone ────────────────────│
//!  │   (下一个 rAF)                    │
//! ```
//!
//! 布局用 `offsetTop` 链计算，不受元素自身 `transform` 影响，
//! 否则揭示动画的位移会反过来改变触发判断。

use dioxus::prelude::*;
use folio_runtime::FrameInput;
use serde::Serialize;
use tracing::{debug, warn};

use crate::app::Folio;

/// 发往浏览器的命令
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostCommand {
    /// 锁定 / 解锁页面滚动
    Lock { locked: bool },
    /// 平滑滚动到文档坐标
    ScrollTo { top: f32 },
    /// 本帧命令结束
    FrameDone,
}

const FRAME_PUMP: &str = r#"
const docTop = (el) => {
    let top = 0;
    for (let node = el; node; node = node.offsetParent) top += node.offsetTop;
    return top;
};
const measure = (ts) => ({
    timestamp_ms: ts,
    scroll_y: window.scrollY,
    viewport_height: window.innerHeight,
    layout: Array.from(document.querySelectorAll("[data-folio]"), (el) => ({
        id: el.dataset.folio,
        top: docTop(el),
        height: el.offsetHeight,
    })),
});
const apply = (cmd) => {
    switch (cmd.kind) {
        case "lock":
            document.body.style.overflow = cmd.locked ? "hidden" : "";
            break;
        case "scroll_to":
            window.scrollTo({ top: cmd.top, behavior: "smooth" });
            break;
    }
};
while (true) {
    const ts = await new Promise((resolve) => requestAnimationFrame(resolve));
    dioxus.send(measure(ts));
    for (;;) {
        const cmd = await dioxus.recv();
        if (cmd.kind === "frame_done") break;
        apply(cmd);
    }
}
"#;

/// 帧循环，页面卸载或脚本断开时退出
pub async fn run(folio: Folio) {
    let mut pump = document::eval(FRAME_PUMP);
    debug!("帧泵已启动");

    loop {
        let input = match pump.recv::<FrameInput>().await {
            Ok(input) => input,
            Err(e) => {
                warn!(error = %e, "帧泵断开");
                break;
            }
        };
        if folio.is_unmounted() {
            break;
        }

        folio.tick(&input);

        let mut commands = folio.drain_commands();
        commands.push(HostCommand::FrameDone);
        for command in &commands {
            if let Err(e) = pump.send(command) {
                warn!(error = %e, ?command, "命令发送失败");
                return;
            }
        }
    }
    debug!("帧泵已停止");
}

/// 不经过帧泵直接执行命令（帧泵可能已经停止）
pub fn apply_now(command: &HostCommand) {
    let script = match command {
        HostCommand::Lock { locked: true } => "document.body.style.overflow = 'hidden';".to_string(),
        HostCommand::Lock { locked: false } => "document.body.style.overflow = '';".to_string(),
        HostCommand::ScrollTo { top } => {
            format!("window.scrollTo({{ top: {top}, behavior: 'smooth' }});")
        }
        HostCommand::FrameDone => return,
    };
    document::eval(&script);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_string(&HostCommand::Lock { locked: true }).unwrap();
        assert_eq!(json, r#"{"kind":"lock","locked":true}"#);

        let json = serde_json::to_string(&HostCommand::ScrollTo { top: 1200.0 }).unwrap();
        assert_eq!(json, r#"{"kind":"scroll_to","top":1200.0}"#);

        let json = serde_json::to_string(&HostCommand::FrameDone).unwrap();
        assert_eq!(json, r#"{"kind":"frame_done"}"#);
    }

    #[test]
    fn test_frame_input_from_script() {
        let json = r#"{
            "timestamp_ms": 16.7,
            "scroll_y": 320,
            "viewport_height": 900,
            "layout": [{ "id": "about.image", "top": 1300, "height": 600 }]
        }"#;
        let input: FrameInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.scroll_y, 320.0);
        assert_eq!(input.layout[0].id.as_str(), "about.image");
        assert_eq!(input.layout[0].bounds.top, 1300.0);
    }
}
