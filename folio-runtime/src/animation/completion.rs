//! # Completion 模块
//!
//! 动画完成信号与取消令牌。
//!
//! - [`Completion`]：每个动画一个，结束时以 [`Outcome`] 结算一次。可以轮询
//!   （`outcome()`）、注册回调（`on_settle`），也可以直接 `.await`。
//! - [`Completion::all`]：汇合多个信号，全部结算后结算。
//! - [`CancelToken`]：共享的取消标记。时间轴把同一个令牌下发给所有步骤，
//!   取消一次即可让所有未开始和进行中的步骤停止。
//!
//! 所有类型都是单线程的（`Rc`），与帧驱动的调度模型一致。

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

/// 动画结算结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 正常播放完毕
    Finished,
    /// 被取消
    Cancelled,
}

type Listener = Box<dyn FnOnce(Outcome)>;

#[derive(Default)]
struct CompletionInner {
    outcome: Option<Outcome>,
    wakers: Vec<Waker>,
    listeners: Vec<Listener>,
}

/// 完成信号
///
/// 克隆得到的句柄共享同一个结算状态。
#[derive(Clone, Default)]
pub struct Completion {
    inner: Rc<RefCell<CompletionInner>>,
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("outcome", &self.outcome())
            .finish()
    }
}

impl Completion {
    /// 创建未结算的信号
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建已结算的信号
    pub fn settled(outcome: Outcome) -> Self {
        let completion = Self::new();
        completion.resolve(outcome);
        completion
    }

    /// 结算信号
    ///
    /// 只有第一次结算生效，返回是否生效。
    pub fn resolve(&self, outcome: Outcome) -> bool {
        let (wakers, listeners) = {
            let mut inner = self.inner.borrow_mut();
            if inner.outcome.is_some() {
                return false;
            }
            inner.outcome = Some(outcome);
            (
                std::mem::take(&mut inner.wakers),
                std::mem::take(&mut inner.listeners),
            )
        };

        // 借用已释放，回调里可以安全地访问本信号
        for listener in listeners {
            listener(outcome);
        }
        for waker in wakers {
            waker.wake();
        }
        true
    }

    /// 结算结果（未结算时为 `None`）
    pub fn outcome(&self) -> Option<Outcome> {
        self.inner.borrow().outcome
    }

    /// 是否已结算
    pub fn is_settled(&self) -> bool {
        self.outcome().is_some()
    }

    /// 是否正常完成
    pub fn is_finished(&self) -> bool {
        self.outcome() == Some(Outcome::Finished)
    }

    /// 是否被取消
    pub fn is_cancelled(&self) -> bool {
        self.outcome() == Some(Outcome::Cancelled)
    }

    /// 注册结算回调
    ///
    /// 已结算时立即调用。
    pub fn on_settle(&self, listener: impl FnOnce(Outcome) + 'static) {
        let settled = self.outcome();
        match settled {
            Some(outcome) => listener(outcome),
            None => self.inner.borrow_mut().listeners.push(Box::new(listener)),
        }
    }

    /// 汇合多个信号
    ///
    /// 全部结算后结算；任一被取消则结果为 `Cancelled`。空列表立即完成。
    pub fn all(parts: impl IntoIterator<Item = Completion>) -> Completion {
        let parts: Vec<Completion> = parts.into_iter().collect();
        let joined = Completion::new();

        if parts.is_empty() {
            joined.resolve(Outcome::Finished);
            return joined;
        }

        let remaining = Rc::new(Cell::new(parts.len()));
        let any_cancelled = Rc::new(Cell::new(false));

        for part in parts {
            let joined = joined.clone();
            let remaining = remaining.clone();
            let any_cancelled = any_cancelled.clone();
            part.on_settle(move |outcome| {
                if outcome == Outcome::Cancelled {
                    any_cancelled.set(true);
                }
                remaining.set(remaining.get() - 1);
                if remaining.get() == 0 {
                    joined.resolve(if any_cancelled.get() {
                        Outcome::Cancelled
                    } else {
                        Outcome::Finished
                    });
                }
            });
        }

        joined
    }
}

impl Future for Completion {
    type Output = Outcome;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut inner = self.inner.borrow_mut();
        match inner.outcome {
            Some(outcome) => Poll::Ready(outcome),
            None => {
                if !inner.wakers.iter().any(|w| w.will_wake(cx.waker())) {
                    inner.wakers.push(cx.waker().clone());
                }
                Poll::Pending
            }
        }
    }
}

/// 取消令牌
///
/// 克隆得到的令牌共享同一个取消标记。
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取消（幂等）
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// 是否已取消
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}
