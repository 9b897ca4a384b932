//! # ScrollLock 模块
//!
//! 文档级滚动锁，整个页面唯一的共享可变资源。
//!
//! ## 约定
//!
//! - 加锁：加载闸门进入 `loading` 时调用 [`ScrollLock::acquire`]，拿到守卫
//! - 解锁：闸门进入 `ready` 时释放守卫；闸门被提前卸载时守卫随之 drop，同样解锁
//! - 只要没有守卫存活，锁一定处于解锁状态
//!
//! Host 只需要观察 [`ScrollLock::is_locked`]，把结果同步到 `document.body` 的 `overflow`。

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

/// 滚动锁
///
/// 克隆得到的句柄共享同一把锁。支持多个持有者，全部释放后才解锁。
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 加锁，返回守卫
    pub fn acquire(&self, owner: &'static str) -> ScrollLockGuard {
        self.holders.set(self.holders.get() + 1);
        debug!(owner, holders = self.holders.get(), "滚动锁已加锁");
        ScrollLockGuard {
            lock: self.clone(),
            owner,
        }
    }

    /// 是否处于加锁状态
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    /// 当前持有者数量
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

/// 滚动锁守卫
///
/// drop 时释放。
#[derive(Debug)]
pub struct ScrollLockGuard {
    lock: ScrollLock,
    owner: &'static str,
}

impl ScrollLockGuard {
    /// 显式释放
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let holders = self.lock.holders.get().saturating_sub(1);
        self.lock.holders.set(holders);
        debug!(owner = self.owner, holders, "滚动锁已释放");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire("test");
        assert!(lock.is_locked());

        guard.release();
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_drop_releases() {
        let lock = ScrollLock::new();
        {
            let _guard = lock.acquire("test");
            assert!(lock.clone().is_locked());
        }
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_multiple_holders() {
        let lock = ScrollLock::new();
        let a = lock.acquire("a");
        let b = lock.acquire("b");
        assert_eq!(lock.holders(), 2);

        drop(a);
        assert!(lock.is_locked());
        drop(b);
        assert!(!lock.is_locked());
    }
}
