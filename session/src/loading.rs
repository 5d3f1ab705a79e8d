//! Per-operation loading flag.
//!
//! The flag is raised before a request is dispatched and lowered when the
//! guard drops, so success, failure and a dropped future all leave the
//! control enabled again.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use std::future::Future;

/// Holds a loading flag raised until dropped.
#[must_use = "the flag is lowered as soon as the guard is dropped"]
pub struct Loading<F>
where
    F: Fn(bool),
{
    set: F,
}

impl<F> Loading<F>
where
    F: Fn(bool),
{
    /// Raise the flag through `set`.
    pub fn start(set: F) -> Self {
        set(true);
        Self { set }
    }
}

impl<F> Drop for Loading<F>
where
    F: Fn(bool),
{
    fn drop(&mut self) {
        (self.set)(false);
    }
}

/// Await `fut` with the flag raised, lowering it however the call settles.
pub async fn while_loading<F, Fut>(set: F, fut: Fut) -> Fut::Output
where
    F: Fn(bool),
    Fut: Future,
{
    let _loading = Loading::start(set);
    fut.await
}
