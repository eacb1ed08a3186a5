//! Access seam between the flow orchestrators and their state storage.
//!
//! In the page the storage is a leptos `RwSignal`; anything else that can hand
//! out `&mut T` (a `RefCell` in tests) works the same way.

use leptos::prelude::*;
use std::cell::RefCell;

pub trait StateCell<T> {
    /// Mutate the state. `None` once the storage has been disposed.
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the state without subscribing. `None` once disposed.
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// Runs `release` against the cell when dropped.
///
/// Held across a flow's await point so its busy flag is cleared on every exit,
/// including the future being dropped before the response arrives. `release`
/// must be a no-op once the flow has settled normally.
pub struct ReleaseGuard<'a, T, S: StateCell<T>> {
    cell: &'a S,
    release: fn(&mut T),
}

impl<'a, T, S: StateCell<T>> ReleaseGuard<'a, T, S> {
    pub fn new(cell: &'a S, release: fn(&mut T)) -> Self {
        Self { cell, release }
    }
}

impl<T, S: StateCell<T>> Drop for ReleaseGuard<'_, T, S> {
    fn drop(&mut self) {
        let _ = self.cell.apply(self.release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refcell_apply_and_peek() {
        let cell = RefCell::new(1);
        assert_eq!(cell.apply(|v| {
            *v += 1;
            *v
        }), Some(2));
        assert_eq!(cell.peek(|v| *v * 10), Some(20));
    }

    #[test]
    fn test_release_guard_runs_on_drop() {
        let cell = RefCell::new(true);
        {
            let _guard = ReleaseGuard::new(&cell, |busy: &mut bool| *busy = false);
            assert!(*cell.borrow());
        }
        assert!(!*cell.borrow());
    }
}
