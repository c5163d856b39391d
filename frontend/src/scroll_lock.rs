use std::cell::Cell;

use log::{debug, warn};

thread_local! {
    static HOLDERS: Cell<usize> = Cell::new(0);
}

/// Something whose scrolling can be switched off and back on.
pub trait ScrollSurface {
    fn set_locked(&self, locked: bool);
}

/// The page body. Locking sets `overflow: hidden`, unlocking clears it.
pub struct Body;

impl ScrollSurface for Body {
    fn set_locked(&self, locked: bool) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            warn!("No document body to {} scrolling on", if locked { "lock" } else { "unlock" });
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            warn!("Failed to update body overflow");
        }
    }
}

/// Holds background scrolling off until released or dropped.
///
/// Locks are counted per thread: the surface is only unlocked once the last
/// holder lets go, so the mobile menu and the lightbox can overlap.
pub struct ScrollLock<S: ScrollSurface = Body> {
    surface: S,
    held: bool,
}

impl ScrollLock<Body> {
    pub fn acquire() -> Self {
        Self::acquire_on(Body)
    }
}

impl<S: ScrollSurface> ScrollLock<S> {
    pub fn acquire_on(surface: S) -> Self {
        let holders = HOLDERS.with(|h| {
            h.set(h.get() + 1);
            h.get()
        });
        if holders == 1 {
            surface.set_locked(true);
        }
        debug!("Scroll lock acquired ({} holders)", holders);
        Self { surface, held: true }
    }

    #[cfg(test)]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Safe to call more than once; only the first call counts.
    pub fn release(&mut self) {
        if !self.held {
            return;
        }
        self.held = false;
        let holders = HOLDERS.with(|h| {
            h.set(h.get().saturating_sub(1));
            h.get()
        });
        if holders == 0 {
            self.surface.set_locked(false);
        }
        debug!("Scroll lock released ({} holders)", holders);
    }
}

impl<S: ScrollSurface> Drop for ScrollLock<S> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
pub fn active_locks() -> usize {
    HOLDERS.with(|h| h.get())
}
