use std::cell::RefCell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(NavKey::Escape),
            "ArrowLeft" | "Left" => Some(NavKey::ArrowLeft),
            "ArrowRight" | "Right" => Some(NavKey::ArrowRight),
            _ => None,
        }
    }
}

/// Attached listeners, oldest first. Only the newest one handles keys, so
/// a lightbox opened over the mobile menu takes Escape for itself.
#[derive(Debug, Default)]
struct ListenerStack {
    next_id: u64,
    ids: Vec<u64>,
}

impl ListenerStack {
    fn push(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.ids.push(id);
        id
    }

    fn remove(&mut self, id: u64) {
        self.ids.retain(|&other| other != id);
    }

    fn is_topmost(&self, id: u64) -> bool {
        self.ids.last() == Some(&id)
    }
}

thread_local! {
    static LISTENERS: RefCell<ListenerStack> = RefCell::new(ListenerStack::default());
}

/// Window `keydown` listener that lives exactly as long as this value.
/// Dropping it detaches the callback.
pub struct KeydownListener {
    id: u64,
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeydownListener {
    pub fn attach<F>(on_key: F) -> Option<Self>
    where
        F: Fn(NavKey) + 'static,
    {
        let window = web_sys::window()?;
        let id = LISTENERS.with(|stack| stack.borrow_mut().push());
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if !LISTENERS.with(|stack| stack.borrow().is_topmost(id)) {
                return;
            }
            if let Some(key) = NavKey::from_key(&e.key()) {
                e.prevent_default();
                on_key(key);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .is_err()
        {
            LISTENERS.with(|stack| stack.borrow_mut().remove(id));
            return None;
        }

        Some(Self { id, window, callback })
    }
}

impl Drop for KeydownListener {
    fn drop(&mut self) {
        LISTENERS.with(|stack| stack.borrow_mut().remove(self.id));
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key("ArrowLeft"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key("ArrowRight"), Some(NavKey::ArrowRight));
    }

    #[test]
    fn accepts_legacy_key_names() {
        assert_eq!(NavKey::from_key("Esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key("Left"), Some(NavKey::ArrowLeft));
        assert_eq!(NavKey::from_key("Right"), Some(NavKey::ArrowRight));
    }

    #[test]
    fn ignores_other_keys() {
        for key in ["Enter", " ", "ArrowUp", "a", "escape", ""] {
            assert_eq!(NavKey::from_key(key), None, "{:?}", key);
        }
    }

    #[test]
    fn newest_listener_takes_keys_from_the_menu() {
        let mut stack = ListenerStack::default();
        let menu = stack.push();
        let lightbox = stack.push();
        assert!(stack.is_topmost(lightbox));
        assert!(!stack.is_topmost(menu));

        // Escape closes the lightbox; the menu gets the next press.
        stack.remove(lightbox);
        assert!(stack.is_topmost(menu));
        stack.remove(menu);
        assert!(!stack.is_topmost(menu));
    }

    #[test]
    fn dropping_a_buried_listener_leaves_the_top_alone() {
        let mut stack = ListenerStack::default();
        let lightbox = stack.push();
        let menu = stack.push();
        stack.remove(lightbox);
        assert!(stack.is_topmost(menu));

        let reopened = stack.push();
        assert_ne!(reopened, lightbox);
        assert!(stack.is_topmost(reopened));
    }
}
