use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::MOBILE_BREAKPOINT_PX;

pub fn is_narrow(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

/// True while the window is narrower than the mobile breakpoint. Only used to
/// skip entry animations.
#[hook]
pub fn use_is_mobile() -> bool {
    let (width, _height) = use_window_size();
    is_narrow(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(is_narrow(375.0));
        assert!(is_narrow(767.9));
        assert!(!is_narrow(768.0));
        assert!(!is_narrow(1440.0));
    }
}
