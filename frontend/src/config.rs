
#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://njagihstudios.com"
}

pub const SITE_NAME: &str = "Israel Njagih | Vancouver Photographer";
pub const STUDIO_NAME: &str = "Njagih Studios";

pub const CONTACT_EMAIL: &str = "israel.njagih@gmail.com";
pub const INSTAGRAM_URL: &str = "https://instagram.com/njagih_studios";
pub const INSTAGRAM_HANDLE: &str = "@njagih_studios";

// Viewports narrower than this skip entry animations.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const TESTIMONIAL_ROTATE_MS: u32 = 6_000;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const COPIED_TOAST_MS: u32 = 2_000;
pub const CLOCK_TICK_MS: u32 = 1_000;
