use log::warn;
use yew::prelude::*;

use crate::config;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: &'static str,
    pub path: &'static str,
}

impl PageMeta {
    pub fn for_route(route: &Route) -> Self {
        let (page, description, path) = match route {
            Route::Home => (
                None,
                "Hey, I'm Israel. A Vancouver-based photographer capturing authentic moments in sports, community events, and everyday life. Let's create something real together.",
                "/",
            ),
            Route::Services => (
                Some("Services"),
                "Wedding, festival, sports and corporate photography in Vancouver. Full-day coverage, candid moments and polished portraits.",
                "/services",
            ),
            Route::Portfolio => (
                Some("Portfolio"),
                "Selected work by Israel Njagih: sports, events, portraits and lifestyle photography from Vancouver.",
                "/portfolio",
            ),
            Route::NotFound => (
                Some("Page not found"),
                "Capturing authentic moments in Vancouver. Sports, events, and the stories in between.",
                "/404",
            ),
        };
        let title = match page {
            Some(page) => format!("{} | {}", page, config::SITE_NAME),
            None => config::SITE_NAME.to_string(),
        };
        Self { title, description, path }
    }

    pub fn canonical_url(&self) -> String {
        format!("{}{}", config::get_site_url(), self.path)
    }

    /// `(selector, attribute, value)` for each head tag kept in sync.
    fn head_tags(&self) -> [(&'static str, &'static str, String); 4] {
        [
            ("meta[name=\"description\"]", "content", self.description.to_string()),
            ("meta[property=\"og:title\"]", "content", self.title.clone()),
            ("meta[property=\"og:url\"]", "content", self.canonical_url()),
            ("link[rel=\"canonical\"]", "href", self.canonical_url()),
        ]
    }

    fn apply(&self) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        document.set_title(&self.title);
        for (selector, attr, value) in self.head_tags() {
            match document.query_selector(selector) {
                Ok(Some(el)) => {
                    if let Err(e) = el.set_attribute(attr, &value) {
                        warn!("Failed to set {} on {}: {:?}", attr, selector, e);
                    }
                }
                _ => warn!("Missing {} in index.html", selector),
            }
        }
    }
}

/// Keeps the document head in sync with the rendered route.
#[hook]
pub fn use_page_meta(route: Route) {
    use_effect_with_deps(
        move |route| {
            PageMeta::for_route(route).apply();
            || ()
        },
        route,
    );
}
