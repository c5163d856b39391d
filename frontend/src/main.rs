use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod scroll_lock;
mod seo;
mod viewport;
mod gallery {
    pub mod dataset;
    pub mod keyboard;
    pub mod lightbox;
    pub mod view;
}
mod components {
    pub mod category_cards;
    pub mod contact;
    pub mod filter_bar;
    pub mod footer;
    pub mod hero;
    pub mod intro;
    pub mod lightbox;
    pub mod testimonials;
}
mod pages {
    pub mod home;
    pub mod portfolio;
    pub mod services;
}

use components::intro::about_href;
use gallery::keyboard::{KeydownListener, NavKey};
use pages::{
    home::Home,
    portfolio::Portfolio,
    services::Services,
};
use scroll_lock::ScrollLock;
use seo::use_page_meta;


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[not_found]
    #[at("/404")]
    NotFound,
}


#[derive(Properties, PartialEq)]
struct PageProps {
    route: Route,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    use_page_meta(props.route.clone());
    match props.route {
        Route::Home => html! { <Home /> },
        Route::Services => html! { <Services /> },
        Route::Portfolio => html! { <Portfolio /> },
        Route::NotFound => html! {
            <main class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page wandered out of frame."}</p>
                <Link<Route> to={Route::Home}>{"Back home"}</Link<Route>>
            </main>
        },
    }
}

fn switch(route: Route) -> Html {
    info!("Rendering {:?} page", route);
    html! { <Page {route} /> }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let route = use_route::<Route>();
    // Only the home page has a dark hero behind the nav.
    let over_hero = matches!(route, Some(Route::Home));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.clone().map(|window| {
                let callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_top = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_top > 100.0); // past the hero headline
                    }) as Box<dyn FnMut()>)
                };
                let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                callback
            });

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    let _ = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // While the menu covers the page, hold the page still and let Escape close it.
    {
        let is_open = *menu_open;
        let menu_open = menu_open.clone();
        use_effect_with_deps(move |open| {
            let guards = open.then(|| {
                let lock = ScrollLock::acquire();
                let listener = KeydownListener::attach(move |key| {
                    if key == NavKey::Escape {
                        menu_open.set(false);
                    }
                });
                (lock, listener)
            });
            move || drop(guards)
        }, is_open);
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled || !over_hero).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::STUDIO_NAME}
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Portfolio} classes="nav-link">
                            {"Portfolio"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <a href={about_href()} class="nav-link" onclick={close_menu.clone()}>
                        {"About"}
                    </a>
                    <a href="/#contact" class="nav-contact-button" onclick={close_menu.clone()}>
                        {"Get in touch"}
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 1000;
                    transition: background 0.3s, box-shadow 0.3s;
                }
                .top-nav.scrolled {
                    background: rgba(250, 251, 252, 0.92);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 1px 0 #E2E8F0;
                }
                .nav-content {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 1.25rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-family: 'Libre Baskerville', serif;
                    font-size: 1.25rem;
                    color: #FFFFFF;
                    text-decoration: none;
                }
                .top-nav.scrolled .nav-logo,
                .top-nav.scrolled .nav-link {
                    color: #1A2B3C;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    color: #FFFFFF;
                    text-decoration: none;
                    letter-spacing: 0.08em;
                    font-size: 0.875rem;
                }
                .nav-contact-button {
                    padding: 0.5rem 1.25rem;
                    border-radius: 999px;
                    background: #6B9080;
                    color: #FFFFFF;
                    text-decoration: none;
                    font-size: 0.875rem;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    z-index: 1001;
                }
                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #FFFFFF;
                    transition: transform 0.3s cubic-bezier(0.16, 1, 0.3, 1), opacity 0.2s;
                }
                .top-nav.scrolled .burger-menu span,
                .burger-menu.open span {
                    background: #1A2B3C;
                }
                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }
                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }
                .not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #FAFBFC;
                    color: #1A2B3C;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        position: fixed;
                        inset: 0;
                        flex-direction: column;
                        justify-content: center;
                        background: #FAFBFC;
                        transform: translateX(100%);
                        transition: transform 0.4s cubic-bezier(0.16, 1, 0.3, 1);
                    }
                    .nav-right.mobile-menu-open {
                        transform: translateX(0);
                    }
                    .nav-right .nav-link {
                        color: #1A2B3C;
                        font-size: 1.75rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
