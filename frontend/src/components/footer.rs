use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <div class="footer-brand">
                    <span class="footer-name">{config::STUDIO_NAME}</span>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </div>
                <ul class="footer-links">
                    <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>></li>
                    <li><Link<Route> to={Route::Services}>{"Services"}</Link<Route>></li>
                </ul>
                <ul class="footer-links">
                    <li><a href="/services#weddings">{"Weddings"}</a></li>
                    <li><a href="/services#festivals-sports">{"Festivals & Sports"}</a></li>
                    <li><a href="/services#corporate">{"Corporate"}</a></li>
                </ul>
                <div class="footer-social">
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer" aria-label="Instagram">
                        {config::INSTAGRAM_HANDLE}
                    </a>
                </div>
            </div>
            <p class="footer-copy">{format!("© {} {}. All rights reserved.", year, config::STUDIO_NAME)}</p>
            <style>
                {r#"
                .site-footer {
                    background: #0F1A24;
                    color: #A8C5DA;
                    padding: 4rem 1.5rem 2rem;
                }
                .footer-inner {
                    max-width: 1400px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-brand {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-name {
                    color: #FAFBFC;
                    font-family: 'Libre Baskerville', serif;
                    font-size: 1.5rem;
                }
                .site-footer a {
                    color: inherit;
                    text-decoration: none;
                }
                .site-footer a:hover {
                    color: #FAFBFC;
                }
                .footer-links {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-copy {
                    max-width: 1400px;
                    margin: 3rem auto 0;
                    font-size: 0.75rem;
                    opacity: 0.6;
                }
                @media (max-width: 768px) {
                    .footer-inner {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
