use yew::prelude::*;

use crate::config;
use crate::viewport::use_is_mobile;

#[function_component(Hero)]
pub fn hero() -> Html {
    let is_mobile = use_is_mobile();

    html! {
        <section class="hero">
            <img class="hero-bg" src="/hero-bg.jpg" alt="" />
            <div class="hero-shade"></div>
            <div class={classes!("hero-content", (!is_mobile).then(|| "hero-rise"))}>
                <h1 class="hero-title">{config::STUDIO_NAME}</h1>
                <p class="hero-subtitle">{"Vancouver Photographer | Sports, Events & Community"}</p>
            </div>
            <div class="hero-meta">
                <span>{"49.2827° N, 123.1207° W"}</span>
                <span class="hero-available">{"Available for bookings"}</span>
            </div>
            <a class="hero-scroll" href="#work">{"Scroll"}</a>
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100svh;
                    min-height: 600px;
                    width: 100%;
                    overflow: hidden;
                    color: #FFFFFF;
                }
                .hero-bg {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .hero-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(26, 43, 60, 0.2), rgba(26, 43, 60, 0.7));
                }
                .hero-content {
                    position: relative;
                    z-index: 1;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 0 1.5rem;
                }
                .hero-rise {
                    animation: heroRise 1.2s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                @keyframes heroRise {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .hero-title {
                    font-family: 'Libre Baskerville', serif;
                    font-size: clamp(2.5rem, 8vw, 6rem);
                    margin: 0;
                }
                .hero-subtitle {
                    margin-top: 1rem;
                    letter-spacing: 0.12em;
                    text-transform: uppercase;
                    font-size: 0.8rem;
                }
                .hero-meta {
                    position: absolute;
                    bottom: 2rem;
                    left: 2rem;
                    right: 2rem;
                    display: flex;
                    justify-content: space-between;
                    font-size: 0.75rem;
                    opacity: 0.8;
                    z-index: 1;
                }
                .hero-available::before {
                    content: '';
                    display: inline-block;
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #6B9080;
                    margin-right: 0.5rem;
                }
                .hero-scroll {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: #FFFFFF;
                    text-decoration: none;
                    font-size: 0.7rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    z-index: 1;
                }
                @media (max-width: 768px) {
                    .hero-meta {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
