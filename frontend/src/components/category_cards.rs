use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::viewport::use_is_mobile;
use crate::Route;

enum CardTarget {
    Page(Route),
    External(&'static str),
    Anchor(&'static str),
}

struct Card {
    title: &'static str,
    image: &'static str,
    target: CardTarget,
}

fn cards() -> [Card; 4] {
    [
        Card { title: "View Portfolio", image: "/israel2.jpg", target: CardTarget::Page(Route::Portfolio) },
        Card { title: "Instagram", image: "/israel1.jpg", target: CardTarget::External(config::INSTAGRAM_URL) },
        Card { title: "Services", image: "/isreal3.jpg", target: CardTarget::Page(Route::Services) },
        Card { title: "Get in Touch", image: "/isreal4.jpg", target: CardTarget::Anchor("#contact") },
    ]
}

#[function_component(CategoryCards)]
pub fn category_cards() -> Html {
    let is_mobile = use_is_mobile();

    html! {
        <section id="work" class="category-cards">
            <div class="category-cards-grid">
                {
                    for cards().into_iter().enumerate().map(|(i, card)| {
                        let body = html! {
                            <>
                                <img src={card.image} alt={card.title} loading="lazy" />
                                <span class="category-card-title">{card.title}</span>
                            </>
                        };
                        let style = if is_mobile {
                            String::new()
                        } else {
                            format!("animation-delay: {}ms;", 100 + i * 80)
                        };
                        let class = classes!("category-card", (!is_mobile).then(|| "reveal"));
                        match card.target {
                            CardTarget::Page(route) => html! {
                                <div {class} {style}>
                                    <Link<Route> to={route}>{body}</Link<Route>>
                                </div>
                            },
                            CardTarget::External(href) => html! {
                                <div {class} {style}>
                                    <a {href} target="_blank" rel="noopener noreferrer">{body}</a>
                                </div>
                            },
                            CardTarget::Anchor(href) => html! {
                                <div {class} {style}>
                                    <a {href}>{body}</a>
                                </div>
                            },
                        }
                    })
                }
            </div>
            <style>
                {r#"
                .category-cards {
                    background: #1A2B3C;
                    padding: 4rem 1.5rem;
                }
                .category-cards-grid {
                    max-width: 1400px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }
                .category-card a {
                    position: relative;
                    display: block;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border-radius: 8px;
                }
                .category-card img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease-out;
                }
                .category-card a:hover img {
                    transform: scale(1.05);
                }
                .category-card-title {
                    position: absolute;
                    left: 1rem;
                    bottom: 1rem;
                    color: #FFFFFF;
                    font-size: 1.1rem;
                    letter-spacing: 0.04em;
                }
                @media (max-width: 768px) {
                    .category-cards-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
