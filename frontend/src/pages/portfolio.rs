use yew::prelude::*;

use crate::components::filter_bar::FilterBar;
use crate::components::lightbox::Lightbox;
use crate::gallery::dataset::{CategoryTag, Gallery, PortfolioCategory};
use crate::gallery::keyboard::NavKey;
use crate::gallery::view::{GalleryAction, GalleryView};
use crate::viewport::use_is_mobile;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let view = use_reducer(|| GalleryView::new(Gallery::<PortfolioCategory>::portfolio()));
    let is_mobile = use_is_mobile();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let dispatcher = view.dispatcher();
    let on_select = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |tag: PortfolioCategory| dispatcher.dispatch(GalleryAction::SelectCategory(tag)))
    };
    let action = |action: GalleryAction<PortfolioCategory>| {
        let dispatcher = dispatcher.clone();
        Callback::from(move |_: ()| dispatcher.dispatch(action))
    };
    let on_key = {
        let dispatcher = dispatcher.clone();
        Callback::from(move |key: NavKey| dispatcher.dispatch(key.into()))
    };

    let visible = view.visible_images();

    let grid = if visible.is_empty() {
        html! {
            <div class="portfolio-empty">
                <p class="portfolio-empty-title">{"Coming soon..."}</p>
                <p class="portfolio-empty-body">{"Photos for this category will be added shortly"}</p>
            </div>
        }
    } else {
        html! {
            // Keyed on the filter so the grid fades in again after a switch.
            <div key={view.filter().label()} class="portfolio-grid">
                {
                    for visible.iter().enumerate().map(|(index, image)| {
                        let dispatcher = dispatcher.clone();
                        let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(GalleryAction::Activate(index)));
                        let style = if is_mobile {
                            String::new()
                        } else {
                            format!("animation-delay: {}ms;", 100 + index * 80)
                        };
                        html! {
                            <div key={image.source.clone()} class={classes!("portfolio-item", (!is_mobile).then(|| "rise-in"))} {style}>
                                <button class="portfolio-thumb" aria-label={format!("Open {}", image.alt_text)} {onclick}>
                                    <img
                                        src={image.source.clone()}
                                        alt={image.alt_text.clone()}
                                        width={image.width.to_string()}
                                        height={image.height.to_string()}
                                        loading="lazy"
                                    />
                                    <span class="portfolio-thumb-overlay"></span>
                                    <span class="portfolio-thumb-zoom">{"+"}</span>
                                </button>
                            </div>
                        }
                    })
                }
            </div>
        }
    };

    let lightbox = match (view.current_image(), view.counter_label()) {
        (Some(image), Some(counter)) => html! {
            <Lightbox
                src={image.source.clone()}
                alt={image.alt_text.clone()}
                {counter}
                on_close={action(GalleryAction::Dismiss)}
                on_previous={action(GalleryAction::Previous)}
                on_next={action(GalleryAction::Next)}
                {on_key}
            />
        },
        _ => html! {},
    };

    html! {
        <>
            <main class="portfolio-page" aria-hidden={view.lightbox().is_open().to_string()}>
                <div class="portfolio-inner">
                    <FilterBar<PortfolioCategory> active={view.filter()} {on_select} />
                    {grid}
                </div>
            </main>
            {lightbox}
            <style>
                {r#"
                .portfolio-page {
                    min-height: 100vh;
                    padding: 8rem 0 5rem;
                    background-color: #FAFBFC;
                }
                .portfolio-inner {
                    max-width: 1400px;
                    margin: 0 auto;
                    padding: 0 3rem;
                }
                .portfolio-grid {
                    columns: 4;
                    column-gap: 1rem;
                    animation: portfolioFade 0.3s ease-out;
                }
                @keyframes portfolioFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .portfolio-item {
                    break-inside: avoid;
                    margin-bottom: 1rem;
                }
                .rise-in {
                    animation: riseIn 0.6s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                @keyframes riseIn {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .portfolio-thumb {
                    position: relative;
                    display: block;
                    width: 100%;
                    padding: 0;
                    border: none;
                    border-radius: 8px;
                    overflow: hidden;
                    cursor: pointer;
                    background: none;
                }
                .portfolio-thumb img {
                    display: block;
                    width: 100%;
                    height: auto;
                    object-fit: cover;
                    transition: transform 0.5s ease-out;
                }
                .portfolio-thumb:hover img {
                    transform: scale(1.05);
                }
                .portfolio-thumb-overlay {
                    position: absolute;
                    inset: 0;
                    background: #000000;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .portfolio-thumb:hover .portfolio-thumb-overlay {
                    opacity: 0.5;
                }
                .portfolio-thumb-zoom {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 56px;
                    height: 56px;
                    line-height: 56px;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.95);
                    color: #1A2B3C;
                    font-size: 1.5rem;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .portfolio-thumb:hover .portfolio-thumb-zoom {
                    opacity: 1;
                }
                .portfolio-empty {
                    padding: 5rem 0;
                    text-align: center;
                    color: #8899A6;
                }
                .portfolio-empty-title {
                    font-family: 'Libre Baskerville', serif;
                    font-size: 1.25rem;
                    font-style: italic;
                }
                .portfolio-empty-body {
                    font-size: 0.9375rem;
                    margin-top: 0.5rem;
                }
                @media (max-width: 1280px) {
                    .portfolio-grid {
                        columns: 3;
                    }
                }
                @media (max-width: 1024px) {
                    .portfolio-grid {
                        columns: 2;
                        column-gap: 0.5rem;
                    }
                }
                @media (max-width: 768px) {
                    .portfolio-page {
                        padding: 6rem 0 4rem;
                    }
                    .portfolio-inner {
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
        </>
    }
}
