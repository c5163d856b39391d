use log::warn;
use yew::prelude::*;

use crate::gallery::keyboard::{KeydownListener, NavKey};
use crate::scroll_lock::ScrollLock;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub src: String,
    pub alt: String,
    /// "3 / 9"
    pub counter: String,
    pub on_close: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
    pub on_key: Callback<NavKey>,
}

/// Full-screen overlay for one image. Mounted only while the lightbox is
/// open: it holds the body scroll lock and the arrow/escape key listener for
/// exactly that long.
#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    use_effect_with_deps(
        move |_| {
            let lock = ScrollLock::acquire();
            move || drop(lock)
        },
        (),
    );

    {
        let on_key = props.on_key.clone();
        use_effect_with_deps(
            move |on_key| {
                let on_key = on_key.clone();
                let listener = KeydownListener::attach(move |key| on_key.emit(key));
                if listener.is_none() {
                    warn!("Could not attach lightbox key listener");
                }
                move || drop(listener)
            },
            on_key,
        );
    }

    let on_backdrop = props.on_close.reform(|_: MouseEvent| ());
    let on_close = props.on_close.reform(|_: MouseEvent| ());
    let on_previous = props.on_previous.reform(|_: MouseEvent| ());
    let on_next = props.on_next.reform(|_: MouseEvent| ());

    html! {
        <div class="lightbox" role="dialog" aria-modal="true">
            <div class="lightbox-backdrop" onclick={on_backdrop}></div>
            <button class="lightbox-close" aria-label="Close lightbox" onclick={on_close}>{"✕"}</button>
            <button class="lightbox-nav lightbox-prev" aria-label="Previous image" onclick={on_previous}>{"‹"}</button>
            <button class="lightbox-nav lightbox-next" aria-label="Next image" onclick={on_next}>{"›"}</button>
            <div key={props.src.clone()} class="lightbox-image">
                <img src={props.src.clone()} alt={props.alt.clone()} />
            </div>
            <div class="lightbox-counter">{props.counter.clone()}</div>
            <style>
                {r#"
                .lightbox {
                    position: fixed;
                    inset: 0;
                    z-index: 200;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: lightboxFade 0.3s ease-out;
                }
                @keyframes lightboxFade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .lightbox-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(26, 43, 60, 0.95);
                }
                .lightbox-close,
                .lightbox-nav {
                    position: absolute;
                    z-index: 10;
                    width: 48px;
                    height: 48px;
                    border: none;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.1);
                    color: #FFFFFF;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .lightbox-close:hover,
                .lightbox-nav:hover {
                    background: rgba(255, 255, 255, 0.2);
                }
                .lightbox-close {
                    top: 1.5rem;
                    right: 1.5rem;
                }
                .lightbox-nav {
                    top: 50%;
                    transform: translateY(-50%);
                }
                .lightbox-prev {
                    left: 2rem;
                }
                .lightbox-next {
                    right: 2rem;
                }
                .lightbox-image {
                    position: relative;
                    z-index: 10;
                    max-width: 90vw;
                    max-height: 85vh;
                    animation: lightboxZoom 0.3s ease-out;
                }
                @keyframes lightboxZoom {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                .lightbox-image img {
                    max-width: 90vw;
                    max-height: 85vh;
                    width: auto;
                    border-radius: 8px;
                    object-fit: contain;
                }
                .lightbox-counter {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                    z-index: 10;
                }
                @media (max-width: 768px) {
                    .lightbox-close {
                        top: 1rem;
                        right: 1rem;
                        width: 40px;
                        height: 40px;
                    }
                    .lightbox-prev {
                        left: 0.5rem;
                    }
                    .lightbox-next {
                        right: 0.5rem;
                    }
                    .lightbox-image,
                    .lightbox-image img {
                        max-width: 92vw;
                        max-height: 80vh;
                    }
                }
                "#}
            </style>
        </div>
    }
}
