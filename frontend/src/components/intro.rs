use yew::prelude::*;

use crate::viewport::use_is_mobile;

pub const ABOUT_ID: &str = "about";

const BIO: &[&str] = &[
    "I'm a Vancouver-based photographer specializing in sports, events, and community moments. My approach is simple: be present, stay curious, and let authentic moments unfold naturally.",
    "Whether it's the intensity of a game-winning play or the quiet joy of a community gathering, I'm here to capture the real story. No forced poses, just genuine connection.",
];

/// Nav target for the about section, from any page.
pub fn about_href() -> String {
    format!("/#{}", ABOUT_ID)
}

#[function_component(Intro)]
pub fn intro() -> Html {
    let is_mobile = use_is_mobile();
    let reveal = (!is_mobile).then(|| "reveal");

    html! {
        <section id={ABOUT_ID} class="intro">
            <div class="intro-inner">
                <p class={classes!("intro-quote", reveal)}>
                    {"\u{201C}I don't just take photos. "}
                    <em>{"I show up, bring good energy"}</em>
                    {", and somehow great shots just happen.\u{201D}"}
                </p>
                <div class="intro-grid">
                    <figure class={classes!("intro-portrait", reveal)}>
                        <img src="/israel.jpg" alt="Njagih Studios - Vancouver photographer" loading="lazy" />
                        <figcaption>{"Vancouver, BC"}</figcaption>
                    </figure>
                    <div class="intro-bio">
                        <span class="section-label">{"About Me"}</span>
                        <h2>{"Hey, I'm Israel Njagih."}</h2>
                        { for BIO.iter().map(|line| html! { <p class={classes!("intro-line", reveal)}>{*line}</p> }) }
                        <a class="intro-cta" href="#contact">{"Let's work together"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .intro {
                    background: #FAFBFC;
                    color: #1A2B3C;
                    padding: 8rem 1.5rem;
                }
                .intro-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .intro-quote {
                    font-family: 'Libre Baskerville', Georgia, serif;
                    font-size: clamp(1.5rem, 4.5vw, 3.5rem);
                    line-height: 1.3;
                    margin: 0 0 5rem;
                    max-width: 60rem;
                }
                .intro-quote em {
                    color: #6B9080;
                }
                .intro-grid {
                    display: grid;
                    grid-template-columns: 5fr 7fr;
                    gap: 4rem;
                    align-items: center;
                }
                .intro-portrait {
                    margin: 0;
                }
                .intro-portrait img {
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    border-radius: 8px;
                    box-shadow: 0 25px 50px -12px rgba(26, 43, 60, 0.15);
                }
                .intro-portrait figcaption {
                    margin-top: 1rem;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #8899A6;
                }
                .intro-bio h2 {
                    font-family: 'Libre Baskerville', serif;
                    font-size: clamp(1.75rem, 3vw, 2.5rem);
                    margin: 0 0 1.5rem;
                }
                .intro-line {
                    color: #4A5568;
                    line-height: 1.8;
                }
                .intro-cta {
                    display: inline-block;
                    margin-top: 2rem;
                    padding: 0.75rem 1.75rem;
                    border-radius: 999px;
                    background: #1A2B3C;
                    color: #FFFFFF;
                    text-decoration: none;
                }
                @media (max-width: 1024px) {
                    .intro {
                        padding: 5rem 1.5rem;
                    }
                    .intro-grid {
                        grid-template-columns: 1fr;
                        gap: 3rem;
                    }
                    .intro-portrait {
                        max-width: 24rem;
                        margin: 0 auto;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_link_lands_on_the_section() {
        assert_eq!(about_href(), "/#about");
        assert_eq!(&about_href()[2..], ABOUT_ID);
    }
}
