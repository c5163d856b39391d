use yew::prelude::*;

use crate::components::category_cards::CategoryCards;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::intro::Intro;
use crate::components::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
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

    html! {
        <>
            <Hero />
            <CategoryCards />
            <Intro />
            <Testimonials />
            <Contact />
            <Footer />
            <style>
                {r#"
                .reveal {
                    animation: revealUp 0.8s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                @keyframes revealUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .section-label {
                    display: block;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #6B9080;
                    margin-bottom: 2rem;
                }
                "#}
            </style>
        </>
    }
}
