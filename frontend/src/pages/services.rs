use yew::prelude::*;

use crate::components::contact::{mailto_link, Contact};
use crate::components::footer::Footer;
use crate::config;
use crate::viewport::use_is_mobile;

pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub image: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "weddings",
        title: "Weddings",
        subtitle: "Your love story, beautifully told",
        description: "Your wedding day is one of the most meaningful moments of your life. I capture the stolen glances, happy tears, and spontaneous laughter that make your day uniquely yours.",
        features: &[
            "Full wedding day coverage",
            "Engagement sessions",
            "Documentary-style candid moments",
            "Guided couple & family portraits",
            "Ceremony & reception coverage",
            "Detail & atmosphere shots",
            "Online gallery for viewing & downloads",
        ],
        image: "/israel1.jpg",
        accent: "#6B9080",
    },
    Service {
        id: "festivals-sports",
        title: "Festivals & Sports",
        subtitle: "Energy captured in motion",
        description: "From the roar of the crowd to the split-second victory, I specialize in capturing the raw energy and emotion of live events through my lens.",
        features: &[
            "Full event-day coverage",
            "Action & candid photography",
            "Crowd & atmosphere shots",
            "Key moments & highlights",
            "Performer / athlete coverage",
            "Team & group photos",
            "Social-media-ready images",
        ],
        image: "/israel2.jpg",
        accent: "#7C9CB5",
    },
    Service {
        id: "corporate",
        title: "Corporate",
        subtitle: "Professional imagery that elevates your brand",
        description: "First impressions matter. I help businesses present their best selves through polished headshots and event coverage that reflects your company's culture.",
        features: &[
            "Corporate event coverage",
            "Conferences & networking events",
            "Professional headshots (individual & teams)",
            "Executive & leadership portraits",
            "Brand & workplace lifestyle imagery",
            "Speaker, panel & awards coverage",
            "Office & workspace photography",
            "Images for websites, marketing & social media",
        ],
        image: "/isreal3.jpg",
        accent: "#6B9080",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let is_mobile = use_is_mobile();

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
            <main class="services-page">
                <section class="services-hero">
                    <h1>{"Services"}</h1>
                    <p>{"Weddings, festivals, sports and corporate work across Vancouver."}</p>
                </section>
                {
                    for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <section
                            id={service.id}
                            class={classes!("service", (i % 2 == 1).then(|| "service-flipped"), (!is_mobile).then(|| "reveal"))}
                        >
                            <div class="service-image">
                                <img src={service.image} alt={service.title} loading="lazy" />
                            </div>
                            <div class="service-body">
                                <h2>{service.title}</h2>
                                <p class="service-subtitle" style={format!("color: {};", service.accent)}>{service.subtitle}</p>
                                <p class="service-description">{service.description}</p>
                                <ul class="service-features">
                                    { for service.features.iter().map(|f| html! { <li>{*f}</li> }) }
                                </ul>
                                <a
                                    class="service-inquire"
                                    href={mailto_link(config::CONTACT_EMAIL, &format!("{} inquiry", service.title))}
                                >
                                    {format!("Inquire about {}", service.title.to_lowercase())}
                                </a>
                            </div>
                        </section>
                    })
                }
            </main>
            <Contact />
            <Footer />
            <style>
                {r#"
                .services-page {
                    background: #FAFBFC;
                    color: #1A2B3C;
                    padding-top: 8rem;
                }
                .services-hero {
                    text-align: center;
                    padding: 2rem 1.5rem 4rem;
                }
                .services-hero h1 {
                    font-family: 'Libre Baskerville', serif;
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin: 0;
                }
                .services-hero p {
                    color: #4A5568;
                    margin-top: 1rem;
                }
                .service {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 1.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                    align-items: center;
                }
                .service-flipped .service-image {
                    order: 2;
                }
                .service-image img {
                    width: 100%;
                    aspect-ratio: 4 / 5;
                    object-fit: cover;
                    border-radius: 8px;
                }
                .service-body h2 {
                    font-family: 'Libre Baskerville', serif;
                    font-size: 2.25rem;
                    margin: 0;
                }
                .service-subtitle {
                    font-style: italic;
                    margin-top: 0.5rem;
                }
                .service-description {
                    color: #4A5568;
                    line-height: 1.7;
                }
                .service-features {
                    padding-left: 1.25rem;
                    color: #4A5568;
                    line-height: 1.9;
                }
                .service-inquire {
                    display: inline-block;
                    margin-top: 1.5rem;
                    color: #1A2B3C;
                    border-bottom: 1px solid #6B9080;
                    text-decoration: none;
                    padding-bottom: 0.25rem;
                }
                .reveal {
                    animation: revealUp 0.8s cubic-bezier(0.16, 1, 0.3, 1) both;
                }
                @keyframes revealUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @media (max-width: 768px) {
                    .service {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                    .service-flipped .service-image {
                        order: 0;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_match_footer_links() {
        let ids: Vec<&str> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["weddings", "festivals-sports", "corporate"]);
    }

    #[test]
    fn every_service_lists_features() {
        for service in SERVICES {
            assert!(!service.features.is_empty(), "{}", service.title);
            assert!(service.accent.starts_with('#'));
        }
    }
}
