use std::rc::Rc;

use log::debug;
use web_sys::TouchEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{SWIPE_THRESHOLD_PX, TESTIMONIAL_ROTATE_MS};
use crate::gallery::lightbox::{wrap_back, wrap_forward};
use crate::viewport::use_is_mobile;

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub location: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Israel captured our wedding day better than we could have ever imagined. Every photo tells a story, every moment preserved perfectly.",
        name: "Sarah & Michael",
        role: "Wedding",
        location: "Vancouver, BC",
    },
    Testimonial {
        quote: "Working with Israel at our corporate event was seamless. He blended into the crowd and captured genuine interactions we didn't even know were happening.",
        name: "Jennifer Chen",
        role: "Marketing Director",
        location: "Tech Summit 2024",
    },
    Testimonial {
        quote: "The energy Israel brings to a shoot is unmatched. He made everyone feel comfortable, and the photos reflect that authenticity.",
        name: "Marcus Williams",
        role: "Festival Organizer",
        location: "Vancouver Folk Festival",
    },
    Testimonial {
        quote: "Israel's sports photography is on another level. He captures the intensity, the emotion, the split-second moments that define the game.",
        name: "Coach David Park",
        role: "Athletics Director",
        location: "UBC Thunderbirds",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    /// Timer tick. Ignored once the visitor has taken over.
    Tick,
    Next,
    Previous,
    GoTo(usize),
    Swipe(i32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, autoplay: len > 1 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn apply(&mut self, action: CarouselAction) {
        if self.len == 0 {
            return;
        }
        match action {
            CarouselAction::Tick => {
                if self.autoplay {
                    self.index = wrap_forward(self.index, self.len);
                }
            }
            CarouselAction::Next => self.take_over(wrap_forward(self.index, self.len)),
            CarouselAction::Previous => self.take_over(wrap_back(self.index, self.len)),
            CarouselAction::GoTo(i) if i < self.len => self.take_over(i),
            CarouselAction::GoTo(_) => {}
            CarouselAction::Swipe(dx) => {
                let dx = f64::from(dx);
                if dx > SWIPE_THRESHOLD_PX {
                    self.take_over(wrap_back(self.index, self.len));
                } else if dx < -SWIPE_THRESHOLD_PX {
                    self.take_over(wrap_forward(self.index, self.len));
                }
            }
        }
    }

    fn take_over(&mut self, index: usize) {
        self.index = index;
        self.autoplay = false;
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        debug!("Carousel {:?} -> {}", action, next.index);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));
    let touch_start = use_mut_ref(|| None::<i32>);
    let is_mobile = use_is_mobile();

    // A zero period stops the interval, which is how manual navigation
    // cancels autoplay.
    {
        let carousel = carousel.clone();
        let period = if carousel.autoplay() { TESTIMONIAL_ROTATE_MS } else { 0 };
        use_interval(move || carousel.dispatch(CarouselAction::Tick), period);
    }

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Previous))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let on_touch_start = {
        let touch_start = touch_start.clone();
        Callback::from(move |e: TouchEvent| {
            *touch_start.borrow_mut() = e.touches().get(0).map(|t| t.client_x());
        })
    };
    let on_touch_end = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            let start = touch_start.borrow_mut().take();
            let end = e.changed_touches().get(0).map(|t| t.client_x());
            if let (Some(start), Some(end)) = (start, end) {
                carousel.dispatch(CarouselAction::Swipe(end - start));
            }
        })
    };

    let active_index = carousel.index();
    let active = &TESTIMONIALS[active_index];

    html! {
        <section class={classes!("testimonials", (!is_mobile).then(|| "reveal"))}>
            <div class="testimonials-inner">
                <span class="section-label">{"Kind Words"}</span>
                <div class="testimonial-stage" ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                    <blockquote key={active_index} class="testimonial-quote fade-in">
                        <p>{format!("\u{201c}{}\u{201d}", active.quote)}</p>
                        <footer>
                            <span class="testimonial-name">{active.name}</span>
                            <span class="testimonial-role">{format!("{} · {}", active.role, active.location)}</span>
                        </footer>
                    </blockquote>
                </div>
                <div class="testimonial-controls">
                    <button class="testimonial-arrow" aria-label="Previous testimonial" onclick={on_prev}>{"←"}</button>
                    <div class="testimonial-dots">
                        {
                            for (0..TESTIMONIALS.len()).map(|i| {
                                let carousel = carousel.clone();
                                let onclick = Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(i)));
                                html! {
                                    <button
                                        class={classes!("testimonial-dot", (i == active_index).then(|| "active"))}
                                        aria-label={format!("Show testimonial {}", i + 1)}
                                        {onclick}
                                    />
                                }
                            })
                        }
                    </div>
                    <button class="testimonial-arrow" aria-label="Next testimonial" onclick={on_next}>{"→"}</button>
                </div>
            </div>
            <style>
                {r#"
                .testimonials {
                    background: #F5F7F5;
                    padding: 6rem 1.5rem;
                    overflow: hidden;
                }
                .testimonials-inner {
                    max-width: 900px;
                    margin: 0 auto;
                    text-align: center;
                }
                .testimonial-stage {
                    min-height: 16rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    touch-action: pan-y;
                }
                .testimonial-quote p {
                    font-family: 'Libre Baskerville', serif;
                    font-size: clamp(1.25rem, 2.5vw, 1.75rem);
                    line-height: 1.6;
                    color: #1A2B3C;
                }
                .testimonial-quote footer {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                }
                .testimonial-name {
                    font-weight: 600;
                    color: #1A2B3C;
                }
                .testimonial-role {
                    font-size: 0.875rem;
                    color: #8899A6;
                }
                .testimonial-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .testimonial-arrow {
                    background: none;
                    border: 1px solid #E2E8F0;
                    border-radius: 50%;
                    width: 44px;
                    height: 44px;
                    cursor: pointer;
                    color: #1A2B3C;
                }
                .testimonial-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .testimonial-dot {
                    width: 2rem;
                    height: 2px;
                    border: none;
                    background: #E2E8F0;
                    cursor: pointer;
                    padding: 0;
                }
                .testimonial-dot.active {
                    background: #6B9080;
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
    fn ticks_rotate_and_wrap() {
        let mut c = Carousel::new(3);
        c.apply(CarouselAction::Tick);
        c.apply(CarouselAction::Tick);
        assert_eq!(c.index(), 2);
        c.apply(CarouselAction::Tick);
        assert_eq!(c.index(), 0);
        assert!(c.autoplay());
    }

    #[test]
    fn manual_navigation_stops_autoplay() {
        let mut c = Carousel::new(4);
        c.apply(CarouselAction::Previous);
        assert_eq!(c.index(), 3);
        assert!(!c.autoplay());
        c.apply(CarouselAction::Tick);
        assert_eq!(c.index(), 3);
    }

    #[test]
    fn dots_jump_and_ignore_out_of_range() {
        let mut c = Carousel::new(4);
        c.apply(CarouselAction::GoTo(2));
        assert_eq!(c.index(), 2);
        c.apply(CarouselAction::GoTo(9));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn short_swipes_are_ignored() {
        let mut c = Carousel::new(4);
        c.apply(CarouselAction::Swipe(30));
        c.apply(CarouselAction::Swipe(-50));
        assert_eq!(c.index(), 0);
        assert!(c.autoplay());
    }

    #[test]
    fn swipe_right_goes_back_and_left_goes_forward() {
        let mut c = Carousel::new(4);
        c.apply(CarouselAction::Swipe(80));
        assert_eq!(c.index(), 3);
        c.apply(CarouselAction::Swipe(-80));
        assert_eq!(c.index(), 0);
        assert!(!c.autoplay());
    }

    #[test]
    fn single_or_empty_carousel_never_autoplays() {
        assert!(!Carousel::new(1).autoplay());
        let mut empty = Carousel::new(0);
        empty.apply(CarouselAction::Next);
        assert_eq!(empty.index(), 0);
    }

    #[test]
    fn every_testimonial_is_filled_in() {
        assert!(TESTIMONIALS.len() > 1);
        for t in TESTIMONIALS {
            assert!(!t.quote.is_empty() && !t.name.is_empty());
        }
    }
}
