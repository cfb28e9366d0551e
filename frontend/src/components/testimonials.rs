use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;
use crate::content::TESTIMONIALS;
use crate::state::carousel::{Carousel, CarouselAction};
use crate::state::section::Section;

fn now_ms() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default()
}

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub node: NodeRef,
    pub visible: bool,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = use_reducer(|| {
        Carousel::new(
            TESTIMONIALS.len(),
            u64::from(config::CAROUSEL_INTERVAL_MS),
            now_ms(),
        )
    });

    // One pending timer at a time: a new deadline drops the old Timeout,
    // and so does unmounting.
    {
        let deadline = carousel.deadline();
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |deadline: &u64| {
                let armed_for = *deadline;
                let delay = carousel.delay_from(now_ms());
                let timeout = Timeout::new(delay, move || {
                    carousel.dispatch(CarouselAction::Tick {
                        armed_for,
                        at: now_ms(),
                    });
                });
                move || drop(timeout)
            },
            deadline,
        );
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev { at: now_ms() }))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next { at: now_ms() }))
    };

    let current = TESTIMONIALS.get(carousel.index());

    html! {
        <section
            ref={props.node.clone()}
            class={classes!("page-section", "fade-in", props.visible.then_some("fade-in-visible"))}
            data-section={Section::Testimonials.name()}
        >
            <div class="container">
                <h2 class="section-title glowing-text">{"What Students Say"}</h2>
                <div class="testimonial-card glass-card">
                    <button class="carousel-arrow carousel-prev" onclick={prev}>{"←"}</button>
                    if let Some(testimonial) = current {
                        <div class="testimonial-body">
                            <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                            <p class="testimonial-author">{format!("— {}", testimonial.author)}</p>
                        </div>
                    }
                    <button class="carousel-arrow carousel-next" onclick={next}>{"→"}</button>
                    <div class="carousel-dots">
                        { for (0..carousel.len()).map(|i| html! {
                            <span key={i} class={classes!("carousel-dot", (i == carousel.index()).then_some("active"))}></span>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
