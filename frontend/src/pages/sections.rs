//! Static sections of the landing page. Each takes its element handle and
//! reveal flag from the page; call-to-action buttons report back through
//! `on_join`.

use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{avatar_icon, schedule_icon};
use crate::config;
use crate::content::{self, BRAND, MENTOR, PLANS, RESOURCES, SCHEDULE, TRIAL_NOTE};
use crate::state::section::Section;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub node: NodeRef,
    pub visible: bool,
    #[prop_or_default]
    pub on_join: Callback<()>,
}

fn reveal_class(visible: bool) -> Classes {
    classes!("fade-in", visible.then_some("fade-in-visible"))
}

fn join_click(on_join: &Callback<()>) -> Callback<MouseEvent> {
    let on_join = on_join.clone();
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        on_join.emit(());
    })
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    html! {
        <section ref={props.node.clone()} class="hero" data-section={Section::Home.name()}>
            <div class={reveal_class(props.visible)}>
                <h1 class="hero-kicker glowing-text">{"Geology Mentorship"}</h1>
                <h2 class="hero-title">{"Get Set Ready to Rock the World!"}</h2>
                <p class="hero-subtitle">
                    {"Guiding UG/PG Geology students for CSIR-NET, GATE, IIT JAM & more."}
                </p>
                <button class="cta-button glow-button" onclick={join_click(&props.on_join)}>
                    {"Join Now"}
                </button>
            </div>
        </section>
    }
}

#[function_component(AboutMentor)]
pub fn about_mentor(props: &SectionProps) -> Html {
    html! {
        <section
            ref={props.node.clone()}
            class={classes!("page-section", reveal_class(props.visible))}
            data-section={Section::About.name()}
        >
            <div class="container">
                <h2 class="section-title glowing-text">{"Meet Your Mentor"}</h2>
                <div class="mentor-card glass-card">
                    <div class="avatar-ring">
                        <div class="avatar">{avatar_icon()}</div>
                    </div>
                    <div class="mentor-text">
                        <h3 class="mentor-name">{MENTOR.name}</h3>
                        <p class="mentor-credentials">{MENTOR.credentials}</p>
                        <p class="mentor-bio">{MENTOR.bio}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(MembershipPlans)]
pub fn membership_plans(props: &SectionProps) -> Html {
    html! {
        <section
            ref={props.node.clone()}
            class={classes!("page-section", reveal_class(props.visible))}
            data-section={Section::Plans.name()}
        >
            <div class="container">
                <h2 class="section-title glowing-text">{"Membership Plans"}</h2>
                <div class="plan-grid">
                    { for PLANS.iter().map(|card| html! {
                        <div key={card.plan.label()} class="plan-card glass-card">
                            <h3 class={classes!("plan-name", card.accent)}>{card.plan.label()}</h3>
                            <p class="plan-price">{card.price}</p>
                            <ul class="plan-features">
                                { for card.features.iter().map(|feature| html! {
                                    <li key={*feature}>{*feature}</li>
                                }) }
                            </ul>
                            <p class="plan-continuation">{card.continuation}</p>
                            <button class="enroll-button glow-button" onclick={join_click(&props.on_join)}>
                                {"Enroll Now"}
                            </button>
                        </div>
                    }) }
                </div>
                <div class="trial-note glass-card">{TRIAL_NOTE}</div>
            </div>
        </section>
    }
}

#[function_component(BatchSchedule)]
pub fn batch_schedule(props: &SectionProps) -> Html {
    html! {
        <section
            ref={props.node.clone()}
            class={classes!("page-section", reveal_class(props.visible))}
            data-section={Section::Schedule.name()}
        >
            <div class="container">
                <h2 class="section-title glowing-text">{"Batch Schedule"}</h2>
                <div class="schedule-card glass-card">
                    { for SCHEDULE.iter().map(|item| html! {
                        <div key={item.title} class="schedule-item">
                            {schedule_icon(item.icon)}
                            <h3>{item.title}</h3>
                            <p class="schedule-headline">{item.headline}</p>
                            <p class="schedule-detail">{item.detail}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(StudyResources)]
pub fn study_resources(props: &SectionProps) -> Html {
    html! {
        <section
            ref={props.node.clone()}
            class={classes!("page-section", reveal_class(props.visible))}
            data-section={Section::Resources.name()}
        >
            <div class="container">
                <h2 class="section-title glowing-text">{"Study Resources"}</h2>
                <div class="resource-grid">
                    { for RESOURCES.iter().map(|resource| html! {
                        <div key={*resource} class="resource-card glass-card">
                            <h3>{*resource}</h3>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode(content::WHATSAPP_GREETING)
    )
}

#[function_component(ContactSection)]
pub fn contact_section(props: &SectionProps) -> Html {
    html! {
        <section
            ref={props.node.clone()}
            class={classes!("page-section", reveal_class(props.visible))}
            data-section={Section::Contact.name()}
        >
            <div class="container">
                <h2 class="section-title glowing-text">{"Get In Touch"}</h2>
                <div class="contact-card glass-card">
                    <p>{"Have questions? Feel free to reach out directly."}</p>
                    <div class="contact-links">
                        <a href={whatsapp_link()} target="_blank" rel="noopener noreferrer" class="contact-link glass-card">
                            <span class="contact-whatsapp">{"WhatsApp"}</span>
                            {&config::WHATSAPP_NUMBER[2..]}
                        </a>
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)} class="contact-link glass-card">
                            <span class="contact-email">{"Email"}</span>
                            {config::CONTACT_EMAIL}
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();
    html! {
        <footer class="site-footer">
            <p>{format!("© {year} {BRAND} Mentorship | Designed with ❤️ for Geology Students 💎")}</p>
        </footer>
    }
}
