use yew::prelude::*;
use yew_hooks::use_timeout;

use crate::components::header::Header;
use crate::components::loader::CrystalLoader;
use crate::components::registration_form::Registration;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::pages::sections::{
    AboutMentor, BatchSchedule, ContactSection, Footer, Hero, MembershipPlans, StudyResources,
};
use crate::state::section::{Section, SectionRefs};
use crate::web::scroll::scroll_to_section;
use crate::web::viewport::use_reveal;

/// Page controller: owns the section handles and the loader flag, and hands
/// each section its handle, its reveal flag and a navigation callback.
#[function_component(Landing)]
pub fn landing() -> Html {
    let refs = use_memo(|_| SectionRefs::new(), ());
    let loading = use_state(|| true);

    {
        let loading = loading.clone();
        use_timeout(
            move || {
                log::info!("page ready");
                loading.set(false);
            },
            config::LOADER_DELAY_MS,
        );
    }

    let revealed = use_reveal((*refs).clone(), !*loading);

    let navigate = {
        let refs = refs.clone();
        Callback::from(move |section: Section| scroll_to_section(&refs, section))
    };
    let join = {
        let navigate = navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Section::Register))
    };

    if *loading {
        return html! { <CrystalLoader /> };
    }

    let node = |section: Section| refs.get(section);
    let visible = |section: Section| revealed.contains(&section);

    html! {
        <div class="landing-page">
            <style>{PAGE_STYLE}</style>
            <div class="crystal-bg"></div>

            <Header on_navigate={navigate} />

            <main class="page-main">
                <Hero node={node(Section::Home)} visible={visible(Section::Home)} on_join={join.clone()} />
                <AboutMentor node={node(Section::About)} visible={visible(Section::About)} />
                <MembershipPlans node={node(Section::Plans)} visible={visible(Section::Plans)} on_join={join} />
                <BatchSchedule node={node(Section::Schedule)} visible={visible(Section::Schedule)} />
                <StudyResources node={node(Section::Resources)} visible={visible(Section::Resources)} />
                <Testimonials node={node(Section::Testimonials)} visible={visible(Section::Testimonials)} />
                <Registration node={node(Section::Register)} visible={visible(Section::Register)} />
                <ContactSection node={node(Section::Contact)} visible={visible(Section::Contact)} />
            </main>

            <Footer />
        </div>
    }
}

const PAGE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Outfit:wght@300;400;500;700&display=swap');

body {
    margin: 0;
    font-family: 'Outfit', sans-serif;
    background: #f5f5f4;
    color: #1f2937;
}

.landing-page {
    scroll-behavior: smooth;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.glass-card {
    background: rgba(255, 255, 255, 0.5);
    backdrop-filter: blur(12px);
    -webkit-backdrop-filter: blur(12px);
    border: 1px solid rgba(0, 0, 0, 0.08);
    transition: all 0.3s ease;
}

.glass-card:hover {
    background: rgba(255, 255, 255, 0.7);
    border: 1px solid rgba(0, 0, 0, 0.1);
    transform: translateY(-8px);
}

.glowing-text {
    color: #5b21b6;
    text-shadow: 0 2px 20px rgba(139, 92, 246, 0.2);
}

.glow-button {
    background: #7c3aed;
    color: #fff;
    font-weight: 700;
    border: none;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    cursor: pointer;
    box-shadow: 0 4px 15px rgba(168, 85, 247, 0.2);
    transition: all 0.3s ease;
}

.glow-button:hover {
    background: #8b5cf6;
    box-shadow: 0 6px 20px rgba(168, 85, 247, 0.4);
}

.glow-button:disabled {
    background: #a78bfa;
    cursor: not-allowed;
}

.fade-in {
    opacity: 0;
    transform: translateY(20px);
    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
}

.fade-in-visible {
    opacity: 1;
    transform: translateY(0);
}

.crystal-bg {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100vh;
    z-index: -1;
    background: linear-gradient(45deg, #f5f3ff, #faf7f2, #f3e8ff, #fdfcfa);
    background-size: 400% 400%;
    animation: gradient-animation 20s ease infinite;
}

@keyframes gradient-animation {
    0% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
    100% { background-position: 0% 50%; }
}

.site-header {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    border-bottom: 1px solid rgba(229, 231, 235, 0.8);
}

.site-header:hover {
    transform: none;
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.nav-logo {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 700;
    color: #6d28d9;
}

.nav-links {
    display: flex;
    gap: 2rem;
}

.nav-link, .mobile-link {
    background: none;
    border: none;
    font: inherit;
    cursor: pointer;
    transition: color 0.3s;
}

.nav-link:hover {
    color: #7c3aed;
}

.burger-menu {
    display: none;
    background: none;
    border: none;
    cursor: pointer;
}

.burger-icon {
    width: 1.5rem;
    height: 1.5rem;
}

.mobile-menu {
    background: rgba(255, 255, 255, 0.3);
    backdrop-filter: blur(16px);
}

.mobile-link {
    display: block;
    width: 100%;
    text-align: left;
    padding: 0.5rem 1.5rem;
    font-size: 0.875rem;
}

.mobile-join {
    padding: 1rem;
}

.mobile-join .join-button {
    width: 100%;
}

.page-main {
    padding-top: 80px;
}

.page-section {
    padding: 5rem 0;
}

.section-title {
    text-align: center;
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 3rem;
}

.hero {
    min-height: calc(100vh - 80px);
    display: flex;
    align-items: center;
    justify-content: center;
    text-align: center;
    padding: 0 1.5rem;
}

.hero-kicker {
    font-size: 3.75rem;
    margin-bottom: 1rem;
}

.hero-title {
    font-size: 4.5rem;
    font-weight: 700;
    margin-bottom: 1.5rem;
    background: linear-gradient(to right, #7c3aed, #a855f7, #6366f1);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-subtitle {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 48rem;
    margin: 0 auto 2rem;
}

.cta-button {
    font-size: 1.125rem;
    padding: 0.75rem 2rem;
}

.cta-button:hover {
    transform: scale(1.05);
}

.mentor-card {
    border-radius: 1rem;
    padding: 3rem;
    display: flex;
    align-items: center;
    gap: 3rem;
}

.avatar-ring {
    width: 10rem;
    height: 10rem;
    flex-shrink: 0;
    border-radius: 9999px;
    padding: 4px;
    background: linear-gradient(to bottom right, #8b5cf6, #4f46e5);
}

.avatar {
    width: 100%;
    height: 100%;
    border-radius: 9999px;
    background: #f5f5f4;
    display: flex;
    align-items: center;
    justify-content: center;
}

.avatar-icon {
    width: 5rem;
    height: 5rem;
    color: #8b5cf6;
}

.mentor-name {
    font-size: 1.875rem;
    color: #6d28d9;
    margin: 0;
}

.mentor-credentials {
    color: #4f46e5;
    font-weight: 500;
}

.plan-grid, .resource-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
}

.plan-card {
    border-radius: 1rem;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    text-align: center;
}

.plan-name {
    font-size: 1.5rem;
    margin-bottom: 0.5rem;
}

.plan-quartz { color: #374151; }
.plan-garnet { color: #dc2626; }
.plan-diamond { color: #2563eb; }

.plan-price {
    font-size: 2.25rem;
    font-weight: 700;
    color: #111827;
    margin: 0 0 1rem;
}

.plan-features {
    list-style: none;
    padding: 0;
    color: #4b5563;
    flex-grow: 1;
}

.plan-features li {
    margin-bottom: 0.75rem;
}

.plan-continuation {
    font-size: 0.75rem;
    font-style: italic;
    color: #6b7280;
    margin-bottom: 1.5rem;
}

.enroll-button {
    margin-top: auto;
}

.trial-note {
    display: table;
    margin: 2rem auto 0;
    border-radius: 0.5rem;
    padding: 0.5rem 1rem;
    font-size: 0.875rem;
    font-style: italic;
    color: #6b7280;
}

.schedule-card {
    max-width: 56rem;
    margin: 0 auto;
    border-radius: 1rem;
    padding: 3rem;
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    text-align: center;
}

.schedule-item {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 1rem;
}

.schedule-icon {
    width: 2rem;
    height: 2rem;
    color: #7c3aed;
}

.schedule-headline {
    font-size: 1.5rem;
    font-weight: 700;
    color: #7c3aed;
    margin: 0;
}

.schedule-detail {
    font-size: 0.875rem;
    color: #6b7280;
}

.resource-card {
    border-radius: 1rem;
    padding: 2rem;
    text-align: center;
}

.testimonial-card {
    position: relative;
    max-width: 48rem;
    min-height: 250px;
    margin: 0 auto;
    border-radius: 1rem;
    padding: 3rem;
    display: flex;
    align-items: center;
    justify-content: center;
    border: 2px solid rgba(139, 92, 246, 0.2);
    box-shadow: 0 10px 15px rgba(139, 92, 246, 0.2);
}

.testimonial-body {
    text-align: center;
}

.testimonial-quote {
    font-size: 1.25rem;
    font-style: italic;
    color: #374151;
}

.testimonial-author {
    margin-top: 1rem;
    font-weight: 700;
    color: #7c3aed;
}

.carousel-arrow {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    border: none;
    border-radius: 9999px;
    padding: 0.5rem;
    background: rgba(0, 0, 0, 0.05);
    cursor: pointer;
}

.carousel-arrow:hover {
    background: rgba(0, 0, 0, 0.1);
}

.carousel-prev { left: 1rem; }
.carousel-next { right: 1rem; }

.carousel-dots {
    position: absolute;
    bottom: 1rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    gap: 0.5rem;
}

.carousel-dot {
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
    background: rgba(124, 58, 237, 0.25);
}

.carousel-dot.active {
    background: #7c3aed;
}

.register-card, .contact-card {
    max-width: 42rem;
    margin: 0 auto;
    border-radius: 1rem;
    padding: 3rem;
}

.form-grid {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 1.5rem;
    margin-bottom: 1.5rem;
}

.register-card input,
.register-card select,
.register-card textarea {
    background: rgba(255, 255, 255, 0.6);
    border-radius: 0.5rem;
    padding: 0.75rem;
    border: 1px solid #d1d5db;
    font: inherit;
}

.register-card textarea {
    width: 100%;
    box-sizing: border-box;
    margin-bottom: 1.5rem;
}

.submit-button {
    width: 100%;
    font-size: 1.125rem;
    padding: 0.75rem 2rem;
}

.submit-status {
    margin-top: 1rem;
    text-align: center;
}

.submit-status.success { color: #16a34a; }
.submit-status.failure { color: #dc2626; }

.contact-card {
    text-align: center;
}

.contact-links {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 1.5rem;
}

.contact-link {
    border-radius: 0.5rem;
    padding: 0.75rem 1.5rem;
    display: flex;
    align-items: center;
    gap: 0.75rem;
    color: inherit;
    text-decoration: none;
}

.contact-whatsapp { color: #22c55e; font-weight: 700; }
.contact-email { color: #ef4444; font-weight: 700; }

.site-footer {
    padding: 2rem 0;
    text-align: center;
    color: #6b7280;
    font-size: 0.875rem;
    border-top: 1px solid rgba(229, 231, 235, 0.8);
    background: rgba(255, 255, 255, 0.2);
}

@media (max-width: 768px) {
    .nav-links, .desktop-only {
        display: none;
    }
    .burger-menu {
        display: block;
    }
    .hero-kicker { font-size: 2.25rem; }
    .hero-title { font-size: 3rem; }
    .mentor-card { flex-direction: column; text-align: center; padding: 2rem; }
    .plan-grid, .schedule-card, .form-grid { grid-template-columns: 1fr; }
    .contact-links { flex-direction: column; }
}

@media (max-width: 640px) {
    .resource-grid { grid-template-columns: 1fr; }
}
"#;
