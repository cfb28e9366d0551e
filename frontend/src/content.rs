//! Copy and price tables rendered by the landing page.

use crate::state::registration::Plan;

pub const BRAND: &str = "G-Dnyasa";

pub struct PlanCard {
    pub plan: Plan,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub continuation: &'static str,
    pub accent: &'static str,
}

pub const PLANS: [PlanCard; 3] = [
    PlanCard {
        plan: Plan::Quartz,
        price: "₹800",
        features: &["4 live sessions", "4 mock tests", "Study materials"],
        continuation: "(₹500 for next 2 months if continued)",
        accent: "plan-quartz",
    },
    PlanCard {
        plan: Plan::Garnet,
        price: "₹1200",
        features: &["8 live sessions", "4 mock tests", "Study materials"],
        continuation: "(₹1000 for next 2 months if continued)",
        accent: "plan-garnet",
    },
    PlanCard {
        plan: Plan::Diamond,
        price: "₹1600",
        features: &[
            "8 live sessions",
            "4 mock tests",
            "Study materials",
            "Resume review",
            "One Mega Test Series",
        ],
        continuation: "(₹1500 for next 2 months if continued)",
        accent: "plan-diamond",
    },
];

pub const TRIAL_NOTE: &str =
    "Trial packs do not include recorded classes, entrance exam guidance, or one-to-one sessions.";

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScheduleIcon {
    Calendar,
    Clock,
    Laptop,
}

pub struct ScheduleCard {
    pub icon: ScheduleIcon,
    pub title: &'static str,
    pub headline: &'static str,
    pub detail: &'static str,
}

pub const SCHEDULE: [ScheduleCard; 3] = [
    ScheduleCard {
        icon: ScheduleIcon::Calendar,
        title: "New Batch Starts",
        headline: "8 Oct 2025",
        detail: "Registration closes: 6 Oct 2025",
    },
    ScheduleCard {
        icon: ScheduleIcon::Clock,
        title: "Timings",
        headline: "7–9 PM",
        detail: "Wednesday & Thursday",
    },
    ScheduleCard {
        icon: ScheduleIcon::Laptop,
        title: "Mode",
        headline: "Online",
        detail: "Zoom / Google Meet",
    },
];

pub const RESOURCES: [&str; 3] = ["Mock Test", "Study Material", "Exam Strategy"];

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "This mentorship helped me finally understand structural geology!",
        author: "Aditi, GATE 2025 Aspirant",
    },
    Testimonial {
        quote: "Apoorva ma'am's teaching style is crystal clear. Highly recommended for CSIR-NET.",
        author: "Rohan, CSIR-NET Aspirant",
    },
    Testimonial {
        quote: "The mock tests were a game-changer for my IIT JAM preparation. Thank you!",
        author: "Priya, IIT JAM 2025",
    },
];

pub struct Mentor {
    pub name: &'static str,
    pub credentials: &'static str,
    pub bio: &'static str,
}

pub const MENTOR: Mentor = Mentor {
    name: "Ms. Apoorva Pimprikar",
    credentials: "MSc Applied Geology | GATE GG 2024, 2025",
    bio: "Passionate geology educator helping students master complex concepts with clarity and confidence. My goal is to make learning geology an intuitive and exciting journey for everyone.",
};

pub const WHATSAPP_GREETING: &str = "Hi! I'd like to know more about the Geology Mentorship batches.";
