use yew::prelude::*;

use crate::content::ScheduleIcon;

pub fn schedule_icon(icon: ScheduleIcon) -> Html {
    let path = match icon {
        ScheduleIcon::Calendar => "M8 7V3m8 4V3m-9 8h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
        ScheduleIcon::Clock => "M12 8v4l3 3m6-3a9 9 0 11-18 0 9 9 0 0118 0z",
        ScheduleIcon::Laptop => "M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
    };
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class="schedule-icon" fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}

pub fn avatar_icon() -> Html {
    html! {
        <svg xmlns="http://www.w3.org/2000/svg" class="avatar-icon" viewBox="0 0 20 20" fill="currentColor">
            <path fill-rule="evenodd" d="M10 9a3 3 0 100-6 3 3 0 000 6zm-7 9a7 7 0 1114 0H3z" clip-rule="evenodd" />
        </svg>
    }
}

pub fn burger_icon(open: bool) -> Html {
    let path = if open {
        "M6 18L18 6M6 6l12 12"
    } else {
        "M4 6h16M4 12h16m-7 6h7"
    };
    html! {
        <svg class="burger-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={path} />
        </svg>
    }
}
