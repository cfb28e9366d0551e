use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::burger_icon;
use crate::content::BRAND;
use crate::state::section::Section;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_navigate: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Desktop links leave the menu alone; mobile links also close it.
    let go_to = |section: Section, close: bool| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section);
            if close {
                menu_open.set(false);
            }
        })
    };

    html! {
        <header class="site-header glass-card">
            <nav class="nav-content">
                <h1 class="nav-logo">{BRAND}</h1>
                <div class="nav-links">
                    { for Section::NAV.into_iter().map(|section| html! {
                        <button key={section.name()} class="nav-link" onclick={go_to(section, false)}>
                            {section.label()}
                        </button>
                    }) }
                </div>
                <button class="join-button glow-button desktop-only" onclick={go_to(Section::Register, false)}>
                    {"Join Now"}
                </button>
                <button class="burger-menu" onclick={toggle_menu}>
                    {burger_icon(*menu_open)}
                </button>
            </nav>
            if *menu_open {
                <div class="mobile-menu">
                    { for Section::NAV.into_iter().map(|section| html! {
                        <button key={section.name()} class="mobile-link" onclick={go_to(section, true)}>
                            {section.label()}
                        </button>
                    }) }
                    <div class="mobile-join">
                        <button class="join-button glow-button" onclick={go_to(Section::Register, true)}>
                            {"Join Now"}
                        </button>
                    </div>
                </div>
            }
        </header>
    }
}
