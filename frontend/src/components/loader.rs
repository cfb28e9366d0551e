use yew::prelude::*;

/// Full-screen crystal shown while the page warms up.
#[function_component(CrystalLoader)]
pub fn crystal_loader() -> Html {
    html! {
        <div class="crystal-loader">
            <style>
                {r#"
                .crystal-loader {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(17, 24, 39, 0.9);
                }
                .crystal {
                    position: relative;
                    width: 96px;
                    height: 112px;
                    animation: crystal-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                }
                .crystal .facet {
                    position: absolute;
                    width: 0;
                    height: 0;
                    opacity: 0.8;
                }
                .crystal .facet-top {
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    border-left: 48px solid transparent;
                    border-right: 48px solid transparent;
                    border-bottom: 32px solid #d8b4fe;
                }
                .crystal .facet-left {
                    top: 32px;
                    left: 0;
                    border-top: 32px solid transparent;
                    border-bottom: 32px solid transparent;
                    border-right: 48px solid #a5b4fc;
                }
                .crystal .facet-right {
                    top: 32px;
                    right: 0;
                    border-top: 32px solid transparent;
                    border-bottom: 32px solid transparent;
                    border-left: 48px solid #5eead4;
                }
                .crystal .facet-bottom {
                    bottom: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    border-left: 48px solid transparent;
                    border-right: 48px solid transparent;
                    border-top: 32px solid #c084fc;
                }
                .crystal .crystal-mark {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    color: #fff;
                    font-weight: 600;
                    font-size: 0.875rem;
                }
                @keyframes crystal-pulse {
                    50% { opacity: 0.5; }
                }
                "#}
            </style>
            <div class="crystal">
                <div class="facet facet-top"></div>
                <div class="facet facet-left"></div>
                <div class="facet facet-right"></div>
                <div class="facet facet-bottom"></div>
                <div class="crystal-mark">{"G"}</div>
            </div>
        </div>
    }
}
