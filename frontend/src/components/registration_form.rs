use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::registration::{deliver, Field, FormAction, Phase, Plan, RegistrationForm};
use crate::state::section::Section;
use crate::web::transport::Endpoint;

#[derive(Properties, PartialEq)]
pub struct RegistrationProps {
    pub node: NodeRef,
    pub visible: bool,
}

#[function_component(Registration)]
pub fn registration(props: &RegistrationProps) -> Html {
    let form = use_reducer(RegistrationForm::default);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let on_plan = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Some(plan) = Plan::from_label(&select.value()) {
                form.dispatch(FormAction::SelectPlan(plan));
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = form.submission();
            form.dispatch(FormAction::Begin);

            if let Ok(payload) = payload {
                let form = form.clone();
                spawn_local(async move {
                    let outcome = deliver(&Endpoint::configured(), &payload).await;
                    form.dispatch(FormAction::Finish(outcome));
                });
            }
        })
    };

    let draft = &form.draft;
    let submitting = form.phase() == Phase::Submitting;

    html! {
        <section
            ref={props.node.clone()}
            class={classes!("page-section", "fade-in", props.visible.then_some("fade-in-visible"))}
            data-section={Section::Register.name()}
        >
            <div class="container">
                <h2 class="section-title glowing-text">{"Register Now"}</h2>
                <div class="register-card glass-card">
                    <form onsubmit={on_submit}>
                        <div class="form-grid">
                            <input
                                type="text"
                                name="name"
                                placeholder="Full Name"
                                required={true}
                                value={draft.name.clone()}
                                oninput={on_input(Field::Name)}
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Email Address"
                                required={true}
                                value={draft.email.clone()}
                                oninput={on_input(Field::Email)}
                            />
                            <input
                                type="tel"
                                name="phone"
                                placeholder="Phone Number"
                                required={true}
                                value={draft.phone.clone()}
                                oninput={on_input(Field::Phone)}
                            />
                            <select name="plan" onchange={on_plan}>
                                { for Plan::ALL.into_iter().map(|plan| html! {
                                    <option
                                        key={plan.label()}
                                        value={plan.label()}
                                        selected={plan == draft.plan}
                                    >
                                        {plan.label()}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <textarea
                            name="message"
                            placeholder="Your Message (Optional)"
                            rows="4"
                            value={draft.message.clone()}
                            oninput={on_message}
                        />
                        <button type="submit" class="submit-button glow-button" disabled={submitting}>
                            { if submitting { "Submitting..." } else { "Submit & Pay" } }
                        </button>
                    </form>
                    if let Some(status) = form.status() {
                        <p class={classes!("submit-status", if status.success { "success" } else { "failure" })}>
                            {status.message.clone()}
                        </p>
                    }
                </div>
            </div>
        </section>
    }
}
