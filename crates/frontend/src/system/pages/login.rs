use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use crate::system::session::use_session;
use contracts::system::ViewEvent;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.sign_in(&password.get_untracked()) {
            password.set(String::new());
        }
    };

    view! {
        <PageFrame page_id="login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h2>"Admin Access"</h2>
                    <p class="login-box__hint">"Enter the password to manage KPIs."</p>

                    <form on:submit=on_submit>
                        <div class="form__group">
                            <label class="form__label" for="admin-password">"Password"</label>
                            <input
                                type="password"
                                id="admin-password"
                                class="form__input"
                                placeholder="Enter admin password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    password.set(event_target_value(&ev));
                                    if session.state.with_untracked(|s| s.login_error) {
                                        session.dispatch(ViewEvent::EditCredentials);
                                    }
                                }
                            />
                        </div>

                        <Show when=move || session.login_error()>
                            <div class="error-message">"Incorrect password."</div>
                        </Show>

                        <button type="submit" class="btn-primary">"Login"</button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
