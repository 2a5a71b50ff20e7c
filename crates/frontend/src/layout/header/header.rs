use crate::system::session::use_session;
use contracts::system::{Screen, ViewEvent};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();

    let tab_appearance = move |active: bool| {
        if active {
            ButtonAppearance::Primary
        } else {
            ButtonAppearance::Subtle
        }
    };
    let dashboard_appearance =
        Signal::derive(move || tab_appearance(session.screen() == Screen::Dashboard));
    let admin_appearance =
        Signal::derive(move || tab_appearance(session.state.with(|s| s.is_admin_area())));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">"N"</span>
                <div>
                    <span class="header__title">"NCC KPI Dashboard"</span>
                    <span class="header__subtitle">"Corporate performance at a glance"</span>
                </div>
            </div>
            <nav class="header__actions">
                <Button
                    appearance=dashboard_appearance
                    size=ButtonSize::Small
                    on_click=move |_| session.dispatch(ViewEvent::SelectDashboard)
                >
                    "Dashboard"
                </Button>
                <Button
                    appearance=admin_appearance
                    size=ButtonSize::Small
                    on_click=move |_| session.dispatch(ViewEvent::OpenAdmin)
                >
                    "Admin"
                </Button>
                <Show when=move || session.is_authenticated()>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| session.dispatch(ViewEvent::SignOut)
                    >
                        "Sign Out"
                    </Button>
                </Show>
            </nav>
        </header>
    }
}
