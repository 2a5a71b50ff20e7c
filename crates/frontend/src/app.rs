use crate::dashboards::KpiOverviewDashboard;
use crate::domain::a001_kpi::ui::admin::AdminConsole;
use crate::domain::a001_kpi::KpiStoreContext;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::session::SessionContext;
use contracts::system::Screen;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // KPI collection, loaded once from localStorage (seed on first run).
    provide_context(KpiStoreContext::new());

    // Active screen and the admin flag; reset on every page load.
    let session = SessionContext::new();
    provide_context(session);

    // Only a screen change remounts the page.
    let screen = Memo::new(move |_| session.screen());

    view! {
        <ConfigProvider>
            <Shell>
                {move || match screen.get() {
                    Screen::Dashboard => view! { <KpiOverviewDashboard /> }.into_any(),
                    Screen::Login => view! { <LoginPage /> }.into_any(),
                    Screen::Admin => view! { <AdminConsole /> }.into_any(),
                }}
            </Shell>
        </ConfigProvider>
    }
}
