pub mod form;
pub mod list;

use crate::domain::a001_kpi::use_kpi_store;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_ADMIN};
use crate::system::session::use_session;
use contracts::domain::a001_kpi::{CommitStatus, Kpi, KpiId};
use contracts::system::ViewEvent;
use form::{KpiForm, KpiFormState};
use leptos::prelude::*;
use list::KpiTable;
use thaw::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&options);
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|win| {
            win.confirm_with_message("Are you sure you want to delete this KPI?")
                .ok()
        })
        .unwrap_or(false)
}

/// Админка: форма добавления/редактирования и таблица KPI.
#[component]
pub fn AdminConsole() -> impl IntoView {
    let store = use_kpi_store();
    let session = use_session();
    let form = KpiFormState::new();

    let on_submit = Callback::new(move |_: ()| {
        let fields = match form.draft().validate() {
            Ok(fields) => fields,
            Err(e) => {
                form.error.set(Some(e.to_string()));
                return;
            }
        };

        let result = match form.editing.get_untracked() {
            Some(id) => store.update(Kpi::from_draft(id, fields)),
            None => store
                .add(Kpi::from_draft(KpiId::generate(), fields))
                .map(|_| ()),
        };

        match result {
            Ok(()) => {
                form.reset();
                session.dispatch(ViewEvent::KpiSaved);
            }
            Err(e) => form.error.set(Some(e.to_string())),
        }
    });

    let on_edit = Callback::new(move |kpi: Kpi| {
        form.load(&kpi);
        scroll_to_top();
    });

    let on_delete = Callback::new(move |kpi: Kpi| {
        if !confirm_delete() {
            return;
        }
        if store.remove(&kpi.id) {
            if form.editing.with_untracked(|id| id.as_ref() == Some(&kpi.id)) {
                form.reset();
            }
            session.dispatch(ViewEvent::KpiRemoved);
        }
    });

    view! {
        <PageFrame page_id="a001_kpi--admin" category=PAGE_CAT_ADMIN>
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="page__header">
                <div>
                    <h2 class="page__title">"Admin Console"</h2>
                    <p class="page__subtitle">"Manage your Key Performance Indicators"</p>
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| session.dispatch(ViewEvent::Back)
                >
                    "← Back to Dashboard"
                </Button>
            </Flex>

            {move || match store.commit_status() {
                CommitStatus::Failed(reason) => Some(view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            {format!("Changes are kept for this session only: {}", reason)}
                        </span>
                    </div>
                }),
                _ => None,
            }}

            <KpiForm form=form on_submit=on_submit />
            <KpiTable on_edit=on_edit on_delete=on_delete />
        </PageFrame>
    }
}
