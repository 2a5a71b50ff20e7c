use crate::domain::a001_kpi::use_kpi_store;
use contracts::domain::a001_kpi::Kpi;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn KpiTable(on_edit: Callback<Kpi>, on_delete: Callback<Kpi>) -> impl IntoView {
    let store = use_kpi_store();

    view! {
        <div class="card table-card">
            <table class="table">
                <thead>
                    <tr>
                        <th>"KPI Detail"</th>
                        <th>"Performance"</th>
                        <th class="table__cell--right">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let kpis = store.kpis();
                        if kpis.is_empty() {
                            return view! {
                                <tr>
                                    <td colspan="3" class="table__empty">"No KPIs found. Add one above."</td>
                                </tr>
                            }
                            .into_any();
                        }
                        kpis.into_iter()
                            .map(|kpi| {
                                let edit_kpi = kpi.clone();
                                let delete_kpi = kpi.clone();
                                view! {
                                    <tr>
                                        <td>
                                            <span class="badge">{kpi.category.to_string()}</span>
                                            <div class="table__title">{kpi.name.clone()}</div>
                                            <div class="table__muted">{kpi.description.clone()}</div>
                                        </td>
                                        <td>
                                            <div>"Actual: " <strong>{format!("{} {}", kpi.actual, kpi.unit)}</strong></div>
                                            <div class="table__muted">{format!("Target: {} {}", kpi.target, kpi.unit)}</div>
                                        </td>
                                        <td class="table__cell--right">
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                on_click=move |_| on_edit.run(edit_kpi.clone())
                                            >
                                                "Edit"
                                            </Button>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                size=ButtonSize::Small
                                                class="button--danger"
                                                on_click=move |_| on_delete.run(delete_kpi.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
