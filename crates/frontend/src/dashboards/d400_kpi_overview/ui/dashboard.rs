use crate::domain::a001_kpi::ui::card::KpiCard;
use crate::domain::a001_kpi::ui::gauge::Gauge;
use crate::domain::a001_kpi::use_kpi_store;
use crate::shared::components::stat_card::StatCard;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use crate::usecases::u501_kpi_summary::SummaryPanel;
use contracts::domain::a001_kpi::KpiCategory;
use contracts::shared::format::format_percent_1;
use contracts::shared::performance::{CategoryFilter, DashboardStats, PerformanceTier};
use leptos::prelude::*;

/// Overview dashboard: category filter, overall gauge, tier counters and
/// the KPI grid.
#[component]
pub fn KpiOverviewDashboard() -> impl IntoView {
    let store = use_kpi_store();
    let filter = RwSignal::new(CategoryFilter::All);

    let visible = Memo::new(move |_| filter.get().apply(&store.kpis()));
    let stats = Memo::new(move |_| visible.with(|kpis| DashboardStats::compute(kpis)));

    let total_label = move || {
        if filter.get().is_filtered() {
            "Visible KPIs"
        } else {
            "Total KPIs"
        }
    };
    let scope_text = move || match filter.get() {
        CategoryFilter::All => "all".to_string(),
        CategoryFilter::Only(cat) => format!("filtered {}", cat),
    };

    let grid = move || {
        let kpis = visible.get();
        if kpis.is_empty() {
            let message = match filter.get() {
                _ if store.kpis().is_empty() => {
                    "Get started by adding a new KPI in the admin panel.".to_string()
                }
                CategoryFilter::Only(cat) => format!("No KPIs found for the {} category.", cat),
                CategoryFilter::All => "No KPIs found.".to_string(),
            };
            return view! {
                <div class="empty-state">
                    <h3>"No KPIs Found"</h3>
                    <p>{message}</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="kpi-grid">
                {kpis.into_iter().map(|kpi| view! { <KpiCard kpi=kpi /> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="d400_kpi_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header dashboard-toolbar">
                <div>
                    <h2 class="page__title">"Performance Overview"</h2>
                    <p class="page__subtitle">"Real-time monitoring of NCC strategic objectives"</p>
                </div>
                <select
                    class="form__select dashboard-toolbar__filter"
                    prop:value=move || filter.get().value()
                    on:change=move |ev| filter.set(CategoryFilter::from_value(&event_target_value(&ev)))
                >
                    <option value="All">"All Departments"</option>
                    {KpiCategory::all()
                        .into_iter()
                        .map(|cat| {
                            let label = cat.to_string();
                            view! { <option value=label.clone()>{label.clone()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <section class="overall-panel">
                <div class="overall-panel__text">
                    <div class="overall-panel__heading">
                        <h3>{move || filter.get().heading()}</h3>
                        <Show when=move || filter.get().is_filtered()>
                            <span class="overall-panel__badge">"FILTERED"</span>
                        </Show>
                    </div>
                    <div class="overall-panel__value">
                        <span class="overall-panel__percent">
                            {move || format_percent_1(stats.get().overall_percentage)}
                        </span>
                        <span class="overall-panel__caption">"average efficiency"</span>
                    </div>
                    <p class="overall-panel__note">
                        "This metric represents the aggregate completion rate of "
                        {scope_text}
                        " Key Performance Indicators currently being tracked by the NCC dashboard."
                    </p>
                </div>
                <div class="overall-panel__gauge">
                    <Gauge
                        actual=Signal::derive(move || stats.get().overall_percentage)
                        target=100.0
                        unit="%".to_string()
                        dark=true
                    />
                </div>
            </section>

            <div class="stat-grid">
                <StatCard
                    label=Signal::derive(move || total_label().to_string())
                    glyph="Σ"
                    value=Signal::derive(move || stats.get().total)
                />
                {PerformanceTier::all()
                    .into_iter()
                    .rev()
                    .map(|tier| {
                        view! {
                            <StatCard
                                label=tier.label().to_string()
                                glyph="●"
                                value=Signal::derive(move || stats.get().count(tier))
                                tier=tier
                            />
                        }
                    })
                    .collect_view()}
            </div>

            <div class="zone-legend">
                <span class="zone-legend__title">"Zone Guide:"</span>
                {PerformanceTier::all()
                    .into_iter()
                    .map(|tier| {
                        view! {
                            <span class="zone-legend__item">
                                <span
                                    class="zone-legend__dot"
                                    style=format!("background:{}", tier.gauge_color())
                                ></span>
                                {tier.zone_caption()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            {grid}

            <SummaryPanel kpis=Signal::derive(move || visible.get()) />
        </PageFrame>
    }
}
