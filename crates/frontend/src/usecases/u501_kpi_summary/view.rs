use super::api;
use contracts::domain::a001_kpi::Kpi;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_kpi_summary::{KpiSummary, KpiSummaryRequest, KpiSummaryResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Панель AI-обзора по KPI, которые сейчас видны на дашборде.
#[component]
pub fn SummaryPanel(#[prop(into)] kpis: Signal<Vec<Kpi>>) -> impl IntoView {
    let result = RwSignal::new(None::<KpiSummaryResponse>);
    let is_loading = RwSignal::new(false);

    let on_generate = move |_| {
        let request = KpiSummaryRequest::from_kpis(&kpis.get_untracked());
        is_loading.set(true);
        spawn_local(async move {
            let response = api::summarize(request).await;
            result.set(Some(response));
            is_loading.set(false);
        });
    };

    let lines = move || {
        result.get().map(|response| {
            let class = if response.generated {
                "summary-panel__text"
            } else {
                "summary-panel__text summary-panel__text--placeholder"
            };
            let paragraphs = response
                .summary
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| view! { <p>{line.to_string()}</p> })
                .collect_view();
            view! { <div class=class>{paragraphs}</div> }
        })
    };

    view! {
        <div class="card summary-panel">
            <div class="card__body">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3 class="section-title">{KpiSummary::display_name()}</h3>
                    <Button
                        appearance=ButtonAppearance::Primary
                        size=ButtonSize::Small
                        on_click=on_generate
                        disabled=Signal::derive(move || is_loading.get() || kpis.with(|k| k.is_empty()))
                    >
                        {move || if is_loading.get() { "Analyzing..." } else { "Generate Insights" }}
                    </Button>
                </Flex>
                {lines}
            </div>
        </div>
    }
}
