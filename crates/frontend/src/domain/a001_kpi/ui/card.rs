use super::gauge::Gauge;
use contracts::domain::a001_kpi::Kpi;
use contracts::shared::format::format_number;
use leptos::prelude::*;

#[component]
pub fn KpiCard(kpi: Kpi) -> impl IntoView {
    let variance = kpi.variance();
    let above = kpi.is_above_target();
    let (pill_class, arrow, direction) = if above {
        ("variance-pill variance-pill--up", "\u{2191}", "Above")
    } else {
        ("variance-pill variance-pill--down", "\u{2193}", "Below")
    };
    let variance_text = format!(
        "{} {} {} Target",
        format_number(variance.abs()),
        kpi.unit,
        direction
    );
    let actual_text = format!("{} {}", format_number(kpi.actual), kpi.unit);
    let target_text = format!("{} {}", format_number(kpi.target), kpi.unit);
    let card_class = format!("kpi-card kpi-card--{}", kpi.tier().css_modifier());

    view! {
        <div class=card_class data-kpi-id=kpi.id.to_string()>
            <div class="kpi-card__header">
                <span class="kpi-card__category">{kpi.category.to_string()}</span>
                <h3 class="kpi-card__name" title=kpi.name.clone()>{kpi.name.clone()}</h3>
                <p class="kpi-card__description">{kpi.description.clone()}</p>
            </div>

            <div class="kpi-card__gauge">
                <Gauge actual=kpi.actual target=kpi.target unit=kpi.unit.clone() />
            </div>

            <div class="kpi-card__variance">
                <span class=pill_class>
                    <span>{arrow}</span>
                    <span>{variance_text}</span>
                </span>
            </div>

            <div class="kpi-card__footer">
                <div>
                    <span class="kpi-card__footer-label">"Actual"</span>
                    <span class="kpi-card__footer-value">{actual_text}</span>
                </div>
                <div class="kpi-card__footer-right">
                    <span class="kpi-card__footer-label">"Target"</span>
                    <span class="kpi-card__footer-value">{target_text}</span>
                </div>
            </div>
        </div>
    }
}
