use contracts::shared::performance::PerformanceTier;
use leptos::prelude::*;

/// Counter card of the dashboard header row.
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: Signal<String>,
    /// Short glyph shown in the icon bubble
    glyph: &'static str,
    #[prop(into)] value: Signal<usize>,
    /// Colors the card like the tier; `None` is the neutral card
    #[prop(optional)]
    tier: Option<PerformanceTier>,
) -> impl IntoView {
    let class = match tier {
        Some(tier) => format!("stat-card stat-card--{}", tier.css_modifier()),
        None => "stat-card".to_string(),
    };

    view! {
        <div class=class>
            <div class="stat-card__icon">{glyph}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{move || value.get()}</div>
            </div>
        </div>
    }
}
