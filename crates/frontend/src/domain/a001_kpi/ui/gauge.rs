use contracts::shared::format::format_number;
use contracts::shared::performance::{gauge_percent, PerformanceTier};
use leptos::prelude::*;

/// Length of the half-circle arc `M 10 60 A 50 50 0 0 1 110 60`.
const ARC_LENGTH: f64 = std::f64::consts::PI * 50.0;

/// Whole-percent label, halves rounded away from zero.
fn percent_label(percent: f64) -> String {
    format!("{}%", percent.round())
}

/// Half-donut gauge. The fill is clamped to 0..=100 %, the caption shows
/// the raw values.
#[component]
pub fn Gauge(
    #[prop(into)] actual: Signal<f64>,
    #[prop(into)] target: Signal<f64>,
    #[prop(into)] unit: Signal<String>,
    /// Light text and track for the dark overall panel
    #[prop(optional)]
    dark: bool,
) -> impl IntoView {
    let percent = Memo::new(move |_| gauge_percent(actual.get(), target.get()));
    let color = move || PerformanceTier::from_percent(percent.get()).gauge_color();
    let dash = move || {
        let filled = ARC_LENGTH * percent.get() / 100.0;
        format!("{:.2} {:.2}", filled, ARC_LENGTH)
    };
    let caption = move || {
        format!(
            "{} / {} {}",
            format_number(actual.get()),
            format_number(target.get()),
            unit.get()
        )
    };

    let class = if dark { "gauge gauge--dark" } else { "gauge" };

    view! {
        <div class=class>
            <svg class="gauge__svg" viewBox="0 0 120 70" role="img">
                <path class="gauge__track" d="M 10 60 A 50 50 0 0 1 110 60" fill="none" stroke-width="18" />
                <path
                    class="gauge__fill"
                    d="M 10 60 A 50 50 0 0 1 110 60"
                    fill="none"
                    stroke-width="18"
                    stroke=color
                    stroke-dasharray=dash
                />
            </svg>
            <div class="gauge__label">
                <span class="gauge__value">{move || percent_label(percent.get())}</span>
                <span class="gauge__caption">{caption}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_label_rounds_half_up() {
        assert_eq!(percent_label(62.5), "63%");
        assert_eq!(percent_label(0.5), "1%");
        assert_eq!(percent_label(49.4), "49%");
    }

    #[test]
    fn test_percent_label_bounds() {
        assert_eq!(percent_label(0.0), "0%");
        assert_eq!(percent_label(100.0), "100%");
    }
}
