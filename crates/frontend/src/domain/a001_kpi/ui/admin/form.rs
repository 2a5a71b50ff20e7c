use contracts::domain::a001_kpi::{Kpi, KpiCategory, KpiDraft, KpiId};
use leptos::prelude::*;
use thaw::*;

/// Поля формы администратора. Сигналы копируемые, поэтому состояние можно
/// отдавать и форме, и таблице.
#[derive(Clone, Copy)]
pub struct KpiFormState {
    /// `Some` while an existing record is being edited
    pub editing: RwSignal<Option<KpiId>>,
    pub name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub unit: RwSignal<String>,
    pub actual: RwSignal<String>,
    pub target: RwSignal<String>,
    pub description: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
}

impl KpiFormState {
    pub fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            category: RwSignal::new(KpiCategory::default().to_string()),
            unit: RwSignal::new(String::new()),
            actual: RwSignal::new(String::new()),
            target: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            error: RwSignal::new(None),
        }
    }

    pub fn reset(&self) {
        self.fill(None, KpiDraft::default());
    }

    pub fn load(&self, kpi: &Kpi) {
        self.fill(Some(kpi.id.clone()), KpiDraft::from_kpi(kpi));
    }

    fn fill(&self, editing: Option<KpiId>, draft: KpiDraft) {
        self.editing.set(editing);
        self.name.set(draft.name);
        self.category.set(draft.category.to_string());
        self.unit.set(draft.unit);
        self.actual.set(draft.actual);
        self.target.set(draft.target);
        self.description.set(draft.description);
        self.error.set(None);
    }

    pub fn draft(&self) -> KpiDraft {
        KpiDraft {
            name: self.name.get_untracked(),
            actual: self.actual.get_untracked(),
            target: self.target.get_untracked(),
            unit: self.unit.get_untracked(),
            description: self.description.get_untracked(),
            category: KpiCategory::from_label(&self.category.get_untracked()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.with(|id| id.is_some())
    }
}

impl Default for KpiFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn KpiForm(form: KpiFormState, on_submit: Callback<()>) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    // A record loaded with a custom category keeps it selectable.
    let category_options = move || {
        let current = KpiCategory::from_label(&form.category.get());
        let mut options: Vec<KpiCategory> = KpiCategory::all().to_vec();
        if !current.is_known() {
            options.push(current);
        }
        options
            .into_iter()
            .map(|cat| {
                let label = cat.to_string();
                view! { <option value=label.clone()>{label.clone()}</option> }
            })
            .collect_view()
    };

    view! {
        <div class="card">
            <div class="card__body">
                <h3 class="section-title">
                    {move || if form.is_editing() { "Edit KPI" } else { "Add New KPI" }}
                </h3>
                <form class="kpi-form" on:submit=submit>
                    <div class="form__group kpi-form__wide">
                        <label class="form__label">"KPI Name"</label>
                        <Input value=form.name placeholder="e.g. Quarterly Revenue" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Category"</label>
                        <select
                            class="form__select"
                            prop:value=move || form.category.get()
                            on:change=move |ev| form.category.set(event_target_value(&ev))
                        >
                            {category_options}
                        </select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Unit (Symbol)"</label>
                        <Input value=form.unit placeholder="%, $, k, etc." />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Actual Value"</label>
                        <Input input_type=InputType::Number value=form.actual placeholder="0.00" />
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Target Value"</label>
                        <Input input_type=InputType::Number value=form.target placeholder="100.00" />
                    </div>

                    <div class="form__group kpi-form__wide">
                        <label class="form__label">"Description"</label>
                        <Textarea
                            value=form.description
                            placeholder="Describe what this KPI measures..."
                            attr:rows=3
                        />
                    </div>

                    {move || form.error.get().map(|err| view! {
                        <div class="warning-box warning-box--error kpi-form__wide">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{err}</span>
                        </div>
                    })}

                    <div class="kpi-form__actions kpi-form__wide">
                        <Show when=move || form.is_editing()>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| form.reset()
                            >
                                "Cancel"
                            </Button>
                        </Show>
                        <button type="submit" class="btn-primary">
                            {move || if form.is_editing() { "Update KPI" } else { "Create KPI" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
