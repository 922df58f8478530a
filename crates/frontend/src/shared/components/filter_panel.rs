use crate::shared::icons::icon;
use contracts::shared::list_view::ALL;
use leptos::prelude::*;

/// Сворачиваемая панель фильтров; в заголовке — пагинация
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Количество активных критериев (бейдж)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    pagination_controls: ChildrenFn,

    #[prop(into)]
    filter_content: ChildrenFn,

    /// Чипы активных фильтров
    #[prop(optional, into)]
    filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left" on:click=toggle_expanded>
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls()}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content()}
                    {filter_tags.as_ref().map(|tags| view! {
                        <div class="filter-tags">{tags()}</div>
                    })}
                </div>
            </div>
        </div>
    }
}

/// Чип активного фильтра
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

/// Выпадающий список значений фильтра с пунктом «All»
#[component]
pub fn FilterSelect(
    #[prop(into)]
    label: String,

    /// Пары (код, подпись)
    options: &'static [(&'static str, &'static str)],

    #[prop(into)]
    value: Signal<String>,

    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">{label}</span>
            <select
                class="filter-field__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value=ALL>"All"</option>
                {options.iter().map(|(code, title)| {
                    let code = *code;
                    view! {
                        <option value=code selected=move || value.get() == code>{*title}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}

/// Пара полей «с — по» для фильтра по дате (значения `YYYY-MM-DD`)
#[component]
pub fn DateRangeFilter(
    #[prop(into)]
    label: String,

    #[prop(into)]
    from: Signal<String>,

    #[prop(into)]
    to: Signal<String>,

    /// Вызывается с новой парой (from, to)
    on_change: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="filter-field filter-field--range">
            <span class="filter-field__label">{label}</span>
            <input
                type="date"
                class="filter-field__date"
                prop:value=move || from.get()
                on:change=move |ev| on_change.run((event_target_value(&ev), to.get_untracked()))
            />
            <span class="filter-field__sep">"–"</span>
            <input
                type="date"
                class="filter-field__date"
                prop:value=move || to.get()
                on:change=move |ev| on_change.run((from.get_untracked(), event_target_value(&ev)))
            />
        </div>
    }
}
