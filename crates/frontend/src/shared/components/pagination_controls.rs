use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::shared::list_view::{page_window, PageItem};
use leptos::prelude::*;

/// Пагинация списка: назад/вперед, номера страниц с многоточием, размер страницы
#[component]
pub fn PaginationControls(
    /// Текущая страница (с 1)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Количество записей после фильтрации
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Варианты размера страницы; по умолчанию из конфигурации
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts =
        page_size_options.unwrap_or_else(|| config().lists.page_size_options.clone());

    let go = move |page: usize| {
        let total = total_pages.get_untracked();
        if page >= 1 && page <= total && page != current_page.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>

            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(p) => view! {
                            <button
                                class=if p == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                on:click=move |_| go(p)
                            >
                                {p}
                            </button>
                        }
                        .into_any(),
                        PageItem::Ellipsis => view! { <span class="pagination-ellipsis">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| go(current_page.get_untracked() + 1)
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>

            <span class="pagination-info">
                {move || format!("{} records", total_count.get())}
            </span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
