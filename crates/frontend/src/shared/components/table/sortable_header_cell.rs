//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Total"
//!     sort_field="total"
//!     align="right"
//!     sort=Signal::derive(move || state.with(|s| s.list.filters.sort.clone()))
//!     on_sort=Callback::new(move |field: String| toggle_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, sort_indicator_for};
use contracts::shared::list_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Ключ сортировки из дескриптора списка
    #[prop(into)]
    sort_field: String,

    /// Текущая сортировка списка
    #[prop(into)]
    sort: Signal<SortSpec>,

    on_sort: Callback<String>,

    /// left/right
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(&s.key, &sort_field))>
                    {move || sort.with(|s| sort_indicator_for(s, &field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
