/// Универсальные утилиты для работы со списками (поиск, сортировка, UI компоненты)
use contracts::shared::list_view::SortSpec;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Задержка поиска после ввода, мс
const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter = filter.trim();
    if filter.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let parts = split_matches(text, filter);
    if parts.iter().all(|(_, hit)| !hit) {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    parts
        .into_iter()
        .map(|(chunk, hit)| {
            if hit {
                view! { <mark class="search-highlight">{chunk}</mark> }.into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

/// Делит текст на куски (текст, совпадение?) без учета регистра.
/// Если нижний регистр меняет длину строки, подсветка не выполняется.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if filter_lower.is_empty() || text_lower.len() != text.len() {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let input_value = RwSignal::new(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        input_value.set(new_value.clone());
        // предыдущий таймер отменяется при drop
        pending.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        })));
    };

    let clear_filter = move |_| {
        pending.set_value(None);
        input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() {
                        "search-input__field"
                    } else {
                        "search-input__field search-input__field--active"
                    }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS-класс индикатора сортировки
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// То же для `SortSpec`
pub fn sort_indicator_for(spec: &SortSpec, field: &str) -> &'static str {
    get_sort_indicator(&spec.key, field, spec.direction.is_ascending())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "code", true), " ⇅");
        assert_eq!(sort_indicator_for(&SortSpec::desc("created_at"), "created_at"), " ▼");
        assert_eq!(get_sort_class("a", "b"), "table__sort-indicator");
    }

    #[test]
    fn test_split_matches() {
        assert_eq!(
            split_matches("Tet Sale TET", "tet"),
            vec![
                ("Tet".to_string(), true),
                (" Sale ".to_string(), false),
                ("TET".to_string(), true),
            ]
        );
        assert_eq!(split_matches("abc", "x"), vec![("abc".to_string(), false)]);
    }
}
