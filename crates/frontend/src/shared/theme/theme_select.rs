use super::{use_theme, Theme};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопка переключения светлой/темной темы
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="header-icon-btn"
            on:click=move |_| ctx.toggle_theme()
            title=move || format!("Switch to {} theme", ctx.theme.get().toggled().display_name().to_lowercase())
        >
            {move || if ctx.theme.get() == Theme::Dark { icon("sun") } else { icon("moon") }}
        </button>
    }
}

/// Переключатель сезонного оформления «Тет»
#[component]
pub fn TetToggle(
    /// Показывать подпись рядом с иконкой
    #[prop(optional)]
    with_label: bool,
) -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class=move || {
                if ctx.tet.get() {
                    "header-icon-btn header-icon-btn--active"
                } else {
                    "header-icon-btn"
                }
            }
            on:click=move |_| ctx.set_tet(!ctx.tet.get_untracked())
            title="Tet theme"
        >
            {icon("blossom")}
            {with_label.then(|| view! {
                <span>{move || if ctx.tet.get() { "Tet theme: on" } else { "Tet theme: off" }}</span>
            })}
        </button>
    }
}
