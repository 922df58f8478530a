use crate::shared::api_utils::api_base;
use crate::shared::config::config;
use crate::shared::list_page::{preferred_page_size, set_preferred_page_size};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::theme::{use_theme, Theme};
use leptos::prelude::*;
use thaw::*;

/// Настройки админки: тема, оформление «Тет», размер страницы списков
#[component]
pub fn SettingsPage() -> impl IntoView {
    let theme = use_theme();
    let page_size = RwSignal::new(preferred_page_size());
    let saved = RwSignal::new(false);

    let on_page_size = move |ev| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            page_size.set(size);
            set_preferred_page_size(size);
            saved.set(true);
        }
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="page__title">"Settings"</h1>
            </div>
            <div class="page__content settings">
                <section class="settings__section">
                    <h3>"Appearance"</h3>
                    <Flex gap=FlexGap::Medium>
                        {Theme::all().into_iter().map(|t| view! {
                            <label class="settings__option">
                                <input
                                    type="radio"
                                    name="theme"
                                    prop:checked=move || theme.theme.get() == t
                                    on:change=move |_| theme.set_theme(t)
                                />
                                {t.display_name()}
                            </label>
                        }).collect_view()}
                    </Flex>
                    <label class="settings__option">
                        <input
                            type="checkbox"
                            prop:checked=move || theme.tet.get()
                            on:change=move |ev| theme.set_tet(event_target_checked(&ev))
                        />
                        "Tet (Lunar New Year) theme"
                    </label>
                </section>

                <section class="settings__section">
                    <h3>"Lists"</h3>
                    <label class="settings__option">
                        "Rows per page"
                        <select prop:value=move || page_size.get().to_string() on:change=on_page_size>
                            {config().lists.page_size_options.iter().map(|&size| view! {
                                <option value=size.to_string() selected=move || page_size.get() == size>
                                    {size}
                                </option>
                            }).collect_view()}
                        </select>
                    </label>
                    <Show when=move || saved.get()>
                        <span class="settings__hint">"Applies to lists opened from now on."</span>
                    </Show>
                </section>

                <section class="settings__section">
                    <h3>"Backend"</h3>
                    <p class="settings__hint">{api_base()}</p>
                </section>
            </div>
        </PageFrame>
    }
}
