use leptos::prelude::*;

/// Вариант бейджа по коду статуса записи
pub fn status_variant(code: &str) -> &'static str {
    match code {
        "active" | "running" | "delivered" | "paid" | "enabled" | "in_stock" => "success",
        "pending" | "processing" | "confirmed" | "upcoming" | "low_stock" => "warning",
        "shipping" => "primary",
        "expired" | "cancelled" | "blocked" | "used" | "out_of_stock" | "refunded" => "error",
        _ => "neutral",
    }
}

/// Бейдж: "primary", "success", "warning", "error", "neutral" (по умолчанию)
#[component]
pub fn Badge(
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    children: Children,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

/// Бейдж статуса: цвет по коду, текст — отображаемое имя
#[component]
pub fn StatusBadge(
    #[prop(into)]
    code: Signal<String>,
    #[prop(into)]
    label: Signal<String>,
) -> impl IntoView {
    view! {
        <span class=move || format!("badge badge--status badge--{}", status_variant(&code.get()))>
            {move || label.get()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_variant() {
        assert_eq!(status_variant("expired"), "error");
        assert_eq!(status_variant("delivered"), "success");
        assert_eq!(status_variant("pending"), "warning");
        assert_eq!(status_variant("whatever"), "neutral");
    }
}
