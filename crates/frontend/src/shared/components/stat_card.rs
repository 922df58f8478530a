use crate::shared::components::table::number_format::{
    format_money, format_number_int, format_number_with_decimals, format_percent,
};
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorStatus, IndicatorValue, ValueFormat};
use leptos::prelude::*;

/// Текст значения карточки
pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money => format_money(val),
        ValueFormat::Number { decimals } => format_number_with_decimals(val, *decimals),
        ValueFormat::Percent { decimals } => {
            format!("{}%", format_number_with_decimals(val, *decimals))
        }
        ValueFormat::Integer => format_number_int(val),
    }
}

/// Стрелка и класс изменения; изменения меньше 0.5% считаются нулевыми
fn change_marker(pct: f64) -> (&'static str, &'static str) {
    if pct > 0.5 {
        ("\u{2191}", "stat-card__change stat-card__change--up")
    } else if pct < -0.5 {
        ("\u{2193}", "stat-card__change stat-card__change--down")
    } else {
        ("", "stat-card__change stat-card__change--flat")
    }
}

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Имя иконки из `icon()`
    #[prop(into)]
    icon_name: String,
    /// Значение (None — загрузка или ошибка)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(into, optional)]
    status: Signal<IndicatorStatus>,
    /// Изменение к прошлому периоду, %
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let status_class = move || match status.get() {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Warning => "stat-card stat-card--warning",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "—".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = change_marker(pct);
            view! { <span class=cls>{format!("{}{}", arrow, format_percent(pct.abs()))}</span> }
        })
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">{icon(&icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

/// Карточка по готовому `IndicatorValue`
#[component]
pub fn IndicatorCard(indicator: IndicatorValue) -> impl IntoView {
    let IndicatorValue {
        label,
        icon,
        format,
        value,
        change_percent,
        status,
        subtitle,
        ..
    } = indicator;

    view! {
        <StatCard
            label=label
            icon_name=icon
            value=Signal::stored(value)
            format=format
            status=Signal::stored(status)
            change_percent=Signal::stored(change_percent)
            subtitle=Signal::stored(subtitle)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value_variants() {
        assert_eq!(format_value(1234.0, &ValueFormat::Integer), "1,234");
        assert_eq!(format_value(12.345, &ValueFormat::Number { decimals: 1 }), "12.3");
        assert_eq!(format_value(7.5, &ValueFormat::Percent { decimals: 1 }), "7.5%");
    }

    #[test]
    fn test_small_changes_are_flat() {
        assert_eq!(change_marker(0.3).0, "");
        assert_eq!(change_marker(12.0).0, "\u{2191}");
        assert_eq!(change_marker(-3.0).0, "\u{2193}");
    }
}
