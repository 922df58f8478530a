//! Ячейка таблицы с суммой
//!
//! ```rust,ignore
//! <TableCellMoney value=Signal::stored(Some(order.total)) />
//! <TableCellMoney value=Signal::stored(Some(-discount)) color_by_sign=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Сумма с валютой, выровненная вправо
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    /// Положительные зеленым, отрицательные красным
    #[prop(optional, default = false)]
    color_by_sign: bool,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_money(v),
        None => "—".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if color_by_sign {
            match value.get() {
                Some(v) if v > 0.0 => styles.push("color: var(--color-success-700)"),
                Some(v) if v < 0.0 => styles.push("color: var(--color-error-700)"),
                _ => {}
            }
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}
