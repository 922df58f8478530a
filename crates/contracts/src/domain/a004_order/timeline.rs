//! Шкала статусов заказа для страницы отслеживания и карточки заказа в админке

use super::aggregate::{Order, OrderStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Состояние шага шкалы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepState {
    Done,
    Current,
    Upcoming,
    Cancelled,
}

impl StepState {
    pub fn css_class(&self) -> &'static str {
        match self {
            StepState::Done => "timeline-step--done",
            StepState::Current => "timeline-step--current",
            StepState::Upcoming => "timeline-step--upcoming",
            StepState::Cancelled => "timeline-step--cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineStep {
    pub status: OrderStatus,
    pub state: StepState,
    pub at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

/// Строит шкалу по текущему статусу и истории.
///
/// Доставленный заказ: все шаги выполнены. Отмененный: выполнены шаги,
/// пройденные до отмены, затем шаг «Cancelled». Неизвестный статус:
/// только шаги, подтвержденные историей.
pub fn build_timeline(order: &Order) -> Vec<TimelineStep> {
    let reached = reached_index(order);

    let mut steps: Vec<TimelineStep> = OrderStatus::FLOW
        .iter()
        .enumerate()
        .map(|(i, status)| {
            let state = match (order.status, reached) {
                (OrderStatus::Delivered, _) => StepState::Done,
                (OrderStatus::Cancelled | OrderStatus::Unknown, Some(r)) if i <= r => {
                    StepState::Done
                }
                (OrderStatus::Cancelled | OrderStatus::Unknown, _) => StepState::Upcoming,
                (_, Some(r)) if i < r => StepState::Done,
                (_, Some(r)) if i == r => StepState::Current,
                _ => StepState::Upcoming,
            };
            TimelineStep {
                status: *status,
                state,
                at: if state == StepState::Upcoming {
                    None
                } else {
                    order.reached_at(*status)
                },
                note: note_for(order, *status),
            }
        })
        .collect();

    if order.status == OrderStatus::Cancelled {
        // после отмены дальнейшие шаги не показываются
        let keep = reached.map_or(1, |r| r + 1);
        steps.truncate(keep);
        steps.push(TimelineStep {
            status: OrderStatus::Cancelled,
            state: StepState::Cancelled,
            at: order.reached_at(OrderStatus::Cancelled),
            note: note_for(order, OrderStatus::Cancelled),
        });
    }

    steps
}

/// Индекс последнего достигнутого шага основного пути
fn reached_index(order: &Order) -> Option<usize> {
    let from_status = order.status.flow_index();
    let from_history = order
        .status_history
        .iter()
        .filter_map(|c| c.status.flow_index())
        .max();
    match order.status {
        OrderStatus::Cancelled | OrderStatus::Unknown => from_history.or(Some(0)),
        _ => from_status,
    }
}

fn note_for(order: &Order, status: OrderStatus) -> Option<String> {
    order
        .status_history
        .iter()
        .rev()
        .find(|c| c.status == status)
        .and_then(|c| c.note.clone())
}

/// Доля пройденного пути, 0..=100, для полосы прогресса
pub fn progress_percent(order: &Order) -> f64 {
    match order.status {
        OrderStatus::Cancelled | OrderStatus::Unknown => 0.0,
        status => status.flow_index().map_or(0.0, |i| {
            crate::shared::stats::percent_of(i as f64, (OrderStatus::FLOW.len() - 1) as f64)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_order::StatusChange;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 20, 8, 0, 0).unwrap()
    }

    fn change(status: OrderStatus, hours: i64) -> StatusChange {
        StatusChange {
            status,
            at: Some(t0() + Duration::hours(hours)),
            note: None,
        }
    }

    fn states(steps: &[TimelineStep]) -> Vec<(OrderStatus, StepState)> {
        steps.iter().map(|s| (s.status, s.state)).collect()
    }

    #[test]
    fn test_in_progress_order() {
        let order = Order {
            status: OrderStatus::Processing,
            created_at: Some(t0()),
            status_history: vec![change(OrderStatus::Confirmed, 2), change(OrderStatus::Processing, 5)],
            ..Order::default()
        };
        let steps = build_timeline(&order);
        assert_eq!(
            states(&steps),
            vec![
                (OrderStatus::Pending, StepState::Done),
                (OrderStatus::Confirmed, StepState::Done),
                (OrderStatus::Processing, StepState::Current),
                (OrderStatus::Shipping, StepState::Upcoming),
                (OrderStatus::Delivered, StepState::Upcoming),
            ]
        );
        assert_eq!(steps[0].at, Some(t0()));
        assert_eq!(steps[2].at, Some(t0() + Duration::hours(5)));
        assert_eq!(steps[3].at, None);
        assert_eq!(progress_percent(&order), 50.0);
    }

    #[test]
    fn test_cancelled_after_confirmation() {
        let order = Order {
            status: OrderStatus::Cancelled,
            status_history: vec![
                change(OrderStatus::Confirmed, 1),
                StatusChange {
                    note: Some("Customer request".into()),
                    ..change(OrderStatus::Cancelled, 3)
                },
            ],
            ..Order::default()
        };
        let steps = build_timeline(&order);
        assert_eq!(
            states(&steps),
            vec![
                (OrderStatus::Pending, StepState::Done),
                (OrderStatus::Confirmed, StepState::Done),
                (OrderStatus::Cancelled, StepState::Cancelled),
            ]
        );
        assert_eq!(steps[2].note.as_deref(), Some("Customer request"));
        assert_eq!(progress_percent(&order), 0.0);
    }

    #[test]
    fn test_delivered_order_is_all_done() {
        let order = Order {
            status: OrderStatus::Delivered,
            ..Order::default()
        };
        let steps = build_timeline(&order);
        assert_eq!(steps.len(), 5);
        assert!(steps.iter().all(|s| s.state == StepState::Done));
        assert_eq!(progress_percent(&order), 100.0);
    }
}
