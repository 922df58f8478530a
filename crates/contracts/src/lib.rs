//! Общие типы витрины и админки: агрегаты, DTO, конверты ответов API
//! и движок клиентских списков. Крейт не зависит от платформы и
//! тестируется нативно.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
