/// Трейт для корня агрегата
///
/// Статические метаданные сущности: индекс, ресурс REST API и подписи для UI
pub trait AggregateRoot {
    /// Получить ID записи
    fn id(&self) -> &str;

    /// Индекс агрегата в системе (например, "a002")
    fn aggregate_index() -> &'static str;

    /// Имя ресурса REST API (например, "coupons")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Полное имя агрегата (например, "a002_coupons")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Путь коллекции в API (например, "/api/coupons")
    fn collection_path() -> String {
        format!("/api/{}", Self::collection_name())
    }

    /// Путь конкретной записи в API
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::collection_path(), id)
    }
}
