use super::EntityMetadata;

/// Трейт для корня агрегата
///
/// Определяет обязательные методы и метаданные для всех агрегатов системы
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id;

    // Методы экземпляра (данные конкретной записи)

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить наименование записи
    fn name(&self) -> &str;

    /// Получить метаданные жизненного цикла
    fn metadata(&self) -> &EntityMetadata;

    // Метаданные класса агрегата (статические данные)

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Имя коллекции для REST API (например, "movie")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Фильм")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Фильмы")
    fn list_name() -> &'static str;

    /// Полное имя агрегата для системы (например, "a001_movie")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
