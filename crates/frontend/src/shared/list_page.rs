//! Состояние страницы списка поверх движка `contracts::shared::list_view`.
//!
//! Страница владеет хранилищем записей, фильтрами и пагинацией.
//! `ListController` — копируемая ручка для обработчиков событий:
//!
//! ```rust,ignore
//! let list = ListController::new(ListEngine::new(coupon_list_descriptor()));
//! list.load(fetch_coupons());
//! let page = move || list.page();
//! ```

use crate::shared::config::config;
use crate::shared::date_utils::parse_input_date;
use crate::shared::fetch_guard::MountGuard;
use crate::shared::storage;
use chrono::{DateTime, Utc};
use contracts::shared::list_view::{
    Bounds, FilterRule, FilterState, ListDescriptor, ListEngine, ListRecord, ListState, Page,
    RecordStore, SortSpec, ALL,
};
use leptos::prelude::*;
use std::future::Future;

const PAGE_SIZE_STORAGE_KEY: &str = "listPageSize";

/// Размер страницы из настроек пользователя или конфигурации
pub fn preferred_page_size() -> usize {
    storage::get_item(PAGE_SIZE_STORAGE_KEY)
        .as_deref()
        .and_then(parse_page_size)
        .unwrap_or(config().lists.default_page_size)
}

fn parse_page_size(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|size| *size > 0)
}

pub fn set_preferred_page_size(size: usize) {
    storage::set_item(PAGE_SIZE_STORAGE_KEY, &size.max(1).to_string());
}

/// Данные одной страницы списка
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<R> {
    pub store: RecordStore<R>,
    pub list: ListState,
    pub is_loading: bool,
    pub is_loaded: bool,
    pub error: Option<String>,
}

impl<R: ListRecord + Clone> ListPage<R> {
    pub fn new(engine: &ListEngine<R>, page_size: usize) -> Self {
        Self {
            store: RecordStore::default(),
            list: engine.initial_state(page_size),
            is_loading: false,
            is_loaded: false,
            error: None,
        }
    }

    /// Результат загрузки. Ошибка оставляет прежние записи.
    pub fn apply_load(
        &mut self,
        result: Result<Vec<R>, String>,
        engine: &ListEngine<R>,
        now: DateTime<Utc>,
    ) {
        self.is_loading = false;
        match result {
            Ok(records) => {
                self.store = RecordStore::new(records);
                self.is_loaded = true;
                self.error = None;
                self.sync_page(engine, now);
            }
            Err(e) => self.error = Some(e),
        }
    }

    /// Замена записи по ID после подтвержденной мутации
    pub fn replace(&mut self, record: R, engine: &ListEngine<R>, now: DateTime<Utc>) {
        self.store = self.store.with_replaced(record);
        self.sync_page(engine, now);
    }

    pub fn remove(&mut self, id: &str, engine: &ListEngine<R>, now: DateTime<Utc>) {
        self.store = self.store.without(id);
        self.sync_page(engine, now);
    }

    fn sync_page(&mut self, engine: &ListEngine<R>, now: DateTime<Utc>) {
        let count = engine.count(self.store.records(), &self.list.filters, now);
        self.list.sync_page(count);
    }

    pub fn page(&self, engine: &ListEngine<R>, now: DateTime<Utc>) -> Page<R> {
        engine.run(self.store.records(), &self.list, now)
    }
}

/// Подписи активных критериев для чипов: (ключ, текст)
pub fn active_filter_labels<R>(
    descriptor: &ListDescriptor<R>,
    state: &FilterState,
) -> Vec<(String, String)> {
    let mut labels = Vec::new();
    if let Some(term) = state.search_term() {
        labels.push(("search".to_string(), format!("Search: {}", term)));
    }
    for def in &descriptor.filters {
        match def.rule {
            FilterRule::Equals(_) | FilterRule::Derived(_) => {
                let selected = state.selection(def.key);
                if selected == ALL || selected.is_empty() {
                    continue;
                }
                let title = def
                    .options
                    .iter()
                    .find(|(code, _)| *code == selected)
                    .map(|(_, title)| *title)
                    .unwrap_or(selected);
                labels.push((def.key.to_string(), format!("{}: {}", def.label, title)));
            }
            FilterRule::DateRange(_) | FilterRule::NumberRange(_) => {
                if let Some(bounds) = state.active_range(def.key) {
                    labels.push((def.key.to_string(), format!("{}: {}", def.label, describe(bounds))));
                }
            }
        }
    }
    labels
}

fn describe(bounds: &Bounds) -> String {
    fn side<T: ToString>(v: &Option<T>) -> String {
        v.as_ref().map(T::to_string).unwrap_or_else(|| "…".to_string())
    }
    match bounds {
        Bounds::Date { from, to } => format!("{} – {}", side(from), side(to)),
        Bounds::Number { min, max } => format!("{} – {}", side(min), side(max)),
    }
}

/// Копируемая ручка списка для обработчиков и замыканий view
pub struct ListController<R: Send + Sync + 'static> {
    pub state: RwSignal<ListPage<R>>,
    /// ID записи, по которой идет запрос мутации
    pub busy: RwSignal<Option<String>>,
    engine: StoredValue<ListEngine<R>>,
    guard: StoredValue<MountGuard>,
}

impl<R: Send + Sync + 'static> Clone for ListController<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListController<R> {}

impl<R> ListController<R>
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    /// Создается внутри компонента: загрузки привязаны к его жизни
    pub fn new(engine: ListEngine<R>) -> Self {
        Self::with_page_size(engine, preferred_page_size())
    }

    pub fn with_page_size(engine: ListEngine<R>, page_size: usize) -> Self {
        let page = ListPage::new(&engine, page_size);
        Self {
            state: RwSignal::new(page),
            busy: RwSignal::new(None),
            engine: StoredValue::new(engine),
            guard: StoredValue::new(MountGuard::new()),
        }
    }

    pub fn descriptor(&self) -> ListDescriptor<R> {
        self.engine.with_value(|e| e.descriptor().clone())
    }

    /// Текущая страница (реактивно)
    pub fn page(&self) -> Page<R> {
        let now = Utc::now();
        self.engine
            .with_value(|engine| self.state.with(|s| s.page(engine, now)))
    }

    /// Все записи хранилища (реактивно), для агрегатов
    pub fn records(&self) -> Vec<R> {
        self.state.with(|s| s.store.records().to_vec())
    }

    pub fn with_records<T>(&self, f: impl FnOnce(&[R]) -> T) -> T {
        self.state.with(|s| f(s.store.records()))
    }

    pub fn filters(&self) -> FilterState {
        self.state.with(|s| s.list.filters.clone())
    }

    pub fn sort_signal(&self) -> Signal<SortSpec> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.list.filters.sort.clone()))
    }

    pub fn selection(&self, key: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.list.filters.selection(key).to_string()))
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn active_filter_count(&self) -> usize {
        self.state.with(|s| s.list.filters.active_count())
    }

    pub fn active_filter_labels(&self) -> Vec<(String, String)> {
        self.engine
            .with_value(|e| self.state.with(|s| active_filter_labels(e.descriptor(), &s.list.filters)))
    }

    pub fn set_search(&self, term: String) {
        self.state.update(|s| s.list.set_search(term));
    }

    pub fn set_selection(&self, key: &str, value: String) {
        self.state.update(|s| s.list.set_selection(key, value));
    }

    /// Диапазон дат из полей `<input type="date">`; пустые поля — без границы
    pub fn set_date_range(&self, key: &str, from: &str, to: &str) {
        let bounds = Bounds::Date {
            from: parse_input_date(from),
            to: parse_input_date(to),
        };
        self.state.update(|s| s.list.set_range(key, bounds));
    }

    pub fn set_number_range(&self, key: &str, min: Option<f64>, max: Option<f64>) {
        self.state
            .update(|s| s.list.set_range(key, Bounds::Number { min, max }));
    }

    /// Снятие одного критерия по ключу чипа
    pub fn clear_criterion(&self, key: &str) {
        self.state.update(|s| {
            if key == "search" {
                s.list.set_search("");
            } else if s.list.filters.ranges.contains_key(key) {
                s.list.clear_range(key);
            } else {
                s.list.set_selection(key, ALL);
            }
        });
    }

    pub fn clear_filters(&self) {
        self.state.update(|s| s.list.clear_filters());
    }

    /// Сортировка только по ключам из дескриптора
    pub fn toggle_sort(&self, key: &str) {
        if !self.engine.with_value(|e| e.descriptor().is_sortable(key)) {
            return;
        }
        self.state.update(|s| s.list.toggle_sort(key));
    }

    pub fn go_to_page(&self, page: usize) {
        let now = Utc::now();
        let total = self.engine.with_value(|e| {
            self.state.with_untracked(|s| {
                let count = e.count(s.store.records(), &s.list.filters, now);
                contracts::shared::list_view::total_pages(count, s.list.paging.page_size)
            })
        });
        self.state.update(|s| {
            s.list.go_to_page(page, total);
        });
    }

    /// Выбор размера страницы запоминается для всех списков
    pub fn set_page_size(&self, size: usize) {
        self.state.update(|s| s.list.set_page_size(size));
        set_preferred_page_size(size);
    }

    /// Загрузка всего набора. Ответ после размонтирования отбрасывается,
    /// ошибка оставляет прежние записи.
    pub fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<R>, String>> + 'static,
    {
        let state = self.state;
        let engine = self.engine;
        let guard = self.guard.get_value();
        state.update(|s| s.is_loading = true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch.await;
            guard.run(|| {
                if let Err(e) = &result {
                    log::warn!("list load failed: {}", e);
                }
                engine.with_value(|engine| {
                    state.update(|s| s.apply_load(result, engine, Utc::now()))
                });
            });
        });
    }

    pub fn replace(&self, record: R) {
        self.engine
            .with_value(|engine| self.state.update(|s| s.replace(record, engine, Utc::now())));
    }

    pub fn remove(&self, id: &str) {
        self.engine
            .with_value(|engine| self.state.update(|s| s.remove(id, engine, Utc::now())));
    }

    /// Ошибка мутации: показывается над таблицей, записи не меняются
    pub fn set_error(&self, error: Option<String>) {
        self.state.update(|s| s.error = error);
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.with(|b| b.as_deref() == Some(id))
    }

    /// Мутация одной записи (toggle, delete). Пока запрос идет, запись занята;
    /// `on_ok` применяет ответ сервера к хранилищу.
    pub fn mutate<T, F, H>(&self, id: String, request: F, on_ok: H)
    where
        T: 'static,
        F: Future<Output = Result<T, String>> + 'static,
        H: FnOnce(&Self, T) + 'static,
    {
        let list = *self;
        let guard = self.guard.get_value();
        self.busy.set(Some(id));
        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            list.settle(&guard, result, on_ok);
        });
    }

    /// Завершение мутации. После размонтирования ничего не трогает
    /// и возвращает `None`.
    fn settle<T>(
        &self,
        guard: &MountGuard,
        result: Result<T, String>,
        on_ok: impl FnOnce(&Self, T),
    ) -> Option<()> {
        guard.run(|| {
            self.busy.set(None);
            match result {
                Ok(value) => {
                    self.set_error(None);
                    on_ok(self, value);
                }
                Err(e) => {
                    log::warn!("list mutation failed: {}", e);
                    self.set_error(Some(e));
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a002_coupon::{coupon_list_descriptor, Coupon};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 0, 0, 0).unwrap()
    }

    fn coupon(id: &str) -> Coupon {
        Coupon {
            id: id.into(),
            code: format!("CODE{}", id),
            end_date: Some(now() + chrono::Duration::days(10)),
            ..Coupon::default()
        }
    }

    #[test]
    fn test_failed_load_keeps_records() {
        let engine = ListEngine::new(coupon_list_descriptor());
        let mut page = ListPage::new(&engine, 10);
        page.apply_load(Ok(vec![coupon("1"), coupon("2")]), &engine, now());
        assert_eq!(page.store.len(), 2);

        page.apply_load(Err("Network error".into()), &engine, now());
        assert_eq!(page.store.len(), 2);
        assert_eq!(page.error.as_deref(), Some("Network error"));
    }

    #[test]
    fn test_remove_clamps_page() {
        let engine = ListEngine::new(coupon_list_descriptor());
        let mut page = ListPage::new(&engine, 2);
        page.apply_load(
            Ok((1..=3).map(|i| coupon(&i.to_string())).collect()),
            &engine,
            now(),
        );
        assert!(page.list.go_to_page(2, 2));
        page.remove("3", &engine, now());
        assert_eq!(page.list.paging.current_page, 1);
        assert_eq!(page.page(&engine, now()).items.len(), 2);
    }

    fn loaded_controller(owner: &Owner, coupons: Vec<Coupon>) -> ListController<Coupon> {
        owner.with(|| {
            let list = ListController::with_page_size(ListEngine::new(coupon_list_descriptor()), 10);
            list.engine
                .with_value(|e| list.state.update(|s| s.apply_load(Ok(coupons), e, now())));
            list
        })
    }

    fn enabled(list: &ListController<Coupon>) -> usize {
        list.with_records(|r| r.iter().filter(|c| c.is_active).count())
    }

    #[test]
    fn test_failed_mutation_keeps_store_and_counts() {
        let owner = Owner::new();
        let coupons = (0..10)
            .map(|i| Coupon {
                is_active: i < 4,
                ..coupon(&i.to_string())
            })
            .collect();
        let list = loaded_controller(&owner, coupons);
        let guard = owner.with(|| list.guard.get_value());
        owner.with(|| {
            list.busy.set(Some("7".into()));
            let before = list.records();

            let applied = list.settle(&guard, Err::<Coupon, _>("Forbidden".into()), |l, c| l.replace(c));
            assert_eq!(applied, Some(()));
            assert_eq!(list.records(), before);
            assert_eq!(enabled(&list), 4);
            assert_eq!(list.error().as_deref(), Some("Forbidden"));
            assert!(!list.is_busy("7"));

            let toggled = Coupon {
                is_active: true,
                ..coupon("7")
            };
            list.settle(&guard, Ok(toggled), |l, c| l.replace(c));
            assert_eq!(enabled(&list), 5);
            assert_eq!(list.error(), None);
        });
    }

    #[test]
    fn test_mutation_after_unmount_is_dropped() {
        let owner = Owner::new();
        let list = loaded_controller(&owner, vec![coupon("1"), coupon("2")]);
        let guard = owner.with(|| list.guard.get_value());

        owner.cleanup();
        assert!(!guard.is_alive());

        let mut touched = false;
        let applied = list.settle(&guard, Ok(coupon("2")), |l, c| {
            touched = true;
            l.replace(c);
        });
        assert_eq!(applied, None);
        assert!(!touched);

        let removed = list.settle(&guard, Ok(()), |l, _| l.remove("1"));
        assert_eq!(removed, None);
    }

    #[test]
    fn test_stored_page_size_is_read_back() {
        assert_eq!(parse_page_size(&25usize.to_string()), Some(25));
        assert_eq!(parse_page_size(" 50 "), Some(50));
        assert_eq!(parse_page_size("0"), None);
        assert_eq!(parse_page_size("ten"), None);
    }

    #[test]
    fn test_active_filter_labels_use_option_titles() {
        let descriptor = coupon_list_descriptor();
        let mut state = FilterState::default();
        state.search = " tet ".into();
        state.selections.insert("status".into(), "expired".into());
        state.selections.insert("discount_type".into(), ALL.into());

        let labels = active_filter_labels(&descriptor, &state);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].1, "Search: tet");
        assert_eq!(labels[1].0, "status");
        assert!(labels[1].1.ends_with("Expired"));
    }
}
