use super::criteria::{Bounds, FilterState, ListDescriptor};
use super::field::ListRecord;
use super::filter::filter_records;
use super::pager::{paginate, total_pages, Page, PageState};
use super::sort::{sort_records, SortSpec};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Состояние списка, которым владеет страница: фильтры, сортировка, пагинация
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListState {
    pub filters: FilterState,
    pub paging: PageState,
}

impl ListState {
    pub fn new(default_sort: SortSpec, page_size: usize) -> Self {
        Self {
            filters: FilterState::with_sort(default_sort),
            paging: PageState::new(page_size),
        }
    }

    // Любое изменение критериев возвращает на первую страницу

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.search = term.into();
        self.paging.reset();
    }

    pub fn set_selection(&mut self, key: &str, value: impl Into<String>) {
        self.filters.selections.insert(key.to_string(), value.into());
        self.paging.reset();
    }

    pub fn set_range(&mut self, key: &str, bounds: Bounds) {
        self.filters.ranges.insert(key.to_string(), bounds);
        self.paging.reset();
    }

    pub fn clear_range(&mut self, key: &str) {
        self.filters.ranges.remove(key);
        self.paging.reset();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.paging.reset();
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.filters.sort.toggle(key);
        self.paging.reset();
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.paging.set_page_size(page_size);
    }

    /// Переход на страницу с учетом текущего количества страниц
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        self.paging.go_to(page, total_pages)
    }

    /// Вызывается после обновления хранилища: зажимает номер страницы
    pub fn sync_page(&mut self, filtered_count: usize) {
        self.paging
            .clamp(total_pages(filtered_count, self.paging.page_size));
    }
}

/// Параметризованный движок списка: фильтр → сортировка → пагинация
pub struct ListEngine<R> {
    descriptor: ListDescriptor<R>,
}

impl<R> Clone for ListEngine<R> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
        }
    }
}

impl<R: ListRecord + Clone> ListEngine<R> {
    pub fn new(descriptor: ListDescriptor<R>) -> Self {
        Self { descriptor }
    }

    pub fn descriptor(&self) -> &ListDescriptor<R> {
        &self.descriptor
    }

    /// Начальное состояние списка с сортировкой по умолчанию
    pub fn initial_state(&self, page_size: usize) -> ListState {
        ListState::new(self.descriptor.default_sort.clone(), page_size)
    }

    pub fn filter<'a>(
        &self,
        records: &'a [R],
        state: &FilterState,
        now: DateTime<Utc>,
    ) -> Vec<&'a R> {
        filter_records(records, &self.descriptor, state, now)
    }

    pub fn sort<'a>(&self, mut records: Vec<&'a R>, spec: &SortSpec) -> Vec<&'a R> {
        sort_records(&mut records, &self.descriptor, spec);
        records
    }

    pub fn paginate(&self, records: &[&R], page: usize, page_size: usize) -> Page<R> {
        paginate(records, page, page_size).map(|r| r.clone())
    }

    /// Количество записей после фильтрации
    pub fn count(&self, records: &[R], state: &FilterState, now: DateTime<Utc>) -> usize {
        self.filter(records, state, now).len()
    }

    /// Полный проход. Номер страницы зажимается по фактическому количеству страниц,
    /// само состояние не меняется.
    pub fn run(&self, records: &[R], state: &ListState, now: DateTime<Utc>) -> Page<R> {
        let filtered = self.filter(records, &state.filters, now);
        let sorted = self.sort(filtered, &state.filters.sort);
        let mut paging = state.paging;
        paging.clamp(total_pages(sorted.len(), paging.page_size));
        self.paginate(&sorted, paging.current_page, paging.page_size)
    }
}
