use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Количество страниц; пустой список — ноль страниц
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Текущая страница (с 1) и размер страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Переход на страницу. Вне `[1, total_pages]` — ничего не делает.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages || page == self.current_page {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next(&mut self, total_pages: usize) -> bool {
        self.go_to(self.current_page + 1, total_pages)
    }

    pub fn prev(&mut self, total_pages: usize) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.go_to(page, total_pages),
            None => false,
        }
    }

    pub fn can_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_next(&self, total_pages: usize) -> bool {
        self.current_page < total_pages
    }

    /// Зажимает текущую страницу в `[1, total_pages]` (при нуле страниц — 1)
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = clamp_page(self.current_page, total_pages);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.reset();
    }
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Одна страница результата
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Номер страницы (с 1)
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Количество записей после фильтрации
    pub total_count: usize,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages: 0,
            total_count: 0,
        }
    }
}

impl<T> Page<T> {
    /// Диапазон «с..по» (с 1) для подписи; `None` для пустой страницы
    pub fn range(&self) -> Option<(usize, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let first = (self.page - 1) * self.page_size + 1;
        Some((first, first + self.items.len() - 1))
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}

/// Срез `[(page-1)*size, page*size)`. Страница вне диапазона — пустой срез.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_count = items.len();
    let pages = total_pages(total_count, page_size);
    let slice = if page >= 1 && page <= pages {
        let start = (page - 1) * page_size;
        let end = (start + page_size).min(total_count);
        items[start..end].to_vec()
    } else {
        Vec::new()
    };

    Page {
        items: slice,
        page,
        page_size,
        total_pages: pages,
        total_count,
    }
}

/// Элемент строки номеров страниц
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Номера страниц для отображения: первая, последняя, окно вокруг текущей,
/// многоточие на месте любого пропуска
pub fn page_window(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total_pages);
    let mut pages = vec![1, total_pages];
    for p in current.saturating_sub(1)..=current + 1 {
        if p >= 1 && p <= total_pages {
            pages.push(p);
        }
    }
    pages.sort_unstable();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() * 2);
    let mut prev: Option<usize> = None;
    for p in pages {
        if let Some(last) = prev {
            if p > last + 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page(p));
        prev = Some(p);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::{Ellipsis, Page as P};

    #[test]
    fn test_empty_list_has_no_pages() {
        let items: Vec<u32> = Vec::new();
        assert_eq!(total_pages(0, 10), 0);
        for page in 0..3 {
            let result = paginate(&items, page, 10);
            assert_eq!(result.total_pages, 0);
            assert!(result.items.is_empty());
        }
        assert!(page_window(1, 0).is_empty());
    }

    #[test]
    fn test_last_page_is_partial() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.range(), Some((21, 25)));

        assert!(paginate(&items, 4, 10).items.is_empty());
    }

    #[test]
    fn test_navigation_guards() {
        let mut state = PageState::new(10);
        assert!(!state.prev(3));
        assert_eq!(state.current_page, 1);
        assert!(state.go_to(3, 3));
        assert!(!state.next(3));
        assert!(!state.go_to(4, 3));
        assert_eq!(state.current_page, 3);
        assert!(!state.go_to(0, 3));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut state = PageState::new(10);
        state.go_to(5, 5);
        state.clamp(2);
        assert_eq!(state.current_page, 2);
        state.clamp(0);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = PageState::new(10);
        state.go_to(2, 3);
        state.set_page_size(0);
        assert_eq!(state, PageState { current_page: 1, page_size: 1 });
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 1), vec![P(1)]);
        assert_eq!(page_window(1, 3), vec![P(1), P(2), P(3)]);
        assert_eq!(
            page_window(5, 10),
            vec![P(1), Ellipsis, P(4), P(5), P(6), Ellipsis, P(10)]
        );
        assert_eq!(page_window(1, 10), vec![P(1), P(2), Ellipsis, P(10)]);
        assert_eq!(page_window(10, 10), vec![P(1), Ellipsis, P(9), P(10)]);
        assert_eq!(page_window(3, 10), vec![P(1), P(2), P(3), P(4), Ellipsis, P(10)]);
    }
}
