use super::field::ListRecord;

/// Записи одной страницы списка, загруженные с сервера целиком.
///
/// Хранилище не мутируется на месте: замена записи возвращает новое хранилище,
/// агрегаты (счетчики) всегда пересчитываются из полного набора записей.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: ListRecord + Clone> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    /// Заменяет запись с тем же ID. Если записи нет — хранилище не меняется.
    pub fn with_replaced(&self, record: R) -> Self {
        let id = record.record_id();
        let mut replacement = Some(record);
        let records = self
            .records
            .iter()
            .map(|r| {
                if r.record_id() == id {
                    replacement.take().unwrap_or_else(|| r.clone())
                } else {
                    r.clone()
                }
            })
            .collect();
        Self { records }
    }

    /// Новое хранилище, где запись с `id` построена функцией `f` из старой
    pub fn patched(&self, id: &str, f: impl FnOnce(&R) -> R) -> Option<Self> {
        let current = self.get(id)?;
        Some(self.with_replaced(f(current)))
    }

    /// Добавляет запись в начало (новые записи показываются первыми)
    pub fn with_prepended(&self, record: R) -> Self {
        let mut records = Vec::with_capacity(self.records.len() + 1);
        records.push(record);
        records.extend(self.records.iter().cloned());
        Self { records }
    }

    pub fn without(&self, id: &str) -> Self {
        Self {
            records: self
                .records
                .iter()
                .filter(|r| r.record_id() != id)
                .cloned()
                .collect(),
        }
    }

    pub fn count_where(&self, pred: impl Fn(&R) -> bool) -> usize {
        self.records.iter().filter(|r| pred(r)).count()
    }
}
