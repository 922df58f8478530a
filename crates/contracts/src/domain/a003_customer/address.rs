use crate::domain::common::lenient;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Адрес доставки покупателя
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub city: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_default: bool,
}

impl Address {
    /// Новый адрес из формы. ID временный, сервер назначает свой.
    pub fn draft() -> Self {
        Self {
            id: format!("draft-{}", Uuid::new_v4()),
            ..Self::default()
        }
    }

    pub fn is_draft(&self) -> bool {
        self.id.is_empty() || self.id.starts_with("draft-")
    }

    /// Адрес одной строкой, пустые части пропускаются
    pub fn one_line(&self) -> String {
        [&self.street, &self.ward, &self.district, &self.city]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn validate(&self) -> Result<(), AddressValidationError> {
        if self.full_name.trim().is_empty() {
            return Err(AddressValidationError::MissingName);
        }
        if !is_valid_phone(&self.phone) {
            return Err(AddressValidationError::InvalidPhone);
        }
        if self.street.trim().is_empty() {
            return Err(AddressValidationError::MissingStreet);
        }
        if self.city.trim().is_empty() {
            return Err(AddressValidationError::MissingCity);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressValidationError {
    #[error("Recipient name is required")]
    MissingName,
    #[error("Phone number must have 10 or 11 digits")]
    InvalidPhone,
    #[error("Street address is required")]
    MissingStreet,
    #[error("City is required")]
    MissingCity,
}

/// Телефон: 10–11 цифр, допускаются пробелы, дефисы и ведущий `+`
pub fn is_valid_phone(raw: &str) -> bool {
    let raw = raw.trim();
    let body = raw.strip_prefix('+').unwrap_or(raw);
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == ' ' || c == '-') {
        return false;
    }
    let digits = body.chars().filter(char::is_ascii_digit).count();
    (10..=11).contains(&digits)
}

/// Адресная книга. Если адреса есть, ровно один из них — адрес по умолчанию.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressBook {
    addresses: Vec<Address>,
}

impl AddressBook {
    /// Строит книгу из ответа сервера и восстанавливает инвариант:
    /// остается первый адрес с флагом, либо первый адрес вообще.
    pub fn new(addresses: Vec<Address>) -> Self {
        let default_idx = addresses.iter().position(|a| a.is_default).unwrap_or(0);
        let addresses = addresses
            .into_iter()
            .enumerate()
            .map(|(i, a)| Address {
                is_default: i == default_idx,
                ..a
            })
            .collect();
        Self { addresses }
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn default_address(&self) -> Option<&Address> {
        self.addresses.iter().find(|a| a.is_default)
    }

    pub fn get(&self, id: &str) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }

    /// Добавляет адрес. Первый адрес всегда становится адресом по умолчанию.
    pub fn with_added(&self, address: Address) -> Self {
        let make_default = address.is_default || self.addresses.is_empty();
        let id = address.id.clone();
        let mut addresses = self.addresses.clone();
        addresses.push(address);
        let book = Self { addresses };
        if make_default {
            book.with_default(&id)
        } else {
            book.normalized()
        }
    }

    /// Заменяет адрес с тем же ID. Снять флаг по умолчанию так нельзя:
    /// для этого другой адрес назначается адресом по умолчанию.
    pub fn with_updated(&self, address: Address) -> Self {
        let make_default = address.is_default;
        let id = address.id.clone();
        let addresses = self
            .addresses
            .iter()
            .map(|a| {
                if a.id == id {
                    Address {
                        is_default: a.is_default || make_default,
                        ..address.clone()
                    }
                } else {
                    a.clone()
                }
            })
            .collect();
        let book = Self { addresses };
        if make_default {
            book.with_default(&id)
        } else {
            book.normalized()
        }
    }

    /// Удаляет адрес; если удален адрес по умолчанию, им становится первый оставшийся
    pub fn without(&self, id: &str) -> Self {
        Self::new(
            self.addresses
                .iter()
                .filter(|a| a.id != id)
                .cloned()
                .collect(),
        )
    }

    /// Делает адрес адресом по умолчанию. Неизвестный ID ничего не меняет.
    pub fn with_default(&self, id: &str) -> Self {
        if self.get(id).is_none() {
            return self.clone();
        }
        Self {
            addresses: self
                .addresses
                .iter()
                .map(|a| Address {
                    is_default: a.id == id,
                    ..a.clone()
                })
                .collect(),
        }
    }

    fn normalized(self) -> Self {
        Self::new(self.addresses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(id: &str, is_default: bool) -> Address {
        Address {
            id: id.into(),
            full_name: "Nguyen Van A".into(),
            phone: "0901234567".into(),
            street: "12 Le Loi".into(),
            city: "Ho Chi Minh".into(),
            is_default,
            ..Address::default()
        }
    }

    fn default_ids(book: &AddressBook) -> Vec<&str> {
        book.addresses()
            .iter()
            .filter(|a| a.is_default)
            .map(|a| a.id.as_str())
            .collect()
    }

    #[test]
    fn test_single_default_invariant() {
        let book = AddressBook::new(vec![addr("a", false), addr("b", true), addr("c", true)]);
        assert_eq!(default_ids(&book), vec!["b"]);

        let book = AddressBook::new(vec![addr("a", false), addr("b", false)]);
        assert_eq!(default_ids(&book), vec!["a"]);

        let book = book.with_default("b");
        assert_eq!(default_ids(&book), vec!["b"]);
        assert_eq!(default_ids(&book.with_default("zzz")), vec!["b"]);
    }

    #[test]
    fn test_add_and_remove_keep_one_default() {
        let book = AddressBook::default().with_added(addr("a", false));
        assert_eq!(default_ids(&book), vec!["a"]);

        let book = book.with_added(addr("b", true));
        assert_eq!(default_ids(&book), vec!["b"]);

        let book = book.without("b");
        assert_eq!(default_ids(&book), vec!["a"]);
        assert!(AddressBook::default().without("a").default_address().is_none());
    }

    #[test]
    fn test_update_does_not_drop_default() {
        let book = AddressBook::new(vec![addr("a", true), addr("b", false)]);
        let book = book.with_updated(Address {
            street: "99 Hai Ba Trung".into(),
            ..addr("a", false)
        });
        assert_eq!(default_ids(&book), vec!["a"]);
        assert_eq!(book.get("a").map(|a| a.street.as_str()), Some("99 Hai Ba Trung"));
    }

    #[test]
    fn test_validation() {
        assert_eq!(addr("a", false).validate(), Ok(()));
        assert_eq!(
            Address { phone: "12345".into(), ..addr("a", false) }.validate(),
            Err(AddressValidationError::InvalidPhone)
        );
        assert_eq!(
            Address { city: " ".into(), ..addr("a", false) }.validate(),
            Err(AddressValidationError::MissingCity)
        );
        assert!(is_valid_phone("+84 901-234-567"));
        assert!(!is_valid_phone("09012a4567"));
    }

    #[test]
    fn test_draft_ids_are_unique() {
        let a = Address::draft();
        let b = Address::draft();
        assert!(a.is_draft());
        assert_ne!(a.id, b.id);
        assert!(!addr("a", false).is_draft());
    }

    #[test]
    fn test_one_line() {
        let a = Address {
            ward: "Ben Nghe".into(),
            district: "".into(),
            ..addr("a", false)
        };
        assert_eq!(a.one_line(), "12 Le Loi, Ben Nghe, Ho Chi Minh");
    }
}
