use super::address::{is_valid_phone, Address};
use crate::domain::common::{lenient, AggregateRoot};
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Покупатель (пользователь витрины) глазами админки
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default, deserialize_with = "lenient::id", alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub phone: Option<String>,
    /// `false` — заблокирован администратором
    #[serde(default = "default_true", deserialize_with = "lenient::flag")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::int")]
    pub total_orders: i64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_spent: f64,
    #[serde(default)]
    pub addresses: Vec<Address>,
}

fn default_true() -> bool {
    true
}

impl Customer {
    pub fn status_code(&self) -> &'static str {
        if self.is_active {
            "active"
        } else {
            "blocked"
        }
    }

    pub fn status_display(&self) -> &'static str {
        if self.is_active {
            "Active"
        } else {
            "Blocked"
        }
    }

    /// Зарегистрирован в том же календарном месяце, что и `now`
    pub fn joined_in_month_of(&self, now: DateTime<Utc>) -> bool {
        self.created_at
            .map_or(false, |c| c.year() == now.year() && c.month() == now.month())
    }

    /// Инициалы для аватара
    pub fn initials(&self) -> String {
        let source = if self.name.trim().is_empty() {
            self.email.as_str()
        } else {
            self.name.as_str()
        };
        source
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl AggregateRoot for Customer {
    fn id(&self) -> &str {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Данные формы профиля покупателя
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ProfileDto {
    pub fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.name.trim().len() < 2 {
            return Err(ProfileValidationError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            return Err(ProfileValidationError::InvalidEmail);
        }
        if !self.phone.trim().is_empty() && !is_valid_phone(&self.phone) {
            return Err(ProfileValidationError::InvalidPhone);
        }
        Ok(())
    }
}

/// Смена пароля
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordDto {
    pub current_password: String,
    pub new_password: String,
    #[serde(skip)]
    pub confirm_password: String,
}

impl ChangePasswordDto {
    pub const MIN_LENGTH: usize = 6;

    pub fn validate(&self) -> Result<(), ProfileValidationError> {
        if self.current_password.is_empty() {
            return Err(ProfileValidationError::MissingCurrentPassword);
        }
        if self.new_password.chars().count() < Self::MIN_LENGTH {
            return Err(ProfileValidationError::PasswordTooShort(Self::MIN_LENGTH));
        }
        if self.new_password != self.confirm_password {
            return Err(ProfileValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileValidationError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email address is not valid")]
    InvalidEmail,
    #[error("Phone number must have 10 or 11 digits")]
    InvalidPhone,
    #[error("Current password is required")]
    MissingCurrentPassword,
    #[error("New password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Простая проверка формата: `local@domain.tld` без пробелов
pub fn is_valid_email(raw: &str) -> bool {
    let raw = raw.trim();
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .rsplit_once('.')
                    .map_or(false, |(host, tld)| !host.is_empty() && tld.len() >= 2)
        }
        None => false,
    }
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CustomerStats {
    pub total: usize,
    pub active: usize,
    pub blocked: usize,
    pub new_this_month: usize,
    /// Доля активных, %; 0 для пустого списка
    pub active_percent: f64,
}

impl CustomerStats {
    pub fn from_records(records: &[Customer], now: DateTime<Utc>) -> Self {
        let active = records.iter().filter(|c| c.is_active).count();
        Self {
            total: records.len(),
            active,
            blocked: records.len() - active,
            new_this_month: records.iter().filter(|c| c.joined_in_month_of(now)).count(),
            active_percent: crate::shared::stats::percent_of_count(active, records.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 14, 10, 0, 0).unwrap()
    }

    fn customer(id: &str, active: bool, joined: (i32, u32, u32)) -> Customer {
        Customer {
            id: id.into(),
            name: "Tran Thi B".into(),
            email: format!("{id}@mail.vn"),
            is_active: active,
            created_at: Some(Utc.with_ymd_and_hms(joined.0, joined.1, joined.2, 0, 0, 0).unwrap()),
            ..Customer::default()
        }
    }

    #[test]
    fn test_stats() {
        let records = vec![
            customer("1", true, (2025, 2, 1)),
            customer("2", false, (2025, 1, 31)),
            customer("3", true, (2024, 2, 10)),
            customer("4", true, (2025, 2, 14)),
        ];
        let stats = CustomerStats::from_records(&records, now());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.blocked, 1);
        assert_eq!(stats.new_this_month, 2);
        assert_eq!(stats.active_percent, 75.0);
    }

    #[test]
    fn test_stats_on_empty_list_are_zero() {
        let stats = CustomerStats::from_records(&[], now());
        assert_eq!(stats.active_percent, 0.0);
        assert!(!stats.active_percent.is_nan());
    }

    #[test]
    fn test_initials() {
        assert_eq!(customer("1", true, (2025, 1, 1)).initials(), "TT");
        let anon = Customer {
            name: " ".into(),
            email: "x@y.vn".into(),
            ..Customer::default()
        };
        assert_eq!(anon.initials(), "X");
    }

    #[test]
    fn test_profile_validation() {
        let ok = ProfileDto {
            name: "Le Van C".into(),
            email: "c@shop.vn".into(),
            phone: String::new(),
        };
        assert_eq!(ok.validate(), Ok(()));
        assert_eq!(
            ProfileDto { email: "c@shop".into(), ..ok.clone() }.validate(),
            Err(ProfileValidationError::InvalidEmail)
        );
        assert_eq!(
            ProfileDto { phone: "123".into(), ..ok.clone() }.validate(),
            Err(ProfileValidationError::InvalidPhone)
        );
        assert_eq!(
            ProfileDto { name: "L".into(), ..ok }.validate(),
            Err(ProfileValidationError::NameTooShort)
        );
    }

    #[test]
    fn test_change_password_validation() {
        let dto = ChangePasswordDto {
            current_password: "old".into(),
            new_password: "secret1".into(),
            confirm_password: "secret2".into(),
        };
        assert_eq!(dto.validate(), Err(ProfileValidationError::PasswordMismatch));
        let dto = ChangePasswordDto {
            confirm_password: "secret1".into(),
            ..dto
        };
        assert_eq!(dto.validate(), Ok(()));
    }
}
