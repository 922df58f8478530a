use anyhow::Context;
use contracts::domain::a006_cart::ShippingPolicy;
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub lists: ListsConfig,
    pub shop: ShopConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Порт бэкенда на том же хосте, что и витрина
    pub port: u16,
    /// Полный адрес API; если задан, `port` не используется
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListsConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ShopConfig {
    pub currency_symbol: String,
    pub shipping_fee: f64,
    #[serde(default)]
    pub free_shipping_threshold: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ThemeConfig {
    #[serde(default)]
    pub tet_default: bool,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000

[lists]
default_page_size = 10
page_size_options = [10, 20, 50]

[shop]
currency_symbol = "₫"
shipping_fee = 30000
free_shipping_threshold = 500000

[theme]
tet_default = false
"#;

/// Конфигурация при сборке: `STOREFRONT_CONFIG` подменяет встроенную
const BUILD_CONFIG: Option<&str> = option_env!("STOREFRONT_CONFIG");

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => config,
    Err(e) => {
        log::error!("Invalid STOREFRONT_CONFIG, using defaults: {:#}", e);
        builtin_config()
    }
});

/// Load configuration
///
/// Search order:
/// 1. `STOREFRONT_CONFIG` captured at build time
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    match BUILD_CONFIG {
        Some(raw) => parse_config(raw).context("parsing STOREFRONT_CONFIG"),
        None => parse_config(DEFAULT_CONFIG).context("parsing embedded config"),
    }
}

pub fn parse_config(raw: &str) -> anyhow::Result<AppConfig> {
    let mut config: AppConfig = toml::from_str(raw)?;
    if config.lists.default_page_size == 0 {
        anyhow::bail!("lists.default_page_size must be greater than 0");
    }
    config.lists.page_size_options.retain(|&s| s > 0);
    if !config
        .lists
        .page_size_options
        .contains(&config.lists.default_page_size)
    {
        config
            .lists
            .page_size_options
            .push(config.lists.default_page_size);
        config.lists.page_size_options.sort_unstable();
    }
    Ok(config)
}

fn builtin_config() -> AppConfig {
    // встроенная строка проверяется тестом ниже
    toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|_| AppConfig {
        api: ApiConfig {
            port: 3000,
            base_url: None,
        },
        lists: ListsConfig {
            default_page_size: 10,
            page_size_options: vec![10, 20, 50],
        },
        shop: ShopConfig {
            currency_symbol: "₫".to_string(),
            shipping_fee: 30_000.0,
            free_shipping_threshold: Some(500_000.0),
        },
        theme: ThemeConfig::default(),
    })
}

pub fn config() -> &'static AppConfig {
    &CONFIG
}

impl ShopConfig {
    pub fn shipping_policy(&self) -> ShippingPolicy {
        ShippingPolicy {
            flat_fee: self.shipping_fee,
            free_threshold: self.free_shipping_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.lists.default_page_size, 10);
        assert_eq!(config.shop.shipping_policy().fee_for(100_000.0), 30_000.0);
        assert!(!config.theme.tet_default);
        assert_eq!(builtin_config(), toml::from_str(DEFAULT_CONFIG).unwrap());
    }

    #[test]
    fn test_default_page_size_is_always_an_option() {
        let raw = r#"
[api]
port = 8080
base_url = "https://api.shop.vn"

[lists]
default_page_size = 25
page_size_options = [0, 10, 50]

[shop]
currency_symbol = "₫"
shipping_fee = 0
"#;
        let config = parse_config(raw).unwrap();
        assert_eq!(config.lists.page_size_options, vec![10, 25, 50]);
        assert_eq!(config.api.base_url.as_deref(), Some("https://api.shop.vn"));
        assert_eq!(config.shop.free_shipping_threshold, None);
        assert!(!config.theme.tet_default);
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let raw = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 0");
        assert!(parse_config(&raw).is_err());
    }
}
