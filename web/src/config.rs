use eyre::{Result, WrapErr, eyre};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: Url,
    pub page_size: u32,
}

impl Config {
    /// Browser builds read the variables at compile time; native builds read
    /// the process environment.
    pub fn from_env() -> Result<Self> {
        #[cfg(target_arch = "wasm32")]
        let lookup = |name: &str| match name {
            "DASHBOARD_API_URL" => option_env!("DASHBOARD_API_URL").map(String::from),
            "DASHBOARD_PAGE_SIZE" => option_env!("DASHBOARD_PAGE_SIZE").map(String::from),
            _ => None,
        };
        #[cfg(not(target_arch = "wasm32"))]
        let lookup = |name: &str| std::env::var(name).ok();

        Self::from_lookup(lookup)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw_url = lookup("DASHBOARD_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let api_base_url = Url::parse(raw_url.trim())
            .wrap_err_with(|| format!("DASHBOARD_API_URL is not a valid URL: {raw_url}"))?;
        if api_base_url.cannot_be_a_base() {
            return Err(eyre!("DASHBOARD_API_URL cannot be used as a base URL: {raw_url}"));
        }

        let page_size = match lookup("DASHBOARD_PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .wrap_err_with(|| format!("DASHBOARD_PAGE_SIZE is not a number: {raw}"))?,
            None => DEFAULT_PAGE_SIZE,
        };
        if page_size == 0 {
            return Err(eyre!("DASHBOARD_PAGE_SIZE must be at least 1"));
        }

        Ok(Self {
            api_base_url,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://localhost:5000/");
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn values_are_read() {
        let config = Config::from_lookup(lookup(&[
            ("DASHBOARD_API_URL", "https://api.example.com"),
            ("DASHBOARD_PAGE_SIZE", " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.api_base_url.host_str(), Some("api.example.com"));
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn bad_values_are_errors() {
        assert!(Config::from_lookup(lookup(&[("DASHBOARD_API_URL", "not a url")])).is_err());
        assert!(Config::from_lookup(lookup(&[("DASHBOARD_API_URL", "mailto:a@b.c")])).is_err());
        assert!(Config::from_lookup(lookup(&[("DASHBOARD_PAGE_SIZE", "ten")])).is_err());
        assert!(Config::from_lookup(lookup(&[("DASHBOARD_PAGE_SIZE", "0")])).is_err());
    }
}
