use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub frontend_url: Option<String>,
    pub port: Option<u16>,

    pub database_url: Option<String>,
    pub database_max_connections: Option<u32>,

    pub rate_limit_per_second: Option<u64>,
}

fn default_app_env() -> String {
    "development".to_string()
}

impl Envy {
    /// Requests allowed per second, 50 when unset. Zero is rejected.
    pub fn rate_limit(&self) -> Result<u64, &'static str> {
        match self.rate_limit_per_second {
            Some(0) => Err("RATE_LIMIT_PER_SECOND must be greater than 0"),
            Some(rate) => Ok(rate),
            None => Ok(50),
        }
    }
}
