use serde_aux::field_attributes::deserialize_string_from_number;

pub const BASE_URL: &str = "https://retropartidas.inforpsico.com";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    /// Relative listing paths, one scraped section each.
    pub url_paths: Vec<String>,
    // Opaque token; the guard keeps an all-digits cookie from landing as a number
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub session_cookie: String,
    pub output_dir: String,
    pub fail_on_error: bool,
}

/// Reads settings from `RETROPARTIDAS_*` environment variables.
/// `RETROPARTIDAS_SESSION_COOKIE` and `RETROPARTIDAS_URL_PATHS` are required.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("base_url", BASE_URL)?
        .set_default("output_dir", "output")?
        .set_default("fail_on_error", false)?
        .add_source(
            config::Environment::default()
                .prefix("RETROPARTIDAS")
                .prefix_separator("_")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("url_paths"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
