use anyhow::Context;
use prompt_studio::config::AppConfig;
use tracing_subscriber::EnvFilter;

fn load_dotenv() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err).context("failed to read .env"),
    }
}

fn load_config(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<AppConfig> {
    AppConfig::from_lookup(lookup).context("invalid PROMPT_STUDIO_* configuration")
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    load_dotenv()?;
    init_tracing();

    let config = load_config(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
        tracing::warn!("{err:#}; using defaults");
        AppConfig::default()
    });
    tracing::info!(theme = ?config.theme, remote = config.catalog_url.is_some(), "starting prompt studio");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(prompt_studio::ui::App);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_config_reports_key_with_context() {
        let err = load_config(|key| {
            (key == "PROMPT_STUDIO_REPLY_LATENCY_MS").then(|| "soon".to_string())
        })
        .unwrap_err();
        let message = format!("{err:#}");
        assert!(message.starts_with("invalid PROMPT_STUDIO_* configuration"));
        assert!(message.contains("PROMPT_STUDIO_REPLY_LATENCY_MS"));
    }

    #[test]
    fn empty_environment_loads_defaults() {
        assert_eq!(load_config(|_| None).unwrap(), AppConfig::default());
    }
}
