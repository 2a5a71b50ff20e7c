use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Каталог собранного фронтенда (trunk `dist`)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: String,
    /// Пустой ключ отключает генерацию обзора
    pub api_key: String,
    pub model: String,
    /// OpenAI-совместимый endpoint; пустая строка означает api.openai.com
    pub endpoint: String,
    pub temperature: f64,
    pub max_tokens: i32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            endpoint: String::new(),
            temperature: 0.4,
            max_tokens: 600,
        }
    }
}

/// Environment variable that supplies the key when `llm.api_key` is empty
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[llm]
provider = "openai"
api_key = ""
model = "gpt-4o-mini"
endpoint = ""
temperature = 0.4
max_tokens = 600
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// API key from config, or from `OPENAI_API_KEY` when the config leaves it empty
pub fn resolve_api_key(llm: &LlmConfig) -> Option<String> {
    pick_api_key(&llm.api_key, std::env::var(API_KEY_ENV).ok())
}

fn pick_api_key(configured: &str, from_env: Option<String>) -> Option<String> {
    let configured = configured.trim();
    if !configured.is_empty() {
        return Some(configured.to_string());
    }
    from_env
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// Get the static files directory from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_static_dir(config: &Config) -> PathBuf {
    let dir = Path::new(&config.server.static_dir);

    if dir.is_absolute() {
        return dir.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved = exe_dir.join(dir);
            if resolved.exists() {
                return resolved;
            }
        }
    }

    // Fallback: relative to current directory
    dir.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.llm.provider, "openai");
        assert!(config.llm.api_key.is_empty());
        assert_eq!(config.llm.max_tokens, 600);
    }

    #[test]
    fn test_llm_section_is_optional() {
        let config = parse_config("[server]\nport = 8080\nstatic_dir = \"/srv/kpi\"\n").unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(get_static_dir(&config), PathBuf::from("/srv/kpi"));
    }

    #[test]
    fn test_partial_llm_section_uses_defaults() {
        let config = parse_config(
            "[server]\nport = 3000\nstatic_dir = \"dist\"\n[llm]\nmodel = \"gpt-4.1\"\n",
        )
        .unwrap();
        assert_eq!(config.llm.model, "gpt-4.1");
        assert_eq!(config.llm.temperature, 0.4);
    }

    #[test]
    fn test_api_key_resolution() {
        assert_eq!(pick_api_key(" sk-conf ", None), Some("sk-conf".to_string()));
        assert_eq!(
            pick_api_key("sk-conf", Some("sk-env".into())),
            Some("sk-conf".to_string())
        );
        assert_eq!(pick_api_key("", Some("sk-env".into())), Some("sk-env".to_string()));
        assert_eq!(pick_api_key("", Some("  ".into())), None);
        assert_eq!(pick_api_key("", None), None);
    }
}
