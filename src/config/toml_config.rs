use crate::config::OutputFormat;
use crate::domain::model::RequestedDirection;
use crate::utils::error::{AppError, Result};
use crate::utils::validation::{validate_instance_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

pub const DEFAULT_CONVERT_INSTANCE: &str = "/api/convert";
pub const DEFAULT_ARABIC_TO_ROMAN_INSTANCE: &str = "/a2r";
pub const DEFAULT_ROMAN_TO_ARABIC_INSTANCE: &str = "/r2a";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub conversion: ConversionConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversionConfig {
    pub default_direction: Option<RequestedDirection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub convert_instance: Option<String>,
    pub arabic_to_roman_instance: Option<String>,
    pub roman_to_arabic_instance: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ROMAN_API_PREFIX})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn default_direction(&self) -> RequestedDirection {
        self.conversion.default_direction.unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    pub fn pretty(&self) -> bool {
        self.output.pretty.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    pub fn convert_instance(&self) -> &str {
        self.api
            .convert_instance
            .as_deref()
            .unwrap_or(DEFAULT_CONVERT_INSTANCE)
    }

    pub fn arabic_to_roman_instance(&self) -> &str {
        self.api
            .arabic_to_roman_instance
            .as_deref()
            .unwrap_or(DEFAULT_ARABIC_TO_ROMAN_INSTANCE)
    }

    pub fn roman_to_arabic_instance(&self) -> &str {
        self.api
            .roman_to_arabic_instance
            .as_deref()
            .unwrap_or(DEFAULT_ROMAN_TO_ARABIC_INSTANCE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_instance_path("api.convert_instance", self.convert_instance())?;
        validate_instance_path("api.arabic_to_roman_instance", self.arabic_to_roman_instance())?;
        validate_instance_path("api.roman_to_arabic_instance", self.roman_to_arabic_instance())?;
        Ok(())
    }
}
