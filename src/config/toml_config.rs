use crate::domain::model::LogFormat;
use crate::utils::error::{ProjectError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSection {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ProjectError::ConfigFileError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// 未設定或無法辨識時回傳 None，錯誤值由 validate 負責回報
    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .and_then(|f| f.parse().ok())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("project.name", &self.project.name)?;

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, &LogFormat::VARIANTS)?;
            }
        }

        Ok(())
    }
}

/// 替換環境變數 (例如 ${PROJECT_NAME})，未定義的變數保留原樣
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is a valid regex")
    });

    re.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[project]
name = "demo-service"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.project.name, "demo-service");
        assert_eq!(config.log_level(), Some("debug"));
        assert_eq!(config.log_format(), Some(LogFormat::Json));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_logging_section_is_optional() {
        let config = TomlConfig::from_toml_str("[project]\nname = \"bare\"\n").unwrap();

        assert!(config.logging.is_none());
        assert_eq!(config.log_level(), None);
        assert_eq!(config.log_format(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROJECT_INIT_TEST_NAME", "from-env");

        let toml_content = r#"
[project]
name = "${PROJECT_INIT_TEST_NAME}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.project.name, "from-env");

        std::env::remove_var("PROJECT_INIT_TEST_NAME");
    }

    #[test]
    fn test_unknown_env_var_is_left_as_written() {
        let toml_content = r#"
[project]
name = "${PROJECT_INIT_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.project.name, "${PROJECT_INIT_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let bad_level = TomlConfig::from_toml_str(
            "[project]\nname = \"x\"\n[logging]\nlevel = \"chatty\"\n",
        )
        .unwrap();
        assert!(bad_level.validate().is_err());

        let bad_format = TomlConfig::from_toml_str(
            "[project]\nname = \"x\"\n[logging]\nformat = \"pretty\"\n",
        )
        .unwrap();
        assert!(bad_format.validate().is_err());
        assert_eq!(bad_format.log_format(), None);

        let blank_name = TomlConfig::from_toml_str("[project]\nname = \"  \"\n").unwrap();
        assert!(blank_name.validate().is_err());
    }

    #[test]
    fn test_missing_project_section_fails_to_parse() {
        let err = TomlConfig::from_toml_str("[logging]\nlevel = \"info\"\n").unwrap_err();
        assert!(matches!(err, ProjectError::TomlError(_)));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[project]\nname = \"file-test\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project.name, "file-test");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TomlConfig::from_file("/nonexistent/project-init.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/project-init.toml"));
    }
}
