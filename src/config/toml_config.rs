use crate::domain::model::{builtin_breeds, builtin_facts, Breed, Catalog, PageInfo};
use crate::domain::ports::CatalogSource;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const MAX_AUTO_ADVANCE_SECONDS: u64 = 3600;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub page: PageSection,
    #[serde(default)]
    pub rotation: RotationSection,
    pub breeds: Option<Vec<BreedEntry>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSection {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub hero_image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RotationSection {
    /// 0 disables the timer.
    pub auto_advance_seconds: Option<u64>,
    pub facts: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedEntry {
    pub id: String,
    pub display_name: Option<String>,
    pub description: String,
    pub image_ref: Option<String>,
}

impl From<&BreedEntry> for Breed {
    fn from(entry: &BreedEntry) -> Self {
        Breed {
            id: entry.id.clone(),
            display_name: entry.display_name.clone().unwrap_or_else(|| entry.id.clone()),
            description: entry.description.clone(),
            image_ref: entry.image_ref.clone().unwrap_or_default(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HERO_IMAGE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn auto_advance_seconds(&self) -> Option<u64> {
        self.rotation.auto_advance_seconds
    }

    /// 未指定的部分使用內建資料
    pub fn to_catalog(&self) -> Catalog {
        let defaults = PageInfo::default();
        let page = PageInfo {
            title: self.page.title.clone().unwrap_or(defaults.title),
            headline: self.page.headline.clone().unwrap_or(defaults.headline),
            hero_image: self.page.hero_image.clone().unwrap_or(defaults.hero_image),
        };

        let facts = self.rotation.facts.clone().unwrap_or_else(builtin_facts);
        let breeds = match &self.breeds {
            Some(entries) => entries.iter().map(Breed::from).collect(),
            None => builtin_breeds(),
        };

        Catalog { page, facts, breeds }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(seconds) = self.rotation.auto_advance_seconds {
            validate_range(
                "rotation.auto_advance_seconds",
                seconds,
                0,
                MAX_AUTO_ADVANCE_SECONDS,
            )?;
        }
        self.to_catalog().validate()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl CatalogSource for TomlConfig {
    fn catalog(&self) -> Result<Catalog> {
        self.validate_config()?;
        Ok(self.to_catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FelineError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_catalog() {
        let toml_content = r#"
[page]
title = "Cat Corner"

[rotation]
auto_advance_seconds = 5
facts = ["f0", "f1"]

[[breeds]]
id = "Sphynx"
description = "Hairless and warm to the touch."
image_ref = "sphynx.jpg"

[[breeds]]
id = "Ragdoll"
display_name = "Ragdoll Cat"
description = "Goes limp when picked up."
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.auto_advance_seconds(), Some(5));

        let catalog = config.to_catalog();
        assert_eq!(catalog.page.title, "Cat Corner");
        assert_eq!(catalog.page.headline, "Discover the World of Cats");
        assert_eq!(catalog.facts, vec!["f0", "f1"]);
        assert_eq!(catalog.breeds[0].display_name, "Sphynx");
        assert_eq!(catalog.breeds[0].image_ref, "sphynx.jpg");
        assert_eq!(catalog.breeds[1].display_name, "Ragdoll Cat");
        assert_eq!(catalog.breeds[1].image_ref, "");
    }

    #[test]
    fn test_empty_file_uses_builtin_catalog() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.catalog().unwrap(), Catalog::builtin());
        assert_eq!(config.auto_advance_seconds(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FELINES_TEST_HERO", "https://cats.example/hero.jpg");

        let toml_content = r#"
[page]
hero_image = "${FELINES_TEST_HERO}"
headline = "${FELINES_TEST_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.page.hero_image.as_deref(),
            Some("https://cats.example/hero.jpg")
        );
        assert_eq!(
            config.page.headline.as_deref(),
            Some("${FELINES_TEST_UNSET_VAR}")
        );

        std::env::remove_var("FELINES_TEST_HERO");
    }

    #[test]
    fn test_empty_fact_list_rejected() {
        let config = TomlConfig::from_toml_str("[rotation]\nfacts = []\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(FelineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_timer_out_of_range_rejected() {
        let config =
            TomlConfig::from_toml_str("[rotation]\nauto_advance_seconds = 7200\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(FelineError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let result = TomlConfig::from_toml_str("[rotation\nfacts = 3");
        assert!(matches!(result, Err(FelineError::TomlError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[rotation]\nfacts = [\"only fact\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let catalog = config.catalog().unwrap();
        assert_eq!(catalog.facts, vec!["only fact"]);
        assert_eq!(catalog.breeds.len(), 5);
    }
}
