//! 应用配置
//!
//! 从 `settings.toml` 读取界面默认值。配置只读，转换器状态不落盘。

use crate::convert::ConversionMode;
use crate::converter::{COPY_FEEDBACK, LinkConverter};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 应用设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// 启动时的转换模式
    pub default_mode: ConversionMode,
    /// "Copied!" 显示时长（毫秒）
    pub copy_feedback_ms: u64,
    /// 是否以掩码显示密码
    pub mask_password: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_mode: ConversionMode::default(),
            copy_feedback_ms: u64::try_from(COPY_FEEDBACK.as_millis()).unwrap_or(2000),
            mask_password: true,
        }
    }
}

impl AppSettings {
    /// 获取配置文件路径
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("directlink")
            .join("settings.toml")
    }

    /// 加载设置（如果文件不存在则使用默认值）
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match Self::parse(&content) {
                Ok(settings) => {
                    debug!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => warn!("Failed to parse settings: {e}, using defaults"),
            },
            Err(e) => warn!("Failed to read settings file: {e}, using defaults"),
        }
        Self::default()
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    /// 按设置创建转换器
    pub fn new_converter(&self) -> LinkConverter {
        LinkConverter::new(self.default_mode, self.copy_feedback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_mode, ConversionMode::GoogleDrive);
        assert_eq!(settings.copy_feedback(), COPY_FEEDBACK);
        assert!(settings.mask_password);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = AppSettings::parse("default_mode = \"custom-domain\"\n").unwrap();
        assert_eq!(settings.default_mode, ConversionMode::CustomDomain);
        assert_eq!(settings.copy_feedback_ms, 2000);

        let converter = settings.new_converter();
        assert_eq!(converter.mode(), ConversionMode::CustomDomain);
        assert_eq!(converter.output_url(), "");
        assert_eq!(converter.feedback().duration(), settings.copy_feedback());
    }

    #[test]
    fn test_converter_uses_configured_feedback() {
        let settings = AppSettings::parse("copy_feedback_ms = 500\n").unwrap();
        let converter = settings.new_converter();
        assert_eq!(converter.feedback().duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        assert!(AppSettings::parse("default_mode = \"dropbox\"").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("directlink-no-such-dir/settings.toml");
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = std::env::temp_dir().join(format!("directlink-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "default_mode = [not toml").unwrap();

        let settings = AppSettings::load_from(&path);
        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(settings, AppSettings::default());
    }
}
