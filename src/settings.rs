//! 配置文件读写模块
//!
//! 配置以 JSON 保存（默认 `icon-tool.json`）。文件不存在、无法读取或解析失败时
//! 回退到默认配置，仅记录警告，不中断命令。

use std::fs;
use std::path::Path;

use crate::error::AppError;
use crate::icon::IconConfig;

pub const DEFAULT_CONFIG_FILE: &str = "icon-tool.json";

pub fn load_config_from_path(config_path: &Path) -> IconConfig {
    if !config_path.exists() {
        log::debug!("配置文件不存在，使用默认配置: {}", config_path.display());
        return IconConfig::default();
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(err) => {
            log::warn!("读取配置文件失败，使用默认配置: {err}");
            return IconConfig::default();
        }
    };

    match serde_json::from_str::<IconConfig>(&content) {
        Ok(config) => {
            log::info!("已加载配置文件: {}", config_path.display());
            config
        }
        Err(err) => {
            log::warn!("解析配置文件失败，使用默认配置: {err}");
            IconConfig::default()
        }
    }
}

pub fn save_config_to_path(config_path: &Path, config: &IconConfig) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(config)
        .map_err(|e| AppError::Config(format!("序列化配置失败: {}", e)))?;

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(config_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_config_from_path, save_config_to_path};
    use crate::icon::{IconConfig, RasterSize, ResizeFilter, SvgContent};

    #[test]
    fn save_and_load_config_roundtrip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("icon-tool.json");
        let config = IconConfig {
            default_size: RasterSize::new(256, 128),
            resize_filter: ResizeFilter::CatmullRom,
            svg_content: SvgContent::File,
            ..IconConfig::default()
        };

        save_config_to_path(&config_path, &config).expect("save config");
        let loaded = load_config_from_path(&config_path);

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_config_uses_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let loaded = load_config_from_path(&dir.path().join("absent.json"));
        assert_eq!(loaded, IconConfig::default());
    }

    #[test]
    fn load_bad_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("icon-tool.json");
        std::fs::write(&config_path, "not-json").expect("write invalid config");

        assert_eq!(load_config_from_path(&config_path), IconConfig::default());
    }

    #[test]
    fn saved_config_uses_lowercase_enum_names() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("nested").join("icon-tool.json");

        save_config_to_path(&config_path, &IconConfig::default()).expect("save config");
        let content = std::fs::read_to_string(&config_path).expect("read config");

        assert!(content.contains("\"resize_filter\": \"lanczos3\""));
        assert!(content.contains("\"svg_content\": \"embedded\""));
    }
}
