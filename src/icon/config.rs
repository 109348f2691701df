//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有“可调策略”集中到 `IconConfig`，保证运行时行为可观测、可调整、可测试。
//! 配置可以从 JSON 文件反序列化，缺省字段一律回落到 `Default`。
//!
//! ## 实现思路
//!
//! - `Default` 提供与原脚本一致的参数（100x100 默认渲染尺寸、32x32 画布、Lanczos 滤镜）。
//! - `ResizeFilter` 负责滤镜字符串解析，并映射到 `image` / `fast_image_resize` 两套枚举。
//! - `validate` 在处理器创建时执行，尽早拒绝非法尺寸。

use fast_image_resize as fr;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use super::{IconError, RasterSize, SvgContent};

/// 图标处理配置。
///
/// 字段覆盖了 SVG 渲染、位图加载与居中缩放三个阶段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// 未指定尺寸时 SVG 的输出尺寸。
    pub default_size: RasterSize,
    /// 居中缩放画布的边长（像素）。
    pub canvas_size: u32,
    /// 缩放滤镜策略。
    pub resize_filter: ResizeFilter,
    /// 是否允许放大小于画布的图片。
    ///
    /// 关闭后缩放比例被限制在 `<= 1`，小图保持原尺寸居中。
    pub allow_upscale: bool,
    /// SVG 渲染内容来源（内置图标或源文件）。
    pub svg_content: SvgContent,
    /// 读取位图时允许的最大文件体积（字节）。
    pub max_file_size: u64,
    /// 解码后的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            default_size: RasterSize::new(100, 100),
            canvas_size: 32,
            resize_filter: ResizeFilter::Lanczos3,
            allow_upscale: true,
            svg_content: SvgContent::Embedded,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl IconConfig {
    /// 校验配置取值。
    pub fn validate(&self) -> Result<(), IconError> {
        if self.default_size.width == 0 || self.default_size.height == 0 {
            return Err(IconError::InvalidFormat(format!(
                "default_size 必须为正整数：{}",
                self.default_size
            )));
        }
        if self.canvas_size == 0 {
            return Err(IconError::InvalidFormat("canvas_size 必须为正整数".to_string()));
        }
        if self.max_file_size == 0 || self.max_decoded_pixels == 0 {
            return Err(IconError::InvalidFormat(
                "max_file_size / max_decoded_pixels 不能为 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// 缩放滤镜。
///
/// 默认 `Lanczos3`，与高质量重采样的预期一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl ResizeFilter {
    /// 从外部字符串解析滤镜。
    pub fn from_str(filter: &str) -> Result<Self, IconError> {
        match filter.trim().to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "triangle" => Ok(Self::Triangle),
            "catmullrom" => Ok(Self::CatmullRom),
            "lanczos3" | "lanczos" => Ok(Self::Lanczos3),
            other => Err(IconError::InvalidFormat(format!(
                "未知滤镜：{}（可选：nearest / triangle / catmullrom / lanczos3）",
                other
            ))),
        }
    }

    pub(crate) fn to_image_filter(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Triangle => FilterType::Triangle,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Lanczos3 => FilterType::Lanczos3,
        }
    }

    pub(crate) fn to_fast_algorithm(self) -> fr::ResizeAlg {
        match self {
            Self::Nearest => fr::ResizeAlg::Nearest,
            Self::Triangle => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            Self::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
            Self::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_script_parameters() {
        let config = IconConfig::default();
        assert_eq!(config.default_size, RasterSize::new(100, 100));
        assert_eq!(config.canvas_size, 32);
        assert_eq!(config.resize_filter, ResizeFilter::Lanczos3);
        assert_eq!(config.svg_content, SvgContent::Embedded);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_sizes() {
        let mut config = IconConfig::default();
        config.canvas_size = 0;
        assert!(matches!(config.validate(), Err(IconError::InvalidFormat(_))));

        let mut config = IconConfig::default();
        config.default_size = RasterSize::new(0, 10);
        assert!(matches!(config.validate(), Err(IconError::InvalidFormat(_))));
    }

    #[test]
    fn filter_parser_accepts_known_names() {
        assert_eq!(ResizeFilter::from_str(" Lanczos ").unwrap(), ResizeFilter::Lanczos3);
        assert_eq!(ResizeFilter::from_str("catmullrom").unwrap(), ResizeFilter::CatmullRom);
        assert!(matches!(
            ResizeFilter::from_str("bicubic"),
            Err(IconError::InvalidFormat(_))
        ));
        assert!(matches!(
            ResizeFilter::from_str("gaussian"),
            Err(IconError::InvalidFormat(_))
        ));
    }

    #[test]
    fn nearest_maps_to_point_sampling() {
        assert!(matches!(
            ResizeFilter::Nearest.to_fast_algorithm(),
            fr::ResizeAlg::Nearest
        ));
        assert_eq!(ResizeFilter::Nearest.to_image_filter(), FilterType::Nearest);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: IconConfig =
            serde_json::from_str(r#"{ "canvas_size": 64, "resize_filter": "nearest" }"#)
                .expect("partial config should parse");

        assert_eq!(config.canvas_size, 64);
        assert_eq!(config.resize_filter, ResizeFilter::Nearest);
        assert_eq!(config.default_size, RasterSize::new(100, 100));
        assert!(config.allow_upscale);
    }
}
