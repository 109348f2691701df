//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“外部输入语义”和“流水线中间结果”解耦：
//! - `SvgContent` 表示 SVG 渲染内容的来源
//! - `RasterSize` 表示输出尺寸（可从 `512x512` 这类字符串解析）
//! - `RawImageData` 表示已加载但未解码的字节

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::IconError;

/// 内置应用图标（音符：一条路径 + 两个圆）。
pub const EMBEDDED_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#ffd700" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="app-icon"><path d="M9 18V5l12-2v13"></path><circle cx="6" cy="18" r="3"></circle><circle cx="18" cy="16" r="3"></circle></svg>"##;

/// SVG 渲染内容来源。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SvgContent {
    /// 渲染内置图标，源路径仅做存在性检查。
    #[default]
    Embedded,
    /// 渲染源文件的实际内容。
    File,
}

/// 输出尺寸（像素）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterSize {
    pub width: u32,
    pub height: u32,
}

impl RasterSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for RasterSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for RasterSize {
    type Err = IconError;

    /// 解析 `WxH`（也接受 `W,H` 与单个 `N` 表示正方形）。
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_lowercase();
        let (width, height) = match value.split_once(['x', ',']) {
            Some((w, h)) => (w.trim(), h.trim()),
            None => (value.as_str(), value.as_str()),
        };

        let parse = |part: &str| -> Result<u32, IconError> {
            match part.parse::<u32>() {
                Ok(0) | Err(_) => Err(IconError::InvalidFormat(format!(
                    "无效尺寸：{}（示例：512x512）",
                    value
                ))),
                Ok(n) => Ok(n),
            }
        };

        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

/// 加载阶段输出：原始字节与来源标识。
pub(crate) struct RawImageData {
    /// 原始图片字节。
    pub(crate) bytes: Vec<u8>,
    /// 来源提示（用于日志与诊断）。
    pub(crate) source_hint: String,
    /// 按扩展名推断的格式；内容无法识别格式时（如 TGA）使用。
    pub(crate) format_hint: Option<image::ImageFormat>,
}
