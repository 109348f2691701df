//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconHandler` 只负责配置持有与流程编排，具体阶段分散在各子模块的 `impl` 块中：
//! 1. `rasterize`：SVG → RGBA → PNG
//! 2. `loader`：位图加载与校验
//! 3. `pipeline`：缩放
//! 4. `pad`：居中粘贴到透明画布并保存
//!
//! ## 实现思路
//!
//! - 创建时校验配置，后续各阶段不再重复检查。
//! - 全部操作同步执行，文件句柄在各自作用域内释放。
//! - 渲染、加载解码、缩放粘贴与保存各阶段耗时以 debug 级别记录。
//! - 失败在操作入口记录一次 error 日志后原样返回。

use std::fs;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::{IconConfig, IconError};

/// 图标处理器。
#[derive(Debug, Clone)]
pub struct IconHandler {
    pub(super) config: IconConfig,
}

impl IconHandler {
    /// 根据配置创建处理器。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_tool::icon::{IconConfig, IconHandler};
    ///
    /// let handler = IconHandler::new(IconConfig::default())?;
    /// # Ok::<(), icon_tool::icon::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// 以 PNG 格式写出图像，必要时创建父目录，已存在的文件会被覆盖。
    pub(super) fn save_png(image: &RgbaImage, path: &Path) -> Result<(), IconError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    IconError::FileSystem(format!("创建输出目录 '{}' 失败：{}", parent.display(), e))
                })?;
            }
        }

        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| IconError::Encode(format!("保存 PNG '{}' 失败：{}", path.display(), e)))
    }
}
