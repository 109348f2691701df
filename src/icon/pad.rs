//! # 居中缩放模块
//!
//! ## 设计思路
//!
//! 把任意尺寸的位图收进 `canvas x canvas`（默认 32x32）的透明 RGBA 画布：
//! 等比缩放到能放下的最大尺寸，再居中粘贴。
//!
//! ## 实现思路
//!
//! - `plan_fit` 是纯函数：`scale = min(canvas/W, canvas/H)`，新尺寸向下取整（至少 1），
//!   偏移 `(canvas - new) / 2`（整数除法）。
//! - 粘贴为像素替换，不与透明背景混合。
//! - 输入路径由调用方显式传入，不再依赖工作目录下的固定文件名。

use std::path::Path;
use std::time::Instant;

use image::{Rgba, RgbaImage, imageops};

use super::{IconError, IconHandler};

/// 居中缩放方案。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitPlan {
    pub scale: f64,
    pub new_width: u32,
    pub new_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

/// 计算把 `width x height` 放进 `canvas x canvas` 的缩放方案。
///
/// `allow_upscale` 为 `false` 时比例不超过 1。
pub fn plan_fit(width: u32, height: u32, canvas: u32, allow_upscale: bool) -> FitPlan {
    let mut scale = (canvas as f64 / width as f64).min(canvas as f64 / height as f64);
    if !allow_upscale {
        scale = scale.min(1.0);
    }

    let new_width = ((width as f64 * scale).floor() as u32).clamp(1, canvas);
    let new_height = ((height as f64 * scale).floor() as u32).clamp(1, canvas);

    FitPlan {
        scale,
        new_width,
        new_height,
        offset_x: (canvas - new_width) / 2,
        offset_y: (canvas - new_height) / 2,
    }
}

impl IconHandler {
    /// 将位图缩放并居中到透明画布，保存为 PNG。返回所用的缩放方案。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_tool::icon::{IconConfig, IconHandler};
    ///
    /// let handler = IconHandler::new(IconConfig::default())?;
    /// handler.shrink_image("sheetmusic.png", "icon.png")?;
    /// # Ok::<(), icon_tool::icon::IconError>(())
    /// ```
    pub fn shrink_image(
        &self,
        image_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<FitPlan, IconError> {
        let output_path = output_path.as_ref();

        match self.shrink_to_canvas(image_path.as_ref(), output_path) {
            Ok(plan) => {
                log::info!(
                    "✅ 图标已保存为 {}（{}x{}）",
                    output_path.display(),
                    self.config.canvas_size,
                    self.config.canvas_size
                );
                Ok(plan)
            }
            Err(err) => {
                log::error!("❌ 图标生成失败：{}", err);
                Err(err)
            }
        }
    }

    fn shrink_to_canvas(&self, image_path: &Path, output_path: &Path) -> Result<FitPlan, IconError> {
        let started = Instant::now();
        let raw = self.load_from_file(image_path)?;
        let decoded = self.decode(&raw)?;
        log::debug!("⏱️ 加载与解码耗时 {:?}", started.elapsed());

        let stage = Instant::now();
        let (canvas, plan) = self.pad_to_canvas(&decoded.to_rgba8())?;
        log::debug!("⏱️ 缩放与粘贴耗时 {:?}", stage.elapsed());

        let stage = Instant::now();
        Self::save_png(&canvas, output_path)?;
        log::debug!(
            "⏱️ 保存耗时 {:?}（总计 {:?}）",
            stage.elapsed(),
            started.elapsed()
        );

        Ok(plan)
    }

    /// 在内存中完成缩放与居中粘贴。
    pub fn pad_to_canvas(&self, image: &RgbaImage) -> Result<(RgbaImage, FitPlan), IconError> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(IconError::InvalidFormat(format!("图片尺寸为 0：{}x{}", width, height)));
        }
        let canvas_size = self.config.canvas_size;

        log::info!("原始尺寸: {}x{}", width, height);
        let plan = plan_fit(width, height, canvas_size, self.config.allow_upscale);
        log::info!("缩放后尺寸: {}x{}", plan.new_width, plan.new_height);

        let resized = self.resize_exact(image, plan.new_width, plan.new_height);

        let mut canvas = RgbaImage::from_pixel(canvas_size, canvas_size, Rgba([0, 0, 0, 0]));
        imageops::replace(
            &mut canvas,
            &resized,
            plan.offset_x as i64,
            plan.offset_y as i64,
        );

        Ok((canvas, plan))
    }
}
