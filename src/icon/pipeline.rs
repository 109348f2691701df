//! # 缩放流水线模块
//!
//! ## 设计思路
//!
//! 统一封装“RGBA 图像 → 目标尺寸”的缩放，优先使用 `fast_image_resize`（SIMD 卷积），
//! 失败时回退到 `image::imageops::resize`，保证结果可用。

use fast_image_resize as fr;
use image::{RgbaImage, imageops};

use super::{IconError, IconHandler, ResizeFilter};

impl IconHandler {
    /// 将图像精确缩放到 `target_width x target_height`。
    pub(super) fn resize_exact(
        &self,
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
    ) -> RgbaImage {
        let filter = self.config.resize_filter;

        if image.width() == target_width && image.height() == target_height {
            return image.clone();
        }

        match Self::resize_with_fast_image_resize(image, target_width, target_height, filter) {
            Ok(resized) => resized,
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 imageops::resize：{}",
                    err
                );
                imageops::resize(image, target_width, target_height, filter.to_image_filter())
            }
        }
    }

    fn resize_with_fast_image_resize(
        image: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: ResizeFilter,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = image.dimensions();

        let src_image = fr::images::Image::from_vec_u8(
            src_width,
            src_height,
            image.as_raw().clone(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| IconError::Decode(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(filter.to_fast_algorithm());

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Decode(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| IconError::Decode("fast_image_resize 输出缓冲长度异常".to_string()))
    }
}
