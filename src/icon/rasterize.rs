//! # SVG 渲染模块
//!
//! ## 设计思路
//!
//! 将 SVG 内容渲染为固定尺寸的 RGBA 位图并写出 PNG。
//! 输出尺寸严格等于请求尺寸；SVG 按等比缩放适配（meet）并居中，
//! 与带 `viewBox` 的 SVG 默认 `preserveAspectRatio` 行为一致。
//!
//! ## 实现思路
//!
//! 1. 检查名义源路径是否存在（内置内容模式下同样检查）
//! 2. 选择渲染内容：内置图标或源文件字节
//! 3. `usvg` 解析 → `resvg` 渲染到 `tiny_skia::Pixmap`
//! 4. 反预乘得到直通 alpha 的 `RgbaImage`，写出 PNG
//!
//! 任一阶段失败都会记录错误日志后原样返回给调用方，不重试、不清理。

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use image::RgbaImage;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use super::source::EMBEDDED_SVG;
use super::{IconError, IconHandler, RasterSize, SvgContent};

impl IconHandler {
    /// 将 SVG 转换为 PNG。
    ///
    /// `size` 为空时使用配置中的默认尺寸（100x100）。返回实际输出尺寸。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use icon_tool::icon::{IconConfig, IconHandler, RasterSize};
    ///
    /// let handler = IconHandler::new(IconConfig::default())?;
    /// handler.svg_to_png("public/vite.svg", "icon.png", Some(RasterSize::new(512, 512)))?;
    /// # Ok::<(), icon_tool::icon::IconError>(())
    /// ```
    pub fn svg_to_png(
        &self,
        svg_path: impl AsRef<Path>,
        png_path: impl AsRef<Path>,
        size: Option<RasterSize>,
    ) -> Result<RasterSize, IconError> {
        let svg_path = svg_path.as_ref();
        let png_path = png_path.as_ref();

        match self.convert_svg(svg_path, png_path, size) {
            Ok(size) => {
                log::info!("✅ SVG 已成功转换为 PNG：{}（{}）", png_path.display(), size);
                Ok(size)
            }
            Err(err) => {
                log::error!("❌ 转换失败：{}", err);
                Err(err)
            }
        }
    }

    fn convert_svg(
        &self,
        svg_path: &Path,
        png_path: &Path,
        size: Option<RasterSize>,
    ) -> Result<RasterSize, IconError> {
        if !svg_path.exists() {
            return Err(IconError::SourceNotFound(format!(
                "SVG 文件不存在：{}",
                svg_path.display()
            )));
        }

        let size = size.unwrap_or(self.config.default_size);
        self.validate_raster_size(size)?;

        let start = Instant::now();
        let rendered = match self.config.svg_content {
            SvgContent::Embedded => Self::render_svg(EMBEDDED_SVG.as_bytes(), size, None)?,
            SvgContent::File => {
                let bytes = Self::read_svg_file(svg_path)?;
                let resources_dir = std::fs::canonicalize(svg_path)
                    .ok()
                    .and_then(|p| p.parent().map(Path::to_path_buf));
                Self::render_svg(&bytes, size, resources_dir)?
            }
        };

        Self::save_png(&rendered, png_path)?;

        log::debug!(
            "SVG 渲染完成 - 来源: {:?} 尺寸: {} 耗时: {}ms",
            self.config.svg_content,
            size,
            start.elapsed().as_millis()
        );

        Ok(size)
    }

    /// 将 SVG 字节渲染为指定尺寸的 RGBA 图像。
    pub fn render_svg(
        svg: &[u8],
        size: RasterSize,
        resources_dir: Option<PathBuf>,
    ) -> Result<RgbaImage, IconError> {
        let mut options = usvg::Options::default();
        options.resources_dir = resources_dir;

        let tree = usvg::Tree::from_data(svg, &options)
            .map_err(|e| IconError::Render(format!("SVG 解析失败：{}", e)))?;

        let mut pixmap = Pixmap::new(size.width, size.height)
            .ok_or_else(|| IconError::Render(format!("无法分配 {} 的画布", size)))?;

        let svg_size = tree.size();
        let scale = (size.width as f32 / svg_size.width()).min(size.height as f32 / svg_size.height());
        let offset_x = (size.width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (size.height as f32 - svg_size.height() * scale) / 2.0;
        let transform = Transform::from_row(scale, 0.0, 0.0, scale, offset_x, offset_y);

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let mut bytes = Vec::with_capacity(pixmap.pixels().len() * 4);
        for pixel in pixmap.pixels() {
            let color = pixel.demultiply();
            bytes.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
        }

        RgbaImage::from_raw(size.width, size.height, bytes)
            .ok_or_else(|| IconError::Render("渲染输出缓冲长度异常".to_string()))
    }

    fn read_svg_file(path: &Path) -> Result<Vec<u8>, IconError> {
        let file = File::open(path)
            .map_err(|e| IconError::FileSystem(format!("无法打开 SVG 文件：{}", e)))?;

        let mut bytes = Vec::new();
        BufReader::new(file)
            .read_to_end(&mut bytes)
            .map_err(|e| IconError::FileSystem(format!("无法读取 SVG 文件：{}", e)))?;
        Ok(bytes)
    }

    fn validate_raster_size(&self, size: RasterSize) -> Result<(), IconError> {
        if size.width == 0 || size.height == 0 {
            return Err(IconError::InvalidFormat(format!("输出尺寸必须为正整数：{}", size)));
        }

        let pixels = size.width as u64 * size.height as u64;
        if pixels > self.config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "输出像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }
        Ok(())
    }
}
