//! # 加载与校验模块
//!
//! ## 设计思路
//!
//! 读取本地位图，并在“尽可能早”的阶段执行输入校验，尽快失败。
//!
//! ## 实现思路
//!
//! - 文件：存在性 + metadata 体积限制 + 作用域内读取（句柄离开作用域即释放）。
//! - 字节：magic bytes 签名校验，拒绝被识别为非图片的内容；
//!   无签名的格式（如 TGA）交给解码器判断。
//! - 格式：优先按内容猜测，猜不出时按扩展名。
//! - 解码：先读 header 尺寸做像素上限检查，再完整解码。

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use image::{DynamicImage, ImageFormat, ImageReader};

use super::source::RawImageData;
use super::{IconError, IconHandler};

impl IconHandler {
    /// 从本地路径加载位图原始字节。
    pub(super) fn load_from_file(&self, path: &Path) -> Result<RawImageData, IconError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(IconError::SourceNotFound(format!(
                "图片文件不存在：{}",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| IconError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > self.config.max_file_size {
            return Err(IconError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                self.config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = {
            let file = File::open(path)
                .map_err(|e| IconError::FileSystem(format!("无法打开图片文件：{}", e)))?;
            let mut bytes = Vec::with_capacity(metadata.len() as usize);
            BufReader::new(file)
                .take(self.config.max_file_size + 1)
                .read_to_end(&mut bytes)
                .map_err(|e| IconError::FileSystem(format!("无法读取图片文件：{}", e)))?;
            bytes
        };

        if bytes.len() as u64 > self.config.max_file_size {
            return Err(IconError::ResourceLimit("文件在读取过程中超出体积限制".to_string()));
        }

        Self::validate_image_signature(&bytes)?;

        Ok(RawImageData {
            bytes,
            source_hint: path.display().to_string(),
            format_hint: ImageFormat::from_path(path).ok(),
        })
    }

    /// 解码原始字节。
    ///
    /// 解码前先按 header 尺寸做像素上限检查。
    pub(super) fn decode(&self, raw: &RawImageData) -> Result<DynamicImage, IconError> {
        let (width, height) = Self::reader_for(raw)?
            .into_dimensions()
            .map_err(|e| IconError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))?;
        self.validate_pixel_limits(width, height)?;

        let decoded = Self::reader_for(raw)?
            .decode()
            .map_err(|e| IconError::Decode(format!("图片解码失败（{}）：{}", raw.source_hint, e)))?;

        if decoded.width() == 0 || decoded.height() == 0 {
            return Err(IconError::Decode(format!("图片尺寸为 0：{}", raw.source_hint)));
        }

        Ok(decoded)
    }

    /// 通过文件签名（magic bytes）校验输入是否为图片。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), IconError> {
        if bytes.is_empty() {
            return Err(IconError::InvalidFormat("图片内容为空".to_string()));
        }

        let Some(kind) = infer::get(bytes) else {
            log::debug!("文件签名未知，交由解码器判断格式");
            return Ok(());
        };

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(IconError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }

    /// 构建内存读取器：先按内容猜测格式，猜不出时退回扩展名。
    fn reader_for(raw: &RawImageData) -> Result<ImageReader<Cursor<&[u8]>>, IconError> {
        let mut reader = ImageReader::new(Cursor::new(raw.bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| IconError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        if reader.format().is_none() {
            match raw.format_hint {
                Some(format) => reader.set_format(format),
                None => {
                    return Err(IconError::InvalidFormat(format!(
                        "无法识别图片格式：{}",
                        raw.source_hint
                    )));
                }
            }
        }

        Ok(reader)
    }

    fn validate_pixel_limits(&self, width: u32, height: u32) -> Result<(), IconError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| IconError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > self.config.max_decoded_pixels {
            return Err(IconError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, self.config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}
