//! 命令行入口
//!
//! 不带子命令运行时只做一件事：把 `public/vite.svg` 渲染为 512x512 的 `icon.png`。

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::AppError;
use crate::icon::{IconConfig, IconHandler, RasterSize, ResizeFilter, SvgContent};
use crate::settings::{self, DEFAULT_CONFIG_FILE};

pub const DEFAULT_SVG_SOURCE: &str = "public/vite.svg";
pub const DEFAULT_BITMAP_SOURCE: &str = "sheetmusic.png";
pub const DEFAULT_ICON_OUTPUT: &str = "icon.png";
pub const DEFAULT_ICON_SIZE: RasterSize = RasterSize::new(512, 512);

/// SVG 转 PNG 与 32x32 图标生成工具
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// 配置文件路径（JSON）
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// 子命令（缺省时执行 `svg2png public/vite.svg icon.png --size 512x512`）
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// 将 SVG 渲染为 PNG
    Svg2png {
        /// SVG 源路径（必须存在）
        #[arg(value_hint = clap::ValueHint::FilePath)]
        svg: PathBuf,

        /// 输出 PNG 路径（已存在则覆盖）
        #[arg(value_hint = clap::ValueHint::FilePath)]
        png: PathBuf,

        /// 输出尺寸，如 512x512（缺省使用配置中的 default_size）
        #[arg(short, long)]
        size: Option<RasterSize>,

        /// 渲染 SVG 文件本身的内容，而不是内置图标
        #[arg(long)]
        from_file: bool,
    },

    /// 将位图等比缩放并居中到透明画布
    Shrink {
        /// 源位图路径
        #[arg(default_value = DEFAULT_BITMAP_SOURCE, value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// 输出 PNG 路径（已存在则覆盖）
        #[arg(default_value = DEFAULT_ICON_OUTPUT, value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// 缩放滤镜（nearest / triangle / catmullrom / lanczos3）
        #[arg(long, value_parser = ResizeFilter::from_str)]
        filter: Option<ResizeFilter>,

        /// 画布边长
        #[arg(long)]
        canvas: Option<u32>,

        /// 不放大小于画布的图片
        #[arg(long)]
        no_upscale: bool,
    },

    /// 写出默认配置文件
    InitConfig {
        /// 覆盖已存在的配置文件
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    fn default_conversion() -> Self {
        Self::Svg2png {
            svg: PathBuf::from(DEFAULT_SVG_SOURCE),
            png: PathBuf::from(DEFAULT_ICON_OUTPUT),
            size: Some(DEFAULT_ICON_SIZE),
            from_file: false,
        }
    }
}

/// 执行一次命令。
pub fn run(cli: Cli) -> Result<(), AppError> {
    let command = cli.command.unwrap_or_else(Commands::default_conversion);

    match command {
        Commands::InitConfig { force } => {
            if cli.config.exists() && !force {
                return Err(AppError::Config(format!(
                    "配置文件已存在: {}（使用 --force 覆盖）",
                    cli.config.display()
                )));
            }
            settings::save_config_to_path(&cli.config, &IconConfig::default())?;
            log::info!("已写出默认配置: {}", cli.config.display());
        }
        Commands::Svg2png { svg, png, size, from_file } => {
            let mut config = settings::load_config_from_path(&cli.config);
            if from_file {
                config.svg_content = SvgContent::File;
            }
            let handler = IconHandler::new(config).map_err(|e| AppError::Config(e.to_string()))?;
            handler.svg_to_png(&svg, &png, size)?;
        }
        Commands::Shrink { input, output, filter, canvas, no_upscale } => {
            let mut config = settings::load_config_from_path(&cli.config);
            if let Some(filter) = filter {
                config.resize_filter = filter;
            }
            if let Some(canvas) = canvas {
                config.canvas_size = canvas;
            }
            if no_upscale {
                config.allow_upscale = false;
            }
            let handler = IconHandler::new(config).map_err(|e| AppError::Config(e.to_string()))?;
            handler.shrink_image(&input, &output)?;
        }
    }

    Ok(())
}
