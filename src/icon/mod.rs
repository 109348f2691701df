//! # 图标处理模块（icon）
//!
//! ## 设计思路
//!
//! 两条互不相连的操作共用一个处理器 `IconHandler`：
//!
//! - SVG → PNG：按请求尺寸渲染（默认 100x100）
//! - 位图 → 32x32 图标：等比缩放后居中贴到透明画布
//!
//! 按职责拆分为多个子模块，避免单文件膨胀与耦合。
//!
//! ```text
//! svg_to_png                      shrink_image
//!    ↓                               ↓
//! rasterize.rs（usvg + resvg）     loader.rs（存在性 + 签名 + 像素限制）
//!    ↓                               ↓
//!    │                            pipeline.rs（fast_image_resize，失败回退 imageops）
//!    │                               ↓
//!    │                            pad.rs（plan_fit + 居中粘贴）
//!    ↓                               ↓
//! handler.rs::save_png（覆盖写出 PNG）
//! ```
//!
//! ## 分层职责建议
//!
//! - 配置与策略变更优先改 `config.rs`
//! - 尺寸/来源等输入模型变更改 `source.rs`
//! - 单阶段行为优化分别改 `rasterize/loader/pipeline/pad`

mod config;
mod error;
mod handler;
mod loader;
mod pad;
mod pipeline;
mod rasterize;
mod source;

pub use config::{IconConfig, ResizeFilter};
pub use error::IconError;
pub use handler::IconHandler;
pub use pad::{FitPlan, plan_fit};
pub use source::{EMBEDDED_SVG, RasterSize, SvgContent};
