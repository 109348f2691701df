//! # 图标工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 + clap 解析 + 退出码        │
//! │     ↓                                                    │
//! │  cli ─────── 子命令分发（svg2png / shrink / init-config）  │
//! │     ├─ settings     JSON 配置加载（失败回退默认值）        │
//! │     ↓                                                    │
//! │  icon ────── IconHandler                                 │
//! │     ├─ rasterize    SVG → PNG（usvg + resvg）             │
//! │     ├─ loader       位图加载 + 签名 + 像素限制             │
//! │     ├─ pipeline     fast_image_resize 缩放                │
//! │     └─ pad          等比缩放 + 透明画布居中               │
//! │                                                          │
//! │  error ───── AppError（统一错误类型）                     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，所有命令入口的返回类型 |
//! | [`icon`] | SVG 渲染、位图加载、缩放与居中 |
//! | [`settings`] | 配置文件读写 |
//! | [`cli`] | 命令行参数定义与执行 |

pub mod cli;
pub mod error;
pub mod icon;
pub mod settings;
