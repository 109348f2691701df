//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标链路（渲染 / 加载 / 缩放 / 保存）中的所有错误来源。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

/// 图标处理统一错误类型。
///
/// 该类型会在应用层被上转为 `AppError`，最终由 `main` 打印并以非零码退出。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("文件不存在：{0}")]
    SourceNotFound(String),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("渲染错误：{0}")]
    Render(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),
}

