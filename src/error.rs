//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义应用级 `AppError` 枚举，命令入口统一返回 `Result<T, AppError>`，
//! 由 `main` 负责以非零状态码退出；图标操作自身已记录的失败不再重复输出。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::icon::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标处理流水线错误（渲染 / 加载 / 缩放 / 保存）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 配置文件不可用
    #[error("配置错误: {0}")]
    Config(String),
}

impl AppError {
    /// 是否已由图标操作在失败处记录过 error 日志。
    pub fn already_logged(&self) -> bool {
        matches!(self, Self::Icon(_))
    }
}
