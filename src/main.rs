//! # 图标工具 — 应用入口
//!
//! 本文件仅负责日志初始化、参数解析与退出码。
//! 业务逻辑分布在各子模块中，详见 `lib.rs` 架构文档。

use std::process::ExitCode;

use clap::Parser;
use icon_tool::cli::{self, Cli};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match cli::run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.already_logged() => {
            log::debug!("以非零状态退出: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("执行失败: {err}");
            ExitCode::FAILURE
        }
    }
}
