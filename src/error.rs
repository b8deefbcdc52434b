//! 错误处理模块
//!
//! 查找阶段的所有问题都被转换为 `LookupError` 记录，追加到
//! 注册表的共享错误列表中，从不中断调用方的控制流。
//! 宿主程序在配置阶段结束后一次性检查全部记录。

use miette::Diagnostic;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 查找阶段的错误记录
///
/// 只有两种错误，都在读取时检测：缺失检测推迟到取值方法，
/// 这样先链式设置默认值的调用方不会触发缺失错误。
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum LookupError {
    /// 变量值为空且没有设置默认值
    #[error("变量 '{key}' 为空，且未设置默认值")]
    #[diagnostic(
        code(envread::missing_value),
        help("在环境中设置该变量，或先用 with_default 提供默认值")
    )]
    MissingValue { key: String },

    /// 变量值无法解析为十进制整数
    #[error("解析 '{key}' 为整数失败: 无效的值 '{value}'")]
    #[diagnostic(
        code(envread::invalid_int),
        help("只接受可带符号的十进制整数，例如 '8080' 或 '-1'")
    )]
    InvalidInt { key: String, value: String },
}

impl LookupError {
    /// 错误涉及的变量名
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            LookupError::MissingValue { key } | LookupError::InvalidInt { key, .. } => key,
        }
    }

    /// 报告单条错误，支持详细/安静模式
    ///
    /// verbose = true: 错误信息加诊断提示
    /// verbose = false: 每条一行关键信息
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {self}");
            if let Some(help) = self.help() {
                eprintln!("  └─ 提示: {help}");
            }
        } else {
            match self {
                LookupError::MissingValue { key } => eprintln!("缺少变量: {key}"),
                LookupError::InvalidInt { key, .. } => eprintln!("无效整数: {key}"),
            }
        }
    }
}

/// 错误列表导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 纯文本，每条记录一行
    #[default]
    Text,
    /// JSON 数组
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// 从字符串解析
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}
