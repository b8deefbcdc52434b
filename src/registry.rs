//! 注册表：查找入口与共享错误列表
//!
//! 一个配置阶段创建一个注册表。所有查找都从这里出发，
//! 派生出的每个 Binding 把读取时发现的问题追加回同一个
//! 错误列表，阶段结束后宿主程序一次性检查。

use crate::binding::Binding;
use crate::error::{LookupError, OutputFormat};
use crate::provider::{EnvProvider, ProcessEnv};
use std::cell::RefCell;
use std::fmt;

/// 配置阶段的注册表
///
/// 持有环境存储句柄和追加式错误列表。列表在整个阶段内
/// 只增不减。`RefCell` 使注册表 `!Sync`，单线程使用由
/// 类型系统保证。
pub struct Registry {
    provider: Box<dyn EnvProvider>,
    errors: RefCell<Vec<LookupError>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("errors", &self.errors.borrow())
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// 创建基于进程环境的注册表
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(ProcessEnv)
    }

    /// 使用自定义存储创建注册表
    pub fn with_provider(provider: impl EnvProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            errors: RefCell::new(Vec::new()),
        }
    }

    /// 查找变量
    ///
    /// 变量不存在时值归一化为空字符串。这里不做任何校验，
    /// 错误检测推迟到 Binding 的取值方法。纯读操作。
    pub fn lookup(&self, key: &str) -> Binding<'_> {
        let value = self.provider.get(key).unwrap_or_default();
        Binding::new(self, key.to_string(), value)
    }

    /// 累积错误的快照（按记录顺序）
    #[must_use]
    pub fn errors(&self) -> Vec<LookupError> {
        self.errors.borrow().clone()
    }

    /// 是否记录过错误
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.borrow().is_empty()
    }

    /// 已记录的错误数量
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }

    /// 批量校验：无错误为 Ok，否则返回全部记录
    pub fn check(&self) -> Result<(), Vec<LookupError>> {
        if self.has_errors() {
            Err(self.errors())
        } else {
            Ok(())
        }
    }

    /// 报告全部错误到 stderr，支持详细/安静模式
    pub fn report(&self, verbose: bool) {
        for err in self.errors.borrow().iter() {
            err.report(verbose);
        }
    }

    /// 导出错误列表
    ///
    /// # Errors
    ///
    /// JSON 序列化失败时返回 `serde_json::Error`。
    pub fn export_errors(&self, format: OutputFormat) -> serde_json::Result<String> {
        let errors = self.errors.borrow();
        match format {
            OutputFormat::Text => Ok(errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => serde_json::to_string_pretty(&*errors),
        }
    }

    /// 追加一条错误记录（仅供 Binding 回报）
    pub(crate) fn record(&self, err: LookupError) {
        self.errors.borrow_mut().push(err);
    }
}
