//! 变量绑定：单次查找的值句柄
//!
//! 携带变量名、解析出的原始字符串值和默认值标记，
//! 通过对注册表的非拥有引用回报读取时发现的问题。

use crate::error::LookupError;
use crate::registry::Registry;

/// 一次查找得到的变量句柄
///
/// 值语义：`with_default` 消耗旧句柄并返回新句柄，字段不在
/// 原地共享修改。唯一的副作用通道是向注册表的共享错误列表
/// 追加记录。句柄借用注册表，注册表先于它销毁时无法编译。
#[derive(Debug, Clone)]
pub struct Binding<'a> {
    key: String,
    value: String,
    has_default: bool,
    registry: &'a Registry,
}

impl<'a> Binding<'a> {
    pub(crate) fn new(registry: &'a Registry, key: String, value: String) -> Self {
        Self {
            key,
            value,
            has_default: false,
            registry,
        }
    }

    /// 变量名
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 设置默认值
    ///
    /// 当前值为空时用 `default` 替换。无论是否替换，默认值
    /// 标记都会置位，之后的读取不再报告缺失错误。
    #[must_use]
    pub fn with_default(mut self, default: &str) -> Self {
        if self.value.is_empty() {
            self.value = default.to_string();
        }
        self.has_default = true;
        self
    }

    /// 读取字符串值
    ///
    /// 值为空且未设置默认值时，记录一条缺失错误并返回空字符串，
    /// 否则原样返回。缺失检测只发生在这里：查找时不校验，
    /// 先链式调用 `with_default` 的调用方不会触发。
    pub fn as_string(&self) -> String {
        if self.value.is_empty() && !self.has_default {
            self.registry.record(LookupError::MissingValue {
                key: self.key.clone(),
            });
        }
        self.value.clone()
    }

    /// 读取整数值（可带符号的十进制，平台原生宽度）
    ///
    /// 先按 `as_string` 的逻辑取值。取到的字符串为空时直接
    /// 返回 0：缺失错误已在取值时记录过，这里不重复记录。
    /// 非空但解析失败时记录一条整数错误并返回 0。
    pub fn as_int(&self) -> isize {
        let value = self.as_string();
        if value.is_empty() {
            return 0;
        }

        match value.parse::<isize>() {
            Ok(parsed) => parsed,
            Err(_) => {
                self.registry.record(LookupError::InvalidInt {
                    key: self.key.clone(),
                    value,
                });
                0
            }
        }
    }
}
