//! 测试工具模块
//!
//! 统一管理测试用的进程环境变量，避免用例之间互相污染。

use std::collections::HashMap;
use std::env;

/// 环境变量守卫 - 释放时恢复原值
///
/// 只记录被触碰过的键：首次设置或删除某个变量时保存其原值，
/// 守卫释放时逐个恢复。
pub struct EnvGuard {
    touched: HashMap<String, Option<String>>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 创建新的环境守卫
    pub fn new() -> Self {
        Self {
            touched: HashMap::new(),
        }
    }

    /// 设置测试环境变量（edition 2024 下需要 unsafe 包装）
    pub fn set_var(&mut self, key: &str, value: &str) {
        self.remember(key);
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量
    pub fn remove_var(&mut self, key: &str) {
        self.remember(key);
        unsafe {
            env::remove_var(key);
        }
    }

    /// 首次触碰时记录原值
    fn remember(&mut self, key: &str) {
        self.touched
            .entry(key.to_string())
            .or_insert_with(|| env::var(key).ok());
    }
}

impl Drop for EnvGuard {
    /// 释放时恢复所有被触碰变量的原值
    fn drop(&mut self) {
        for (key, original) in &self.touched {
            match original {
                Some(value) => unsafe {
                    env::set_var(key, value);
                },
                None => unsafe {
                    env::remove_var(key);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_guard_restores_original_value() {
        unsafe {
            env::set_var("ENVREAD_GUARD_TEST", "original");
        }

        {
            let mut guard = EnvGuard::new();
            guard.set_var("ENVREAD_GUARD_TEST", "changed");
            assert_eq!(env::var("ENVREAD_GUARD_TEST").unwrap(), "changed");
        }

        assert_eq!(env::var("ENVREAD_GUARD_TEST").unwrap(), "original");
        unsafe {
            env::remove_var("ENVREAD_GUARD_TEST");
        }
    }

    #[test]
    #[serial]
    fn test_guard_removes_variables_it_created() {
        {
            let mut guard = EnvGuard::new();
            guard.remove_var("ENVREAD_GUARD_FRESH");
            guard.set_var("ENVREAD_GUARD_FRESH", "value");
        }

        assert!(env::var("ENVREAD_GUARD_FRESH").is_err());
    }
}
