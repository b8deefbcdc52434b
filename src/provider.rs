//! 环境存储接口定义（输出端口）
//!
//! 注册表通过该接口读取变量，不直接绑定进程环境。
//! 测试和使用合成环境的宿主程序可以注入自己的存储实现。

use std::collections::HashMap;

/// 环境变量读取接口
///
/// 约定：变量不存在（或值不是合法 Unicode）时返回 `None`。
/// 接口只读，核心不枚举、不写入、不删除变量。
pub trait EnvProvider {
    /// 读取单个变量
    fn get(&self, key: &str) -> Option<String>;
}

/// 进程环境存储
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvProvider for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// 内存 Map 存储（测试与合成环境用）
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// 创建空存储
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 从键值对批量构建
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            vars: pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// 插入或覆盖一个变量
    pub fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}

impl EnvProvider for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
