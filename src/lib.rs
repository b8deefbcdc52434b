//! envread - 进程环境配置读取库
//!
//! 带类型访问器、默认值回退和批量错误报告的环境变量读取工具。
//! 单次查找从不立即失败：所有问题累积在注册表里，配置阶段
//! 结束后一次性检查，一趟就能报告整个配置面的全部错误。
//!
//! # 示例
//!
//! ```
//! use envread::{MapEnv, Registry};
//!
//! let env = MapEnv::from_pairs(&[("HOST", "example.com"), ("MY_TIMEOUT", "600")]);
//! let registry = Registry::with_provider(env);
//!
//! let host = registry.lookup("HOST").as_string();
//! let timeout = registry.lookup("MY_TIMEOUT").as_int();
//! let retries = registry.lookup("RETRIES").with_default("3").as_int();
//!
//! // 是否中止由宿主程序决定
//! if registry.has_errors() {
//!     registry.report(false);
//! }
//! # assert_eq!(host, "example.com");
//! # assert_eq!(timeout, 600);
//! # assert_eq!(retries, 3);
//! ```

// 变量绑定与类型访问器
pub mod binding;

// 错误记录与导出格式
pub mod error;

// 环境存储接口
pub mod provider;

// 注册表与查找入口
pub mod registry;

// 测试工具
#[cfg(test)]
mod test_utils;

// 重新导出常用类型
pub use binding::Binding;
pub use error::{LookupError, OutputFormat};
pub use provider::{EnvProvider, MapEnv, ProcessEnv};
pub use registry::Registry;
