//! 平台通道数据模型（bridge-core）
//!
//! 定义宿主侧方法通道（Method Channel）所需的最小数据模型：
//! - 通道名（`channel_name`）：带命名空间校验的值对象
//! - 方法调用（`invocation`）：一次命令请求（方法名 + 可选参数）
//! - 调用结果（`outcome`）：Success / Failure / NotImplemented 三态结果
//! - 错误（`error`）：数据层统一错误类型
//!
//! 本 crate 不包含任何调度逻辑，仅定义跨层传输的载体与校验规则，
//! 运行时（处理器注册、分发、事件流）由 `bridge-host` 提供。
//!
pub mod channel_name;
pub mod error;
pub mod invocation;
pub mod outcome;

pub use channel_name::ChannelName;
pub use error::{ChannelError, ChannelResult};
pub use invocation::MethodCall;
pub use outcome::MethodOutcome;
