//! 宿主侧方法通道运行时（bridge-host）
//!
//! 在 `bridge-core` 数据模型之上提供宿主侧的调度运行时：
//! - 处理器（`handler`）：嵌入方注入的方法调用处理协议；
//! - 路由器（`router`）：按方法名注册闭包，未命中返回 NotImplemented；
//! - 上下文（`context`）：单次调用的横切信息（通道、调用 ID、时间）；
//! - 宿主（`host`）：通道注册、单执行上下文的分发循环与故障隔离；
//! - 通道（`channel`）：调用方句柄，一次调用恰好换回一个结果；
//! - 插件（`plugin`）：显式初始化清单式的一次性启动注册；
//! - 事件通道（`event_channel`）：宿主到 UI 的广播事件流。
//!
//! 本 crate 不绑定任何具体业务：`startRefresh` 之类命令的语义
//! 完全由嵌入方提供的处理器决定。
//!
pub mod channel;
pub mod context;
pub mod error;
pub mod event_channel;
pub mod handler;
pub mod host;
pub mod plugin;
pub mod router;

pub use channel::MethodChannel;
pub use context::CallContext;
pub use error::{HostError, HostResult};
pub use event_channel::EventChannel;
pub use handler::{MethodCallHandler, handler_fn};
pub use host::{BridgeHost, HostConfig, HostHandle};
pub use plugin::Plugin;
pub use router::MethodRouter;
