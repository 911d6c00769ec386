//! 方法调用（MethodCall）
//!
//! 表达 UI 层发起的一次命令请求：方法名 + 可选参数载荷。
//! 每次调用恰好被分发一次，不做持久化。
//!
use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 一次方法调用
///
/// - `method`：命令名（如 `startRefresh`、`stopRefresh`），集合由嵌入方定义；
/// - `arguments`：可选的 JSON 参数载荷，语义由处理器约定；
/// - 空方法名在分发时被拒绝，见 `bridge-host` 的调度实现。
///
/// # 示例
///
/// ```
/// use bridge_core::MethodCall;
///
/// let call = MethodCall::builder()
///     .method("startRefresh")
///     .maybe_arguments(Some(serde_json::json!({"force": true})))
///     .build();
/// assert_eq!(call.method(), "startRefresh");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// 命令名（稳定字符串，用于路由、日志与追踪）
    #[builder(into)]
    method: String,
    /// 可选参数载荷
    arguments: Option<Value>,
}

impl MethodCall {
    /// 无参数调用的便捷构造
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn arguments(&self) -> Option<&Value> {
        self.arguments.as_ref()
    }

    /// 将参数载荷反序列化为具体类型
    pub fn arguments_as<T>(&self) -> crate::ChannelResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let value = self.arguments.clone().unwrap_or(Value::Null);
        Ok(serde_json::from_value(value)?)
    }
}
