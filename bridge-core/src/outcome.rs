//! 调用结果（MethodOutcome）
//!
//! 每次方法调用恰好产生三态结果之一：
//! - `Success`：携带任意响应值（可为 null）；
//! - `Failure`：标题 + 消息 + 可选详情载荷；
//! - `NotImplemented`：处理器不认识该方法名，无载荷。
//!
//! 三态互斥；未被识别的方法名必须返回 `NotImplemented`，
//! 而不是静默成功或让调用方得不到任何回应。
//!
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 三态调用结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum MethodOutcome {
    /// 成功，携带响应值
    Success { value: Value },
    /// 失败，标题 + 消息 + 可选详情
    Failure {
        title: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<Value>,
    },
    /// 方法名未被处理器识别
    NotImplemented,
}

impl MethodOutcome {
    /// 成功结果
    pub fn success(value: Value) -> Self {
        Self::Success { value }
    }

    /// 成功且响应值为 null（最常见的“无返回值”情形）
    pub fn success_null() -> Self {
        Self::Success { value: Value::Null }
    }

    /// 将任意可序列化值包装为成功结果
    pub fn ok<T: Serialize>(value: &T) -> crate::ChannelResult<Self> {
        Ok(Self::Success {
            value: serde_json::to_value(value)?,
        })
    }

    /// 失败结果（无详情）
    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            title: title.into(),
            message: message.into(),
            detail: None,
        }
    }

    /// 失败结果（带详情载荷）
    pub fn failure_with_detail(
        title: impl Into<String>,
        message: impl Into<String>,
        detail: Value,
    ) -> Self {
        Self::Failure {
            title: title.into(),
            message: message.into(),
            detail: Some(detail),
        }
    }

    /// 未实现结果
    pub fn not_implemented() -> Self {
        Self::NotImplemented
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented)
    }
}
