//! 数据层统一错误定义
//!
//! 聚焦通道名校验、调用载荷序列化等最小必要集合，
//! 便于运行时层统一转换与包装。
//!
use thiserror::Error;

/// 统一错误类型（数据层最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid channel name: {reason}")]
    InvalidChannelName { reason: String },

    #[error("empty method name")]
    EmptyMethodName,
}

impl ChannelError {
    pub fn invalid_channel_name(reason: impl Into<String>) -> Self {
        Self::InvalidChannelName {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type ChannelResult<T> = Result<T, ChannelError>;
