use bridge_core::ChannelError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum HostError {
    #[error("channel: {0}")]
    Channel(#[from] ChannelError),

    #[error("channel not found: {channel}")]
    ChannelNotFound { channel: String },

    #[error("channel already registered: {channel}")]
    AlreadyRegistered { channel: String },

    #[error("method already routed: {method}")]
    AlreadyRouted { method: String },

    #[error("host already started")]
    AlreadyStarted,

    #[error("host queue closed")]
    QueueClosed,

    #[error("reply dropped: channel={channel}, method={method}")]
    ReplyDropped { channel: String, method: String },

    #[error("event stream lagged: skipped={skipped}")]
    EventStreamLagged { skipped: u64 },
}

/// 统一 Result 类型别名
pub type HostResult<T> = Result<T, HostError>;
