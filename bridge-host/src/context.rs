use bon::Builder;
use bridge_core::ChannelName;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 调用上下文（Call Context）
///
/// 承载一次方法调用所需的横切信息，例如：
/// - 通道名（`channel`）：本次调用经由哪条通道进入宿主；
/// - 调用 ID（`call_id`）：宿主生成，用于日志与回复关联；
/// - 接收时间（`received_at`）：调用进入分发循环的时刻；
/// - 关联 ID（`correlation_id`，可选）：由调用方或上层传递的追踪键。
///
/// 典型用法：
/// ```rust
/// use bridge_host::CallContext;
/// use bridge_core::ChannelName;
///
/// let ctx = CallContext::builder()
///     .channel(ChannelName::parse("com.example.app/refresh").unwrap())
///     .maybe_correlation_id(Some("cor-123".into()))
///     .build();
/// assert_eq!(ctx.channel().feature(), "refresh");
/// ```
#[derive(Builder, Clone, Debug)]
pub struct CallContext {
    /// 本次调用所属通道
    channel: ChannelName,
    /// 调用 ID（默认随机生成）
    #[builder(default = Uuid::new_v4())]
    call_id: Uuid,
    /// 进入分发循环的时刻
    #[builder(default = Utc::now())]
    received_at: DateTime<Utc>,
    /// 关联 ID（可选）：为空则不参与链路追踪
    correlation_id: Option<String>,
}

impl CallContext {
    pub fn channel(&self) -> &ChannelName {
        &self.channel
    }

    pub fn call_id(&self) -> Uuid {
        self.call_id
    }

    pub fn received_at(&self) -> &DateTime<Utc> {
        &self.received_at
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }
}
