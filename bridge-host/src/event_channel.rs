//! 事件通道（EventChannel）
//!
//! 方法通道的反方向伙伴：宿主向 UI 层广播事件流。
//! 基于 `tokio::sync::broadcast` 的轻量实现：
//! - `emit`：克隆并广播一条 JSON 事件；
//! - `subscribe`：返回 `'static` 生命周期事件流，便于在 `tokio::spawn` 中使用；
//! - 无订阅者时发送将被忽略，属非致命情形。
//!
use crate::error::{HostError, HostResult};
use bridge_core::ChannelName;
use futures_core::stream::BoxStream;
use futures_util::StreamExt;
use serde_json::Value;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

/// 宿主到 UI 的广播事件通道
#[derive(Clone)]
pub struct EventChannel {
    name: ChannelName,
    tx: broadcast::Sender<Value>,
}

impl EventChannel {
    /// 创建事件通道，`capacity` 为广播缓冲区容量
    pub fn new(name: ChannelName, capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { name, tx }
    }

    pub fn name(&self) -> &ChannelName {
        &self.name
    }

    /// 广播一条事件
    ///
    /// 无订阅者时 broadcast 的 send 会返回错误，这里视为非致命并忽略。
    pub fn emit(&self, event: Value) {
        let _ = self.tx.send(event);
    }

    /// 将任意可序列化值广播为事件
    pub fn emit_serialized<T: serde::Serialize>(&self, event: &T) -> HostResult<()> {
        let value = serde_json::to_value(event)
            .map_err(bridge_core::ChannelError::from)?;
        self.emit(value);
        Ok(())
    }

    /// 订阅事件流
    ///
    /// 消费过慢导致缓冲区溢出时，流中出现 [`HostError::EventStreamLagged`]，
    /// 之后从最新位置继续。
    pub fn subscribe(&self) -> BoxStream<'static, HostResult<Value>> {
        let rx = self.tx.subscribe();
        let stream = BroadcastStream::new(rx).map(|r| {
            r.map_err(|err| match err {
                BroadcastStreamRecvError::Lagged(skipped) => {
                    HostError::EventStreamLagged { skipped }
                }
            })
        });
        Box::pin(stream)
    }
}
