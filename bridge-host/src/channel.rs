use crate::error::{HostError, HostResult};
use crate::host::Envelope;
use bridge_core::{ChannelName, MethodCall, MethodOutcome};
use tokio::sync::{mpsc, oneshot};

/// 方法通道（调用方句柄）
///
/// UI 层经由该句柄向宿主发起调用：
/// - `invoke` 非阻塞地入队一次调用并等待回复；
/// - 每次调用恰好换回一个三态结果或一个传输层错误；
/// - 句柄可随意克隆，多个调用方共享同一条队列。
#[derive(Clone, Debug)]
pub struct MethodChannel {
    name: ChannelName,
    tx: mpsc::Sender<Envelope>,
}

impl MethodChannel {
    pub(crate) fn new(name: ChannelName, tx: mpsc::Sender<Envelope>) -> Self {
        Self { name, tx }
    }

    pub fn name(&self) -> &ChannelName {
        &self.name
    }

    /// 发起一次方法调用，等待唯一的回复
    ///
    /// - 宿主未启动或已关闭：[`HostError::QueueClosed`]；
    /// - 回复槽在产生结果前被宿主丢弃：[`HostError::ReplyDropped`]；
    /// - 其余情形由处理器决定三态结果。
    pub async fn invoke(&self, call: MethodCall) -> HostResult<MethodOutcome> {
        let method = call.method().to_string();
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send(Envelope {
                channel: self.name.clone(),
                call,
                reply: reply_tx,
            })
            .await
            .map_err(|_| HostError::QueueClosed)?;

        reply_rx.await.map_err(|_| HostError::ReplyDropped {
            channel: self.name.to_string(),
            method,
        })?
    }

    /// 无参数调用的便捷入口
    pub async fn invoke_method(&self, method: impl Into<String>) -> HostResult<MethodOutcome> {
        self.invoke(MethodCall::new(method)).await
    }
}
