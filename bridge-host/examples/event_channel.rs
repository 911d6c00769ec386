/// 事件通道示例
/// 展示宿主向 UI 层广播刷新状态事件，订阅方以 'static 事件流消费
use bridge_core::ChannelName;
use bridge_host::EventChannel;
use futures_util::StreamExt;
use serde_json::json;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let status = EventChannel::new(
        ChannelName::parse("com.crow.school_schedule/refreshStatus")?,
        16,
    );

    let mut stream = status.subscribe();
    let consumer = tokio::spawn(async move {
        while let Some(event) = stream.next().await {
            match event {
                Ok(value) => println!("event -> {value}"),
                Err(err) => println!("stream error -> {err}"),
            }
        }
    });

    status.emit(json!({"state": "refreshing", "progress": 0}));
    status.emit(json!({"state": "refreshing", "progress": 50}));
    status.emit(json!({"state": "idle", "progress": 100}));

    // 发送端全部释放后，订阅流自然结束
    drop(status);
    consumer.await?;

    Ok(())
}
