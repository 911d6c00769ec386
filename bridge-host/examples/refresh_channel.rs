/// 刷新通道示例
/// 展示 插件清单注册 -> 启动宿主 -> UI 侧调用 startRefresh / stopRefresh 的闭环，
/// 以及未知命令与处理器故障的三态结果
use bridge_core::{ChannelName, MethodOutcome};
use bridge_host::{BridgeHost, HostConfig, HostError, MethodRouter, Plugin};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

const REFRESH_CHANNEL: &str = "com.crow.school_schedule/refresh";

struct RefreshPlugin {
    refreshing: Arc<AtomicBool>,
}

impl Plugin for RefreshPlugin {
    fn name(&self) -> &str {
        "refresh"
    }

    fn register(&self, host: &BridgeHost) -> Result<(), HostError> {
        let router = MethodRouter::new();

        let flag = self.refreshing.clone();
        router.route("startRefresh", move |_ctx, _call| {
            let flag = flag.clone();
            async move {
                flag.store(true, Ordering::SeqCst);
                Ok(MethodOutcome::success_null())
            }
        })?;

        let flag = self.refreshing.clone();
        router.route("stopRefresh", move |_ctx, _call| {
            let flag = flag.clone();
            async move {
                flag.store(false, Ordering::SeqCst);
                Ok(MethodOutcome::success_null())
            }
        })?;

        router.route("failRefresh", |_ctx, _call| async {
            Err(anyhow::anyhow!("backend unavailable"))
        })?;

        host.set_method_call_handler(ChannelName::parse(REFRESH_CHANNEL)?, Arc::new(router))?;
        Ok(())
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let refreshing = Arc::new(AtomicBool::new(false));
    let host = Arc::new(BridgeHost::new(HostConfig::default()));

    // 显式初始化清单：启动前一次性注册全部插件
    let plugins: Vec<Arc<dyn Plugin>> = vec![Arc::new(RefreshPlugin {
        refreshing: refreshing.clone(),
    })];
    host.register_plugins(&plugins)?;

    let handle = host.start()?;
    let channel = host.channel(&ChannelName::parse(REFRESH_CHANNEL)?)?;

    println!("startRefresh   -> {:?}", channel.invoke_method("startRefresh").await?);
    println!("refreshing     -> {}", refreshing.load(Ordering::SeqCst));
    println!("stopRefresh    -> {:?}", channel.invoke_method("stopRefresh").await?);
    println!("unknownCommand -> {:?}", channel.invoke_method("unknownCommand").await?);
    println!("failRefresh    -> {:?}", channel.invoke_method("failRefresh").await?);

    handle.shutdown();
    handle.join().await;

    Ok(())
}
