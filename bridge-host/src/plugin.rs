//! 插件（Plugin）
//!
//! 原始宿主以反射式的全局注册器在启动时挂接各集成；
//! 这里改为显式初始化清单：每个插件实现 `register`，
//! 在其中明确注册自己的通道与处理器，由
//! [`BridgeHost::register_plugins`](crate::host::BridgeHost::register_plugins)
//! 在启动前按清单顺序调用一次。
//!
use crate::error::HostResult;
use crate::host::BridgeHost;

/// 插件：在启动注册阶段挂接自己的通道
pub trait Plugin: Send + Sync {
    /// 插件名称（用于启动日志与排障）
    fn name(&self) -> &str;

    /// 向宿主注册本插件的通道与处理器
    fn register(&self, host: &BridgeHost) -> HostResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::handler_fn;
    use crate::host::BridgeHost;
    use bridge_core::{ChannelName, MethodCall, MethodOutcome};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RefreshPlugin {
        registrations: Arc<AtomicUsize>,
    }

    impl Plugin for RefreshPlugin {
        fn name(&self) -> &str {
            "refresh"
        }

        fn register(&self, host: &BridgeHost) -> HostResult<()> {
            self.registrations.fetch_add(1, Ordering::SeqCst);
            host.set_method_call_handler(
                ChannelName::parse("com.example.app/refresh")?,
                handler_fn(|_ctx, _call| async { Ok(MethodOutcome::success_null()) }),
            )?;
            Ok(())
        }
    }

    // 注册阶段即失败的插件：通道名不合法
    struct BrokenPlugin;

    impl Plugin for BrokenPlugin {
        fn name(&self) -> &str {
            "broken"
        }

        fn register(&self, host: &BridgeHost) -> HostResult<()> {
            host.set_method_call_handler(
                ChannelName::parse("missing-separator")?,
                handler_fn(|_ctx, _call| async { Ok(MethodOutcome::success_null()) }),
            )?;
            Ok(())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn failed_bootstrap_allows_corrected_retry() {
        let host = Arc::new(BridgeHost::default());

        let broken: Vec<Arc<dyn Plugin>> = vec![Arc::new(BrokenPlugin)];
        assert!(host.register_plugins(&broken).is_err());

        // 失败的启动不锁死宿主：修正清单后重试会真正执行注册
        let registrations = Arc::new(AtomicUsize::new(0));
        let good: Vec<Arc<dyn Plugin>> = vec![Arc::new(RefreshPlugin {
            registrations: registrations.clone(),
        })];
        host.register_plugins(&good).unwrap();
        assert_eq!(registrations.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn bootstrap_registers_each_plugin_once() {
        let host = Arc::new(BridgeHost::default());
        let registrations = Arc::new(AtomicUsize::new(0));
        let plugins: Vec<Arc<dyn Plugin>> = vec![Arc::new(RefreshPlugin {
            registrations: registrations.clone(),
        })];

        host.register_plugins(&plugins).unwrap();
        assert_eq!(registrations.load(Ordering::SeqCst), 1);

        // 重复启动注册是无害的空操作
        host.register_plugins(&plugins).unwrap();
        assert_eq!(registrations.load(Ordering::SeqCst), 1);

        // 插件注册过的通道可以正常取用并调用
        let handle = host.start().unwrap();
        let channel = host
            .channel(&ChannelName::parse("com.example.app/refresh").unwrap())
            .unwrap();
        let outcome = channel.invoke(MethodCall::new("startRefresh")).await.unwrap();
        assert_eq!(outcome, MethodOutcome::success_null());

        handle.shutdown();
        handle.join().await;
    }
}
