//! 宿主（BridgeHost）
//!
//! 统一编排“通道注册 → 入队 → 单上下文分发 → 回复”的长驻任务：
//! - 每条通道注册一个嵌入方处理器，重复注册报错；
//! - 所有调用经同一队列进入唯一的分发任务，顺序处理（主线程等价语义）；
//! - 处理器返回 `Err` 或 panic 时在边界处转换为 `Failure`，宿主进程不崩溃；
//! - 每次调用恰好回复一个结果；
//! - 提供关闭与等待的 `HostHandle`。
//!
use crate::channel::MethodChannel;
use crate::context::CallContext;
use crate::error::{HostError, HostResult};
use crate::handler::MethodCallHandler;
use crate::plugin::Plugin;
use bridge_core::{ChannelError, ChannelName, MethodCall, MethodOutcome};
use dashmap::DashMap;
use futures_util::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// 入队的一次调用：通道 + 调用 + 一次性回复槽
pub(crate) struct Envelope {
    pub(crate) channel: ChannelName,
    pub(crate) call: MethodCall,
    pub(crate) reply: oneshot::Sender<HostResult<MethodOutcome>>,
}

/// 宿主配置
#[derive(Clone, Copy, Debug)]
pub struct HostConfig {
    /// 调用队列容量（排满后 invoke 在入队处等待）
    pub queue_capacity: usize,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 64,
        }
    }
}

type HandlerMap = Arc<DashMap<ChannelName, Arc<dyn MethodCallHandler>>>;

/// BridgeHost：
/// - 持有通道名到处理器的注册表与调用队列的发送端
/// - `start` 后由唯一分发任务顺序消费队列
pub struct BridgeHost {
    handlers: HandlerMap,
    tx: mpsc::Sender<Envelope>,
    // start 时一次性取走；再次 start 报 AlreadyStarted
    rx: Mutex<Option<mpsc::Receiver<Envelope>>>,
    bootstrapped: AtomicBool,
}

impl Default for BridgeHost {
    fn default() -> Self {
        Self::new(HostConfig::default())
    }
}

impl BridgeHost {
    pub fn new(config: HostConfig) -> Self {
        let (tx, rx) = mpsc::channel(config.queue_capacity);

        Self {
            handlers: Arc::new(DashMap::new()),
            tx,
            rx: Mutex::new(Some(rx)),
            bootstrapped: AtomicBool::new(false),
        }
    }

    /// 注册通道处理器，返回调用方句柄
    ///
    /// 同名通道重复注册返回 [`HostError::AlreadyRegistered`]。
    pub fn set_method_call_handler(
        &self,
        name: ChannelName,
        handler: Arc<dyn MethodCallHandler>,
    ) -> HostResult<MethodChannel> {
        if self.handlers.contains_key(&name) {
            return Err(HostError::AlreadyRegistered {
                channel: name.to_string(),
            });
        }

        tracing::info!(channel = %name, "method call handler registered");
        self.handlers.insert(name.clone(), handler);

        Ok(MethodChannel::new(name, self.tx.clone()))
    }

    /// 注销通道处理器（对应原始宿主中将处理器置空）
    ///
    /// 返回是否确有处理器被移除；其后的调用以 [`HostError::ChannelNotFound`] 回复。
    pub fn remove_method_call_handler(&self, name: &ChannelName) -> bool {
        let removed = self.handlers.remove(name).is_some();
        if removed {
            tracing::info!(channel = %name, "method call handler removed");
        }
        removed
    }

    /// 获取已注册通道的调用方句柄
    pub fn channel(&self, name: &ChannelName) -> HostResult<MethodChannel> {
        if !self.handlers.contains_key(name) {
            return Err(HostError::ChannelNotFound {
                channel: name.to_string(),
            });
        }

        Ok(MethodChannel::new(name.clone(), self.tx.clone()))
    }

    /// 启动前的一次性插件注册（显式初始化清单）
    ///
    /// 按清单顺序逐个调用 [`Plugin::register`]；
    /// 成功后的重复调用是无害的空操作（记录告警后直接返回）；
    /// 某插件注册失败时清除启动标记，允许修正清单后重试。
    pub fn register_plugins(&self, plugins: &[Arc<dyn Plugin>]) -> HostResult<()> {
        if self.bootstrapped.swap(true, Ordering::SeqCst) {
            tracing::warn!("plugins already registered, ignoring repeated bootstrap");
            return Ok(());
        }

        for plugin in plugins {
            tracing::info!(plugin = plugin.name(), "registering plugin");
            if let Err(err) = plugin.register(self) {
                tracing::error!(plugin = plugin.name(), error = %err, "plugin registration failed");
                self.bootstrapped.store(false, Ordering::SeqCst);
                return Err(err);
            }
        }

        Ok(())
    }

    /// 启动宿主，返回可用于关闭/等待的句柄
    ///
    /// 唯一的分发任务顺序消费队列：调用彼此之间不会并发执行。
    pub fn start(&self) -> HostResult<HostHandle> {
        let rx = self
            .rx
            .lock()
            .map_err(|_| HostError::AlreadyStarted)?
            .take()
            .ok_or(HostError::AlreadyStarted)?;

        let token = CancellationToken::new();
        let task = tokio::spawn(Self::dispatch_loop(
            self.handlers.clone(),
            rx,
            token.clone(),
        ));

        Ok(HostHandle {
            token,
            task: Some(task),
        })
    }

    async fn dispatch_loop(
        handlers: HandlerMap,
        mut rx: mpsc::Receiver<Envelope>,
        token: CancellationToken,
    ) {
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    break;
                }
                maybe_envelope = rx.recv() => {
                    match maybe_envelope {
                        Some(envelope) => Self::dispatch_one(&handlers, envelope).await,
                        None => break,
                    }
                }
            }
        }
    }

    /// 处理一次入队调用，保证恰好发送一次回复
    async fn dispatch_one(handlers: &HandlerMap, envelope: Envelope) {
        let Envelope {
            channel,
            call,
            reply,
        } = envelope;

        if call.method().is_empty() {
            let _ = reply.send(Err(ChannelError::EmptyMethodName.into()));
            return;
        }

        let Some(handler) = handlers.get(&channel).map(|h| h.clone()) else {
            let _ = reply.send(Err(HostError::ChannelNotFound {
                channel: channel.to_string(),
            }));
            return;
        };

        let ctx = CallContext::builder().channel(channel.clone()).build();
        let method = call.method().to_string();
        tracing::debug!(channel = %channel, method = %method, call_id = %ctx.call_id(), "dispatching method call");

        // 故障隔离：处理器的 Err 与 panic 都在此转换为 Failure，不向上传播
        let outcome = match AssertUnwindSafe(handler.on_method_call(&ctx, call))
            .catch_unwind()
            .await
        {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => {
                tracing::warn!(channel = %channel, method = %method, error = %err, "handler returned error");
                MethodOutcome::failure("HandlerError", format!("{method}: {err:#}"))
            }
            Err(panic) => {
                let reason = panic_message(panic);
                tracing::error!(channel = %channel, method = %method, reason = %reason, "handler panicked");
                MethodOutcome::failure("HandlerPanic", format!("{method}: {reason}"))
            }
        };

        if reply.send(Ok(outcome)).is_err() {
            tracing::debug!(channel = %channel, method = %method, "caller dropped before reply");
        }
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// 宿主运行句柄：用于优雅关闭与等待任务结束
pub struct HostHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl HostHandle {
    pub fn shutdown(&self) {
        self.token.cancel();
    }

    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for HostHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
