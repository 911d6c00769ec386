//! 方法调用处理器（MethodCallHandler）
//!
//! 嵌入方注入的处理协议：接收（上下文，调用），返回三态结果。
//! 处理器在注册通道时注入，而不是在桥内部内联定义；
//! 返回 `Err` 或发生 panic 时由分发循环统一转换为 Failure。
//!
use crate::context::CallContext;
use bridge_core::{MethodCall, MethodOutcome};
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// 方法调用处理器：处理某条通道上的全部方法调用
#[async_trait]
pub trait MethodCallHandler: Send + Sync {
    /// 处理一次方法调用
    ///
    /// - 认识的方法名：返回 `Success` 或 `Failure`；
    /// - 不认识的方法名：必须返回 `NotImplemented`；
    /// - 返回 `Err` 表示处理器自身故障，由宿主转换为 `Failure`。
    async fn on_method_call(
        &self,
        ctx: &CallContext,
        call: MethodCall,
    ) -> anyhow::Result<MethodOutcome>;
}

/// 将异步闭包包装为处理器
///
/// ```rust
/// use bridge_host::handler_fn;
/// use bridge_core::MethodOutcome;
///
/// let handler = handler_fn(|_ctx, call| async move {
///     match call.method() {
///         "ping" => Ok(MethodOutcome::success_null()),
///         _ => Ok(MethodOutcome::not_implemented()),
///     }
/// });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn MethodCallHandler>
where
    F: Fn(CallContext, MethodCall) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<MethodOutcome>> + Send + 'static,
{
    Arc::new(FnHandler { f })
}

struct FnHandler<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> MethodCallHandler for FnHandler<F>
where
    F: Fn(CallContext, MethodCall) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<MethodOutcome>> + Send,
{
    async fn on_method_call(
        &self,
        ctx: &CallContext,
        call: MethodCall,
    ) -> anyhow::Result<MethodOutcome> {
        (self.f)(ctx.clone(), call).await
    }
}
