use crate::context::CallContext;
use crate::error::{HostError, HostResult};
use crate::handler::MethodCallHandler;
use bridge_core::{MethodCall, MethodOutcome};
use async_trait::async_trait;
use dashmap::DashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type MethodFuture = Pin<Box<dyn Future<Output = anyhow::Result<MethodOutcome>> + Send>>;

type MethodFn = Arc<dyn Fn(CallContext, MethodCall) -> MethodFuture + Send + Sync>;

/// 按方法名路由的处理器实现
/// - 通过方法名字符串注册不同命令对应的闭包
/// - 未命中的方法名一律返回 NotImplemented，不会静默成功或报错
pub struct MethodRouter {
    routes: DashMap<String, MethodFn>,
}

impl Default for MethodRouter {
    fn default() -> Self {
        Self {
            routes: DashMap::new(),
        }
    }
}

impl MethodRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册某方法名的处理闭包
    pub fn route<F, Fut>(&self, method: impl Into<String>, f: F) -> HostResult<()>
    where
        F: Fn(CallContext, MethodCall) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<MethodOutcome>> + Send + 'static,
    {
        let method = method.into();

        if self.routes.contains_key(&method) {
            return Err(HostError::AlreadyRouted { method });
        }

        let f: MethodFn = Arc::new(move |ctx, call| Box::pin(f(ctx, call)));
        self.routes.insert(method, f);

        Ok(())
    }

    /// 获取已注册的方法名列表（只读视图）
    pub fn routed_methods(&self) -> Vec<String> {
        self.routes.iter().map(|e| e.key().clone()).collect()
    }
}

#[async_trait]
impl MethodCallHandler for MethodRouter {
    async fn on_method_call(
        &self,
        ctx: &CallContext,
        call: MethodCall,
    ) -> anyhow::Result<MethodOutcome> {
        let Some(f) = self.routes.get(call.method()).map(|e| e.clone()) else {
            return Ok(MethodOutcome::not_implemented());
        };

        (f)(ctx.clone(), call).await
    }
}
