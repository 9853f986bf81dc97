use std::{future::Future, sync::Arc};

use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use tokio;

use common::config::ShowcaseConfig;

// these are the services that make up the relay server
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ServiceType {
    Http,
    Mail,
}

// showcase service messages
//
// without higher-kinded types, we use the normal enum-of-enums
// to enable general safe message passing between services
pub type SvcSender = tokio::sync::mpsc::Sender<SvcMsg>;
pub type SvcReceiver = tokio::sync::mpsc::Receiver<SvcMsg>;

// message responses are carried back via oneshot channels.  this
// type eliminates quite a bit of boilerplate in the responder logic.
pub type SvcResp<T> = tokio::sync::oneshot::Sender<Result<T>>;

#[derive(Debug)]
pub enum SvcMsg {
    Mail(crate::mail::msg::MailMsg),
}

// service registry
//
// each service is instantiated once and there is one message namespace, which
// keeps the generic service traits simple
#[derive(Clone, Debug)]
pub struct SvcRegistry(Arc<DashMap<ServiceType, SvcSender>>);

impl SvcRegistry {
    pub fn new() -> Self {
        SvcRegistry(Arc::new(DashMap::new()))
    }

    pub fn insert(&self, k: ServiceType, v: SvcSender) -> Result<()> {
        match self.0.insert(k.clone(), v) {
            None => Ok(()),
            Some(w) => {
                self.0.insert(k, w);
                Err(anyhow::Error::msg(
                    "internal error: a sender was added twice to the registry",
                ))
            }
        }
    }

    pub fn get(&self, k: &ServiceType) -> Result<SvcSender> {
        Ok(self
            .0
            .get(k)
            .ok_or_else(|| {
                anyhow::Error::msg(format!(
                    "internal error: a service was started without a necessary dependency ({:?})",
                    k
                ))
            })?
            .clone())
    }
}

// core service trait
//
// the outer service holds the registry, senders and task handles, while the
// inner type holds the state that answers messages
#[async_trait]
pub trait ShowcaseService: Send + Sync + 'static {
    type Inner: SvcInner;

    fn create(config: Arc<ShowcaseConfig>, registry: &SvcRegistry) -> Self;

    async fn start(&self, registry: &SvcRegistry) -> Result<()>;
}

// service message responder
//
// services answer rpc-style messages in message_handler, and may also respond
// to external requests on other channels (http)
#[async_trait]
pub trait SvcInner: Sized + Send + Sync + 'static {
    fn new(config: Arc<ShowcaseConfig>, registry: SvcRegistry) -> Result<Self>;

    fn registry(&self) -> SvcRegistry;

    async fn message_handler(&self, msg: SvcMsg) -> Result<()>;

    // the rpc functions return their result normally and this helper sends it
    // back, so that they can also be called from each other
    async fn respond<T, Fut>(&self, resp: SvcResp<T>, fut: Fut) -> Result<()>
    where
        T: Send + Sync,
        Fut: Future<Output = Result<T>> + Send,
    {
        resp.send(fut.await).map_err(|_| {
            anyhow::Error::msg(format!(
                "failed to respond to a {} message",
                std::any::type_name::<T>()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn registry_rejects_duplicates() {
        let registry = SvcRegistry::new();
        let (tx, _rx) = tokio::sync::mpsc::channel::<SvcMsg>(1);

        registry.insert(ServiceType::Mail, tx.clone()).unwrap();
        assert!(registry.insert(ServiceType::Mail, tx).is_err());
        assert!(registry.get(&ServiceType::Mail).is_ok());
        assert!(registry.get(&ServiceType::Http).is_err());
    }
}
