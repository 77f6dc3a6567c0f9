//! MessageProvider trait and its dynamic-dispatch wrapper.
//!
//! One provider per outbound transport (Telegram bot API, WhatsApp,
//! SMS gateway, ...). The blanket-impl pattern mirrors the repository
//! story: a RPITIT trait for concrete use, an object-safe `*Dyn` twin
//! with boxed futures, and a `BoxMessageProvider` wrapper so providers
//! can live together in a transport-keyed registry.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use omnichat_types::error::ProviderError;
use omnichat_types::message::Message;
use omnichat_types::sender::Transport;

/// Callback invoked for every inbound message a provider receives.
pub type InboundHandler = Arc<dyn Fn(Message) -> Result<(), ProviderError> + Send + Sync>;

/// Outbound delivery contract for one channel.
///
/// `send` performs the actual wire call and so owns timeouts and retries;
/// the conversation core never blocks. `on_received` registers the handler
/// the channel adapter invokes for inbound traffic.
pub trait MessageProvider: Send + Sync {
    /// The transport this provider serves.
    fn transport(&self) -> Transport;

    /// Deliver a message over the channel.
    fn send(
        &self,
        message: &Message,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Register the inbound-message handler.
    fn on_received(&self, handler: InboundHandler) -> Result<(), ProviderError>;
}

/// Object-safe version of [`MessageProvider`] with boxed futures.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation
/// covers every `MessageProvider`.
pub trait MessageProviderDyn: Send + Sync {
    fn transport(&self) -> Transport;

    fn send_boxed<'a>(
        &'a self,
        message: &'a Message,
    ) -> Pin<Box<dyn Future<Output = Result<(), ProviderError>> + Send + 'a>>;

    fn on_received(&self, handler: InboundHandler) -> Result<(), ProviderError>;
}

impl<T: MessageProvider> MessageProviderDyn for T {
    fn transport(&self) -> Transport {
        MessageProvider::transport(self)
    }

    fn send_boxed<'a>(
        &'a self,
        message: &'a Message,
    ) -> Pin<Box<dyn Future<Output = Result<(), ProviderError>> + Send + 'a>> {
        Box::pin(self.send(message))
    }

    fn on_received(&self, handler: InboundHandler) -> Result<(), ProviderError> {
        MessageProvider::on_received(self, handler)
    }
}

/// Type-erased provider for runtime transport selection.
pub struct BoxMessageProvider {
    inner: Box<dyn MessageProviderDyn + Send + Sync>,
}

impl BoxMessageProvider {
    pub fn new<T: MessageProvider + 'static>(provider: T) -> Self {
        Self {
            inner: Box::new(provider),
        }
    }

    pub fn transport(&self) -> Transport {
        self.inner.transport()
    }

    pub async fn send(&self, message: &Message) -> Result<(), ProviderError> {
        self.inner.send_boxed(message).await
    }

    pub fn on_received(&self, handler: InboundHandler) -> Result<(), ProviderError> {
        self.inner.on_received(handler)
    }
}

/// Registry of channel providers, keyed by transport.
pub struct ProviderRegistry {
    providers: HashMap<Transport, BoxMessageProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under its own transport. A provider already
    /// registered for that transport is replaced.
    pub fn register(&mut self, provider: BoxMessageProvider) {
        self.providers.insert(provider.transport(), provider);
    }

    pub fn get(&self, transport: Transport) -> Option<&BoxMessageProvider> {
        self.providers.get(&transport)
    }

    /// Transports with a registered provider.
    pub fn transports(&self) -> Vec<Transport> {
        self.providers.keys().copied().collect()
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
