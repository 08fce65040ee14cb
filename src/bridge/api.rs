use std::sync::Arc;

use crate::bridge::completion::CompletionGuard;
use crate::bridge::error::BridgeResult;
use crate::bridge::types::{CallSignal, CompletionHandler, IncomingCall, PushPayload};
use crate::credentials::{CredentialRegistry, PushCredentials};

/// Call-presentation collaborator: surfaces the system incoming-call UI.
///
/// Presentation failures are the collaborator's concern; the bridge hands the
/// call over fire-and-forget.
pub trait CallPresenter: Send + Sync {
    fn present_incoming_call(&self, call: IncomingCall);
}

/// Terminal state reached by one successfully classified payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A start-call signal was routed to the call presenter.
    Presented,
    /// An end/reject signal; the call UI updates through its own path.
    Suppressed,
}

/// Routes inbound push events to the call-presentation and
/// credential-registry collaborators.
///
/// The bridge holds no per-payload state, so one instance may serve
/// concurrent deliveries for distinct sessions.
#[derive(Clone)]
pub struct PushBridge {
    inner: Arc<PushBridgeInner>,
}

struct PushBridgeInner {
    presenter: Arc<dyn CallPresenter>,
    registry: Arc<dyn CredentialRegistry>,
}

impl PushBridge {
    pub fn new(presenter: Arc<dyn CallPresenter>, registry: Arc<dyn CredentialRegistry>) -> Self {
        Self {
            inner: Arc::new(PushBridgeInner {
                presenter,
                registry,
            }),
        }
    }

    /// Classifies `payload` and routes it to exactly one effect.
    ///
    /// `completion` is the transport's acknowledgment callback. It fires
    /// exactly once before this method returns, on every path: presentation,
    /// suppression, and both classification-error kinds.
    pub fn handle_incoming_push(
        &self,
        payload: &PushPayload,
        completion: CompletionHandler,
    ) -> BridgeResult<Dispatch> {
        let guard = CompletionGuard::new(completion);
        let outcome = self.dispatch(payload);
        guard.complete();
        outcome
    }

    fn dispatch(&self, payload: &PushPayload) -> BridgeResult<Dispatch> {
        let signal = CallSignal::classify(payload).map_err(|err| {
            log::warn!("dropping push payload: {err}");
            err
        })?;

        match signal {
            CallSignal::End | CallSignal::Reject => {
                log::debug!("call-state signal suppressed");
                Ok(Dispatch::Suppressed)
            }
            CallSignal::Start(call) => {
                self.inner
                    .presenter
                    .present_incoming_call(IncomingCall::from_start(&call));
                Ok(Dispatch::Presented)
            }
        }
    }

    /// Forwards refreshed push credentials verbatim to the registry.
    ///
    /// No validation happens here; interpreting the token is the registry's
    /// responsibility, and forwarding failures are its concern.
    pub fn handle_credential_update(&self, credentials: PushCredentials) {
        log::debug!("forwarding refreshed push credentials");
        self.inner.registry.register_credentials(credentials);
    }
}
