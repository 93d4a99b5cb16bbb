use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use super::events::AppEvent;

/// Publishes session events to the host.
///
/// The host owns the receiving half and renders whatever arrives. A dropped
/// receiver is logged and otherwise ignored: the session keeps working.
#[derive(Debug, Clone)]
pub struct EventEmitter {
    tx: UnboundedSender<AppEvent>,
}

impl EventEmitter {
    pub fn channel() -> (Self, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn emit(&self, event: AppEvent) {
        let name = event.name();
        if let Err(e) = self.tx.send(event) {
            tracing::warn!("[Emit] Failed to emit {}: {}", name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_emit_delivers_in_order() {
        let (emitter, mut rx) = EventEmitter::channel();
        emitter.emit(AppEvent::TranslationPending);
        emitter.emit(AppEvent::OutputUpdated("Hola".into()));

        assert_eq!(rx.recv().await, Some(AppEvent::TranslationPending));
        assert_eq!(rx.recv().await, Some(AppEvent::OutputUpdated("Hola".into())));
    }

    #[test]
    fn test_emit_without_receiver_does_not_panic() {
        let (emitter, rx) = EventEmitter::channel();
        drop(rx);
        emitter.emit(AppEvent::OutputCleared);
    }

    #[test]
    fn test_event_serializes_with_route_name() {
        let event = AppEvent::OutputUpdated("Hola".into());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], event.name());
        assert_eq!(json["payload"], "Hola");
    }
}
