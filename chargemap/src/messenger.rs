//! Outgoing notifications of a map provider.

use std::sync::Arc;

use crate::poi::PoiId;

/// Notification published by a map provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapEvent {
    /// The map became ready. Published once per map instance.
    Ready,
    /// The camera finished moving.
    DragEnd,
    /// The camera finished moving, possibly with a changed zoom level.
    Zoom,
    /// A POI marker was clicked.
    PoiSelected {
        /// Id of the clicked POI.
        poi_id: PoiId,
    },
}

impl MapEvent {
    /// Topic name of the event.
    pub fn topic(&self) -> &'static str {
        match self {
            MapEvent::Ready => "mapping:ready",
            MapEvent::DragEnd => "mapping:dragend",
            MapEvent::Zoom => "mapping:zoom",
            MapEvent::PoiSelected { .. } => "poi:selected",
        }
    }
}

/// Fire-and-forget publisher of [`MapEvent`]s.
pub trait Messenger: Send + Sync {
    /// Publishes the event to whoever listens.
    fn publish(&self, event: MapEvent);
}

/// Messenger that drops every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyMessenger;

impl Messenger for DummyMessenger {
    fn publish(&self, event: MapEvent) {
        log::trace!("Dropping map event {}", event.topic());
    }
}

impl<M: Messenger + ?Sized> Messenger for Arc<M> {
    fn publish(&self, event: MapEvent) {
        (**self).publish(event)
    }
}

impl Messenger for tokio::sync::mpsc::UnboundedSender<MapEvent> {
    fn publish(&self, event: MapEvent) {
        if self.send(event).is_err() {
            log::trace!("No receiver for map event {}", event.topic());
        }
    }
}

impl Messenger for tokio::sync::broadcast::Sender<MapEvent> {
    fn publish(&self, event: MapEvent) {
        if self.send(event).is_err() {
            log::trace!("No subscribers for map event {}", event.topic());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topics() {
        assert_eq!(MapEvent::Ready.topic(), "mapping:ready");
        assert_eq!(MapEvent::DragEnd.topic(), "mapping:dragend");
        assert_eq!(MapEvent::Zoom.topic(), "mapping:zoom");
        assert_eq!(MapEvent::PoiSelected { poi_id: 7 }.topic(), "poi:selected");
    }

    #[test]
    fn channel_messengers_deliver_events() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        tx.publish(MapEvent::Zoom);
        assert_eq!(rx.try_recv(), Ok(MapEvent::Zoom));

        let (tx, mut rx) = tokio::sync::broadcast::channel(4);
        let shared: Arc<dyn Messenger> = Arc::new(tx);
        shared.publish(MapEvent::PoiSelected { poi_id: 3 });
        assert_eq!(rx.try_recv(), Ok(MapEvent::PoiSelected { poi_id: 3 }));
    }

    #[test]
    fn publishing_without_receivers_does_not_fail() {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        drop(rx);
        tx.publish(MapEvent::Ready);
        DummyMessenger.publish(MapEvent::Ready);
    }
}
