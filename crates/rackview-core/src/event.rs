// Copyright 2026 the rackview authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A generic, thread-safe event channel.
//!
//! The host shell publishes pointer and resize events into a bus; the view
//! publishes the selected record back out through another. Keeping the bus
//! generic keeps this crate decoupled from the event types above it.

/// Manages a generic event channel over an unbounded flume queue.
#[derive(Debug)]
pub struct EventBus<T: Send + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Send + 'static> EventBus<T> {
    /// Creates a new bus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Attempts to send an event, logging if every receiver has disconnected.
    pub fn publish(&self, event: T) {
        if self.sender.send(event).is_err() {
            log::debug!("event dropped: all receivers disconnected");
        }
    }

    /// Returns a clone of the sender end of the channel.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a receiver for consuming events from this bus.
    ///
    /// Dropping the returned receiver is how a listener deregisters itself.
    pub fn subscribe(&self) -> flume::Receiver<T> {
        self.receiver.clone()
    }
}

impl<T: Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Clicked { x: f32, y: f32 },
        Resized { width: u32, height: u32 },
    }

    #[test]
    fn publish_then_receive() {
        let bus = EventBus::<TestEvent>::new();
        let rx = bus.subscribe();

        bus.publish(TestEvent::Clicked { x: 1.0, y: 2.0 });
        bus.publish(TestEvent::Resized {
            width: 800,
            height: 600,
        });

        assert_eq!(rx.try_recv().unwrap(), TestEvent::Clicked { x: 1.0, y: 2.0 });
        assert_eq!(
            rx.try_recv().unwrap(),
            TestEvent::Resized {
                width: 800,
                height: 600
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_receiver_does_not_panic_publisher() {
        let bus = EventBus::<TestEvent>::new();
        let rx = bus.subscribe();
        drop(rx);
        // The bus keeps its own receiver alive, so this send still succeeds;
        // the point is that no publisher ever panics.
        bus.publish(TestEvent::Clicked { x: 0.0, y: 0.0 });
    }

    #[test]
    fn sender_clone_feeds_same_queue() {
        let bus = EventBus::<TestEvent>::new();
        let tx = bus.sender();
        let rx = bus.subscribe();
        tx.send(TestEvent::Clicked { x: 3.0, y: 4.0 }).unwrap();
        assert_eq!(rx.try_recv().unwrap(), TestEvent::Clicked { x: 3.0, y: 4.0 });
    }
}
