use crate::pokebase::{Binding, Panel};

use iced::futures::channel::mpsc;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Loading(bool),
    Rendered(Panel),
}

/// Forwards everything the navigator draws to the application as [`Event`]s.
#[derive(Debug, Clone)]
pub struct Channel {
    sender: mpsc::UnboundedSender<Event>,
}

impl Channel {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Event>) {
        let (sender, receiver) = mpsc::unbounded();

        (Self { sender }, receiver)
    }

    fn send(&self, event: Event) {
        if let Err(error) = self.sender.unbounded_send(event) {
            log::warn!("Event dropped: {error}");
        }
    }
}

impl Binding for Channel {
    fn render(&self, panel: Panel) {
        self.send(Event::Rendered(panel));
    }

    fn set_loading(&self, is_loading: bool) {
        self.send(Event::Loading(is_loading));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use futures_util::StreamExt;

    #[tokio::test]
    async fn forwards_events_in_order() {
        let (channel, receiver) = Channel::new();

        channel.set_loading(true);
        channel.render(Panel::error("Failed to load Pokémon"));
        channel.set_loading(false);
        drop(channel);

        let events: Vec<Event> = receiver.collect().await;

        assert_eq!(
            events,
            [
                Event::Loading(true),
                Event::Rendered(Panel::error("Failed to load Pokémon")),
                Event::Loading(false),
            ]
        );
    }

    #[test]
    fn closed_receiver_is_tolerated() {
        let (channel, receiver) = Channel::new();
        drop(receiver);

        channel.set_loading(true);
    }
}
