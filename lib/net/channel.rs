use crate::chess::Move;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{instrument, warn};

/// Trait for types that deliver [`Move`]s to the game server.
///
/// Delivery is fire-and-forget, the caller never waits for an acknowledgment.
#[cfg_attr(test, mockall::automock)]
pub trait Channel {
    /// Submits a [`Move`] for broadcast.
    fn submit(&mut self, m: Move);
}

impl Channel for UnboundedSender<Move> {
    #[instrument(level = "trace", skip(self))]
    fn submit(&mut self, m: Move) {
        if self.send(m).is_err() {
            warn!(%m, "dropped move, the channel is closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;
    use tokio::sync::mpsc::unbounded_channel;

    #[proptest]
    fn submitted_moves_are_delivered_in_order(ms: Vec<Move>) {
        let (mut tx, mut rx) = unbounded_channel();

        for &m in &ms {
            tx.submit(m);
        }

        for m in ms {
            assert_eq!(rx.try_recv().ok(), Some(m));
        }

        assert!(rx.try_recv().is_err());
    }

    #[proptest]
    fn submitting_to_closed_channel_is_not_an_error(m: Move) {
        let (mut tx, rx) = unbounded_channel();
        drop(rx);
        tx.submit(m);
    }
}
