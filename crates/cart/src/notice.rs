//! Outbound user-facing confirmations.
//!
//! Cart mutations enqueue a [`Notice`] instead of rendering anything
//! themselves; the presentation layer drains the queue whenever it likes.
//! This keeps the state transitions side-effect-free and makes the
//! confirmation behavior assertable in tests. Notices are fire-and-forget:
//! nothing awaits them, and an undrained queue is simply dropped with the
//! cart.

use std::collections::VecDeque;
use std::fmt;

/// A user-facing confirmation produced by a cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A product was added as a new line item.
    ItemAdded {
        /// Product title at add time.
        title: String,
    },
    /// An add on an existing line item bumped its quantity.
    QuantityUpdated {
        /// Title of the affected line item.
        title: String,
    },
    /// A line item was removed.
    ItemRemoved {
        /// Title of the removed line item.
        title: String,
    },
    /// The whole cart was cleared.
    CartCleared,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemAdded { title } => write!(f, "Added {title} to cart"),
            Self::QuantityUpdated { title } => write!(f, "Updated {title} quantity"),
            Self::ItemRemoved { title } => write!(f, "Removed {title} from cart"),
            Self::CartCleared => write!(f, "Cart cleared"),
        }
    }
}

/// FIFO queue of pending notices.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a notice.
    pub fn push(&mut self, notice: Notice) {
        self.pending.push_back(notice);
    }

    /// Take all pending notices, oldest first.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.pending.drain(..).collect()
    }

    /// Whether any notices are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut queue = NoticeQueue::new();
        queue.push(Notice::ItemAdded {
            title: "Mug".to_string(),
        });
        queue.push(Notice::CartCleared);

        assert_eq!(
            queue.drain(),
            vec![
                Notice::ItemAdded {
                    title: "Mug".to_string()
                },
                Notice::CartCleared
            ]
        );
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_display_copy() {
        let added = Notice::ItemAdded {
            title: "Mug".to_string(),
        };
        assert_eq!(added.to_string(), "Added Mug to cart");
        assert_eq!(Notice::CartCleared.to_string(), "Cart cleared");
    }
}
