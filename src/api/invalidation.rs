use serde::{Deserialize, Serialize};

use crate::render::Renderer;

use super::ParallelEngine;

/// Ordered repaint classes; merging keeps the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// Hover focus or a dragged label moved; geometry caches are untouched.
    Hover,
    /// The brush filter changed; record inclusion must be re-evaluated.
    Filter,
    /// Data, order or style changed; everything derived was rebuilt.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Domain-oriented reason attached to a repaint request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Data,
    Order,
    Brush,
    Hover,
    LabelDrag,
    Style,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Data => 1 << 0,
            Self::Order => 1 << 1,
            Self::Brush => 1 << 2,
            Self::Hover => 1 << 3,
            Self::LabelDrag => 1 << 4,
            Self::Style => 1 << 5,
        }
    }
}

/// Bitmask of invalidation topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Data.bit()
        | InvalidationTopic::Order.bit()
        | InvalidationTopic::Brush.bit()
        | InvalidationTopic::Hover.bit()
        | InvalidationTopic::LabelDrag.bit()
        | InvalidationTopic::Style.bit();

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

/// Coalesced repaint request consumed by the frame scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationMask {
    level: InvalidationLevel,
    #[serde(default)]
    topics: InvalidationTopics,
}

impl InvalidationMask {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            level: InvalidationLevel::None,
            topics: InvalidationTopics::none(),
        }
    }

    #[must_use]
    pub const fn hover() -> Self {
        Self {
            level: InvalidationLevel::Hover,
            topics: InvalidationTopics::from_topic(InvalidationTopic::Hover),
        }
    }

    #[must_use]
    pub const fn label_drag() -> Self {
        Self {
            level: InvalidationLevel::Hover,
            topics: InvalidationTopics::from_topic(InvalidationTopic::LabelDrag),
        }
    }

    #[must_use]
    pub const fn brush() -> Self {
        Self {
            level: InvalidationLevel::Filter,
            topics: InvalidationTopics::from_topic(InvalidationTopic::Brush),
        }
    }

    #[must_use]
    pub const fn full() -> Self {
        Self {
            level: InvalidationLevel::Full,
            topics: InvalidationTopics::all(),
        }
    }

    #[must_use]
    pub const fn full_with_topic(topic: InvalidationTopic) -> Self {
        Self {
            level: InvalidationLevel::Full,
            topics: InvalidationTopics::from_topic(topic),
        }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        self.level
    }

    #[must_use]
    pub const fn topics(self) -> InvalidationTopics {
        self.topics
    }

    #[must_use]
    pub const fn has_topic(self, topic: InvalidationTopic) -> bool {
        self.topics.contains_topic(topic)
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self.level, InvalidationLevel::None)
    }

    pub fn merge(&mut self, other: Self) {
        self.level = self.level.max(other.level);
        self.topics = self.topics.union(other.topics);
    }
}

impl<R: Renderer> ParallelEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationMask {
        self.core.runtime.scheduler.pending()
    }

    #[must_use]
    pub fn pending_invalidation_level(&self) -> InvalidationLevel {
        self.pending_invalidation().level()
    }

    #[must_use]
    pub fn has_pending_invalidation_topic(&self, topic: InvalidationTopic) -> bool {
        self.pending_invalidation().has_topic(topic)
    }

    #[must_use]
    pub fn has_pending_invalidation(&self) -> bool {
        !self.pending_invalidation().is_none()
    }

    pub fn clear_pending_invalidation(&mut self) {
        self.core.runtime.scheduler.clear();
    }

    /// Marks the whole view dirty and schedules one frame.
    pub fn invalidate_full(&mut self) {
        self.schedule_render(InvalidationMask::full());
    }
}
