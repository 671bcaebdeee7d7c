use crate::ring_buffer::RingBuffer;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

/// Human-readable one-line rendering of a ring buffer.
///
/// Buffers smaller than `threshold` list every element. Larger ones list the
/// first `head` elements, an ellipsis and the newest element:
///
/// ```text
/// RingBuffer: [ 1, 2, 3,  ] length: 3
/// RingBuffer: [ 0, 0, 0, 0,  .... 9 ] length: 10
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Summary {
    /// Capacity at which the ellipsis form kicks in.
    pub threshold: usize,
    /// Leading elements shown in the ellipsis form.
    pub head: usize,
}

impl Default for Summary {
    fn default() -> Self {
        Self { threshold: 7, head: 4 }
    }
}

impl Summary {
    pub fn with_threshold(threshold: usize) -> Self {
        Self { threshold, ..Self::default() }
    }

    pub fn render<T: Display>(&self, buf: &RingBuffer<T>) -> String {
        let cap = buf.capacity();
        let mut out = String::from("RingBuffer: [ ");
        // A head that covers the whole buffer leaves nothing to elide.
        if cap < self.threshold || self.head >= cap {
            for v in buf {
                let _ = write!(out, "{}, ", v);
            }
        } else {
            for v in buf.iter().take(self.head) {
                let _ = write!(out, "{}, ", v);
            }
            let _ = write!(out, " .... {}", buf.last());
        }
        let _ = write!(out, " ] length: {}", cap);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buf_of(cap: usize, vals: impl IntoIterator<Item = i32>) -> RingBuffer<i32> {
        let mut buf = RingBuffer::new(cap).unwrap();
        buf.extend(vals);
        buf
    }

    #[test]
    fn small_buffers_list_everything() {
        let buf = buf_of(3, [1, 2, 3]);
        assert_eq!(Summary::default().render(&buf), "RingBuffer: [ 1, 2, 3,  ] length: 3");
    }

    #[test]
    fn threshold_boundary() {
        let six = buf_of(6, 1..=6);
        assert_eq!(
            Summary::default().render(&six),
            "RingBuffer: [ 1, 2, 3, 4, 5, 6,  ] length: 6"
        );

        let seven = buf_of(7, 1..=7);
        assert_eq!(
            Summary::default().render(&seven),
            "RingBuffer: [ 1, 2, 3, 4,  .... 7 ] length: 7"
        );
    }

    #[test]
    fn large_buffers_show_head_and_newest() {
        let buf = buf_of(10, [9]);
        assert_eq!(
            Summary::default().render(&buf),
            "RingBuffer: [ 0, 0, 0, 0,  .... 9 ] length: 10"
        );
    }

    #[test]
    fn threshold_is_configurable() {
        let buf = buf_of(4, [1, 2, 3, 4, 5]);
        let s = Summary { threshold: 3, head: 2 };
        assert_eq!(s.render(&buf), "RingBuffer: [ 2, 3,  .... 5 ] length: 4");

        let wide = Summary::with_threshold(100);
        assert_eq!(wide.render(&buf), "RingBuffer: [ 2, 3, 4, 5,  ] length: 4");
    }

    #[test]
    fn head_covering_the_buffer_lists_everything() {
        let buf = buf_of(2, [1, 2]);
        let s = Summary { threshold: 1, head: 4 };
        assert_eq!(s.render(&buf), "RingBuffer: [ 1, 2,  ] length: 2");

        let s = Summary { threshold: 1, head: 2 };
        assert_eq!(s.render(&buf), "RingBuffer: [ 1, 2,  ] length: 2");

        let s = Summary { threshold: 1, head: 1 };
        assert_eq!(s.render(&buf), "RingBuffer: [ 1,  .... 2 ] length: 2");
    }

    #[test]
    fn display_uses_default_summary() {
        let buf = buf_of(2, [7, 8, 9]);
        assert_eq!(buf.to_string(), "RingBuffer: [ 8, 9,  ] length: 2");
    }
}
