//! Fixed-capacity ring buffer that overwrites its oldest entry on push.
//!
//! ```
//! use winbuf::RingBuffer;
//!
//! let mut buf: RingBuffer<u32> = RingBuffer::new(3)?;
//! buf.extend([1, 2, 3, 4]);
//! assert_eq!(buf.to_vec(), vec![2, 3, 4]);
//! assert!(buf.get(3).is_err());
//! # Ok::<(), winbuf::Error>(())
//! ```

pub mod error;
pub mod ring_buffer;
pub mod summary;

pub use error::{Error, Result};
pub use ring_buffer::{Iter, RingBuffer};
pub use summary::Summary;
