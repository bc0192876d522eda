//! Bundled demonstration suite.
//!
//! The `clarify` binary runs this suite. It doubles as the reference for
//! writing a test binary: declare scenarios against a fixture type, collect
//! them into a [`Suite`] and hand it to [`crate::api::run_suite`].

mod ring;


pub use ring::RingBuffer;

use crate::assertion::{
    require, require_equal_byte, require_equal_memory, require_equal_string, require_equal_uint,
};
use crate::error::DeclarationError;
use crate::scenario::Scenario;
use crate::suite::Suite;

const CAPACITY: usize = 4;

/// Builds the ring buffer suite.
///
/// # Errors
///
/// Returns [`DeclarationError`] if a scenario declaration is malformed.
pub fn ring_buffer_suite() -> Result<Suite, DeclarationError> {
    Ok(Suite::new("ring buffer")
        .scenario(empty_buffer()?)
        .scenario(full_buffer()?)
        .scenario(wrapped_buffer()?))
}

fn empty_buffer() -> Result<Scenario<RingBuffer>, DeclarationError> {
    Scenario::given("an empty ring buffer of capacity 4", || {
        RingBuffer::with_capacity(CAPACITY)
    })
    .when(
        "a byte is pushed",
        |ring| require(ring.push(0x2a)),
        |w| {
            w.then("the length is one", |ring| {
                require_equal_uint(1, len_of(ring))
            })
            .then("the buffer is not empty", |ring| require(!ring.is_empty()))
            .then("popping returns that byte", |ring| {
                require_equal_byte(0x2a, ring.pop().unwrap_or_default())
            })
        },
    )
    .when(
        "nothing is pushed",
        |_| Ok(()),
        |w| {
            w.then("popping yields nothing", |ring| {
                require(ring.pop().is_none())
            })
            .then("the buffer is empty", |ring| require(ring.is_empty()))
        },
    )
    .build()
}

fn full_buffer() -> Result<Scenario<RingBuffer>, DeclarationError> {
    Scenario::given("a ring buffer filled with 1, 2, 3, 4", || {
        let mut ring = RingBuffer::with_capacity(CAPACITY);
        for byte in 1..=4 {
            ring.push(byte);
        }
        ring
    })
    .when(
        "another byte is pushed",
        |ring| require(!ring.push(5)),
        |w| {
            w.then("the contents are unchanged", |ring| {
                require_equal_memory(&[1, 2, 3, 4], &ring.contents(), CAPACITY)
            })
            .then("the buffer is still full", |ring| require(ring.is_full()))
        },
    )
    .when(
        "a byte is popped",
        |ring| require(ring.pop().is_some()),
        |w| {
            w.then("the buffer is no longer full", |ring| {
                require(!ring.is_full())
            })
            .then("the oldest byte is gone", |ring| {
                require_equal_memory(&[2, 3, 4], &ring.contents(), 3)
            })
        },
    )
    .build()
}

fn wrapped_buffer() -> Result<Scenario<RingBuffer>, DeclarationError> {
    Scenario::given("a ring buffer that has wrapped around", || {
        let mut ring = RingBuffer::with_capacity(CAPACITY);
        for byte in 1..=4 {
            ring.push(byte);
        }
        ring.pop();
        ring.pop();
        ring.push(5);
        ring.push(6);
        ring
    })
    .when(
        "it is drained",
        |_| Ok(()),
        |w| {
            w.then("bytes come out oldest first", |ring| {
                let drained: Vec<u8> = std::iter::from_fn(|| ring.pop()).collect();
                require_equal_memory(&[3, 4, 5, 6], &drained, CAPACITY)
            })
        },
    )
    .when(
        "it is described",
        |_| Ok(()),
        |w| {
            w.then("the summary shows length and capacity", |ring| {
                require_equal_string("ring[4/4]", &ring.to_string())
            })
        },
    )
    .build()
}

fn len_of(ring: &RingBuffer) -> u64 {
    u64::try_from(ring.len()).unwrap_or(u64::MAX)
}
