//! Guarded channel send and close.

use crate::{guard, raw, Chan, GuardResult};

/// Sends `value` on `ch`, blocking while a bounded channel is full.
/// Returns an error if `ch` is closed.
pub fn send<T>(ch: &Chan<T>, value: T) -> GuardResult<()> {
    guard(move || ch.send(value))
}

/// Closes `ch`.
/// Returns an error if `ch` is `None` or already closed.
pub fn close<T>(ch: Option<&Chan<T>>) -> GuardResult<()> {
    guard(move || raw::close(ch))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dontpanic_core::chan::{CLOSE_OF_CLOSED, SEND_ON_CLOSED};
    use std::thread;

    #[test]
    fn send_on_open_channel() {
        let ch = Chan::unbounded();
        send(&ch, "hello").unwrap();
        assert_eq!(ch.recv(), Some("hello"));
    }

    #[test]
    fn send_on_closed_channel() {
        let ch = Chan::bounded(2);
        ch.close();
        let err = send(&ch, 1).unwrap_err();
        assert_eq!(err.to_string(), SEND_ON_CLOSED);
        // Channel is still usable for receivers.
        assert_eq!(ch.recv(), None);
    }

    #[test]
    fn close_while_sender_waits() {
        let ch = Chan::bounded(1);
        ch.send(0);
        let sender = {
            let ch = ch.clone();
            thread::spawn(move || send(&ch, 1))
        };
        // The queue stays full, so the sender fails whether it is already
        // parked or only starts after the close.
        close(Some(&ch)).unwrap();
        let err = sender.join().unwrap().unwrap_err();
        assert_eq!(err.to_string(), SEND_ON_CLOSED);
        assert_eq!(ch.recv(), Some(0));
    }

    #[test]
    fn zero_capacity_buffers_one_value() {
        // No rendezvous: the first send completes without a receiver.
        let ch = Chan::bounded(0);
        send(&ch, 1).unwrap();
        assert_eq!(ch.capacity(), Some(1));
        assert_eq!(ch.len(), 1);

        close(Some(&ch)).unwrap();
        assert_eq!(send(&ch, 2).unwrap_err().to_string(), SEND_ON_CLOSED);
        assert_eq!(ch.recv(), Some(1));
    }

    #[test]
    fn close_open_channel() {
        let ch: Chan<u8> = Chan::unbounded();
        close(Some(&ch)).unwrap();
        assert!(ch.is_closed());
    }

    #[test]
    fn close_twice() {
        let ch: Chan<u8> = Chan::unbounded();
        close(Some(&ch)).unwrap();
        assert_eq!(close(Some(&ch)).unwrap_err().to_string(), CLOSE_OF_CLOSED);
    }

    #[test]
    fn close_nil() {
        let err = close::<String>(None).unwrap_err();
        assert_eq!(err.to_string(), raw::NIL_CHAN);
    }
}
