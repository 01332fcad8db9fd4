//! This module provides streams of the messages arriving on a channel.
//! Here the head of such a stream is received as soon as the stream is created while every successor is received only when it is forced.

use crate::{cons_stream, Stream};

use alloc::rc::Rc;
use alloc::vec::Vec;
use crossbeam::channel::Receiver;
use std::cell::RefCell;

/// [`Inbox<T>`] is a receiver together with the messages taken from it so far, shared by all nodes of one stream.
struct Inbox<T> {
    receiver: Receiver<T>,
    received: RefCell<Vec<T>>,
}

impl<T: Clone> Inbox<T> {
    /// The message at `position`, receiving it first if it has not been received yet.
    fn get(&self, position: usize) -> Option<T> {
        let buffered = self.received.borrow().get(position).cloned();
        if buffered.is_some() {
            return buffered;
        }

        match self.receiver.recv() {
            Ok(x) => {
                self.received.borrow_mut().push(x.clone());
                Some(x)
            }
            Err(_) => {
                log::debug!("channel disconnected after {position} messages, ending stream");
                None
            }
        }
    }
}

/// Turn the messages `receiver` gets into a stream.
/// - `receiver` is the receiving end of a channel.
///
/// Creating the stream and forcing a successor block the current thread until a message arrives.
/// A disconnected (and drained) channel ends the stream.
///
/// A channel cannot be read twice. Therefore the received messages are kept in a buffer shared by the nodes of the stream: forcing the same successor again yields an equal element instead of receiving another message.
/// The buffer lives as long as any node of the stream does.
///
/// # Examples
///
/// ```
/// use crossbeam::channel::unbounded as channel;
/// use lazy_stream::streams::receivers::receive;
///
/// let (tx, rx) = channel();
/// for n in [1, 2, 3] {
///     tx.send(n).unwrap();
/// }
/// drop(tx);
///
/// assert_eq!(receive(rx).iter().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn receive<'a, T>(receiver: Receiver<T>) -> Stream<'a, T>
where
    T: Clone + 'a,
{
    let inbox = Rc::new(Inbox {
        receiver,
        received: RefCell::new(Vec::new()),
    });
    serve(inbox, 0)
}

fn serve<'a, T>(inbox: Rc<Inbox<T>>, position: usize) -> Stream<'a, T>
where
    T: Clone + 'a,
{
    match inbox.get(position) {
        Some(x) => cons_stream(x, move || serve(Rc::clone(&inbox), position + 1)),
        None => Stream::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel::unbounded as channel;

    #[test]
    fn test_receive() {
        let (tx, rx) = channel();
        tx.send(false).unwrap();
        tx.send(true).unwrap();

        let s = receive(rx);
        assert_first_eq!(s, false);
        assert_rest_starts_with!(s, [true]);
    }

    #[test]
    fn test_receive_disconnected() {
        let (tx, rx) = channel::<u8>();
        drop(tx);

        assert!(receive(rx).is_empty());
    }

    #[test]
    fn test_receive_remembers() {
        let (tx, rx) = channel();
        for n in 0..3 {
            tx.send(n).unwrap();
        }

        let s = receive(rx);
        let once = s.rest();
        let twice = s.rest();
        assert_eq!(once.first(), twice.first());
        assert_first_eq!(twice, 1);
        assert_rest_starts_with!(twice, [2]);
        assert_rest_starts_with!(once, [2]);
    }

    #[test]
    fn test_drop_long_received_stream() {
        const N: u32 = 1_000_000;

        let (tx, rx) = channel();
        for n in 0..N {
            tx.send(n).unwrap();
        }
        drop(tx);

        let s = receive(rx);
        let second = s.rest();
        assert_eq!(s.iter().count(), N as usize);
        assert_first_eq!(second, 1);

        drop(s);
        drop(second);
    }
}
