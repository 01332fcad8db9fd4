//! lazy-stream is a library of lazy, singly-linked streams in the style of [SICP 3.5](https://mitp-content-server.mit.edu/books/content/sectbyfn/books_pres_0/6515/sicp.zip/full-text/book/book-Z-H-24.html) using rust closures as the delay mechanism.
//!
//! ## Design
//!
//! A stream is a chain of reference-counted [`Node`]s.
//! Every node carries a [`Payload`] which is either an immediate value or a deferred computation (a [`Thunk`]) producing the rest of the stream.
//! A lazily built stream therefore alternates between value nodes and deferred 'wrapper' nodes:
//!
//! <pre>
//! Immediate(7)--Deferred(|| ...)
//!                  |
//!                  | force
//!                  v
//!               Immediate(1)--Deferred(|| ...)
//!                                |
//!                                | force
//!                                v
//!                             Immediate(2)
//! </pre>
//!
//! Nothing right of a `Deferred` node exists before it is forced with [`stream_cdr`] (or [`force`]).
//! Forcing is not memoized: forcing the same wrapper twice runs its thunk twice and may allocate fresh nodes.
//! The nodes are value-equal as long as the thunk is pure.
//!
//! ## Usage
//!
//! Streams are built with the `cons`-family ([`cons`], [`cons_eager`], [`cons_delayed`], [`cons_stream`] and the [`Node`]-builder) or with the generators of the [`streams`]-module.
//! They are observed with [`car`]/[`cdr`] and [`stream_car`]/[`stream_cdr`] or, more conveniently, with [`Stream::first`], [`Stream::rest`] and [`Stream::iter`].
//! The [`combinators`]-module transforms streams without materializing them and the [`print`]-module renders them.
//!
//! # Examples
//!
//! Summing the primes between 2 and 21:
//!
//! ```
//! use lazy_stream::arith::is_prime;
//! use lazy_stream::combinators::{filter, reduce};
//! use lazy_stream::streams::interval;
//!
//! let primes = filter(&interval(2, 21), |n| is_prime(*n));
//!
//! assert_eq!(reduce(&primes, |n, acc| acc + n, 0), 77);
//! ```
//!
//! Building a stream by hand from nested deferred computations:
//!
//! ```
//! use lazy_stream::print::{render, PrintConfig};
//! use lazy_stream::{cons, cons_stream};
//!
//! let s = cons_stream(7, || cons_stream(1, || cons(2)));
//!
//! assert_eq!(render(&s, &PrintConfig::default()), "7 1 2");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

#[cfg(test)]
macro_rules! assert_first_eq {
    ($stream:expr, $x:expr) => {
        assert_eq!($stream.first(), Some(&$x))
    };
}

#[cfg(test)]
macro_rules! assert_rest_starts_with {
    ($stream:expr, [$($x:expr),*]) => {{
        #[allow(unused_mut)]
        let mut rest = $stream.clone();
        $(
            rest = rest.rest();
            assert_eq!(rest.first(), Some(&$x));
        )*
        let _ = rest;
    }};
}

pub mod arith;
pub mod combinators;
pub mod error;
pub mod print;
pub mod streams;

pub use error::{StreamError, StreamResult};

use alloc::rc::Rc;
use core::fmt;

/// [`Thunk<T>`] types shared deferred computations producing a stream of type `T`.
///
/// A thunk can be invoked any number of times.
/// Cloning it shares the closure rather than copying its environment.
pub struct Thunk<'a, T>(Rc<dyn Fn() -> Stream<'a, T> + 'a>);

impl<'a, T> Thunk<'a, T> {
    /// Wrap `f` into a thunk.
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() -> Stream<'a, T> + 'a,
    {
        Thunk(Rc::new(f))
    }

    /// Run the deferred computation.
    #[inline]
    pub fn force(&self) -> Stream<'a, T> {
        (self.0)()
    }
}

impl<'a, T> Clone for Thunk<'a, T> {
    fn clone(&self) -> Self {
        Thunk(Rc::clone(&self.0))
    }
}

impl<'a, T> fmt::Debug for Thunk<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

/// [`Payload<T>`] defines what a [`Node`] holds: exactly one of an immediate value and a deferred computation.
#[derive(Debug)]
pub enum Payload<'a, T> {
    /// An element of the stream.
    Immediate(T),
    /// The not yet computed rest of the stream.
    Deferred(Thunk<'a, T>),
}

/// [`Node<T>`] is the unit cell of a stream: a [`Payload`] plus an optional link to its successor.
///
/// A `Node` owned by value is not shared with anybody yet.
/// This is the only state in which its successor link can be set (see [`Node::then`]); [`Node::seal`] hands it out as a shared [`Stream`] after which it is immutable.
#[derive(Debug)]
pub struct Node<'a, T> {
    payload: Payload<'a, T>,
    next: Option<Rc<Node<'a, T>>>,
}

impl<'a, T> Node<'a, T> {
    /// Create an unshared node holding `value` and no successor.
    #[inline]
    pub fn new(value: T) -> Self {
        Node {
            payload: Payload::Immediate(value),
            next: None,
        }
    }

    fn deferred(thunk: Thunk<'a, T>) -> Self {
        Node {
            payload: Payload::Deferred(thunk),
            next: None,
        }
    }

    /// Set the successor of `self` to a wrapper node holding `thunk`, replacing any previous successor.
    ///
    /// Taking `self` by value guarantees nobody else observes the change.
    #[must_use]
    pub fn then(mut self, thunk: Thunk<'a, T>) -> Self {
        self.next = Some(Rc::new(Node::deferred(thunk)));
        self
    }

    /// Share `self` as the head of a stream.
    #[inline]
    pub fn seal(self) -> Stream<'a, T> {
        Stream(Some(Rc::new(self)))
    }

    pub fn payload(&self) -> &Payload<'a, T> {
        &self.payload
    }

    /// The immediate value of `self` if it has one.
    pub fn value(&self) -> Option<&T> {
        match &self.payload {
            Payload::Immediate(x) => Some(x),
            Payload::Deferred(_) => None,
        }
    }

    /// The raw successor link of `self`. Nothing is forced.
    pub fn next(&self) -> Option<&Node<'a, T>> {
        self.next.as_deref()
    }
}

impl<'a, T> Drop for Node<'a, T> {
    // unlink materialized successors one by one instead of recursing through them
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(rc) = next {
            match Rc::try_unwrap(rc) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// [`Stream<T>`] is a shared handle to the first [`Node`] of a lazy sequence of `T`s or to nothing (the empty stream).
///
/// Cloning a stream is cheap: only a reference count changes.
pub struct Stream<'a, T>(Option<Rc<Node<'a, T>>>);

impl<'a, T> Stream<'a, T> {
    /// The stream without elements.
    #[inline]
    pub const fn empty() -> Self {
        Stream(None)
    }

    /// Check whether `self` has no elements (`stream-null?`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The first element of `self` if there is one.
    ///
    /// A head node without an immediate value counts as the end of the stream.
    pub fn first(&self) -> Option<&T> {
        car(self).and_then(Node::value)
    }

    /// Force the successor of `self`. The same as [`stream_cdr`].
    pub fn rest(&self) -> Self {
        stream_cdr(self)
    }

    /// Iterate over clones of the elements of `self`, forcing one successor per step.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            cursor: self.clone(),
            started: false,
        }
    }

    /// Check whether `self` and `other` are the very same nodes (or both empty).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<'a, T> Clone for Stream<'a, T> {
    fn clone(&self) -> Self {
        Stream(self.0.clone())
    }
}

impl<'a, T> Default for Stream<'a, T> {
    fn default() -> Self {
        Stream::empty()
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Stream<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("first", &self.first())
            .finish_non_exhaustive()
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Stream<'a, T> {
    /// Collect the items into shared storage which is then served lazily.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Rc<[T]> = iter.into_iter().collect();
        streams::from_shared(items, 0)
    }
}

/// [`Iter<T>`] walks a stream by forcing exactly one successor per call to `next`.
///
/// The successor of an element is only forced when the element after it is requested.
pub struct Iter<'a, T> {
    cursor: Stream<'a, T>,
    started: bool,
}

impl<'a, T: Clone> Iterator for Iter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.started {
            self.cursor = self.cursor.rest();
        }
        self.started = true;
        self.cursor.first().cloned()
    }
}

impl<'a, T: Clone> IntoIterator for Stream<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        Iter {
            cursor: self,
            started: false,
        }
    }
}

impl<'a, 's, T: Clone> IntoIterator for &'s Stream<'a, T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Defer `stream`: the resulting thunk returns (a handle to) `stream` whenever it is forced.
pub fn delay<'a, T: 'a>(stream: Stream<'a, T>) -> Thunk<'a, T> {
    Thunk::new(move || stream.clone())
}

/// Defer a single `value`: the resulting thunk builds a fresh one-element stream whenever it is forced.
pub fn delay_value<'a, T: Clone + 'a>(value: T) -> Thunk<'a, T> {
    Thunk::new(move || cons(value.clone()))
}

/// Run the deferred computation of `node`.
/// - `node` is the node to force.
///
/// The result is empty if `node` is absent or holds an immediate value: only deferred nodes can be forced.
pub fn force<'a, T>(node: Option<&Node<'a, T>>) -> Stream<'a, T> {
    match node {
        Some(Node {
            payload: Payload::Deferred(thunk),
            ..
        }) => {
            log::trace!("forcing deferred successor");
            thunk.force()
        }
        _ => Stream::empty(),
    }
}

/// Construct the one-element stream of `value`.
#[inline]
pub fn cons<'a, T>(value: T) -> Stream<'a, T> {
    Node::new(value).seal()
}

/// Prepend `value` to an already materialized stream.
/// - `value` is the new first element.
/// - `rest` becomes the raw successor link.
///
/// Note that [`stream_cdr`] only steps over deferred successors, so it ends the stream at `rest`.
/// Use [`print::render_list`] to observe such eagerly built lists.
pub fn cons_eager<'a, T>(value: T, rest: Stream<'a, T>) -> Stream<'a, T> {
    Stream(Some(Rc::new(Node {
        payload: Payload::Immediate(value),
        next: rest.0,
    })))
}

/// Prepend `value` to the stream `thunk` computes once forced.
pub fn cons_delayed<'a, T>(value: T, thunk: Thunk<'a, T>) -> Stream<'a, T> {
    Node::new(value).then(thunk).seal()
}

/// The same as [`cons_delayed`] but with wrapping `f` into a [`Thunk`] hidden to make the resulting code less verbose.
///
/// # Examples
///
/// The infinite stream of `true`s:
///
/// ```
/// use lazy_stream::{cons_stream, Stream};
///
/// fn trues<'a>() -> Stream<'a, bool> {
///     cons_stream(true, trues)
/// }
///
/// assert_eq!(trues().rest().rest().first(), Some(&true));
/// ```
#[inline]
pub fn cons_stream<'a, T, F>(value: T, f: F) -> Stream<'a, T>
where
    F: Fn() -> Stream<'a, T> + 'a,
{
    cons_delayed(value, Thunk::new(f))
}

/// Attach `thunk` as the deferred successor of the unshared `node`. The same as [`Node::then`].
pub fn attach<'a, T>(node: Node<'a, T>, thunk: Thunk<'a, T>) -> Node<'a, T> {
    node.then(thunk)
}

/// The head node of `stream`, or nothing for the empty stream.
#[inline]
pub fn car<'s, 'a, T>(stream: &'s Stream<'a, T>) -> Option<&'s Node<'a, T>> {
    stream.0.as_deref()
}

/// The raw successor link of `stream` without forcing it.
#[inline]
pub fn cdr<'s, 'a, T>(stream: &'s Stream<'a, T>) -> Option<&'s Node<'a, T>> {
    car(stream).and_then(Node::next)
}

/// The same as [`car`].
#[inline]
pub fn stream_car<'s, 'a, T>(stream: &'s Stream<'a, T>) -> Option<&'s Node<'a, T>> {
    car(stream)
}

/// Advance `stream` by one step, forcing exactly one deferred computation.
#[inline]
pub fn stream_cdr<'a, T>(stream: &Stream<'a, T>) -> Stream<'a, T> {
    force(cdr(stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec::Vec;

    #[test]
    fn test_cons() {
        let s = cons(7);
        assert_first_eq!(s, 7);
        assert!(cdr(&s).is_none());
        assert!(s.rest().is_empty());
    }

    #[test]
    fn test_cons_eager() {
        let s = cons_eager(0, cons_eager(1, cons(7)));
        assert_eq!(cdr(&s).and_then(Node::value), Some(&1));
        assert_eq!(
            cdr(&s).and_then(Node::next).and_then(Node::value),
            Some(&7)
        );
        assert!(stream_cdr(&s).is_empty());
    }

    #[test]
    fn test_cons_stream() {
        let s = cons_stream(7, || cons_stream(1, || cons(2)));
        assert!(matches!(
            cdr(&s).map(Node::payload),
            Some(Payload::Deferred(_))
        ));
        assert_first_eq!(s, 7);
        assert_rest_starts_with!(s, [1, 2]);
        assert!(s.rest().rest().rest().is_empty());
    }

    #[test]
    fn test_attach() {
        let node = attach(Node::new(1), delay(cons(2)));
        let s = node.then(delay_value(3)).seal();
        assert_first_eq!(s, 1);
        assert_rest_starts_with!(s, [3]);
    }

    #[test]
    fn test_car() {
        let s = cons(5);
        assert_eq!(car(&s).and_then(Node::value), Some(&5));
        assert_eq!(stream_car(&s).and_then(Node::value), Some(&5));
        assert!(car(&Stream::<u8>::empty()).is_none());
    }

    #[test]
    fn test_force() {
        assert!(force::<u8>(None).is_empty());
        assert!(force(car(&cons(1))).is_empty());

        let s = cons_delayed(0, delay(cons(1)));
        assert_first_eq!(force(cdr(&s)), 1);
    }

    #[test]
    fn test_force_is_not_memoized() {
        let s = cons_stream(1, || cons(2));

        let once = stream_cdr(&s);
        let twice = stream_cdr(&s);
        assert_eq!(once.first(), twice.first());
        assert!(!once.ptr_eq(&twice));
    }

    #[test]
    fn test_delay() {
        let shared = cons(9);
        let thunk = delay(shared.clone());
        assert!(thunk.force().ptr_eq(&shared));
        assert!(thunk.clone().force().ptr_eq(&shared));
    }

    #[test]
    fn test_delay_value() {
        let thunk = delay_value(4);
        assert_first_eq!(thunk.force(), 4);
        assert!(!thunk.force().ptr_eq(&thunk.force()));
    }

    #[test]
    fn test_iter() {
        let s = cons_stream(1, || cons_stream(2, || cons(3)));
        assert_eq!(s.iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!((&s).into_iter().count(), 3);
        assert_eq!(s.into_iter().last(), Some(3));
    }

    #[test]
    fn test_from_iter() {
        let s: Stream<'_, char> = "abc".chars().collect();
        assert_first_eq!(s, 'a');
        assert_rest_starts_with!(s, ['b', 'c']);
        assert!(Stream::<char>::from_iter(None).is_empty());
    }

    #[test]
    fn test_drop_long_eager_list() {
        const N: u32 = 1_000_000;

        let mut list = Stream::empty();
        for n in 0..N {
            list = cons_eager(n, list);
        }
        assert_eq!(cdr(&list).and_then(Node::value), Some(&(N - 2)));

        drop(list);
    }

    #[test]
    fn test_drop_keeps_shared_tail() {
        let tail = cons_eager(1, cons(2));
        let list = cons_eager(0, tail.clone());

        drop(list);
        assert_first_eq!(tail, 1);
        assert_eq!(cdr(&tail).and_then(Node::value), Some(&2));
    }
}
