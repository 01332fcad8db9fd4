//! This module defines the generic operations over streams: transforming, filtering, folding and indexing.
//!
//! All of them walk the stream in a loop, so the stack does not grow with the number of elements consumed.
//! The stream-producing combinators ([`map`] and [`filter`]) are lazy: they force no more of their input than their output is forced.

use super::error::{StreamError, StreamResult};
use super::{cons_stream, Stream};

use alloc::rc::Rc;

/// Construct the stream which applies a given closure to each element of the input stream.
/// - `stream` is the input stream.
/// - `f` is the closure to be applied.
///
/// The function is in analogy to the map-function on lists which is well-known in functional programming.
/// `f` runs on an element only once the corresponding output element is constructed.
///
/// # Examples
///
/// Increment the elements of a stream:
///
/// ```
/// use lazy_stream::combinators::map;
/// use lazy_stream::{cons, cons_stream};
///
/// let s = cons_stream(7, || cons_stream(1, || cons(2)));
///
/// assert_eq!(map(&s, |n| n + 1).iter().collect::<Vec<_>>(), [8, 2, 3]);
/// ```
pub fn map<'a, T, U, F>(stream: &Stream<'a, T>, f: F) -> Stream<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(&T) -> U + 'a,
{
    map_shared(stream.clone(), Rc::new(f))
}

fn map_shared<'a, T, U, F>(stream: Stream<'a, T>, f: Rc<F>) -> Stream<'a, U>
where
    T: 'a,
    U: 'a,
    F: Fn(&T) -> U + 'a,
{
    let head = match stream.first() {
        Some(x) => f(x),
        None => return Stream::empty(),
    };

    cons_stream(head, move || map_shared(stream.rest(), Rc::clone(&f)))
}

/// Construct the stream of those elements of the input stream which satisfy a given predicate.
/// - `stream` is the input stream.
/// - `p` is the predicate serving as filter.
///
/// The function is in analogy to the filter-function on lists which is well-known in functional programming.
/// Runs of rejected elements are skipped right away up to the next accepted element; everything after that element stays deferred.
///
/// # Examples
///
/// Keep the even numbers of an interval:
///
/// ```
/// use lazy_stream::combinators::filter;
/// use lazy_stream::streams::interval;
///
/// let evens = filter(&interval(1, 10), |n| n % 2 == 0);
///
/// assert_eq!(evens.iter().collect::<Vec<_>>(), [2, 4, 6, 8, 10]);
/// ```
pub fn filter<'a, T, P>(stream: &Stream<'a, T>, p: P) -> Stream<'a, T>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool + 'a,
{
    filter_shared(stream.clone(), Rc::new(p))
}

fn filter_shared<'a, T, P>(mut stream: Stream<'a, T>, p: Rc<P>) -> Stream<'a, T>
where
    T: Clone + 'a,
    P: Fn(&T) -> bool + 'a,
{
    let head = loop {
        match stream.first() {
            Some(x) if p(x) => break x.clone(),
            Some(_) => {}
            None => return Stream::empty(),
        }
        stream = stream.rest();
    };

    cons_stream(head, move || filter_shared(stream.rest(), Rc::clone(&p)))
}

/// Fold the elements of a stream into one value from left to right.
/// - `stream` is the stream to fold. It has to be finite.
/// - `f` combines the current element with the accumulator into the next accumulator.
/// - `init` is the initial accumulator which is also the result for the empty stream.
///
/// # Examples
///
/// ```
/// use lazy_stream::combinators::reduce;
/// use lazy_stream::streams::interval;
///
/// assert_eq!(reduce(&interval(1, 4), |n, acc| acc * n, 1), 24);
/// ```
pub fn reduce<'a, T, A, F>(stream: &Stream<'a, T>, mut f: F, init: A) -> A
where
    F: FnMut(&T, A) -> A,
{
    let mut acc = init;
    let mut cursor = stream.clone();

    while let Some(x) = cursor.first() {
        acc = f(x, acc);
        cursor = cursor.rest();
    }

    acc
}

/// Get the element at a position of a stream.
/// - `stream` is the stream to look into.
/// - `index` is the zero-based position.
///
/// Exactly `index` successors are forced.
///
/// # Errors
///
/// [`StreamError::IndexOutOfRange`] is returned if the stream has at most `index` elements.
///
/// # Examples
///
/// ```
/// use lazy_stream::combinators::stream_ref;
/// use lazy_stream::streams::interval;
/// use lazy_stream::StreamError;
///
/// assert_eq!(stream_ref(&interval(5, 9), 2), Ok(7));
/// assert_eq!(
///     stream_ref(&interval(5, 9), 5),
///     Err(StreamError::IndexOutOfRange { index: 5, len: 5 })
/// );
/// ```
pub fn stream_ref<'a, T: Clone>(stream: &Stream<'a, T>, index: usize) -> StreamResult<T> {
    let mut cursor = stream.clone();

    for position in 0..index {
        if cursor.is_empty() {
            log::debug!("stream ended after {position} elements before reaching index {index}");
            return Err(StreamError::IndexOutOfRange {
                index,
                len: position,
            });
        }
        cursor = cursor.rest();
    }

    cursor.first().cloned().ok_or_else(|| {
        log::debug!("stream ended after {index} elements");
        StreamError::IndexOutOfRange { index, len: index }
    })
}
