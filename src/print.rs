//! This module renders streams as text, the diagnostic way of consuming a stream.
//!
//! Rendering a stream forces it element by element; rendering an infinite stream therefore needs a [`limit`](PrintConfig::limit).

use super::{car, Node, Stream};

use alloc::string::String;
use core::fmt::{self, Display, Write};

/// [`PrintConfig`] configures how streams are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintConfig {
    /// text put between two consecutive elements
    pub separator: String,
    /// the maximal number of elements to render (`None` renders everything)
    pub limit: Option<usize>,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            separator: String::from(" "),
            limit: None,
        }
    }
}

impl PrintConfig {
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn exhausted(&self, count: usize) -> bool {
        self.limit.is_some_and(|limit| count >= limit)
    }
}

/// Visit the elements of `stream` in order until it ends or the limit is reached.
/// Returns the stream of the elements not visited.
fn walk<'a, T, E, V>(
    stream: &Stream<'a, T>,
    config: &PrintConfig,
    mut visit: V,
) -> Result<Stream<'a, T>, E>
where
    V: FnMut(usize, &T) -> Result<(), E>,
{
    let mut cursor = stream.clone();
    let mut count = 0;

    while let Some(x) = cursor.first() {
        if config.exhausted(count) {
            break;
        }
        visit(count, x)?;
        count += 1;
        cursor = cursor.rest();
    }

    Ok(cursor)
}

fn push_element<T: Display>(
    out: &mut String,
    config: &PrintConfig,
    count: usize,
    x: &T,
) -> fmt::Result {
    if count > 0 {
        out.push_str(&config.separator);
    }
    write!(out, "{x}")
}

/// Render the elements of `stream`, forcing it as far as they are rendered.
/// - `stream` is the stream to render.
/// - `config` determines separator and limit.
///
/// # Examples
///
/// ```
/// use lazy_stream::print::{render, PrintConfig};
/// use lazy_stream::streams::integers_from;
///
/// let config = PrintConfig::default().with_separator(", ").with_limit(3);
///
/// assert_eq!(render(&integers_from(1), &config), "1, 2, 3");
/// ```
pub fn render<T: Display>(stream: &Stream<'_, T>, config: &PrintConfig) -> String {
    let mut out = String::new();
    let walked = walk(stream, config, |count, x| push_element(&mut out, config, count, x));
    match walked {
        Ok(_) => out,
        Err(fmt::Error) => unreachable!("writing to a `String` cannot fail"),
    }
}

/// Render the already materialized prefix of `stream` without forcing anything.
///
/// The rendering stops at the first deferred successor; this is how lists built with [`cons_eager`](crate::cons_eager) are observed.
pub fn render_list<T: Display>(stream: &Stream<'_, T>, config: &PrintConfig) -> String {
    let mut out = String::new();
    let mut node = car(stream);
    let mut count = 0;

    while let Some(x) = node.and_then(Node::value) {
        if config.exhausted(count) {
            break;
        }
        if let Err(fmt::Error) = push_element(&mut out, config, count, x) {
            unreachable!("writing to a `String` cannot fail");
        }
        count += 1;
        node = node.and_then(Node::next);
    }

    out
}

/// Write the rendering of `stream` to `writer` and return what has not been written.
/// - `writer` is where the text goes.
/// - `stream` is the stream to write.
/// - `config` determines separator and limit.
///
/// With a limit this allows to print an infinite stream chunk by chunk.
///
/// # Errors
///
/// Any error of `writer` is passed on.
#[cfg(feature = "std")]
pub fn write_stream<'a, W, T>(
    writer: &mut W,
    stream: &Stream<'a, T>,
    config: &PrintConfig,
) -> std::io::Result<Stream<'a, T>>
where
    W: std::io::Write,
    T: Display,
{
    walk(stream, config, |count, x| {
        if count > 0 {
            writer.write_all(config.separator.as_bytes())?;
        }
        write!(writer, "{x}")
    })
}

/// Print all elements of `stream` to stdout separated by spaces.
///
/// # Examples
///
/// ```
/// use lazy_stream::print::stream_print;
/// use lazy_stream::streams::interval;
///
/// // prints `1 2 3`
/// stream_print(&interval(1, 3));
/// ```
#[cfg(feature = "std")]
pub fn stream_print<T: Display>(stream: &Stream<'_, T>) {
    print!("{}", render(stream, &PrintConfig::default()));
}

/// The same as [`stream_print`] followed by a newline.
#[cfg(feature = "std")]
pub fn stream_println<T: Display>(stream: &Stream<'_, T>) {
    stream_print(stream);
    println!();
}

/// Print the materialized prefix of `stream` to stdout (see [`render_list`]).
///
/// # Examples
///
/// ```
/// use lazy_stream::print::list_print;
/// use lazy_stream::{cons, cons_eager};
///
/// // prints `0 1 7`
/// list_print(&cons_eager(0, cons_eager(1, cons(7))));
/// ```
#[cfg(feature = "std")]
pub fn list_print<T: Display>(stream: &Stream<'_, T>) {
    print!("{}", render_list(stream, &PrintConfig::default()));
}

/// The same as [`list_print`] followed by a newline.
#[cfg(feature = "std")]
pub fn list_println<T: Display>(stream: &Stream<'_, T>) {
    list_print(stream);
    println!();
}
