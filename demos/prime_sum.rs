//! Compose the stream operations: build streams by hand and from intervals, index, map, filter and sum them.

use lazy_stream::arith::{is_prime, sum_primes};
use lazy_stream::combinators::{filter, map, stream_ref};
use lazy_stream::print::{list_println, stream_println};
use lazy_stream::streams::interval;
use lazy_stream::{cons, cons_eager, cons_stream, StreamResult};

fn main() -> StreamResult<()> {
    let list = cons_eager(0, cons_eager(1, cons(7)));
    list_println(&list);

    let sa = cons_stream(7, || cons_stream(1, || cons(2)));
    stream_println(&sa);

    println!("{}", stream_ref(&sa, 1)?);

    let m = map(&sa, |n| n + 1);
    stream_println(&m);

    let s_int = interval(1, 10);
    stream_println(&s_int);

    stream_println(&filter(&interval(2, 21), |n| is_prime(*n)));
    println!("sum(prime(2, 21)): {}", sum_primes(2, 21));

    Ok(())
}
