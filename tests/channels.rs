use lazy_stream::arith::is_prime;
use lazy_stream::combinators::{filter, map, reduce};
use lazy_stream::print::{write_stream, PrintConfig};
use lazy_stream::streams::receivers::receive;

use crossbeam::channel::bounded;
use std::thread;
use std::time::Duration;

#[test]
fn test_primes_from_channel() {
    const CHANNEL_SIZE: usize = 4;
    const INPUT_LATENCY: u64 = 5; // in millis

    let (tx, rx) = bounded(CHANNEL_SIZE);

    let input_simulator = thread::spawn(move || {
        for n in 2..=21 {
            thread::sleep(Duration::from_millis(INPUT_LATENCY));
            tx.send(n).unwrap();
        }
    });

    let primes = filter(&receive(rx), |n| is_prime(*n));
    let squares = map(&primes, |p| p * p);

    // 4 + 9 + 25 + 49 + 121 + 169 + 289 + 361
    assert_eq!(reduce(&squares, |n, acc| acc + n, 0), 1027);

    input_simulator.join().unwrap();
}

#[test]
fn test_print_while_receiving() {
    let (tx, rx) = bounded(0);

    let input_simulator = thread::spawn(move || {
        for n in 1..=6 {
            tx.send(n).unwrap();
        }
    });

    let config = PrintConfig::default().with_limit(3);
    let mut out = Vec::new();

    let rest = write_stream(&mut out, &receive(rx), &config).unwrap();
    assert_eq!(rest.first(), Some(&4));

    out.push(b'|');
    let rest = write_stream(&mut out, &rest, &config).unwrap();
    assert!(rest.is_empty());

    assert_eq!(out, b"1 2 3|4 5 6");

    input_simulator.join().unwrap();
}
