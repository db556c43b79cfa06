#![no_main]
use libfuzzer_sys::fuzz_target;
use termlog::Arg;
use termlog::fmt::{build_message, sprintf};

fuzz_target!(|data: &str| {
    // Must not panic on any template string, whatever the argument count
    let _ = sprintf(data, &[]);

    let args = [
        Arg::Int(i64::MIN),
        Arg::Uint(u64::MAX),
        Arg::Float(f64::MIN_POSITIVE),
        Arg::Str(data),
        Arg::Char('\u{10FFFF}'),
        Arg::Bool(true),
    ];
    let _ = sprintf(data, &args);
    let _ = build_message(&[Arg::Str(data), Arg::Float(f64::NAN)]);
});
