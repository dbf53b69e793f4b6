#![no_std]
#![no_main]

#[macro_use]
extern crate user_lib;

use user_lib::{clock_gettime, gettimeofday, sleep, usleep, TimeSpec, TimeVal, CLOCK_MONOTONIC};

fn monotonic_nanos() -> u128 {
    let mut ts = TimeSpec::default();
    clock_gettime(CLOCK_MONOTONIC, &mut ts);
    ts.total_nanos()
}

#[no_mangle]
fn main() -> i32 {
    let start = monotonic_nanos();
    usleep(1_500_000);
    sleep(1);
    let elapsed_ms = (monotonic_nanos() - start) / 1_000_000;
    println!("slept {} ms", elapsed_ms);

    let mut tv = TimeVal::default();
    gettimeofday(Some(&mut tv));
    println!("time of day: {}.{:06}", tv.sec, tv.usec);

    if elapsed_ms < 2_500 {
        println!("woke up too early");
        return -1;
    }
    println!("sleep pass.");
    0
}
