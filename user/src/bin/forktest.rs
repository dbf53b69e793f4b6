#![no_std]
#![no_main]

#[macro_use]
extern crate user_lib;

use log::{error, info};
use user_lib::{exit, fork, getpid, into_result, wait, waitpid, SysError};

const CHILDREN: i32 = 4;

#[no_mangle]
fn main() -> i32 {
    let mut pids = [0isize; CHILDREN as usize];
    for i in 0..CHILDREN {
        match into_result(fork()) {
            Ok(0) => {
                println!("child {} is process {}", i, getpid());
                exit(100 + i);
            }
            Ok(pid) => pids[i as usize] = pid as isize,
            Err(err) => {
                error!("fork failed: {}", err);
                return -1;
            }
        }
    }

    // the first child by pid, the rest in exit order
    let mut exit_code = 0;
    if waitpid(pids[0], &mut exit_code) != pids[0] || exit_code != 100 {
        println!("waitpid({}) got exit code {}", pids[0], exit_code);
        return -1;
    }
    for _ in 1..CHILDREN {
        let pid = wait(&mut exit_code);
        if pid < 0 {
            println!("wait failed: {}", SysError::Errno(pid));
            return -1;
        }
        info!("reaped {} with exit code {}", pid, exit_code);
    }
    if wait(&mut exit_code) >= 0 {
        println!("wait returned a child that should not exist");
        return -1;
    }
    println!("forktest pass.");
    0
}
