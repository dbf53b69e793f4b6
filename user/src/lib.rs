#![cfg_attr(not(test), no_std)]

#[macro_use]
pub mod print;
pub mod config;
pub mod error;
pub mod logging;
pub mod syscall;
pub mod time;

mod arch;

#[cfg(any(test, feature = "c-abi"))]
mod cabi;
#[cfg(all(feature = "rt", not(test)))]
mod lang_items;

use core::ffi::CStr;

use log::trace;

pub use config::*;
pub use error::{into_result, SysError, SysResult};
pub use syscall::*;
pub use time::{TimeSpec, TimeVal};

pub fn read(fd: usize, buf: &mut [u8]) -> isize {
    sys_read(fd, buf)
}

pub fn write(fd: usize, buf: &[u8]) -> isize {
    sys_write(fd, buf)
}

pub fn getpid() -> isize {
    sys_getpid()
}

pub fn sched_yield() -> isize {
    sys_yield()
}

pub fn exit(exit_code: i32) -> ! {
    sys_exit(exit_code)
}

/// 0 in the child, the child's pid in the parent.
pub fn fork() -> isize {
    sys_fork()
}

/// Replace the current program. Only returns on failure.
pub fn execve(path: &CStr) -> isize {
    sys_exec(path)
}

pub fn wait(exit_code: &mut i32) -> isize {
    waitpid(ANY_CHILD, exit_code)
}

/// Block until child `pid` (or any child for -1) exits.
///
/// The kernel cannot put us to sleep on a child, so poll it and give up the
/// CPU between attempts. There is no timeout.
pub fn waitpid(pid: isize, exit_code: &mut i32) -> isize {
    loop {
        match sys_waitpid(pid, exit_code as *mut _) {
            WOULD_BLOCK => {
                trace!("waitpid({}): child still running", pid);
                sched_yield();
            }
            // -1 or a real pid
            exit_pid => return exit_pid,
        }
    }
}

pub fn nanosleep(req: &TimeSpec) -> isize {
    sys_nanosleep(req)
}

pub fn sleep(seconds: u32) -> isize {
    nanosleep(&TimeSpec::from_secs(seconds as usize))
}

pub fn usleep(useconds: u32) -> isize {
    nanosleep(&TimeSpec::from_micros(useconds as usize))
}

pub fn clock_gettime(clock_id: ClockId, ts: &mut TimeSpec) -> isize {
    sys_clock_gettime(clock_id, ts)
}

/// Wall-clock time at microsecond precision. A missing `tv` is not an error.
pub fn gettimeofday(tv: Option<&mut TimeVal>) -> isize {
    let tv = match tv {
        Some(tv) => tv,
        None => return 0,
    };
    let mut ts = TimeSpec::default();
    let ret = clock_gettime(CLOCK_REALTIME, &mut ts);
    if ret < 0 {
        return ret;
    }
    *tv = ts.into();
    0
}

/// Milliseconds since boot.
pub fn get_time_ms() -> isize {
    sys_get_time_ms()
}
