//! C entry points, so C programs can link against this crate instead of a libc.

#![cfg_attr(test, allow(dead_code))]

use core::ffi::{c_char, c_int, c_uint, c_void};

use crate::arch::syscall;
use crate::config::*;
use crate::time::{TimeSpec, TimeVal};

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn read(fd: c_int, buf: *mut c_void, count: usize) -> isize {
    syscall(SYSCALL_READ, [fd as usize, buf as usize, count])
}

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn write(fd: c_int, buf: *const c_void, count: usize) -> isize {
    syscall(SYSCALL_WRITE, [fd as usize, buf as usize, count])
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn getpid() -> c_int {
    crate::getpid() as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn sched_yield() -> c_int {
    crate::sched_yield() as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn exit(code: c_int) -> ! {
    crate::exit(code)
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn fork() -> c_int {
    crate::fork() as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn execve(path: *const c_char) -> c_int {
    // NULL goes to the kernel as is; it owns the error for it
    syscall(SYSCALL_EXEC, [path as usize, 0, 0]) as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn wait(exitcode: *mut c_int) -> c_int {
    waitpid(ANY_CHILD as c_int, exitcode)
}

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn waitpid(pid: c_int, exitcode: *mut c_int) -> c_int {
    let mut discard = 0;
    let slot = match exitcode.as_mut() {
        Some(slot) => slot,
        None => &mut discard,
    };
    crate::waitpid(pid as isize, slot) as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn nanosleep(req: *const TimeSpec, _rem: *mut TimeSpec) -> c_int {
    syscall(SYSCALL_NANOSLEEP, [req as usize, 0, 0]) as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn sleep(seconds: c_uint) -> c_uint {
    // the kernel does not report unslept time, so a failed sleep slept nothing
    if crate::sleep(seconds) < 0 {
        seconds
    } else {
        0
    }
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn usleep(useconds: c_uint) -> c_int {
    crate::usleep(useconds) as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn clock_gettime(clk: c_int, ts: *mut TimeSpec) -> c_int {
    syscall(SYSCALL_CLOCK_GETTIME, [clk as usize, ts as usize, 0]) as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub unsafe extern "C" fn gettimeofday(tv: *mut TimeVal, _tz: *mut c_void) -> c_int {
    crate::gettimeofday(tv.as_mut()) as c_int
}

#[cfg_attr(not(test), no_mangle)]
pub extern "C" fn get_time_ms() -> c_uint {
    crate::get_time_ms() as c_uint
}

#[cfg(test)]
mod tests {
    use core::ptr;

    use super::*;
    use crate::arch::mock;

    #[test]
    fn sleep_reports_whole_request_when_trap_fails() {
        mock::script(SYSCALL_NANOSLEEP, &[-5, 0]);
        assert_eq!(sleep(4), 4);
        assert_eq!(sleep(4), 0);
        assert_eq!(mock::calls_to(SYSCALL_NANOSLEEP).len(), 2);
    }

    #[test]
    fn null_status_slot_still_reaps() {
        mock::script(SYSCALL_WAITPID, &[WOULD_BLOCK, 9, 3]);
        assert_eq!(unsafe { waitpid(-1, ptr::null_mut()) }, 9);
        assert_eq!(unsafe { wait(ptr::null_mut()) }, 3);

        let waits = mock::calls_to(SYSCALL_WAITPID);
        assert_eq!(waits.len(), 3);
        assert!(waits.iter().all(|call| call.args[0] == ANY_CHILD as usize && call.args[1] != 0));
        assert_eq!(mock::calls_to(SYSCALL_YIELD).len(), 1);
    }

    #[test]
    fn status_slot_receives_exit_code() {
        mock::install(|id, [_, slot, _]| {
            if id == SYSCALL_WAITPID {
                unsafe { *(slot as *mut i32) = 17 };
                return 2;
            }
            0
        });
        let mut status: c_int = 0;
        assert_eq!(unsafe { waitpid(2, &mut status) }, 2);
        assert_eq!(status, 17);
    }

    #[test]
    fn gettimeofday_without_timeval_does_not_trap() {
        assert_eq!(unsafe { gettimeofday(ptr::null_mut(), ptr::null_mut()) }, 0);
        assert!(mock::calls().is_empty());
    }

    #[test]
    fn gettimeofday_fills_timeval() {
        mock::install(|_, [_, ts, _]| {
            unsafe { *(ts as *mut TimeSpec) = TimeSpec::new(5, 250_999) };
            0
        });
        let mut tv = TimeVal::default();
        assert_eq!(unsafe { gettimeofday(&mut tv, ptr::null_mut()) }, 0);
        assert_eq!(tv, TimeVal { sec: 5, usec: 250 });
    }

    #[test]
    fn nanosleep_ignores_rem() {
        let req = TimeSpec::new(1, 2);
        let mut rem = TimeSpec::new(7, 7);
        assert_eq!(unsafe { nanosleep(&req, &mut rem) }, 0);
        assert_eq!(rem, TimeSpec::new(7, 7));
        let calls = mock::calls_to(SYSCALL_NANOSLEEP);
        assert_eq!(calls[0].args, [&req as *const TimeSpec as usize, 0, 0]);
    }

    #[test]
    fn execve_hands_null_path_to_the_kernel() {
        mock::script(SYSCALL_EXEC, &[-14]);
        assert_eq!(unsafe { execve(ptr::null()) }, -14);
        assert_eq!(mock::calls_to(SYSCALL_EXEC)[0].args, [0, 0, 0]);
    }

    #[test]
    fn read_and_write_forward_raw_buffers() {
        mock::install(|_, [_, _, count]| count as isize);
        let mut buf = [0u8; 8];
        let dst = buf.as_mut_ptr() as *mut c_void;
        assert_eq!(unsafe { read(0, dst, 8) }, 8);
        assert_eq!(unsafe { write(1, ptr::null(), 0) }, 0);
        let calls = mock::calls();
        assert_eq!(calls[0].args, [0, dst as usize, 8]);
        assert_eq!(calls[1].args, [1, 0, 0]);
    }
}
