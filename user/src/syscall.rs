//! Raw syscalls. Each issues exactly one trap (`sys_exit` re-issues its own)
//! and returns the kernel's value untouched.

use core::ffi::CStr;

use crate::arch::syscall;
use crate::config::*;
use crate::time::TimeSpec;

pub fn sys_read(fd: usize, buffer: &mut [u8]) -> isize {
    syscall(SYSCALL_READ, [fd, buffer.as_mut_ptr() as usize, buffer.len()])
}

pub fn sys_write(fd: usize, buffer: &[u8]) -> isize {
    syscall(SYSCALL_WRITE, [fd, buffer.as_ptr() as usize, buffer.len()])
}

pub fn sys_exit(exit_code: i32) -> ! {
    // the kernel may return to us on an interrupted exit; ask again
    loop {
        syscall(SYSCALL_EXIT, [exit_code as usize, 0, 0]);
    }
}

pub fn sys_yield() -> isize {
    syscall(SYSCALL_YIELD, [0, 0, 0])
}

pub fn sys_getpid() -> isize {
    syscall(SYSCALL_GETPID, [0, 0, 0])
}

pub fn sys_fork() -> isize {
    syscall(SYSCALL_FORK, [0, 0, 0])
}

/// The kernel reads `path` up to its NUL terminator.
pub fn sys_exec(path: &CStr) -> isize {
    syscall(SYSCALL_EXEC, [path.as_ptr() as usize, 0, 0])
}

/// Non-blocking: returns `WOULD_BLOCK` while the child is still running.
pub fn sys_waitpid(pid: isize, exit_code: *mut i32) -> isize {
    syscall(SYSCALL_WAITPID, [pid as usize, exit_code as usize, 0])
}

pub fn sys_nanosleep(req: &TimeSpec) -> isize {
    syscall(SYSCALL_NANOSLEEP, [req as *const TimeSpec as usize, 0, 0])
}

pub fn sys_clock_gettime(clock_id: ClockId, ts: &mut TimeSpec) -> isize {
    syscall(SYSCALL_CLOCK_GETTIME, [clock_id, ts as *mut TimeSpec as usize, 0])
}

pub fn sys_get_time_ms() -> isize {
    syscall(SYSCALL_GET_TIME_MS, [0, 0, 0])
}
