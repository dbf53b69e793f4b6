//! Compile-time configuration shared with the kernel.

// Syscall numbers

pub const SYSCALL_READ: usize = 0;
pub const SYSCALL_WRITE: usize = 1;
pub const SYSCALL_YIELD: usize = 24;
pub const SYSCALL_NANOSLEEP: usize = 35;
pub const SYSCALL_GETPID: usize = 39;
pub const SYSCALL_FORK: usize = 57;
pub const SYSCALL_EXEC: usize = 59;
pub const SYSCALL_EXIT: usize = 60;
pub const SYSCALL_WAITPID: usize = 61;
pub const SYSCALL_GET_TIME_MS: usize = 96;
pub const SYSCALL_CLOCK_GETTIME: usize = 228;

/// Returned by `SYSCALL_WAITPID` while the awaited child is still running.
pub const WOULD_BLOCK: isize = -2;

/// Pass to `waitpid` to reap any child.
pub const ANY_CHILD: isize = -1;

// Clocks

pub type ClockId = usize;

pub const CLOCK_REALTIME: ClockId = 0;
pub const CLOCK_MONOTONIC: ClockId = 1;

// Standard file descriptors

pub const STDIN: usize = 0;
pub const STDOUT: usize = 1;
pub const STDERR: usize = 2;

// Logging

/// Set with `LOG=debug cargo build ...`; logging is off when unset.
pub const LOG_LEVEL: Option<&str> = option_env!("LOG");
