pub const MSEC_PER_SEC: usize = 1_000;
pub const USEC_PER_SEC: usize = 1_000_000;
pub const NSEC_PER_SEC: usize = 1_000_000_000;
pub const NSEC_PER_USEC: usize = 1_000;
pub const NSEC_PER_MSEC: usize = 1_000_000;

/// Same layout as the kernel's `TimeSpec` and C's `struct timespec` on
/// 64-bit targets.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpec {
    /// seconds
    pub sec: usize,
    /// nano seconds
    pub nsec: usize,
}

/// C's `struct timeval`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimeVal {
    /// seconds
    pub sec: usize,
    /// micro seconds
    pub usec: usize,
}

impl TimeSpec {
    pub const fn new(sec: usize, nsec: usize) -> Self {
        Self { sec, nsec }
    }

    pub const fn from_secs(secs: usize) -> Self {
        Self::new(secs, 0)
    }

    pub const fn from_millis(ms: usize) -> Self {
        Self::new(ms / MSEC_PER_SEC, (ms % MSEC_PER_SEC) * NSEC_PER_MSEC)
    }

    pub const fn from_micros(us: usize) -> Self {
        Self::new(us / USEC_PER_SEC, (us % USEC_PER_SEC) * NSEC_PER_USEC)
    }

    pub const fn total_nanos(&self) -> u128 {
        self.sec as u128 * NSEC_PER_SEC as u128 + self.nsec as u128
    }
}

impl From<TimeSpec> for TimeVal {
    fn from(ts: TimeSpec) -> Self {
        Self {
            sec: ts.sec,
            usec: ts.nsec / NSEC_PER_USEC,
        }
    }
}
