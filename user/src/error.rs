use thiserror::Error;

use crate::config::WOULD_BLOCK;

/// A negative trap result, for callers that prefer `?` over checking the
/// sign by hand. The kernel owns the meaning of the codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SysError {
    #[error("operation would block")]
    WouldBlock,
    #[error("syscall failed with code {0}")]
    Errno(isize),
}

pub type SysResult<T = usize> = Result<T, SysError>;

impl SysError {
    /// The raw value the kernel returned.
    pub fn code(&self) -> isize {
        match self {
            Self::WouldBlock => WOULD_BLOCK,
            Self::Errno(code) => *code,
        }
    }
}

pub fn into_result(ret: isize) -> SysResult {
    match ret {
        WOULD_BLOCK => Err(SysError::WouldBlock),
        code if code < 0 => Err(SysError::Errno(code)),
        value => Ok(value as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_is_ok() {
        assert_eq!(into_result(0), Ok(0));
        assert_eq!(into_result(42), Ok(42));
    }

    #[test]
    fn negative_keeps_its_code() {
        assert_eq!(into_result(-2), Err(SysError::WouldBlock));
        assert_eq!(into_result(-1), Err(SysError::Errno(-1)));
        assert_eq!(into_result(-22).unwrap_err().code(), -22);
        assert_eq!(SysError::WouldBlock.code(), WOULD_BLOCK);
    }
}
