use core::fmt::{self, Write};

use spin::Mutex;

use crate::config::{STDERR, STDOUT};
use crate::syscall::sys_write;

/// Unbuffered writer: every `write_str` is one `sys_write`.
pub struct FdWriter(pub usize);

impl Write for FdWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        sys_write(self.0, s.as_bytes());
        Ok(())
    }
}

// keep the pieces of one formatted message together
static STDOUT_WRITER: Mutex<FdWriter> = Mutex::new(FdWriter(STDOUT));
static STDERR_WRITER: Mutex<FdWriter> = Mutex::new(FdWriter(STDERR));

pub fn _print(args: fmt::Arguments) {
    let _ = STDOUT_WRITER.lock().write_fmt(args);
}

pub fn _eprint(args: fmt::Arguments) {
    let _ = STDERR_WRITER.lock().write_fmt(args);
}

#[macro_export]
macro_rules! print {
    ($fmt:literal $(, $($arg: tt)+)?) => {
        $crate::print::_print(format_args!($fmt $(, $($arg)+)?));
    };
}

#[macro_export]
macro_rules! println {
    () => {
        $crate::print::_print(format_args!("\n"));
    };
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::print::_print(format_args!(concat!($fmt, "\n") $(, $($arg)+)?));
    };
}

#[macro_export]
macro_rules! eprintln {
    ($fmt: literal $(, $($arg: tt)+)?) => {
        $crate::print::_eprint(format_args!(concat!($fmt, "\n") $(, $($arg)+)?));
    };
}

#[cfg(test)]
mod tests {
    use std::string::String;
    use std::sync::{Arc, Mutex};
    use std::vec::Vec;

    use crate::arch::mock;
    use crate::config::{STDERR, STDOUT, SYSCALL_WRITE};

    fn capture() -> Arc<Mutex<Vec<(usize, String)>>> {
        let out = Arc::new(Mutex::new(Vec::new()));
        let sink = out.clone();
        mock::install(move |id, [fd, ptr, len]| {
            assert_eq!(id, SYSCALL_WRITE);
            let bytes = unsafe { core::slice::from_raw_parts(ptr as *const u8, len) };
            let text = String::from_utf8(bytes.to_vec()).unwrap();
            sink.lock().unwrap().push((fd, text));
            len as isize
        });
        out
    }

    #[test]
    fn println_writes_to_stdout() {
        let out = capture();
        println!("pid {} exited with {}", 3, -1);
        let out = out.lock().unwrap();
        assert!(out.iter().all(|(fd, _)| *fd == STDOUT));
        let text: String = out.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(text, "pid 3 exited with -1\n");
    }

    #[test]
    fn eprintln_writes_to_stderr() {
        let out = capture();
        eprintln!("oops");
        assert!(out.lock().unwrap().iter().all(|(fd, _)| *fd == STDERR));
    }
}
