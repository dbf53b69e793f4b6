use core::fmt::Write;
use core::panic::PanicInfo;

use crate::config::STDERR;
use crate::print::FdWriter;

extern "Rust" {
    fn main() -> i32;
}

#[no_mangle]
#[link_section = ".text.entry"]
pub extern "C" fn _start() -> ! {
    crate::logging::init();
    crate::exit(unsafe { main() });
}

#[panic_handler]
fn panic(info: &PanicInfo<'_>) -> ! {
    // bypass the console lock, the panic may have happened while holding it
    let _ = writeln!(FdWriter(STDERR), "\x1b[1;31mpanic: '{}'\x1b[0m", info);
    crate::exit(-1)
}
