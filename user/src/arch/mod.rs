//! The trap primitive. Every syscall number and up to three arguments go
//! through `syscall`, which returns whatever the kernel left in the result
//! register.

cfg_if::cfg_if! {
    if #[cfg(test)] {
        pub(crate) mod mock;
        pub use mock::syscall;
    } else if #[cfg(target_arch = "riscv64")] {
        mod riscv;
        pub use riscv::syscall;
    } else if #[cfg(target_arch = "aarch64")] {
        mod aarch64;
        pub use aarch64::syscall;
    } else if #[cfg(target_arch = "x86_64")] {
        mod x86_64;
        pub use x86_64::syscall;
    } else {
        compile_error!("user_lib: unsupported target architecture");
    }
}
