//! Scripted trap for host unit tests.
//!
//! Each test thread installs a handler that plays the kernel: it sees the
//! syscall number and raw arguments (pointers included) and returns the
//! result. Every trap is recorded so tests can assert on the exact sequence.

use std::boxed::Box;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::vec::Vec;

type Handler = Box<dyn FnMut(usize, [usize; 3]) -> isize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Call {
    pub id: usize,
    pub args: [usize; 3],
}

thread_local! {
    static HANDLER: RefCell<Option<Handler>> = RefCell::new(None);
    static CALLS: RefCell<Vec<Call>> = RefCell::new(Vec::new());
}

pub fn syscall(id: usize, args: [usize; 3]) -> isize {
    CALLS.with(|calls| calls.borrow_mut().push(Call { id, args }));
    HANDLER.with(|handler| match handler.borrow_mut().as_mut() {
        Some(handler) => handler(id, args),
        None => 0,
    })
}

/// Replace the kernel for the current thread and forget earlier traps.
pub fn install(handler: impl FnMut(usize, [usize; 3]) -> isize + 'static) {
    HANDLER.with(|h| *h.borrow_mut() = Some(Box::new(handler)));
    CALLS.with(|calls| calls.borrow_mut().clear());
}

/// Answer syscall `id` with `results` in order, then with 0. Other
/// syscalls return 0.
pub fn script(id: usize, results: &[isize]) {
    let mut pending: VecDeque<isize> = results.iter().copied().collect();
    install(move |nr, _| {
        if nr == id {
            pending.pop_front().unwrap_or(0)
        } else {
            0
        }
    });
}

pub fn calls() -> Vec<Call> {
    CALLS.with(|calls| calls.borrow().clone())
}

/// Recorded traps with number `id`.
pub fn calls_to(id: usize) -> Vec<Call> {
    calls().into_iter().filter(|call| call.id == id).collect()
}
