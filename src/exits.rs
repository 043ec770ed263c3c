//! Exit handling: exit codes, signal handlers and terminal restore.

use crate::error::Error;

/// Process exit codes. Clap exits with 2 on usage errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Ok = 0,
    Validation = 1,
    Clipboard = 3,
    Io = 4,
}

impl From<&Error> for Code {
    fn from(e: &Error) -> Self {
        match e {
            Error::Clipboard(_) => Code::Clipboard,
            Error::Io(_) => Code::Io,
            _ => Code::Validation,
        }
    }
}

impl Code {
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

/// Restore canonical mode and echo using termios directly.
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Reset terminal state (public for use at startup)
pub fn reset_terminal() {
    reset_terminal_termios();
}

/// Registered with atexit; undoes raw mode and a hidden cursor.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit so atexit cleanup runs.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep generated passwords out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(target_os = "linux")]
    let _ = unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}
