//! # Debug Log
//!
//! Diagnostics such as dropped out-of-range pixels go through `dbg_log!`.
//! Messages are only formatted in debug builds and only reach a sink once one
//! has been installed; with no sink the macro costs a lock and nothing else.
//!
//! ```ignore
//! let console: &'static mut Console = Box::leak(Box::new(Console::open()));
//! hanfb::logging::install_sink(console);
//! ```

use core::fmt::{self, Write};
use spin::Mutex;

/// Where log lines end up.
pub enum Sink {
    Writer(&'static mut (dyn Write + Send)),
    #[cfg(all(feature = "serial", target_arch = "x86_64"))]
    Serial(uart_16550::SerialPort),
}

impl Write for Sink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self {
            Sink::Writer(w) => w.write_str(s),
            #[cfg(all(feature = "serial", target_arch = "x86_64"))]
            Sink::Serial(port) => port.write_str(s),
        }
    }
}

static SINK: Mutex<Option<Sink>> = Mutex::new(None);

/// Route debug output to `writer`, replacing any previous sink.
pub fn install_sink(writer: &'static mut (dyn Write + Send)) {
    *SINK.lock() = Some(Sink::Writer(writer));
}

/// Route debug output to the 16550 UART at `base` (0x3F8 for COM1).
///
/// # Safety
/// `base` must be the I/O port of a real 16550-compatible UART.
#[cfg(all(feature = "serial", target_arch = "x86_64"))]
pub unsafe fn install_serial(base: u16) {
    let mut port = uart_16550::SerialPort::new(base);
    port.init();
    *SINK.lock() = Some(Sink::Serial(port));
}

/// Detach the current sink, returning it.
pub fn take_sink() -> Option<Sink> {
    SINK.lock().take()
}

#[doc(hidden)]
pub fn write_line(module: &str, line: u32, args: fmt::Arguments<'_>) {
    if let Some(sink) = SINK.lock().as_mut() {
        let _ = write!(sink, "{}({}) : ", module, line);
        let _ = sink.write_fmt(args);
        let _ = sink.write_str("\n");
    }
}

macro_rules! dbg_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::logging::write_line(
                core::module_path!(),
                core::line!(),
                core::format_args!($($arg)*),
            );
        }
    };
}

pub(crate) use dbg_log;
