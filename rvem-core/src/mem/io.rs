use crate::errors::EmuError;
use crate::mem::periph::Peripheral;
use log::trace;

use std::io::{self, Write};

/// Write-only console port occupying a single word of the address space.
/// Each store decodes the written 1/2/4 little-endian bytes as UTF-8 and
/// emits the text to the output sink immediately; there is no FIFO and no
/// backpressure. Loads are side-effect-free and read as zero.
pub struct ConsolePort {
    base: u32,
    out: Box<dyn Write + Send>,
}

impl ConsolePort {
    pub fn new(base: u32) -> ConsolePort {
        ConsolePort {
            base,
            out: Box::new(io::stdout()),
        }
    }

    /// Same port with a caller-supplied sink, used by tests to capture the
    /// emitted bytes.
    pub fn with_output(base: u32, out: Box<dyn Write + Send>) -> ConsolePort {
        ConsolePort { base, out }
    }
}

impl Peripheral for ConsolePort {
    fn covers(&self, addr: u32) -> bool {
        addr == self.base
    }

    fn load(&mut self, _addr: u32, _width: usize) -> Result<u32, EmuError> {
        Ok(0)
    }

    fn store(&mut self, addr: u32, width: usize, value: u32) -> Result<(), EmuError> {
        let bytes = value.to_le_bytes();
        let count = match width {
            8 => 1,
            16 => 2,
            32 => 4,
            _ => return Err(EmuError::InvalidWidth { width }),
        };
        trace!("Console Write: 0x{:08x}/{}: 0x{:x}", addr, width, value);

        // The process stream is written unchecked; a closed stdout is not
        // an emulation fault.
        let text = String::from_utf8_lossy(&bytes[..count]).into_owned();
        let _ = self.out.write_all(text.as_bytes());
        let _ = self.out.flush();
        Ok(())
    }
}
