use crate::consts;
use crate::errors::EmuError;
use log::trace;

/// General purpose register file. Storage is a flat array of 32-bit words;
/// signedness is an access-time reinterpretation, never a storage property.
/// x0 is hardwired to zero: reads always return 0 and writes are discarded.
pub struct RegisterFile {
    regs: [u32; consts::REG_COUNT],
}

impl RegisterFile {
    ///
    /// Constructor for the RegisterFile structure. All registers start out
    /// zeroed; the file is never resized after construction.
    ///
    pub fn new() -> RegisterFile {
        RegisterFile {
            regs: [0; consts::REG_COUNT],
        }
    }

    ///
    /// Read a register as an unsigned 32-bit value.
    ///
    /// # Arguments
    ///
    ///  - `index` - usize - Register index. Index 0 always reads as zero;
    ///    indices at or beyond the configured file size are an error.
    ///
    pub fn read(&self, index: usize) -> Result<u32, EmuError> {
        if index == consts::REG_ZERO {
            return Ok(0);
        }
        if index >= consts::REG_COUNT {
            return Err(EmuError::InvalidRegister { index });
        }
        Ok(self.regs[index])
    }

    ///
    /// Read a register with its bit pattern reinterpreted as a
    /// two's-complement signed value.
    ///
    pub fn read_signed(&self, index: usize) -> Result<i32, EmuError> {
        Ok(self.read(index)? as i32)
    }

    ///
    /// Write a register. Writes to index 0 are silently discarded (not an
    /// error); indices at or beyond the configured file size are an error.
    ///
    /// # Arguments
    ///
    ///  - `index` - usize - Register index to write.
    ///  - `value` - u32 - Bit pattern to store.
    ///
    pub fn write(&mut self, index: usize, value: u32) -> Result<(), EmuError> {
        if index == consts::REG_ZERO {
            return Ok(());
        }
        if index >= consts::REG_COUNT {
            return Err(EmuError::InvalidRegister { index });
        }
        trace!("Reg Write: x{}: 0x{:08x}", index, value);
        self.regs[index] = value;
        Ok(())
    }

    ///
    /// Write a signed value; the two's-complement bit pattern is stored
    /// unchanged.
    ///
    pub fn write_signed(&mut self, index: usize, value: i32) -> Result<(), EmuError> {
        self.write(index, value as u32)
    }
}
