use crate::errors::EmuError;
use crate::mem::periph::Peripheral;
use log::trace;

/// Fixed-size, base-relocated byte store backing both the ROM and RAM
/// regions of the address map. All multi-byte accesses are little-endian.
pub struct Memory {
    base: u32,
    data: Vec<u8>,
}

impl Memory {
    ///
    /// Constructor for the Memory structure. This creates a zero-filled
    /// byte buffer representing the addresses `[base, base + size)`.
    ///
    /// # Arguments
    ///
    ///  - `base` - u32 - Absolute address of the first byte of the region.
    ///  - `size` - usize - Region length in bytes.
    ///
    pub fn new(base: u32, size: usize) -> Memory {
        Memory {
            base,
            data: vec![0; size],
        }
    }

    ///
    /// Overwrite the buffer prefix with a program image. Only ever invoked
    /// before execution starts; an image longer than the buffer is a
    /// startup error.
    ///
    /// # Arguments
    ///
    ///  - `image` - &[u8] - Raw bytes to install at offset 0.
    ///
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), EmuError> {
        if image.len() > self.data.len() {
            return Err(EmuError::OutOfRange {
                addr: self.base.wrapping_add(image.len() as u32),
            });
        }
        self.data[..image.len()].copy_from_slice(image);
        Ok(())
    }

    fn offset(&self, addr: u32, width: usize) -> Result<usize, EmuError> {
        let offset = addr.wrapping_sub(self.base) as usize;
        if offset + width / 8 > self.data.len() {
            return Err(EmuError::OutOfRange { addr });
        }
        Ok(offset)
    }
}

impl Peripheral for Memory {
    fn covers(&self, addr: u32) -> bool {
        (addr.wrapping_sub(self.base) as usize) < self.data.len()
    }

    ///
    /// Memory implementation of the `load` function. Translates the
    /// absolute address to a buffer offset, bounds-checks the full access
    /// width, and reads 1, 2 or 4 bytes little-endian.
    ///
    fn load(&mut self, addr: u32, width: usize) -> Result<u32, EmuError> {
        let offset = self.offset(addr, width)?;
        let value = match width {
            8 => self.data[offset] as u32,
            16 => u16::from_le_bytes([self.data[offset], self.data[offset + 1]]) as u32,
            32 => u32::from_le_bytes([
                self.data[offset],
                self.data[offset + 1],
                self.data[offset + 2],
                self.data[offset + 3],
            ]),
            _ => return Err(EmuError::InvalidWidth { width }),
        };
        trace!("Mem Read: 0x{:08x}/{}: 0x{:x}", addr, width, value);
        Ok(value)
    }

    ///
    /// Memory implementation of the `store` function. The low `width` bits
    /// of `value` are written little-endian; the rest are ignored.
    ///
    fn store(&mut self, addr: u32, width: usize, value: u32) -> Result<(), EmuError> {
        let offset = self.offset(addr, width)?;
        trace!("Mem Write: 0x{:08x}/{}: 0x{:x}", addr, width, value);
        match width {
            8 => self.data[offset] = value as u8,
            16 => self.data[offset..offset + 2].copy_from_slice(&(value as u16).to_le_bytes()),
            32 => self.data[offset..offset + 4].copy_from_slice(&value.to_le_bytes()),
            _ => return Err(EmuError::InvalidWidth { width }),
        }
        Ok(())
    }
}
