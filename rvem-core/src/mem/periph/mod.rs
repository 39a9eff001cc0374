use crate::errors::EmuError;

/// Capability contract for anything mapped into the address space. A
/// peripheral owns a contiguous or singleton sub-range of the 32-bit
/// address space; `width` is the access size in bits (8, 16 or 32).
pub trait Peripheral {
    fn covers(&self, addr: u32) -> bool;
    fn load(&mut self, addr: u32, width: usize) -> Result<u32, EmuError>;
    fn store(&mut self, addr: u32, width: usize, value: u32) -> Result<(), EmuError>;
}
