pub mod io;
pub mod periph;
pub mod ram;

use crate::errors::EmuError;

use self::periph::Peripheral;

/// Address-space router. Owns an insertion-ordered list of peripherals and
/// dispatches every load/store to the first one covering the address.
/// Registered ranges must not overlap; if they do, registration order wins.
pub struct Bus {
    peripherals: Vec<Box<dyn Peripheral>>,
}

impl Bus {
    pub fn new() -> Bus {
        Bus {
            peripherals: Vec::new(),
        }
    }

    /// Append a peripheral to the routing list.
    pub fn add(&mut self, peripheral: Box<dyn Peripheral>) {
        self.peripherals.push(peripheral);
    }

    /// First registered peripheral covering `addr`, if any.
    pub fn locate(&mut self, addr: u32) -> Option<&mut (dyn Peripheral + '_)> {
        self.peripherals
            .iter_mut()
            .find(|p| p.covers(addr))
            .map(|p| p.as_mut() as &mut dyn Peripheral)
    }

    pub fn load(&mut self, addr: u32, width: usize) -> Result<u32, EmuError> {
        match self.locate(addr) {
            Some(peripheral) => peripheral.load(addr, width),
            None => Err(EmuError::UnmappedAddress { addr }),
        }
    }

    pub fn store(&mut self, addr: u32, width: usize, value: u32) -> Result<(), EmuError> {
        match self.locate(addr) {
            Some(peripheral) => peripheral.store(addr, width, value),
            None => Err(EmuError::UnmappedAddress { addr }),
        }
    }
}

impl Default for Bus {
    fn default() -> Bus {
        Bus::new()
    }
}
