use crate::cpu::Cpu;
use crate::errors::EmuError;

/// Memory access operations. The effective address is rs1 plus the
/// sign-extended immediate; all traffic goes through the bus.
pub trait RvLoadStore {
    fn lb(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError>;
    fn lh(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError>;
    fn lw(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError>;
    fn lbu(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError>;
    fn lhu(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError>;

    fn sb(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
    fn sh(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
    fn sw(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
}

impl Cpu {
    fn effective_addr(&self, rs1: usize, imm: i32) -> Result<u32, EmuError> {
        Ok(self.regs.read(rs1)?.wrapping_add(imm as u32))
    }
}

impl RvLoadStore for Cpu {
    fn lb(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.mem.load(addr, 8)? as u8 as i8 as i32;
        self.regs.write(rd, value as u32)
    }

    fn lh(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.mem.load(addr, 16)? as u16 as i16 as i32;
        self.regs.write(rd, value as u32)
    }

    fn lw(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.mem.load(addr, 32)?;
        self.regs.write(rd, value)
    }

    fn lbu(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.mem.load(addr, 8)?;
        self.regs.write(rd, value)
    }

    fn lhu(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.mem.load(addr, 16)?;
        self.regs.write(rd, value)
    }

    fn sb(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.regs.read(rs2)?;
        self.mem.store(addr, 8, value)
    }

    fn sh(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.regs.read(rs2)?;
        self.mem.store(addr, 16, value)
    }

    fn sw(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        let addr = self.effective_addr(rs1, imm)?;
        let value = self.regs.read(rs2)?;
        self.mem.store(addr, 32, value)
    }
}
