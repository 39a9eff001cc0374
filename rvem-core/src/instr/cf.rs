use crate::cpu::Cpu;
use crate::errors::EmuError;

/// Control transfer operations. PC-relative targets are computed against
/// the instruction's own address (PC was already advanced past it at fetch
/// time), and every computed target must be 4-byte aligned.
pub trait RvControlFlow {
    fn lui(&mut self, rd: usize, imm: u32) -> Result<(), EmuError>;
    fn auipc(&mut self, rd: usize, imm: u32) -> Result<(), EmuError>;
    fn jal(&mut self, rd: usize, imm: i32) -> Result<(), EmuError>;
    fn jalr(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError>;

    fn beq(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
    fn bne(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
    fn blt(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
    fn bge(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
    fn bltu(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
    fn bgeu(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError>;
}

impl RvControlFlow for Cpu {
    fn lui(&mut self, rd: usize, imm: u32) -> Result<(), EmuError> {
        self.regs.write(rd, imm)
    }

    fn auipc(&mut self, rd: usize, imm: u32) -> Result<(), EmuError> {
        let value = self.base_pc().wrapping_add(imm);
        self.regs.write(rd, value)
    }

    fn jal(&mut self, rd: usize, imm: i32) -> Result<(), EmuError> {
        // Link register gets the already-advanced PC, the return address
        self.regs.write(rd, self.pc)?;
        self.branch_to(imm)
    }

    fn jalr(&mut self, rd: usize, rs1: usize, imm: i32) -> Result<(), EmuError> {
        // Read the base before linking so rd == rs1 keeps the old base
        let base = self.regs.read(rs1)?;
        self.regs.write(rd, self.pc)?;
        let target = base.wrapping_add(imm as u32) & !1;
        self.jump_to(target)
    }

    fn beq(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        if self.regs.read(rs1)? == self.regs.read(rs2)? {
            self.branch_to(imm)?;
        }
        Ok(())
    }

    fn bne(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        if self.regs.read(rs1)? != self.regs.read(rs2)? {
            self.branch_to(imm)?;
        }
        Ok(())
    }

    fn blt(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        if self.regs.read_signed(rs1)? < self.regs.read_signed(rs2)? {
            self.branch_to(imm)?;
        }
        Ok(())
    }

    fn bge(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        if self.regs.read_signed(rs1)? >= self.regs.read_signed(rs2)? {
            self.branch_to(imm)?;
        }
        Ok(())
    }

    fn bltu(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        if self.regs.read(rs1)? < self.regs.read(rs2)? {
            self.branch_to(imm)?;
        }
        Ok(())
    }

    fn bgeu(&mut self, rs1: usize, rs2: usize, imm: i32) -> Result<(), EmuError> {
        if self.regs.read(rs1)? >= self.regs.read(rs2)? {
            self.branch_to(imm)?;
        }
        Ok(())
    }
}
