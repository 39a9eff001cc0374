use log::trace;

use crate::consts;
use crate::disasm::disasm;
use crate::errors::EmuError;
use crate::instr::{self, Instruction};
use crate::instr::{RvAlu, RvControlFlow, RvLoadStore};
use crate::mem::Bus;
use crate::regs::RegisterFile;

/// Outcome of one executed instruction, surfaced for the driving loop to
/// observe. ECALL/EBREAK carry no internal behavior; the core just reports
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuEvent {
    Retired,
    Ecall,
    Ebreak,
}

pub struct Cpu {
    pub(crate) regs: RegisterFile,
    pub(crate) pc: u32,
    pub(crate) mem: Bus,
    initial_sp: u32,
}

impl Cpu {
    ///
    /// Constructor for the Cpu structure. Registers start zeroed and the
    /// PC starts at 0; the initial stack pointer is installed by `init`.
    ///
    /// # Arguments
    ///
    ///  - `mem` - Bus - Address space the CPU executes against. The CPU
    ///    owns the bus for its whole lifetime.
    ///  - `initial_sp` - u32 - Value `init` loads into x2.
    ///
    pub fn new(mem: Bus, initial_sp: u32) -> Cpu {
        Cpu {
            regs: RegisterFile::new(),
            pc: 0,
            mem,
            initial_sp,
        }
    }

    /// Install the initial stack pointer. Called once before execution.
    pub fn init(&mut self) -> Result<(), EmuError> {
        self.regs.write(consts::REG_SP, self.initial_sp)
    }

    pub fn pc(&self) -> u32 {
        self.pc
    }

    pub fn read_register(&self, index: usize) -> Result<u32, EmuError> {
        self.regs.read(index)
    }

    pub fn write_register(&mut self, index: usize, value: u32) -> Result<(), EmuError> {
        self.regs.write(index, value)
    }

    /// Fetch the instruction word at PC via the bus.
    pub fn fetch(&mut self) -> Result<u32, EmuError> {
        self.mem.load(self.pc, 32)
    }

    /// The driving loop advances PC past the fetched instruction before
    /// executing it; control transfer handlers recover the instruction's
    /// own address with `base_pc`.
    pub fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(4);
    }

    /// Address of the instruction currently being executed (PC has already
    /// been advanced 4 past it).
    pub(crate) fn base_pc(&self) -> u32 {
        self.pc.wrapping_sub(4)
    }

    /// Redirect execution to an absolute target, which must be 4-byte
    /// aligned. On misalignment the PC is left untouched.
    pub(crate) fn jump_to(&mut self, target: u32) -> Result<(), EmuError> {
        if target & 0x3 != 0 {
            return Err(EmuError::MisalignedJump { target });
        }
        self.pc = target;
        Ok(())
    }

    /// Taken branch: offset is relative to the instruction's own address.
    pub(crate) fn branch_to(&mut self, imm: i32) -> Result<(), EmuError> {
        let target = self.base_pc().wrapping_add(imm as u32);
        self.jump_to(target)
    }

    ///
    /// Decode and execute one instruction word. Decoding happens exactly
    /// once; the dispatch below is exhaustive over the decoded enumeration.
    ///
    /// # Return Value
    ///
    ///  - `CpuEvent` - Retired for ordinary instructions, or the service
    ///    instruction the driving loop should act on.
    ///
    pub fn execute(&mut self, word: u32) -> Result<CpuEvent, EmuError> {
        let inst = instr::decode(word)?;
        trace!("{:08x}: {}", self.base_pc(), disasm(&inst));

        match inst {
            Instruction::Lui { rd, imm } => self.lui(rd, imm)?,
            Instruction::Auipc { rd, imm } => self.auipc(rd, imm)?,
            Instruction::Jal { rd, imm } => self.jal(rd, imm)?,
            Instruction::Jalr { rd, rs1, imm } => self.jalr(rd, rs1, imm)?,

            Instruction::Beq { rs1, rs2, imm } => self.beq(rs1, rs2, imm)?,
            Instruction::Bne { rs1, rs2, imm } => self.bne(rs1, rs2, imm)?,
            Instruction::Blt { rs1, rs2, imm } => self.blt(rs1, rs2, imm)?,
            Instruction::Bge { rs1, rs2, imm } => self.bge(rs1, rs2, imm)?,
            Instruction::Bltu { rs1, rs2, imm } => self.bltu(rs1, rs2, imm)?,
            Instruction::Bgeu { rs1, rs2, imm } => self.bgeu(rs1, rs2, imm)?,

            Instruction::Lb { rd, rs1, imm } => self.lb(rd, rs1, imm)?,
            Instruction::Lh { rd, rs1, imm } => self.lh(rd, rs1, imm)?,
            Instruction::Lw { rd, rs1, imm } => self.lw(rd, rs1, imm)?,
            Instruction::Lbu { rd, rs1, imm } => self.lbu(rd, rs1, imm)?,
            Instruction::Lhu { rd, rs1, imm } => self.lhu(rd, rs1, imm)?,
            // Zero extension of a full word is the identity on RV32
            Instruction::Lwu { rd, rs1, imm } => self.lw(rd, rs1, imm)?,

            Instruction::Sb { rs1, rs2, imm } => self.sb(rs1, rs2, imm)?,
            Instruction::Sh { rs1, rs2, imm } => self.sh(rs1, rs2, imm)?,
            Instruction::Sw { rs1, rs2, imm } => self.sw(rs1, rs2, imm)?,

            Instruction::Addi { rd, rs1, imm } => self.addi(rd, rs1, imm)?,
            Instruction::Slti { rd, rs1, imm } => self.slti(rd, rs1, imm)?,
            Instruction::Sltiu { rd, rs1, imm } => self.sltiu(rd, rs1, imm)?,
            Instruction::Xori { rd, rs1, imm } => self.xori(rd, rs1, imm)?,
            Instruction::Ori { rd, rs1, imm } => self.ori(rd, rs1, imm)?,
            Instruction::Andi { rd, rs1, imm } => self.andi(rd, rs1, imm)?,
            Instruction::Slli { rd, rs1, shamt } => self.slli(rd, rs1, shamt)?,
            Instruction::Srli { rd, rs1, shamt } => self.srli(rd, rs1, shamt)?,
            Instruction::Srai { rd, rs1, shamt } => self.srai(rd, rs1, shamt)?,

            Instruction::Add { rd, rs1, rs2 } => self.add(rd, rs1, rs2)?,
            Instruction::Sub { rd, rs1, rs2 } => self.sub(rd, rs1, rs2)?,
            Instruction::Sll { rd, rs1, rs2 } => self.sll(rd, rs1, rs2)?,
            Instruction::Slt { rd, rs1, rs2 } => self.slt(rd, rs1, rs2)?,
            Instruction::Sltu { rd, rs1, rs2 } => self.sltu(rd, rs1, rs2)?,
            Instruction::Xor { rd, rs1, rs2 } => self.xor(rd, rs1, rs2)?,
            Instruction::Srl { rd, rs1, rs2 } => self.srl(rd, rs1, rs2)?,
            Instruction::Sra { rd, rs1, rs2 } => self.sra(rd, rs1, rs2)?,
            Instruction::Or { rd, rs1, rs2 } => self.or(rd, rs1, rs2)?,
            Instruction::And { rd, rs1, rs2 } => self.and(rd, rs1, rs2)?,

            Instruction::Fence => {}
            Instruction::Ecall => return Ok(CpuEvent::Ecall),
            Instruction::Ebreak => return Ok(CpuEvent::Ebreak),
        }

        Ok(CpuEvent::Retired)
    }

    /// Fetch, advance and execute one instruction. Convenience entry used
    /// by tests and embedders that do not need the driving loop's external
    /// termination checks.
    pub fn step(&mut self) -> Result<CpuEvent, EmuError> {
        let word = self.fetch()?;
        self.advance_pc();
        self.execute(word)
    }

    /// One-line hex rendering of PC and every register, for the diagnostic
    /// trace.
    pub fn dump_registers(&self) -> String {
        let mut out = format!("PC {:08x} REG", self.pc);
        for index in 0..consts::REG_COUNT {
            out.push_str(&format!(" {:x}", self.regs.read(index).unwrap_or(0)));
        }
        out
    }
}
