/* Number of general purpose registers in the embedded (RV32E) configuration */
#[cfg(feature = "rv32e")]
pub const REG_COUNT: usize = 16;

/* Number of general purpose registers in the standard RV32I configuration */
#[cfg(not(feature = "rv32e"))]
pub const REG_COUNT: usize = 32;

/* x0 reads as zero and discards writes */
pub const REG_ZERO: usize = 0;

/* ABI stack pointer register */
pub const REG_SP: usize = 2;

pub mod opcode {
    pub const LUI: u32 = 0x37; // [lui rd, imm] Load upper immediate into rd
    pub const AUIPC: u32 = 0x17; // [auipc rd, imm] Add upper immediate to the program counter
    pub const JAL: u32 = 0x6F; // [jal rd, imm] Jump and link
    pub const JALR: u32 = 0x67; // [jalr rd, rs1, imm] Jump and link register
    pub const BRANCH: u32 = 0x63; // Subdivided by funct3, see the branch module
    pub const LOAD: u32 = 0x03; // Subdivided by funct3, see the load module
    pub const STORE: u32 = 0x23; // Subdivided by funct3, see the store module
    pub const OP_IMM: u32 = 0x13; // Subdivided by funct3, see the opimm module
    pub const OP: u32 = 0x33; // Subdivided by funct3/funct7, see the op module
    pub const MISC_MEM: u32 = 0x0F; // FENCE and FENCE.TSO
    pub const SYSTEM: u32 = 0x73; // ECALL and EBREAK
}

pub mod branch {
    pub const BEQ: u32 = 0x0; // Branch when rs1 and rs2 are equal
    pub const BNE: u32 = 0x1; // Branch when rs1 and rs2 are not equal
    pub const BLT: u32 = 0x4; // Branch when rs1 < rs2 (signed)
    pub const BGE: u32 = 0x5; // Branch when rs1 >= rs2 (signed)
    pub const BLTU: u32 = 0x6; // Branch when rs1 < rs2 (unsigned)
    pub const BGEU: u32 = 0x7; // Branch when rs1 >= rs2 (unsigned)
}

pub mod load {
    pub const LB: u32 = 0x0; // Sign-extended byte
    pub const LH: u32 = 0x1; // Sign-extended halfword
    pub const LW: u32 = 0x2; // Word
    pub const LBU: u32 = 0x4; // Zero-extended byte
    pub const LHU: u32 = 0x5; // Zero-extended halfword
    pub const LWU: u32 = 0x6; // Zero-extended word, identical to LW on a 32-bit hart
}

pub mod store {
    pub const SB: u32 = 0x0; // Low byte of rs2
    pub const SH: u32 = 0x1; // Low halfword of rs2
    pub const SW: u32 = 0x2; // Full word of rs2
}

pub mod opimm {
    pub const ADDI: u32 = 0x0;
    pub const SLLI: u32 = 0x1;
    pub const SLTI: u32 = 0x2;
    pub const SLTIU: u32 = 0x3;
    pub const XORI: u32 = 0x4;
    pub const SRI: u32 = 0x5; // SRLI or SRAI depending on funct7 bit 30
    pub const ORI: u32 = 0x6;
    pub const ANDI: u32 = 0x7;
}

pub mod op {
    pub const ADDSUB: u32 = 0x0; // ADD or SUB depending on funct7 bit 30
    pub const SLL: u32 = 0x1;
    pub const SLT: u32 = 0x2;
    pub const SLTU: u32 = 0x3;
    pub const XOR: u32 = 0x4;
    pub const SR: u32 = 0x5; // SRL or SRA depending on funct7 bit 30
    pub const OR: u32 = 0x6;
    pub const AND: u32 = 0x7;
}

/* funct7 values distinguishing the ADD/SUB and SRL/SRA pairs */
pub const FUNCT7_BASE: u32 = 0x00;
pub const FUNCT7_ALT: u32 = 0x20;

pub mod memmap {
    /* Base address and size of the ROM region the program image loads into */
    pub const ROM_BASE: u32 = 0x0000_0000;
    pub const ROM_SIZE: usize = 1024 * 1024;

    /* Base address and size of the RAM region; the stack grows down from its top */
    pub const RAM_BASE: u32 = 0x8000_0000;
    pub const RAM_SIZE: usize = 1024 * 1024;

    /* Single-word memory mapped console output port */
    pub const CONSOLE_ADDR: u32 = 0xF000_0000;
}
