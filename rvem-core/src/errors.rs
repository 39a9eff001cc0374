use thiserror::Error;

/// Fatal faults raised by the emulation core. None of these are recovered
/// internally; each one aborts the current instruction and is surfaced to
/// the driving loop.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmuError {
    /// No registered peripheral covers the address.
    #[error("unmapped address 0x{addr:08x}")]
    UnmappedAddress { addr: u32 },

    /// The address falls inside a peripheral's range arithmetic but outside
    /// its allocated size.
    #[error("address 0x{addr:08x} out of range")]
    OutOfRange { addr: u32 },

    /// Register access at or beyond the configured register file size.
    #[error("invalid register index x{index}")]
    InvalidRegister { index: usize },

    /// A computed control transfer target is not 4-byte aligned.
    #[error("misaligned jump target 0x{target:08x}")]
    MisalignedJump { target: u32 },

    /// The opcode field selects no known instruction family.
    #[error("invalid instruction word 0x{word:08x}")]
    InvalidInstruction { word: u32 },

    /// The funct3/funct7 fields select no operation within a known family.
    #[error("invalid encoding: opcode 0x{opcode:02x} funct3 0x{funct3:x} funct7 0x{funct7:02x}")]
    InvalidFunct { opcode: u32, funct3: u32, funct7: u32 },

    /// Load or store width other than 8, 16 or 32 bits.
    #[error("invalid access width {width}")]
    InvalidWidth { width: usize },
}
