use strum::{Display, EnumIter};

use super::instruction_table::INSTRUCTION_TABLE;

/// Mnemonic of reserved/illegal opcodes
pub const RESERVED_MNEMONIC: &str = "---";

/// Instruction addressing mode
#[derive(Debug, Copy, Clone, Eq, PartialEq, EnumIter, Display)]
pub enum AddressingMode {
    /// Bit test and branch (BRSET/BRCLR)
    /// 3 bytes, $OP $DD $RR
    DirectBitBranch,
    /// Bit set/clear (BSET/BCLR)
    /// 2 bytes, $OP $DD
    DirectBitSet,
    /// Relative
    /// 2 bytes, $OP $RR
    Relative,
    /// Direct
    /// 2 bytes, $OP $DD
    Direct,
    /// Inherent
    /// 1 byte, $OP
    Inherent,
    /// Indexed, no offset
    /// 1 byte, $OP
    IndexedNoOffset,
    /// Indexed, 8-bit offset
    /// 2 bytes, $OP $FF
    Indexed8,
    /// Immediate
    /// 2 bytes, $OP $II
    Immediate,
    /// Extended
    /// 3 bytes, $OP $HH $LL
    Extended,
    /// Indexed, 16-bit offset
    /// 3 bytes, $OP $EE $FF
    Indexed16,
}

impl AddressingMode {
    /// Total length of an instruction in this mode, including the opcode.
    pub const fn len(&self) -> usize {
        match self {
            Self::Inherent | Self::IndexedNoOffset => 1,
            Self::Direct
            | Self::DirectBitSet
            | Self::Relative
            | Self::Immediate
            | Self::Indexed8 => 2,
            Self::Extended | Self::Indexed16 | Self::DirectBitBranch => 3,
        }
    }
}

/// Instruction types
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum InstructionType {
    BRSET,
    BRCLR,
    BSET,
    BCLR,
    BRA,
    BRN,
    BHI,
    BLS,
    BCC,
    BCS,
    BNE,
    BEQ,
    BHCC,
    BHCS,
    BPL,
    BMI,
    BMC,
    BMS,
    BIL,
    BIH,
    BSR,
    NEG,
    COM,
    LSR,
    ROR,
    ASR,
    LSL,
    ROL,
    DEC,
    INC,
    TST,
    CLR,
    MUL,
    RTI,
    RTS,
    SWI,
    STOP,
    WAIT,
    TAX,
    CLC,
    SEC,
    CLI,
    SEI,
    RSP,
    NOP,
    TXA,
    SUB,
    CMP,
    SBC,
    CPX,
    AND,
    BIT,
    LDA,
    STA,
    EOR,
    ADC,
    ORA,
    ADD,
    JMP,
    JSR,
    LDX,
    STX,
    Reserved,
}

/// A definition in the instruction (op code) table
#[derive(Debug, Eq, PartialEq)]
pub struct InstructionDef {
    /// Mnemonic, as printed in the listing
    pub mnemonic: &'static str,

    /// Addressing mode
    pub mode: AddressingMode,

    /// Length
    pub len: usize,

    /// Execution time in CPU cycles, 0 for reserved opcodes
    pub cycles: usize,

    /// Instruction type
    pub instr_type: InstructionType,
}

impl InstructionDef {
    /// True for opcodes without a defined instruction.
    pub fn is_reserved(&self) -> bool {
        self.instr_type == InstructionType::Reserved
    }

    /// True for unconditional transfers of control, after which
    /// straight-line code does not continue.
    pub fn is_terminator(&self) -> bool {
        matches!(
            self.instr_type,
            InstructionType::JMP
                | InstructionType::BRA
                | InstructionType::RTS
                | InstructionType::RTI
        )
    }
}

/// Looks up the definition of an opcode. Every opcode has one.
pub fn lookup(opcode: u8) -> &'static InstructionDef {
    &INSTRUCTION_TABLE[opcode as usize]
}

/// Bit number tested or modified by the BRSET/BRCLR/BSET/BCLR
/// opcodes (0x00 - 0x1F), encoded in bits 1-3 of the opcode.
/// Meaningless for other opcodes.
pub fn bit_index(opcode: u8) -> u8 {
    (opcode >> 1) & 0x07
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_lengths_match_modes() {
        for opcode in 0..=255u8 {
            let def = lookup(opcode);
            assert!(
                (1..=3).contains(&def.len),
                "{:02X} has length {}",
                opcode,
                def.len
            );
            assert_eq!(def.len, def.mode.len(), "{:02X} {}", opcode, def.mnemonic);
        }
    }

    #[test]
    fn every_mode_is_used() {
        for mode in AddressingMode::iter() {
            assert!(
                (0..=255u8).any(|op| lookup(op).mode == mode),
                "{} not in table",
                mode
            );
        }
    }

    #[test]
    fn reserved_opcodes() {
        let reserved = (0..=255u8)
            .filter(|&op| lookup(op).is_reserved())
            .collect::<Vec<_>>();
        assert_eq!(reserved.len(), 46);
        for op in reserved {
            let def = lookup(op);
            assert_eq!(def.mnemonic, RESERVED_MNEMONIC);
            assert_eq!(def.mode, AddressingMode::Inherent);
            assert_eq!(def.cycles, 0);
        }
        assert!(lookup(0x31).is_reserved());
        assert!(lookup(0xA7).is_reserved());
        assert!(lookup(0xAF).is_reserved());
        assert!(!lookup(0x9D).is_reserved());
    }

    #[test]
    fn bit_families() {
        for opcode in 0x00..=0x1Fu8 {
            let def = lookup(opcode);
            assert_eq!(bit_index(opcode), (opcode & 0x0F) / 2);
            let set = opcode & 1 == 0;
            let expected = match (opcode < 0x10, set) {
                (true, true) => "brset",
                (true, false) => "brclr",
                (false, true) => "bset",
                (false, false) => "bclr",
            };
            assert_eq!(def.mnemonic, expected);
        }
        assert_eq!(bit_index(0x0E), 7);
        assert_eq!(bit_index(0x11), 0);
    }

    #[test]
    fn register_memory_blocks() {
        let order = [
            "sub", "cmp", "sbc", "cpx", "and", "bit", "lda", "sta", "eor", "adc", "ora", "add",
            "jmp", "jsr", "ldx", "stx",
        ];
        let blocks = [
            (0xB0, AddressingMode::Direct),
            (0xC0, AddressingMode::Extended),
            (0xD0, AddressingMode::Indexed16),
            (0xE0, AddressingMode::Indexed8),
            (0xF0, AddressingMode::IndexedNoOffset),
        ];
        for (base, mode) in blocks {
            for (i, mnemonic) in order.iter().enumerate() {
                let def = lookup(base + i as u8);
                assert_eq!(def.mnemonic, *mnemonic);
                assert_eq!(def.mode, mode);
            }
        }
        for (i, mnemonic) in order.iter().enumerate() {
            let def = lookup(0xA0 + i as u8);
            match *mnemonic {
                "sta" | "jmp" | "stx" => assert!(def.is_reserved()),
                "jsr" => {
                    assert_eq!(def.mnemonic, "bsr");
                    assert_eq!(def.mode, AddressingMode::Relative);
                }
                _ => {
                    assert_eq!(def.mnemonic, *mnemonic);
                    assert_eq!(def.mode, AddressingMode::Immediate);
                }
            }
        }
    }

    #[test]
    fn terminators() {
        let terminators = (0..=255u8)
            .filter(|&op| lookup(op).is_terminator())
            .map(|op| lookup(op).mnemonic)
            .collect::<Vec<_>>();
        assert_eq!(
            terminators,
            vec!["bra", "rti", "rts", "jmp", "jmp", "jmp", "jmp", "jmp"]
        );
        assert!(!lookup(0xAD).is_terminator());
    }
}
