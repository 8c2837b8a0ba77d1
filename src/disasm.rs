use std::fmt;

use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::cpu_6805::instruction::{
    bit_index, lookup, AddressingMode, InstructionDef, RESERVED_MNEMONIC,
};
use crate::util::{branch_target, is_printable};

/// Bytes declared as data (FCB) instead of being decoded.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Literal {
    pub bytes: ArrayVec<u8, 2>,

    /// The bytes start an instruction that runs past the end of the image.
    pub truncated: bool,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FCB  ")?;
        for (i, &b) in self.bytes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            if is_printable(b) {
                write!(f, "'{}'", b as char)?;
            } else {
                write!(f, "${:02X}", b)?;
            }
        }
        if self.truncated {
            write!(f, " (truncated)")?;
        }
        Ok(())
    }
}

/// Decoded operand of an instruction
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operand {
    None,
    IndexedNoOffset,
    Direct(u8),
    Immediate(u8),
    Extended(u16),
    Indexed8(u8),
    Indexed16(u16),
    /// Resolved branch target
    Relative(u16),
    BitSet { bit: u8, addr: u8 },
    BitBranch { bit: u8, addr: u8, target: u16 },
}

impl Operand {
    fn decode(opcode: u8, mode: AddressingMode, raw: &[u8], next: u16) -> Self {
        match mode {
            AddressingMode::Inherent => Self::None,
            AddressingMode::IndexedNoOffset => Self::IndexedNoOffset,
            AddressingMode::Direct => Self::Direct(raw[1]),
            AddressingMode::Immediate => Self::Immediate(raw[1]),
            AddressingMode::Indexed8 => Self::Indexed8(raw[1]),
            AddressingMode::Extended => Self::Extended(u16::from_be_bytes([raw[1], raw[2]])),
            AddressingMode::Indexed16 => Self::Indexed16(u16::from_be_bytes([raw[1], raw[2]])),
            AddressingMode::Relative => Self::Relative(branch_target(next, raw[1])),
            AddressingMode::DirectBitSet => Self::BitSet {
                bit: bit_index(opcode),
                addr: raw[1],
            },
            AddressingMode::DirectBitBranch => Self::BitBranch {
                bit: bit_index(opcode),
                addr: raw[1],
                target: branch_target(next, raw[2]),
            },
        }
    }

    /// Absolute address a branch transfers control to.
    pub fn target(&self) -> Option<u16> {
        match *self {
            Self::Relative(target) | Self::BitBranch { target, .. } => Some(target),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::None => Ok(()),
            Self::IndexedNoOffset => write!(f, ",x"),
            Self::Direct(addr) => write!(f, "${:02X}", addr),
            Self::Immediate(val) => write!(f, "#${:02X}", val),
            Self::Extended(addr) => write!(f, "${:04X}", addr),
            Self::Indexed8(offset) => write!(f, "${:02X},x", offset),
            Self::Indexed16(offset) => write!(f, "${:04X},x", offset),
            Self::Relative(target) => write!(f, "${:04X}", target),
            Self::BitSet { bit, addr } => write!(f, "{},${:02X}", bit, addr),
            Self::BitBranch { bit, addr, target } => {
                write!(f, "{},${:02X},${:04X}", bit, addr, target)
            }
        }
    }
}

/// What a record decoded to
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Body {
    Instruction {
        def: &'static InstructionDef,
        operand: Operand,
    },
    Data(Literal),
}

/// A single line of disassembly.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Record {
    /// Address of the first byte.
    pub address: u16,

    /// Raw bytes consumed, opcode first.
    pub raw: ArrayVec<u8, 3>,

    pub body: Body,
}

impl Record {
    /// Number of bytes consumed from the image.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn opcode(&self) -> u8 {
        self.raw[0]
    }

    pub fn operand_bytes(&self) -> &[u8] {
        &self.raw[1..]
    }

    pub fn mnemonic(&self) -> &'static str {
        match &self.body {
            Body::Instruction { def, .. } => def.mnemonic,
            Body::Data(_) => RESERVED_MNEMONIC,
        }
    }

    pub fn operand(&self) -> Option<Operand> {
        match &self.body {
            Body::Instruction { operand, .. } => Some(*operand),
            Body::Data(_) => None,
        }
    }

    /// Absolute branch target, for relative and bit-branch instructions.
    pub fn target(&self) -> Option<u16> {
        self.operand().and_then(|op| op.target())
    }

    /// Whether execution never falls through to the next record.
    pub fn is_terminator(&self) -> bool {
        match &self.body {
            Body::Instruction { def, .. } => def.is_terminator(),
            Body::Data(_) => false,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let raw = format!("{:02X}", self.raw.iter().format(" "));
        write!(f, "{:04X}  {:<10}\t", self.address, raw)?;

        match &self.body {
            Body::Instruction { def, operand } => {
                write!(f, "{:>2}~\t{}", def.cycles, def.mnemonic)?;
                if *operand != Operand::None {
                    write!(f, "\t{}", operand)?;
                }
                Ok(())
            }
            Body::Data(literal) => write!(f, "  \t{}\t\t\t; {}", RESERVED_MNEMONIC, literal),
        }
    }
}

/// Result of a single decoding step
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DecodeOutcome {
    /// A complete instruction, or a reserved opcode declared as data.
    Decoded(Record),
    /// An instruction cut off by the end of the image, declared as data.
    Truncated(Record),
    /// Cursor is at or past the end of the image.
    Done,
}

fn data_record(address: u16, raw: ArrayVec<u8, 3>, truncated: bool) -> Record {
    let bytes = raw.iter().copied().take(2).collect();
    Record {
        address,
        raw,
        body: Body::Data(Literal { bytes, truncated }),
    }
}

/// Decodes the instruction at `pos`. Never reads past the end of `buf`.
pub fn decode_next(buf: &[u8], pos: usize) -> DecodeOutcome {
    let Some(&opcode) = buf.get(pos) else {
        return DecodeOutcome::Done;
    };
    let def = lookup(opcode);
    // Addresses wrap for images larger than the address space.
    let address = pos as u16;
    let remaining = buf.len() - pos;

    if remaining < def.len {
        tracing::trace!(
            "Instruction {} at {:04X} needs {} bytes, {} left",
            def.mnemonic,
            address,
            def.len,
            remaining
        );
        let raw = buf[pos..].iter().copied().take(2).collect();
        return DecodeOutcome::Truncated(data_record(address, raw, true));
    }

    let raw: ArrayVec<u8, 3> = buf[pos..pos + def.len].iter().copied().collect();
    if def.is_reserved() {
        tracing::trace!("Reserved opcode {:02X} at {:04X}", opcode, address);
        return DecodeOutcome::Decoded(data_record(address, raw, false));
    }

    let next = address.wrapping_add(def.len as u16);
    let operand = Operand::decode(opcode, def.mode, &raw, next);
    DecodeOutcome::Decoded(Record {
        address,
        raw,
        body: Body::Instruction { def, operand },
    })
}

/// Lazily disassembles an image, front to back.
pub struct Disassembler<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Disassembler<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next byte to decode.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<'a> Iterator for Disassembler<'a> {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        match decode_next(self.buf, self.pos) {
            DecodeOutcome::Decoded(record) | DecodeOutcome::Truncated(record) => {
                self.pos += record.len();
                Some(record)
            }
            DecodeOutcome::Done => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn decode(buf: &[u8]) -> Record {
        match decode_next(buf, 0) {
            DecodeOutcome::Decoded(r) => r,
            o => panic!("Unexpected outcome {:?}", o),
        }
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(decode_next(&[], 0), DecodeOutcome::Done);
        assert_eq!(Disassembler::new(&[]).count(), 0);
    }

    #[test]
    fn past_end() {
        assert_eq!(decode_next(&hex!("9D"), 1), DecodeOutcome::Done);
        assert_eq!(decode_next(&hex!("9D"), 5), DecodeOutcome::Done);
    }

    #[test]
    fn inherent() {
        let r = decode(&hex!("9D"));
        assert_eq!(r.len(), 1);
        assert_eq!(r.mnemonic(), "nop");
        assert_eq!(r.operand(), Some(Operand::None));
        assert!(r.operand_bytes().is_empty());
        assert!(!r.is_terminator());
        assert_eq!(r.to_string(), "0000  9D        \t 2~\tnop");
    }

    #[test]
    fn direct_and_immediate() {
        let r = decode(&hex!("B6 10"));
        assert_eq!(r.operand(), Some(Operand::Direct(0x10)));
        assert_eq!(r.to_string(), "0000  B6 10     \t 3~\tlda\t$10");

        let r = decode(&hex!("A6 10"));
        assert_eq!(r.operand(), Some(Operand::Immediate(0x10)));
        assert_eq!(r.to_string(), "0000  A6 10     \t 2~\tlda\t#$10");
    }

    #[test]
    fn extended_is_big_endian() {
        let r = decode(&hex!("C7 12 34"));
        assert_eq!(r.operand(), Some(Operand::Extended(0x1234)));
        assert_eq!(r.operand_bytes(), &[0x12, 0x34]);
        assert_eq!(r.to_string(), "0000  C7 12 34  \t 5~\tsta\t$1234");
    }

    #[test]
    fn indexed() {
        assert_eq!(
            decode(&hex!("F6")).to_string(),
            "0000  F6        \t 3~\tlda\t,x"
        );
        assert_eq!(
            decode(&hex!("E6 05")).to_string(),
            "0000  E6 05     \t 4~\tlda\t$05,x"
        );
        assert_eq!(
            decode(&hex!("D6 01 00")).to_string(),
            "0000  D6 01 00  \t 5~\tlda\t$0100,x"
        );
        assert_eq!(
            decode(&hex!("6C 7F")).to_string(),
            "0000  6C 7F     \t 6~\tinc\t$7F,x"
        );
        assert_eq!(
            decode(&hex!("7F")).to_string(),
            "0000  7F        \t 5~\tclr\t,x"
        );
    }

    #[test]
    fn relative_branch() {
        let mut buf = vec![0x9D; 0x10];
        buf.extend_from_slice(&hex!("20 05"));
        let DecodeOutcome::Decoded(r) = decode_next(&buf, 0x10) else {
            panic!("not decoded");
        };
        assert_eq!(r.address, 0x0010);
        assert_eq!(r.target(), Some(0x0017));
        assert!(r.is_terminator());
        assert_eq!(r.to_string(), "0010  20 05     \t 3~\tbra\t$0017");

        buf[0x11] = 0xFE;
        let DecodeOutcome::Decoded(r) = decode_next(&buf, 0x10) else {
            panic!("not decoded");
        };
        assert_eq!(r.target(), Some(0x0010));
    }

    #[test]
    fn relative_sign_boundaries() {
        let mut buf = vec![0x9D; 0x100];
        buf[0x80] = 0x26;
        for (disp, target) in [(0x7F, 0x0101), (0x80, 0x0002), (0xFF, 0x0081), (0x00, 0x0082)] {
            buf[0x81] = disp;
            let DecodeOutcome::Decoded(r) = decode_next(&buf, 0x80) else {
                panic!("not decoded");
            };
            assert_eq!(r.mnemonic(), "bne");
            assert_eq!(r.target(), Some(target), "displacement {:02X}", disp);
        }
    }

    #[test]
    fn bsr_is_relative() {
        let r = decode(&hex!("AD 10"));
        assert_eq!(r.target(), Some(0x0012));
        assert!(!r.is_terminator());
        assert_eq!(r.to_string(), "0000  AD 10     \t 6~\tbsr\t$0012");
    }

    #[test]
    fn bit_branch() {
        let r = decode(&hex!("00 10 03"));
        assert_eq!(r.len(), 3);
        assert_eq!(
            r.operand(),
            Some(Operand::BitBranch {
                bit: 0,
                addr: 0x10,
                target: 0x0006
            })
        );
        assert_eq!(r.to_string(), "0000  00 10 03  \t 5~\tbrset\t0,$10,$0006");

        let r = decode(&hex!("0F 80 FD"));
        assert_eq!(r.mnemonic(), "brclr");
        assert_eq!(r.target(), Some(0x0000));
        assert_eq!(r.to_string(), "0000  0F 80 FD  \t 5~\tbrclr\t7,$80,$0000");
    }

    #[test]
    fn bit_set() {
        let r = decode(&hex!("1B 04"));
        assert_eq!(r.operand(), Some(Operand::BitSet { bit: 5, addr: 0x04 }));
        assert_eq!(r.target(), None);
        assert_eq!(r.to_string(), "0000  1B 04     \t 5~\tbclr\t5,$04");
    }

    #[test]
    fn reserved_opcode() {
        let r = decode(&hex!("31 A6 00"));
        assert_eq!(r.len(), 1);
        assert_eq!(r.mnemonic(), RESERVED_MNEMONIC);
        assert_eq!(r.operand(), None);
        assert_eq!(r.to_string(), "0000  31        \t  \t---\t\t\t; FCB  '1'");

        let r = decode(&hex!("82"));
        assert_eq!(r.to_string(), "0000  82        \t  \t---\t\t\t; FCB  $82");
    }

    #[test]
    fn truncated_two_bytes() {
        let o = decode_next(&hex!("C6 12"), 0);
        let DecodeOutcome::Truncated(r) = o else {
            panic!("Unexpected outcome {:?}", o);
        };
        assert_eq!(r.len(), 2);
        assert_eq!(r.target(), None);
        assert!(!r.is_terminator());
        assert_eq!(
            r.to_string(),
            "0000  C6 12     \t  \t---\t\t\t; FCB  $C6, $12 (truncated)"
        );
    }

    #[test]
    fn truncated_one_byte() {
        for buf in [hex!("A6"), hex!("CC")] {
            let o = decode_next(&buf, 0);
            let DecodeOutcome::Truncated(r) = o else {
                panic!("Unexpected outcome {:?}", o);
            };
            assert_eq!(r.len(), 1);
        }
        let DecodeOutcome::Truncated(r) = decode_next(&hex!("9D 63"), 1) else {
            panic!("not truncated");
        };
        assert_eq!(r.address, 0x0001);
        assert_eq!(
            r.to_string(),
            "0001  63        \t  \t---\t\t\t; FCB  'c' (truncated)"
        );
    }

    #[test]
    fn consumes_every_byte_once() {
        let images: [&[u8]; 5] = [
            &hex!("A6 01 B7 80 CC 01 00 9D 81"),
            &hex!("00 10"),
            &hex!("00"),
            &hex!("31 32 35 C6"),
            &hex!("D6 01 00 0E 20 F0 45"),
        ];
        for image in images {
            let mut dis = Disassembler::new(image);
            let total: usize = dis.by_ref().map(|r| r.len()).sum();
            assert_eq!(total, image.len());
            assert_eq!(dis.position(), image.len());
        }
    }

    #[test]
    fn all_opcodes_every_tail() {
        for opcode in 0..=255u8 {
            for tail in 0..3 {
                let mut image = vec![opcode];
                image.extend(std::iter::repeat(0xFF).take(tail));
                let total: usize = Disassembler::new(&image).map(|r| r.len()).sum();
                assert_eq!(total, image.len(), "{:02X} + {}", opcode, tail);
            }
        }
    }

    #[test]
    fn idempotent() {
        let image = hex!("A6 41 20 FE 00 10 03 31 C6 12");
        let a = Disassembler::new(&image).collect::<Vec<_>>();
        let b = Disassembler::new(&image).collect::<Vec<_>>();
        assert_eq!(a, b);

        let render = |image: &[u8]| Disassembler::new(image).map(|r| r.to_string()).join("\n");
        assert_eq!(render(&image), render(&image));
        let image = (0..=255u8).cycle().take(0x11000).collect::<Vec<_>>();
        assert_eq!(render(&image), render(&image));
    }
}
