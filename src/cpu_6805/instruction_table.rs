use super::instruction::{AddressingMode, InstructionDef, InstructionType, RESERVED_MNEMONIC};

macro_rules! instr {
    ($mnemonic:expr, $mode:expr, $typ:expr, $cycles:expr) => {
        InstructionDef {
            mnemonic: $mnemonic,
            mode: $mode,
            len: $mode.len(),
            cycles: $cycles,
            instr_type: $typ,
        }
    };
}

macro_rules! reserved {
    () => {
        instr!(
            RESERVED_MNEMONIC,
            AddressingMode::Inherent,
            InstructionType::Reserved,
            0
        )
    };
}

/// M68HC05 opcode map
pub const INSTRUCTION_TABLE: [InstructionDef; 256] = [
    // Bit test and branch, direct address and relative offset
    // 0x00 - BRSET 0,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x01 - BRCLR 0,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),
    // 0x02 - BRSET 1,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x03 - BRCLR 1,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),
    // 0x04 - BRSET 2,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x05 - BRCLR 2,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),
    // 0x06 - BRSET 3,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x07 - BRCLR 3,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),
    // 0x08 - BRSET 4,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x09 - BRCLR 4,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),
    // 0x0A - BRSET 5,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x0B - BRCLR 5,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),
    // 0x0C - BRSET 6,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x0D - BRCLR 6,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),
    // 0x0E - BRSET 7,dd,rr
    // 3 bytes, 5 cycles
    instr!("brset", AddressingMode::DirectBitBranch, InstructionType::BRSET, 5),
    // 0x0F - BRCLR 7,dd,rr
    // 3 bytes, 5 cycles
    instr!("brclr", AddressingMode::DirectBitBranch, InstructionType::BRCLR, 5),

    // Bit set/clear, direct address
    // 0x10 - BSET 0,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x11 - BCLR 0,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),
    // 0x12 - BSET 1,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x13 - BCLR 1,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),
    // 0x14 - BSET 2,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x15 - BCLR 2,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),
    // 0x16 - BSET 3,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x17 - BCLR 3,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),
    // 0x18 - BSET 4,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x19 - BCLR 4,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),
    // 0x1A - BSET 5,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x1B - BCLR 5,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),
    // 0x1C - BSET 6,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x1D - BCLR 6,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),
    // 0x1E - BSET 7,dd
    // 2 bytes, 5 cycles
    instr!("bset", AddressingMode::DirectBitSet, InstructionType::BSET, 5),
    // 0x1F - BCLR 7,dd
    // 2 bytes, 5 cycles
    instr!("bclr", AddressingMode::DirectBitSet, InstructionType::BCLR, 5),

    // Relative branches
    // 0x20 - BRA rr
    // 2 bytes, 3 cycles
    instr!("bra", AddressingMode::Relative, InstructionType::BRA, 3),
    // 0x21 - BRN rr
    // 2 bytes, 3 cycles
    instr!("brn", AddressingMode::Relative, InstructionType::BRN, 3),
    // 0x22 - BHI rr
    // 2 bytes, 3 cycles
    instr!("bhi", AddressingMode::Relative, InstructionType::BHI, 3),
    // 0x23 - BLS rr
    // 2 bytes, 3 cycles
    instr!("bls", AddressingMode::Relative, InstructionType::BLS, 3),
    // 0x24 - BCC rr
    // 2 bytes, 3 cycles
    instr!("bcc", AddressingMode::Relative, InstructionType::BCC, 3),
    // 0x25 - BCS rr
    // 2 bytes, 3 cycles
    instr!("bcs", AddressingMode::Relative, InstructionType::BCS, 3),
    // 0x26 - BNE rr
    // 2 bytes, 3 cycles
    instr!("bne", AddressingMode::Relative, InstructionType::BNE, 3),
    // 0x27 - BEQ rr
    // 2 bytes, 3 cycles
    instr!("beq", AddressingMode::Relative, InstructionType::BEQ, 3),
    // 0x28 - BHCC rr
    // 2 bytes, 3 cycles
    instr!("bhcc", AddressingMode::Relative, InstructionType::BHCC, 3),
    // 0x29 - BHCS rr
    // 2 bytes, 3 cycles
    instr!("bhcs", AddressingMode::Relative, InstructionType::BHCS, 3),
    // 0x2A - BPL rr
    // 2 bytes, 3 cycles
    instr!("bpl", AddressingMode::Relative, InstructionType::BPL, 3),
    // 0x2B - BMI rr
    // 2 bytes, 3 cycles
    instr!("bmi", AddressingMode::Relative, InstructionType::BMI, 3),
    // 0x2C - BMC rr
    // 2 bytes, 3 cycles
    instr!("bmc", AddressingMode::Relative, InstructionType::BMC, 3),
    // 0x2D - BMS rr
    // 2 bytes, 3 cycles
    instr!("bms", AddressingMode::Relative, InstructionType::BMS, 3),
    // 0x2E - BIL rr
    // 2 bytes, 3 cycles
    instr!("bil", AddressingMode::Relative, InstructionType::BIL, 3),
    // 0x2F - BIH rr
    // 2 bytes, 3 cycles
    instr!("bih", AddressingMode::Relative, InstructionType::BIH, 3),

    // Read-modify-write, direct
    // 0x30 - NEG dd
    // 2 bytes, 5 cycles
    instr!("neg", AddressingMode::Direct, InstructionType::NEG, 5),
    // 0x31 - reserved
    reserved!(),
    // 0x32 - reserved
    reserved!(),
    // 0x33 - COM dd
    // 2 bytes, 5 cycles
    instr!("com", AddressingMode::Direct, InstructionType::COM, 5),
    // 0x34 - LSR dd
    // 2 bytes, 5 cycles
    instr!("lsr", AddressingMode::Direct, InstructionType::LSR, 5),
    // 0x35 - reserved
    reserved!(),
    // 0x36 - ROR dd
    // 2 bytes, 5 cycles
    instr!("ror", AddressingMode::Direct, InstructionType::ROR, 5),
    // 0x37 - ASR dd
    // 2 bytes, 5 cycles
    instr!("asr", AddressingMode::Direct, InstructionType::ASR, 5),
    // 0x38 - LSL dd
    // 2 bytes, 5 cycles
    instr!("lsl", AddressingMode::Direct, InstructionType::LSL, 5),
    // 0x39 - ROL dd
    // 2 bytes, 5 cycles
    instr!("rol", AddressingMode::Direct, InstructionType::ROL, 5),
    // 0x3A - DEC dd
    // 2 bytes, 5 cycles
    instr!("dec", AddressingMode::Direct, InstructionType::DEC, 5),
    // 0x3B - reserved
    reserved!(),
    // 0x3C - INC dd
    // 2 bytes, 5 cycles
    instr!("inc", AddressingMode::Direct, InstructionType::INC, 5),
    // 0x3D - TST dd
    // 2 bytes, 4 cycles
    instr!("tst", AddressingMode::Direct, InstructionType::TST, 4),
    // 0x3E - reserved
    reserved!(),
    // 0x3F - CLR dd
    // 2 bytes, 5 cycles
    instr!("clr", AddressingMode::Direct, InstructionType::CLR, 5),

    // Read-modify-write, accumulator
    // 0x40 - NEGA
    // 1 byte, 3 cycles
    instr!("nega", AddressingMode::Inherent, InstructionType::NEG, 3),
    // 0x41 - reserved
    reserved!(),
    // 0x42 - MUL
    // 1 byte, 11 cycles
    instr!("mul", AddressingMode::Inherent, InstructionType::MUL, 11),
    // 0x43 - COMA
    // 1 byte, 3 cycles
    instr!("coma", AddressingMode::Inherent, InstructionType::COM, 3),
    // 0x44 - LSRA
    // 1 byte, 3 cycles
    instr!("lsra", AddressingMode::Inherent, InstructionType::LSR, 3),
    // 0x45 - reserved
    reserved!(),
    // 0x46 - RORA
    // 1 byte, 3 cycles
    instr!("rora", AddressingMode::Inherent, InstructionType::ROR, 3),
    // 0x47 - ASRA
    // 1 byte, 3 cycles
    instr!("asra", AddressingMode::Inherent, InstructionType::ASR, 3),
    // 0x48 - LSLA
    // 1 byte, 3 cycles
    instr!("lsla", AddressingMode::Inherent, InstructionType::LSL, 3),
    // 0x49 - ROLA
    // 1 byte, 3 cycles
    instr!("rola", AddressingMode::Inherent, InstructionType::ROL, 3),
    // 0x4A - DECA
    // 1 byte, 3 cycles
    instr!("deca", AddressingMode::Inherent, InstructionType::DEC, 3),
    // 0x4B - reserved
    reserved!(),
    // 0x4C - INCA
    // 1 byte, 3 cycles
    instr!("inca", AddressingMode::Inherent, InstructionType::INC, 3),
    // 0x4D - TSTA
    // 1 byte, 3 cycles
    instr!("tsta", AddressingMode::Inherent, InstructionType::TST, 3),
    // 0x4E - reserved
    reserved!(),
    // 0x4F - CLRA
    // 1 byte, 3 cycles
    instr!("clra", AddressingMode::Inherent, InstructionType::CLR, 3),

    // Read-modify-write, index register
    // 0x50 - NEGX
    // 1 byte, 3 cycles
    instr!("negx", AddressingMode::Inherent, InstructionType::NEG, 3),
    // 0x51 - reserved
    reserved!(),
    // 0x52 - reserved
    reserved!(),
    // 0x53 - COMX
    // 1 byte, 3 cycles
    instr!("comx", AddressingMode::Inherent, InstructionType::COM, 3),
    // 0x54 - LSRX
    // 1 byte, 3 cycles
    instr!("lsrx", AddressingMode::Inherent, InstructionType::LSR, 3),
    // 0x55 - reserved
    reserved!(),
    // 0x56 - RORX
    // 1 byte, 3 cycles
    instr!("rorx", AddressingMode::Inherent, InstructionType::ROR, 3),
    // 0x57 - ASRX
    // 1 byte, 3 cycles
    instr!("asrx", AddressingMode::Inherent, InstructionType::ASR, 3),
    // 0x58 - LSLX
    // 1 byte, 3 cycles
    instr!("lslx", AddressingMode::Inherent, InstructionType::LSL, 3),
    // 0x59 - ROLX
    // 1 byte, 3 cycles
    instr!("rolx", AddressingMode::Inherent, InstructionType::ROL, 3),
    // 0x5A - DECX
    // 1 byte, 3 cycles
    instr!("decx", AddressingMode::Inherent, InstructionType::DEC, 3),
    // 0x5B - reserved
    reserved!(),
    // 0x5C - INCX
    // 1 byte, 3 cycles
    instr!("incx", AddressingMode::Inherent, InstructionType::INC, 3),
    // 0x5D - TSTX
    // 1 byte, 3 cycles
    instr!("tstx", AddressingMode::Inherent, InstructionType::TST, 3),
    // 0x5E - reserved
    reserved!(),
    // 0x5F - CLRX
    // 1 byte, 3 cycles
    instr!("clrx", AddressingMode::Inherent, InstructionType::CLR, 3),

    // Read-modify-write, indexed with 8-bit offset
    // 0x60 - NEG ff,x
    // 2 bytes, 6 cycles
    instr!("neg", AddressingMode::Indexed8, InstructionType::NEG, 6),
    // 0x61 - reserved
    reserved!(),
    // 0x62 - reserved
    reserved!(),
    // 0x63 - COM ff,x
    // 2 bytes, 6 cycles
    instr!("com", AddressingMode::Indexed8, InstructionType::COM, 6),
    // 0x64 - LSR ff,x
    // 2 bytes, 6 cycles
    instr!("lsr", AddressingMode::Indexed8, InstructionType::LSR, 6),
    // 0x65 - reserved
    reserved!(),
    // 0x66 - ROR ff,x
    // 2 bytes, 6 cycles
    instr!("ror", AddressingMode::Indexed8, InstructionType::ROR, 6),
    // 0x67 - ASR ff,x
    // 2 bytes, 6 cycles
    instr!("asr", AddressingMode::Indexed8, InstructionType::ASR, 6),
    // 0x68 - LSL ff,x
    // 2 bytes, 6 cycles
    instr!("lsl", AddressingMode::Indexed8, InstructionType::LSL, 6),
    // 0x69 - ROL ff,x
    // 2 bytes, 6 cycles
    instr!("rol", AddressingMode::Indexed8, InstructionType::ROL, 6),
    // 0x6A - DEC ff,x
    // 2 bytes, 6 cycles
    instr!("dec", AddressingMode::Indexed8, InstructionType::DEC, 6),
    // 0x6B - reserved
    reserved!(),
    // 0x6C - INC ff,x
    // 2 bytes, 6 cycles
    instr!("inc", AddressingMode::Indexed8, InstructionType::INC, 6),
    // 0x6D - TST ff,x
    // 2 bytes, 5 cycles
    instr!("tst", AddressingMode::Indexed8, InstructionType::TST, 5),
    // 0x6E - reserved
    reserved!(),
    // 0x6F - CLR ff,x
    // 2 bytes, 6 cycles
    instr!("clr", AddressingMode::Indexed8, InstructionType::CLR, 6),

    // Read-modify-write, indexed without offset
    // 0x70 - NEG ,x
    // 1 byte, 5 cycles
    instr!("neg", AddressingMode::IndexedNoOffset, InstructionType::NEG, 5),
    // 0x71 - reserved
    reserved!(),
    // 0x72 - reserved
    reserved!(),
    // 0x73 - COM ,x
    // 1 byte, 5 cycles
    instr!("com", AddressingMode::IndexedNoOffset, InstructionType::COM, 5),
    // 0x74 - LSR ,x
    // 1 byte, 5 cycles
    instr!("lsr", AddressingMode::IndexedNoOffset, InstructionType::LSR, 5),
    // 0x75 - reserved
    reserved!(),
    // 0x76 - ROR ,x
    // 1 byte, 5 cycles
    instr!("ror", AddressingMode::IndexedNoOffset, InstructionType::ROR, 5),
    // 0x77 - ASR ,x
    // 1 byte, 5 cycles
    instr!("asr", AddressingMode::IndexedNoOffset, InstructionType::ASR, 5),
    // 0x78 - LSL ,x
    // 1 byte, 5 cycles
    instr!("lsl", AddressingMode::IndexedNoOffset, InstructionType::LSL, 5),
    // 0x79 - ROL ,x
    // 1 byte, 5 cycles
    instr!("rol", AddressingMode::IndexedNoOffset, InstructionType::ROL, 5),
    // 0x7A - DEC ,x
    // 1 byte, 5 cycles
    instr!("dec", AddressingMode::IndexedNoOffset, InstructionType::DEC, 5),
    // 0x7B - reserved
    reserved!(),
    // 0x7C - INC ,x
    // 1 byte, 5 cycles
    instr!("inc", AddressingMode::IndexedNoOffset, InstructionType::INC, 5),
    // 0x7D - TST ,x
    // 1 byte, 4 cycles
    instr!("tst", AddressingMode::IndexedNoOffset, InstructionType::TST, 4),
    // 0x7E - reserved
    reserved!(),
    // 0x7F - CLR ,x
    // 1 byte, 5 cycles
    instr!("clr", AddressingMode::IndexedNoOffset, InstructionType::CLR, 5),

    // Control
    // 0x80 - RTI
    // 1 byte, 9 cycles
    instr!("rti", AddressingMode::Inherent, InstructionType::RTI, 9),
    // 0x81 - RTS
    // 1 byte, 6 cycles
    instr!("rts", AddressingMode::Inherent, InstructionType::RTS, 6),
    // 0x82 - reserved
    reserved!(),
    // 0x83 - SWI
    // 1 byte, 10 cycles
    instr!("swi", AddressingMode::Inherent, InstructionType::SWI, 10),
    // 0x84 - reserved
    reserved!(),
    // 0x85 - reserved
    reserved!(),
    // 0x86 - reserved
    reserved!(),
    // 0x87 - reserved
    reserved!(),
    // 0x88 - reserved
    reserved!(),
    // 0x89 - reserved
    reserved!(),
    // 0x8A - reserved
    reserved!(),
    // 0x8B - reserved
    reserved!(),
    // 0x8C - reserved
    reserved!(),
    // 0x8D - reserved
    reserved!(),
    // 0x8E - STOP
    // 1 byte, 2 cycles
    instr!("stop", AddressingMode::Inherent, InstructionType::STOP, 2),
    // 0x8F - WAIT
    // 1 byte, 2 cycles
    instr!("wait", AddressingMode::Inherent, InstructionType::WAIT, 2),

    // Register/flag
    // 0x90 - reserved
    reserved!(),
    // 0x91 - reserved
    reserved!(),
    // 0x92 - reserved
    reserved!(),
    // 0x93 - reserved
    reserved!(),
    // 0x94 - reserved
    reserved!(),
    // 0x95 - reserved
    reserved!(),
    // 0x96 - reserved
    reserved!(),
    // 0x97 - TAX
    // 1 byte, 2 cycles
    instr!("tax", AddressingMode::Inherent, InstructionType::TAX, 2),
    // 0x98 - CLC
    // 1 byte, 2 cycles
    instr!("clc", AddressingMode::Inherent, InstructionType::CLC, 2),
    // 0x99 - SEC
    // 1 byte, 2 cycles
    instr!("sec", AddressingMode::Inherent, InstructionType::SEC, 2),
    // 0x9A - CLI
    // 1 byte, 2 cycles
    instr!("cli", AddressingMode::Inherent, InstructionType::CLI, 2),
    // 0x9B - SEI
    // 1 byte, 2 cycles
    instr!("sei", AddressingMode::Inherent, InstructionType::SEI, 2),
    // 0x9C - RSP
    // 1 byte, 2 cycles
    instr!("rsp", AddressingMode::Inherent, InstructionType::RSP, 2),
    // 0x9D - NOP
    // 1 byte, 2 cycles
    instr!("nop", AddressingMode::Inherent, InstructionType::NOP, 2),
    // 0x9E - reserved
    reserved!(),
    // 0x9F - TXA
    // 1 byte, 2 cycles
    instr!("txa", AddressingMode::Inherent, InstructionType::TXA, 2),

    // Register/memory, immediate
    // 0xA0 - SUB #ii
    // 2 bytes, 2 cycles
    instr!("sub", AddressingMode::Immediate, InstructionType::SUB, 2),
    // 0xA1 - CMP #ii
    // 2 bytes, 2 cycles
    instr!("cmp", AddressingMode::Immediate, InstructionType::CMP, 2),
    // 0xA2 - SBC #ii
    // 2 bytes, 2 cycles
    instr!("sbc", AddressingMode::Immediate, InstructionType::SBC, 2),
    // 0xA3 - CPX #ii
    // 2 bytes, 2 cycles
    instr!("cpx", AddressingMode::Immediate, InstructionType::CPX, 2),
    // 0xA4 - AND #ii
    // 2 bytes, 2 cycles
    instr!("and", AddressingMode::Immediate, InstructionType::AND, 2),
    // 0xA5 - BIT #ii
    // 2 bytes, 2 cycles
    instr!("bit", AddressingMode::Immediate, InstructionType::BIT, 2),
    // 0xA6 - LDA #ii
    // 2 bytes, 2 cycles
    instr!("lda", AddressingMode::Immediate, InstructionType::LDA, 2),
    // 0xA7 - reserved
    reserved!(),
    // 0xA8 - EOR #ii
    // 2 bytes, 2 cycles
    instr!("eor", AddressingMode::Immediate, InstructionType::EOR, 2),
    // 0xA9 - ADC #ii
    // 2 bytes, 2 cycles
    instr!("adc", AddressingMode::Immediate, InstructionType::ADC, 2),
    // 0xAA - ORA #ii
    // 2 bytes, 2 cycles
    instr!("ora", AddressingMode::Immediate, InstructionType::ORA, 2),
    // 0xAB - ADD #ii
    // 2 bytes, 2 cycles
    instr!("add", AddressingMode::Immediate, InstructionType::ADD, 2),
    // 0xAC - reserved
    reserved!(),
    // 0xAD - BSR rr
    // 2 bytes, 6 cycles
    instr!("bsr", AddressingMode::Relative, InstructionType::BSR, 6),
    // 0xAE - LDX #ii
    // 2 bytes, 2 cycles
    instr!("ldx", AddressingMode::Immediate, InstructionType::LDX, 2),
    // 0xAF - reserved
    reserved!(),

    // Register/memory, direct
    // 0xB0 - SUB dd
    // 2 bytes, 3 cycles
    instr!("sub", AddressingMode::Direct, InstructionType::SUB, 3),
    // 0xB1 - CMP dd
    // 2 bytes, 3 cycles
    instr!("cmp", AddressingMode::Direct, InstructionType::CMP, 3),
    // 0xB2 - SBC dd
    // 2 bytes, 3 cycles
    instr!("sbc", AddressingMode::Direct, InstructionType::SBC, 3),
    // 0xB3 - CPX dd
    // 2 bytes, 3 cycles
    instr!("cpx", AddressingMode::Direct, InstructionType::CPX, 3),
    // 0xB4 - AND dd
    // 2 bytes, 3 cycles
    instr!("and", AddressingMode::Direct, InstructionType::AND, 3),
    // 0xB5 - BIT dd
    // 2 bytes, 3 cycles
    instr!("bit", AddressingMode::Direct, InstructionType::BIT, 3),
    // 0xB6 - LDA dd
    // 2 bytes, 3 cycles
    instr!("lda", AddressingMode::Direct, InstructionType::LDA, 3),
    // 0xB7 - STA dd
    // 2 bytes, 4 cycles
    instr!("sta", AddressingMode::Direct, InstructionType::STA, 4),
    // 0xB8 - EOR dd
    // 2 bytes, 3 cycles
    instr!("eor", AddressingMode::Direct, InstructionType::EOR, 3),
    // 0xB9 - ADC dd
    // 2 bytes, 3 cycles
    instr!("adc", AddressingMode::Direct, InstructionType::ADC, 3),
    // 0xBA - ORA dd
    // 2 bytes, 3 cycles
    instr!("ora", AddressingMode::Direct, InstructionType::ORA, 3),
    // 0xBB - ADD dd
    // 2 bytes, 3 cycles
    instr!("add", AddressingMode::Direct, InstructionType::ADD, 3),
    // 0xBC - JMP dd
    // 2 bytes, 2 cycles
    instr!("jmp", AddressingMode::Direct, InstructionType::JMP, 2),
    // 0xBD - JSR dd
    // 2 bytes, 5 cycles
    instr!("jsr", AddressingMode::Direct, InstructionType::JSR, 5),
    // 0xBE - LDX dd
    // 2 bytes, 3 cycles
    instr!("ldx", AddressingMode::Direct, InstructionType::LDX, 3),
    // 0xBF - STX dd
    // 2 bytes, 4 cycles
    instr!("stx", AddressingMode::Direct, InstructionType::STX, 4),

    // Register/memory, extended
    // 0xC0 - SUB hhll
    // 3 bytes, 4 cycles
    instr!("sub", AddressingMode::Extended, InstructionType::SUB, 4),
    // 0xC1 - CMP hhll
    // 3 bytes, 4 cycles
    instr!("cmp", AddressingMode::Extended, InstructionType::CMP, 4),
    // 0xC2 - SBC hhll
    // 3 bytes, 4 cycles
    instr!("sbc", AddressingMode::Extended, InstructionType::SBC, 4),
    // 0xC3 - CPX hhll
    // 3 bytes, 4 cycles
    instr!("cpx", AddressingMode::Extended, InstructionType::CPX, 4),
    // 0xC4 - AND hhll
    // 3 bytes, 4 cycles
    instr!("and", AddressingMode::Extended, InstructionType::AND, 4),
    // 0xC5 - BIT hhll
    // 3 bytes, 4 cycles
    instr!("bit", AddressingMode::Extended, InstructionType::BIT, 4),
    // 0xC6 - LDA hhll
    // 3 bytes, 4 cycles
    instr!("lda", AddressingMode::Extended, InstructionType::LDA, 4),
    // 0xC7 - STA hhll
    // 3 bytes, 5 cycles
    instr!("sta", AddressingMode::Extended, InstructionType::STA, 5),
    // 0xC8 - EOR hhll
    // 3 bytes, 4 cycles
    instr!("eor", AddressingMode::Extended, InstructionType::EOR, 4),
    // 0xC9 - ADC hhll
    // 3 bytes, 4 cycles
    instr!("adc", AddressingMode::Extended, InstructionType::ADC, 4),
    // 0xCA - ORA hhll
    // 3 bytes, 4 cycles
    instr!("ora", AddressingMode::Extended, InstructionType::ORA, 4),
    // 0xCB - ADD hhll
    // 3 bytes, 4 cycles
    instr!("add", AddressingMode::Extended, InstructionType::ADD, 4),
    // 0xCC - JMP hhll
    // 3 bytes, 3 cycles
    instr!("jmp", AddressingMode::Extended, InstructionType::JMP, 3),
    // 0xCD - JSR hhll
    // 3 bytes, 6 cycles
    instr!("jsr", AddressingMode::Extended, InstructionType::JSR, 6),
    // 0xCE - LDX hhll
    // 3 bytes, 4 cycles
    instr!("ldx", AddressingMode::Extended, InstructionType::LDX, 4),
    // 0xCF - STX hhll
    // 3 bytes, 5 cycles
    instr!("stx", AddressingMode::Extended, InstructionType::STX, 5),

    // Register/memory, indexed with 16-bit offset
    // 0xD0 - SUB eeff,x
    // 3 bytes, 5 cycles
    instr!("sub", AddressingMode::Indexed16, InstructionType::SUB, 5),
    // 0xD1 - CMP eeff,x
    // 3 bytes, 5 cycles
    instr!("cmp", AddressingMode::Indexed16, InstructionType::CMP, 5),
    // 0xD2 - SBC eeff,x
    // 3 bytes, 5 cycles
    instr!("sbc", AddressingMode::Indexed16, InstructionType::SBC, 5),
    // 0xD3 - CPX eeff,x
    // 3 bytes, 5 cycles
    instr!("cpx", AddressingMode::Indexed16, InstructionType::CPX, 5),
    // 0xD4 - AND eeff,x
    // 3 bytes, 5 cycles
    instr!("and", AddressingMode::Indexed16, InstructionType::AND, 5),
    // 0xD5 - BIT eeff,x
    // 3 bytes, 5 cycles
    instr!("bit", AddressingMode::Indexed16, InstructionType::BIT, 5),
    // 0xD6 - LDA eeff,x
    // 3 bytes, 5 cycles
    instr!("lda", AddressingMode::Indexed16, InstructionType::LDA, 5),
    // 0xD7 - STA eeff,x
    // 3 bytes, 6 cycles
    instr!("sta", AddressingMode::Indexed16, InstructionType::STA, 6),
    // 0xD8 - EOR eeff,x
    // 3 bytes, 5 cycles
    instr!("eor", AddressingMode::Indexed16, InstructionType::EOR, 5),
    // 0xD9 - ADC eeff,x
    // 3 bytes, 5 cycles
    instr!("adc", AddressingMode::Indexed16, InstructionType::ADC, 5),
    // 0xDA - ORA eeff,x
    // 3 bytes, 5 cycles
    instr!("ora", AddressingMode::Indexed16, InstructionType::ORA, 5),
    // 0xDB - ADD eeff,x
    // 3 bytes, 5 cycles
    instr!("add", AddressingMode::Indexed16, InstructionType::ADD, 5),
    // 0xDC - JMP eeff,x
    // 3 bytes, 4 cycles
    instr!("jmp", AddressingMode::Indexed16, InstructionType::JMP, 4),
    // 0xDD - JSR eeff,x
    // 3 bytes, 7 cycles
    instr!("jsr", AddressingMode::Indexed16, InstructionType::JSR, 7),
    // 0xDE - LDX eeff,x
    // 3 bytes, 5 cycles
    instr!("ldx", AddressingMode::Indexed16, InstructionType::LDX, 5),
    // 0xDF - STX eeff,x
    // 3 bytes, 6 cycles
    instr!("stx", AddressingMode::Indexed16, InstructionType::STX, 6),

    // Register/memory, indexed with 8-bit offset
    // 0xE0 - SUB ff,x
    // 2 bytes, 4 cycles
    instr!("sub", AddressingMode::Indexed8, InstructionType::SUB, 4),
    // 0xE1 - CMP ff,x
    // 2 bytes, 4 cycles
    instr!("cmp", AddressingMode::Indexed8, InstructionType::CMP, 4),
    // 0xE2 - SBC ff,x
    // 2 bytes, 4 cycles
    instr!("sbc", AddressingMode::Indexed8, InstructionType::SBC, 4),
    // 0xE3 - CPX ff,x
    // 2 bytes, 4 cycles
    instr!("cpx", AddressingMode::Indexed8, InstructionType::CPX, 4),
    // 0xE4 - AND ff,x
    // 2 bytes, 4 cycles
    instr!("and", AddressingMode::Indexed8, InstructionType::AND, 4),
    // 0xE5 - BIT ff,x
    // 2 bytes, 4 cycles
    instr!("bit", AddressingMode::Indexed8, InstructionType::BIT, 4),
    // 0xE6 - LDA ff,x
    // 2 bytes, 4 cycles
    instr!("lda", AddressingMode::Indexed8, InstructionType::LDA, 4),
    // 0xE7 - STA ff,x
    // 2 bytes, 5 cycles
    instr!("sta", AddressingMode::Indexed8, InstructionType::STA, 5),
    // 0xE8 - EOR ff,x
    // 2 bytes, 4 cycles
    instr!("eor", AddressingMode::Indexed8, InstructionType::EOR, 4),
    // 0xE9 - ADC ff,x
    // 2 bytes, 4 cycles
    instr!("adc", AddressingMode::Indexed8, InstructionType::ADC, 4),
    // 0xEA - ORA ff,x
    // 2 bytes, 4 cycles
    instr!("ora", AddressingMode::Indexed8, InstructionType::ORA, 4),
    // 0xEB - ADD ff,x
    // 2 bytes, 4 cycles
    instr!("add", AddressingMode::Indexed8, InstructionType::ADD, 4),
    // 0xEC - JMP ff,x
    // 2 bytes, 3 cycles
    instr!("jmp", AddressingMode::Indexed8, InstructionType::JMP, 3),
    // 0xED - JSR ff,x
    // 2 bytes, 6 cycles
    instr!("jsr", AddressingMode::Indexed8, InstructionType::JSR, 6),
    // 0xEE - LDX ff,x
    // 2 bytes, 4 cycles
    instr!("ldx", AddressingMode::Indexed8, InstructionType::LDX, 4),
    // 0xEF - STX ff,x
    // 2 bytes, 5 cycles
    instr!("stx", AddressingMode::Indexed8, InstructionType::STX, 5),

    // Register/memory, indexed without offset
    // 0xF0 - SUB ,x
    // 1 byte, 3 cycles
    instr!("sub", AddressingMode::IndexedNoOffset, InstructionType::SUB, 3),
    // 0xF1 - CMP ,x
    // 1 byte, 3 cycles
    instr!("cmp", AddressingMode::IndexedNoOffset, InstructionType::CMP, 3),
    // 0xF2 - SBC ,x
    // 1 byte, 3 cycles
    instr!("sbc", AddressingMode::IndexedNoOffset, InstructionType::SBC, 3),
    // 0xF3 - CPX ,x
    // 1 byte, 3 cycles
    instr!("cpx", AddressingMode::IndexedNoOffset, InstructionType::CPX, 3),
    // 0xF4 - AND ,x
    // 1 byte, 3 cycles
    instr!("and", AddressingMode::IndexedNoOffset, InstructionType::AND, 3),
    // 0xF5 - BIT ,x
    // 1 byte, 3 cycles
    instr!("bit", AddressingMode::IndexedNoOffset, InstructionType::BIT, 3),
    // 0xF6 - LDA ,x
    // 1 byte, 3 cycles
    instr!("lda", AddressingMode::IndexedNoOffset, InstructionType::LDA, 3),
    // 0xF7 - STA ,x
    // 1 byte, 4 cycles
    instr!("sta", AddressingMode::IndexedNoOffset, InstructionType::STA, 4),
    // 0xF8 - EOR ,x
    // 1 byte, 3 cycles
    instr!("eor", AddressingMode::IndexedNoOffset, InstructionType::EOR, 3),
    // 0xF9 - ADC ,x
    // 1 byte, 3 cycles
    instr!("adc", AddressingMode::IndexedNoOffset, InstructionType::ADC, 3),
    // 0xFA - ORA ,x
    // 1 byte, 3 cycles
    instr!("ora", AddressingMode::IndexedNoOffset, InstructionType::ORA, 3),
    // 0xFB - ADD ,x
    // 1 byte, 3 cycles
    instr!("add", AddressingMode::IndexedNoOffset, InstructionType::ADD, 3),
    // 0xFC - JMP ,x
    // 1 byte, 2 cycles
    instr!("jmp", AddressingMode::IndexedNoOffset, InstructionType::JMP, 2),
    // 0xFD - JSR ,x
    // 1 byte, 5 cycles
    instr!("jsr", AddressingMode::IndexedNoOffset, InstructionType::JSR, 5),
    // 0xFE - LDX ,x
    // 1 byte, 3 cycles
    instr!("ldx", AddressingMode::IndexedNoOffset, InstructionType::LDX, 3),
    // 0xFF - STX ,x
    // 1 byte, 4 cycles
    instr!("stx", AddressingMode::IndexedNoOffset, InstructionType::STX, 4),
];
