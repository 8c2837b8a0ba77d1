pub mod cpu_6805;
pub mod disasm;
pub mod image;
pub mod listing;
pub mod log;
pub mod util;
