pub mod instruction;
pub mod instruction_table;
