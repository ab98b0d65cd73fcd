pub mod a1_notation;
pub mod header_row;
