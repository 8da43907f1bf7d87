// Console boundary for the MatRust matrix library: interactive matrix entry
// and formatted printing. Kept out of matrust-core so the library itself
// never touches an input stream.

pub mod input;
pub mod render;
