pub mod reader;
pub mod writer;

pub use reader::{ReferenceChain, read_dna_reference};
pub use writer::write_frame;
