pub mod reader;

pub use reader::DumpReader;
