//! Contains functionality to read an event from the text format and to write it back.

mod reader;
pub use self::reader::EventProblem;

mod writer;
pub use self::writer::write_event;
