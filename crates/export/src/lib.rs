//! Tally import document: envelope model, XML rendering and file output.

pub mod envelope;
pub mod error;
pub mod writer;
pub mod xml;

pub use envelope::Envelope;
pub use error::ExportError;
pub use writer::write_atomically;
pub use xml::XmlElement;
