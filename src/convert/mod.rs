mod converter;
mod naming;

pub use converter::{
    convert_batch, convert_document, convert_document_strict, convert_local_document,
    BatchOutcome, BatchStatus, Conversion, DocumentInput,
};
pub use naming::label_file_name;
