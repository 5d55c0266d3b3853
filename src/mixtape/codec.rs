//! JSON wire format.
//!
//! - Operations: an array of objects tagged by `optype`. Each element is
//!   decoded on its own by [`Operation::from_definition`].
//! - Records: an object mapping collection tags to arrays of raw records.
//!   Collections are returned in document order.
//! - Output: [`Storage`] as `{"users": [...], "songs": [...], "playlists": [...]}`.
//!
//! Anything that does not fit these shapes is a fatal decode error. Checking
//! the records themselves is left to ingestion, and checking the fields of an
//! operation to its validation.

use crate::error::{MixtapeError, Result};
use crate::operations::Operation;
use crate::store::Storage;
use serde_json::{Map, Value};
use std::io::{BufReader, BufWriter, Read, Write};

/// One tagged collection of raw records.
pub type Collection = (String, Vec<Value>);

pub fn decode_operations<R: Read>(reader: R) -> Result<Vec<Operation>> {
    let definitions: Vec<Value> = serde_json::from_reader(BufReader::new(reader))?;
    definitions
        .into_iter()
        .map(Operation::from_definition)
        .collect()
}

pub fn decode_records<R: Read>(reader: R) -> Result<Vec<Collection>> {
    let document: Map<String, Value> = serde_json::from_reader(BufReader::new(reader))?;
    document
        .into_iter()
        .map(|(tag, value)| match value {
            Value::Array(records) => Ok((tag, records)),
            other => Err(MixtapeError::Decode(format!(
                "collection '{}' must be a list, found {}",
                tag,
                type_name(&other)
            ))),
        })
        .collect()
}

pub fn encode_storage<W: Write>(writer: W, storage: &Storage, pretty: bool) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, storage)?;
    } else {
        serde_json::to_writer(&mut writer, storage)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
