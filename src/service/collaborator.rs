//! Source and sink traits, plus JSON stream implementations.
//!
//! A source hands out one game at a time; a sink accepts one result at a
//! time. Both are synchronous. Anything asynchronous (HTTP, queues) is
//! expected to be wrapped by the caller behind these traits.

use std::io::{Read, Write};

use serde_json::de::IoRead;
use serde_json::StreamDeserializer;

use super::data::{GameData, GameResult};
use super::error::{Result, ServiceError};

/// Supplies game parameters.
pub trait GameSource {
    /// Fetch the next game.
    ///
    /// Returns `ServiceError::Exhausted` once no games are left.
    fn fetch(&mut self) -> Result<GameData>;
}

/// Accepts game results.
pub trait GameSink {
    /// Submit the result of a finished game.
    fn submit(&mut self, result: &GameResult) -> Result<()>;
}

/// Reads a stream of whitespace-separated `GameData` JSON documents.
pub struct JsonSource<R: Read> {
    documents: StreamDeserializer<'static, IoRead<R>, GameData>,
}

impl<R: Read> JsonSource<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            documents: serde_json::Deserializer::from_reader(reader).into_iter(),
        }
    }
}

impl<R: Read> GameSource for JsonSource<R> {
    fn fetch(&mut self) -> Result<GameData> {
        match self.documents.next() {
            Some(Ok(data)) => Ok(data),
            Some(Err(e)) if e.is_io() => Err(ServiceError::Io(e.into())),
            Some(Err(e)) => Err(ServiceError::Json(e)),
            None => Err(ServiceError::Exhausted),
        }
    }
}

/// Writes each `GameResult` as one JSON line.
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    /// Wrap a writer. Results are written compactly, one per line.
    pub fn new(writer: W) -> Self {
        Self { writer, pretty: false }
    }

    /// Pretty-print results instead of one line each.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Unwrap the inner writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> GameSink for JsonSink<W> {
    fn submit(&mut self, result: &GameResult) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, result)?;
        } else {
            serde_json::to_writer(&mut self.writer, result)?;
        }
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ParticipantId;

    #[test]
    fn test_json_source_reads_documents_in_order() {
        let input = r#"{"id":1,"children_count":5,"eliminate_each":2}
            {"id":2,"children_count":3,"eliminate_each":1}"#;
        let mut source = JsonSource::new(input.as_bytes());

        assert_eq!(source.fetch().unwrap(), GameData::new(1, 5, 2));
        assert_eq!(source.fetch().unwrap(), GameData::new(2, 3, 1));
        assert!(matches!(source.fetch(), Err(ServiceError::Exhausted)));
    }

    #[test]
    fn test_json_source_empty_input() {
        let mut source = JsonSource::new("".as_bytes());
        assert!(matches!(source.fetch(), Err(ServiceError::Exhausted)));
    }

    #[test]
    fn test_json_source_malformed() {
        let mut source = JsonSource::new(r#"{"id":1,"children_count":"five"}"#.as_bytes());
        assert!(matches!(source.fetch(), Err(ServiceError::Json(_))));
    }

    #[test]
    fn test_json_sink_writes_lines() {
        let mut sink = JsonSink::new(Vec::new());
        let result = GameResult {
            id: 4,
            last_child: ParticipantId::new(1),
            order_of_elimination: vec![ParticipantId::new(2)],
        };

        sink.submit(&result).unwrap();
        sink.submit(&result).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let line = r#"{"id":4,"last_child":1,"order_of_elimination":[2]}"#;
        assert_eq!(written, format!("{line}\n{line}\n"));
    }

    #[test]
    fn test_json_sink_pretty() {
        let mut sink = JsonSink::new(Vec::new()).pretty();
        let result = GameResult {
            id: 1,
            last_child: ParticipantId::new(1),
            order_of_elimination: Vec::new(),
        };
        sink.submit(&result).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.contains("\n  \"last_child\": 1"));
        assert_eq!(GameResult::from_json(&written).unwrap(), result);
    }
}
