use std::fs::File;
use std::io::{BufWriter, Write};
use anyhow::{Result, Context};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use serde::Serialize;

use crate::model::Character;

#[derive(Serialize)]
struct DatasetFileRef<'a> {
    characters: &'a [Character],
}

/// Output sink, kept concrete so `finish` can end the Brotli stream itself.
enum CastSink {
    Plain(BufWriter<File>),
    Brotli(CompressorWriter<BufWriter<File>>),
}

impl CastSink {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            CastSink::Plain(writer) => writer,
            CastSink::Brotli(writer) => writer,
        }
    }
}

pub struct CastWriter {
    sink: CastSink,
}

impl CastWriter {
    /// Creates a new CastWriter for the specified file path.
    ///
    /// Automatically enables Brotli compression if the file path ends with `.br`
    /// (e.g., `cast.json.br`). Compressed output is written compact, plain
    /// output is pretty-printed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rsaga::{CastWriter, builtin_characters};
    /// # fn main() -> anyhow::Result<()> {
    /// let mut writer = CastWriter::new("cast.json")?;
    /// writer.write_characters(builtin_characters())?;
    /// writer.finish()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(file_path: &str) -> Result<Self> {
        let file = File::create(file_path)
            .with_context(|| format!("Failed to create file: {}", file_path))?;

        let compressed = file_path.ends_with(".br");
        let sink = if compressed {
            let buf_writer = BufWriter::new(file);
            let params = BrotliEncoderParams {
                quality: 6,
                lgwin: 22,
                ..Default::default()
            };
            CastSink::Brotli(CompressorWriter::with_params(buf_writer, 4096, &params))
        } else {
            CastSink::Plain(BufWriter::new(file))
        };

        Ok(CastWriter { sink })
    }

    /// Writes the whole cast as `{"characters": [...]}`.
    pub fn write_characters(&mut self, characters: &[Character]) -> Result<()> {
        let dataset = DatasetFileRef { characters };
        let pretty = matches!(self.sink, CastSink::Plain(_));
        let writer = self.sink.writer();
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, &dataset)?;
        } else {
            serde_json::to_writer(&mut *writer, &dataset)?;
        }
        writer.write_all(b"\n")?;
        Ok(())
    }

    /// Ends the Brotli stream (if any) and flushes everything to the file.
    ///
    /// Dropping the writer without calling this loses write errors.
    pub fn finish(self) -> Result<()> {
        let mut buf_writer = match self.sink {
            CastSink::Plain(writer) => writer,
            CastSink::Brotli(mut compressor) => {
                compressor.flush().context("Failed to flush compressed cast data")?;
                // into_inner writes the stream trailer into the buffered file
                compressor.into_inner()
            }
        };
        buf_writer.flush().context("Failed to flush cast file")?;
        buf_writer
            .into_inner()
            .map_err(|err| err.into_error())
            .context("Failed to close cast file")?
            .sync_all()
            .context("Failed to sync cast file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::builtin_characters;
    use std::io::Read;

    #[test]
    fn test_finish_completes_brotli_stream() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cast.json.br");
        let path = path.to_str().unwrap();

        let mut writer = CastWriter::new(path).unwrap();
        writer.write_characters(builtin_characters()).unwrap();
        writer.finish().unwrap();

        let mut text = String::new();
        brotli::Decompressor::new(File::open(path).unwrap(), 4096)
            .read_to_string(&mut text)
            .unwrap();
        assert!(!text.contains("\n  "));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["characters"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn test_plain_output_is_pretty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cast.json");
        let path = path.to_str().unwrap();

        let mut writer = CastWriter::new(path).unwrap();
        writer.write_characters(&builtin_characters()[..1]).unwrap();
        writer.finish().unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert!(text.starts_with("{\n  \"characters\""));
        assert!(text.ends_with("}\n"));
    }
}
