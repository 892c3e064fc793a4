//! Encoding seam: frames leave the driver here, strictly in order.

use std::io::Write;

use serde::Serialize;
use thiserror::Error;

use crate::canvas::DrawOp;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub trait Encoder<F: ?Sized> {
    fn push(&mut self, index: usize, figure: &F) -> Result<(), EncodeError>;
    fn finish(&mut self) -> Result<(), EncodeError>;
}

#[derive(Serialize)]
struct Line<'a> {
    index: usize,
    ops: &'a [DrawOp],
}

/// Writes one JSON object per frame: `{"index": i, "ops": [...]}`.
pub struct JsonLinesEncoder<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> JsonLinesEncoder<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Encoder<[DrawOp]> for JsonLinesEncoder<W> {
    fn push(&mut self, index: usize, figure: &[DrawOp]) -> Result<(), EncodeError> {
        serde_json::to_writer(&mut self.out, &Line { index, ops: figure })?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), EncodeError> {
        self.out.flush()?;
        Ok(())
    }
}
