use std::io::{self, Write};

use serde::Serialize;

use crate::format::PLACEHOLDER;
use crate::status::StatusLevel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub status: StatusLevel,
    /// Percentage with one decimal, without the `%` sign.
    pub percent: String,
}

/// Everything a display needs for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub ram: Reading,
    pub swap: Reading,
    /// Set when either status changed since the last restyle; the display
    /// should reapply its status-dependent treatment only then.
    pub restyle: bool,
}

impl Frame {
    /// What a display shows before the first sample.
    pub fn placeholder() -> Self {
        let reading = || Reading {
            status: StatusLevel::Ok,
            percent: PLACEHOLDER.to_string(),
        };
        Frame {
            ram: reading(),
            swap: reading(),
            restyle: true,
        }
    }
}

pub trait DisplaySink {
    fn update(&mut self, frame: &Frame);
}

impl<T: DisplaySink + ?Sized> DisplaySink for Box<T> {
    fn update(&mut self, frame: &Frame) {
        (**self).update(frame)
    }
}

/// One human-readable line per tick.
pub struct TextSink<W: Write> {
    writer: W,
    ram_class: &'static str,
    swap_class: &'static str,
}

impl TextSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            ram_class: StatusLevel::Ok.style_class(),
            swap_class: StatusLevel::Ok.style_class(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, frame: &Frame) -> io::Result<()> {
        writeln!(
            self.writer,
            "RAM {}% used [{}] | Swap {}% used [{}]",
            frame.ram.percent, self.ram_class, frame.swap.percent, self.swap_class
        )?;
        self.writer.flush()
    }
}

impl<W: Write> DisplaySink for TextSink<W> {
    fn update(&mut self, frame: &Frame) {
        if frame.restyle {
            self.ram_class = frame.ram.status.style_class();
            self.swap_class = frame.swap.status.style_class();
        }
        if let Err(err) = self.write_line(frame) {
            tracing::warn!(error = %err, "text sink write failed");
        }
    }
}

/// One JSON object per tick.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl JsonSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_frame(&mut self, frame: &Frame) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, frame)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}

impl<W: Write> DisplaySink for JsonSink<W> {
    fn update(&mut self, frame: &Frame) {
        if let Err(err) = self.write_frame(frame) {
            tracing::warn!(error = %err, "json sink write failed");
        }
    }
}
