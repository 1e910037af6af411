//! Output sinks.
//!
//! A [`Sink`] accepts one rendered record per call. It takes `&self` so a
//! single sink can back several loggers; serializing concurrent writes is the
//! sink's job, not the logger's.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub trait Sink: Send + Sync {
    /// Write one buffer, returning how many bytes were accepted.
    fn write(&self, buf: &[u8]) -> io::Result<usize>;
}

impl Sink for io::Stdout {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut out = self.lock();
        out.write_all(buf)?;
        out.flush()?;
        Ok(buf.len())
    }
}

impl Sink for io::Stderr {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut out = self.lock();
        out.write_all(buf)?;
        out.flush()?;
        Ok(buf.len())
    }
}

/// Any `Write` (a file, a `Vec<u8>`, a socket) behind a lock.
impl<W: Write + Send> Sink for Mutex<W> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        let mut writer = self.lock();
        writer.write_all(buf)?;
        writer.flush()?;
        Ok(buf.len())
    }
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&self, buf: &[u8]) -> io::Result<usize> {
        (**self).write(buf)
    }
}
