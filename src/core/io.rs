//! I/O abstraction layer
//!
//! Provides optimized file reading with configurable buffer sizes, optional
//! memory mapping for large files, and transparent decompression of gzip
//! and bzip2 pedigree files.

use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Large buffer size for high-throughput I/O (1MB)
pub const LARGE_BUFFER_SIZE: usize = 1024 * 1024;

/// Threshold for using memory mapping (100MB)
pub const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;

/// I/O strategy selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IoStrategy {
    /// Use buffered reading with configurable buffer size
    Buffered(usize),
    /// Use memory mapping for the entire file
    MemoryMapped,
    /// Automatically select based on file size
    #[default]
    Auto,
}

/// Compression format for pedigree files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionFormat {
    /// Plain text (uncompressed)
    Plain,
    /// Gzip compressed (.gz)
    Gzip,
    /// Bzip2 compressed (.bz2)
    Bzip2,
}

/// Detect compression format from file path and/or content
pub fn detect_compression(path: &Path) -> io::Result<CompressionFormat> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    // First check by extension
    if extension == "gz" {
        return Ok(CompressionFormat::Gzip);
    }
    if extension == "bz2" {
        return Ok(CompressionFormat::Bzip2);
    }

    // Then check by magic bytes
    let mut file = File::open(path)?;
    let mut magic = [0u8; 3];
    let bytes_read = file.read(&mut magic)?;

    if bytes_read >= 2 && magic[0] == 0x1f && magic[1] == 0x8b {
        return Ok(CompressionFormat::Gzip);
    }
    // BZ2 magic: "BZh" (0x42 0x5a 0x68)
    if bytes_read >= 3 && magic[0] == 0x42 && magic[1] == 0x5a && magic[2] == 0x68 {
        return Ok(CompressionFormat::Bzip2);
    }

    Ok(CompressionFormat::Plain)
}

/// Open a pedigree file as a line-oriented reader
///
/// Compressed files are decompressed on the fly; plain files go through
/// [`SmartReader`] with the given strategy.
pub fn open_ped<P: AsRef<Path>>(path: P, strategy: IoStrategy) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    match detect_compression(path)? {
        CompressionFormat::Gzip => {
            let decoder = flate2::read::GzDecoder::new(File::open(path)?);
            Ok(Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, decoder)))
        }
        CompressionFormat::Bzip2 => {
            let decoder = bzip2::read::BzDecoder::new(File::open(path)?);
            Ok(Box::new(BufReader::with_capacity(DEFAULT_BUFFER_SIZE, decoder)))
        }
        CompressionFormat::Plain => Ok(Box::new(SmartReader::open(path, strategy)?)),
    }
}

/// A smart reader that automatically selects the optimal I/O strategy
pub enum SmartReader {
    /// Buffered reader for smaller files or streaming
    Buffered(BufReader<File>),
    /// Memory-mapped reader for large files
    Mapped(MappedReader),
}

/// Memory-mapped file reader
pub struct MappedReader {
    mmap: Mmap,
    position: usize,
}

impl MappedReader {
    /// Create a new memory-mapped reader
    pub fn new(file: &File) -> io::Result<Self> {
        // SAFETY: We assume the file won't be modified while mapped
        let mmap = unsafe { Mmap::map(file)? };
        Ok(Self { mmap, position: 0 })
    }

    /// Get the entire file content as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap
    }

    /// Get file size
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }
}

impl Read for MappedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.mmap[self.position..];
        let to_read = std::cmp::min(buf.len(), remaining.len());
        buf[..to_read].copy_from_slice(&remaining[..to_read]);
        self.position += to_read;
        Ok(to_read)
    }
}

impl BufRead for MappedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(&self.mmap[self.position..])
    }

    fn consume(&mut self, amt: usize) {
        self.position = std::cmp::min(self.position + amt, self.mmap.len());
    }
}

impl SmartReader {
    /// Open a file with the specified I/O strategy
    pub fn open<P: AsRef<Path>>(path: P, strategy: IoStrategy) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let metadata = file.metadata()?;
        let file_size = metadata.len();

        match strategy {
            IoStrategy::Buffered(buf_size) => {
                Ok(SmartReader::Buffered(BufReader::with_capacity(buf_size, file)))
            }
            IoStrategy::MemoryMapped => Ok(SmartReader::Mapped(MappedReader::new(&file)?)),
            IoStrategy::Auto => {
                if file_size >= MMAP_THRESHOLD {
                    // Use memory mapping for large files
                    Ok(SmartReader::Mapped(MappedReader::new(&file)?))
                } else {
                    // Use buffered reading for smaller files
                    let buf_size = if file_size > 10 * 1024 * 1024 {
                        LARGE_BUFFER_SIZE
                    } else {
                        DEFAULT_BUFFER_SIZE
                    };
                    Ok(SmartReader::Buffered(BufReader::with_capacity(buf_size, file)))
                }
            }
        }
    }

    /// Open with default auto strategy
    pub fn open_auto<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Self::open(path, IoStrategy::Auto)
    }

    /// Check if using memory mapping
    pub fn is_mapped(&self) -> bool {
        matches!(self, SmartReader::Mapped(_))
    }
}

impl Read for SmartReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            SmartReader::Buffered(reader) => reader.read(buf),
            SmartReader::Mapped(reader) => reader.read(buf),
        }
    }
}

impl BufRead for SmartReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            SmartReader::Buffered(reader) => reader.fill_buf(),
            SmartReader::Mapped(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            SmartReader::Buffered(reader) => reader.consume(amt),
            SmartReader::Mapped(reader) => reader.consume(amt),
        }
    }
}

/// Line iterator that reuses a buffer to avoid allocations
pub struct LineIterator<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next line into the internal buffer
    /// Returns None at EOF, Some(Ok(&str)) on success, Some(Err) on error
    pub fn next_line(&mut self) -> Option<io::Result<&str>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                // Remove trailing newline
                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok(&self.buffer))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
