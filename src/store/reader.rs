use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use crate::record::{RecordView, RECORD_SIZE};

use super::error::StoreError;
use super::FILE_HEADER_SIZE;

#[derive(Debug)]
pub struct LogReader {
    mmap: Mmap,
    records: u16,
}

impl LogReader {
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        let min = (FILE_HEADER_SIZE + 1) as u64;
        if len < min {
            return Err(StoreError::TruncatedFile {
                expected: min,
                actual: len,
            });
        }
        let mmap = unsafe { Mmap::map(&file)? };
        let records = u16::from_be_bytes([mmap[0], mmap[1]]);
        debug!(path = %path.display(), records, len, "opened log for dump");
        Ok(Self { mmap, records })
    }

    #[inline]
    pub fn record_count(&self) -> u16 {
        self.records
    }

    #[inline]
    pub fn trailer_checksum(&self) -> u8 {
        self.mmap[self.mmap.len() - 1]
    }

    pub fn iter(&self) -> RecordIter<'_> {
        RecordIter {
            data: &self.mmap[..],
            next: 0,
            count: self.records,
        }
    }
}

pub struct RecordIter<'a> {
    data: &'a [u8],
    next: u16,
    count: u16,
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = Result<RecordView<'a>, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let start = FILE_HEADER_SIZE + self.next as usize * RECORD_SIZE;
        let end = start + RECORD_SIZE;
        if end > self.data.len() {
            self.next = self.count;
            return Some(Err(StoreError::TruncatedFile {
                expected: end as u64,
                actual: self.data.len() as u64,
            }));
        }
        self.next += 1;
        let bytes: &[u8; RECORD_SIZE] = self.data[start..end].try_into().unwrap();
        Some(Ok(RecordView::new(bytes)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some((self.count - self.next) as usize))
    }
}
