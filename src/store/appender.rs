use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;

use tracing::debug;

use crate::checksum;
use crate::clock::{DstStatus, Moment};
use crate::record::Record;

use super::error::StoreError;
use super::FILE_HEADER_SIZE;

#[derive(Debug, Clone, Copy)]
pub struct AppendReceipt {
    pub records: u16,
    pub file_size: u64,
    pub created: bool,
    pub dst: DstStatus,
}

pub fn append(path: &Path, aux: bool, message: &str) -> Result<AppendReceipt, StoreError> {
    let (mut file, created) = open_or_create(path)?;
    let _lock = ExclusiveLock::acquire(&file)?;

    let len = file.metadata()?.len();
    let count = read_record_count(&mut file, len)?;
    if count == u16::MAX {
        return Err(StoreError::RecordLimit);
    }
    let sequence = count + 1;

    file.seek(SeekFrom::Start(0))?;
    file.write_all(&sequence.to_be_bytes())?;
    if sequence == 1 {
        file.write_all(&[0u8; 2])?;
        file.seek(SeekFrom::End(0))?;
    } else {
        // The old trailer byte becomes the first byte of the new record.
        file.seek(SeekFrom::End(-1))?;
    }

    let moment = Moment::capture();
    let record = Record::new(sequence, aux, moment.dst.flag_bit(), moment.seconds, message);
    file.write_all(&record.encode())?;

    file.seek(SeekFrom::Start(0))?;
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;
    let trailer = checksum::fold(&contents);
    file.write_all(&[trailer])?;

    let file_size = contents.len() as u64 + 1;
    debug!(path = %path.display(), records = sequence, file_size, "appended record");

    Ok(AppendReceipt {
        records: sequence,
        file_size,
        created,
        dst: moment.dst,
    })
}

fn open_or_create(path: &Path) -> Result<(File, bool), StoreError> {
    match OpenOptions::new().read(true).write(true).open(path) {
        Ok(file) => Ok((file, false)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            let file = OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .open(path)?;
            Ok((file, true))
        }
        Err(err) => Err(err.into()),
    }
}

fn read_record_count(file: &mut File, len: u64) -> Result<u16, StoreError> {
    if len == 0 {
        return Ok(0);
    }
    if len < FILE_HEADER_SIZE as u64 {
        return Err(StoreError::TruncatedFile {
            expected: FILE_HEADER_SIZE as u64,
            actual: len,
        });
    }
    let mut header = [0u8; 2];
    file.seek(SeekFrom::Start(0))?;
    file.read_exact(&mut header)?;
    Ok(u16::from_be_bytes(header))
}

struct ExclusiveLock {
    fd: libc::c_int,
}

impl ExclusiveLock {
    fn acquire(file: &File) -> Result<Self, StoreError> {
        let fd = file.as_raw_fd();
        let rc = unsafe { libc::flock(fd, libc::LOCK_EX) };
        if rc != 0 {
            return Err(std::io::Error::last_os_error().into());
        }
        Ok(Self { fd })
    }
}

impl Drop for ExclusiveLock {
    fn drop(&mut self) {
        unsafe {
            libc::flock(self.fd, libc::LOCK_UN);
        }
    }
}
