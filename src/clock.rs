use std::mem::MaybeUninit;

// Not bound by the libc crate on unix targets.
unsafe extern "C" {
    fn tzset();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DstStatus {
    InEffect,
    NotInEffect,
    Unknown,
}

impl DstStatus {
    #[inline]
    pub fn flag_bit(self) -> bool {
        matches!(self, DstStatus::InEffect)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Moment {
    pub seconds: u32,
    pub dst: DstStatus,
}

impl Moment {
    pub fn capture() -> Self {
        let now = unsafe {
            tzset();
            libc::time(std::ptr::null_mut())
        };
        Self::at(now)
    }

    pub(crate) fn at(now: libc::time_t) -> Self {
        let seconds = now.wrapping_sub(epoch_2000()) as u32;
        Self {
            seconds,
            dst: dst_status(now),
        }
    }
}

pub(crate) fn epoch_2000() -> libc::time_t {
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    tm.tm_year = 2000 - 1900;
    tm.tm_mon = 0;
    tm.tm_mday = 1;
    tm.tm_isdst = 0;
    unsafe { libc::mktime(&mut tm) }
}

fn dst_status(now: libc::time_t) -> DstStatus {
    let mut tm = MaybeUninit::<libc::tm>::uninit();
    let ptr = unsafe { libc::localtime_r(&now, tm.as_mut_ptr()) };
    if ptr.is_null() {
        return DstStatus::Unknown;
    }
    let tm = unsafe { tm.assume_init() };
    match tm.tm_isdst {
        0 => DstStatus::NotInEffect,
        d if d > 0 => DstStatus::InEffect,
        _ => DstStatus::Unknown,
    }
}
