pub mod checksum;
pub mod clock;
pub mod record;
pub mod shell;
pub mod store;
