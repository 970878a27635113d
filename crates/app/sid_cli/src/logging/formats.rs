use std::io::Write;

use flexi_logger::DeferredNow;
use log::Record;

/// `[LEVEL] message`, no timestamp.
pub fn cli_format(
    w: &mut dyn Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(w, "[{}] {}", record.level(), record.args())
}
