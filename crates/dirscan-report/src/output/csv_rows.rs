/// CSV export of the record list, in discovery order.
///
/// Columns follow the `EntryRecord` fields:
/// `name,extension,is_directory,parent_directory,full_path`.
use dirscan_core::ScanResult;
use std::io::Write;

pub fn write_records<W: Write>(out: &mut W, result: &ScanResult) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if result.is_empty() {
        writer.write_record([
            "name",
            "extension",
            "is_directory",
            "parent_directory",
            "full_path",
        ])?;
    }
    for record in result {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
