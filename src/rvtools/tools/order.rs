use crate::rvtools::tools::metadata::METADATA_SHEET;

/// Worksheet order of a native RVTools export.
pub const STANDARD_SHEET_ORDER: [&str; 27] = [
    "vInfo",
    "vCPU",
    "vMemory",
    "vDisk",
    "vPartition",
    "vNetwork",
    "vCD",
    "vUSB",
    "vSnapshot",
    "vTools",
    "vSource",
    "vRP",
    "vCluster",
    "vHost",
    "vHBA",
    "vNIC",
    "vSwitch",
    "vPort",
    "dvSwitch",
    "dvPort",
    "vSC_VMK",
    "vDatastore",
    "vMultiPath",
    "vLicense",
    "vFileInfo",
    "vHealth",
    "vMetaData",
];

/// Computes the final worksheet order.
///
/// Known RVTools tabs come first in their standard position, followed by any
/// other processed sheets in processing order, with the summary sheet last
/// unless it already took its standard slot.
pub fn order_sheets(processed: &[String], metadata_sheet: &str) -> Vec<String> {
    let mut ordered: Vec<String> = STANDARD_SHEET_ORDER
        .iter()
        .filter(|name| {
            processed.iter().any(|sheet| sheet == *name)
                || (**name == METADATA_SHEET && metadata_sheet == METADATA_SHEET)
        })
        .map(|name| name.to_string())
        .collect();

    for sheet in processed {
        if !ordered.contains(sheet) {
            ordered.push(sheet.clone());
        }
    }

    if !ordered.iter().any(|sheet| sheet == metadata_sheet) {
        ordered.push(metadata_sheet.to_string());
    }

    ordered
}
