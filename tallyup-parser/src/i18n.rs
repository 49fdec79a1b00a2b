#[cfg(all(feature = "he", feature = "en"))]
compile_error!("Cannot enable both 'he' and 'en' features at the same time");

#[cfg(feature = "he")]
pub fn missing_field_detail(expected: usize, found: usize) -> String {
    format!("נדרשים {expected} שדות מופרדים בפסיק, נמצאו {found}")
}

#[cfg(not(feature = "he"))]
pub fn missing_field_detail(expected: usize, found: usize) -> String {
    format!("Expected {expected} comma-separated fields, found {found}")
}
