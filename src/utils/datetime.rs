pub fn get_utc_iso_datetime() -> String {
    chrono::Utc::now().to_rfc3339()
}
