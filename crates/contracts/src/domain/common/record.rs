use super::RecordId;

/// Record of one page's collection
///
/// Instance side gives the id; the static side names the collection for
/// routes, logs and UI titles.
pub trait Record: Clone {
    fn id(&self) -> RecordId;

    // ============================================================================
    // Collection metadata
    // ============================================================================

    /// Index of the record type in the system (e.g. "a007")
    fn record_index() -> &'static str;

    /// Collection name used in routes (e.g. "fees")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Fee")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Fees")
    fn list_name() -> &'static str;

    /// Full name of the record type (e.g. "a007_fees")
    fn full_name() -> String {
        format!("{}_{}", Self::record_index(), Self::collection_name())
    }
}
