/// Identification metadata for a use case.
pub trait UseCaseMetadata {
    /// Use-case index, e.g. "u101".
    fn usecase_index() -> &'static str;

    /// Technical name, e.g. "slot_booking".
    fn usecase_name() -> &'static str;

    /// Name shown in the UI.
    fn display_name() -> &'static str;

    /// One-line description of the use case.
    fn description() -> &'static str {
        ""
    }

    /// Full name of the form "u101_slot_booking".
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
