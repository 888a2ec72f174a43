/// Simple aggregate statistics for one conversion run.
///
/// Returned by [`crate::convert_file`] and [`crate::convert_reader`].
/// `defaulted_coordinates` counts latitude/longitude fields that failed to
/// parse and were replaced by `0.0` under [`crate::CoordinatePolicy::Lenient`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertStats {
    pub rows_read: usize,
    pub features_written: usize,
    pub defaulted_coordinates: usize,
    pub header_skipped: bool,
}
