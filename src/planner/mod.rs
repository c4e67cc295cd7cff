//! Segment boundary planning
//!
//! Pure computation of segment windows from a media duration. No I/O and no
//! failure modes: every non-negative duration is a valid input.

use serde::{Deserialize, Serialize};

/// Default segment window length in seconds
pub const DEFAULT_SEGMENT_SECONDS: u64 = 60;

/// One bounded time-range slice of the source media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based segment index
    pub index: usize,
    /// Start second, inclusive
    pub start: u64,
    /// End second, exclusive
    pub end: u64,
}

impl Segment {
    /// Segment length in seconds
    pub fn length(&self) -> u64 {
        self.end - self.start
    }
}

/// Compute the segment plan for a media duration using the default window.
///
/// Segments partition `[0, duration)` into consecutive, non-overlapping
/// windows of at most 60 seconds; the final segment is clipped to the
/// duration. A zero duration yields an empty plan.
pub fn plan(duration_seconds: u64) -> Vec<Segment> {
    plan_with(duration_seconds, DEFAULT_SEGMENT_SECONDS)
}

/// Compute the segment plan with an explicit window length.
pub fn plan_with(duration_seconds: u64, segment_seconds: u64) -> Vec<Segment> {
    assert!(segment_seconds > 0, "segment window must be positive");

    (0..duration_seconds)
        .step_by(segment_seconds as usize)
        .enumerate()
        .map(|(i, start)| Segment {
            index: i + 1,
            start,
            end: (start + segment_seconds).min(duration_seconds),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_partitions(duration: u64, segments: &[Segment]) {
        let mut expected_start = 0;
        for (i, seg) in segments.iter().enumerate() {
            assert_eq!(seg.index, i + 1);
            assert_eq!(seg.start, expected_start, "segments must be contiguous");
            assert!(seg.start < seg.end);
            assert!(seg.length() <= DEFAULT_SEGMENT_SECONDS);
            expected_start = seg.end;
        }
        assert_eq!(expected_start, duration, "segments must cover [0, duration)");
    }

    #[test]
    fn zero_duration_yields_empty_plan() {
        assert!(plan(0).is_empty());
    }

    #[test]
    fn short_video_yields_single_clipped_segment() {
        let segments = plan(45);
        assert_eq!(
            segments,
            vec![Segment {
                index: 1,
                start: 0,
                end: 45
            }]
        );
    }

    #[test]
    fn exact_multiple_yields_full_windows_only() {
        let segments = plan(120);
        assert_eq!(segments.len(), 2);
        assert_partitions(120, &segments);
        assert!(segments.iter().all(|s| s.length() == 60));
    }

    #[test]
    fn trailing_remainder_is_clipped() {
        let segments = plan(150);
        assert_eq!(segments.len(), 3);
        assert_partitions(150, &segments);
        assert_eq!(segments[0], Segment { index: 1, start: 0, end: 60 });
        assert_eq!(segments[1], Segment { index: 2, start: 60, end: 120 });
        assert_eq!(segments[2], Segment { index: 3, start: 120, end: 150 });
    }

    #[test]
    fn one_second_over_a_window_adds_a_short_segment() {
        let segments = plan(61);
        assert_eq!(segments.len(), 2);
        assert_partitions(61, &segments);
        assert_eq!(segments[1].length(), 1);
    }

    #[test]
    fn count_matches_ceiling_division() {
        for duration in [1, 59, 60, 61, 119, 120, 3600, 3601] {
            let segments = plan(duration);
            let expected = (duration + DEFAULT_SEGMENT_SECONDS - 1) / DEFAULT_SEGMENT_SECONDS;
            assert_eq!(segments.len() as u64, expected, "duration {}", duration);
            assert_partitions(duration, &segments);
        }
    }

    #[test]
    fn custom_window_length_is_honored() {
        let segments = plan_with(25, 10);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], Segment { index: 3, start: 20, end: 25 });
    }
}
