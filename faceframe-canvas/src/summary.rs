use std::fmt;

/// Outcome of one completed detection pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionSummary {
    /// Number of regions rendered, equal to the detector's output length.
    pub count: usize,
}

impl fmt::Display for DetectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Faces Detected", self.count)
    }
}

/// Receives the summary line after every overlay render.
///
/// The embedding environment decides where the text goes and how the count
/// is emphasized; without a sink the summary is only logged.
pub trait SummarySink {
    fn show(&mut self, summary: &DetectionSummary);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_text() {
        assert_eq!(DetectionSummary { count: 0 }.to_string(), "0 Faces Detected");
        assert_eq!(DetectionSummary { count: 1 }.to_string(), "1 Faces Detected");
        assert_eq!(DetectionSummary { count: 3 }.to_string(), "3 Faces Detected");
    }
}
