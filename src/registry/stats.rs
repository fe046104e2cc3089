use crate::model::{Approval, RequestDocument};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApprovalStats {
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
}

impl ApprovalStats {
    pub fn total(&self) -> usize {
        self.approved + self.rejected + self.pending
    }
}

pub fn approval_stats<'a, I>(documents: I) -> ApprovalStats
where
    I: IntoIterator<Item = &'a RequestDocument>,
{
    let mut stats = ApprovalStats::default();
    for document in documents {
        match document.approved {
            Approval::Approved => stats.approved += 1,
            Approval::Rejected => stats.rejected += 1,
            Approval::Pending => stats.pending += 1,
        }
    }
    stats
}

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Human-readable size in base-1024 units with at most two decimals and no
/// trailing zeros ("1.5 KB", "2 MB"). Sizes past the largest unit stay in GB.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", SIZE_UNITS[unit])
}
