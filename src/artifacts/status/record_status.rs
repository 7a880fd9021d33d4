use serde::{Deserialize, Serialize};

const LABEL_WIDTH: usize = 11;

/// Lifecycle state of a tracked file
///
/// Persisted as the integer code of each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum RecordStatus {
    /// Seen on disk, never staged or committed
    Untracked,
    /// Tracked, but the content changed since the last known hash
    Modified,
    /// Selected for the next commit
    Staged,
    /// Included in some commit's manifest
    Committed,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 4] = [
        RecordStatus::Untracked,
        RecordStatus::Modified,
        RecordStatus::Staged,
        RecordStatus::Committed,
    ];

    pub fn is_tracked(&self) -> bool {
        !matches!(self, RecordStatus::Untracked)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Untracked => "untracked",
            RecordStatus::Modified => "modified",
            RecordStatus::Staged => "staged",
            RecordStatus::Committed => "committed",
        }
    }

    /// Section heading used by the status listing
    pub fn heading(&self) -> &'static str {
        match self {
            RecordStatus::Untracked => "Untracked files:",
            RecordStatus::Modified => "Changes not staged for commit:",
            RecordStatus::Staged => "Changes to be committed:",
            RecordStatus::Committed => "Committed files:",
        }
    }

    /// Fixed-width label printed in front of a file name
    pub fn label(&self) -> String {
        format!("{:<width$}", format!("{}:", self.as_str()), width = LABEL_WIDTH)
    }
}

impl From<RecordStatus> for u8 {
    fn from(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Untracked => 0,
            RecordStatus::Modified => 1,
            RecordStatus::Staged => 2,
            RecordStatus::Committed => 3,
        }
    }
}

impl TryFrom<u8> for RecordStatus {
    type Error = anyhow::Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(RecordStatus::Untracked),
            1 => Ok(RecordStatus::Modified),
            2 => Ok(RecordStatus::Staged),
            3 => Ok(RecordStatus::Committed),
            _ => Err(anyhow::anyhow!("Invalid record status code: {}", code)),
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
