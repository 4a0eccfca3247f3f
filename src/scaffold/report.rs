use std::fmt::Write as _;

/// What happened to one layout directory during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryOutcome {
    pub relative: String,
    pub dir_created: bool,
    pub marker_created: bool,
}

/// Per-entry outcomes of a scaffold run, in layout order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub entries: Vec<EntryOutcome>,
}

impl ScaffoldReport {
    pub fn created_dirs(&self) -> usize {
        self.entries.iter().filter(|e| e.dir_created).count()
    }

    pub fn created_markers(&self) -> usize {
        self.entries.iter().filter(|e| e.marker_created).count()
    }

    /// True when the run found everything already in place.
    pub fn is_noop(&self) -> bool {
        self.entries
            .iter()
            .all(|e| !e.dir_created && !e.marker_created)
    }

    /// Lines describing pending work, used for dry runs.
    ///
    /// Only layout directories and their markers are listed. Missing parents
    /// such as `Assets/` or `Assets/Scripts/` are created along with the first
    /// listed directory below them and get no line of their own.
    pub fn format_plan(&self, base: &str, marker: &str) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            if entry.dir_created {
                let _ = writeln!(out, "  would create {}/{}/", base, entry.relative);
            }
            if entry.marker_created {
                let _ = writeln!(out, "  would create {}/{}/{}", base, entry.relative, marker);
            }
        }
        out
    }
}
