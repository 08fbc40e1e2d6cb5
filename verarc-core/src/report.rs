use std::collections::HashMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::compare::Verdict;
use crate::hash::ContentHash;

pub const ALL_MATCHED: &str = "All files matched!";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FindingKind {
    Missing {
        archive: ContentHash,
    },
    Mismatch {
        live: ContentHash,
        archive: ContentHash,
    },
}

/// A reportable discrepancy for one file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    pub kind: FindingKind,
}

impl Finding {
    /// `None` for a match.
    pub fn from_verdict(verdict: Verdict) -> Option<Self> {
        match verdict {
            Verdict::Match => None,
            Verdict::Missing { path, archive } => Some(Self {
                path,
                kind: FindingKind::Missing { archive },
            }),
            Verdict::Mismatch {
                path,
                live,
                archive,
            } => Some(Self {
                path,
                kind: FindingKind::Mismatch { live, archive },
            }),
        }
    }

    pub fn file_name(&self) -> &OsStr {
        self.path.file_name().unwrap_or(self.path.as_os_str())
    }

    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("/"))
    }

    fn render_line(&self) -> String {
        let name = self.file_name().to_string_lossy();
        match &self.kind {
            FindingKind::Missing { archive } => {
                format!("- \"{name}\" missing, {}", archive.short())
            }
            FindingKind::Mismatch { live, archive } => {
                format!("- \"{name}\" mismatch, {} ≠ {}", live.short(), archive.short())
            }
        }
    }
}

/// Findings in the order the traversal produced them.
#[derive(Clone, Debug, Default)]
pub struct Findings {
    items: Vec<Finding>,
}

impl Findings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches are dropped.
    pub fn push(&mut self, verdict: Verdict) {
        if let Some(f) = Finding::from_verdict(verdict) {
            self.items.push(f);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Groups by parent directory. Groups keep the order in which their
    /// directory was first seen; findings inside a group are sorted by file
    /// name.
    pub fn into_report(self) -> Report {
        let mut groups: Vec<Group> = Vec::new();
        let mut by_dir: HashMap<PathBuf, usize> = HashMap::new();

        for finding in self.items {
            let dir = finding.dir().to_path_buf();
            let slot = match by_dir.get(&dir) {
                Some(&i) => i,
                None => {
                    by_dir.insert(dir.clone(), groups.len());
                    groups.push(Group {
                        dir,
                        findings: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            groups[slot].findings.push(finding);
        }

        for g in &mut groups {
            g.findings.sort_by(|a, b| a.file_name().cmp(b.file_name()));
        }

        Report { groups }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    pub dir: PathBuf,
    pub findings: Vec<Finding>,
}

/// Findings clustered by directory, ready to print.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    groups: Vec<Group>,
}

impl Report {
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_clean(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.groups.iter().map(|g| g.findings.len()).sum()
    }

    /// Newline-terminated text: the success line, or one block per group
    /// separated by a blank line.
    pub fn render(&self) -> String {
        if self.groups.is_empty() {
            return format!("{ALL_MATCHED}\n");
        }
        let mut out = String::new();
        for (i, g) in self.groups.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&g.dir.to_string_lossy());
            out.push('\n');
            for f in &g.findings {
                out.push_str(&f.render_line());
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing(path: &str, body: &str) -> Verdict {
        Verdict::Missing {
            path: PathBuf::from(path),
            archive: ContentHash::of_bytes(body.as_bytes()),
        }
    }

    fn mismatch(path: &str, live: &str, archive: &str) -> Verdict {
        Verdict::Mismatch {
            path: PathBuf::from(path),
            live: ContentHash::of_bytes(live.as_bytes()),
            archive: ContentHash::of_bytes(archive.as_bytes()),
        }
    }

    #[test]
    fn no_findings_renders_success_line() {
        let mut findings = Findings::new();
        findings.push(Verdict::Match);
        assert!(findings.is_empty());

        let report = findings.into_report();
        assert!(report.is_clean());
        assert_eq!(report.render(), "All files matched!\n");
    }

    #[test]
    fn groups_keep_first_seen_order_and_sort_by_name() {
        let mut findings = Findings::new();
        findings.push(missing("/z/b.txt", "bye"));
        findings.push(missing("/a/q.txt", "bye"));
        findings.push(Verdict::Match);
        findings.push(mismatch("/z/a.txt", "new", "old"));
        assert_eq!(findings.len(), 3);

        let report = findings.into_report();
        let dirs: Vec<_> = report.groups().iter().map(|g| g.dir.clone()).collect();
        assert_eq!(dirs, vec![PathBuf::from("/z"), PathBuf::from("/a")]);

        let names: Vec<_> = report.groups()[0]
            .findings
            .iter()
            .map(|f| f.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(report.finding_count(), 3);
    }

    #[test]
    fn shared_directory_yields_one_group() {
        let mut findings = Findings::new();
        findings.push(missing("/d/one", "1"));
        findings.push(missing("/e/x", "x"));
        findings.push(missing("/d/two", "2"));

        let report = findings.into_report();
        assert_eq!(report.groups().len(), 2);
        assert_eq!(report.groups()[0].findings.len(), 2);
    }

    #[test]
    fn renders_missing_and_mismatch_lines() {
        let mut findings = Findings::new();
        findings.push(missing("/b/y.txt", "bye"));
        findings.push(mismatch("/c/z.txt", "new", "old"));

        let expected = "/b\n\
                        - \"y.txt\" missing, b49f425a\n\
                        \n\
                        /c\n\
                        - \"z.txt\" mismatch, 11507a0e ≠ cba06b57\n";
        let report = findings.into_report();
        assert_eq!(report.render(), expected);
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn file_at_root_groups_under_root() {
        let mut findings = Findings::new();
        findings.push(missing("/x.txt", "hi"));
        let report = findings.into_report();
        assert_eq!(report.groups()[0].dir, PathBuf::from("/"));
        assert!(report.render().starts_with("/\n- \"x.txt\" missing, 8f434346\n"));
    }
}
