#![allow(dead_code)]

use std::path::Path;
use walkdir::WalkDir;

/// Every directory under `root`, relative and `/`-joined, sorted.
pub fn collect_dirs(root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap();
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    dirs.sort();
    dirs
}

/// All directories a structure implies, including unlisted parents, sorted.
pub fn expected_dirs(directories: &[String]) -> Vec<String> {
    let mut all = std::collections::BTreeSet::new();
    for dir in directories {
        let segments: Vec<&str> = dir.split('/').collect();
        for i in 1..=segments.len() {
            all.insert(segments[..i].join("/"));
        }
    }
    all.into_iter().collect()
}
