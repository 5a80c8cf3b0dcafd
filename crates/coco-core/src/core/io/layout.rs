use crate::core::models::frame::{FRAME_DIR_PREFIX, Frame, FrameIndex};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Directory not found: '{path}'", path = path.display())]
    NotADirectory { path: PathBuf },
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Parses a canonical frame directory name (`frame_<n>`, `n >= 1`, no sign, no leading zeros).
pub fn parse_frame_dir_name(name: &str) -> Option<FrameIndex> {
    let digits = name.strip_prefix(FRAME_DIR_PREFIX)?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    digits.parse().ok()
}

// Canonical digits that do not fit a `FrameIndex`.
fn index_out_of_range(name: &str) -> bool {
    name.strip_prefix(FRAME_DIR_PREFIX).is_some_and(|digits| {
        !digits.is_empty()
            && !digits.starts_with('0')
            && digits.bytes().all(|b| b.is_ascii_digit())
            && digits.parse::<FrameIndex>().is_err()
    })
}

/// Lists the frames of the system rooted at `system_root`, ascending by numeric index.
///
/// # Errors
///
/// Returns [`LayoutError::NotADirectory`] if `system_root` does not exist or is not a
/// directory, and [`LayoutError::Io`] if the directory cannot be listed.
pub fn locate_frames(system_root: &Path) -> Result<Vec<Frame>, LayoutError> {
    if !system_root.is_dir() {
        return Err(LayoutError::NotADirectory {
            path: system_root.to_path_buf(),
        });
    }

    let mut frames = Vec::new();
    for entry in read_dir(system_root)? {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !name.starts_with(FRAME_DIR_PREFIX) {
            continue;
        }
        match parse_frame_dir_name(name) {
            Some(index) if path.is_dir() => frames.push(Frame::new(index, path.clone())),
            Some(_) => trace!("Ignoring non-directory entry {:?}", path),
            None if index_out_of_range(name) => warn!(
                "Ignoring frame directory {:?}: index exceeds {}",
                name,
                FrameIndex::MAX
            ),
            None => debug!("Ignoring non-canonical frame directory name {:?}", name),
        }
    }

    frames.sort_by_key(|f| f.index);
    Ok(frames)
}

/// Lists visible subdirectories of `data_root` (skipping names starting with `.` or `__`),
/// sorted by name.
pub fn list_candidate_systems(data_root: &Path) -> Result<Vec<(String, PathBuf)>, LayoutError> {
    if !data_root.is_dir() {
        return Err(LayoutError::NotADirectory {
            path: data_root.to_path_buf(),
        });
    }

    let mut systems = Vec::new();
    for entry in read_dir(data_root)? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || name.starts_with("__") {
            continue;
        }
        systems.push((name.to_string(), path.clone()));
    }
    systems.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(systems)
}

fn read_dir(dir: &Path) -> Result<Vec<fs::DirEntry>, LayoutError> {
    let to_err = |source| LayoutError::Io {
        path: dir.to_path_buf(),
        source,
    };
    fs::read_dir(dir)
        .map_err(to_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(to_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_accepts_canonical_names() {
        assert_eq!(parse_frame_dir_name("frame_1"), Some(1));
        assert_eq!(parse_frame_dir_name("frame_42"), Some(42));
    }

    #[test]
    fn parse_rejects_non_canonical_names() {
        for name in ["frame_", "frame_0", "frame_01", "frame_x", "frame_-1", "frame_+3", "frames_1"] {
            assert_eq!(parse_frame_dir_name(name), None, "{name}");
        }
    }

    #[test]
    fn oversized_indices_are_dropped_but_flagged() {
        assert_eq!(parse_frame_dir_name("frame_4294967295"), Some(u32::MAX));
        assert_eq!(parse_frame_dir_name("frame_4294967296"), None);
        assert!(index_out_of_range("frame_4294967296"));
        assert!(!index_out_of_range("frame_4294967295"));
        assert!(!index_out_of_range("frame_01"));
        assert!(!index_out_of_range("frame_x"));

        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("frame_1")).unwrap();
        fs::create_dir(dir.path().join("frame_4294967296")).unwrap();
        let frames = locate_frames(dir.path()).unwrap();
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn locate_orders_frames_numerically_not_lexically() {
        let dir = tempdir().unwrap();
        for n in [10, 2, 1] {
            fs::create_dir(dir.path().join(format!("frame_{n}"))).unwrap();
        }
        let frames = locate_frames(dir.path()).unwrap();
        let indices: Vec<_> = frames.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 2, 10]);
        assert_eq!(frames[2].dir(), dir.path().join("frame_10"));
    }

    #[test]
    fn locate_skips_files_and_unrelated_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("frame_1")).unwrap();
        fs::create_dir(dir.path().join("frame_abc")).unwrap();
        fs::create_dir(dir.path().join("other")).unwrap();
        fs::write(dir.path().join("frame_2"), "not a directory").unwrap();
        let frames = locate_frames(dir.path()).unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].index, 1);
    }

    #[test]
    fn locate_returns_empty_for_system_without_frames() {
        let dir = tempdir().unwrap();
        assert!(locate_frames(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn locate_fails_for_missing_root() {
        let dir = tempdir().unwrap();
        let result = locate_frames(&dir.path().join("missing"));
        assert!(matches!(result, Err(LayoutError::NotADirectory { .. })));
    }

    #[test]
    fn locate_fails_when_root_is_a_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("system.pdb");
        fs::write(&file, "").unwrap();
        assert!(matches!(
            locate_frames(&file),
            Err(LayoutError::NotADirectory { .. })
        ));
    }

    #[test]
    fn candidate_systems_skip_hidden_and_dunder_directories() {
        let dir = tempdir().unwrap();
        for name in ["beta", "alpha", ".git", "__pycache__"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        let names: Vec<_> = list_candidate_systems(dir.path())
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }
}
