use crate::core::io::layout::{self, LayoutError};
use crate::core::models::frame::Frame;
use crate::core::models::system::{System, SystemEntry};
use crate::engine::error::EngineError;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, instrument};

/// Lists every visible system directory under `data_root` that holds at least one frame,
/// sorted by name.
///
/// # Errors
///
/// Returns [`EngineError::DataRootNotFound`] if `data_root` is not a directory.
#[instrument(skip_all, fields(data_root = %data_root.display()))]
pub fn list_systems(data_root: &Path) -> Result<Vec<SystemEntry>, EngineError> {
    let candidates = layout::list_candidate_systems(data_root).map_err(|e| match e {
        LayoutError::NotADirectory { path } => EngineError::DataRootNotFound { path },
        other => other.into(),
    })?;

    let mut systems = Vec::new();
    for (name, path) in candidates {
        let frames = layout::locate_frames(&path)?;
        if frames.is_empty() {
            debug!("Skipping '{}': no frame directories.", name);
            continue;
        }
        systems.push(SystemEntry::new(&name, frames.len()));
    }

    info!("Found {} system(s).", systems.len());
    Ok(systems)
}

/// Describes a single system. A system without frames is described with `frames: 0`.
///
/// # Errors
///
/// Returns [`EngineError::SystemNotFound`] if the system directory does not exist.
pub fn describe_system(data_root: &Path, system_id: &str) -> Result<SystemEntry, EngineError> {
    let root = system_root(data_root, system_id)?;
    let frames = locate(&root, system_id)?;
    Ok(SystemEntry::new(system_id, frames.len()))
}

/// Opens a system for aggregation.
///
/// # Errors
///
/// Returns [`EngineError::SystemNotFound`] if the system directory does not exist (or the id
/// is not a plain directory name), and [`EngineError::NoFramesFound`] if it has no frames.
pub fn open_system(data_root: &Path, system_id: &str) -> Result<System, EngineError> {
    let root = system_root(data_root, system_id)?;
    let frames = locate(&root, system_id)?;
    if frames.is_empty() {
        return Err(EngineError::NoFramesFound {
            system: system_id.to_string(),
        });
    }
    debug!("Opened system '{}' with {} frame(s).", system_id, frames.len());
    Ok(System::new(system_id, root, frames))
}

fn system_root(data_root: &Path, system_id: &str) -> Result<PathBuf, EngineError> {
    let mut components = Path::new(system_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(data_root.join(system_id)),
        _ => Err(EngineError::SystemNotFound {
            system: system_id.to_string(),
        }),
    }
}

fn locate(root: &Path, system_id: &str) -> Result<Vec<Frame>, EngineError> {
    layout::locate_frames(root).map_err(|e| match e {
        LayoutError::NotADirectory { .. } => EngineError::SystemNotFound {
            system: system_id.to_string(),
        },
        other => other.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn make_frames(root: &Path, system: &str, count: u32) {
        fs::create_dir_all(root.join(system)).unwrap();
        for i in 1..=count {
            fs::create_dir_all(root.join(system).join(format!("frame_{i}"))).unwrap();
        }
    }

    #[test]
    fn list_skips_systems_without_frames_and_sorts_by_name() {
        let dir = tempdir().unwrap();
        make_frames(dir.path(), "zeta", 2);
        make_frames(dir.path(), "alpha", 3);
        make_frames(dir.path(), "empty", 0);
        make_frames(dir.path(), ".hidden", 1);

        let systems = list_systems(dir.path()).unwrap();
        let summary: Vec<_> = systems.iter().map(|s| (s.id.as_str(), s.frames)).collect();
        assert_eq!(summary, vec![("alpha", 3), ("zeta", 2)]);
    }

    #[test]
    fn list_fails_for_missing_data_root() {
        let dir = tempdir().unwrap();
        let result = list_systems(&dir.path().join("missing"));
        assert!(matches!(result, Err(EngineError::DataRootNotFound { .. })));
    }

    #[test]
    fn describe_reports_zero_frames_for_empty_system() {
        let dir = tempdir().unwrap();
        make_frames(dir.path(), "empty", 0);
        let entry = describe_system(dir.path(), "empty").unwrap();
        assert_eq!(entry.frames, 0);
    }

    #[test]
    fn describe_fails_for_unknown_system() {
        let dir = tempdir().unwrap();
        let result = describe_system(dir.path(), "ghost");
        assert!(matches!(result, Err(EngineError::SystemNotFound { .. })));
    }

    #[test]
    fn open_distinguishes_missing_system_from_empty_system() {
        let dir = tempdir().unwrap();
        make_frames(dir.path(), "empty", 0);
        assert!(matches!(
            open_system(dir.path(), "ghost"),
            Err(EngineError::SystemNotFound { .. })
        ));
        assert!(matches!(
            open_system(dir.path(), "empty"),
            Err(EngineError::NoFramesFound { .. })
        ));
    }

    #[test]
    fn open_rejects_ids_that_leave_the_data_root() {
        let dir = tempdir().unwrap();
        make_frames(dir.path(), "sys", 1);
        for id in ["..", "../sys", "sys/frame_1", "", "/etc"] {
            assert!(
                matches!(
                    open_system(&dir.path().join("sys"), id),
                    Err(EngineError::SystemNotFound { .. })
                ),
                "{id}"
            );
        }
    }

    #[test]
    fn open_returns_frames_in_numeric_order() {
        let dir = tempdir().unwrap();
        make_frames(dir.path(), "sys", 11);
        let system = open_system(dir.path(), "sys").unwrap();
        let indices: Vec<_> = system.frame_indices().collect();
        assert_eq!(indices, (1..=11).collect::<Vec<_>>());
        assert_eq!(system.root(), dir.path().join("sys"));
    }
}
