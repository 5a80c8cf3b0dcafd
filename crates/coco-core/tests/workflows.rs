use cocoagg::core::models::trend::TrendCategory;
use cocoagg::engine::config::{
    AggregationConfig, AggregationConfigBuilder, DEFAULT_AREA_SUFFIX, DEFAULT_INTERACTION_SUFFIX,
    DEFAULT_SUMMARY_SUFFIX, ValuePolicy,
};
use cocoagg::engine::error::EngineError;
use cocoagg::engine::progress::{Progress, ProgressReporter};
use cocoagg::workflows::catalog::{describe_system, list_systems};
use cocoagg::workflows::listing::{area_listing, interaction_listing, trend_listing};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tempfile::{TempDir, tempdir};

const INTERACTION_HEADER: &str = "Res. Name 1,Res. Number 1,Chain 1,Res. Name 2,Res. Number 2,Chain 2,Type of Interactions";

fn frame_dir(root: &Path, system: &str, index: u32) -> std::path::PathBuf {
    let dir = root.join(system).join(format!("frame_{index}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(dir: &Path, index: u32, suffix: &str, content: &str) {
    fs::write(dir.join(format!("frame_{index}{suffix}")), content).unwrap();
}

/// Seven frames; the salt bridge is present everywhere, the stacking contact only in
/// frame 4. Frame 6 has no reports at all.
fn seven_frame_fixture() -> TempDir {
    let root = tempdir().unwrap();
    for index in 1..=7 {
        let dir = frame_dir(root.path(), "1ULL", index);
        if index == 6 {
            continue;
        }
        let mut rows = format!("{INTERACTION_HEADER}\nARG,12,A,GLU,45,B,Salt-bridge; H-bond\n");
        if index == 4 {
            rows.push_str("TYR,7,A,PHE,8,B,π-π stacking\n");
        }
        write(&dir, index, DEFAULT_INTERACTION_SUFFIX, &rows);
        write(
            &dir,
            index,
            DEFAULT_AREA_SUFFIX,
            &format!(
                ",Value\n0,{}.5 / 1165.9\n1,ignored\n2,1200.0 / 600.0\n3,ignored\n4,1131.3 / 565.0\n",
                2300 + index
            ),
        );
        write(
            &dir,
            index,
            DEFAULT_SUMMARY_SUFFIX,
            &format!(
                "Property,Value\nNo. of H-bonds,{index}\nNo. of Salt-bridges,1\nNo. of π-π interactions,0\nNo. of Cation-π interactions,2\nNo. of Anion-π interactions,3\nInterface area,2331.8 / 1165.9\n"
            ),
        );
    }
    root
}

fn reporter() -> ProgressReporter<'static> {
    ProgressReporter::new()
}

#[test]
fn interaction_listing_scores_consistency_over_all_located_frames() {
    let root = seven_frame_fixture();
    let listing = interaction_listing(
        root.path(),
        "1ULL",
        &AggregationConfig::default(),
        &reporter(),
    )
    .unwrap();

    assert_eq!(listing.total_frames, 7);
    assert_eq!(listing.interactions.len(), 2);

    let salt = &listing.interactions[0];
    assert_eq!(salt.id1, "A-ARG12");
    assert_eq!(salt.id2, "B-GLU45");
    assert_eq!(salt.frame_count, 6);
    assert!((salt.consistency - 6.0 / 7.0).abs() < 1e-12);
    assert_eq!(salt.types_array, vec!["H-bond", "Salt-bridge"]);

    let stacking = &listing.interactions[1];
    assert_eq!(stacking.frames, vec![4]);
    assert!((stacking.consistency - 0.142857).abs() < 1e-6);
    assert_eq!(listing.coverage.missing_reports(), 1);
}

#[test]
fn interaction_listing_json_has_expected_top_level_shape() {
    let root = seven_frame_fixture();
    let listing = interaction_listing(
        root.path(),
        "1ULL",
        &AggregationConfig::default(),
        &reporter(),
    )
    .unwrap();
    let value = serde_json::to_value(&listing).unwrap();
    assert_eq!(value["system"], "1ULL");
    assert_eq!(value["totalFrames"], 7);
    assert!(value["interactions"].is_array());
    assert!(value.get("coverage").is_none());
}

#[test]
fn area_listing_skips_frames_without_reports() {
    let root = seven_frame_fixture();
    let listing =
        area_listing(root.path(), "1ULL", &AggregationConfig::default(), &reporter()).unwrap();

    let frames: Vec<_> = listing.frames.iter().map(|s| s.frame).collect();
    assert_eq!(frames, vec![1, 2, 3, 4, 5, 7]);
    assert_eq!(listing.frames[0].total_bsa, 2301.5);
    assert_eq!(listing.frames[0].polar_bsa, 1200.0);
    assert_eq!(listing.frames[0].non_polar_bsa, 1131.3);
}

#[test]
fn trend_listing_zero_fills_frames_without_reports() {
    let root = seven_frame_fixture();
    let listing =
        trend_listing(root.path(), "1ULL", &AggregationConfig::default(), &reporter()).unwrap();

    assert_eq!(
        listing.trends.get(TrendCategory::HBonds),
        &[1, 2, 3, 4, 5, 0, 7]
    );
    assert_eq!(
        listing.trends.get(TrendCategory::CationPi),
        &[2, 2, 2, 2, 2, 0, 2]
    );
    assert_eq!(listing.trends.get(TrendCategory::PiPi), &[0; 7]);
    assert_eq!(listing.trends.get(TrendCategory::Clashes).len(), 7);
}

#[test]
fn trend_listing_json_keys_follow_category_order() {
    let root = seven_frame_fixture();
    let listing =
        trend_listing(root.path(), "1ULL", &AggregationConfig::default(), &reporter()).unwrap();
    let json = serde_json::to_string(&listing).unwrap();

    let positions: Vec<usize> = TrendCategory::ALL
        .iter()
        .map(|c| json.find(&format!("\"{}\"", c.label())).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["trends"].as_object().unwrap().len(), 12);
    assert_eq!(value["trends"]["Anion-π interactions"][0], 3);
}

#[test]
fn frames_are_processed_in_numeric_order() {
    let root = tempdir().unwrap();
    for index in [1, 2, 10] {
        let dir = frame_dir(root.path(), "sys", index);
        write(
            &dir,
            index,
            DEFAULT_SUMMARY_SUFFIX,
            &format!("Property,Value\nNo. of Clashes,{index}\n"),
        );
    }
    let listing =
        trend_listing(root.path(), "sys", &AggregationConfig::default(), &reporter()).unwrap();
    assert_eq!(listing.trends.get(TrendCategory::Clashes), &[1, 2, 10]);
    assert_eq!(listing.trends.frames(), &[1, 2, 10]);
}

#[test]
fn unknown_system_is_not_found_for_every_listing() {
    let root = seven_frame_fixture();
    let config = AggregationConfig::default();
    let results = [
        interaction_listing(root.path(), "ghost", &config, &reporter()).map(|_| ()),
        area_listing(root.path(), "ghost", &config, &reporter()).map(|_| ()),
        trend_listing(root.path(), "ghost", &config, &reporter()).map(|_| ()),
    ];
    for result in results {
        let err = result.unwrap_err();
        assert!(matches!(err, EngineError::SystemNotFound { .. }));
        assert_eq!(err.status_code(), 404);
    }
}

#[test]
fn system_without_frames_is_not_found() {
    let root = tempdir().unwrap();
    fs::create_dir_all(root.path().join("empty").join("notes")).unwrap();
    let err = trend_listing(root.path(), "empty", &AggregationConfig::default(), &reporter())
        .unwrap_err();
    assert!(matches!(err, EngineError::NoFramesFound { .. }));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn strict_trend_policy_surfaces_malformed_counts_as_internal_error() {
    let root = tempdir().unwrap();
    let dir = frame_dir(root.path(), "sys", 1);
    write(
        &dir,
        1,
        DEFAULT_SUMMARY_SUFFIX,
        "Property,Value\nNo. of H-bonds,7.5\n",
    );

    let err = trend_listing(root.path(), "sys", &AggregationConfig::default(), &reporter())
        .unwrap_err();
    assert!(matches!(err, EngineError::MalformedNumeric { .. }));
    assert_eq!(err.status_code(), 500);

    let lenient = AggregationConfigBuilder::new()
        .trend_values(ValuePolicy::Lenient)
        .build()
        .unwrap();
    let listing = trend_listing(root.path(), "sys", &lenient, &reporter()).unwrap();
    assert_eq!(listing.trends.get(TrendCategory::HBonds), &[0]);
    assert_eq!(listing.coverage.malformed_values(), 1);
}

#[test]
fn custom_report_suffixes_are_honored() {
    let root = tempdir().unwrap();
    let dir = frame_dir(root.path(), "sys", 1);
    write(&dir, 1, ".area.csv", ",Value\n0,10 / 5\n");
    let config = AggregationConfigBuilder::new()
        .area_suffix(".area.csv")
        .build()
        .unwrap();
    let listing = area_listing(root.path(), "sys", &config, &reporter()).unwrap();
    assert_eq!(listing.frames.len(), 1);
    assert_eq!(listing.frames[0].total_bsa, 10.0);
}

#[test]
fn progress_events_cover_every_frame() {
    let root = seven_frame_fixture();
    let events = Mutex::new(Vec::new());
    let reporter = ProgressReporter::with_callback(Box::new(|event| {
        events.lock().unwrap().push(event);
    }));
    area_listing(root.path(), "1ULL", &AggregationConfig::default(), &reporter).unwrap();
    drop(reporter);

    let events = events.into_inner().unwrap();
    assert!(matches!(
        events.first(),
        Some(Progress::ScanStart {
            total_frames: 7,
            ..
        })
    ));
    let scanned = events
        .iter()
        .filter(|e| matches!(e, Progress::FrameScanned { .. }))
        .count();
    assert_eq!(scanned, 7);
    assert!(events.iter().any(|e| matches!(e, Progress::ScanFinish)));
    // Frame 6 has no area report, so the coverage summary follows the scan.
    match events.last() {
        Some(Progress::Message(text)) => assert!(text.contains("1 report(s) missing")),
        other => panic!("expected a coverage message, got {other:?}"),
    }
}

#[test]
fn catalog_lists_and_describes_systems() {
    let root = seven_frame_fixture();
    fs::create_dir_all(root.path().join("__pycache__").join("frame_1")).unwrap();
    fs::create_dir_all(root.path().join("uploads")).unwrap();

    let systems = list_systems(root.path()).unwrap();
    assert_eq!(systems.len(), 1);
    assert_eq!(systems[0].id, "1ULL");
    assert_eq!(systems[0].frames, 7);

    let entry = describe_system(root.path(), "uploads").unwrap();
    assert_eq!(entry.frames, 0);
    let value = serde_json::to_value(&entry).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"id": "uploads", "name": "uploads", "path": "uploads", "frames": 0})
    );
}
