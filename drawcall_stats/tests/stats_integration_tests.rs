//! Integration tests for indexing, classification and range statistics
//!
//! These tests drive a complete frame through `CaptureSession` using the
//! in-memory `TestHost`.
//!
//! Run with: cargo test --test stats_integration_tests


use drawcall_stats::drawstats::host::{ActionDescription, ActionFlags, ResourceId, ResourceUsage};
use drawcall_stats::drawstats::index::{ActionIndex, TextureRole, UsageClassifier};
use drawcall_stats::drawstats::stats::{ActionRange, PassInfo, RangeStats};
use drawcall_stats::drawstats::{CaptureSession, Error};
use std::sync::Arc;
use test_host_utils::{frame_host, tex, TestHost};

fn ids(values: &[u64]) -> Vec<ResourceId> {
    values.iter().map(|&v| ResourceId(v)).collect()
}

// ============================================================================
// INDEX TESTS
// ============================================================================

#[test]
fn test_integration_index_lookups() {
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();
    let index = session.index();

    assert_eq!(index.len(), 9);
    assert_eq!(index.event_id_for_action(4), Some(13));
    assert_eq!(index.action_id_for_event(16), Some(7));
    assert_eq!(index.action_by_event(11).unwrap().child_count(), 2);
    assert_eq!(index.event_id_for_action(42), None);

    let events: Vec<u32> = index.iter().map(|a| a.event_id()).collect();
    assert_eq!(events, (10..=18).collect::<Vec<u32>>());
}

#[test]
fn test_integration_classified_sets() {
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();
    let index = session.index();

    assert_eq!(index.inputs_by_event(12).unwrap().sorted_ids(), ids(&[100, 101]));
    assert_eq!(index.inputs_by_action(4).unwrap().sorted_ids(), ids(&[101, 102]));
    assert_eq!(index.outputs_by_event(17).unwrap().sorted_ids(), ids(&[201]));
    // CopySrc is neither read by a shader nor a target
    assert!(index.inputs_by_event(18).unwrap().is_empty());
    assert!(index.outputs_by_event(18).unwrap().is_empty());
    assert!(index.inputs_by_event(99).is_none());
}

#[test]
fn test_integration_duplicate_event_is_fatal() {
    let roots = vec![
        ActionDescription::new(1, 10, ActionFlags::PUSH_MARKER).with_children(vec![
            ActionDescription::indexed_draw(2, 11, 3),
        ]),
        ActionDescription::indexed_draw(3, 11, 3),
    ];
    let result = CaptureSession::open(Arc::new(TestHost::new(roots)));

    assert!(matches!(result, Err(Error::IndexError(_))));
}

// ============================================================================
// RANGE STATISTICS TESTS
// ============================================================================

#[test]
fn test_integration_whole_frame_summary() {
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();
    let summary = session.summarize(ActionRange::new(1, 9));

    assert_eq!(summary.mesh_count, 310);
    assert_eq!(summary.texture_count, 5);
    assert_eq!(summary.action_count, 9);
    assert_eq!(
        summary.resolutions,
        vec![
            ((1920, 1080), 1),
            ((1024, 1024), 1),
            ((512, 512), 1),
            ((512, 256), 1),
            ((256, 256), 1),
        ]
    );

    let text = summary.to_string();
    assert!(text.starts_with("Triangles: 310     Textures: 5     Drawcalls: 9\n"));
    assert!(text.contains("   1024x1024: 1\n"));
}

#[test]
fn test_integration_marker_range() {
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();
    let stats = session.stats();
    let range = ActionRange::new(2, 4);

    assert_eq!(stats.mesh_count_in_range(range), 300);
    assert_eq!(stats.distinct_texture_count(range, TextureRole::Input), 3);
    assert_eq!(stats.distinct_texture_count(range, TextureRole::Output), 1);
}

#[test]
fn test_integration_split_ranges_compose() {
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();
    let stats = session.stats();

    for role in [TextureRole::Input, TextureRole::Output] {
        let whole = stats.texture_set_in_range(ActionRange::new(1, 9), role);
        for split in 1..9 {
            let left = stats.texture_set_in_range(ActionRange::new(1, split), role);
            let right = stats.texture_set_in_range(ActionRange::new(split + 1, 9), role);
            assert_eq!(left.union(&right), whole, "split at {}", split);
        }
    }
}

#[test]
fn test_integration_unknown_endpoint() {
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();
    let stats = session.stats();
    let range = ActionRange::new(1, 99);

    assert!(stats.texture_set_in_range(range, TextureRole::Input).is_empty());
    assert_eq!(stats.mesh_count_in_range(range), 0);
    assert!(stats.resolution_histogram(range, TextureRole::Input).is_empty());
}

#[test]
fn test_integration_passes() {
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();

    assert_eq!(
        session.passes(),
        vec![
            PassInfo { index: 0, first_event_id: 10, action_count: 2 },
            PassInfo { index: 1, first_event_id: 14, action_count: 3 },
        ]
    );
}

#[test]
fn test_integration_manual_pipeline_matches_session() {
    let host = frame_host();
    let mut index = ActionIndex::build(&host.roots).unwrap();
    let summary = UsageClassifier::classify(&mut index, &host);
    let session = CaptureSession::open(Arc::new(frame_host())).unwrap();

    assert_eq!(summary, session.classification());
    assert_eq!(summary.usage_records, 10);
    assert_eq!(summary.ignored_usages, 1);
    assert_eq!(
        RangeStats::new(&index).summarize(ActionRange::new(1, 9)),
        session.summarize(ActionRange::new(1, 9))
    );
}

#[test]
fn test_integration_usages_resolve_through_event_ids() {
    let mut host = frame_host();
    let extra = host.texture(300, tex(64, 64));
    // Event 11 is the GBuffer marker; markers are indexed, so it attaches there
    host.usage(extra, 11, ResourceUsage::PS_Resource);
    // Event 50 does not exist
    host.usage(extra, 50, ResourceUsage::PS_Resource);
    let session = CaptureSession::open(Arc::new(host)).unwrap();

    assert_eq!(session.classification().unmatched_usages, 1);
    assert_eq!(session.stats().distinct_texture_count(ActionRange::new(2, 2), TextureRole::Input), 1);
    assert_eq!(session.stats().distinct_texture_count(ActionRange::new(3, 9), TextureRole::Input), 5);
}
