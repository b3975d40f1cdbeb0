/// Tests for UsageClassifier
///
/// These tests validate role bucketing, deduplication, skipped records and
/// order independence.

use super::*;
use crate::host::mock_capture_host::MockCaptureHost;
use crate::host::{
    ActionDescription, ActionFlags, CompType, ResourceId, ResourceUsage, TextureDescription,
};

fn draw(action_id: u32, event_id: u32) -> ActionDescription {
    ActionDescription::new(action_id, event_id, ActionFlags::DRAWCALL)
}

fn host_with_draws() -> MockCaptureHost {
    MockCaptureHost::new(vec![draw(1, 10), draw(2, 20), draw(3, 30)])
}

fn tex(width: u32, height: u32) -> TextureDescription {
    TextureDescription::new_2d(width, height, CompType::UNorm)
}

fn classify(host: &MockCaptureHost) -> (ActionIndex, ClassificationSummary) {
    let mut index = ActionIndex::build(&host.root_actions()).unwrap();
    let summary = UsageClassifier::classify(&mut index, host);
    (index, summary)
}

// ============================================================================
// Tests: Role bucketing
// ============================================================================

#[test]
fn test_input_and_output_bucketing() {
    let mut host = host_with_draws();
    let a = host.add_texture(100, tex(64, 64));
    let b = host.add_texture(200, tex(64, 64));
    host.add_usage(a, 10, ResourceUsage::PS_Resource);
    host.add_usage(b, 10, ResourceUsage::ColorTarget);

    let (index, summary) = classify(&host);

    assert!(index.inputs_by_event(10).unwrap().contains(a));
    assert!(!index.outputs_by_event(10).unwrap().contains(a));
    assert!(index.outputs_by_event(10).unwrap().contains(b));
    assert_eq!(summary.inputs_attached, 1);
    assert_eq!(summary.outputs_attached, 1);
}

#[test]
fn test_texture_can_be_output_then_input() {
    let mut host = host_with_draws();
    let shadow = host.add_texture(100, tex(1024, 1024));
    host.add_usage(shadow, 10, ResourceUsage::DepthStencilTarget);
    host.add_usage(shadow, 20, ResourceUsage::PS_Resource);

    let (index, _) = classify(&host);

    assert!(index.outputs_by_event(10).unwrap().contains(shadow));
    assert!(index.inputs_by_event(20).unwrap().contains(shadow));
    assert!(index.inputs_by_event(10).unwrap().is_empty());
}

#[test]
fn test_other_usage_attaches_nothing() {
    let mut host = host_with_draws();
    let a = host.add_texture(100, tex(64, 64));
    host.add_usage(a, 10, ResourceUsage::CopyDst);
    host.add_usage(a, 20, ResourceUsage::Clear);

    let (index, summary) = classify(&host);

    assert!(index.inputs_by_event(10).unwrap().is_empty());
    assert!(index.outputs_by_event(20).unwrap().is_empty());
    assert_eq!(summary.ignored_usages, 2);
}

// ============================================================================
// Tests: Deduplication and skipping
// ============================================================================

#[test]
fn test_repeated_usage_counts_once() {
    let mut host = host_with_draws();
    let a = host.add_texture(100, tex(64, 64));
    host.add_usage(a, 10, ResourceUsage::VS_Resource);
    host.add_usage(a, 10, ResourceUsage::PS_Resource);
    host.add_usage(a, 10, ResourceUsage::All_Resource);

    let (index, summary) = classify(&host);

    assert_eq!(index.inputs_by_event(10).unwrap().len(), 1);
    assert_eq!(summary.usage_records, 3);
    assert_eq!(summary.inputs_attached, 1);
}

#[test]
fn test_usage_without_action_is_skipped() {
    let mut host = host_with_draws();
    let a = host.add_texture(100, tex(64, 64));
    host.add_usage(a, 15, ResourceUsage::PS_Resource);

    let (index, summary) = classify(&host);

    assert_eq!(summary.unmatched_usages, 1);
    assert!(index.iter().all(|r| r.input_textures().is_empty()));
}

#[test]
fn test_texture_without_description_is_skipped() {
    let mut host = host_with_draws();
    host.usages.insert(ResourceId(999), vec![]);
    let a = host.add_texture(100, tex(64, 64));
    host.add_usage(a, 10, ResourceUsage::PS_Resource);

    // Resource listed by the host but not describable
    struct Wrapper(MockCaptureHost);
    impl CaptureHost for Wrapper {
        fn root_actions(&self) -> Vec<ActionDescription> { self.0.root_actions() }
        fn texture_resources(&self) -> Vec<ResourceId> {
            let mut ids = self.0.texture_resources();
            ids.push(ResourceId(999));
            ids
        }
        fn texture_description(&self, id: ResourceId) -> Option<TextureDescription> {
            self.0.texture_description(id)
        }
        fn resource_usage(&self, id: ResourceId) -> Vec<crate::host::EventUsage> {
            self.0.resource_usage(id)
        }
        fn save_texture(&self, save: &crate::host::TextureSave, path: &std::path::Path) -> crate::error::Result<()> {
            self.0.save_texture(save, path)
        }
        fn capture_filename(&self) -> String { self.0.capture_filename() }
    }

    let host = Wrapper(host);
    let mut index = ActionIndex::build(&host.root_actions()).unwrap();
    let summary = UsageClassifier::classify(&mut index, &host);

    assert_eq!(summary.unknown_textures, 1);
    assert_eq!(summary.textures, 1);
    assert!(index.inputs_by_event(10).unwrap().contains(a));
}

// ============================================================================
// Tests: Idempotence and order independence
// ============================================================================

#[test]
fn test_classify_is_idempotent() {
    let mut host = host_with_draws();
    let a = host.add_texture(100, tex(64, 64));
    host.add_usage(a, 10, ResourceUsage::PS_Resource);
    host.add_usage(a, 30, ResourceUsage::ColorTarget);

    let (mut index, _) = classify(&host);
    let before_in = index.inputs_by_event(10).unwrap().clone();
    let before_out = index.outputs_by_event(30).unwrap().clone();

    let second = UsageClassifier::classify(&mut index, &host);

    assert_eq!(second.inputs_attached, 0);
    assert_eq!(second.outputs_attached, 0);
    assert_eq!(index.inputs_by_event(10).unwrap(), &before_in);
    assert_eq!(index.outputs_by_event(30).unwrap(), &before_out);
}

#[test]
fn test_usage_order_does_not_matter() {
    let a = Arc::new(TextureRecord::new(ResourceId(1), tex(8, 8)));
    let usages = vec![
        EventUsage::new(10, ResourceUsage::PS_Resource),
        EventUsage::new(20, ResourceUsage::ColorTarget),
        EventUsage::new(30, ResourceUsage::CS_Resource),
    ];
    let mut reversed = usages.clone();
    reversed.reverse();

    let roots = vec![draw(1, 10), draw(2, 20), draw(3, 30)];
    let mut forward = ActionIndex::build(&roots).unwrap();
    let mut backward = ActionIndex::build(&roots).unwrap();
    let mut summary = ClassificationSummary::default();
    UsageClassifier::classify_usages(&mut forward, &a, &usages, &mut summary);
    UsageClassifier::classify_usages(&mut backward, &a, &reversed, &mut summary);

    for event_id in [10, 20, 30] {
        assert_eq!(forward.inputs_by_event(event_id), backward.inputs_by_event(event_id));
        assert_eq!(forward.outputs_by_event(event_id), backward.outputs_by_event(event_id));
    }
}
