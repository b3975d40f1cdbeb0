/// Action tree nodes as supplied by the capture host

use bitflags::bitflags;

bitflags! {
    /// Classification flags of a recorded action
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ActionFlags: u32 {
        const CLEAR = 1 << 0;
        const DRAWCALL = 1 << 1;
        const DISPATCH = 1 << 2;
        const MESH_DISPATCH = 1 << 3;
        const COPY = 1 << 4;
        const RESOLVE = 1 << 5;
        const GEN_MIPS = 1 << 6;
        const PASS_BOUNDARY = 1 << 7;
        const PRESENT = 1 << 8;
        const SET_MARKER = 1 << 9;
        const PUSH_MARKER = 1 << 10;
        const POP_MARKER = 1 << 11;
        const INDEXED = 1 << 12;
        const INSTANCED = 1 << 13;
        const AUTO = 1 << 14;
        const INDIRECT = 1 << 15;
        const CLEAR_COLOR = 1 << 16;
        const CLEAR_DEPTH_STENCIL = 1 << 17;
        const BEGIN_PASS = 1 << 18;
        const END_PASS = 1 << 19;
    }
}

impl ActionFlags {
    /// Indexed drawcall (both `DRAWCALL` and `INDEXED` set)
    pub fn is_indexed_draw(&self) -> bool {
        self.contains(ActionFlags::DRAWCALL | ActionFlags::INDEXED)
    }

    /// Marker-only action (push/pop/set marker)
    pub fn is_marker(&self) -> bool {
        self.intersects(ActionFlags::SET_MARKER | ActionFlags::PUSH_MARKER | ActionFlags::POP_MARKER)
    }
}

/// One node of the host action tree
#[derive(Debug, Clone, Default)]
pub struct ActionDescription {
    /// Dense logical action number
    pub action_id: u32,
    /// Position in the flattened event sequence
    pub event_id: u32,
    /// Action classification
    pub flags: ActionFlags,
    /// Index count (0 for non-indexed work)
    pub num_indices: u32,
    /// Child actions in trace order (empty for leaves)
    pub children: Vec<ActionDescription>,
}

impl ActionDescription {
    /// Create a leaf action
    pub fn new(action_id: u32, event_id: u32, flags: ActionFlags) -> Self {
        Self {
            action_id,
            event_id,
            flags,
            num_indices: 0,
            children: Vec::new(),
        }
    }

    /// Create an indexed drawcall leaf
    pub fn indexed_draw(action_id: u32, event_id: u32, num_indices: u32) -> Self {
        Self {
            num_indices,
            ..Self::new(action_id, event_id, ActionFlags::DRAWCALL | ActionFlags::INDEXED)
        }
    }

    /// Builder: attach children
    pub fn with_children(mut self, children: Vec<ActionDescription>) -> Self {
        self.children = children;
        self
    }
}
