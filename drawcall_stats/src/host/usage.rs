/// Resource usage records and their input/output classification

/// How a resource was used by an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum ResourceUsage {
    Unused,

    VertexBuffer,
    IndexBuffer,

    VS_Constants,
    HS_Constants,
    DS_Constants,
    GS_Constants,
    PS_Constants,
    CS_Constants,
    TS_Constants,
    MS_Constants,
    All_Constants,

    StreamOut,

    // Read-only shader resources
    VS_Resource,
    HS_Resource,
    DS_Resource,
    GS_Resource,
    PS_Resource,
    CS_Resource,
    TS_Resource,
    MS_Resource,
    All_Resource,

    // Read/write shader resources
    VS_RWResource,
    HS_RWResource,
    DS_RWResource,
    GS_RWResource,
    PS_RWResource,
    CS_RWResource,
    TS_RWResource,
    MS_RWResource,
    All_RWResource,

    InputTarget,
    ColorTarget,
    DepthStencilTarget,

    Indirect,
    Clear,
    Discard,
    GenMips,
    Resolve,
    ResolveSrc,
    ResolveDst,
    Copy,
    CopySrc,
    CopyDst,
    Barrier,
    CPUWrite,
}

/// Role a usage plays for the action that owns the event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageRole {
    /// Read by a programmable stage
    Input,
    /// Written as a color or depth/stencil target
    Output,
    /// Not tracked
    Other,
}

impl ResourceUsage {
    /// Classify this usage into input, output, or other
    pub fn role(&self) -> UsageRole {
        use ResourceUsage::*;
        match self {
            VS_Resource | HS_Resource | DS_Resource | GS_Resource | PS_Resource
            | CS_Resource | TS_Resource | MS_Resource | All_Resource => UsageRole::Input,
            ColorTarget | DepthStencilTarget => UsageRole::Output,
            _ => UsageRole::Other,
        }
    }
}

/// One `(event, usage)` record of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventUsage {
    /// Event that used the resource
    pub event_id: u32,
    /// Kind of usage
    pub usage: ResourceUsage,
}

impl EventUsage {
    pub fn new(event_id: u32, usage: ResourceUsage) -> Self {
        Self { event_id, usage }
    }
}

#[cfg(test)]
#[path = "usage_tests.rs"]
mod tests;
