//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so
//! debug builds stay quiet unless a developer opts in.

pub struct DebugFlags {
    /// Emit per-file parse details (declared shape, token counts).
    pub print_grid_loading: bool,
    /// Emit the per-label cell counts every time the largest zone is computed.
    pub print_zone_counts: bool,
    /// Emit texture rebuilds in the viewer (palette switches, first frame).
    pub print_texture_rebuilds: bool,
    /// Emit viewer preference serialization.
    pub print_state_serde: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_grid_loading: false,
    print_zone_counts: false,
    print_texture_rebuilds: false,
    print_state_serde: false,
    print_shutdown: false,
};
