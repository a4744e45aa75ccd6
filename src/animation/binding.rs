/// The joint property an animation track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // joint transform.position
    Rotation,    // joint transform.rotation
    Scale,       // joint transform.scale
}

/// Maps track `track_index` of a clip onto `target` of skeleton joint `joint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyBinding {
    pub track_index: usize,
    pub joint: usize,
    pub target: TargetPath,
}
