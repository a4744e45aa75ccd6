use glam::Affine3A;

use crate::scene::transform::Transform;

/// One bone of a character hierarchy.
#[derive(Debug, Clone)]
pub struct Joint {
    pub name: String,
    /// Index of the parent joint; `None` for roots.
    pub parent: Option<usize>,
    /// Local bind-time transform, used wherever no animation contributes.
    pub rest: Transform,
}

/// A joint hierarchy. Parents are not required to precede children.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    pub name: String,
    pub joints: Vec<Joint>,
}

impl Skeleton {
    #[must_use]
    pub fn new(name: impl Into<String>, joints: Vec<Joint>) -> Self {
        Self {
            name: name.into(),
            joints,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    #[must_use]
    pub fn find_joint(&self, name: &str) -> Option<usize> {
        self.joints.iter().position(|j| j.name == name)
    }

    /// A pose holding every joint at rest.
    #[must_use]
    pub fn rest_pose(&self) -> Pose {
        Pose {
            locals: self.joints.iter().map(|j| j.rest).collect(),
        }
    }
}

/// Per-joint local transforms produced by the animation mixer.
#[derive(Debug, Clone, Default)]
pub struct Pose {
    pub locals: Vec<Transform>,
}

impl Pose {
    /// Composes local transforms down the hierarchy into model space.
    ///
    /// A joint whose parent chain loops or points outside the skeleton is
    /// treated as a root.
    #[must_use]
    pub fn world_matrices(&self, skeleton: &Skeleton) -> Vec<Affine3A> {
        let count = self.locals.len().min(skeleton.joints.len());
        let mut worlds: Vec<Option<Affine3A>> = vec![None; count];

        for joint in 0..count {
            Self::resolve(joint, self, skeleton, &mut worlds, 0);
        }

        worlds
            .into_iter()
            .map(|m| m.unwrap_or(Affine3A::IDENTITY))
            .collect()
    }

    fn resolve(
        joint: usize,
        pose: &Pose,
        skeleton: &Skeleton,
        worlds: &mut [Option<Affine3A>],
        depth: usize,
    ) -> Affine3A {
        if let Some(world) = worlds[joint] {
            return world;
        }

        let local = pose.locals[joint].local_matrix();
        let parent = skeleton.joints[joint]
            .parent
            .filter(|&p| p < worlds.len() && depth < worlds.len());

        let world = match parent {
            Some(p) => Self::resolve(p, pose, skeleton, worlds, depth + 1) * local,
            None => local,
        };
        worlds[joint] = Some(world);
        world
    }
}
