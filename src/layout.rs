//! Fixed UV layout for a 64x64 classic skin texture.
//!
//! Maps each body part (and its overlay) to the six named pixel rectangles
//! of its cross-unfold. Skin viewers validate these positions bit-for-bit,
//! so the offsets below are not tunable.

/// Canvas edge length in pixels.
pub const SKIN_SIZE: u32 = 64;

/// A pixel rectangle with exclusive right/bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> u32 {
        self.width() * self.height()
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// The six faces of an unfolded cuboid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Top,
    Bottom,
    Right,
    Front,
    Left,
    Back,
}

impl Face {
    /// All faces, in unfold order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Front,
        Face::Left,
        Face::Back,
    ];
}

/// The rectangles of one body part's six faces.
#[derive(Debug, Clone, Copy)]
pub struct FaceMap {
    top: Rect,
    bottom: Rect,
    right: Rect,
    front: Rect,
    left: Rect,
    back: Rect,
}

impl FaceMap {
    pub fn get(&self, face: Face) -> Rect {
        match face {
            Face::Top => self.top,
            Face::Bottom => self.bottom,
            Face::Right => self.right,
            Face::Front => self.front,
            Face::Left => self.left,
            Face::Back => self.back,
        }
    }

    /// Head-style 8x8x8 cube unfolded into a 32x16 block.
    fn cube(x: u32, y: u32) -> Self {
        Self {
            top: Rect::new(x + 8, y, x + 16, y + 8),
            bottom: Rect::new(x + 16, y, x + 24, y + 8),
            right: Rect::new(x, y + 8, x + 8, y + 16),
            front: Rect::new(x + 8, y + 8, x + 16, y + 16),
            left: Rect::new(x + 16, y + 8, x + 24, y + 16),
            back: Rect::new(x + 24, y + 8, x + 32, y + 16),
        }
    }

    /// Torso 8x12x4 cuboid unfolded into a 24x16 block.
    fn body(x: u32, y: u32) -> Self {
        Self {
            top: Rect::new(x + 4, y, x + 12, y + 4),
            bottom: Rect::new(x + 12, y, x + 20, y + 4),
            right: Rect::new(x, y + 4, x + 4, y + 16),
            front: Rect::new(x + 4, y + 4, x + 12, y + 16),
            left: Rect::new(x + 12, y + 4, x + 16, y + 16),
            back: Rect::new(x + 16, y + 4, x + 24, y + 16),
        }
    }

    /// Arm/leg 4x12x4 cuboid unfolded into a 16x16 block.
    fn limb(x: u32, y: u32) -> Self {
        Self {
            top: Rect::new(x + 4, y, x + 8, y + 4),
            bottom: Rect::new(x + 8, y, x + 12, y + 4),
            right: Rect::new(x, y + 4, x + 4, y + 16),
            front: Rect::new(x + 4, y + 4, x + 8, y + 16),
            left: Rect::new(x + 8, y + 4, x + 12, y + 16),
            back: Rect::new(x + 12, y + 4, x + 16, y + 16),
        }
    }
}

/// The twelve named parts of the classic skin layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    HeadOverlay,
    Body,
    BodyOverlay,
    RightArm,
    RightArmOverlay,
    LeftArm,
    LeftArmOverlay,
    RightLeg,
    RightLegOverlay,
    LeftLeg,
    LeftLegOverlay,
}

impl BodyPart {
    pub const ALL: [BodyPart; 12] = [
        BodyPart::Head,
        BodyPart::HeadOverlay,
        BodyPart::Body,
        BodyPart::BodyOverlay,
        BodyPart::RightArm,
        BodyPart::RightArmOverlay,
        BodyPart::LeftArm,
        BodyPart::LeftArmOverlay,
        BodyPart::RightLeg,
        BodyPart::RightLegOverlay,
        BodyPart::LeftLeg,
        BodyPart::LeftLegOverlay,
    ];
}

/// The complete UV table. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct SkinLayout {
    head: FaceMap,
    head_overlay: FaceMap,
    body: FaceMap,
    body_overlay: FaceMap,
    right_arm: FaceMap,
    right_arm_overlay: FaceMap,
    left_arm: FaceMap,
    left_arm_overlay: FaceMap,
    right_leg: FaceMap,
    right_leg_overlay: FaceMap,
    left_leg: FaceMap,
    left_leg_overlay: FaceMap,
}

impl SkinLayout {
    pub fn new() -> Self {
        Self {
            head: FaceMap::cube(0, 0),
            head_overlay: FaceMap::cube(32, 0),
            body: FaceMap::body(16, 16),
            body_overlay: FaceMap::body(16, 32),
            right_arm: FaceMap::limb(40, 16),
            right_arm_overlay: FaceMap::limb(40, 32),
            right_leg: FaceMap::limb(0, 16),
            right_leg_overlay: FaceMap::limb(0, 32),
            left_leg: FaceMap::limb(16, 48),
            left_leg_overlay: FaceMap::limb(0, 48),
            left_arm: FaceMap::limb(32, 48),
            left_arm_overlay: FaceMap::limb(48, 48),
        }
    }

    pub fn faces(&self, part: BodyPart) -> &FaceMap {
        match part {
            BodyPart::Head => &self.head,
            BodyPart::HeadOverlay => &self.head_overlay,
            BodyPart::Body => &self.body,
            BodyPart::BodyOverlay => &self.body_overlay,
            BodyPart::RightArm => &self.right_arm,
            BodyPart::RightArmOverlay => &self.right_arm_overlay,
            BodyPart::LeftArm => &self.left_arm,
            BodyPart::LeftArmOverlay => &self.left_arm_overlay,
            BodyPart::RightLeg => &self.right_leg,
            BodyPart::RightLegOverlay => &self.right_leg_overlay,
            BodyPart::LeftLeg => &self.left_leg,
            BodyPart::LeftLegOverlay => &self.left_leg_overlay,
        }
    }

    /// Shorthand for the face-tile target rectangle.
    pub fn head_front(&self) -> Rect {
        self.head.front
    }
}

impl Default for SkinLayout {
    fn default() -> Self {
        Self::new()
    }
}
