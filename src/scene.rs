use glam::{Mat4, Vec3, Vec4};

/// Number of objects in every generated scene. The kernel reads objects by
/// position, so this is part of the snapshot layout.
pub const SCENE_OBJECT_COUNT: usize = 6;

/// Number of entries in the fixed light table.
pub const LIGHT_COUNT: usize = 3;

/// Unit shape the kernel intersects in object space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    Sphere,
    Cube,
    Cone,
    Cylinder,
}

impl Primitive {
    /// Discriminant shared with the kernel
    pub const fn kernel_id(self) -> u32 {
        match self {
            Primitive::Sphere => 0,
            Primitive::Cube => 1,
            Primitive::Cone => 2,
            Primitive::Cylinder => 3,
        }
    }
}

/// Surface response of one scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Vec4,
    pub ambient: Vec4,
    pub specular: Vec4,
    pub reflective: Vec4,
    pub shininess: f32,
    /// 0 = procedural colour only, 1 = texture only
    pub texture_blend: f32,
    /// Index into the fixed texture table, 0 = none
    pub texture_id: u32,
    pub repeat_u: f32,
    pub repeat_v: f32,
}

impl Material {
    pub const fn new(
        diffuse: Vec4,
        ambient: Vec4,
        specular: Vec4,
        reflective: Vec4,
        shininess: f32,
    ) -> Self {
        Self {
            diffuse,
            ambient,
            specular,
            reflective,
            shininess,
            texture_blend: 1.0,
            texture_id: 0,
            repeat_u: 1.0,
            repeat_v: 1.0,
        }
    }

    /// Material whose specular and reflective colours match its diffuse
    /// colour, the common authoring shortcut.
    pub const fn uniform(diffuse: Vec4, ambient: Vec4, shininess: f32) -> Self {
        Self::new(diffuse, ambient, diffuse, diffuse, shininess)
    }

    pub const fn with_blend(mut self, texture_blend: f32) -> Self {
        self.texture_blend = texture_blend;
        self
    }

    pub const fn with_texture(mut self, texture_id: u32) -> Self {
        self.texture_id = texture_id;
        self
    }

    pub const fn with_repeat(mut self, repeat_u: f32, repeat_v: f32) -> Self {
        self.repeat_u = repeat_u;
        self.repeat_v = repeat_v;
        self
    }
}

/// One renderable primitive instance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    pub primitive: Primitive,
    pub object_to_world: Mat4,
    pub material: Material,
}

impl SceneObject {
    pub const fn new(primitive: Primitive, object_to_world: Mat4, material: Material) -> Self {
        Self {
            primitive,
            object_to_world,
            material,
        }
    }

    /// World position of the object-space origin
    pub fn origin(&self) -> Vec3 {
        self.object_to_world.transform_point3(Vec3::ZERO)
    }
}

/// Point lights use `position`, directional lights use `direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Point,
    Directional,
}

impl LightKind {
    pub const fn kernel_id(self) -> u32 {
        match self {
            LightKind::Point => 0,
            LightKind::Directional => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightObject {
    pub color: Vec4,
    pub position: Vec4,
    pub direction: Vec4,
    /// Constant, linear and quadratic falloff. Point lights only.
    pub attenuation: Vec3,
    pub kind: LightKind,
}

impl LightObject {
    pub const fn point(color: Vec4, position: Vec4, attenuation: Vec3) -> Self {
        Self {
            color,
            position,
            direction: Vec4::ZERO,
            attenuation,
            kind: LightKind::Point,
        }
    }

    pub const fn directional(color: Vec4, direction: Vec4) -> Self {
        Self {
            color,
            position: Vec4::ZERO,
            direction,
            attenuation: Vec3::ZERO,
            kind: LightKind::Directional,
        }
    }
}

/// Scene-wide lighting coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalData {
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    pub transmission: f32,
}

impl GlobalData {
    pub const fn to_array(self) -> [f32; 4] {
        [self.ambient, self.diffuse, self.specular, self.transmission]
    }
}
