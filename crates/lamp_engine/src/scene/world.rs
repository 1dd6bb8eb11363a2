//! World scene and material invalidation
//!
//! Some renderers cache the light list per material on first draw. After the
//! light hierarchy changes every material in the scene has to be flagged so
//! shading is rebuilt.

/// Surface material of a mesh
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Base color (RGB)
    pub base_color: [f32; 3],
    /// Set when cached shading state must be rebuilt before the next draw
    pub needs_update: bool,
}

impl Material {
    /// Create a new white material
    pub fn new() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0],
            needs_update: false,
        }
    }

    /// Set the base color
    #[must_use]
    pub fn with_color(mut self, r: f32, g: f32, b: f32) -> Self {
        self.base_color = [r, g, b];
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}

/// Scene child, optionally carrying a material
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Material, absent for helper nodes such as groups or bones
    pub material: Option<Material>,
}

impl Mesh {
    /// Mesh with a material
    pub fn with_material(material: Material) -> Self {
        Self {
            material: Some(material),
        }
    }

    /// Mesh without a material
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Root node list of a world
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Top-level children
    pub children: Vec<Mesh>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag every child material for a shading rebuild
    ///
    /// Returns the number of materials flagged.
    pub fn invalidate_materials(&mut self) -> usize {
        let mut flagged = 0;
        for material in self.children.iter_mut().filter_map(|mesh| mesh.material.as_mut()) {
            material.needs_update = true;
            flagged += 1;
        }
        flagged
    }
}

/// World an actor lives in
#[derive(Debug, Clone, Default)]
pub struct World {
    /// Active scene
    pub scene: Scene,
}

impl World {
    /// Create a world around a scene
    pub fn new(scene: Scene) -> Self {
        Self { scene }
    }
}
