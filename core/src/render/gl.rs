//! The fixed-function command set and the context trait that executes it.
//!
//! [`Command`] mirrors the subset of immediate-mode OpenGL that the
//! renderer uses, with typed parameters instead of enum-and-pointer pairs.
//! Any type that can execute commands implements [`Gl`] and gets one
//! convenience method per command for free.

use core::ops::BitOr;

use crate::math::{Angle, Color3f, Color4f, Point3, Vec3};

use super::proj::Frustum;

/// A single command to a fixed-function rendering context.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Sets the color used to clear the color buffer.
    ClearColor(Color4f),
    /// Sets the value used to clear the depth buffer.
    ClearDepth(f32),
    /// Clears the given buffers.
    Clear(Buffers),
    /// Sets the viewport rectangle.
    Viewport(Viewport),
    /// Selects the matrix that subsequent transform commands modify.
    MatrixMode(MatrixMode),
    /// Replaces the current matrix with the identity.
    LoadIdentity,
    /// Multiplies the current matrix by a translation.
    Translate(Vec3),
    /// Multiplies the current matrix by a rotation around an axis.
    Rotate(Angle, Vec3),
    /// Multiplies the current matrix by a perspective frustum projection.
    Frustum(Frustum),
    /// Enables a capability.
    Enable(Cap),
    /// Disables a capability.
    Disable(Cap),
    /// Sets an implementation quality hint.
    Hint(Hint, HintMode),
    /// Selects flat or smooth shading.
    ShadeModel(ShadeModel),
    /// Selects the depth test predicate.
    DepthFunc(DepthFunc),
    /// Sets a parameter of a light source.
    Light(LightId, LightParam),
    /// Sets a parameter of the lighting model.
    LightModel(LightModel),
    /// Sets a material parameter of front or back faces, or both.
    Material(Face, MaterialParam),
    /// Starts a primitive.
    Begin(Primitive),
    /// Ends the current primitive.
    End,
    /// Sets the current vertex color.
    Color(Color3f),
    /// Sets the current vertex normal.
    Normal(Vec3),
    /// Emits a vertex with the current color and normal.
    Vertex(Point3),
}

/// A set of buffers to clear.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Buffers {
    pub color: bool,
    pub depth: bool,
}

/// A viewport rectangle in window coordinates, origin at bottom left.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum MatrixMode {
    Projection,
    #[default]
    ModelView,
}

/// A capability that can be enabled or disabled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Cap {
    DepthTest,
    Lighting,
    Light(LightId),
    ColorMaterial,
    LineSmooth,
    PolygonSmooth,
    CullFace,
}

/// Index of one of the [`LightId::COUNT`] light sources.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LightId(u8);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Hint {
    LineSmooth,
    PolygonSmooth,
    PerspectiveCorrection,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum HintMode {
    Fastest,
    Nicest,
    #[default]
    DontCare,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ShadeModel {
    Flat,
    #[default]
    Smooth,
}

/// Predicate comparing an incoming depth to the stored depth.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DepthFunc {
    Never,
    #[default]
    Less,
    LessOrEqual,
    Equal,
    Greater,
    Always,
}

/// Position of a light source, in the coordinates current when it is set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightPos {
    /// A light at infinity, shining from the given direction.
    Directional(Vec3),
    /// A light radiating from a point.
    Point(Point3),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightParam {
    Ambient(Color4f),
    Diffuse(Color4f),
    Specular(Color4f),
    Position(LightPos),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightModel {
    /// Ambient light present regardless of light sources.
    Ambient(Color4f),
    /// Whether back faces are lit with reversed normals.
    TwoSide(bool),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MaterialParam {
    Ambient(Color4f),
    Diffuse(Color4f),
    Specular(Color4f),
    Shininess(f32),
}

/// Kind of primitive assembled from the vertices between begin and end.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Primitive {
    /// A single filled convex polygon.
    Polygon,
    /// A closed line strip.
    LineLoop,
}

/// A fixed-function rendering context.
///
/// Implementors provide [`exec`][Gl::exec]; every other method builds the
/// corresponding [`Command`] and executes it.
pub trait Gl {
    /// Executes a command, mutating the state of the context.
    fn exec(&mut self, cmd: Command);

    fn clear_color(&mut self, c: Color4f) {
        self.exec(Command::ClearColor(c))
    }
    fn clear_depth(&mut self, d: f32) {
        self.exec(Command::ClearDepth(d))
    }
    fn clear(&mut self, bufs: Buffers) {
        self.exec(Command::Clear(bufs))
    }
    fn viewport(&mut self, x: i32, y: i32, width: u32, height: u32) {
        self.exec(Command::Viewport(Viewport { x, y, width, height }))
    }
    fn matrix_mode(&mut self, mode: MatrixMode) {
        self.exec(Command::MatrixMode(mode))
    }
    fn load_identity(&mut self) {
        self.exec(Command::LoadIdentity)
    }
    fn translate(&mut self, t: Vec3) {
        self.exec(Command::Translate(t))
    }
    fn rotate(&mut self, a: Angle, axis: Vec3) {
        self.exec(Command::Rotate(a, axis))
    }
    fn frustum(&mut self, f: Frustum) {
        self.exec(Command::Frustum(f))
    }
    fn enable(&mut self, cap: Cap) {
        self.exec(Command::Enable(cap))
    }
    fn disable(&mut self, cap: Cap) {
        self.exec(Command::Disable(cap))
    }
    fn hint(&mut self, target: Hint, mode: HintMode) {
        self.exec(Command::Hint(target, mode))
    }
    fn shade_model(&mut self, m: ShadeModel) {
        self.exec(Command::ShadeModel(m))
    }
    fn depth_func(&mut self, f: DepthFunc) {
        self.exec(Command::DepthFunc(f))
    }
    fn light(&mut self, id: LightId, p: LightParam) {
        self.exec(Command::Light(id, p))
    }
    fn light_model(&mut self, p: LightModel) {
        self.exec(Command::LightModel(p))
    }
    fn material(&mut self, face: Face, p: MaterialParam) {
        self.exec(Command::Material(face, p))
    }
    fn begin(&mut self, prim: Primitive) {
        self.exec(Command::Begin(prim))
    }
    fn end(&mut self) {
        self.exec(Command::End)
    }
    fn color(&mut self, c: Color3f) {
        self.exec(Command::Color(c))
    }
    fn normal(&mut self, n: Vec3) {
        self.exec(Command::Normal(n))
    }
    fn vertex(&mut self, p: Point3) {
        self.exec(Command::Vertex(p))
    }
}

impl<G: Gl + ?Sized> Gl for &mut G {
    fn exec(&mut self, cmd: Command) {
        (**self).exec(cmd)
    }
}

//
// Inherent impls
//

impl Buffers {
    pub const COLOR: Self = Self { color: true, depth: false };
    pub const DEPTH: Self = Self { color: false, depth: true };
}

impl LightId {
    /// The number of light sources a context supports.
    pub const COUNT: usize = 8;

    /// Returns the light source with index `i`.
    ///
    /// # Panics
    /// If `i >= LightId::COUNT`.
    pub const fn new(i: u8) -> Self {
        assert!((i as usize) < Self::COUNT, "light index out of range");
        Self(i)
    }

    /// Returns the index of `self`.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl LightPos {
    /// Returns `self` as a homogeneous position, `w` = 0 if directional.
    pub fn to_homogeneous(self) -> [f32; 4] {
        match self {
            Self::Directional(d) => [d.x(), d.y(), d.z(), 0.0],
            Self::Point(p) => [p.x(), p.y(), p.z(), 1.0],
        }
    }
}

impl DepthFunc {
    /// Returns whether a fragment at depth `new` passes the test against
    /// the stored depth `curr`.
    #[inline]
    pub fn test(self, new: f32, curr: f32) -> bool {
        match self {
            Self::Never => false,
            Self::Less => new < curr,
            Self::LessOrEqual => new <= curr,
            Self::Equal => new == curr,
            Self::Greater => new > curr,
            Self::Always => true,
        }
    }
}

impl Face {
    /// Returns whether `self` includes front faces.
    pub fn front(self) -> bool {
        matches!(self, Self::Front | Self::FrontAndBack)
    }
    /// Returns whether `self` includes back faces.
    pub fn back(self) -> bool {
        matches!(self, Self::Back | Self::FrontAndBack)
    }
}

impl BitOr for Buffers {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            color: self.color || rhs.color,
            depth: self.depth || rhs.depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::math::{pt3, rgb};

    #[derive(Default)]
    struct Log(Vec<Command>);

    impl Gl for Log {
        fn exec(&mut self, cmd: Command) {
            self.0.push(cmd);
        }
    }

    #[test]
    fn provided_methods_build_commands() {
        let mut log = Log::default();
        log.begin(Primitive::Polygon);
        log.color(rgb(1.0, 0.0, 0.0));
        log.vertex(pt3(0.0, 1.0, 2.0));
        log.end();

        assert_eq!(
            log.0,
            [
                Command::Begin(Primitive::Polygon),
                Command::Color(rgb(1.0, 0.0, 0.0)),
                Command::Vertex(pt3(0.0, 1.0, 2.0)),
                Command::End,
            ]
        );
    }

    #[test]
    fn mut_ref_is_a_context() {
        fn clear_all(mut gl: impl Gl) {
            gl.clear(Buffers::COLOR | Buffers::DEPTH);
        }
        let mut log = Log::default();
        clear_all(&mut log);
        assert_eq!(
            log.0,
            [Command::Clear(Buffers { color: true, depth: true })]
        );
    }

    #[test]
    fn depth_predicates() {
        assert!(DepthFunc::LessOrEqual.test(0.5, 0.5));
        assert!(!DepthFunc::Less.test(0.5, 0.5));
        assert!(DepthFunc::Always.test(2.0, 0.0));
        assert!(!DepthFunc::Never.test(0.0, 1.0));
    }

    #[test]
    #[should_panic]
    fn light_index_out_of_range() {
        let _ = LightId::new(8);
    }
}
