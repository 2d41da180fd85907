//! Fixed-function context state.

use log::warn;

use crate::math::{
    Color3f, Color4f, Mat4, Vec3, gray, rgba, rotate, translate, vec3,
};

use super::gl::{
    Cap, Command, DepthFunc, Face, Hint, HintMode, LightId, LightModel,
    LightParam, LightPos, MaterialParam, MatrixMode, Primitive, ShadeModel,
    Viewport,
};
use super::light::{Light, Material};

/// The state of a fixed-function rendering context.
///
/// Every context implementation feeds its commands through
/// [`exec`][Self::exec], so that transforms, lights, and materials behave
/// identically whether the commands are recorded or rasterized. Clearing and
/// vertex processing are left to the context itself.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// The matrix that transform commands modify.
    pub matrix_mode: MatrixMode,
    /// View-to-clip transform.
    pub projection: Mat4,
    /// Model-to-view transform.
    pub modelview: Mat4,
    pub viewport: Viewport,
    pub clear_color: Color4f,
    pub clear_depth: f32,
    pub depth_func: DepthFunc,
    pub shade_model: ShadeModel,
    /// Enabled capabilities, one bit per [`Cap`].
    caps: u16,
    hints: [HintMode; 3],
    /// Light sources, with positions in view space.
    pub lights: [Light; LightId::COUNT],
    pub light_model: LightModelState,
    /// Front and back face materials.
    pub materials: [Material; 2],
    /// Color given to subsequent vertices.
    pub color: Color3f,
    /// Normal given to subsequent vertices.
    pub normal: Vec3,
    /// The primitive being assembled, if inside begin–end.
    pub primitive: Option<Primitive>,
}

/// Global lighting parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightModelState {
    pub ambient: Color4f,
    pub two_side: bool,
}

impl State {
    /// Returns a state with the fixed-function defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `cmd` to `self`.
    ///
    /// Commands that only make sense to a particular context, such as
    /// clearing or emitting vertices, only update the state they imply.
    pub fn exec(&mut self, cmd: &Command) {
        match *cmd {
            Command::ClearColor(c) => self.clear_color = c,
            Command::ClearDepth(d) => self.clear_depth = d.clamp(0.0, 1.0),
            Command::Clear(_) => {}
            Command::Viewport(vp) => self.viewport = vp,
            Command::MatrixMode(m) => self.matrix_mode = m,
            Command::LoadIdentity => *self.matrix_mut() = Mat4::IDENTITY,
            Command::Translate(t) => self.mul_matrix(&translate(t)),
            Command::Rotate(a, axis) => self.mul_matrix(&rotate(a, axis)),
            Command::Frustum(f) => self.mul_matrix(&f.matrix()),
            Command::Enable(cap) => self.caps |= cap_bit(cap),
            Command::Disable(cap) => self.caps &= !cap_bit(cap),
            Command::Hint(target, mode) => self.hints[target as usize] = mode,
            Command::ShadeModel(m) => self.shade_model = m,
            Command::DepthFunc(f) => self.depth_func = f,
            Command::Light(id, p) => self.set_light(id, p),
            Command::LightModel(LightModel::Ambient(c)) => {
                self.light_model.ambient = c
            }
            Command::LightModel(LightModel::TwoSide(b)) => {
                self.light_model.two_side = b
            }
            Command::Material(face, p) => self.set_material(face, p),
            Command::Begin(prim) => {
                if let Some(open) = self.primitive {
                    warn!("begin {prim:?} inside {open:?}, ignored");
                } else {
                    self.primitive = Some(prim);
                }
            }
            Command::End => {
                if self.primitive.take().is_none() {
                    warn!("end without begin, ignored");
                }
            }
            Command::Color(c) => self.color = c,
            Command::Normal(n) => self.normal = n,
            Command::Vertex(_) => {
                if self.primitive.is_none() {
                    warn!("vertex outside begin–end, ignored");
                }
            }
        }
    }

    /// Returns whether `cap` is enabled.
    pub fn is_enabled(&self, cap: Cap) -> bool {
        self.caps & cap_bit(cap) != 0
    }

    /// Returns the current mode of the given hint.
    pub fn hint(&self, target: Hint) -> HintMode {
        self.hints[target as usize]
    }

    /// Returns the material used for front faces, or back faces if
    /// `back` is true.
    pub fn material(&self, back: bool) -> &Material {
        &self.materials[back as usize]
    }

    /// Returns the matrix selected by the current matrix mode.
    pub fn matrix(&self) -> &Mat4 {
        match self.matrix_mode {
            MatrixMode::Projection => &self.projection,
            MatrixMode::ModelView => &self.modelview,
        }
    }

    fn matrix_mut(&mut self) -> &mut Mat4 {
        match self.matrix_mode {
            MatrixMode::Projection => &mut self.projection,
            MatrixMode::ModelView => &mut self.modelview,
        }
    }

    /// Post-multiplies the current matrix by `m`.
    fn mul_matrix(&mut self, m: &Mat4) {
        let cur = self.matrix_mut();
        *cur = cur.compose(m);
    }

    fn set_light(&mut self, id: LightId, p: LightParam) {
        let light = &mut self.lights[id.index()];
        match p {
            LightParam::Ambient(c) => light.ambient = c,
            LightParam::Diffuse(c) => light.diffuse = c,
            LightParam::Specular(c) => light.specular = c,
            // Positions are stored in view space, as of the time of the call
            LightParam::Position(LightPos::Directional(d)) => {
                light.pos = LightPos::Directional(self.modelview.apply_vec(&d))
            }
            LightParam::Position(LightPos::Point(p)) => {
                light.pos = LightPos::Point(self.modelview.apply_pt(&p))
            }
        }
    }

    fn set_material(&mut self, face: Face, p: MaterialParam) {
        let sides = [face.front(), face.back()];
        for (mat, _) in self.materials.iter_mut().zip(sides).filter(|s| s.1) {
            match p {
                MaterialParam::Ambient(c) => mat.ambient = c,
                MaterialParam::Diffuse(c) => mat.diffuse = c,
                MaterialParam::Specular(c) => mat.specular = c,
                MaterialParam::Shininess(s) => {
                    mat.shininess = s.clamp(0.0, 128.0)
                }
            }
        }
    }
}

fn cap_bit(cap: Cap) -> u16 {
    let i = match cap {
        Cap::DepthTest => 0,
        Cap::Lighting => 1,
        Cap::ColorMaterial => 2,
        Cap::LineSmooth => 3,
        Cap::PolygonSmooth => 4,
        Cap::CullFace => 5,
        Cap::Light(id) => 8 + id.index(),
    };
    1 << i
}

impl Default for State {
    /// Returns the initial state of a fixed-function context.
    ///
    /// Notably:
    /// * Both matrices are the identity and the modelview matrix is selected.
    /// * Clear color is transparent black and clear depth 1.0.
    /// * All capabilities are disabled.
    /// * Light 0 is white, other lights black; all point down −z.
    /// * Current color is white and current normal +z.
    fn default() -> Self {
        let black = rgba(0.0, 0.0, 0.0, 1.0);
        let white = rgba(1.0, 1.0, 1.0, 1.0);
        let mut lights = [Light {
            ambient: black,
            diffuse: black,
            specular: black,
            pos: LightPos::Directional(vec3(0.0, 0.0, 1.0)),
        }; LightId::COUNT];
        lights[0].diffuse = white;
        lights[0].specular = white;

        let material = Material {
            ambient: rgba(0.2, 0.2, 0.2, 1.0),
            diffuse: rgba(0.8, 0.8, 0.8, 1.0),
            specular: black,
            shininess: 0.0,
        };
        Self {
            matrix_mode: MatrixMode::ModelView,
            projection: Mat4::IDENTITY,
            modelview: Mat4::IDENTITY,
            viewport: Viewport::default(),
            clear_color: rgba(0.0, 0.0, 0.0, 0.0),
            clear_depth: 1.0,
            depth_func: DepthFunc::Less,
            shade_model: ShadeModel::Smooth,
            caps: 0,
            hints: [HintMode::DontCare; 3],
            lights,
            light_model: LightModelState {
                ambient: rgba(0.2, 0.2, 0.2, 1.0),
                two_side: false,
            },
            materials: [material; 2],
            color: gray(1.0),
            normal: vec3(0.0, 0.0, 1.0),
            primitive: None,
        }
    }
}
