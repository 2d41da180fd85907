//! Light sources, materials, and render preferences.

use alloc::vec::Vec;

use log::{debug, warn};

use crate::math::{Color4f, Vec3, rgba, vec3};

use super::gl::{
    Cap, DepthFunc, Face, Gl, Hint, HintMode, LightId, LightModel, LightParam,
    LightPos, MaterialParam, ShadeModel,
};

/// A light source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub ambient: Color4f,
    pub diffuse: Color4f,
    pub specular: Color4f,
    /// Position or direction of the light, in the coordinates current
    /// when the light is set up.
    pub pos: LightPos,
}

/// Surface reflectance parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub ambient: Color4f,
    pub diffuse: Color4f,
    pub specular: Color4f,
    /// Specular exponent, in the range [0, 128].
    pub shininess: f32,
}

/// Rasterization quality and depth testing preferences.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Prefs {
    /// Whether lines are antialiased.
    pub line_smooth: bool,
    /// Quality hint for line and polygon antialiasing.
    pub smooth_hint: HintMode,
    /// Value the depth buffer is cleared to.
    pub clear_depth: f32,
    /// Depth test predicate, or `None` to disable depth testing.
    pub depth_test: Option<DepthFunc>,
    pub shade_model: ShadeModel,
    /// Quality hint for perspective-correct interpolation.
    pub perspective_hint: HintMode,
}

/// The lighting setup of a scene.
///
/// The default is two white directional lights, one front-right and one
/// back-left of the viewer and both slightly above, shining on a glossy
/// material whose ambient and diffuse colors follow the vertex color.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneLighting {
    /// Light sources, at most [`LightId::COUNT`].
    pub lights: Vec<Light>,
    /// Ambient light independent of the light sources.
    pub ambient: Color4f,
    /// Whether back faces are lit as well.
    pub two_side: bool,
    /// Front face material.
    pub material: Material,
    /// Whether the current color overrides the ambient and diffuse material
    /// colors.
    pub color_material: bool,
    pub prefs: Prefs,
}

impl Light {
    /// Returns a light shining from direction `dir`.
    pub fn directional(dir: Vec3, diffuse: Color4f) -> Self {
        Self {
            ambient: rgba(0.0, 0.0, 0.0, 1.0),
            diffuse,
            specular: diffuse,
            pos: LightPos::Directional(dir),
        }
    }

    /// Sets the ambient color.
    pub fn ambient(self, ambient: Color4f) -> Self {
        Self { ambient, ..self }
    }

    /// Sets the specular color.
    pub fn specular(self, specular: Color4f) -> Self {
        Self { specular, ..self }
    }

    /// Sets up light source `id` of `gl` and enables it.
    pub fn apply(&self, gl: &mut impl Gl, id: LightId) {
        gl.light(id, LightParam::Ambient(self.ambient));
        gl.light(id, LightParam::Diffuse(self.diffuse));
        gl.light(id, LightParam::Specular(self.specular));
        gl.light(id, LightParam::Position(self.pos));
        gl.enable(Cap::Light(id));
    }
}

impl Material {
    /// Sets up the material of `face` in `gl`.
    pub fn apply(&self, gl: &mut impl Gl, face: Face) {
        gl.material(face, MaterialParam::Ambient(self.ambient));
        gl.material(face, MaterialParam::Shininess(self.shininess));
        gl.material(face, MaterialParam::Specular(self.specular));
        gl.material(face, MaterialParam::Diffuse(self.diffuse));
    }
}

impl Prefs {
    /// Applies `self` to `gl`.
    pub fn apply(&self, gl: &mut impl Gl) {
        debug!("applying render preferences {self:?}");
        if self.line_smooth {
            gl.enable(Cap::LineSmooth);
        } else {
            gl.disable(Cap::LineSmooth);
        }
        gl.hint(Hint::LineSmooth, self.smooth_hint);
        gl.hint(Hint::PolygonSmooth, self.smooth_hint);
        gl.clear_depth(self.clear_depth);
        if let Some(f) = self.depth_test {
            gl.enable(Cap::DepthTest);
            gl.depth_func(f);
        } else {
            gl.disable(Cap::DepthTest);
        }
        gl.shade_model(self.shade_model);
        gl.hint(Hint::PerspectiveCorrection, self.perspective_hint);
    }
}

impl Default for Prefs {
    /// Returns the preferences used by the viewer:
    /// * smooth lines and nicest antialiasing,
    /// * depth cleared to 1.0 and tested with `LessOrEqual`,
    /// * smooth shading with nicest perspective correction.
    fn default() -> Self {
        Self {
            line_smooth: true,
            smooth_hint: HintMode::Nicest,
            clear_depth: 1.0,
            depth_test: Some(DepthFunc::LessOrEqual),
            shade_model: ShadeModel::Smooth,
            perspective_hint: HintMode::Nicest,
        }
    }
}

impl SceneLighting {
    /// Returns the default lighting setup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the light sources.
    pub fn lights(self, lights: impl IntoIterator<Item = Light>) -> Self {
        let lights = lights.into_iter().collect();
        Self { lights, ..self }
    }

    /// Sets the front face material.
    pub fn material(self, material: Material) -> Self {
        Self { material, ..self }
    }

    /// Sets the render preferences.
    pub fn prefs(self, prefs: Prefs) -> Self {
        Self { prefs, ..self }
    }

    /// Sets up the lights, material, and render preferences of `gl`.
    ///
    /// Light positions are interpreted in the coordinates current at the
    /// time of the call; with an identity modelview matrix the lights stay
    /// fixed relative to the viewer. Applying the same lighting again
    /// leaves `gl` in the same state.
    pub fn apply(&self, gl: &mut impl Gl) {
        let n = self.lights.len();
        if n > LightId::COUNT {
            warn!(
                "{n} lights given but only {} supported, ignoring the rest",
                LightId::COUNT
            );
        }
        let n = n.min(LightId::COUNT);
        debug!("setting up scene lighting with {n} lights");

        for (i, light) in (0..LightId::COUNT as u8).zip(&self.lights) {
            light.apply(gl, LightId::new(i));
        }
        gl.light_model(LightModel::TwoSide(self.two_side));
        gl.light_model(LightModel::Ambient(self.ambient));
        gl.enable(Cap::Lighting);

        self.material.apply(gl, Face::Front);
        if self.color_material {
            gl.enable(Cap::ColorMaterial);
        } else {
            gl.disable(Cap::ColorMaterial);
        }
        self.prefs.apply(gl);
    }
}

impl Default for SceneLighting {
    fn default() -> Self {
        let white = rgba(1.0, 1.0, 1.0, 0.0);
        let ambient = rgba(0.1, 0.1, 0.1, 1.0);
        Self {
            lights: [vec3(1.0, 0.5, 1.0), vec3(-1.0, 0.5, -1.0)]
                .map(|dir| Light::directional(dir, white).ambient(ambient))
                .to_vec(),
            ambient: rgba(0.0, 0.0, 0.0, 0.0),
            two_side: false,
            material: Material {
                ambient: rgba(0.0, 0.0, 0.0, 1.0),
                diffuse: rgba(1.0, 0.0, 0.0, 0.0),
                specular: white,
                shininess: 40.0,
            },
            color_material: true,
            prefs: Prefs::default(),
        }
    }
}

/// Sets up the default [`SceneLighting`] of `gl`: two white directional
/// lights, a glossy red material overridden by vertex colors, smooth
/// shading, and depth testing.
///
/// Applies the default [`Prefs`] once as part of the setup.
pub fn init_scene_lighting(gl: &mut impl Gl) {
    SceneLighting::default().apply(gl);
}

/// Applies the default render [`Prefs`] to `gl`.
pub fn set_prefs(gl: &mut impl Gl) {
    Prefs::default().apply(gl);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Command, Recorder};

    #[test]
    fn scene_lighting_state() {
        let mut gl = Recorder::new();
        init_scene_lighting(&mut gl);
        let st = gl.state();

        assert!(st.is_enabled(Cap::Lighting));
        assert!(st.is_enabled(Cap::Light(LightId::new(0))));
        assert!(st.is_enabled(Cap::Light(LightId::new(1))));
        assert!(!st.is_enabled(Cap::Light(LightId::new(2))));
        assert!(st.is_enabled(Cap::ColorMaterial));
        assert!(st.is_enabled(Cap::DepthTest));
        assert_eq!(st.depth_func, DepthFunc::LessOrEqual);
        assert_eq!(st.shade_model, ShadeModel::Smooth);

        assert_eq!(
            st.lights[1].pos,
            LightPos::Directional(vec3(-1.0, 0.5, -1.0))
        );
        assert_eq!(st.lights[0].ambient, rgba(0.1, 0.1, 0.1, 1.0));

        let front = st.material(false);
        assert_eq!(front.shininess, 40.0);
        assert_eq!(front.diffuse, rgba(1.0, 0.0, 0.0, 0.0));
        assert_eq!(front.specular, rgba(1.0, 1.0, 1.0, 0.0));
        assert!(!st.light_model.two_side);
    }

    #[test]
    fn init_is_idempotent() {
        let mut gl = Recorder::new();
        init_scene_lighting(&mut gl);
        let first = gl.take();
        let lights = gl.state().lights;
        let materials = gl.state().materials;

        init_scene_lighting(&mut gl);
        assert_eq!(gl.commands(), first);
        assert_eq!(gl.state().lights, lights);
        assert_eq!(gl.state().materials, materials);
    }

    #[test]
    fn prefs_applied_once() {
        let mut gl = Recorder::new();
        init_scene_lighting(&mut gl);
        let n = gl
            .commands()
            .iter()
            .filter(|&c| *c == Command::Enable(Cap::LineSmooth))
            .count();
        assert_eq!(n, 1);
    }

    #[test]
    fn prefs_without_depth_test() {
        let mut gl = Recorder::new();
        gl.enable(Cap::DepthTest);
        Prefs { depth_test: None, ..Prefs::default() }.apply(&mut gl);
        assert!(!gl.state().is_enabled(Cap::DepthTest));
        assert_eq!(gl.state().clear_depth, 1.0);
    }

    #[test]
    fn extra_lights_are_ignored() {
        let light = Light::directional(Vec3::Z, rgba(1.0, 1.0, 1.0, 1.0));
        let mut gl = Recorder::new();
        SceneLighting::new()
            .lights([light; 10])
            .apply(&mut gl);

        let n = gl
            .commands()
            .iter()
            .filter(|c| matches!(c, Command::Enable(Cap::Light(_))))
            .count();
        assert_eq!(n, LightId::COUNT);
    }
}
