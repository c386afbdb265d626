use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::geometry::{ConeParams, CylinderParams, SpiralParams, TorusParams, TrapezoidParams};
use crate::scene::complex_model::ModelData;

pub const DEFAULT_CONFIG_PATH: &str = "resources/config.ron";

const BUNDLED_CONFIG: &str = include_str!("cache/config.ron");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraOptions {
    pub position: [f32; 3],
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub speed: f32,
    pub fast_speed: f32,
    pub sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        CameraOptions {
            position: [0.0, 0.0, 2.0],
            fov_deg: 45.0,
            near: 0.1,
            far: 100.0,
            speed: 0.1,
            fast_speed: 0.4,
            sensitivity: 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightOptions {
    pub position: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for LightOptions {
    fn default() -> Self {
        LightOptions {
            position: [1.0, 1.0, 1.0],
            intensity: 1.0,
            color: [1.0, 1.0, 1.0],
            constant: 1.0,
            linear: 0.045,
            quadratic: 0.0075,
        }
    }
}

/// Rotation is in degrees, applied X then Y then Z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub scale: [f32; 3],
    pub rotation: [f32; 3],
    pub location: [f32; 3],
}

impl Default for TransformOptions {
    fn default() -> Self {
        TransformOptions {
            scale: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0],
            location: [0.0, 0.0, 0.0],
        }
    }
}

/// Continuous rotation, `speed` in degrees per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinOptions {
    pub axis: [f32; 3],
    pub speed: f32,
}

impl Default for SpinOptions {
    fn default() -> Self {
        SpinOptions {
            axis: [0.0, 1.0, 0.0],
            speed: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeKind {
    Cube,
    TriangleCube,
    Cone(ConeParams),
    Cylinder(CylinderParams),
    Torus(TorusParams),
    Trapezoid(TrapezoidParams),
    Spiral(SpiralParams),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescription {
    pub kind: ShapeKind,
    #[serde(default)]
    pub transform: TransformOptions,
    #[serde(default)]
    pub spin: Option<SpinOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModelSource {
    Obj { path: String, texture: String },
    Stl { path: String },
    Complex { parts: Vec<ModelData> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescription {
    pub source: ModelSource,
    #[serde(default)]
    pub transform: TransformOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub vsync: bool,
    pub window_size: (u32, u32),
    pub title: String,
    pub background_color: [f32; 4],
    pub log_filter: Option<String>,
    pub camera: CameraOptions,
    pub light: LightOptions,
    pub shapes: Vec<ShapeDescription>,
    pub models: Vec<ModelDescription>,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            vsync: true,
            window_size: (1024, 768),
            title: "SimpleEngine".to_string(),
            background_color: [0.271, 0.232, 0.451, 1.0],
            log_filter: None,
            camera: CameraOptions::default(),
            light: LightOptions::default(),
            shapes: Vec::new(),
            models: Vec::new(),
        }
    }
}

impl EngineOptions {
    pub fn from_ron_str(source: &str, origin: &Path) -> Result<EngineOptions, ConfigError> {
        let options: EngineOptions =
            ron::from_str(source).map_err(|e| ConfigError::Parse(origin.to_path_buf(), e))?;
        options
            .validate()
            .map_err(|reason| ConfigError::Invalid(origin.to_path_buf(), reason))?;
        Ok(options)
    }

    /// Rejects camera clip planes and field of view that can't build a projection.
    pub fn validate(&self) -> Result<(), String> {
        let camera = &self.camera;
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(format!(
                "camera needs 0 < near < far, got near {} and far {}",
                camera.near, camera.far
            ));
        }
        if !(camera.fov_deg > 0.0 && camera.fov_deg < 180.0) {
            return Err(format!(
                "camera fov_deg must be between 0 and 180, got {}",
                camera.fov_deg
            ));
        }
        Ok(())
    }

    /// Options shipped with the binary, used to seed a missing config file.
    pub fn bundled() -> Result<EngineOptions, ConfigError> {
        Self::from_ron_str(BUNDLED_CONFIG, Path::new("<bundled config.ron>"))
    }

    /// Reads `path`, or writes the bundled config there first when it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<EngineOptions, ConfigError> {
        let path = path.as_ref();

        if path.exists() {
            let source =
                fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
            log::info!("Loading configuration from {}", path.display());
            return Self::from_ron_str(&source, path);
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io(parent.to_path_buf(), e))?;
        }
        fs::write(path, BUNDLED_CONFIG).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        log::info!("Wrote default configuration to {}", path.display());

        Self::from_ron_str(BUNDLED_CONFIG, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "simple-engine-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn bundled_config_parses() {
        let options = EngineOptions::bundled().unwrap();
        let defaults = EngineOptions::default();

        assert_eq!(options.window_size, defaults.window_size);
        assert_eq!(options.title, defaults.title);
        assert_eq!(options.background_color, defaults.background_color);
        assert_eq!(options.camera, defaults.camera);
        assert_eq!(options.light, defaults.light);
        assert!(!options.shapes.is_empty());
    }

    #[test]
    fn bundled_config_lists_every_primitive() {
        let options = EngineOptions::bundled().unwrap();
        let has = |pred: fn(&ShapeKind) -> bool| options.shapes.iter().any(|s| pred(&s.kind));

        assert!(has(|k| matches!(k, ShapeKind::Cube)));
        assert!(has(|k| matches!(k, ShapeKind::Cone(_))));
        assert!(has(|k| matches!(k, ShapeKind::Cylinder(_))));
        assert!(has(|k| matches!(k, ShapeKind::Torus(_))));
        assert!(has(|k| matches!(k, ShapeKind::Trapezoid(_))));
        assert!(has(|k| matches!(k, ShapeKind::Spiral(_))));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let options =
            EngineOptions::from_ron_str("(title: \"demo\")", Path::new("inline")).unwrap();

        assert_eq!(options.title, "demo");
        assert_eq!(options.window_size, (1024, 768));
        assert!(options.shapes.is_empty());
    }

    #[test]
    fn shapes_and_models_parse() {
        let source = r#"(
            shapes: [
                (kind: Cone((radius: 2.0)), spin: Some((speed: 90.0))),
                (kind: Cube, transform: (location: (1.0, 0.0, 0.0))),
            ],
            models: [
                (source: Stl(path: "part.stl")),
                (source: Complex(parts: [(model_path: "a.obj", texture_path: "a.png")])),
            ],
        )"#;
        let options = EngineOptions::from_ron_str(source, Path::new("inline")).unwrap();

        match &options.shapes[0].kind {
            ShapeKind::Cone(params) => {
                assert_eq!(params.radius, 2.0);
                assert_eq!(params.segments, ConeParams::default().segments);
            }
            other => panic!("unexpected shape {:?}", other),
        }
        assert_eq!(options.shapes[0].spin.as_ref().map(|s| s.axis), Some([0.0, 1.0, 0.0]));
        assert_eq!(options.shapes[1].transform.location, [1.0, 0.0, 0.0]);
        assert_eq!(options.shapes[1].transform.scale, [1.0, 1.0, 1.0]);
        assert!(matches!(options.models[1].source, ModelSource::Complex { ref parts } if parts.len() == 1));
    }

    #[test]
    fn parse_error_names_the_file() {
        match EngineOptions::from_ron_str("(window_size: oops)", Path::new("broken.ron")) {
            Err(ConfigError::Parse(path, _)) => assert_eq!(path, Path::new("broken.ron")),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn collapsed_clip_planes_are_rejected() {
        let source = "(camera: (near: 1.0, far: 1.0))";
        match EngineOptions::from_ron_str(source, Path::new("planes.ron")) {
            Err(ConfigError::Invalid(path, _)) => assert_eq!(path, Path::new("planes.ron")),
            other => panic!("expected an invalid config, got {:?}", other),
        }

        let inverted = "(camera: (near: 10.0, far: 1.0))";
        assert!(EngineOptions::from_ron_str(inverted, Path::new("inline")).is_err());
    }

    #[test]
    fn flat_field_of_view_is_rejected() {
        let source = "(camera: (fov_deg: 0.0))";
        assert!(matches!(
            EngineOptions::from_ron_str(source, Path::new("inline")),
            Err(ConfigError::Invalid(..))
        ));
    }

    #[test]
    fn load_writes_missing_config() {
        let dir = scratch_dir("write");
        let path = dir.join("nested").join("config.ron");

        let written = EngineOptions::load(&path).unwrap();
        assert!(path.exists());

        let reread = EngineOptions::load(&path).unwrap();
        assert_eq!(written, reread);

        let _ = fs::remove_dir_all(&dir);
    }
}
