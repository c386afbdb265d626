use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, ron::Error),
    Invalid(PathBuf, String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "can't access config {}: {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "can't parse config {}: {}", path.display(), e)
            }
            ConfigError::Invalid(path, reason) => {
                write!(f, "invalid config {}: {}", path.display(), reason)
            }
        }
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl Display for ShaderStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "vertex"),
            ShaderStage::Fragment => write!(f, "fragment"),
        }
    }
}

#[derive(Debug)]
pub enum ShaderError {
    InvalidSource(ShaderStage),
    Compile { stage: ShaderStage, log: String },
    Link(String),
}

impl Display for ShaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderError::InvalidSource(stage) => {
                write!(f, "{} shader source contains a nul byte", stage)
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log)
            }
            ShaderError::Link(log) => write!(f, "shader program link failed: {}", log),
        }
    }
}

impl Error for ShaderError {}

#[derive(Debug)]
pub enum TextureError {
    LoadTextureFailed(PathBuf, String),
}

impl Display for TextureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TextureError::LoadTextureFailed(path, reason) => {
                write!(f, "can't load texture {}: {}", path.display(), reason)
            }
        }
    }
}

impl Error for TextureError {}

#[derive(Debug)]
pub enum ModelError {
    Io(PathBuf, std::io::Error),
    Parse { line: usize, message: String },
    IndexOutOfRange { line: usize, index: i64, len: usize },
    UnexpectedEof,
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Io(path, e) => write!(f, "can't open model {}: {}", path.display(), e),
            ModelError::Parse { line, message } => write!(f, "line {}: {}", line, message),
            ModelError::IndexOutOfRange { line, index, len } => write!(
                f,
                "line {}: index {} out of range (have {} elements)",
                line, index, len
            ),
            ModelError::UnexpectedEof => write!(f, "model data ends unexpectedly"),
        }
    }
}

impl Error for ModelError {}

#[derive(Debug)]
pub enum WindowError {
    InitFailed(String),
    CreateFailed { title: String, width: u32, height: u32 },
}

impl Display for WindowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::InitFailed(reason) => write!(f, "can't initialize GLFW: {}", reason),
            WindowError::CreateFailed {
                title,
                width,
                height,
            } => write!(f, "can't create window {} with size {}x{}", title, width, height),
        }
    }
}

impl Error for WindowError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    InvalidFramebufferOperation,
    OutOfMemory,
    Unknown(u32),
}

impl From<u32> for GlError {
    fn from(code: u32) -> Self {
        match code {
            gl::INVALID_ENUM => GlError::InvalidEnum,
            gl::INVALID_VALUE => GlError::InvalidValue,
            gl::INVALID_OPERATION => GlError::InvalidOperation,
            gl::INVALID_FRAMEBUFFER_OPERATION => GlError::InvalidFramebufferOperation,
            gl::OUT_OF_MEMORY => GlError::OutOfMemory,
            e => GlError::Unknown(e),
        }
    }
}

impl Display for GlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GlError::InvalidEnum => write!(f, "OpenGl has found an invalid enum!"),
            GlError::InvalidValue => write!(f, "OpenGl has found an invalid value!"),
            GlError::InvalidOperation => write!(f, "OpenGl has encountered an invalid operation!"),
            GlError::InvalidFramebufferOperation => {
                write!(f, "OpenGl has encountered an invalid framebuffer operation!")
            }
            GlError::OutOfMemory => write!(f, "OpenGl is out of memory and in an invalid state"),
            GlError::Unknown(e) => write!(f, "unexpected error: {}", e),
        }
    }
}

impl Error for GlError {}

#[derive(Debug)]
pub enum EngineError {
    Config(ConfigError),
    Shader(ShaderError),
    Texture(TextureError),
    Model(ModelError),
    Window(WindowError),
    Gl(GlError),
}

impl Display for EngineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Config(e) => Display::fmt(e, f),
            EngineError::Shader(e) => Display::fmt(e, f),
            EngineError::Texture(e) => Display::fmt(e, f),
            EngineError::Model(e) => Display::fmt(e, f),
            EngineError::Window(e) => Display::fmt(e, f),
            EngineError::Gl(e) => Display::fmt(e, f),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EngineError::Config(e) => Some(e),
            EngineError::Shader(e) => Some(e),
            EngineError::Texture(e) => Some(e),
            EngineError::Model(e) => Some(e),
            EngineError::Window(e) => Some(e),
            EngineError::Gl(e) => Some(e),
        }
    }
}

macro_rules! engine_error_from {
    ($($source:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$source> for EngineError {
                fn from(e: $source) -> Self {
                    EngineError::$variant(e)
                }
            }
        )*
    };
}

engine_error_from! {
    ConfigError => Config,
    ShaderError => Shader,
    TextureError => Texture,
    ModelError => Model,
    WindowError => Window,
    GlError => Gl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gl_codes_map_to_variants() {
        assert_eq!(GlError::from(gl::INVALID_VALUE), GlError::InvalidValue);
        assert_eq!(GlError::from(gl::OUT_OF_MEMORY), GlError::OutOfMemory);
        assert_eq!(GlError::from(0x1234), GlError::Unknown(0x1234));
    }

    #[test]
    fn gl_errors_propagate_into_engine_error() {
        fn upload() -> Result<(), EngineError> {
            Err::<(), _>(GlError::InvalidOperation)?;
            Ok(())
        }

        match upload() {
            Err(EngineError::Gl(GlError::InvalidOperation)) => {}
            other => panic!("expected a GL error, got {:?}", other),
        }
    }

    #[test]
    fn engine_error_keeps_source_message() {
        let err: EngineError = ModelError::Parse {
            line: 3,
            message: "bad float".to_string(),
        }
        .into();

        assert_eq!(err.to_string(), "line 3: bad float");
        assert!(err.source().is_some());
    }
}
