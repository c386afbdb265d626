pub mod obj;
pub mod stl;

pub use obj::{load_obj, parse_obj, ObjVertex};
pub use stl::{load_stl, parse_stl, StlMesh};
