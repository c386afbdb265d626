//! Wavefront OBJ reader producing a flat, non-indexed triangle list.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::core::error::ModelError;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ObjVertex {
    pub position: [f32; 3],
    pub texcoord: [f32; 2],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy)]
struct Corner {
    position: usize,
    texcoord: Option<usize>,
    normal: Option<usize>,
}

#[derive(Default)]
struct ObjData {
    positions: Vec<[f32; 3]>,
    texcoords: Vec<[f32; 2]>,
    normals: Vec<[f32; 3]>,
    vertices: Vec<ObjVertex>,
}

pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<Vec<ObjVertex>, ModelError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ModelError::Io(path.to_path_buf(), e))?;
    let vertices = parse_obj(BufReader::new(file))?;
    log::info!("Loaded {} ({} vertices)", path.display(), vertices.len());
    Ok(vertices)
}

pub fn parse_obj<R: BufRead>(reader: R) -> Result<Vec<ObjVertex>, ModelError> {
    let mut data = ObjData::default();

    for (number, line) in reader.lines().enumerate() {
        let line_no = number + 1;
        let line = line.map_err(|e| ModelError::Parse {
            line: line_no,
            message: e.to_string(),
        })?;

        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("v") => {
                let p = parse_floats::<3>(&mut tokens, line_no)?;
                data.positions.push(p);
            }
            Some("vt") => {
                let [u] = parse_floats::<1>(&mut tokens, line_no)?;
                let v = match tokens.next() {
                    Some(token) => parse_number::<f32>(token, line_no)?,
                    None => 0.0,
                };
                data.texcoords.push([u, v]);
            }
            Some("vn") => {
                let n = parse_floats::<3>(&mut tokens, line_no)?;
                data.normals.push(n);
            }
            Some("f") => {
                let corners = tokens
                    .map(|token| parse_corner(token, &data, line_no))
                    .collect::<Result<Vec<_>, _>>()?;
                if corners.len() < 3 {
                    return Err(ModelError::Parse {
                        line: line_no,
                        message: format!("face needs 3 corners, got {}", corners.len()),
                    });
                }

                // fan triangulation for quads and larger polygons
                for i in 1..corners.len() - 1 {
                    for corner in [corners[0], corners[i], corners[i + 1]] {
                        let vertex = data.vertex(corner);
                        data.vertices.push(vertex);
                    }
                }
            }
            _ => {}
        }
    }

    Ok(data.vertices)
}

impl ObjData {
    fn vertex(&self, corner: Corner) -> ObjVertex {
        ObjVertex {
            position: self.positions[corner.position],
            texcoord: corner.texcoord.map(|t| self.texcoords[t]).unwrap_or_default(),
            normal: corner.normal.map(|n| self.normals[n]).unwrap_or_default(),
        }
    }
}

fn parse_floats<const N: usize>(
    tokens: &mut SplitWhitespace,
    line: usize,
) -> Result<[f32; N], ModelError> {
    let mut out = [0.0f32; N];
    for value in out.iter_mut() {
        let token = tokens.next().ok_or_else(|| ModelError::Parse {
            line,
            message: format!("expected {} numbers", N),
        })?;
        *value = parse_number(token, line)?;
    }
    Ok(out)
}

fn parse_number<T: FromStr>(token: &str, line: usize) -> Result<T, ModelError> {
    token.parse::<T>().map_err(|_| ModelError::Parse {
        line,
        message: format!("invalid number '{}'", token),
    })
}

/// Resolves a 1-based (or negative, end-relative) OBJ index into a 0-based one.
fn resolve_index(token: &str, len: usize, line: usize) -> Result<usize, ModelError> {
    let index: i64 = parse_number(token, line)?;
    let resolved = if index < 0 {
        len as i64 + index
    } else {
        index - 1
    };

    if resolved < 0 || resolved >= len as i64 {
        return Err(ModelError::IndexOutOfRange { line, index, len });
    }
    Ok(resolved as usize)
}

fn parse_corner(token: &str, data: &ObjData, line: usize) -> Result<Corner, ModelError> {
    let mut parts = token.split('/');

    let position = match parts.next() {
        Some(p) if !p.is_empty() => resolve_index(p, data.positions.len(), line)?,
        _ => {
            return Err(ModelError::Parse {
                line,
                message: format!("face corner '{}' has no position", token),
            })
        }
    };

    let texcoord = match parts.next() {
        Some(t) if !t.is_empty() => Some(resolve_index(t, data.texcoords.len(), line)?),
        _ => None,
    };

    let normal = match parts.next() {
        Some(n) if !n.is_empty() => Some(resolve_index(n, data.normals.len(), line)?),
        _ => None,
    };

    Ok(Corner {
        position,
        texcoord,
        normal,
    })
}
