//! STL reader for both the ASCII and the binary flavour.
//!
//! Vertices shared between facets are merged, so `tris` indexes into a compact `coords` list.

use std::collections::HashMap;
use std::path::Path;

use crate::core::error::ModelError;

const BINARY_HEADER: usize = 80;
const BINARY_TRIANGLE: usize = 50;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StlMesh {
    /// Unique vertex positions, xyz interleaved.
    pub coords: Vec<f32>,
    /// One normal per triangle, xyz interleaved.
    pub normals: Vec<f32>,
    /// Three indices into `coords` (in vertices, not floats) per triangle.
    pub tris: Vec<u32>,
    /// First triangle of every solid, followed by the total triangle count.
    pub solids: Vec<u32>,
}

impl StlMesh {
    pub fn vertex_count(&self) -> usize {
        self.coords.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.tris.len() / 3
    }
}

#[derive(Default)]
struct StlBuilder {
    mesh: StlMesh,
    lookup: HashMap<[u32; 3], u32>,
}

impl StlBuilder {
    fn start_solid(&mut self) {
        let start = self.mesh.triangle_count() as u32;
        if self.mesh.solids.last() != Some(&start) {
            self.mesh.solids.push(start);
        }
    }

    fn push_triangle(&mut self, normal: [f32; 3], corners: [[f32; 3]; 3]) {
        self.mesh.normals.extend_from_slice(&normal);
        for corner in corners {
            let index = self.vertex_index(corner);
            self.mesh.tris.push(index);
        }
    }

    fn vertex_index(&mut self, position: [f32; 3]) -> u32 {
        // +0.0 folds -0.0 so both hash the same
        let key = [
            (position[0] + 0.0).to_bits(),
            (position[1] + 0.0).to_bits(),
            (position[2] + 0.0).to_bits(),
        ];
        let coords = &mut self.mesh.coords;
        *self.lookup.entry(key).or_insert_with(|| {
            let index = (coords.len() / 3) as u32;
            coords.extend_from_slice(&position);
            index
        })
    }

    fn finish(mut self) -> StlMesh {
        if self.mesh.solids.is_empty() {
            self.mesh.solids.push(0);
        }
        let total = self.mesh.triangle_count() as u32;
        self.mesh.solids.push(total);
        self.mesh
    }
}

pub fn load_stl<P: AsRef<Path>>(path: P) -> Result<StlMesh, ModelError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| ModelError::Io(path.to_path_buf(), e))?;
    let mesh = parse_stl(&bytes)?;
    log::info!(
        "Loaded {} ({} triangles, {} unique vertices)",
        path.display(),
        mesh.triangle_count(),
        mesh.vertex_count()
    );
    Ok(mesh)
}

pub fn parse_stl(bytes: &[u8]) -> Result<StlMesh, ModelError> {
    if is_binary(bytes) || !skip_whitespace(bytes).starts_with(b"solid") {
        parse_binary(bytes)
    } else {
        let text = std::str::from_utf8(bytes).map_err(|e| ModelError::Parse {
            line: 0,
            message: e.to_string(),
        })?;
        parse_ascii(text)
    }
}

fn binary_triangle_count(bytes: &[u8]) -> Option<usize> {
    let count = bytes.get(BINARY_HEADER..BINARY_HEADER + 4)?;
    Some(u32::from_le_bytes([count[0], count[1], count[2], count[3]]) as usize)
}

fn skip_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    &bytes[start..]
}

/// A binary file may also start with "solid"; its size is what gives it away.
fn is_binary(bytes: &[u8]) -> bool {
    match binary_triangle_count(bytes) {
        Some(count) => bytes.len() == BINARY_HEADER + 4 + count * BINARY_TRIANGLE,
        None => false,
    }
}

fn parse_binary(bytes: &[u8]) -> Result<StlMesh, ModelError> {
    let count = binary_triangle_count(bytes).ok_or(ModelError::UnexpectedEof)?;
    let body = &bytes[BINARY_HEADER + 4..];
    if body.len() < count * BINARY_TRIANGLE {
        return Err(ModelError::UnexpectedEof);
    }

    let read_vec3 = |chunk: &[u8], offset: usize| -> [f32; 3] {
        let mut v = [0.0f32; 3];
        for (i, value) in v.iter_mut().enumerate() {
            let at = offset + i * 4;
            *value = f32::from_le_bytes([chunk[at], chunk[at + 1], chunk[at + 2], chunk[at + 3]]);
        }
        v
    };

    let mut builder = StlBuilder::default();
    builder.start_solid();
    for chunk in body.chunks_exact(BINARY_TRIANGLE).take(count) {
        let normal = read_vec3(chunk, 0);
        let corners = [read_vec3(chunk, 12), read_vec3(chunk, 24), read_vec3(chunk, 36)];
        builder.push_triangle(normal, corners);
    }

    Ok(builder.finish())
}

fn parse_ascii(text: &str) -> Result<StlMesh, ModelError> {
    let mut builder = StlBuilder::default();
    let mut normal = [0.0f32; 3];
    let mut corners: Vec<[f32; 3]> = Vec::with_capacity(3);

    for (number, line) in text.lines().enumerate() {
        let line_no = number + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            Some("solid") => builder.start_solid(),
            Some("facet") => {
                if tokens.next() != Some("normal") {
                    return Err(ModelError::Parse {
                        line: line_no,
                        message: "expected 'facet normal'".to_string(),
                    });
                }
                normal = read_ascii_vec3(&mut tokens, line_no)?;
                corners.clear();
            }
            Some("vertex") => {
                if corners.len() == 3 {
                    return Err(ModelError::Parse {
                        line: line_no,
                        message: "facet has more than 3 vertices".to_string(),
                    });
                }
                corners.push(read_ascii_vec3(&mut tokens, line_no)?);
            }
            Some("endfacet") => {
                if corners.len() != 3 {
                    return Err(ModelError::Parse {
                        line: line_no,
                        message: format!("facet has {} vertices", corners.len()),
                    });
                }
                builder.push_triangle(normal, [corners[0], corners[1], corners[2]]);
            }
            _ => {}
        }
    }

    Ok(builder.finish())
}

fn read_ascii_vec3<'a, I: Iterator<Item = &'a str>>(
    tokens: &mut I,
    line: usize,
) -> Result<[f32; 3], ModelError> {
    let mut v = [0.0f32; 3];
    for value in v.iter_mut() {
        let token = tokens.next().ok_or_else(|| ModelError::Parse {
            line,
            message: "expected 3 numbers".to_string(),
        })?;
        *value = token.parse().map_err(|_| ModelError::Parse {
            line,
            message: format!("invalid number '{}'", token),
        })?;
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "\
solid square
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 1 1 0
    endloop
  endfacet
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 1 0
      vertex 0 1 0
    endloop
  endfacet
endsolid square
";

    fn binary_stl(triangles: &[[[f32; 3]; 4]]) -> Vec<u8> {
        let mut bytes = vec![0u8; BINARY_HEADER];
        bytes[..5].copy_from_slice(b"solid");
        bytes.extend_from_slice(&(triangles.len() as u32).to_le_bytes());
        for triangle in triangles {
            for v in triangle {
                for c in v {
                    bytes.extend_from_slice(&c.to_le_bytes());
                }
            }
            bytes.extend_from_slice(&[0, 0]);
        }
        bytes
    }

    #[test]
    fn ascii_shares_vertices() {
        let mesh = parse_stl(SQUARE.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.tris, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.normals, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(mesh.solids, vec![0, 2]);
    }

    #[test]
    fn ascii_records_each_solid() {
        let two = format!("{}{}", SQUARE, SQUARE.replace("0 1 0", "0 2 0"));
        let mesh = parse_stl(two.as_bytes()).unwrap();
        assert_eq!(mesh.triangle_count(), 4);
        assert_eq!(mesh.vertex_count(), 5);
        assert_eq!(mesh.solids, vec![0, 2, 4]);
    }

    #[test]
    fn binary_starting_with_solid_is_still_binary() {
        let bytes = binary_stl(&[
            [[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]],
            [[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
        ]);
        let mesh = parse_stl(&bytes).unwrap();
        assert_eq!(mesh, parse_stl(SQUARE.as_bytes()).unwrap());
    }

    #[test]
    fn negative_zero_merges_with_zero() {
        let bytes = binary_stl(&[
            [[0.0, 0.0, 1.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            [[0.0, 0.0, 1.0], [-0.0, 0.0, -0.0], [1.0, 0.0, 0.0], [0.0, -1.0, 0.0]],
        ]);
        let mesh = parse_stl(&bytes).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn truncated_binary_fails() {
        let mut bytes = vec![0u8; BINARY_HEADER];
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&[0u8; BINARY_TRIANGLE]);

        assert!(matches!(parse_stl(&bytes), Err(ModelError::UnexpectedEof)));
        assert!(matches!(parse_stl(&[0u8; 10]), Err(ModelError::UnexpectedEof)));
    }

    #[test]
    fn facet_with_missing_vertex_fails() {
        let broken = SQUARE.replacen("      vertex 1 0 0\n", "", 1);
        match parse_stl(broken.as_bytes()) {
            Err(ModelError::Parse { line, .. }) => assert_eq!(line, 7),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
