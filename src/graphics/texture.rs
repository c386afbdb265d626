use std::ffi::c_void;
use std::path::Path;

use gl::types::*;
use image::GenericImageView;

use crate::core::error::TextureError;

pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub texture_id: GLuint,
    pub slot: u32,
}

/// Reorders RGBA rows bottom-up, the way GL expects texel data.
fn flip_rows(data: Vec<u8>, width: u32) -> Vec<u8> {
    let row = (width as usize * 4).max(1);
    data.chunks(row).rev().flat_map(|r| r.iter()).copied().collect()
}

impl Texture {
    pub fn load<P: AsRef<Path>>(path: P, slot: u32) -> Result<Texture, TextureError> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|e| TextureError::LoadTextureFailed(path.to_path_buf(), e.to_string()))?;
        let dimensions = image.dimensions();
        let flipped_data = flip_rows(image.to_rgba8().into_raw(), dimensions.0);

        let mut id = 0;
        unsafe {
            gl::GenTextures(1, &mut id);

            gl::ActiveTexture(gl::TEXTURE0 + slot);
            gl::BindTexture(gl::TEXTURE_2D, id);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as _);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as _);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST_MIPMAP_LINEAR as _);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as _);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as _,
                dimensions.0 as _,
                dimensions.1 as _,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                flipped_data.as_ptr() as *const c_void,
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }

        log::info!(
            "loaded texture {} ({}x{}) into slot {}",
            path.display(),
            dimensions.0,
            dimensions.1,
            slot
        );

        Ok(Texture {
            texture_id: id,
            width: dimensions.0,
            height: dimensions.1,
            slot,
        })
    }

    pub fn bind(&self) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + self.slot);
            gl::BindTexture(gl::TEXTURE_2D, self.texture_id);
        }
    }

    pub fn unbind(&self) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + self.slot);
            gl::BindTexture(gl::TEXTURE_2D, 0);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.texture_id);
        }
    }
}
