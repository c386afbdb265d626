use crate::core::error::GlError;

/// Drains the GL error queue, logging every pending error and returning the first one.
pub fn gl_error_check() -> Result<(), GlError> {
    let mut first = None;

    loop {
        let code = unsafe { gl::GetError() };
        if code == gl::NO_ERROR {
            break;
        }

        let error = GlError::from(code);
        log::error!("{}", error);
        first.get_or_insert(error);

        // OpenGl is in an undefined state after running out of memory
        if error == GlError::OutOfMemory {
            break;
        }
    }

    match first {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
