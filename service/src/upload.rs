//! Image upload boundary.
//!
//! Every file attached to the advert form passes through [`check()`]
//! before any preview or form state is touched.

use base64::Engine as _;
use derive_more::{Display, Error as StdError};
use mime::Mime;

/// Maximum accepted size of an uploaded image: 5 MiB.
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Raw file handed over by the upload controls.
#[derive(Clone, Debug)]
pub struct FileUpload {
    /// Original name of the file.
    pub file_name: String,

    /// Declared MIME type of the file.
    pub mime: Mime,

    /// Raw contents of the file.
    pub bytes: Vec<u8>,
}

/// Error of accepting a [`FileUpload`].
#[derive(Clone, Debug, Display, StdError)]
pub enum Error {
    /// Declared MIME type is not a supported image type.
    #[display("unsupported image type: {_0}")]
    UnsupportedType(#[error(not(source))] Mime),

    /// File is larger than [`MAX_FILE_SIZE`].
    #[display("image is larger than {MAX_FILE_SIZE} bytes")]
    TooLarge,
}

/// Checks whether the provided file is accepted by the upload controls.
///
/// # Errors
///
/// Errors if the declared MIME type is not one of JPEG/PNG/GIF/WebP, or
/// the file is larger than [`MAX_FILE_SIZE`].
pub fn check(file: &FileUpload) -> Result<(), Error> {
    let supported = file.mime.type_() == mime::IMAGE
        && matches!(
            file.mime.subtype().as_str(),
            "jpeg" | "png" | "gif" | "webp"
        );
    if !supported {
        return Err(Error::UnsupportedType(file.mime.clone()));
    }
    if file.bytes.len() > MAX_FILE_SIZE {
        return Err(Error::TooLarge);
    }
    Ok(())
}

/// Renders the provided accepted file as a `data:` URI for the preview
/// renderer.
#[must_use]
pub fn preview(file: &FileUpload) -> String {
    format!(
        "data:{};base64,{}",
        file.mime,
        base64::engine::general_purpose::STANDARD.encode(&file.bytes),
    )
}
