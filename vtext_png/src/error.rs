// Copyright 2026 the Vtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

type Source = Box<dyn core::error::Error + Send + Sync + 'static>;

/// Error returned when an image cannot be written.
///
/// Carries a non-exhaustive [`ErrorKind`] and, for I/O and encoder failures, the underlying
/// cause, available through [`core::error::Error::source`].
#[derive(Debug)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// Human readable detail for errors raised by this crate.
    detail: Option<String>,

    /// The failure reported by the writer or the encoder.
    source: Option<Source>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub(crate) fn invalid_image(detail: String) -> Self {
        Self {
            kind: ErrorKind::InvalidImage,
            detail: Some(detail),
            source: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let what = match self.kind {
            ErrorKind::Io => "failed to write PNG data",
            ErrorKind::Encoding => "failed to encode PNG",
            ErrorKind::InvalidImage => "invalid image",
        };
        match (&self.detail, &self.source) {
            (Some(detail), _) => write!(f, "{what}: {detail}"),
            (None, Some(source)) => write!(f, "{what}: {source}"),
            (None, None) => f.write_str(what),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn core::error::Error + 'static))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self {
            kind: ErrorKind::Io,
            detail: None,
            source: Some(Box::new(err)),
        }
    }
}

impl From<png::EncodingError> for Error {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(err) => err.into(),
            err => Self {
                kind: ErrorKind::Encoding,
                detail: None,
                source: Some(Box::new(err)),
            },
        }
    }
}

/// The non-exhaustive category of an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The destination failed to accept the encoded bytes.
    Io,

    /// The encoder rejected the image or its parameters.
    Encoding,

    /// The pixel buffer does not describe a valid image.
    InvalidImage,
}
