//! Error types for the Kruskal core library.
//!
//! Defines the error enum exposed by graph construction together with stable
//! machine-readable codes and a convenient result alias.

use std::{fmt, sync::Arc};

use thiserror::Error;

/// Generates a `Copy` code enum mirroring an error enum, with `as_str`,
/// `Display`, and a `code()` accessor on the error type.
///
/// Downstream crates reuse the macro so every error surfaced by the workspace
/// carries a code in the same shape.
#[macro_export]
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while registering vertices on a
/// [`crate::KruskalGraph`].
///
/// Edges are never validated when added; unresolved endpoints are skipped at
/// computation time instead of failing.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The vertex name was already registered.
    #[error("vertex `{name}` is already registered at index {existing}")]
    DuplicateVertex {
        /// Name supplied twice.
        name: Arc<str>,
        /// Index recorded by the first registration.
        existing: usize,
    },
    /// Another vertex already owns the requested index.
    #[error("vertex index {index} is already owned by `{owner}`")]
    DuplicateVertexIndex {
        /// The contested index.
        index: usize,
        /// Name that registered the index first.
        owner: Arc<str>,
    },
    /// The requested index lies outside the vertex universe.
    #[error("vertex index {index} is out of range for {vertex_count} vertices")]
    VertexIndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of vertices the graph was created with.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The vertex name was already registered.
        DuplicateVertex => DuplicateVertex { .. } => "DUPLICATE_VERTEX",
        /// Another vertex already owns the requested index.
        DuplicateVertexIndex => DuplicateVertexIndex { .. } => "DUPLICATE_VERTEX_INDEX",
        /// The requested index lies outside the vertex universe.
        VertexIndexOutOfRange => VertexIndexOutOfRange { .. } => "VERTEX_INDEX_OUT_OF_RANGE",
    }
}

impl GraphError {
    /// Returns `true` when the error was caused by a repeated registration
    /// rather than a bounds violation.
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateVertex { .. } | Self::DuplicateVertexIndex { .. }
        )
    }
}

/// Convenient result alias for graph construction.
pub type Result<T, E = GraphError> = core::result::Result<T, E>;

/// Formats a vertex reference for diagnostics, marking unknown names.
pub(crate) struct VertexRef<'a>(pub(crate) &'a str, pub(crate) Option<usize>);

impl fmt::Display for VertexRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.1 {
            Some(index) => write!(f, "{}#{index}", self.0),
            None => write!(f, "{}#unknown", self.0),
        }
    }
}
