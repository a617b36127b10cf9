use std::borrow::Cow;

/// A specialized [`IdentityError`] enum of this crate.
///
/// Missing fields and type mismatches are never errors; these variants cover
/// inputs that cannot be walked at all.
#[claimmap_derive::claimmap_error]
pub enum IdentityError {
    /// The path is empty or contains an empty segment.
    #[error("Malformed claim path{}: {message}", format_context(.context))]
    MalformedPath { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The traversal root is not an object.
    #[error("Invalid claim source{}: {message}", format_context(.context))]
    InvalidRoot { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal identity error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
