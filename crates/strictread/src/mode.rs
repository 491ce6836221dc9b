//! The mode matrix.
//!
//! A reader is parameterized by three independent switches, fixed at compile
//! time through a marker type:
//!
//! | mode                   | judge | identical | interactive |
//! |------------------------|-------|-----------|-------------|
//! | [`Validate`]           | yes   | yes       | no          |
//! | [`Identical`]          | no    | yes       | no          |
//! | [`Standard`]           | no    | no        | no          |
//! | [`IdenticalInteractive`] | no  | yes       | yes         |
//! | [`StandardInteractive`]  | no  | no        | yes         |
//!
//! [`Mode`] is sealed, so these five are the only configurations that can be
//! constructed.

mod private {
    pub trait Sealed {}
}

/// Compile-time configuration of a [`Reader`](crate::Reader).
pub trait Mode: private::Sealed {
    /// Violations are the judge's own bug and end in an internal error.
    const JUDGE: bool;
    /// Separators must match byte for byte.
    const IDENTICAL: bool;
    /// Bytes are fetched one at a time from a live source.
    const INTERACTIVE: bool;
}

macro_rules! modes {
    ($($(#[$doc:meta])* $name:ident => ($judge:expr, $identical:expr, $interactive:expr);)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $name {}

            impl private::Sealed for $name {}

            impl Mode for $name {
                const JUDGE: bool = $judge;
                const IDENTICAL: bool = $identical;
                const INTERACTIVE: bool = $interactive;
            }
        )*
    };
}

modes! {
    /// Input validator: exact, preloaded, and every violation is internal.
    Validate => (true, true, false);
    /// Exact checker reader over a preloaded stream.
    Identical => (false, true, false);
    /// Lenient checker reader over a preloaded stream.
    Standard => (false, false, false);
    /// Exact interactor reader over a live pipe.
    IdenticalInteractive => (false, true, true);
    /// Lenient interactor reader over a live pipe.
    StandardInteractive => (false, false, true);
}
